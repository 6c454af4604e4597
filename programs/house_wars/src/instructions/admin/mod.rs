pub mod authority;
pub mod initialize;
pub mod roles;
pub mod update_params;

pub use authority::*;
pub use initialize::*;
pub use roles::*;
pub use update_params::*;
