pub mod admin;
pub mod lifecycle;
pub mod staking;

pub use admin::*;
pub use lifecycle::*;
pub use staking::*;
