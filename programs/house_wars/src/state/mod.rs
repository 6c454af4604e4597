pub mod config;
pub mod house;
pub mod season;
pub mod stake;

pub use config::*;
pub use house::*;
pub use season::*;
pub use stake::*;
