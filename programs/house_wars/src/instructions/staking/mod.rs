pub mod boost_view;
pub mod stake_for_house;
pub mod unstake;

pub use boost_view::*;
pub use stake_for_house::*;
pub use unstake::*;
