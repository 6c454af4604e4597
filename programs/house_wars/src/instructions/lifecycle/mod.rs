pub mod finalize_season;
pub mod prize_pool;
pub mod record_score;
pub mod season_views;
pub mod start_season;

pub use finalize_season::*;
pub use prize_pool::*;
pub use record_score::*;
pub use season_views::*;
pub use start_season::*;
