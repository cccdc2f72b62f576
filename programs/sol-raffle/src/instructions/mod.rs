pub mod initialize;
pub mod enter_raffle;
pub mod perform_upkeep;
pub mod select_winner;

pub use initialize::*;
pub use enter_raffle::*;
pub use perform_upkeep::*;
pub use select_winner::*;
