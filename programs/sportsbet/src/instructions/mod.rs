pub mod claim_winnings;
pub mod create_match;
pub mod initialize;
pub mod place_bet;
pub mod settle_match;

pub use claim_winnings::*;
pub use create_match::*;
pub use initialize::*;
pub use place_bet::*;
pub use settle_match::*;
