pub mod bet;
pub mod match_account;
pub mod platform_config;

#[cfg(test)]
pub(crate) mod fixtures;

pub use bet::*;
pub use match_account::*;
pub use platform_config::*;
