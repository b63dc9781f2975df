use anchor_lang::prelude::*;

/// Highest platform fee accepted at initialization, in whole percent.
#[constant]
pub const MAX_PLATFORM_FEE: u16 = 25;

/// Stakes are denominated in a 6-decimal mint.
#[constant]
pub const STAKE_MINT_DECIMALS: u8 = 6;

/// Fees are stored as whole percentages.
pub const FEE_DENOMINATOR: u64 = 100;

/// Even-money binary market: a winning stake is paid back twice.
pub const PAYOUT_MULTIPLIER: u64 = 2;

/// Match ids are used verbatim as a PDA seed, which caps them at 32 bytes.
pub const MAX_MATCH_ID_LEN: usize = 32;

pub const MAX_TEAM_NAME_LEN: usize = 32;
