//! Off-chain address derivation. These mirror the `seeds` constraints the
//! instructions enforce, so callers can compute every account up front.

use anchor_lang::prelude::*;

use crate::state::{Bet, Match, PlatformConfig};

pub fn platform_config_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[PlatformConfig::SEED], &crate::ID)
}

/// Returns `None` when `match_id` is too long to be used as a seed.
pub fn match_address(match_id: &str) -> Option<(Pubkey, u8)> {
    Pubkey::try_find_program_address(&[Match::SEED, match_id.as_bytes()], &crate::ID)
}

pub fn bet_address(bettor: &Pubkey, match_account: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[Bet::SEED, bettor.as_ref(), match_account.as_ref()],
        &crate::ID,
    )
}

pub fn escrow_address(match_account: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[Match::ESCROW_SEED, match_account.as_ref()], &crate::ID)
}
