use anchor_lang::prelude::*;

use super::{Bet, BetStatus, Match, MatchStatus, PlatformConfig};

pub(crate) fn error_code(err: anchor_lang::error::Error) -> u32 {
    match err {
        anchor_lang::error::Error::AnchorError(e) => e.error_code_number,
        other => panic!("unexpected error: {other:?}"),
    }
}

pub(crate) fn platform(platform_fee_bps: u16) -> PlatformConfig {
    PlatformConfig {
        authority: Pubkey::new_unique(),
        platform_fee_bps,
        is_initialized: true,
        treasury: Pubkey::new_unique(),
        stake_mint: Pubkey::new_unique(),
        total_matches: 1,
        total_volume: 0,
        total_fees: 0,
        bump: 255,
    }
}

pub(crate) fn pending_match(match_id: &str) -> Match {
    Match {
        match_id: match_id.to_string(),
        team_a: "Team A".to_string(),
        team_b: "Team B".to_string(),
        start_time: 1_700_000_000,
        status: MatchStatus::Pending,
        winner: String::new(),
        escrow_token_account: Pubkey::new_unique(),
        total_staked: 0,
        team_a_staked: 0,
        team_b_staked: 0,
        total_paid_out: 0,
        bet_count: 0,
        created_at: 1_699_990_000,
        settled_at: 0,
        bump: 254,
        escrow_bump: 253,
    }
}

/// What a freshly allocated bet slot deserializes to.
pub(crate) fn vacant_bet() -> Bet {
    Bet {
        bettor: Pubkey::default(),
        match_account: Pubkey::default(),
        amount: 0,
        predicted_winner: String::new(),
        status: BetStatus::Active,
        placed_at: 0,
        claimed_at: 0,
        bump: 0,
    }
}
