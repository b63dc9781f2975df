use anchor_lang::prelude::*;

#[event]
pub struct PlatformInitialized {
    pub authority: Pubkey,
    pub treasury: Pubkey,
    pub stake_mint: Pubkey,
    pub platform_fee_bps: u16,
}

#[event]
pub struct MatchCreated {
    pub match_account: Pubkey,
    pub match_id: String,
    pub team_a: String,
    pub team_b: String,
    pub start_time: i64,
}

#[event]
pub struct BetPlaced {
    pub match_account: Pubkey,
    pub bettor: Pubkey,
    pub amount: u64,
    pub predicted_winner: String,
}

#[event]
pub struct MatchSettled {
    pub match_account: Pubkey,
    pub winner: String,
    pub total_staked: u64,
    pub settled_at: i64,
}

#[event]
pub struct WinningsClaimed {
    pub match_account: Pubkey,
    pub bettor: Pubkey,
    pub payout: u64,
    pub fee: u64,
}
