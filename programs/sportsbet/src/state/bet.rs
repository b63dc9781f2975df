use anchor_lang::prelude::*;

use super::match_account::{Match, MatchStatus};
use super::platform_config::{Payout, PlatformConfig};
use crate::errors::SportsbetError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum BetStatus {
    /// Stake is in escrow.
    Active,
    /// Payout has been sent.
    Claimed,
}

#[account]
#[derive(InitSpace)]
pub struct Bet {
    pub bettor: Pubkey,
    pub match_account: Pubkey,
    /// Stake in base units (6 decimals). Never zero once placed.
    pub amount: u64,
    #[max_len(32)]
    pub predicted_winner: String,
    pub status: BetStatus,
    pub placed_at: i64,
    /// Unix timestamp of the claim (0 if not yet).
    pub claimed_at: i64,
    /// PDA bump seed.
    pub bump: u8,
}

impl Bet {
    pub const SEED: &'static [u8] = b"bet";

    /// Placed bets always carry a non-zero stake.
    pub fn is_vacant(&self) -> bool {
        self.amount == 0
    }

    pub fn is_winner(&self, settled: &Match) -> bool {
        settled.status == MatchStatus::Completed && self.predicted_winner == settled.winner
    }

    /// Checks run in order: settlement, claim state, outcome.
    pub fn ensure_claimable(&self, settled: &Match) -> Result<()> {
        require!(
            settled.status == MatchStatus::Completed,
            SportsbetError::MatchNotSettled
        );
        require!(
            self.status == BetStatus::Active,
            SportsbetError::AlreadyClaimed
        );
        require!(self.is_winner(settled), SportsbetError::NotWinner);
        Ok(())
    }

    pub fn mark_claimed(&mut self, now: i64) -> Result<()> {
        require!(
            self.status == BetStatus::Active,
            SportsbetError::AlreadyClaimed
        );
        self.status = BetStatus::Claimed;
        self.claimed_at = now;
        Ok(())
    }

    /// Validates a claim against the escrow balance and books it. The
    /// returned split is what the caller moves out of escrow: `to_bettor`
    /// to the bettor and `fee` to the treasury. Nothing is written when any
    /// check fails.
    pub fn claim(
        &mut self,
        settled: &mut Match,
        platform: &mut PlatformConfig,
        escrow_balance: u64,
        now: i64,
    ) -> Result<Payout> {
        self.ensure_claimable(settled)?;
        let payout = platform.payout_for(self.amount)?;
        payout.ensure_covered_by(escrow_balance)?;

        settled.record_payout(payout.gross)?;
        platform.record_fee(payout.fee)?;
        self.mark_claimed(now)?;
        Ok(payout)
    }
}
