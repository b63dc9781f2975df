use anchor_lang::prelude::*;

use super::bet::Bet;
use crate::constants::{MAX_MATCH_ID_LEN, MAX_TEAM_NAME_LEN};
use crate::errors::SportsbetError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum MatchStatus {
    /// Accepting bets.
    Pending,
    /// Winner recorded, bets can be claimed.
    Completed,
}

#[account]
#[derive(InitSpace)]
pub struct Match {
    /// Caller-supplied identifier, also the PDA seed.
    #[max_len(32)]
    pub match_id: String,
    #[max_len(32)]
    pub team_a: String,
    #[max_len(32)]
    pub team_b: String,
    /// Scheduled kickoff (informational, not a betting cutoff).
    pub start_time: i64,
    pub status: MatchStatus,
    /// Winning team name (empty until settled).
    #[max_len(32)]
    pub winner: String,
    /// PDA-owned token account holding the stakes.
    pub escrow_token_account: Pubkey,
    /// Sum of every stake ever placed on this match.
    pub total_staked: u64,
    pub team_a_staked: u64,
    pub team_b_staked: u64,
    /// Sum of escrow outflows (winner payouts plus fees).
    pub total_paid_out: u64,
    pub bet_count: u32,
    pub created_at: i64,
    /// Unix timestamp when settled (0 if not yet).
    pub settled_at: i64,
    /// PDA bump seed.
    pub bump: u8,
    /// Escrow token account bump seed.
    pub escrow_bump: u8,
}

impl Match {
    pub const SEED: &'static [u8] = b"match";
    pub const ESCROW_SEED: &'static [u8] = b"escrow";

    /// Freshly allocated accounts deserialize with an empty id.
    pub fn is_vacant(&self) -> bool {
        self.match_id.is_empty()
    }

    /// The derived address is the uniqueness check: an occupied slot means
    /// the id is taken.
    pub fn ensure_vacant(&self) -> Result<()> {
        require!(self.is_vacant(), SportsbetError::DuplicateMatch);
        Ok(())
    }

    pub fn validate_new(match_id: &str, team_a: &str, team_b: &str) -> Result<()> {
        require!(!match_id.is_empty(), SportsbetError::InvalidMatchData);
        require!(
            match_id.len() <= MAX_MATCH_ID_LEN,
            SportsbetError::MatchIdTooLong
        );
        for team in [team_a, team_b] {
            require!(
                !team.is_empty() && team.len() <= MAX_TEAM_NAME_LEN,
                SportsbetError::InvalidMatchData
            );
        }
        require!(team_a != team_b, SportsbetError::InvalidMatchData);
        Ok(())
    }

    pub fn is_team(&self, name: &str) -> bool {
        name == self.team_a || name == self.team_b
    }

    /// Betting stays open for as long as the match is Pending.
    pub fn ensure_open(&self) -> Result<()> {
        require!(
            self.status == MatchStatus::Pending,
            SportsbetError::GameAlreadyStarted
        );
        Ok(())
    }

    /// PlaceBet preconditions, in order: match status, stake, prediction,
    /// bet slot, then the bettor's balance. A settled match therefore reports
    /// `GameAlreadyStarted` even to a bettor who already holds a bet.
    pub fn ensure_bettable(
        &self,
        amount: u64,
        predicted_winner: &str,
        bet: &Bet,
        funding_balance: u64,
    ) -> Result<()> {
        self.ensure_open()?;
        require!(amount > 0, SportsbetError::InvalidBetAmount);
        require!(
            self.is_team(predicted_winner),
            SportsbetError::InvalidPrediction
        );
        require!(bet.is_vacant(), SportsbetError::DuplicateBet);
        require!(
            funding_balance >= amount,
            SportsbetError::InsufficientFunds
        );
        Ok(())
    }

    pub fn record_bet(&mut self, amount: u64, predicted_winner: &str) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_add(amount)
            .ok_or(SportsbetError::MathOverflow)?;

        if predicted_winner == self.team_a {
            self.team_a_staked = self
                .team_a_staked
                .checked_add(amount)
                .ok_or(SportsbetError::MathOverflow)?;
        } else {
            self.team_b_staked = self
                .team_b_staked
                .checked_add(amount)
                .ok_or(SportsbetError::MathOverflow)?;
        }

        self.bet_count = self
            .bet_count
            .checked_add(1)
            .ok_or(SportsbetError::MathOverflow)?;
        Ok(())
    }

    /// One-way `Pending -> Completed` transition.
    pub fn settle(&mut self, winner: String, now: i64) -> Result<()> {
        require!(
            self.status == MatchStatus::Pending,
            SportsbetError::MatchAlreadySettled
        );
        require!(self.is_team(&winner), SportsbetError::InvalidWinner);

        self.winner = winner;
        self.status = MatchStatus::Completed;
        self.settled_at = now;
        Ok(())
    }

    pub fn record_payout(&mut self, gross: u64) -> Result<()> {
        self.total_paid_out = self
            .total_paid_out
            .checked_add(gross)
            .ok_or(SportsbetError::MathOverflow)?;
        Ok(())
    }
}
