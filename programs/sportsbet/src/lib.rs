use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod state;

use instructions::*;

declare_id!("3Yg1DBAacHcK4RNF2xEHoWq3ebKAXLtBHQXHUBs9rRh8");

#[program]
pub mod sportsbet {
    use super::*;

    /// One-time platform initialization by the program's upgrade authority.
    /// `platform_fee_bps` is a whole percentage charged on each winning stake.
    pub fn initialize(ctx: Context<Initialize>, platform_fee_bps: u16) -> Result<()> {
        instructions::initialize::handler(ctx, platform_fee_bps)
    }

    /// Authority registers a match and its escrow.
    pub fn create_match(
        ctx: Context<CreateMatch>,
        team_a: String,
        team_b: String,
        match_id: String,
        start_time: i64,
    ) -> Result<()> {
        instructions::create_match::handler(ctx, team_a, team_b, match_id, start_time)
    }

    /// Bettor stakes `amount` on one team while the match is Pending.
    pub fn place_bet(
        ctx: Context<PlaceBet>,
        match_id: String,
        amount: u64,
        predicted_winner: String,
    ) -> Result<()> {
        instructions::place_bet::handler(ctx, match_id, amount, predicted_winner)
    }

    /// Authority records the winner. Irreversible.
    pub fn settle_match(ctx: Context<SettleMatch>, match_id: String, winner: String) -> Result<()> {
        instructions::settle_match::handler(ctx, match_id, winner)
    }

    /// Winning bettor collects twice their stake minus the platform fee.
    pub fn claim_winnings(ctx: Context<ClaimWinnings>, match_id: String) -> Result<()> {
        instructions::claim_winnings::handler(ctx, match_id)
    }
}
