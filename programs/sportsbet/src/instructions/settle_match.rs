use anchor_lang::prelude::*;

use crate::events::MatchSettled;
use crate::state::{Match, PlatformConfig};

#[derive(Accounts)]
#[instruction(match_id: String)]
pub struct SettleMatch<'info> {
    #[account(
        seeds = [PlatformConfig::SEED],
        bump = platform_config.bump,
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    #[account(
        mut,
        seeds = [Match::SEED, match_id.as_bytes()],
        bump = match_account.bump,
    )]
    pub match_account: Account<'info, Match>,

    /// Platform authority.
    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<SettleMatch>, match_id: String, winner: String) -> Result<()> {
    ctx.accounts
        .platform_config
        .ensure_authority(&ctx.accounts.authority.key())?;

    let clock = Clock::get()?;
    let match_key = ctx.accounts.match_account.key();
    let match_account = &mut ctx.accounts.match_account;

    match_account.settle(winner, clock.unix_timestamp)?;

    msg!(
        "Match {} settled: {} wins, {} staked across {} bets",
        match_id,
        match_account.winner,
        match_account.total_staked,
        match_account.bet_count
    );

    emit!(MatchSettled {
        match_account: match_key,
        winner: match_account.winner.clone(),
        total_staked: match_account.total_staked,
        settled_at: match_account.settled_at,
    });

    Ok(())
}
