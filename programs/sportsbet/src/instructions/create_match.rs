use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::errors::SportsbetError;
use crate::events::MatchCreated;
use crate::state::{Match, MatchStatus, PlatformConfig};

#[derive(Accounts)]
#[instruction(team_a: String, team_b: String, match_id: String)]
pub struct CreateMatch<'info> {
    #[account(
        mut,
        seeds = [PlatformConfig::SEED],
        bump = platform_config.bump,
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    /// Occupied when the id is taken; the handler rejects that case.
    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + Match::INIT_SPACE,
        seeds = [Match::SEED, match_id.as_bytes()],
        bump,
    )]
    pub match_account: Account<'info, Match>,

    /// Escrow token account owned by the match PDA.
    #[account(
        init_if_needed,
        payer = authority,
        seeds = [Match::ESCROW_SEED, match_account.key().as_ref()],
        bump,
        token::mint = stake_mint,
        token::authority = match_account,
    )]
    pub escrow_token_account: Account<'info, TokenAccount>,

    #[account(
        constraint = stake_mint.key() == platform_config.stake_mint @ SportsbetError::InvalidMint,
    )]
    pub stake_mint: Account<'info, Mint>,

    /// Platform authority.
    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

pub fn handler(
    ctx: Context<CreateMatch>,
    team_a: String,
    team_b: String,
    match_id: String,
    start_time: i64,
) -> Result<()> {
    ctx.accounts
        .platform_config
        .ensure_authority(&ctx.accounts.authority.key())?;
    ctx.accounts.match_account.ensure_vacant()?;
    Match::validate_new(&match_id, &team_a, &team_b)?;

    ctx.accounts.platform_config.record_match()?;

    let clock = Clock::get()?;
    let match_key = ctx.accounts.match_account.key();
    let match_account = &mut ctx.accounts.match_account;
    match_account.match_id = match_id.clone();
    match_account.team_a = team_a.clone();
    match_account.team_b = team_b.clone();
    match_account.start_time = start_time;
    match_account.status = MatchStatus::Pending;
    match_account.winner = String::new();
    match_account.escrow_token_account = ctx.accounts.escrow_token_account.key();
    match_account.total_staked = 0;
    match_account.team_a_staked = 0;
    match_account.team_b_staked = 0;
    match_account.total_paid_out = 0;
    match_account.bet_count = 0;
    match_account.created_at = clock.unix_timestamp;
    match_account.settled_at = 0;
    match_account.bump = ctx.bumps.match_account;
    match_account.escrow_bump = ctx.bumps.escrow_token_account;

    msg!("Match {} created: {} vs {}", match_id, team_a, team_b);

    emit!(MatchCreated {
        match_account: match_key,
        match_id,
        team_a,
        team_b,
        start_time,
    });

    Ok(())
}
