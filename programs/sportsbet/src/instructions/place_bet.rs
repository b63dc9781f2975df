use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::errors::SportsbetError;
use crate::events::BetPlaced;
use crate::state::{Bet, BetStatus, Match, PlatformConfig};

#[derive(Accounts)]
#[instruction(match_id: String)]
pub struct PlaceBet<'info> {
    #[account(
        mut,
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

    /// One bet per bettor per match; an occupied slot is rejected in the handler.
    #[account(
        init_if_needed,
        payer = bettor,
        space = 8 + Bet::INIT_SPACE,
        seeds = [Bet::SEED, bettor.key().as_ref(), match_account.key().as_ref()],
        bump,
    )]
    pub bet: Account<'info, Bet>,

    /// Bettor's stake token account.
    #[account(
        mut,
        constraint = bettor_token_account.owner == bettor.key() @ SportsbetError::InvalidTokenAccount,
        constraint = bettor_token_account.mint == platform_config.stake_mint @ SportsbetError::InvalidMint,
    )]
    pub bettor_token_account: Account<'info, TokenAccount>,

    /// Escrow token account owned by the match PDA.
    #[account(
        mut,
        seeds = [Match::ESCROW_SEED, match_account.key().as_ref()],
        bump = match_account.escrow_bump,
        constraint = escrow_token_account.key() == match_account.escrow_token_account,
    )]
    pub escrow_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub bettor: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<PlaceBet>,
    _match_id: String,
    amount: u64,
    predicted_winner: String,
) -> Result<()> {
    ctx.accounts.platform_config.ensure_initialized()?;
    ctx.accounts.match_account.ensure_bettable(
        amount,
        &predicted_winner,
        &ctx.accounts.bet,
        ctx.accounts.bettor_token_account.amount,
    )?;

    // Transfer stake from bettor to escrow.
    let transfer_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.bettor_token_account.to_account_info(),
            to: ctx.accounts.escrow_token_account.to_account_info(),
            authority: ctx.accounts.bettor.to_account_info(),
        },
    );
    token::transfer(transfer_ctx, amount)?;

    ctx.accounts
        .match_account
        .record_bet(amount, &predicted_winner)?;

    ctx.accounts.platform_config.record_volume(amount)?;

    let clock = Clock::get()?;
    let bettor = ctx.accounts.bettor.key();
    let match_key = ctx.accounts.match_account.key();
    let bet = &mut ctx.accounts.bet;
    bet.bettor = bettor;
    bet.match_account = match_key;
    bet.amount = amount;
    bet.predicted_winner = predicted_winner.clone();
    bet.status = BetStatus::Active;
    bet.placed_at = clock.unix_timestamp;
    bet.claimed_at = 0;
    bet.bump = ctx.bumps.bet;

    msg!(
        "Bet placed: {} on {} by {}",
        amount,
        predicted_winner,
        bettor
    );

    emit!(BetPlaced {
        match_account: match_key,
        bettor,
        amount,
        predicted_winner,
    });

    Ok(())
}
