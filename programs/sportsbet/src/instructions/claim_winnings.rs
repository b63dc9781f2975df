use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::errors::SportsbetError;
use crate::events::WinningsClaimed;
use crate::state::{Bet, Match, PlatformConfig};

#[derive(Accounts)]
#[instruction(match_id: String)]
pub struct ClaimWinnings<'info> {
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

    #[account(
        mut,
        seeds = [Bet::SEED, bettor.key().as_ref(), match_account.key().as_ref()],
        bump = bet.bump,
        has_one = bettor @ SportsbetError::Unauthorized,
    )]
    pub bet: Account<'info, Bet>,

    /// Escrow token account owned by the match PDA.
    #[account(
        mut,
        seeds = [Match::ESCROW_SEED, match_account.key().as_ref()],
        bump = match_account.escrow_bump,
        constraint = escrow_token_account.key() == match_account.escrow_token_account,
    )]
    pub escrow_token_account: Account<'info, TokenAccount>,

    /// Bettor's stake token account, receives the payout.
    #[account(
        mut,
        constraint = winner_token_account.owner == bettor.key() @ SportsbetError::InvalidTokenAccount,
        constraint = winner_token_account.mint == platform_config.stake_mint @ SportsbetError::InvalidMint,
    )]
    pub winner_token_account: Account<'info, TokenAccount>,

    /// Treasury token account for fees.
    #[account(
        mut,
        constraint = platform_token_account.owner == platform_config.treasury @ SportsbetError::InvalidTokenAccount,
        constraint = platform_token_account.mint == platform_config.stake_mint @ SportsbetError::InvalidMint,
    )]
    pub platform_token_account: Account<'info, TokenAccount>,

    pub bettor: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<ClaimWinnings>, match_id: String) -> Result<()> {
    ctx.accounts.platform_config.ensure_initialized()?;

    let clock = Clock::get()?;
    let escrow_balance = ctx.accounts.escrow_token_account.amount;
    let accounts = &mut *ctx.accounts;
    let payout = accounts.bet.claim(
        &mut accounts.match_account,
        &mut accounts.platform_config,
        escrow_balance,
        clock.unix_timestamp,
    )?;

    // Build PDA signer seeds for the match account.
    let bump_bytes = [ctx.accounts.match_account.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[Match::SEED, match_id.as_bytes(), &bump_bytes]];

    // Transfer payout to winner.
    let transfer_to_winner = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.escrow_token_account.to_account_info(),
            to: ctx.accounts.winner_token_account.to_account_info(),
            authority: ctx.accounts.match_account.to_account_info(),
        },
        signer_seeds,
    );
    token::transfer(transfer_to_winner, payout.to_bettor)?;

    // Transfer fee to treasury.
    if payout.fee > 0 {
        let transfer_fee = CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.escrow_token_account.to_account_info(),
                to: ctx.accounts.platform_token_account.to_account_info(),
                authority: ctx.accounts.match_account.to_account_info(),
            },
            signer_seeds,
        );
        token::transfer(transfer_fee, payout.fee)?;
    }

    msg!(
        "Winnings claimed on {}: {} to bettor, {} fee",
        match_id,
        payout.to_bettor,
        payout.fee
    );

    emit!(WinningsClaimed {
        match_account: ctx.accounts.match_account.key(),
        bettor: ctx.accounts.bettor.key(),
        payout: payout.to_bettor,
        fee: payout.fee,
    });

    Ok(())
}
