use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::errors::SportsbetError;
use crate::events::PlatformInitialized;
use crate::program::Sportsbet;
use crate::state::PlatformConfig;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + PlatformConfig::INIT_SPACE,
        seeds = [PlatformConfig::SEED],
        bump,
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    /// Token every stake is denominated in.
    pub stake_mint: Account<'info, Mint>,

    /// CHECK: Treasury wallet that receives platform fees.
    pub treasury: UncheckedAccount<'info>,

    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        constraint = program.programdata_address()? == Some(program_data.key()) @ SportsbetError::Unauthorized,
    )]
    pub program: Program<'info, Sportsbet>,

    /// Upgrade state of this program; its upgrade authority is the deployer.
    pub program_data: Account<'info, ProgramData>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>, platform_fee_bps: u16) -> Result<()> {
    ctx.accounts.platform_config.ensure_uninitialized()?;
    PlatformConfig::ensure_deployer(
        ctx.accounts.program_data.upgrade_authority_address,
        &ctx.accounts.authority.key(),
    )?;
    PlatformConfig::validate_settings(platform_fee_bps, ctx.accounts.stake_mint.decimals)?;

    let platform_config = &mut ctx.accounts.platform_config;

    platform_config.authority = ctx.accounts.authority.key();
    platform_config.platform_fee_bps = platform_fee_bps;
    platform_config.is_initialized = true;
    platform_config.treasury = ctx.accounts.treasury.key();
    platform_config.stake_mint = ctx.accounts.stake_mint.key();
    platform_config.total_matches = 0;
    platform_config.total_volume = 0;
    platform_config.total_fees = 0;
    platform_config.bump = ctx.bumps.platform_config;

    emit!(PlatformInitialized {
        authority: platform_config.authority,
        treasury: platform_config.treasury,
        stake_mint: platform_config.stake_mint,
        platform_fee_bps,
    });

    Ok(())
}
