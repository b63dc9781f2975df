use anchor_lang::prelude::*;

use crate::constants::{FEE_DENOMINATOR, MAX_PLATFORM_FEE, PAYOUT_MULTIPLIER, STAKE_MINT_DECIMALS};
use crate::errors::SportsbetError;

#[account]
#[derive(InitSpace)]
pub struct PlatformConfig {
    /// Admin who can create and settle matches.
    pub authority: Pubkey,
    /// Platform fee as a whole percentage of the winning stake (5 = 5%).
    pub platform_fee_bps: u16,
    /// Set once by `initialize`.
    pub is_initialized: bool,
    /// Wallet whose token account receives fees.
    pub treasury: Pubkey,
    /// Mint every stake is denominated in (`STAKE_MINT_DECIMALS` decimals).
    pub stake_mint: Pubkey,
    /// Running count of matches created.
    pub total_matches: u64,
    /// Cumulative staked volume in base units.
    pub total_volume: u64,
    /// Cumulative fees paid to the treasury.
    pub total_fees: u64,
    /// PDA bump seed.
    pub bump: u8,
}

impl PlatformConfig {
    pub const SEED: &'static [u8] = b"platform_config";

    /// Only the program's upgrade authority may claim the platform.
    pub fn ensure_deployer(upgrade_authority: Option<Pubkey>, signer: &Pubkey) -> Result<()> {
        require!(
            upgrade_authority == Some(*signer),
            SportsbetError::Unauthorized
        );
        Ok(())
    }

    pub fn validate_settings(platform_fee_bps: u16, mint_decimals: u8) -> Result<()> {
        require!(
            platform_fee_bps <= MAX_PLATFORM_FEE,
            SportsbetError::InvalidPlatformFee
        );
        require!(
            mint_decimals == STAKE_MINT_DECIMALS,
            SportsbetError::InvalidMint
        );
        Ok(())
    }

    pub fn ensure_uninitialized(&self) -> Result<()> {
        require!(!self.is_initialized, SportsbetError::AlreadyInitialized);
        Ok(())
    }

    pub fn ensure_initialized(&self) -> Result<()> {
        require!(self.is_initialized, SportsbetError::PlatformNotInitialized);
        Ok(())
    }

    /// Gate for create and settle.
    pub fn ensure_authority(&self, signer: &Pubkey) -> Result<()> {
        self.ensure_initialized()?;
        require!(self.authority == *signer, SportsbetError::Unauthorized);
        Ok(())
    }

    pub fn record_match(&mut self) -> Result<()> {
        self.total_matches = self
            .total_matches
            .checked_add(1)
            .ok_or(SportsbetError::MathOverflow)?;
        Ok(())
    }

    pub fn record_volume(&mut self, amount: u64) -> Result<()> {
        self.total_volume = self
            .total_volume
            .checked_add(amount)
            .ok_or(SportsbetError::MathOverflow)?;
        Ok(())
    }

    pub fn record_fee(&mut self, fee: u64) -> Result<()> {
        self.total_fees = self
            .total_fees
            .checked_add(fee)
            .ok_or(SportsbetError::MathOverflow)?;
        Ok(())
    }

    /// Splits the escrow outflow for a winning stake of `amount`.
    ///
    /// The fee is charged on the stake, not the gross payout, and truncates
    /// so rounding never goes against the bettor.
    pub fn payout_for(&self, amount: u64) -> Result<Payout> {
        let gross = amount
            .checked_mul(PAYOUT_MULTIPLIER)
            .ok_or(SportsbetError::MathOverflow)?;

        let fee = amount
            .checked_mul(self.platform_fee_bps as u64)
            .ok_or(SportsbetError::MathOverflow)?
            .checked_div(FEE_DENOMINATOR)
            .ok_or(SportsbetError::MathOverflow)?;

        let to_bettor = gross
            .checked_sub(fee)
            .ok_or(SportsbetError::MathOverflow)?;

        Ok(Payout {
            gross,
            fee,
            to_bettor,
        })
    }
}

/// Escrow outflow for one claim. `to_bettor + fee == gross`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Payout {
    pub gross: u64,
    pub fee: u64,
    pub to_bettor: u64,
}

impl Payout {
    /// The 2x payout assumes a balanced book; a short escrow fails the
    /// claim before any transfer.
    pub fn ensure_covered_by(&self, escrow_balance: u64) -> Result<()> {
        require!(
            escrow_balance >= self.gross,
            SportsbetError::InsufficientFunds
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::fixtures::{error_code, platform as config};

    #[test]
    fn five_percent_fee_on_one_token() {
        let payout = config(5).payout_for(1_000_000).unwrap();

        assert_eq!(payout.gross, 2_000_000);
        assert_eq!(payout.fee, 50_000);
        assert_eq!(payout.to_bettor, 1_950_000);
    }

    #[test]
    fn fee_truncates_toward_zero() {
        // 3% of 33 is 0.99.
        let payout = config(3).payout_for(33).unwrap();
        assert_eq!(payout.fee, 0);
        assert_eq!(payout.to_bettor, 66);

        // 5% of 1_000_019 is 50_000.95.
        let payout = config(5).payout_for(1_000_019).unwrap();
        assert_eq!(payout.fee, 50_000);
        assert_eq!(payout.to_bettor + payout.fee, payout.gross);
    }

    #[test]
    fn zero_fee_pays_full_gross() {
        let payout = config(0).payout_for(750).unwrap();
        assert_eq!(payout.fee, 0);
        assert_eq!(payout.to_bettor, 1_500);
    }

    #[test]
    fn overflowing_stake_is_rejected() {
        assert!(config(0).payout_for(u64::MAX).is_err());
        assert!(config(5).payout_for(u64::MAX / 2).is_err());
        assert!(config(0).payout_for(u64::MAX / 2).is_ok());
    }

    #[test]
    fn account_space_covers_serialized_size() {
        let mut data = Vec::new();
        config(5).try_serialize(&mut data).unwrap();
        assert_eq!(data.len(), 8 + PlatformConfig::INIT_SPACE);
    }

    #[test]
    fn only_upgrade_authority_may_initialize() {
        let deployer = Pubkey::new_unique();
        assert!(PlatformConfig::ensure_deployer(Some(deployer), &deployer).is_ok());

        let stranger = Pubkey::new_unique();
        let err = PlatformConfig::ensure_deployer(Some(deployer), &stranger).unwrap_err();
        assert_eq!(error_code(err), u32::from(SportsbetError::Unauthorized));

        // Immutable programs have no upgrade authority left to match.
        let err = PlatformConfig::ensure_deployer(None, &deployer).unwrap_err();
        assert_eq!(error_code(err), u32::from(SportsbetError::Unauthorized));
    }

    #[test]
    fn settings_are_validated() {
        assert!(PlatformConfig::validate_settings(5, STAKE_MINT_DECIMALS).is_ok());
        assert!(PlatformConfig::validate_settings(MAX_PLATFORM_FEE, STAKE_MINT_DECIMALS).is_ok());

        let err = PlatformConfig::validate_settings(MAX_PLATFORM_FEE + 1, STAKE_MINT_DECIMALS)
            .unwrap_err();
        assert_eq!(error_code(err), u32::from(SportsbetError::InvalidPlatformFee));

        let err = PlatformConfig::validate_settings(5, 9).unwrap_err();
        assert_eq!(error_code(err), u32::from(SportsbetError::InvalidMint));
    }

    #[test]
    fn second_initialize_is_rejected() {
        let mut fresh = config(0);
        fresh.is_initialized = false;
        assert!(fresh.ensure_uninitialized().is_ok());

        let err = config(5).ensure_uninitialized().unwrap_err();
        assert_eq!(error_code(err), u32::from(SportsbetError::AlreadyInitialized));
    }

    #[test]
    fn authority_gate() {
        let platform = config(5);
        assert!(platform.ensure_authority(&platform.authority).is_ok());

        let err = platform.ensure_authority(&Pubkey::new_unique()).unwrap_err();
        assert_eq!(error_code(err), u32::from(SportsbetError::Unauthorized));

        let mut uninitialized = config(5);
        uninitialized.is_initialized = false;
        let err = uninitialized.ensure_initialized().unwrap_err();
        assert_eq!(error_code(err), u32::from(SportsbetError::PlatformNotInitialized));
        let authority = uninitialized.authority;
        let err = uninitialized.ensure_authority(&authority).unwrap_err();
        assert_eq!(error_code(err), u32::from(SportsbetError::PlatformNotInitialized));
    }

    #[test]
    fn short_escrow_cannot_cover_payout() {
        let payout = config(5).payout_for(1_000_000).unwrap();
        assert!(payout.ensure_covered_by(2_000_000).is_ok());
        assert!(payout.ensure_covered_by(5_000_000).is_ok());

        let err = payout.ensure_covered_by(1_999_999).unwrap_err();
        assert_eq!(error_code(err), u32::from(SportsbetError::InsufficientFunds));
    }

    #[test]
    fn counters_accumulate() {
        let mut platform = config(5);
        platform.record_match().unwrap();
        platform.record_volume(1_000_000).unwrap();
        platform.record_volume(250_000).unwrap();
        platform.record_fee(50_000).unwrap();

        assert_eq!(platform.total_matches, 2);
        assert_eq!(platform.total_volume, 1_250_000);
        assert_eq!(platform.total_fees, 50_000);

        platform.total_volume = u64::MAX;
        let err = platform.record_volume(1).unwrap_err();
        assert_eq!(error_code(err), u32::from(SportsbetError::MathOverflow));
    }
}
