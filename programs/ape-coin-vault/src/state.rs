use anchor_lang::prelude::*;

use crate::constants::MAX_FEE_BPS;
use crate::errors::VaultError;
use crate::math::{mul_div, Rounding};

/// Global vault state: share supply, fee and the staking collaborator binding
///
/// Total assets are never stored here. They are the staked principal plus the
/// vault's idle token balance, both read live for every conversion.
#[account]
pub struct VaultState {
    /// Owner: may update the fee and hand over ownership
    pub authority: Pubkey,          // 32 bytes

    /// Mint of the underlying asset token
    pub asset_mint: Pubkey,         // 32 bytes

    /// Staking program the pooled assets are forwarded to
    pub staking_program: Pubkey,    // 32 bytes

    /// Pool account inside the staking program
    pub stake_pool: Pubkey,         // 32 bytes

    /// Performance fee skimmed from harvested rewards, in basis points
    pub fee_bps: u16,               // 2 bytes

    /// Decimals of the asset mint; one whole token is the re-stake dust threshold
    pub asset_decimals: u8,         // 1 byte

    /// Sum of every holder's share balance
    pub total_shares: u128,         // 16 bytes

    /// Bump seed for vault state PDA
    pub bump: u8,                   // 1 byte

    /// Bump seed for vault authority PDA
    pub authority_bump: u8,         // 1 byte

    // Padding for future upgrades
    pub _reserved: [u8; 128],       // 128 bytes
}

/// Share balance of a single holder
#[account]
pub struct ShareBalance {
    pub vault: Pubkey,
    pub holder: Pubkey,
    pub shares: u128,
    pub bump: u8,
}

/// Shares `spender` may burn or move out of `owner`'s balance
#[account]
pub struct ShareAllowance {
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub spender: Pubkey,
    pub shares: u128,
    pub bump: u8,
}

impl VaultState {
    pub fn total_supply(&self) -> u128 {
        self.total_shares
    }

    /// Shares worth `assets` at the current rate
    ///
    /// - Empty vault: shares = assets
    /// - Otherwise: shares = assets * totalShares / totalAssets
    pub fn convert_to_shares(
        &self,
        assets: u128,
        total_assets: u128,
        rounding: Rounding,
    ) -> Result<u128> {
        if self.total_shares == 0 {
            return Ok(assets);
        }
        mul_div(assets, self.total_shares, total_assets, rounding)
    }

    /// Assets backing `shares` at the current rate
    ///
    /// - Empty vault: assets = shares
    /// - Otherwise: assets = shares * totalAssets / totalShares
    pub fn convert_to_assets(
        &self,
        shares: u128,
        total_assets: u128,
        rounding: Rounding,
    ) -> Result<u128> {
        if self.total_shares == 0 {
            return Ok(shares);
        }
        mul_div(shares, total_assets, self.total_shares, rounding)
    }

    /// Smallest idle balance worth re-staking: one whole token
    pub fn dust_threshold(&self) -> Result<u128> {
        10u128
            .checked_pow(self.asset_decimals as u32)
            .ok_or(error!(VaultError::MathOverflow))
    }

    pub fn validate_fee(fee_bps: u16) -> Result<()> {
        if fee_bps > MAX_FEE_BPS {
            msg!("Fee {} bps exceeds ceiling of {} bps", fee_bps, MAX_FEE_BPS);
            return err!(VaultError::FeeTooHigh);
        }
        Ok(())
    }
}

impl ShareBalance {
    /// Bind a freshly created balance account to its vault and holder
    ///
    /// A new account is recognised by its unset `vault`, which is a PDA and
    /// never the default key. `holder` may legitimately be the default key.
    pub fn init_if_new(&mut self, vault: Pubkey, holder: Pubkey, bump: u8) {
        if self.vault == Pubkey::default() {
            self.vault = vault;
            self.holder = holder;
            self.shares = 0;
            self.bump = bump;
        }
    }
}

impl ShareAllowance {
    pub fn init_if_new(&mut self, vault: Pubkey, owner: Pubkey, spender: Pubkey, bump: u8) {
        if self.vault == Pubkey::default() {
            self.vault = vault;
            self.owner = owner;
            self.spender = spender;
            self.bump = bump;
        }
    }
}
