//! Seams to the two programs the vault drives: the asset token and the
//! staking protocol. Instruction handlers plug in the CPI adapters from
//! `adapters.rs`; tests plug in in-memory fakes.

use anchor_lang::prelude::*;

/// The vault's position in the staking protocol
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StakeInfo {
    /// Principal currently staked
    pub deposited_amount: u128,
    /// Rewards accrued but not yet claimed
    pub unclaimed_amount: u128,
}

/// Asset token movements available to one instruction
///
/// The counterparty (depositor, receiver or keeper) is fixed by the
/// instruction's accounts.
pub trait AssetToken {
    /// Pull `amount` from the caller into the vault
    fn transfer_in(&mut self, amount: u128) -> Result<()>;

    /// Pay `amount` from the vault to the counterparty
    fn transfer_out(&mut self, amount: u128) -> Result<()>;

    /// Assets sitting in the vault's own token account, read fresh
    fn idle_balance(&mut self) -> Result<u128>;
}

/// External staking protocol holding the vault's principal
pub trait StakingPool {
    /// Stake `amount` from the vault's idle balance
    fn deposit_asset(&mut self, amount: u128) -> Result<()>;

    /// Unstake `amount` back into the vault's idle balance
    fn withdraw_asset(&mut self, amount: u128) -> Result<()>;

    /// Claim accrued rewards into the vault's idle balance, returning the amount delivered
    fn claim_rewards(&mut self) -> Result<u128>;

    /// Live position; never cached by the caller
    fn stake_info(&mut self) -> Result<StakeInfo>;
}
