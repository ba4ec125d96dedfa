//! Share ledger: holder balances and total supply.
//!
//! Pure bookkeeping over `VaultState::total_shares` and the per-holder
//! `ShareBalance` accounts. Every mint and burn moves both sides so the supply
//! always equals the sum of balances.

use anchor_lang::prelude::*;

use crate::errors::VaultError;
use crate::state::{ShareAllowance, ShareBalance, VaultState};

pub fn balance_of(account: &ShareBalance) -> u128 {
    account.shares
}

pub fn total_supply(vault: &VaultState) -> u128 {
    vault.total_shares
}

/// Mint `shares` to the holder of `account`
pub fn credit(vault: &mut VaultState, account: &mut ShareBalance, shares: u128) -> Result<()> {
    vault.total_shares = vault
        .total_shares
        .checked_add(shares)
        .ok_or(VaultError::MathOverflow)?;
    account.shares = account
        .shares
        .checked_add(shares)
        .ok_or(VaultError::MathOverflow)?;
    Ok(())
}

/// Burn `shares` from the holder of `account`
pub fn debit(vault: &mut VaultState, account: &mut ShareBalance, shares: u128) -> Result<()> {
    account.shares = account
        .shares
        .checked_sub(shares)
        .ok_or(VaultError::InsufficientShares)?;
    vault.total_shares = vault
        .total_shares
        .checked_sub(shares)
        .ok_or(VaultError::MathOverflow)?;
    Ok(())
}

/// Move shares between two holders; supply is unchanged
pub fn transfer(from: &mut ShareBalance, to: &mut ShareBalance, shares: u128) -> Result<()> {
    from.shares = from
        .shares
        .checked_sub(shares)
        .ok_or(VaultError::InsufficientShares)?;
    to.shares = to
        .shares
        .checked_add(shares)
        .ok_or(VaultError::MathOverflow)?;
    Ok(())
}

/// Overwrite the approval; only the owner it was created for may set it
pub fn approve(allowance: &mut ShareAllowance, owner: &Pubkey, shares: u128) -> Result<()> {
    require_keys_eq!(allowance.owner, *owner, VaultError::InvalidOwner);
    allowance.shares = shares;
    Ok(())
}

/// Check that `caller` may act on `owner`'s shares, consuming allowance when
/// the caller is not the owner
pub fn spend_allowance(
    caller: &Pubkey,
    owner: &Pubkey,
    allowance: Option<&mut ShareAllowance>,
    shares: u128,
) -> Result<()> {
    if caller == owner {
        return Ok(());
    }

    let allowance = allowance.ok_or(VaultError::InsufficientAllowance)?;
    require_keys_eq!(allowance.owner, *owner, VaultError::InsufficientAllowance);
    require_keys_eq!(allowance.spender, *caller, VaultError::InsufficientAllowance);

    // u128::MAX is an unlimited approval
    if allowance.shares != u128::MAX {
        allowance.shares = allowance
            .shares
            .checked_sub(shares)
            .ok_or(VaultError::InsufficientAllowance)?;
    }
    Ok(())
}
