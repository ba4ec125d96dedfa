//! Vault accounting engine.
//!
//! Every flow reads total assets live (staked principal + idle balance) before
//! converting, so a harvest that settled earlier in the same slot is always
//! reflected in the rate. Deposits and redemptions round in favour of the
//! existing holders: shares minted and assets paid out round down, shares
//! burned and assets pulled in round up.

use anchor_lang::prelude::*;

use crate::collaborators::{AssetToken, StakingPool};
use crate::errors::VaultError;
use crate::ledger;
use crate::math::Rounding;
use crate::state::{ShareAllowance, ShareBalance, VaultState};

/// Assets backing all shares: staked principal plus idle vault balance
pub fn total_assets<T: AssetToken, S: StakingPool>(token: &mut T, staking: &mut S) -> Result<u128> {
    let stake = staking.stake_info()?;
    let idle = token.idle_balance()?;
    stake
        .deposited_amount
        .checked_add(idle)
        .ok_or(error!(VaultError::MathOverflow))
}

pub fn preview_deposit<T: AssetToken, S: StakingPool>(
    vault: &VaultState,
    token: &mut T,
    staking: &mut S,
    assets: u128,
) -> Result<u128> {
    let total = total_assets(token, staking)?;
    vault.convert_to_shares(assets, total, Rounding::Floor)
}

pub fn preview_mint<T: AssetToken, S: StakingPool>(
    vault: &VaultState,
    token: &mut T,
    staking: &mut S,
    shares: u128,
) -> Result<u128> {
    let total = total_assets(token, staking)?;
    vault.convert_to_assets(shares, total, Rounding::Ceil)
}

pub fn preview_withdraw<T: AssetToken, S: StakingPool>(
    vault: &VaultState,
    token: &mut T,
    staking: &mut S,
    assets: u128,
) -> Result<u128> {
    let total = total_assets(token, staking)?;
    vault.convert_to_shares(assets, total, Rounding::Ceil)
}

pub fn preview_redeem<T: AssetToken, S: StakingPool>(
    vault: &VaultState,
    token: &mut T,
    staking: &mut S,
    shares: u128,
) -> Result<u128> {
    let total = total_assets(token, staking)?;
    vault.convert_to_assets(shares, total, Rounding::Floor)
}

/// Largest amount `owner` can withdraw in full at the current rate
pub fn max_withdraw<T: AssetToken, S: StakingPool>(
    vault: &VaultState,
    owner: &ShareBalance,
    token: &mut T,
    staking: &mut S,
) -> Result<u128> {
    preview_redeem(vault, token, staking, ledger::balance_of(owner))
}

pub fn max_redeem(owner: &ShareBalance) -> u128 {
    ledger::balance_of(owner)
}

/// Deposit exactly `assets`, minting shares to `receiver`
pub fn deposit<T: AssetToken, S: StakingPool>(
    vault: &mut VaultState,
    receiver: &mut ShareBalance,
    token: &mut T,
    staking: &mut S,
    assets: u128,
) -> Result<u128> {
    require!(assets > 0, VaultError::ZeroAmount);

    let shares = preview_deposit(vault, token, staking, assets)?;
    require!(shares > 0, VaultError::ZeroAmount);

    enter(vault, receiver, token, staking, assets, shares)?;
    Ok(shares)
}

/// Mint exactly `shares` to `receiver`, pulling the assets they cost
pub fn mint<T: AssetToken, S: StakingPool>(
    vault: &mut VaultState,
    receiver: &mut ShareBalance,
    token: &mut T,
    staking: &mut S,
    shares: u128,
) -> Result<u128> {
    require!(shares > 0, VaultError::ZeroAmount);

    let assets = preview_mint(vault, token, staking, shares)?;
    require!(assets > 0, VaultError::ZeroAmount);

    enter(vault, receiver, token, staking, assets, shares)?;
    Ok(assets)
}

/// Withdraw exactly `assets` on behalf of `owner`, burning the shares they cost
pub fn withdraw<T: AssetToken, S: StakingPool>(
    vault: &mut VaultState,
    owner: &mut ShareBalance,
    allowance: Option<&mut ShareAllowance>,
    caller: &Pubkey,
    token: &mut T,
    staking: &mut S,
    assets: u128,
) -> Result<u128> {
    require!(assets > 0, VaultError::ZeroAmount);

    let shares = preview_withdraw(vault, token, staking, assets)?;

    exit(vault, owner, allowance, caller, token, staking, assets, shares)?;
    Ok(shares)
}

/// Burn exactly `shares` of `owner`, paying out the assets they are worth
pub fn redeem<T: AssetToken, S: StakingPool>(
    vault: &mut VaultState,
    owner: &mut ShareBalance,
    allowance: Option<&mut ShareAllowance>,
    caller: &Pubkey,
    token: &mut T,
    staking: &mut S,
    shares: u128,
) -> Result<u128> {
    require!(shares > 0, VaultError::ZeroAmount);

    let assets = preview_redeem(vault, token, staking, shares)?;
    require!(assets > 0, VaultError::ZeroAmount);

    exit(vault, owner, allowance, caller, token, staking, assets, shares)?;
    Ok(assets)
}

fn enter<T: AssetToken, S: StakingPool>(
    vault: &mut VaultState,
    receiver: &mut ShareBalance,
    token: &mut T,
    staking: &mut S,
    assets: u128,
    shares: u128,
) -> Result<()> {
    ledger::credit(vault, receiver, shares)?;

    token.transfer_in(assets)?;
    staking.deposit_asset(assets)?;
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn exit<T: AssetToken, S: StakingPool>(
    vault: &mut VaultState,
    owner: &mut ShareBalance,
    allowance: Option<&mut ShareAllowance>,
    caller: &Pubkey,
    token: &mut T,
    staking: &mut S,
    assets: u128,
    shares: u128,
) -> Result<()> {
    ledger::spend_allowance(caller, &owner.holder, allowance, shares)?;
    ledger::debit(vault, owner, shares)?;

    // Idle harvest dust pays out first, the staked principal covers the rest
    let idle = token.idle_balance()?;
    let from_stake = assets.saturating_sub(idle);
    if from_stake > 0 {
        staking.withdraw_asset(from_stake)?;
    }

    token.transfer_out(assets)?;
    Ok(())
}
