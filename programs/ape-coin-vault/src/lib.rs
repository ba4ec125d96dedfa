// ApeCoin Vault - auto-compounding staking vault with share accounting
// Deposits are forwarded to an external staking program; harvested rewards
// pay a keeper fee and are re-staked for every share holder.

use anchor_lang::prelude::*;

pub mod adapters;
pub mod admin;
pub mod collaborators;
pub mod constants;
pub mod errors;
pub mod events;
pub mod harvest;
pub mod instructions;
pub mod ledger;
pub mod math;
pub mod state;
pub mod vault;

use collaborators::StakeInfo;
use harvest::HarvestOutcome;
use instructions::*;

declare_id!("VAULTvgMLuVNhWKYA2oYzH5gcz6XxsjXrqvnxTJbG8F");

#[program]
pub mod ape_coin_vault {
    use super::*;

    /// Initialize a vault for an asset token bound to one staking pool
    ///
    /// Security considerations:
    /// - Initializer becomes the vault authority
    /// - Initial fee is bounded by the same 10% ceiling as `update_fee`
    /// - Staking program and pool are fixed for the life of the vault
    pub fn initialize(ctx: Context<Initialize>, fee_bps: u16) -> Result<()> {
        instructions::initialize::handler(ctx, fee_bps)
    }

    /// Deposit exactly `assets` and receive shares; returns the shares minted
    ///
    /// Security considerations:
    /// - Shares round down in favour of existing holders
    /// - Rate is read from the live staking position
    /// - Assets are forwarded to the staking program in the same instruction
    pub fn deposit(ctx: Context<Deposit>, assets: u64) -> Result<u128> {
        instructions::deposit::handler(ctx, DepositAmount::Assets(assets as u128))
    }

    /// Mint exactly `shares`; returns the assets pulled (rounded up)
    pub fn mint(ctx: Context<Deposit>, shares: u128) -> Result<u128> {
        instructions::deposit::handler(ctx, DepositAmount::Shares(shares))
    }

    /// Withdraw exactly `assets` to the receiver; returns the shares burned
    ///
    /// Security considerations:
    /// - Shares burned round up so remaining holders are never diluted
    /// - Caller must be the owner or hold a sufficient allowance
    pub fn withdraw(ctx: Context<Withdraw>, assets: u64) -> Result<u128> {
        instructions::withdraw::handler(ctx, WithdrawAmount::Assets(assets as u128))
    }

    /// Redeem exactly `shares`; returns the assets paid out (rounded down)
    pub fn redeem(ctx: Context<Withdraw>, shares: u128) -> Result<u128> {
        instructions::withdraw::handler(ctx, WithdrawAmount::Shares(shares))
    }

    /// Claim staking rewards, pay the fee to the caller and re-stake the rest
    ///
    /// Permissionless. A harvest with nothing accrued succeeds without effect.
    pub fn harvest_ape_coin_rewards(ctx: Context<Harvest>) -> Result<HarvestOutcome> {
        instructions::harvest::handler(ctx)
    }

    /// Set the performance fee (authority only, at most 1000 bps)
    pub fn update_fee(ctx: Context<UpdateFee>, new_fee_bps: u16) -> Result<()> {
        instructions::update_fee::handler(ctx, new_fee_bps)
    }

    /// Hand the vault authority to another key (authority only)
    pub fn transfer_authority(ctx: Context<TransferAuthority>, new_authority: Pubkey) -> Result<()> {
        instructions::transfer_authority::handler(ctx, new_authority)
    }

    /// Move shares from the caller to a recipient; supply is unchanged
    pub fn transfer_shares(ctx: Context<TransferShares>, shares: u128) -> Result<()> {
        instructions::transfer_shares::handler(ctx, shares)
    }

    /// Let a spender withdraw or redeem up to `shares` of the caller's balance
    pub fn approve_shares(ctx: Context<ApproveShares>, shares: u128) -> Result<()> {
        instructions::approve_shares::handler(ctx, shares)
    }

    /// Staked principal plus idle vault balance
    pub fn total_assets(ctx: Context<VaultView>) -> Result<u128> {
        instructions::views::total_assets(ctx)
    }

    /// The vault's live principal and unclaimed rewards in the staking pool
    pub fn get_ape_coin_stake(ctx: Context<VaultView>) -> Result<StakeInfo> {
        instructions::views::get_ape_coin_stake(ctx)
    }

    /// Assets the holder's whole balance redeems for at the current rate
    pub fn max_withdraw(ctx: Context<HolderView>) -> Result<u128> {
        instructions::views::max_withdraw(ctx)
    }

    /// The holder's share balance
    pub fn max_redeem(ctx: Context<HolderView>) -> Result<u128> {
        instructions::views::max_redeem(ctx)
    }
}
