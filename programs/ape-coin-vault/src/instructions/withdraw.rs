use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    adapters::{Counterparty, TokenCpi},
    constants::*,
    errors::*,
    events::*,
    state::*,
    vault,
};

use super::staking_accounts::*;

/// Burn an owner's shares and pay the backing assets to a receiver
///
/// Shared by `withdraw` (exact assets out) and `redeem` (exact shares burned).
/// The caller is either the owner or a spender with a sufficient allowance.
#[derive(Accounts)]
pub struct Withdraw<'info> {
    /// Owner of the shares or an approved spender
    pub caller: Signer<'info>,

    /// Holder whose shares are burned
    /// CHECK: Only used to derive the share balance PDA
    pub owner: UncheckedAccount<'info>,

    /// Vault state PDA
    #[account(
        mut,
        seeds = [VAULT_SEED, vault_state.asset_mint.as_ref()],
        bump = vault_state.bump,
    )]
    pub vault_state: Account<'info, VaultState>,

    /// Vault authority PDA
    /// CHECK: PDA used as authority, validated by seeds
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, vault_state.asset_mint.as_ref()],
        bump = vault_state.authority_bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    /// Owner's share balance
    #[account(
        mut,
        seeds = [SHARE_BALANCE_SEED, vault_state.key().as_ref(), owner.key().as_ref()],
        bump = owner_shares.bump,
    )]
    pub owner_shares: Account<'info, ShareBalance>,

    /// Allowance granted by owner to caller; omitted when caller is the owner
    #[account(
        mut,
        constraint = caller_allowance.vault == vault_state.key() @ VaultError::InsufficientAllowance,
    )]
    pub caller_allowance: Option<Account<'info, ShareAllowance>>,

    /// Receiver's asset token account (destination)
    /// Security: Must be correct mint
    #[account(
        mut,
        constraint = receiver_asset_account.mint == vault_state.asset_mint @ VaultError::InvalidMint,
    )]
    pub receiver_asset_account: Account<'info, TokenAccount>,

    /// Vault's token account
    /// Security: Must be correct mint and owned by vault_authority
    #[account(
        mut,
        constraint = vault_token_account.mint == vault_state.asset_mint @ VaultError::InvalidMint,
        constraint = vault_token_account.owner == vault_authority.key() @ VaultError::InvalidOwner,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    pub staking: StakingAccounts<'info>,

    pub token_program: Program<'info, Token>,
}

/// What the caller fixed: assets paid out or shares burned
#[derive(Clone, Copy)]
pub enum WithdrawAmount {
    Assets(u128),
    Shares(u128),
}

/// Returns the side the caller did not fix: shares for `Assets`, assets for `Shares`
pub fn handler(ctx: Context<Withdraw>, amount: WithdrawAmount) -> Result<u128> {
    let accounts = &mut *ctx.accounts;

    // CHECKS: Staking accounts are the ones bound at initialization
    accounts.staking.validate(&accounts.vault_state)?;

    let caller_key = accounts.caller.key();

    let asset_mint_key = accounts.vault_state.asset_mint;
    let authority_bump = accounts.vault_state.authority_bump;
    let authority_seeds: &[&[u8]] = &[
        VAULT_AUTHORITY_SEED,
        asset_mint_key.as_ref(),
        &[authority_bump],
    ];
    let signer_seeds = &[&authority_seeds[..]];

    let mut staking = accounts.staking.cpi(
        accounts.vault_authority.to_account_info(),
        accounts.vault_token_account.to_account_info(),
        accounts.token_program.to_account_info(),
        signer_seeds,
    );
    let mut token = TokenCpi {
        token_program: accounts.token_program.to_account_info(),
        vault_token_account: &mut accounts.vault_token_account,
        vault_authority: accounts.vault_authority.to_account_info(),
        counterparty: Some(Counterparty {
            token_account: accounts.receiver_asset_account.to_account_info(),
            authority: accounts.vault_authority.to_account_info(),
        }),
        signer_seeds,
    };

    let allowance = accounts.caller_allowance.as_deref_mut();

    // EFFECTS + INTERACTIONS: allowance, ledger debit, unstake, pay out
    let (assets, shares) = match amount {
        WithdrawAmount::Assets(assets) => {
            let shares = vault::withdraw(
                &mut accounts.vault_state,
                &mut accounts.owner_shares,
                allowance,
                &caller_key,
                &mut token,
                &mut staking,
                assets,
            )?;
            (assets, shares)
        }
        WithdrawAmount::Shares(shares) => {
            let assets = vault::redeem(
                &mut accounts.vault_state,
                &mut accounts.owner_shares,
                allowance,
                &caller_key,
                &mut token,
                &mut staking,
                shares,
            )?;
            (assets, shares)
        }
    };

    emit!(Withdrawn {
        vault: accounts.vault_state.key(),
        caller: caller_key,
        receiver: accounts.receiver_asset_account.owner,
        owner: accounts.owner.key(),
        assets,
        shares,
        total_shares: accounts.vault_state.total_shares,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(match amount {
        WithdrawAmount::Assets(_) => shares,
        WithdrawAmount::Shares(_) => assets,
    })
}
