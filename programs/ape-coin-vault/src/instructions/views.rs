use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    adapters::{StakingCpi, TokenCpi},
    collaborators::{StakeInfo, StakingPool},
    constants::*,
    errors::*,
    state::*,
    vault,
};

use super::staking_accounts::*;

/// Read-only queries against the live staking position
///
/// Values are delivered as return data. Staking accounts are still writable
/// because the position query goes through the staking program.
#[derive(Accounts)]
pub struct VaultView<'info> {
    #[account(
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

    #[account(
        mut,
        constraint = vault_token_account.mint == vault_state.asset_mint @ VaultError::InvalidMint,
        constraint = vault_token_account.owner == vault_authority.key() @ VaultError::InvalidOwner,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    pub staking: StakingAccounts<'info>,

    pub token_program: Program<'info, Token>,
}

/// Share queries for a single holder
#[derive(Accounts)]
pub struct HolderView<'info> {
    pub view: VaultView<'info>,

    #[account(
        constraint = holder_shares.vault == view.vault_state.key() @ VaultError::InvalidOwner,
    )]
    pub holder_shares: Account<'info, ShareBalance>,
}

/// Run `query` with the vault's collaborators wired up
fn with_collaborators<R>(
    view: &mut VaultView<'_>,
    query: impl FnOnce(&VaultState, &mut TokenCpi<'_, '_>, &mut StakingCpi<'_, '_>) -> Result<R>,
) -> Result<R> {
    view.staking.validate(&view.vault_state)?;

    let asset_mint_key = view.vault_state.asset_mint;
    let authority_bump = view.vault_state.authority_bump;
    let authority_seeds: &[&[u8]] = &[
        VAULT_AUTHORITY_SEED,
        asset_mint_key.as_ref(),
        &[authority_bump],
    ];
    let signer_seeds = &[&authority_seeds[..]];

    let mut staking = view.staking.cpi(
        view.vault_authority.to_account_info(),
        view.vault_token_account.to_account_info(),
        view.token_program.to_account_info(),
        signer_seeds,
    );
    let mut token = TokenCpi {
        token_program: view.token_program.to_account_info(),
        vault_token_account: &mut view.vault_token_account,
        vault_authority: view.vault_authority.to_account_info(),
        counterparty: None,
        signer_seeds,
    };

    query(&*view.vault_state, &mut token, &mut staking)
}

pub fn total_assets(ctx: Context<VaultView>) -> Result<u128> {
    with_collaborators(ctx.accounts, |_, token, staking| {
        vault::total_assets(token, staking)
    })
}

/// The vault's live position in the staking pool
pub fn get_ape_coin_stake(ctx: Context<VaultView>) -> Result<StakeInfo> {
    with_collaborators(ctx.accounts, |_, _, staking| staking.stake_info())
}

pub fn max_withdraw(ctx: Context<HolderView>) -> Result<u128> {
    let accounts = &mut *ctx.accounts;
    let holder_shares = &accounts.holder_shares;
    with_collaborators(&mut accounts.view, |vault_state, token, staking| {
        vault::max_withdraw(vault_state, holder_shares, token, staking)
    })
}

pub fn max_redeem(ctx: Context<HolderView>) -> Result<u128> {
    Ok(vault::max_redeem(&ctx.accounts.holder_shares))
}
