use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    adapters::{Counterparty, TokenCpi},
    constants::*,
    errors::*,
    events::*,
    harvest,
    state::*,
};

use super::staking_accounts::*;

/// Claim staking rewards, pay the fee to the caller, compound the rest
///
/// Permissionless: the fee is the keeper's incentive to call it.
#[derive(Accounts)]
pub struct Harvest<'info> {
    /// Keeper triggering the harvest; receives the fee
    pub caller: Signer<'info>,

    /// Vault state PDA
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

    /// Caller's asset token account (fee destination)
    #[account(
        mut,
        constraint = caller_asset_account.mint == vault_state.asset_mint @ VaultError::InvalidMint,
        constraint = caller_asset_account.owner == caller.key() @ VaultError::InvalidOwner,
    )]
    pub caller_asset_account: Account<'info, TokenAccount>,

    /// Vault's token account
    #[account(
        mut,
        constraint = vault_token_account.mint == vault_state.asset_mint @ VaultError::InvalidMint,
        constraint = vault_token_account.owner == vault_authority.key() @ VaultError::InvalidOwner,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    pub staking: StakingAccounts<'info>,

    pub token_program: Program<'info, Token>,
}

/// All-zero outcome when nothing had accrued
pub fn handler(ctx: Context<Harvest>) -> Result<harvest::HarvestOutcome> {
    let accounts = &mut *ctx.accounts;

    accounts.staking.validate(&accounts.vault_state)?;

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
            token_account: accounts.caller_asset_account.to_account_info(),
            authority: accounts.caller.to_account_info(),
        }),
        signer_seeds,
    };

    let outcome = harvest::harvest(&accounts.vault_state, &mut token, &mut staking)?;

    if outcome.claimed > 0 {
        emit!(HarvestApeCoinRewards {
            claimed: outcome.claimed,
            fee: outcome.fee,
        });
    }

    Ok(outcome)
}
