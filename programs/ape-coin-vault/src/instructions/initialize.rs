use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, events::*, state::*};

/// Initialize a new vault for a given asset token and staking pool
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Vault owner - may update the fee
    /// Security: Must be signer, stored in state
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Vault state PDA
    /// Security: Initialized with proper space and padding for upgrades
    #[account(
        init,
        payer = authority,
        space = VAULT_STATE_SIZE,
        seeds = [VAULT_SEED, asset_mint.key().as_ref()],
        bump
    )]
    pub vault_state: Account<'info, VaultState>,

    /// Asset token mint (the underlying token users deposit)
    pub asset_mint: Account<'info, Mint>,

    /// Vault authority PDA - owns the vault token account and signs staking CPIs
    /// CHECK: PDA used as token authority, validated by seeds
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, asset_mint.key().as_ref()],
        bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    /// Vault's token account for idle assets
    /// Security: Owned by vault_authority PDA, correct mint
    #[account(
        init,
        payer = authority,
        associated_token::mint = asset_mint,
        associated_token::authority = vault_authority,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    /// Staking program the vault forwards deposits to
    /// CHECK: Must be an executable program; bound into vault state
    #[account(executable)]
    pub staking_program: UncheckedAccount<'info>,

    /// Stake pool inside the staking program
    /// CHECK: Must be owned by the staking program; bound into vault state
    #[account(owner = staking_program.key())]
    pub stake_pool: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>, fee_bps: u16) -> Result<()> {
    // CHECKS: Fee obeys the same ceiling as later updates
    VaultState::validate_fee(fee_bps)?;

    let vault_state = &mut ctx.accounts.vault_state;

    // EFFECTS: Initialize vault state
    vault_state.authority = ctx.accounts.authority.key();
    vault_state.asset_mint = ctx.accounts.asset_mint.key();
    vault_state.staking_program = ctx.accounts.staking_program.key();
    vault_state.stake_pool = ctx.accounts.stake_pool.key();
    vault_state.fee_bps = fee_bps;
    vault_state.asset_decimals = ctx.accounts.asset_mint.decimals;
    vault_state.total_shares = 0;
    vault_state.bump = ctx.bumps.vault_state;
    vault_state.authority_bump = ctx.bumps.vault_authority;
    vault_state._reserved = [0; 128];

    emit!(VaultInitialized {
        vault: vault_state.key(),
        authority: vault_state.authority,
        asset_mint: vault_state.asset_mint,
        staking_program: vault_state.staking_program,
        stake_pool: vault_state.stake_pool,
        fee_bps,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
