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

/// Deposit assets into the vault and credit shares to a receiver
///
/// Shared by `deposit` (exact assets in) and `mint` (exact shares out).
///
/// Security checklist:
/// ✅ 1. SIGNER VALIDATION: Caller must be signer
/// ✅ 2. ACCOUNT OWNERSHIP: Vault state and share balance PDAs validated with seeds
/// ✅ 6. MATH SAFETY: Full-width checked math for share conversion
/// ✅ 7. TOKEN ACCOUNT VALIDATION: Validates mint and owner
/// ✅ 8. BUSINESS LOGIC: Rate read from the live staking position
/// ✅ 10. EVENTS: Emits Deposited event
#[derive(Accounts)]
pub struct Deposit<'info> {
    /// Caller paying the assets
    /// Security: Must be signer
    #[account(mut)]
    pub caller: Signer<'info>,

    /// Identity credited with the minted shares
    /// CHECK: Any account may hold shares
    pub receiver: UncheckedAccount<'info>,

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

    /// Receiver's share balance, created on first deposit
    #[account(
        init_if_needed,
        payer = caller,
        space = SHARE_BALANCE_SIZE,
        seeds = [SHARE_BALANCE_SEED, vault_state.key().as_ref(), receiver.key().as_ref()],
        bump,
    )]
    pub receiver_shares: Account<'info, ShareBalance>,

    /// Caller's asset token account (source)
    /// Security: Must be owned by caller and correct mint
    #[account(
        mut,
        constraint = caller_asset_account.mint == vault_state.asset_mint @ VaultError::InvalidMint,
        constraint = caller_asset_account.owner == caller.key() @ VaultError::InvalidOwner,
    )]
    pub caller_asset_account: Account<'info, TokenAccount>,

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
    pub system_program: Program<'info, System>,
}

/// What the caller fixed: assets paid in or shares received
#[derive(Clone, Copy)]
pub enum DepositAmount {
    Assets(u128),
    Shares(u128),
}

/// Returns the side the caller did not fix: shares for `Assets`, assets for `Shares`
pub fn handler(ctx: Context<Deposit>, amount: DepositAmount) -> Result<u128> {
    let accounts = &mut *ctx.accounts;

    // CHECKS: Staking accounts are the ones bound at initialization
    accounts.staking.validate(&accounts.vault_state)?;

    let vault_key = accounts.vault_state.key();
    accounts.receiver_shares.init_if_new(
        vault_key,
        accounts.receiver.key(),
        ctx.bumps.receiver_shares,
    );

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

    // EFFECTS + INTERACTIONS: ledger credit, pull assets, forward to staking
    let (assets, shares) = match amount {
        DepositAmount::Assets(assets) => {
            let shares = vault::deposit(
                &mut accounts.vault_state,
                &mut accounts.receiver_shares,
                &mut token,
                &mut staking,
                assets,
            )?;
            (assets, shares)
        }
        DepositAmount::Shares(shares) => {
            let assets = vault::mint(
                &mut accounts.vault_state,
                &mut accounts.receiver_shares,
                &mut token,
                &mut staking,
                shares,
            )?;
            (assets, shares)
        }
    };

    emit!(Deposited {
        vault: vault_key,
        caller: accounts.caller.key(),
        receiver: accounts.receiver.key(),
        assets,
        shares,
        total_shares: accounts.vault_state.total_shares,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(match amount {
        DepositAmount::Assets(_) => shares,
        DepositAmount::Shares(_) => assets,
    })
}
