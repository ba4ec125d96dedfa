use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, ledger, state::*};

/// Move shares from the caller to another holder
#[derive(Accounts)]
pub struct TransferShares<'info> {
    #[account(mut)]
    pub caller: Signer<'info>,

    /// CHECK: Any account may hold shares
    #[account(constraint = recipient.key() != caller.key() @ VaultError::SelfTransfer)]
    pub recipient: UncheckedAccount<'info>,

    #[account(
        seeds = [VAULT_SEED, vault_state.asset_mint.as_ref()],
        bump = vault_state.bump,
    )]
    pub vault_state: Account<'info, VaultState>,

    #[account(
        mut,
        seeds = [SHARE_BALANCE_SEED, vault_state.key().as_ref(), caller.key().as_ref()],
        bump = caller_shares.bump,
    )]
    pub caller_shares: Account<'info, ShareBalance>,

    #[account(
        init_if_needed,
        payer = caller,
        space = SHARE_BALANCE_SIZE,
        seeds = [SHARE_BALANCE_SEED, vault_state.key().as_ref(), recipient.key().as_ref()],
        bump,
    )]
    pub recipient_shares: Account<'info, ShareBalance>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<TransferShares>, shares: u128) -> Result<()> {
    require!(shares > 0, VaultError::ZeroAmount);

    let accounts = &mut *ctx.accounts;
    let vault_key = accounts.vault_state.key();

    accounts.recipient_shares.init_if_new(
        vault_key,
        accounts.recipient.key(),
        ctx.bumps.recipient_shares,
    );

    ledger::transfer(
        &mut accounts.caller_shares,
        &mut accounts.recipient_shares,
        shares,
    )?;

    emit!(SharesTransferred {
        vault: vault_key,
        from: accounts.caller.key(),
        to: accounts.recipient.key(),
        shares,
    });

    Ok(())
}
