use anchor_lang::prelude::*;

use crate::{constants::*, events::*, ledger, state::*};

/// Let a spender withdraw or redeem up to `shares` of the caller's balance
#[derive(Accounts)]
pub struct ApproveShares<'info> {
    #[account(mut)]
    pub caller: Signer<'info>,

    /// CHECK: Any account may be approved
    pub spender: UncheckedAccount<'info>,

    #[account(
        seeds = [VAULT_SEED, vault_state.asset_mint.as_ref()],
        bump = vault_state.bump,
    )]
    pub vault_state: Account<'info, VaultState>,

    #[account(
        init_if_needed,
        payer = caller,
        space = SHARE_ALLOWANCE_SIZE,
        seeds = [
            SHARE_ALLOWANCE_SEED,
            vault_state.key().as_ref(),
            caller.key().as_ref(),
            spender.key().as_ref(),
        ],
        bump,
    )]
    pub allowance: Account<'info, ShareAllowance>,

    pub system_program: Program<'info, System>,
}

/// `u128::MAX` approves without limit
pub fn handler(ctx: Context<ApproveShares>, shares: u128) -> Result<()> {
    let accounts = &mut *ctx.accounts;
    let vault_key = accounts.vault_state.key();

    accounts.allowance.init_if_new(
        vault_key,
        accounts.caller.key(),
        accounts.spender.key(),
        ctx.bumps.allowance,
    );
    ledger::approve(&mut accounts.allowance, &accounts.caller.key(), shares)?;

    emit!(SharesApproved {
        vault: vault_key,
        owner: accounts.caller.key(),
        spender: accounts.spender.key(),
        shares,
    });

    Ok(())
}
