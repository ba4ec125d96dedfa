use anchor_lang::prelude::*;

use crate::{admin, constants::*, state::*};

/// Change the performance fee
#[derive(Accounts)]
pub struct UpdateFee<'info> {
    /// Must be the vault authority; checked by `admin::update_fee`
    pub caller: Signer<'info>,

    /// Vault state PDA
    #[account(
        mut,
        seeds = [VAULT_SEED, vault_state.asset_mint.as_ref()],
        bump = vault_state.bump,
    )]
    pub vault_state: Account<'info, VaultState>,
}

pub fn handler(ctx: Context<UpdateFee>, new_fee_bps: u16) -> Result<()> {
    let event = admin::update_fee(
        &mut ctx.accounts.vault_state,
        &ctx.accounts.caller.key(),
        new_fee_bps,
    )?;

    emit!(event);

    Ok(())
}
