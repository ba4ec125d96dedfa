use anchor_lang::prelude::*;

use crate::{admin, constants::*, events::*, state::*};

#[derive(Accounts)]
pub struct TransferAuthority<'info> {
    /// Must be the current vault authority
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vault_state.asset_mint.as_ref()],
        bump = vault_state.bump,
    )]
    pub vault_state: Account<'info, VaultState>,
}

pub fn handler(ctx: Context<TransferAuthority>, new_authority: Pubkey) -> Result<()> {
    let (previous_authority, new_authority) = admin::transfer_authority(
        &mut ctx.accounts.vault_state,
        &ctx.accounts.caller.key(),
        new_authority,
    )?;

    emit!(AuthorityTransferred {
        vault: ctx.accounts.vault_state.key(),
        previous_authority,
        new_authority,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
