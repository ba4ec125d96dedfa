//! Owner-gated administration: performance fee and ownership.

use anchor_lang::prelude::*;

use crate::errors::VaultError;
use crate::events::FeeUpdated;
use crate::state::VaultState;

fn only_authority(vault: &VaultState, caller: &Pubkey) -> Result<()> {
    if *caller != vault.authority {
        msg!("Unauthorized account: {}", caller);
        return err!(VaultError::Unauthorized);
    }
    Ok(())
}

/// Replace the performance fee; takes effect on the next harvest
pub fn update_fee(vault: &mut VaultState, caller: &Pubkey, new_fee_bps: u16) -> Result<FeeUpdated> {
    only_authority(vault, caller)?;
    VaultState::validate_fee(new_fee_bps)?;

    vault.fee_bps = new_fee_bps;

    Ok(FeeUpdated { new_fee_bps })
}

pub fn transfer_authority(
    vault: &mut VaultState,
    caller: &Pubkey,
    new_authority: Pubkey,
) -> Result<(Pubkey, Pubkey)> {
    only_authority(vault, caller)?;
    require!(
        new_authority != Pubkey::default(),
        VaultError::InvalidAuthority
    );

    let previous = vault.authority;
    vault.authority = new_authority;

    Ok((previous, new_authority))
}
