//! Harvest coordinator: claim staking rewards, pay the keeper fee, compound
//! the rest.

use anchor_lang::prelude::*;

use crate::collaborators::{AssetToken, StakingPool};
use crate::constants::BPS_DENOMINATOR;
use crate::errors::VaultError;
use crate::math::{mul_div, Rounding};
use crate::state::VaultState;

/// Result of one harvest; all zero when there was nothing to claim
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HarvestOutcome {
    pub claimed: u128,
    pub fee: u128,
    /// Idle balance moved into the staking position, zero when under the dust threshold
    pub restaked: u128,
}

/// `claimed * fee_bps / 10000`, rounded down
pub fn performance_fee(claimed: u128, fee_bps: u16) -> Result<u128> {
    mul_div(claimed, fee_bps as u128, BPS_DENOMINATOR, Rounding::Floor)
}

/// Claim pending rewards, pay the fee to the caller behind `token` and
/// re-stake the vault's idle balance once it reaches one whole token
pub fn harvest<T: AssetToken, S: StakingPool>(
    vault: &VaultState,
    token: &mut T,
    staking: &mut S,
) -> Result<HarvestOutcome> {
    let unclaimed = staking.stake_info()?.unclaimed_amount;
    if unclaimed == 0 {
        msg!("No rewards to harvest");
        return Ok(HarvestOutcome::default());
    }

    let delivered = staking.claim_rewards()?;
    require!(delivered >= unclaimed, VaultError::RewardShortfall);
    let claimed = unclaimed;

    let fee = performance_fee(claimed, vault.fee_bps)?;
    if fee > 0 {
        token.transfer_out(fee)?;
    }

    // Includes dust left idle by earlier harvests
    let idle = token.idle_balance()?;
    let restaked = if idle >= vault.dust_threshold()? {
        staking.deposit_asset(idle)?;
        idle
    } else {
        msg!("Idle balance {} below re-stake threshold, left in vault", idle);
        0
    };

    Ok(HarvestOutcome {
        claimed,
        fee,
        restaked,
    })
}
