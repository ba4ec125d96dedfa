use anchor_lang::prelude::*;

use crate::{adapters::StakingCpi, errors::*, state::*};

/// Staking program accounts shared by every instruction that touches the position
#[derive(Accounts)]
pub struct StakingAccounts<'info> {
    /// Staking program
    /// CHECK: Address checked against vault_state.staking_program in `validate`
    pub staking_program: UncheckedAccount<'info>,

    /// Stake pool inside the staking program
    /// CHECK: Address checked against vault_state.stake_pool in `validate`
    #[account(mut)]
    pub stake_pool: UncheckedAccount<'info>,

    /// Vault's position in the pool
    /// CHECK: Derived and validated by the staking program
    #[account(mut)]
    pub stake_position: UncheckedAccount<'info>,

    /// Token account holding the pool's staked assets
    /// CHECK: Validated by the staking program
    #[account(mut)]
    pub pool_token_account: UncheckedAccount<'info>,
}

impl<'info> StakingAccounts<'info> {
    /// Reject a staking program or pool the vault was not initialized with
    pub fn validate(&self, vault_state: &VaultState) -> Result<()> {
        require_keys_eq!(
            self.staking_program.key(),
            vault_state.staking_program,
            VaultError::InvalidStakingProgram
        );
        require_keys_eq!(
            self.stake_pool.key(),
            vault_state.stake_pool,
            VaultError::InvalidStakePool
        );
        Ok(())
    }

    pub fn cpi<'a>(
        &self,
        vault_authority: AccountInfo<'info>,
        vault_token_account: AccountInfo<'info>,
        token_program: AccountInfo<'info>,
        signer_seeds: &'a [&'a [&'a [u8]]],
    ) -> StakingCpi<'a, 'info> {
        StakingCpi {
            staking_program: self.staking_program.to_account_info(),
            stake_pool: self.stake_pool.to_account_info(),
            stake_position: self.stake_position.to_account_info(),
            staker: vault_authority,
            staker_token_account: vault_token_account,
            pool_token_account: self.pool_token_account.to_account_info(),
            token_program,
            signer_seeds,
        }
    }
}
