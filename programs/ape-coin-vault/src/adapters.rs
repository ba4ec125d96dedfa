//! CPI adapters behind the collaborator traits.
//!
//! The staking program is Anchor-style: 8-byte `global:<name>` discriminators,
//! borsh arguments, and borsh return data for queries and claims.
//!
//! # Staking account layout (every instruction)
//! 0. `[writable]` Stake pool
//! 1. `[writable]` Stake position of the vault
//! 2. `[signer]`   Staker (vault authority PDA)
//! 3. `[writable]` Staker token account (vault token account)
//! 4. `[writable]` Pool token account
//! 5. `[]`         SPL Token program

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::solana_program::program::{get_return_data, invoke_signed};
use anchor_spl::token::{self, TokenAccount, Transfer};

use crate::collaborators::{AssetToken, StakeInfo, StakingPool};
use crate::constants::*;
use crate::errors::VaultError;

fn to_token_amount(amount: u128) -> Result<u64> {
    u64::try_from(amount).map_err(|_| error!(VaultError::MathOverflow))
}

/// Token account and signing authority on the other side of a transfer
pub struct Counterparty<'info> {
    pub token_account: AccountInfo<'info>,
    pub authority: AccountInfo<'info>,
}

/// SPL token movements between the vault and one counterparty
pub struct TokenCpi<'a, 'info> {
    pub token_program: AccountInfo<'info>,
    pub vault_token_account: &'a mut Account<'info, TokenAccount>,
    pub vault_authority: AccountInfo<'info>,
    pub counterparty: Option<Counterparty<'info>>,
    pub signer_seeds: &'a [&'a [&'a [u8]]],
}

impl<'info> TokenCpi<'_, 'info> {
    fn counterparty(&self) -> Result<&Counterparty<'info>> {
        self.counterparty
            .as_ref()
            .ok_or(error!(VaultError::MissingCounterparty))
    }
}

impl AssetToken for TokenCpi<'_, '_> {
    fn transfer_in(&mut self, amount: u128) -> Result<()> {
        let counterparty = self.counterparty()?;
        let transfer_ctx = CpiContext::new(
            self.token_program.clone(),
            Transfer {
                from: counterparty.token_account.clone(),
                to: self.vault_token_account.to_account_info(),
                authority: counterparty.authority.clone(),
            },
        );
        token::transfer(transfer_ctx, to_token_amount(amount)?)
    }

    fn transfer_out(&mut self, amount: u128) -> Result<()> {
        let counterparty = self.counterparty()?;
        let transfer_ctx = CpiContext::new_with_signer(
            self.token_program.clone(),
            Transfer {
                from: self.vault_token_account.to_account_info(),
                to: counterparty.token_account.clone(),
                authority: self.vault_authority.clone(),
            },
            self.signer_seeds,
        );
        token::transfer(transfer_ctx, to_token_amount(amount)?)
    }

    fn idle_balance(&mut self) -> Result<u128> {
        // Earlier CPIs in this instruction may have moved tokens
        self.vault_token_account.reload()?;
        Ok(self.vault_token_account.amount as u128)
    }
}

/// Stake info as the staking program returns it
#[derive(AnchorSerialize, AnchorDeserialize)]
struct StakeInfoReturn {
    deposited_amount: u64,
    unclaimed_amount: u64,
}

/// Calls into the staking program, signed by the vault authority PDA
pub struct StakingCpi<'a, 'info> {
    pub staking_program: AccountInfo<'info>,
    pub stake_pool: AccountInfo<'info>,
    pub stake_position: AccountInfo<'info>,
    pub staker: AccountInfo<'info>,
    pub staker_token_account: AccountInfo<'info>,
    pub pool_token_account: AccountInfo<'info>,
    pub token_program: AccountInfo<'info>,
    pub signer_seeds: &'a [&'a [&'a [u8]]],
}

impl StakingCpi<'_, '_> {
    fn invoke(&self, discriminator: [u8; 8], amount: Option<u64>) -> Result<()> {
        let mut data = discriminator.to_vec();
        if let Some(amount) = amount {
            data.extend_from_slice(&amount.to_le_bytes());
        }

        let instruction = Instruction {
            program_id: self.staking_program.key(),
            accounts: vec![
                AccountMeta::new(self.stake_pool.key(), false),
                AccountMeta::new(self.stake_position.key(), false),
                AccountMeta::new_readonly(self.staker.key(), true),
                AccountMeta::new(self.staker_token_account.key(), false),
                AccountMeta::new(self.pool_token_account.key(), false),
                AccountMeta::new_readonly(self.token_program.key(), false),
            ],
            data,
        };

        invoke_signed(
            &instruction,
            &[
                self.stake_pool.clone(),
                self.stake_position.clone(),
                self.staker.clone(),
                self.staker_token_account.clone(),
                self.pool_token_account.clone(),
                self.token_program.clone(),
                self.staking_program.clone(),
            ],
            self.signer_seeds,
        )?;
        Ok(())
    }

    fn read_return_data<T: AnchorDeserialize>(&self) -> Result<T> {
        let (program_id, data) = get_return_data().ok_or(VaultError::MissingReturnData)?;
        require_keys_eq!(
            program_id,
            self.staking_program.key(),
            VaultError::InvalidStakingProgram
        );
        T::try_from_slice(&data).map_err(|_| error!(VaultError::MissingReturnData))
    }
}

impl StakingPool for StakingCpi<'_, '_> {
    fn deposit_asset(&mut self, amount: u128) -> Result<()> {
        self.invoke(DEPOSIT_ASSET_DISCRIMINATOR, Some(to_token_amount(amount)?))
    }

    fn withdraw_asset(&mut self, amount: u128) -> Result<()> {
        self.invoke(WITHDRAW_ASSET_DISCRIMINATOR, Some(to_token_amount(amount)?))
    }

    fn claim_rewards(&mut self) -> Result<u128> {
        self.invoke(CLAIM_REWARDS_DISCRIMINATOR, None)?;
        let claimed: u64 = self.read_return_data()?;
        Ok(claimed as u128)
    }

    fn stake_info(&mut self) -> Result<StakeInfo> {
        self.invoke(GET_STAKE_INFO_DISCRIMINATOR, None)?;
        let info: StakeInfoReturn = self.read_return_data()?;
        Ok(StakeInfo {
            deposited_amount: info.deposited_amount as u128,
            unclaimed_amount: info.unclaimed_amount as u128,
        })
    }
}
