//! In-memory stand-ins for the SPL token and staking programs.
//!
//! Both fakes share one `Chain` so tokens moved by the staking fake show up in
//! the vault's idle balance, as they do on-chain. `Harness` rolls every failed
//! operation back, mirroring transaction atomicity.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use anchor_lang::prelude::*;
use ape_coin_vault::{
    admin,
    collaborators::{AssetToken, StakeInfo, StakingPool},
    events::FeeUpdated,
    harvest::{self, HarvestOutcome},
    ledger,
    state::{ShareAllowance, ShareBalance, VaultState},
    vault,
};

pub const WAD: u128 = 1_000_000_000_000_000_000;

#[derive(Clone, Default)]
pub struct Chain {
    /// Vault's own token account
    pub vault_idle: u128,
    /// Staked principal of the vault
    pub deposited: u128,
    /// Rewards accrued in the staking program
    pub unclaimed: u128,
    /// Rewards the staking program withholds on claim
    pub claim_shortfall: u128,
    /// Token balances of wallets
    pub wallets: HashMap<Pubkey, u128>,
}

pub type SharedChain = Rc<RefCell<Chain>>;

pub struct FakeToken {
    chain: SharedChain,
    counterparty: Pubkey,
}

impl AssetToken for FakeToken {
    fn transfer_in(&mut self, amount: u128) -> Result<()> {
        let mut chain = self.chain.borrow_mut();
        let wallet = chain.wallets.entry(self.counterparty).or_default();
        *wallet = wallet
            .checked_sub(amount)
            .ok_or(ProgramError::InsufficientFunds)?;
        chain.vault_idle += amount;
        Ok(())
    }

    fn transfer_out(&mut self, amount: u128) -> Result<()> {
        let mut chain = self.chain.borrow_mut();
        chain.vault_idle = chain
            .vault_idle
            .checked_sub(amount)
            .ok_or(ProgramError::InsufficientFunds)?;
        *chain.wallets.entry(self.counterparty).or_default() += amount;
        Ok(())
    }

    fn idle_balance(&mut self) -> Result<u128> {
        Ok(self.chain.borrow().vault_idle)
    }
}

pub struct FakeStaking {
    chain: SharedChain,
}

impl StakingPool for FakeStaking {
    fn deposit_asset(&mut self, amount: u128) -> Result<()> {
        let mut chain = self.chain.borrow_mut();
        chain.vault_idle = chain
            .vault_idle
            .checked_sub(amount)
            .ok_or(ProgramError::InsufficientFunds)?;
        chain.deposited += amount;
        Ok(())
    }

    fn withdraw_asset(&mut self, amount: u128) -> Result<()> {
        let mut chain = self.chain.borrow_mut();
        chain.deposited = chain
            .deposited
            .checked_sub(amount)
            .ok_or(ProgramError::InsufficientFunds)?;
        chain.vault_idle += amount;
        Ok(())
    }

    fn claim_rewards(&mut self) -> Result<u128> {
        let mut chain = self.chain.borrow_mut();
        let delivered = chain.unclaimed - chain.claim_shortfall;
        chain.unclaimed = 0;
        chain.vault_idle += delivered;
        Ok(delivered)
    }

    fn stake_info(&mut self) -> Result<StakeInfo> {
        let chain = self.chain.borrow();
        Ok(StakeInfo {
            deposited_amount: chain.deposited,
            unclaimed_amount: chain.unclaimed,
        })
    }
}

/// A vault wired to the fakes, with per-holder ledger accounts
pub struct Harness {
    /// Address of the vault state PDA
    pub key: Pubkey,
    pub chain: SharedChain,
    pub state: VaultState,
    pub holders: HashMap<Pubkey, ShareBalance>,
    pub allowances: HashMap<(Pubkey, Pubkey), ShareAllowance>,
}

impl Harness {
    pub fn new(owner: Pubkey, fee_bps: u16, asset_decimals: u8) -> Self {
        Self {
            key: Pubkey::new_unique(),
            chain: Rc::new(RefCell::new(Chain::default())),
            state: VaultState {
                authority: owner,
                asset_mint: Pubkey::new_unique(),
                staking_program: Pubkey::new_unique(),
                stake_pool: Pubkey::new_unique(),
                fee_bps,
                asset_decimals,
                total_shares: 0,
                bump: 0,
                authority_bump: 0,
                _reserved: [0; 128],
            },
            holders: HashMap::new(),
            allowances: HashMap::new(),
        }
    }

    /// 18-decimal asset at the 5% launch fee
    pub fn ape_coin(owner: Pubkey) -> Self {
        Self::new(owner, 500, 18)
    }

    pub fn fund(&self, who: Pubkey, amount: u128) {
        *self.chain.borrow_mut().wallets.entry(who).or_default() += amount;
    }

    /// Rewards accrue in the staking program as time passes
    pub fn accrue(&self, reward: u128) {
        self.chain.borrow_mut().unclaimed += reward;
    }

    pub fn wallet(&self, who: Pubkey) -> u128 {
        self.chain.borrow().wallets.get(&who).copied().unwrap_or(0)
    }

    pub fn idle(&self) -> u128 {
        self.chain.borrow().vault_idle
    }

    pub fn stake(&self) -> StakeInfo {
        self.staking().stake_info().unwrap()
    }

    pub fn shares_of(&self, who: Pubkey) -> u128 {
        self.holders.get(&who).map(|b| b.shares).unwrap_or(0)
    }

    pub fn token(&self, counterparty: Pubkey) -> FakeToken {
        FakeToken {
            chain: self.chain.clone(),
            counterparty,
        }
    }

    pub fn staking(&self) -> FakeStaking {
        FakeStaking {
            chain: self.chain.clone(),
        }
    }

    pub fn total_assets(&self) -> u128 {
        vault::total_assets(&mut self.token(Pubkey::default()), &mut self.staking()).unwrap()
    }

    pub fn max_withdraw(&self, owner: Pubkey) -> u128 {
        let balance = self.balance_account(owner);
        vault::max_withdraw(
            &self.state,
            &balance,
            &mut self.token(Pubkey::default()),
            &mut self.staking(),
        )
        .unwrap()
    }

    /// Balance account as `init_if_needed` hands it to the handler
    fn balance_account(&self, holder: Pubkey) -> ShareBalance {
        let mut balance = self.holders.get(&holder).cloned().unwrap_or(ShareBalance {
            vault: Pubkey::default(),
            holder: Pubkey::default(),
            shares: 0,
            bump: 0,
        });
        balance.init_if_new(self.key, holder, 0);
        balance
    }

    /// Run `op`, restoring every piece of state if it fails
    fn atomically<R>(&mut self, op: impl FnOnce(&mut Self) -> Result<R>) -> Result<R> {
        let state = self.state.clone();
        let holders = self.holders.clone();
        let allowances = self.allowances.clone();
        let chain = self.chain.borrow().clone();

        let result = op(self);
        if result.is_err() {
            self.state = state;
            self.holders = holders;
            self.allowances = allowances;
            *self.chain.borrow_mut() = chain;
        }
        result
    }

    pub fn deposit(&mut self, caller: Pubkey, receiver: Pubkey, assets: u128) -> Result<u128> {
        self.atomically(|h| {
            let mut balance = h.balance_account(receiver);
            let mut token = h.token(caller);
            let mut staking = h.staking();
            let shares = vault::deposit(
                &mut h.state,
                &mut balance,
                &mut token,
                &mut staking,
                assets,
            )?;
            h.holders.insert(receiver, balance);
            Ok(shares)
        })
    }

    pub fn mint(&mut self, caller: Pubkey, receiver: Pubkey, shares: u128) -> Result<u128> {
        self.atomically(|h| {
            let mut balance = h.balance_account(receiver);
            let mut token = h.token(caller);
            let mut staking = h.staking();
            let assets = vault::mint(
                &mut h.state,
                &mut balance,
                &mut token,
                &mut staking,
                shares,
            )?;
            h.holders.insert(receiver, balance);
            Ok(assets)
        })
    }

    pub fn withdraw(
        &mut self,
        caller: Pubkey,
        receiver: Pubkey,
        owner: Pubkey,
        assets: u128,
    ) -> Result<u128> {
        self.atomically(|h| {
            let mut balance = h.balance_account(owner);
            let mut token = h.token(receiver);
            let mut staking = h.staking();
            let shares = vault::withdraw(
                &mut h.state,
                &mut balance,
                h.allowances.get_mut(&(owner, caller)),
                &caller,
                &mut token,
                &mut staking,
                assets,
            )?;
            h.holders.insert(owner, balance);
            Ok(shares)
        })
    }

    pub fn redeem(
        &mut self,
        caller: Pubkey,
        receiver: Pubkey,
        owner: Pubkey,
        shares: u128,
    ) -> Result<u128> {
        self.atomically(|h| {
            let mut balance = h.balance_account(owner);
            let mut token = h.token(receiver);
            let mut staking = h.staking();
            let assets = vault::redeem(
                &mut h.state,
                &mut balance,
                h.allowances.get_mut(&(owner, caller)),
                &caller,
                &mut token,
                &mut staking,
                shares,
            )?;
            h.holders.insert(owner, balance);
            Ok(assets)
        })
    }

    pub fn approve(&mut self, owner: Pubkey, spender: Pubkey, shares: u128) -> Result<()> {
        let key = self.key;
        self.atomically(|h| {
            let allowance = h
                .allowances
                .entry((owner, spender))
                .or_insert(ShareAllowance {
                    vault: Pubkey::default(),
                    owner: Pubkey::default(),
                    spender: Pubkey::default(),
                    shares: 0,
                    bump: 0,
                });
            allowance.init_if_new(key, owner, spender, 0);
            ledger::approve(allowance, &owner, shares)
        })
    }

    pub fn harvest(&mut self, caller: Pubkey) -> Result<HarvestOutcome> {
        self.atomically(|h| {
            let mut token = h.token(caller);
            let mut staking = h.staking();
            harvest::harvest(&h.state, &mut token, &mut staking)
        })
    }

    pub fn update_fee(&mut self, caller: Pubkey, new_fee_bps: u16) -> Result<FeeUpdated> {
        self.atomically(|h| admin::update_fee(&mut h.state, &caller, new_fee_bps))
    }
}
