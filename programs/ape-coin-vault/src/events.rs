use anchor_lang::prelude::*;

/// Event emitted when a new vault is initialized
#[event]
pub struct VaultInitialized {
    pub vault: Pubkey,
    pub authority: Pubkey,
    pub asset_mint: Pubkey,
    pub staking_program: Pubkey,
    pub stake_pool: Pubkey,
    pub fee_bps: u16,
    pub timestamp: i64,
}

/// Event emitted when assets are deposited (deposit and mint)
#[event]
pub struct Deposited {
    pub vault: Pubkey,
    pub caller: Pubkey,
    pub receiver: Pubkey,
    pub assets: u128,
    pub shares: u128,
    pub total_shares: u128,
    pub timestamp: i64,
}

/// Event emitted when assets leave the vault (withdraw and redeem)
#[event]
pub struct Withdrawn {
    pub vault: Pubkey,
    pub caller: Pubkey,
    pub receiver: Pubkey,
    pub owner: Pubkey,
    pub assets: u128,
    pub shares: u128,
    pub total_shares: u128,
    pub timestamp: i64,
}

/// Event emitted by a harvest that claimed rewards
#[event]
#[derive(Debug)]
pub struct HarvestApeCoinRewards {
    pub claimed: u128,
    pub fee: u128,
}

#[event]
#[derive(Debug)]
pub struct FeeUpdated {
    pub new_fee_bps: u16,
}

#[event]
pub struct AuthorityTransferred {
    pub vault: Pubkey,
    pub previous_authority: Pubkey,
    pub new_authority: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct SharesTransferred {
    pub vault: Pubkey,
    pub from: Pubkey,
    pub to: Pubkey,
    pub shares: u128,
}

#[event]
pub struct SharesApproved {
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub spender: Pubkey,
    pub shares: u128,
}
