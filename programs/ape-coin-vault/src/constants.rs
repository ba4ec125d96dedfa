// Constants for the ApeCoin Vault program

/// Seed for vault state PDA
pub const VAULT_SEED: &[u8] = b"vault";

/// Seed for per-holder share balance PDA
pub const SHARE_BALANCE_SEED: &[u8] = b"shares";

/// Seed for share allowance PDA
pub const SHARE_ALLOWANCE_SEED: &[u8] = b"allowance";

/// Seed for vault authority PDA (owns the vault token account, signs staking CPIs)
pub const VAULT_AUTHORITY_SEED: &[u8] = b"vault_authority";

/// Hard ceiling for the performance fee (10%)
pub const MAX_FEE_BPS: u16 = 1_000;

/// 100% in basis points
pub const BPS_DENOMINATOR: u128 = 10_000;

/// Space for VaultState account (8 discriminator + 32 authority + 32 asset_mint +
/// 32 staking_program + 32 stake_pool + 2 fee_bps + 1 asset_decimals +
/// 16 total_shares + 1 bump + 1 authority_bump + 128 padding)
pub const VAULT_STATE_SIZE: usize = 8 + 32 + 32 + 32 + 32 + 2 + 1 + 16 + 1 + 1 + 128;

/// Space for ShareBalance account (8 discriminator + 32 vault + 32 holder + 16 shares + 1 bump)
pub const SHARE_BALANCE_SIZE: usize = 8 + 32 + 32 + 16 + 1;

/// Space for ShareAllowance account (8 discriminator + 32 vault + 32 owner +
/// 32 spender + 16 shares + 1 bump)
pub const SHARE_ALLOWANCE_SIZE: usize = 8 + 32 + 32 + 32 + 16 + 1;

/// Instruction discriminators of the staking program (`sha256("global:<name>")[..8]`)
pub const DEPOSIT_ASSET_DISCRIMINATOR: [u8; 8] = [107, 93, 89, 87, 226, 203, 154, 19];
pub const WITHDRAW_ASSET_DISCRIMINATOR: [u8; 8] = [78, 193, 207, 125, 63, 193, 129, 12];
pub const CLAIM_REWARDS_DISCRIMINATOR: [u8; 8] = [4, 144, 132, 71, 116, 23, 151, 80];
pub const GET_STAKE_INFO_DISCRIMINATOR: [u8; 8] = [76, 145, 100, 174, 239, 127, 7, 216];
