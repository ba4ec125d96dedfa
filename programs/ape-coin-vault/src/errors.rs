use anchor_lang::prelude::*;

/// Custom error codes for the ApeCoin Vault program
#[error_code]
pub enum VaultError {
    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Math overflow occurred during calculation")]
    MathOverflow,

    #[msg("Cannot divide by zero")]
    DivisionByZero,

    #[msg("Invalid token mint - does not match vault asset")]
    InvalidMint,

    #[msg("Invalid token account owner")]
    InvalidOwner,

    #[msg("Unauthorized - only vault authority can perform this action")]
    Unauthorized,

    #[msg("New authority cannot be the default pubkey")]
    InvalidAuthority,

    #[msg("Fee exceeds the 1000 bps ceiling")]
    FeeTooHigh,

    #[msg("Owner holds fewer shares than required")]
    InsufficientShares,

    #[msg("Caller allowance is lower than the shares required")]
    InsufficientAllowance,

    #[msg("Staking program does not match vault configuration")]
    InvalidStakingProgram,

    #[msg("Stake pool does not match vault configuration")]
    InvalidStakePool,

    #[msg("Staking program returned no data")]
    MissingReturnData,

    #[msg("Claimed rewards are lower than the reported unclaimed amount")]
    RewardShortfall,

    #[msg("Instruction has no counterparty token account")]
    MissingCounterparty,

    #[msg("Sender and recipient must differ")]
    SelfTransfer,
}
