//! Error definitions for the vault contracts
use odra::prelude::*;

/// Custom errors for the vault contracts
#[odra::odra_error]
#[derive(Debug)]
pub enum VaultError {
    /// Arithmetic overflow
    Overflow = 1,

    /// Arithmetic underflow
    Underflow = 2,

    /// Division by zero
    DivisionByZero = 3,

    /// Deposit above `max_deposit`
    ExceededMaxDeposit = 4,

    /// Mint above `max_mint`
    ExceededMaxMint = 5,

    /// Withdrawal above `max_withdraw`
    ExceededMaxWithdraw = 6,

    /// Redemption above `max_redeem`
    ExceededMaxRedeem = 7,

    /// Rewards synced before the current cycle ended
    SyncTooEarly = 8,

    /// Reward cycle length must be positive
    InvalidCycleLength = 9,

    /// Decimals offset out of range
    InvalidDecimalsOffset = 10,

    /// Underlying token transfer returned false
    TransferFailed = 11,

    /// Vault not initialized
    InvalidConfiguration = 12,
}

/// Custom errors for the CEP-18 ledger
#[odra::odra_error]
#[derive(Debug)]
pub enum TokenError {
    /// Insufficient allowance for transfer
    InsufficientAllowance = 100,

    /// Insufficient balance for operation
    InsufficientBalance = 101,

    /// Total supply or balance overflow
    SupplyOverflow = 102,
}
