//! Vault events

use odra::prelude::*;
use odra::casper_types::U256;

/// Emitted by `deposit` and `mint`
#[odra::event]
pub struct Deposit {
    /// Account that paid the assets
    pub sender: Address,
    /// Share receiver
    pub owner: Address,
    /// Assets pulled into the vault
    pub assets: U256,
    /// Shares minted to `owner`
    pub shares: U256,
}

/// Emitted by `withdraw` and `redeem`
#[odra::event]
pub struct Withdraw {
    /// Account that triggered the exit, owner or approved spender
    pub sender: Address,
    /// Asset receiver
    pub receiver: Address,
    /// Account whose shares were burned
    pub owner: Address,
    /// Assets sent to `receiver`
    pub assets: U256,
    /// Shares burned from `owner`
    pub shares: U256,
}
