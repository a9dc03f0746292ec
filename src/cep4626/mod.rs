//! CEP-4626: Tokenized Vault Standard for Casper
//!
//! This is a Casper adaptation of ERC-4626, providing a standard API for
//! tokenized vaults representing shares of a single underlying CEP-18 token.
//!
//! Conversions use a virtual share/asset offset:
//! `shares = assets * (supply + 10^offset) / (total_assets + 1)`.
//! Deposits and redemptions round down, mints and withdrawals round the
//! user's side up, so rounding never leaks value out of the vault.

pub mod base;
pub mod vault;
pub mod events;

#[cfg(test)]
mod tests;

pub use base::VaultCore;
pub use vault::Cep4626Vault;
pub use events::*;
