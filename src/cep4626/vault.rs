//! Plain CEP-4626 vault
//!
//! Values its holdings at the raw underlying balance, so anything sent to the
//! vault is reflected in the exchange rate immediately.

use odra::prelude::*;
use odra::casper_types::U256;
use super::base::VaultCore;

/// CEP-4626 vault with `total_assets` equal to the held balance
#[odra::module]
pub struct Cep4626Vault {
    core: SubModule<VaultCore>,
}

#[odra::module]
impl Cep4626Vault {
    /// Initialize the vault over `asset`
    pub fn init(&mut self, asset: Address, name: String, symbol: String, decimals_offset: u8) {
        self.core.init(asset, name, symbol, decimals_offset);
    }

    // ========================================
    // CEP-18 Share Token Functions
    // ========================================

    pub fn name(&self) -> String {
        self.core.name()
    }

    pub fn symbol(&self) -> String {
        self.core.symbol()
    }

    pub fn decimals(&self) -> u8 {
        self.core.decimals()
    }

    pub fn total_supply(&self) -> U256 {
        self.core.total_supply()
    }

    pub fn balance_of(&self, owner: Address) -> U256 {
        self.core.balance_of(owner)
    }

    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.core.allowance(owner, spender)
    }

    pub fn transfer(&mut self, to: Address, amount: U256) -> bool {
        self.core.transfer(to, amount)
    }

    pub fn approve(&mut self, spender: Address, amount: U256) -> bool {
        self.core.approve(spender, amount)
    }

    pub fn transfer_from(&mut self, from: Address, to: Address, amount: U256) -> bool {
        self.core.transfer_from(from, to, amount)
    }

    // ========================================
    // CEP-4626 Functions
    // ========================================

    /// Underlying token address
    pub fn asset(&self) -> Address {
        self.core.asset()
    }

    pub fn decimals_offset(&self) -> u8 {
        self.core.decimals_offset()
    }

    /// Underlying balance held by the vault
    pub fn total_assets(&self) -> U256 {
        self.core.asset_balance()
    }

    pub fn convert_to_shares(&self, assets: U256) -> U256 {
        self.core.convert_to_shares(self.total_assets(), assets)
    }

    pub fn convert_to_assets(&self, shares: U256) -> U256 {
        self.core.convert_to_assets(self.total_assets(), shares)
    }

    pub fn max_deposit(&self, receiver: Address) -> U256 {
        self.core.max_deposit(receiver)
    }

    pub fn max_mint(&self, receiver: Address) -> U256 {
        self.core.max_mint(receiver)
    }

    pub fn max_withdraw(&self, owner: Address) -> U256 {
        self.core.max_withdraw(self.total_assets(), owner)
    }

    pub fn max_redeem(&self, owner: Address) -> U256 {
        self.core.max_redeem(owner)
    }

    pub fn preview_deposit(&self, assets: U256) -> U256 {
        self.core.preview_deposit(self.total_assets(), assets)
    }

    pub fn preview_mint(&self, shares: U256) -> U256 {
        self.core.preview_mint(self.total_assets(), shares)
    }

    pub fn preview_withdraw(&self, assets: U256) -> U256 {
        self.core.preview_withdraw(self.total_assets(), assets)
    }

    pub fn preview_redeem(&self, shares: U256) -> U256 {
        self.core.preview_redeem(self.total_assets(), shares)
    }

    pub fn deposit(&mut self, assets: U256, receiver: Address) -> U256 {
        let total_assets = self.total_assets();
        self.core.deposit(total_assets, assets, receiver)
    }

    pub fn mint(&mut self, shares: U256, receiver: Address) -> U256 {
        let total_assets = self.total_assets();
        self.core.mint(total_assets, shares, receiver)
    }

    pub fn withdraw(&mut self, assets: U256, receiver: Address, owner: Address) -> U256 {
        let total_assets = self.total_assets();
        self.core.withdraw(total_assets, assets, receiver, owner)
    }

    pub fn redeem(&mut self, shares: U256, receiver: Address, owner: Address) -> U256 {
        let total_assets = self.total_assets();
        self.core.redeem(total_assets, shares, receiver, owner)
    }
}
