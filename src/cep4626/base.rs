//! Shared CEP-4626 accounting
//!
//! `VaultCore` owns the share ledger, the underlying asset address and the
//! decimals offset. It does not know how a vault values its holdings: every
//! conversion and operation takes the caller's `total_assets` snapshot, so a
//! single vault call observes one exchange rate from start to finish.

use odra::prelude::*;
use odra::casper_types::U256;
use odra::ContractRef;
use crate::errors::VaultError;
use crate::math::{Rounding, VaultMath, MAX_DECIMALS_OFFSET};
use crate::token::{Cep18Ledger, Cep18TokenContractRef};
use super::events::{Deposit, Withdraw};

/// Share ledger plus asset <-> share conversion for a single-asset vault
#[odra::module]
pub struct VaultCore {
    /// Share token
    shares: SubModule<Cep18Ledger>,
    /// Underlying CEP-18 token
    asset: Var<Address>,
    /// Power of ten added to the share supply in conversions
    decimals_offset: Var<u8>,
}

#[odra::module]
impl VaultCore {
    /// Initialize the share token for `asset`.
    ///
    /// Share decimals are the asset decimals plus `decimals_offset`.
    pub fn init(&mut self, asset: Address, name: String, symbol: String, decimals_offset: u8) {
        if decimals_offset > MAX_DECIMALS_OFFSET {
            self.env().revert(VaultError::InvalidDecimalsOffset);
        }

        let asset_decimals = Cep18TokenContractRef::new(self.env(), asset).decimals();
        let decimals = asset_decimals
            .checked_add(decimals_offset)
            .unwrap_or_else(|| self.env().revert(VaultError::InvalidDecimalsOffset));

        self.asset.set(asset);
        self.decimals_offset.set(decimals_offset);
        self.shares.init(name, symbol, decimals);
    }

    // ========================================
    // Share token (CEP-18)
    // ========================================

    pub fn name(&self) -> String {
        self.shares.name()
    }

    pub fn symbol(&self) -> String {
        self.shares.symbol()
    }

    pub fn decimals(&self) -> u8 {
        self.shares.decimals()
    }

    pub fn total_supply(&self) -> U256 {
        self.shares.total_supply()
    }

    pub fn balance_of(&self, owner: Address) -> U256 {
        self.shares.balance_of(owner)
    }

    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.shares.allowance(owner, spender)
    }

    pub fn transfer(&mut self, to: Address, amount: U256) -> bool {
        self.shares.transfer(to, amount)
    }

    pub fn approve(&mut self, spender: Address, amount: U256) -> bool {
        self.shares.approve(spender, amount)
    }

    pub fn transfer_from(&mut self, from: Address, to: Address, amount: U256) -> bool {
        self.shares.transfer_from(from, to, amount)
    }

    // ========================================
    // Vault metadata
    // ========================================

    /// Underlying token address
    pub fn asset(&self) -> Address {
        self.asset.get_or_revert_with(VaultError::InvalidConfiguration)
    }

    pub fn decimals_offset(&self) -> u8 {
        self.decimals_offset.get_or_default()
    }

    /// Raw underlying balance held by the vault, including unaccounted donations
    pub fn asset_balance(&self) -> U256 {
        let token = Cep18TokenContractRef::new(self.env(), self.asset());
        token.balance_of(self.env().self_address())
    }

    // ========================================
    // Conversions
    // ========================================

    pub fn convert_to_shares(&self, total_assets: U256, assets: U256) -> U256 {
        self.to_shares(total_assets, assets, Rounding::Floor)
    }

    pub fn convert_to_assets(&self, total_assets: U256, shares: U256) -> U256 {
        self.to_assets(total_assets, shares, Rounding::Floor)
    }

    pub fn preview_deposit(&self, total_assets: U256, assets: U256) -> U256 {
        self.to_shares(total_assets, assets, Rounding::Floor)
    }

    pub fn preview_mint(&self, total_assets: U256, shares: U256) -> U256 {
        self.to_assets(total_assets, shares, Rounding::Ceil)
    }

    pub fn preview_withdraw(&self, total_assets: U256, assets: U256) -> U256 {
        self.to_shares(total_assets, assets, Rounding::Ceil)
    }

    pub fn preview_redeem(&self, total_assets: U256, shares: U256) -> U256 {
        self.to_assets(total_assets, shares, Rounding::Floor)
    }

    // ========================================
    // Limits
    // ========================================

    pub fn max_deposit(&self, _receiver: Address) -> U256 {
        U256::MAX
    }

    pub fn max_mint(&self, _receiver: Address) -> U256 {
        U256::MAX
    }

    pub fn max_withdraw(&self, total_assets: U256, owner: Address) -> U256 {
        let shares = self.balance_of(owner);
        self.to_assets(total_assets, shares, Rounding::Floor)
    }

    pub fn max_redeem(&self, owner: Address) -> U256 {
        self.balance_of(owner)
    }

    // ========================================
    // Operations
    // ========================================

    /// Pull exactly `assets` from the caller and mint the floor share amount to `receiver`
    pub fn deposit(&mut self, total_assets: U256, assets: U256, receiver: Address) -> U256 {
        if assets > self.max_deposit(receiver) {
            self.env().revert(VaultError::ExceededMaxDeposit);
        }
        let shares = self.preview_deposit(total_assets, assets);
        self.settle_deposit(assets, shares, receiver);
        shares
    }

    /// Mint exactly `shares` to `receiver`, pulling the ceil asset amount from the caller
    pub fn mint(&mut self, total_assets: U256, shares: U256, receiver: Address) -> U256 {
        if shares > self.max_mint(receiver) {
            self.env().revert(VaultError::ExceededMaxMint);
        }
        let assets = self.preview_mint(total_assets, shares);
        self.settle_deposit(assets, shares, receiver);
        assets
    }

    /// Send exactly `assets` to `receiver`, burning the ceil share amount from `owner`
    pub fn withdraw(
        &mut self,
        total_assets: U256,
        assets: U256,
        receiver: Address,
        owner: Address,
    ) -> U256 {
        if assets > self.max_withdraw(total_assets, owner) {
            self.env().revert(VaultError::ExceededMaxWithdraw);
        }
        let shares = self.preview_withdraw(total_assets, assets);
        self.settle_withdrawal(assets, shares, receiver, owner);
        shares
    }

    /// Burn exactly `shares` from `owner`, sending the floor asset amount to `receiver`
    pub fn redeem(
        &mut self,
        total_assets: U256,
        shares: U256,
        receiver: Address,
        owner: Address,
    ) -> U256 {
        if shares > self.max_redeem(owner) {
            self.env().revert(VaultError::ExceededMaxRedeem);
        }
        let assets = self.preview_redeem(total_assets, shares);
        self.settle_withdrawal(assets, shares, receiver, owner);
        assets
    }

    // ========================================
    // Internal
    // ========================================

    fn to_shares(&self, total_assets: U256, assets: U256, rounding: Rounding) -> U256 {
        VaultMath::convert_to_shares(
            assets,
            total_assets,
            self.total_supply(),
            self.decimals_offset(),
            rounding,
        )
        .unwrap_or_revert(&self.env())
    }

    fn to_assets(&self, total_assets: U256, shares: U256, rounding: Rounding) -> U256 {
        VaultMath::convert_to_assets(
            shares,
            total_assets,
            self.total_supply(),
            self.decimals_offset(),
            rounding,
        )
        .unwrap_or_revert(&self.env())
    }

    fn settle_deposit(&mut self, assets: U256, shares: U256, receiver: Address) {
        let caller = self.env().caller();

        let mut token = Cep18TokenContractRef::new(self.env(), self.asset());
        if !token.transfer_from(caller, self.env().self_address(), assets) {
            self.env().revert(VaultError::TransferFailed);
        }

        self.shares.mint(receiver, shares);

        self.env().emit_event(Deposit {
            sender: caller,
            owner: receiver,
            assets,
            shares,
        });
    }

    fn settle_withdrawal(&mut self, assets: U256, shares: U256, receiver: Address, owner: Address) {
        let caller = self.env().caller();

        if caller != owner {
            self.shares.spend_allowance(owner, caller, shares);
        }

        self.shares.burn(owner, shares);

        let mut token = Cep18TokenContractRef::new(self.env(), self.asset());
        if !token.transfer(receiver, assets) {
            self.env().revert(VaultError::TransferFailed);
        }

        self.env().emit_event(Withdraw {
            sender: caller,
            receiver,
            owner,
            assets,
            shares,
        });
    }
}
