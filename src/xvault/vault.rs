//! Streaming Vault - CEP-4626 vault that vests profit linearly
//!
//! Deposits and withdrawals are priced against the settled assets plus the
//! unlocked part of the current reward. Tokens sent straight to the vault
//! (strategy yield, donations) only start counting after `sync_rewards`
//! opens a new cycle, and then unlock linearly until the cycle end, so a
//! deposit placed right before a profit lands cannot capture it at once.

use odra::prelude::*;
use odra::casper_types::U256;
use crate::cep4626::VaultCore;
use super::rewards::RewardStream;

/// CEP-4626 vault with linearly streamed rewards
#[odra::module]
pub struct StreamingVault {
    core: SubModule<VaultCore>,
    rewards: SubModule<RewardStream>,
}

#[odra::module]
impl StreamingVault {
    /// Initialize the vault over `asset`.
    ///
    /// `rewards_cycle_length` is in block-time units and cannot change later.
    pub fn init(
        &mut self,
        asset: Address,
        name: String,
        symbol: String,
        rewards_cycle_length: u64,
        decimals_offset: u8,
    ) {
        self.rewards.init(rewards_cycle_length);
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
    // Reward Cycle
    // ========================================

    /// Start a new reward cycle with everything the vault received since the last one.
    ///
    /// Reverts with `SyncTooEarly` while the current cycle is still vesting.
    /// Returns the amount that starts vesting.
    pub fn sync_rewards(&mut self) -> U256 {
        let now = self.env().get_block_time();
        let balance = self.core.asset_balance();
        self.rewards.sync(now, balance)
    }

    pub fn rewards_cycle_length(&self) -> u64 {
        self.rewards.rewards_cycle_length()
    }

    pub fn rewards_cycle_end(&self) -> u64 {
        self.rewards.rewards_cycle_end()
    }

    pub fn last_sync(&self) -> u64 {
        self.rewards.last_sync()
    }

    pub fn last_reward_amount(&self) -> U256 {
        self.rewards.last_reward_amount()
    }

    /// Assets settled by deposits, withdrawals and completed syncs
    pub fn stored_total_assets(&self) -> U256 {
        self.rewards.stored_total_assets()
    }

    /// Part of the current reward still vesting; zero once the cycle has ended
    pub fn locked_profit(&self) -> U256 {
        self.rewards.locked_rewards(self.env().get_block_time())
    }

    /// Held balance not yet reflected in `total_assets`, synced or not
    pub fn unaccounted_balance(&self) -> U256 {
        let balance = self.core.asset_balance();
        balance.saturating_sub(self.total_assets())
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

    /// Settled assets plus the unlocked part of the current reward
    pub fn total_assets(&self) -> U256 {
        self.rewards.total_assets(self.env().get_block_time())
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
        let shares = self.core.deposit(total_assets, assets, receiver);
        self.rewards.record_deposit(assets);
        shares
    }

    pub fn mint(&mut self, shares: U256, receiver: Address) -> U256 {
        let total_assets = self.total_assets();
        let assets = self.core.mint(total_assets, shares, receiver);
        self.rewards.record_deposit(assets);
        assets
    }

    pub fn withdraw(&mut self, assets: U256, receiver: Address, owner: Address) -> U256 {
        let now = self.env().get_block_time();
        let total_assets = self.rewards.total_assets(now);
        let shares = self.core.withdraw(total_assets, assets, receiver, owner);
        self.rewards.record_withdrawal(now, assets);
        shares
    }

    pub fn redeem(&mut self, shares: U256, receiver: Address, owner: Address) -> U256 {
        let now = self.env().get_block_time();
        let total_assets = self.rewards.total_assets(now);
        let assets = self.core.redeem(total_assets, shares, receiver, owner);
        self.rewards.record_withdrawal(now, assets);
        assets
    }
}
