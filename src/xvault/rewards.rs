//! Reward stream - linear unlock of profit over fixed, aligned cycles
//!
//! Tracks the assets the vault has settled (`stored_total_assets`) and the
//! reward currently vesting. Profit that reaches the vault's balance outside
//! of deposits is invisible until `sync` folds it into a new cycle; from
//! then on it unlocks linearly until `rewards_cycle_end`.
//!
//! Only `sync` writes the cycle fields. Withdrawals that reach past the
//! settled total are booked against the unlocked reward in `claimed_rewards`.

use odra::prelude::*;
use odra::casper_types::U256;
use crate::errors::VaultError;
use crate::math::{RewardMath, SafeMath};
use super::events::NewRewardsCycle;

/// Settled-asset ledger plus the current reward cycle
#[odra::module]
pub struct RewardStream {
    /// Cycle length in block-time units, fixed at init
    cycle_length: Var<u64>,
    /// End of the current vesting window, aligned to `cycle_length`
    cycle_end: Var<u64>,
    /// Start of the current vesting segment
    last_sync: Var<u64>,
    /// Reward vesting over the current segment
    last_reward_amount: Var<U256>,
    /// Assets accounted by deposits, withdrawals and past cycles
    stored_total_assets: Var<U256>,
    /// Unlocked reward already paid out by withdrawals since the last sync
    claimed_rewards: Var<U256>,
}

#[odra::module]
impl RewardStream {
    pub fn init(&mut self, cycle_length: u64) {
        if cycle_length == 0 {
            self.env().revert(VaultError::InvalidCycleLength);
        }
        self.cycle_length.set(cycle_length);
        self.cycle_end.set(0);
        self.last_sync.set(0);
        self.last_reward_amount.set(U256::zero());
        self.stored_total_assets.set(U256::zero());
        self.claimed_rewards.set(U256::zero());
    }

    pub fn rewards_cycle_length(&self) -> u64 {
        self.cycle_length.get_or_revert_with(VaultError::InvalidConfiguration)
    }

    pub fn rewards_cycle_end(&self) -> u64 {
        self.cycle_end.get_or_default()
    }

    pub fn last_sync(&self) -> u64 {
        self.last_sync.get_or_default()
    }

    pub fn last_reward_amount(&self) -> U256 {
        self.last_reward_amount.get_or_default()
    }

    pub fn stored_total_assets(&self) -> U256 {
        self.stored_total_assets.get_or_default()
    }

    pub fn claimed_rewards(&self) -> U256 {
        self.claimed_rewards.get_or_default()
    }

    /// Part of the current reward not yet unlocked at `now`
    pub fn locked_rewards(&self, now: u64) -> U256 {
        RewardMath::locked(
            self.last_reward_amount(),
            self.last_sync(),
            self.rewards_cycle_end(),
            now,
        )
        .unwrap_or_revert(&self.env())
    }

    /// Settled assets plus the unclaimed, unlocked part of the current reward
    pub fn total_assets(&self, now: u64) -> U256 {
        let unlocked = self.last_reward_amount() - self.locked_rewards(now);
        let unclaimed = SafeMath::sub(unlocked, self.claimed_rewards())
            .unwrap_or_revert(&self.env());
        SafeMath::add(self.stored_total_assets(), unclaimed).unwrap_or_revert(&self.env())
    }

    pub fn record_deposit(&mut self, assets: U256) {
        let stored = SafeMath::add(self.stored_total_assets(), assets)
            .unwrap_or_revert(&self.env());
        self.stored_total_assets.set(stored);
    }

    /// Remove `assets` from the accounting.
    ///
    /// Settled assets are drawn first; the rest is taken from the reward
    /// unlocked so far, leaving the cycle itself untouched.
    pub fn record_withdrawal(&mut self, now: u64, assets: U256) {
        let stored = self.stored_total_assets();
        if assets <= stored {
            self.stored_total_assets.set(stored - assets);
            return;
        }

        if assets > self.total_assets(now) {
            self.env().revert(VaultError::Underflow);
        }
        let claimed = SafeMath::add(self.claimed_rewards(), assets - stored)
            .unwrap_or_revert(&self.env());
        self.stored_total_assets.set(U256::zero());
        self.claimed_rewards.set(claimed);
    }

    /// Fold the finished cycle into the settled total and start vesting the
    /// surplus of `balance` over everything already accounted.
    pub fn sync(&mut self, now: u64, balance: U256) -> U256 {
        if now < self.rewards_cycle_end() {
            self.env().revert(VaultError::SyncTooEarly);
        }

        let settled = SafeMath::add(self.stored_total_assets(), self.last_reward_amount())
            .unwrap_or_revert(&self.env());
        let stored = SafeMath::sub(settled, self.claimed_rewards()).unwrap_or_revert(&self.env());
        let reward_amount = SafeMath::sub(balance, stored).unwrap_or_revert(&self.env());
        let cycle_end = RewardMath::next_cycle_end(now, self.rewards_cycle_length())
            .unwrap_or_revert(&self.env());

        self.stored_total_assets.set(stored);
        self.claimed_rewards.set(U256::zero());
        self.last_reward_amount.set(reward_amount);
        self.last_sync.set(now);
        self.cycle_end.set(cycle_end);

        self.env().emit_event(NewRewardsCycle {
            cycle_end,
            reward_amount,
        });

        reward_amount
    }
}
