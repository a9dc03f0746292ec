//! Events for the streaming vault

use odra::prelude::*;
use odra::casper_types::U256;

/// Event emitted when a sync opens a new reward cycle
#[odra::event]
pub struct NewRewardsCycle {
    /// Block time at which the new cycle fully unlocks
    pub cycle_end: u64,
    /// Surplus that vests over the new cycle
    pub reward_amount: U256,
}
