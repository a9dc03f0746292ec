//! xVault - CEP-4626 vault with linearly streamed rewards
//!
//! Profit sent to the vault is folded in by `sync_rewards` and unlocks
//! linearly over cycles of fixed length whose ends are aligned to multiples
//! of that length. Only one cycle vests at a time; a new sync is accepted
//! once the current cycle has ended.

pub mod rewards;
pub mod vault;
pub mod events;


pub use rewards::RewardStream;
pub use vault::StreamingVault;
pub use events::*;
