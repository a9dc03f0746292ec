//! Mathematical utilities for the vault contracts
//! Implements widened mul-div, share/asset conversion and the reward unlock curve
use odra::casper_types::{U256, U512};
use crate::errors::VaultError;

/// Largest accepted decimals offset (10^18 still fits in a u64)
pub const MAX_DECIMALS_OFFSET: u8 = 18;

/// Rounding direction for conversions
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Rounding {
    /// Round toward zero
    Floor,
    /// Round away from zero
    Ceil,
}

/// Safe math operations for U256
pub struct SafeMath;

impl SafeMath {
    /// Safe addition with overflow check
    pub fn add(a: U256, b: U256) -> Result<U256, VaultError> {
        a.checked_add(b).ok_or(VaultError::Overflow)
    }

    /// Safe subtraction with underflow check
    pub fn sub(a: U256, b: U256) -> Result<U256, VaultError> {
        a.checked_sub(b).ok_or(VaultError::Underflow)
    }

    /// Computes `x * y / denominator` with a 512-bit intermediate product.
    ///
    /// Fails with `Overflow` only when the final quotient does not fit in U256.
    pub fn mul_div(
        x: U256,
        y: U256,
        denominator: U256,
        rounding: Rounding,
    ) -> Result<U256, VaultError> {
        // vault conversions pass `+1` / `+10^offset` denominators, never zero
        if denominator.is_zero() {
            return Err(VaultError::DivisionByZero);
        }

        let product = widen(x)
            .checked_mul(widen(y))
            .ok_or(VaultError::Overflow)?;
        let denominator = widen(denominator);

        let quotient = match rounding {
            Rounding::Floor => product / denominator,
            Rounding::Ceil => {
                let quotient = product / denominator;
                if (product % denominator).is_zero() {
                    quotient
                } else {
                    quotient + U512::one()
                }
            }
        };

        narrow(quotient)
    }
}

fn widen(value: U256) -> U512 {
    let mut bytes = [0u8; 32];
    value.to_little_endian(&mut bytes);
    U512::from_little_endian(&bytes)
}

fn narrow(value: U512) -> Result<U256, VaultError> {
    let mut bytes = [0u8; 64];
    value.to_little_endian(&mut bytes);
    if bytes[32..].iter().any(|byte| *byte != 0) {
        return Err(VaultError::Overflow);
    }
    Ok(U256::from_little_endian(&bytes[..32]))
}

/// Share/asset conversion with a virtual share and asset offset
pub struct VaultMath;

impl VaultMath {
    /// `total_supply + 10^decimals_offset`
    pub fn virtual_shares(total_supply: U256, decimals_offset: u8) -> Result<U256, VaultError> {
        if decimals_offset > MAX_DECIMALS_OFFSET {
            return Err(VaultError::InvalidDecimalsOffset);
        }
        let offset = U256::from(10u64.pow(decimals_offset as u32));
        SafeMath::add(total_supply, offset)
    }

    /// `total_assets + 1`
    pub fn virtual_assets(total_assets: U256) -> Result<U256, VaultError> {
        SafeMath::add(total_assets, U256::one())
    }

    /// shares = assets * (total_supply + 10^offset) / (total_assets + 1)
    pub fn convert_to_shares(
        assets: U256,
        total_assets: U256,
        total_supply: U256,
        decimals_offset: u8,
        rounding: Rounding,
    ) -> Result<U256, VaultError> {
        SafeMath::mul_div(
            assets,
            Self::virtual_shares(total_supply, decimals_offset)?,
            Self::virtual_assets(total_assets)?,
            rounding,
        )
    }

    /// assets = shares * (total_assets + 1) / (total_supply + 10^offset)
    pub fn convert_to_assets(
        shares: U256,
        total_assets: U256,
        total_supply: U256,
        decimals_offset: u8,
        rounding: Rounding,
    ) -> Result<U256, VaultError> {
        SafeMath::mul_div(
            shares,
            Self::virtual_assets(total_assets)?,
            Self::virtual_shares(total_supply, decimals_offset)?,
            rounding,
        )
    }
}

/// Linear reward unlock over a cycle
pub struct RewardMath;

impl RewardMath {
    /// Portion of `reward` still locked at `now`.
    ///
    /// Decays linearly from `reward` at `last_sync` to zero at `cycle_end`.
    pub fn locked(
        reward: U256,
        last_sync: u64,
        cycle_end: u64,
        now: u64,
    ) -> Result<U256, VaultError> {
        if now >= cycle_end || reward.is_zero() {
            return Ok(U256::zero());
        }
        let now = now.max(last_sync);
        // cycle_end > now >= last_sync, so the duration is positive
        SafeMath::mul_div(
            reward,
            U256::from(cycle_end - now),
            U256::from(cycle_end - last_sync),
            Rounding::Floor,
        )
    }

    /// First multiple of `cycle_length` strictly after `now`
    pub fn next_cycle_end(now: u64, cycle_length: u64) -> Result<u64, VaultError> {
        if cycle_length == 0 {
            return Err(VaultError::InvalidCycleLength);
        }
        (now / cycle_length)
            .checked_mul(cycle_length)
            .and_then(|start| start.checked_add(cycle_length))
            .ok_or(VaultError::Overflow)
    }
}
