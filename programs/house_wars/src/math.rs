//! Fixed-point scoring math.
//!
//! All values are integers. Multipliers are basis points (10000 = 1.00x) and
//! every multiplication is followed by a floor division, in this order:
//!
//!   total = min(configured × boost / 10000, 5.00x)
//!   final = raw_score × total / 10000
//!
//! Changing the order changes finalized results, so callers must go through
//! these helpers instead of re-deriving the arithmetic.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::WarsError;

/// Weight contributed by one stake position, normalized to a 30-day lock.
pub fn position_weight(amount: u64, lock_seconds: i64) -> Result<u128> {
    require!(lock_seconds >= 0, WarsError::InvalidLockDuration);
    let raw = (amount as u128)
        .checked_mul(lock_seconds as u128)
        .ok_or(WarsError::MathOverflow)?;
    Ok(raw / REFERENCE_LOCK_PERIOD as u128)
}

/// Stake boost for a house given its weighted stake.
/// Returns `BASE_MULTIPLIER_BPS` plus the capped bonus.
pub fn boost_bps(weight: u128, boost_unit_amount: u64, boost_per_unit_bps: u64, max_bonus_bps: u64) -> u64 {
    let units = weight.checked_div(boost_unit_amount as u128).unwrap_or(0);
    let bonus = units.saturating_mul(boost_per_unit_bps as u128);
    let capped = bonus.min(max_bonus_bps as u128) as u64;
    BASE_MULTIPLIER_BPS.saturating_add(capped)
}

/// Configured multipliers must sit in (0, 5.00x]. Out-of-range values are
/// rejected, never clamped.
pub fn validate_configured_multiplier(bps: u64) -> Result<()> {
    require!(bps > 0 && bps <= MAX_MULTIPLIER_BPS, WarsError::InvalidMultiplier);
    Ok(())
}

/// configured × boost / 10000, floored, then held under the 5.00x ceiling.
pub fn combine_multiplier(configured_bps: u64, boost_bps: u64) -> u64 {
    let combined = (configured_bps as u128 * boost_bps as u128) / BPS_DENOMINATOR as u128;
    combined.min(MAX_MULTIPLIER_BPS as u128) as u64
}

/// raw × total / 10000, floored.
pub fn apply_multiplier(raw_score: u64, total_multiplier_bps: u64) -> Result<u64> {
    let scaled = (raw_score as u128 * total_multiplier_bps as u128) / BPS_DENOMINATOR as u128;
    u64::try_from(scaled).map_err(|_| error!(WarsError::MathOverflow))
}

/// Orders house ids by final score, highest first. Equal scores keep the
/// lower house id ahead.
pub fn rank_houses(final_scores: &[u64; HOUSE_COUNT]) -> [u8; HOUSE_COUNT] {
    let mut order = [0u8; HOUSE_COUNT];
    for (i, slot) in order.iter_mut().enumerate() {
        *slot = i as u8;
    }
    order.sort_unstable_by(|a, b| {
        final_scores[*b as usize]
            .cmp(&final_scores[*a as usize])
            .then(a.cmp(b))
    });
    order
}

/// A payout schedule is valid when it has at most one tier per house and
/// sums to exactly 10000 bps.
pub fn validate_distribution(distribution: &[u16]) -> Result<()> {
    require!(distribution.len() <= MAX_PRIZE_TIERS, WarsError::TooManyPrizeTiers);
    let total: u64 = distribution.iter().map(|bps| *bps as u64).sum();
    require!(total == BPS_DENOMINATOR, WarsError::InvalidDistributionTotal);
    Ok(())
}

/// Splits `pool` across ranks. Index `i` of the result is the entitlement of
/// rank `i + 1`. Floor-division dust is returned separately.
pub fn split_prize(pool: u64, distribution: &[u16]) -> Result<([u64; HOUSE_COUNT], u64)> {
    require!(distribution.len() <= MAX_PRIZE_TIERS, WarsError::TooManyPrizeTiers);
    let mut entitlements = [0u64; HOUSE_COUNT];
    let mut paid: u64 = 0;
    for (rank, bps) in distribution.iter().enumerate() {
        let share = (pool as u128 * *bps as u128) / BPS_DENOMINATOR as u128;
        // share <= pool because each tier is at most 10000 bps
        let share = share as u64;
        entitlements[rank] = share;
        paid = paid.checked_add(share).ok_or(WarsError::MathOverflow)?;
    }
    let undistributed = pool.checked_sub(paid).ok_or(WarsError::MathOverflow)?;
    Ok((entitlements, undistributed))
}

/// blake3(season_id || ranking || final scores by house), all little-endian.
/// Lets an off-chain mirror prove its standings match the ledger.
pub fn standings_digest(
    season_id: u64,
    ranking: &[u8; HOUSE_COUNT],
    final_scores: &[u64; HOUSE_COUNT],
) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&season_id.to_le_bytes());
    hasher.update(ranking);
    for score in final_scores {
        hasher.update(&score.to_le_bytes());
    }
    *hasher.finalize().as_bytes()
}
