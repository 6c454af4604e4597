// ── PDA Seeds ─────────────────────────────────────────────────────────────
pub const SEED_CONFIG:         &[u8] = b"wars_config";
pub const SEED_STAKE_REGISTRY: &[u8] = b"stake_registry";
pub const SEED_SEASON:         &[u8] = b"season";
pub const SEED_STAKER:         &[u8] = b"staker";
pub const SEED_POSITION:       &[u8] = b"position";

// ── Houses ────────────────────────────────────────────────────────────────
pub const HOUSE_COUNT: usize = 7;

// ── Basis Points (BPS = /10000) ───────────────────────────────────────────
//
// Every multiplier is an integer in bps: 10000 = 1.00x.
//   configured (0, 5.00x]  ×  stake boost [1.00x, 1.00x + max bonus]
//   → total, capped at 5.00x
pub const BPS_DENOMINATOR:     u64 = 10_000;
pub const BASE_MULTIPLIER_BPS: u64 = 10_000;   // 1.00x
pub const MAX_MULTIPLIER_BPS:  u64 = 50_000;   // 5.00x
// Highest raw house score; still fits in u64 after the 5.00x ceiling.
pub const MAX_RAW_SCORE:       u64 = u64::MAX / (MAX_MULTIPLIER_BPS / BPS_DENOMINATOR);

// ── Season Window ─────────────────────────────────────────────────────────
pub const SECONDS_PER_DAY:          i64 = 86_400;
pub const DEFAULT_MIN_DURATION:     i64 = 7 * SECONDS_PER_DAY;   // 1 week
pub const DEFAULT_MAX_DURATION:     i64 = 90 * SECONDS_PER_DAY;  // 1 quarter

// ── Stake Boost ───────────────────────────────────────────────────────────
// weight = amount × lock_seconds / REFERENCE_LOCK_PERIOD
// bonus  = floor(weight / boost_unit_amount) × boost_per_unit_bps  (capped)
pub const REFERENCE_LOCK_PERIOD:        i64 = 30 * SECONDS_PER_DAY;
pub const DEFAULT_BOOST_UNIT_AMOUNT:    u64 = 10_000_000_000;  // 10 SOL of 30-day weight
pub const DEFAULT_BOOST_PER_UNIT_BPS:   u64 = 500;             // +0.05x per unit
pub const DEFAULT_MAX_BONUS_BPS:        u64 = 10_000;          // boost tops out at 2.00x
pub const DEFAULT_MIN_LOCK:             i64 = 7 * SECONDS_PER_DAY;
pub const DEFAULT_MAX_LOCK:             i64 = 180 * SECONDS_PER_DAY;

// ── Roles & Prizes ────────────────────────────────────────────────────────
pub const MAX_GAME_MASTERS:   usize = 8;
pub const MAX_PRIZE_TIERS:    usize = HOUSE_COUNT;
pub const DEFAULT_PRIZE_DISTRIBUTION: [u16; 3] = [5_000, 3_000, 2_000]; // 50/30/20

pub const AUTH_TIMELOCK: i64 = 259_200; // 72h before a proposed authority can take over
