use anchor_lang::prelude::*;

use crate::constants::HOUSE_COUNT;

// ── Season lifecycle ──────────────────────────────────────────────────────
#[event]
pub struct SeasonStarted {
    pub season_id:  u64,
    pub start_time: i64,
    pub end_time:   i64,
    pub started_by: Pubkey,
}

#[event]
pub struct ScoreRecorded {
    pub season_id:   u64,
    pub house_id:    u8,
    pub points:      u64,
    pub house_total: u64,
    pub recorder:    Pubkey,
}

#[event]
pub struct MultiplierSet {
    pub season_id:      u64,
    pub house_id:       u8,
    pub multiplier_bps: u64,
    pub set_by:         Pubkey,
}

#[event]
pub struct PrizePoolIncreased {
    pub season_id:   u64,
    pub amount:      u64,
    pub new_total:   u64,
    pub contributor: Pubkey,
}

/// Terminal record for a season. Carries the full ranking so a read model
/// can be rebuilt from the event stream alone.
#[event]
pub struct SeasonFinalized {
    pub season_id:           u64,
    pub ranking:             [u8; HOUSE_COUNT],
    pub final_scores:        [u64; HOUSE_COUNT],
    pub total_multipliers:   [u64; HOUSE_COUNT],
    pub prize_pool:          u64,
    pub prize_entitlements:  [u64; HOUSE_COUNT],
    pub undistributed:       u64,
    pub standings_hash:      [u8; 32],
    pub finalized_at:        i64,
}

// ── Configuration & roles ─────────────────────────────────────────────────
#[event] pub struct ConfigInitialized         { pub authority: Pubkey }
#[event] pub struct ParamsUpdated             { pub min_duration: i64, pub max_duration: i64, pub boost_unit_amount: u64, pub boost_per_unit_bps: u64, pub max_bonus_bps: u64, pub min_lock: i64, pub max_lock: i64 }
#[event] pub struct GameMasterGranted         { pub game_master: Pubkey, pub granted_by: Pubkey }
#[event] pub struct GameMasterRevoked         { pub game_master: Pubkey, pub revoked_by: Pubkey }
#[event] pub struct PrizeDistributionUpdated  { pub distribution: Vec<u16> }
#[event] pub struct AuthorityTransferProposed { pub current: Pubkey, pub proposed: Pubkey, pub unlocks_at: i64 }
#[event] pub struct AuthorityTransferCancelled { pub authority: Pubkey }
#[event] pub struct AuthorityTransferred      { pub old_authority: Pubkey, pub new_authority: Pubkey }

// ── Staking ───────────────────────────────────────────────────────────────
#[event]
pub struct HouseStaked {
    pub staker:               Pubkey,
    pub house_id:             u8,
    pub position_id:          u64,
    pub amount:               u64,
    pub lock_seconds:         i64,
    pub lock_expiry:          i64,
    pub weight:               u128,
    pub house_weighted_stake: u128,
}

#[event]
pub struct StakeWithdrawn {
    pub staker:               Pubkey,
    pub house_id:             u8,
    pub position_id:          u64,
    pub amount:               u64,
    pub house_weighted_stake: u128,
}
