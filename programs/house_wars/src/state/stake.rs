use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::WarsError;
use crate::math;
use super::House;

/// Parameters of the stake boost curve. Stored in `WarsConfig`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoostParams {
    pub boost_unit_amount:  u64,  // 8, weight needed per bonus step
    pub boost_per_unit_bps: u64,  // 8
    pub max_bonus_bps:      u64,  // 8
}

impl BoostParams {
    pub const LEN: usize = 8 + 8 + 8;

    pub fn boost_bps(&self, weight: u128) -> u64 {
        math::boost_bps(weight, self.boost_unit_amount, self.boost_per_unit_bps, self.max_bonus_bps)
    }
}

impl Default for BoostParams {
    fn default() -> Self {
        Self {
            boost_unit_amount:  DEFAULT_BOOST_UNIT_AMOUNT,
            boost_per_unit_bps: DEFAULT_BOOST_PER_UNIT_BPS,
            max_bonus_bps:      DEFAULT_MAX_BONUS_BPS,
        }
    }
}

/// Season-independent aggregate of outstanding stake per house.
/// Boosts are derived from it on every read and never stored.
#[account]
#[derive(Default, Debug, PartialEq)]
pub struct StakeRegistry {
    pub house_weighted_stake: [u128; HOUSE_COUNT],  // 16 × 7
    pub house_staked_amount:  [u64; HOUSE_COUNT],   // 8 × 7
    pub house_positions:      [u32; HOUSE_COUNT],   // 4 × 7
    pub bump:                 u8,                   // 1
}

impl StakeRegistry {
    pub const LEN: usize = 16 * HOUSE_COUNT + 8 * HOUSE_COUNT + 4 * HOUSE_COUNT + 1;

    pub fn weighted_stake(&self, house: House) -> u128 {
        self.house_weighted_stake[house.index()]
    }

    pub fn house_boost(&self, house: House, params: &BoostParams) -> u64 {
        params.boost_bps(self.weighted_stake(house))
    }

    pub fn boosts(&self, params: &BoostParams) -> [u64; HOUSE_COUNT] {
        let mut out = [BASE_MULTIPLIER_BPS; HOUSE_COUNT];
        for house in House::ALL {
            out[house.index()] = self.house_boost(house, params);
        }
        out
    }

    /// Returns the house's new weighted stake.
    pub fn add_position(&mut self, house: House, amount: u64, weight: u128) -> Result<u128> {
        let i = house.index();
        let weighted = self.house_weighted_stake[i].checked_add(weight).ok_or(WarsError::MathOverflow)?;
        let staked = self.house_staked_amount[i].checked_add(amount).ok_or(WarsError::MathOverflow)?;
        let positions = self.house_positions[i].checked_add(1).ok_or(WarsError::MathOverflow)?;

        self.house_weighted_stake[i] = weighted;
        self.house_staked_amount[i] = staked;
        self.house_positions[i] = positions;
        Ok(weighted)
    }

    /// Returns the house's new weighted stake.
    pub fn remove_position(&mut self, house: House, amount: u64, weight: u128) -> Result<u128> {
        let i = house.index();
        let weighted = self.house_weighted_stake[i].checked_sub(weight).ok_or(WarsError::MathOverflow)?;
        let staked = self.house_staked_amount[i].checked_sub(amount).ok_or(WarsError::MathOverflow)?;
        let positions = self.house_positions[i].checked_sub(1).ok_or(WarsError::MathOverflow)?;

        self.house_weighted_stake[i] = weighted;
        self.house_staked_amount[i] = staked;
        self.house_positions[i] = positions;
        Ok(weighted)
    }
}

/// One per wallet. Holds the house loyalty lock.
#[account]
#[derive(Default, Debug, PartialEq)]
pub struct StakerProfile {
    pub owner:            Pubkey,  // 32
    pub house_id:         u8,      // 1
    pub house_set:        bool,    // 1
    pub next_position_id: u64,     // 8
    pub open_positions:   u32,     // 4
    pub total_staked:     u64,     // 8
    pub bump:             u8,      // 1
}

impl StakerProfile {
    pub const LEN: usize = 32 + 1 + 1 + 8 + 4 + 8 + 1;

    /// The first stake picks the house; every later stake must match it.
    pub fn check_house(&self, house: House) -> Result<()> {
        if self.house_set {
            require!(self.house_id == house.id(), WarsError::HouseAlreadySet);
        }
        Ok(())
    }
}

#[account]
#[derive(Default, Debug, PartialEq)]
pub struct StakePosition {
    pub owner:        Pubkey,  // 32
    pub position_id:  u64,     // 8
    pub house_id:     u8,      // 1
    pub amount:       u64,     // 8
    pub lock_seconds: i64,     // 8
    pub staked_at:    i64,     // 8
    pub lock_expiry:  i64,     // 8
    pub weight:       u128,    // 16
    pub bump:         u8,      // 1
}

impl StakePosition {
    pub const LEN: usize = 32 + 8 + 1 + 8 + 8 + 8 + 8 + 16 + 1;

    pub fn is_unlocked(&self, now: i64) -> bool {
        now >= self.lock_expiry
    }
}

/// Validated request to open a new stake position.
#[derive(Clone, Copy, Debug)]
pub struct StakeRequest {
    pub owner:        Pubkey,
    pub house:        House,
    pub amount:       u64,
    pub lock_seconds: i64,
    pub now:          i64,
}

/// Applies a stake to the profile, the new position and the registry.
/// All checks run before any field is written.
pub fn open_position(
    profile:  &mut StakerProfile,
    position: &mut StakePosition,
    registry: &mut StakeRegistry,
    request:  StakeRequest,
    min_lock: i64,
    max_lock: i64,
) -> Result<u128> {
    let StakeRequest { owner, house, amount, lock_seconds, now } = request;

    require!(amount > 0, WarsError::ZeroAmount);
    require!(
        lock_seconds >= min_lock && lock_seconds <= max_lock,
        WarsError::InvalidLockDuration
    );
    profile.check_house(house)?;

    let weight = math::position_weight(amount, lock_seconds)?;
    let lock_expiry = now.checked_add(lock_seconds).ok_or(WarsError::MathOverflow)?;
    let position_id = profile.next_position_id;
    let next_position_id = position_id.checked_add(1).ok_or(WarsError::MathOverflow)?;
    let open_positions = profile.open_positions.checked_add(1).ok_or(WarsError::MathOverflow)?;
    let total_staked = profile.total_staked.checked_add(amount).ok_or(WarsError::MathOverflow)?;

    let house_weighted_stake = registry.add_position(house, amount, weight)?;

    profile.owner = owner;
    profile.house_id = house.id();
    profile.house_set = true;
    profile.next_position_id = next_position_id;
    profile.open_positions = open_positions;
    profile.total_staked = total_staked;

    position.owner = owner;
    position.position_id = position_id;
    position.house_id = house.id();
    position.amount = amount;
    position.lock_seconds = lock_seconds;
    position.staked_at = now;
    position.lock_expiry = lock_expiry;
    position.weight = weight;

    Ok(house_weighted_stake)
}

/// Removes an expired position's weight. The house affiliation stays.
pub fn close_position(
    profile:  &mut StakerProfile,
    position: &StakePosition,
    registry: &mut StakeRegistry,
    now:      i64,
) -> Result<u128> {
    require!(position.is_unlocked(now), WarsError::StakeLocked);
    let house = House::from_id(position.house_id)?;

    let open_positions = profile.open_positions.checked_sub(1).ok_or(WarsError::MathOverflow)?;
    let total_staked = profile.total_staked.checked_sub(position.amount).ok_or(WarsError::MathOverflow)?;

    let house_weighted_stake = registry.remove_position(house, position.amount, position.weight)?;
    profile.open_positions = open_positions;
    profile.total_staked = total_staked;
    Ok(house_weighted_stake)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOL: u64 = 1_000_000_000;
    const DAY: i64 = SECONDS_PER_DAY;

    fn code(e: WarsError) -> anchor_lang::error::Error {
        e.into()
    }

    fn stake(
        profile: &mut StakerProfile,
        registry: &mut StakeRegistry,
        house: House,
        amount: u64,
        lock_seconds: i64,
    ) -> Result<StakePosition> {
        let mut position = StakePosition::default();
        let request = StakeRequest { owner: profile.owner, house, amount, lock_seconds, now: 1_000 };
        open_position(profile, &mut position, registry, request, DEFAULT_MIN_LOCK, DEFAULT_MAX_LOCK)?;
        Ok(position)
    }

    fn fresh_profile() -> StakerProfile {
        StakerProfile { owner: Pubkey::new_unique(), ..Default::default() }
    }

    #[test]
    fn first_stake_locks_the_house() {
        let mut profile = fresh_profile();
        let mut registry = StakeRegistry::default();

        let position = stake(&mut profile, &mut registry, House::Earth, 20 * SOL, 60 * DAY).unwrap();
        assert!(profile.house_set);
        assert_eq!(profile.house_id, 2);
        assert_eq!(position.weight, 40 * SOL as u128);
        assert_eq!(position.lock_expiry, 1_000 + 60 * DAY);

        let err = stake(&mut profile, &mut registry, House::Air, 20 * SOL, 60 * DAY).unwrap_err();
        assert_eq!(err, code(WarsError::HouseAlreadySet));
        assert_eq!(registry.weighted_stake(House::Earth), 40 * SOL as u128);
        assert_eq!(registry.weighted_stake(House::Air), 0);
        assert_eq!(profile.next_position_id, 1);
    }

    #[test]
    fn same_house_positions_accumulate() {
        let mut profile = fresh_profile();
        let mut registry = StakeRegistry::default();

        let first = stake(&mut profile, &mut registry, House::Fire, 10 * SOL, 30 * DAY).unwrap();
        let second = stake(&mut profile, &mut registry, House::Fire, 5 * SOL, 90 * DAY).unwrap();

        assert_eq!(first.position_id, 0);
        assert_eq!(second.position_id, 1);
        assert_eq!(registry.weighted_stake(House::Fire), 25 * SOL as u128);
        assert_eq!(registry.house_positions[House::Fire.index()], 2);
        assert_eq!(profile.total_staked, 15 * SOL);
        assert_eq!(registry.house_boost(House::Fire, &BoostParams::default()), 11_000);
    }

    #[test]
    fn lock_bounds_and_zero_amount_are_rejected_without_writes() {
        let mut profile = fresh_profile();
        let mut registry = StakeRegistry::default();

        let short = stake(&mut profile, &mut registry, House::Aqua, SOL, DEFAULT_MIN_LOCK - 1).unwrap_err();
        assert_eq!(short, code(WarsError::InvalidLockDuration));
        let long = stake(&mut profile, &mut registry, House::Aqua, SOL, DEFAULT_MAX_LOCK + 1).unwrap_err();
        assert_eq!(long, code(WarsError::InvalidLockDuration));
        let zero = stake(&mut profile, &mut registry, House::Aqua, 0, 30 * DAY).unwrap_err();
        assert_eq!(zero, code(WarsError::ZeroAmount));

        assert!(!profile.house_set);
        assert_eq!(registry, StakeRegistry::default());
    }

    #[test]
    fn withdrawal_waits_for_expiry_and_removes_weight() {
        let mut profile = fresh_profile();
        let mut registry = StakeRegistry::default();
        let position = stake(&mut profile, &mut registry, House::Dark, 20 * SOL, 30 * DAY).unwrap();
        let _keep = stake(&mut profile, &mut registry, House::Dark, 10 * SOL, 30 * DAY).unwrap();

        let early = close_position(&mut profile, &position, &mut registry, position.lock_expiry - 1);
        assert_eq!(early.unwrap_err(), code(WarsError::StakeLocked));
        assert_eq!(registry.weighted_stake(House::Dark), 30 * SOL as u128);

        let remaining = close_position(&mut profile, &position, &mut registry, position.lock_expiry).unwrap();
        assert_eq!(remaining, 10 * SOL as u128);
        assert_eq!(profile.open_positions, 1);
        assert_eq!(profile.total_staked, 10 * SOL);
        // loyalty survives withdrawal
        assert!(profile.house_set);
        assert_eq!(profile.check_house(House::Aqua).unwrap_err(), code(WarsError::HouseAlreadySet));
    }

    #[test]
    fn boosts_cover_every_house() {
        let mut registry = StakeRegistry::default();
        registry.add_position(House::Chaos, 200 * SOL, 1_200 * SOL as u128).unwrap();
        let boosts = registry.boosts(&BoostParams::default());
        assert_eq!(boosts[House::Chaos.index()], 20_000);
        assert!(boosts[..6].iter().all(|b| *b == BASE_MULTIPLIER_BPS));
    }
}
