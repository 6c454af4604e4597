use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::WarsError;
use super::BoostParams;

/// Tunables the administrator may change between seasons.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct WarsParams {
    pub min_duration: i64,          // 8
    pub max_duration: i64,          // 8
    pub min_lock:     i64,          // 8
    pub max_lock:     i64,          // 8
    pub boost:        BoostParams,  // 24
}

impl WarsParams {
    pub const LEN: usize = 8 + 8 + 8 + 8 + BoostParams::LEN;

    pub fn validate(&self) -> Result<()> {
        require!(
            self.min_duration > 0 && self.min_duration <= self.max_duration,
            WarsError::InvalidParams
        );
        require!(self.min_lock > 0 && self.min_lock <= self.max_lock, WarsError::InvalidParams);
        require!(self.boost.boost_unit_amount > 0, WarsError::InvalidParams);
        // a full boost may never push the multiplier past the global ceiling on its own
        require!(
            BASE_MULTIPLIER_BPS.saturating_add(self.boost.max_bonus_bps) <= MAX_MULTIPLIER_BPS,
            WarsError::InvalidParams
        );
        Ok(())
    }
}

impl Default for WarsParams {
    fn default() -> Self {
        Self {
            min_duration: DEFAULT_MIN_DURATION,
            max_duration: DEFAULT_MAX_DURATION,
            min_lock:     DEFAULT_MIN_LOCK,
            max_lock:     DEFAULT_MAX_LOCK,
            boost:        BoostParams::default(),
        }
    }
}

/// Program-wide state: roles, tunables, payout schedule and the pointer to
/// the current season.
#[account]
#[derive(Default, Debug, PartialEq)]
pub struct WarsConfig {
    pub authority:                Pubkey,          // 32
    pub game_masters:             Vec<Pubkey>,     // 4 + 32 × MAX_GAME_MASTERS
    pub current_season_id:        u64,             // 8, 0 until the first season starts
    pub current_season_finalized: bool,            // 1
    pub params:                   WarsParams,      // WarsParams::LEN
    pub prize_distribution:       Vec<u16>,        // 4 + 2 × MAX_PRIZE_TIERS
    // ── Authority transfer (72h timelock) ──
    pub pending_authority:        Option<Pubkey>,  // 1 + 32
    pub authority_transfer_at:    i64,             // 8
    pub bump:                     u8,              // 1
}

impl WarsConfig {
    pub const LEN: usize = 32
        + 4 + 32 * MAX_GAME_MASTERS
        + 8 + 1
        + WarsParams::LEN
        + 4 + 2 * MAX_PRIZE_TIERS
        + 33 + 8 + 1;

    pub fn next_season_id(&self) -> u64 {
        self.current_season_id.saturating_add(1)
    }

    pub fn has_open_season(&self) -> bool {
        self.current_season_id != 0 && !self.current_season_finalized
    }

    /// Moves the season pointer forward. Returns (season_id, end_time).
    pub fn begin_season(&mut self, duration: i64, now: i64) -> Result<(u64, i64)> {
        require!(!self.has_open_season(), WarsError::PreviousSeasonNotFinalized);
        require!(
            duration >= self.params.min_duration && duration <= self.params.max_duration,
            WarsError::InvalidDuration
        );
        let season_id = self.current_season_id.checked_add(1).ok_or(WarsError::MathOverflow)?;
        let end_time = now.checked_add(duration).ok_or(WarsError::MathOverflow)?;

        self.current_season_id = season_id;
        self.current_season_finalized = false;
        Ok((season_id, end_time))
    }

    pub fn mark_finalized(&mut self, season_id: u64) {
        if season_id == self.current_season_id {
            self.current_season_finalized = true;
        }
    }

    pub fn set_prize_distribution(&mut self, distribution: Vec<u16>) -> Result<()> {
        crate::math::validate_distribution(&distribution)?;
        self.prize_distribution = distribution;
        Ok(())
    }

    pub fn update_params(&mut self, params: WarsParams) -> Result<()> {
        params.validate()?;
        self.params = params;
        Ok(())
    }

    pub fn is_game_master(&self, key: &Pubkey) -> bool {
        self.game_masters.iter().any(|gm| gm == key)
    }

    pub fn grant_game_master(&mut self, key: Pubkey) -> Result<()> {
        require!(!self.is_game_master(&key), WarsError::AlreadyGameMaster);
        require!(self.game_masters.len() < MAX_GAME_MASTERS, WarsError::RosterFull);
        self.game_masters.push(key);
        Ok(())
    }

    pub fn revoke_game_master(&mut self, key: &Pubkey) -> Result<()> {
        let idx = self
            .game_masters
            .iter()
            .position(|gm| gm == key)
            .ok_or(WarsError::NotGameMaster)?;
        self.game_masters.swap_remove(idx);
        Ok(())
    }

    pub fn propose_authority(&mut self, new_authority: Pubkey, now: i64) -> Result<i64> {
        require!(new_authority != self.authority, WarsError::InvalidAuthority);
        require!(new_authority != Pubkey::default(), WarsError::InvalidAuthority);
        let unlocks_at = now.checked_add(AUTH_TIMELOCK).ok_or(WarsError::MathOverflow)?;
        self.pending_authority = Some(new_authority);
        self.authority_transfer_at = unlocks_at;
        Ok(unlocks_at)
    }

    pub fn cancel_authority_transfer(&mut self) -> Result<()> {
        require!(self.pending_authority.is_some(), WarsError::NoPendingTransfer);
        self.pending_authority = None;
        self.authority_transfer_at = 0;
        Ok(())
    }

    /// Returns the previous authority.
    pub fn accept_authority(&mut self, signer: &Pubkey, now: i64) -> Result<Pubkey> {
        let new_authority = self.pending_authority.ok_or(WarsError::NoPendingTransfer)?;
        require!(*signer == new_authority, WarsError::InvalidAuthority);
        require!(now >= self.authority_transfer_at, WarsError::TimelockActive);
        let old = self.authority;
        self.authority = new_authority;
        self.pending_authority = None;
        self.authority_transfer_at = 0;
        Ok(old)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(e: WarsError) -> anchor_lang::error::Error {
        e.into()
    }

    fn config() -> WarsConfig {
        WarsConfig {
            authority: Pubkey::new_unique(),
            prize_distribution: DEFAULT_PRIZE_DISTRIBUTION.to_vec(),
            ..Default::default()
        }
    }

    #[test]
    fn season_ids_start_at_one_and_require_finalization() {
        let mut cfg = config();
        assert!(!cfg.has_open_season());
        assert_eq!(cfg.next_season_id(), 1);

        let (id, end) = cfg.begin_season(DEFAULT_MIN_DURATION, 100).unwrap();
        assert_eq!(id, 1);
        assert_eq!(end, 100 + DEFAULT_MIN_DURATION);

        let err = cfg.begin_season(DEFAULT_MIN_DURATION, 200).unwrap_err();
        assert_eq!(err, code(WarsError::PreviousSeasonNotFinalized));
        assert_eq!(cfg.current_season_id, 1);

        cfg.mark_finalized(1);
        let (id, _) = cfg.begin_season(DEFAULT_MIN_DURATION, 300).unwrap();
        assert_eq!(id, 2);
        assert!(cfg.has_open_season());
    }

    #[test]
    fn duration_outside_bounds_is_rejected() {
        let mut cfg = config();
        let short = cfg.begin_season(DEFAULT_MIN_DURATION - 1, 0).unwrap_err();
        assert_eq!(short, code(WarsError::InvalidDuration));
        let long = cfg.begin_season(DEFAULT_MAX_DURATION + 1, 0).unwrap_err();
        assert_eq!(long, code(WarsError::InvalidDuration));
        assert!(cfg.begin_season(DEFAULT_MAX_DURATION, 0).is_ok());
        assert_eq!(cfg.current_season_id, 1);
    }

    #[test]
    fn stale_finalization_does_not_reopen_pointer() {
        let mut cfg = config();
        cfg.begin_season(DEFAULT_MIN_DURATION, 0).unwrap();
        cfg.mark_finalized(7);
        assert!(cfg.has_open_season());
    }

    #[test]
    fn prize_distribution_is_replaced_only_when_valid() {
        let mut cfg = config();
        let err = cfg.set_prize_distribution(vec![5_000, 3_000, 1_000]).unwrap_err();
        assert_eq!(err, code(WarsError::InvalidDistributionTotal));
        assert_eq!(cfg.prize_distribution, vec![5_000, 3_000, 2_000]);

        cfg.set_prize_distribution(vec![4_000, 3_000, 2_000, 1_000]).unwrap();
        assert_eq!(cfg.prize_distribution[0], 4_000);
        assert_eq!(cfg.prize_distribution[3], 1_000);
    }

    #[test]
    fn params_are_validated() {
        let mut cfg = config();
        let mut params = WarsParams { min_duration: 10, max_duration: 5, ..Default::default() };
        assert_eq!(cfg.update_params(params).unwrap_err(), code(WarsError::InvalidParams));

        params = WarsParams::default();
        params.boost.boost_unit_amount = 0;
        assert!(cfg.update_params(params).is_err());

        params = WarsParams::default();
        params.boost.max_bonus_bps = MAX_MULTIPLIER_BPS;
        assert!(cfg.update_params(params).is_err());

        params = WarsParams { min_duration: 1, max_duration: 10, ..Default::default() };
        cfg.update_params(params).unwrap();
        assert_eq!(cfg.params.max_duration, 10);
    }

    #[test]
    fn roster_grants_and_revokes() {
        let mut cfg = config();
        let gm = Pubkey::new_unique();
        cfg.grant_game_master(gm).unwrap();
        assert!(cfg.is_game_master(&gm));
        assert_eq!(cfg.grant_game_master(gm).unwrap_err(), code(WarsError::AlreadyGameMaster));

        for _ in 1..MAX_GAME_MASTERS {
            cfg.grant_game_master(Pubkey::new_unique()).unwrap();
        }
        assert_eq!(cfg.grant_game_master(Pubkey::new_unique()).unwrap_err(), code(WarsError::RosterFull));

        cfg.revoke_game_master(&gm).unwrap();
        assert!(!cfg.is_game_master(&gm));
        assert_eq!(cfg.revoke_game_master(&gm).unwrap_err(), code(WarsError::NotGameMaster));
    }

    #[test]
    fn authority_transfer_respects_timelock() {
        let mut cfg = config();
        let original = cfg.authority;
        let next = Pubkey::new_unique();

        assert!(cfg.propose_authority(original, 0).is_err());
        let unlocks_at = cfg.propose_authority(next, 1_000).unwrap();
        assert_eq!(unlocks_at, 1_000 + AUTH_TIMELOCK);

        let stranger = Pubkey::new_unique();
        assert_eq!(cfg.accept_authority(&stranger, unlocks_at).unwrap_err(), code(WarsError::InvalidAuthority));
        assert_eq!(cfg.accept_authority(&next, unlocks_at - 1).unwrap_err(), code(WarsError::TimelockActive));

        assert_eq!(cfg.accept_authority(&next, unlocks_at).unwrap(), original);
        assert_eq!(cfg.authority, next);
        assert!(cfg.pending_authority.is_none());
        assert_eq!(cfg.cancel_authority_transfer().unwrap_err(), code(WarsError::NoPendingTransfer));
    }
}
