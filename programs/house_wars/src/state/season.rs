use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::WarsError;
use crate::math;
use super::House;

/// One competition window. Holds the score ledger, the configured
/// multipliers and the escrowed prize pool. Every write is rejected once
/// `finalized` flips; the `final_*` fields are only meaningful after that.
#[account]
#[derive(Default, Debug, PartialEq)]
pub struct Season {
    pub season_id:          u64,                  // 8
    pub start_time:         i64,                  // 8
    pub end_time:           i64,                  // 8
    pub prize_pool:         u64,                  // 8
    pub finalized:          bool,                 // 1
    pub finalized_at:       i64,                  // 8
    pub house_scores:       [u64; HOUSE_COUNT],   // 56
    pub multipliers:        [u64; HOUSE_COUNT],   // 56, configured bps
    // ── Frozen at finalization ──
    pub final_boosts:       [u64; HOUSE_COUNT],   // 56
    pub final_multipliers:  [u64; HOUSE_COUNT],   // 56
    pub final_scores:       [u64; HOUSE_COUNT],   // 56
    pub ranking:            [u8; HOUSE_COUNT],    // 7
    pub prize_distribution: Vec<u16>,             // 4 + 2 × MAX_PRIZE_TIERS
    pub prize_entitlements: [u64; HOUSE_COUNT],   // 56, by rank
    pub undistributed:      u64,                  // 8
    pub standings_hash:     [u8; 32],             // 32
    pub bump:               u8,                   // 1
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct SeasonInfo {
    pub season_id:  u64,
    pub start_time: i64,
    pub end_time:   i64,
    pub prize_pool: u64,
    pub finalized:  bool,
}

/// One leaderboard row. Both multiplier components are reported so an
/// operator can see where a house's advantage comes from.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub rank:                 u8,
    pub house_id:             u8,
    pub raw_score:            u64,
    pub configured_bps:       u64,
    pub stake_boost_bps:      u64,
    pub total_multiplier_bps: u64,
    pub final_score:          u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct PrizeEntitlement {
    pub rank:     u8,
    pub house_id: u8,
    pub amount:   u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct FinalizationRecord {
    pub season_id:          u64,
    pub ranking:            [u8; HOUSE_COUNT],
    pub final_scores:       [u64; HOUSE_COUNT],
    pub total_multipliers:  [u64; HOUSE_COUNT],
    pub prize_pool:         u64,
    pub prize_entitlements: [u64; HOUSE_COUNT],
    pub undistributed:      u64,
    pub standings_hash:     [u8; 32],
    pub finalized_at:       i64,
}

impl Season {
    pub const LEN: usize = 8 + 8 + 8 + 8 + 1 + 8
        + 8 * HOUSE_COUNT * 2
        + 8 * HOUSE_COUNT * 3
        + HOUSE_COUNT
        + 4 + 2 * MAX_PRIZE_TIERS
        + 8 * HOUSE_COUNT
        + 8 + 32 + 1;

    pub fn open(&mut self, season_id: u64, start_time: i64, end_time: i64, bump: u8) {
        *self = Season {
            season_id,
            start_time,
            end_time,
            multipliers: [BASE_MULTIPLIER_BPS; HOUSE_COUNT],
            bump,
            ..Default::default()
        };
    }

    pub fn is_active(&self, now: i64) -> bool {
        now < self.end_time && !self.finalized
    }

    pub fn info(&self) -> SeasonInfo {
        SeasonInfo {
            season_id:  self.season_id,
            start_time: self.start_time,
            end_time:   self.end_time,
            prize_pool: self.prize_pool,
            finalized:  self.finalized,
        }
    }

    pub fn house_score(&self, house_id: u8) -> Result<u64> {
        Ok(self.house_scores[House::from_id(house_id)?.index()])
    }

    pub fn house_multiplier(&self, house_id: u8) -> Result<u64> {
        Ok(self.multipliers[House::from_id(house_id)?.index()])
    }

    // ── Score ledger ─────────────────────────────────────────────────────

    /// Adds points to a house. Returns the house's new total.
    /// Totals stay at or under `MAX_RAW_SCORE` so finalization can never
    /// overflow, whatever multiplier or boost the house ends up with.
    pub fn record_score(&mut self, house_id: u8, points: u64) -> Result<u64> {
        let house = House::from_id(house_id)?;
        require!(!self.finalized, WarsError::SeasonFinalized);
        let total = self.house_scores[house.index()]
            .checked_add(points)
            .ok_or(WarsError::MathOverflow)?;
        require!(total <= MAX_RAW_SCORE, WarsError::MathOverflow);
        self.house_scores[house.index()] = total;
        Ok(total)
    }

    // ── Multiplier engine ────────────────────────────────────────────────

    pub fn set_multiplier(&mut self, house_id: u8, bps: u64) -> Result<()> {
        let house = House::from_id(house_id)?;
        require!(!self.finalized, WarsError::SeasonFinalized);
        math::validate_configured_multiplier(bps)?;
        self.multipliers[house.index()] = bps;
        Ok(())
    }

    /// Live value while the season is open, frozen value afterwards.
    pub fn total_multiplier(&self, house_id: u8, live_boost_bps: u64) -> Result<u64> {
        let i = House::from_id(house_id)?.index();
        if self.finalized {
            return Ok(self.final_multipliers[i]);
        }
        Ok(math::combine_multiplier(self.multipliers[i], live_boost_bps))
    }

    pub fn final_score(&self, house_id: u8, live_boost_bps: u64) -> Result<u64> {
        let i = House::from_id(house_id)?.index();
        if self.finalized {
            return Ok(self.final_scores[i]);
        }
        let total = self.total_multiplier(house_id, live_boost_bps)?;
        math::apply_multiplier(self.house_scores[i], total)
    }

    // ── Prize pool ───────────────────────────────────────────────────────

    /// Returns the new pool total.
    pub fn add_to_prize_pool(&mut self, amount: u64) -> Result<u64> {
        require!(amount > 0, WarsError::ZeroAmount);
        require!(!self.finalized, WarsError::SeasonFinalized);
        let total = self.prize_pool.checked_add(amount).ok_or(WarsError::MathOverflow)?;
        self.prize_pool = total;
        Ok(total)
    }

    // ── Finalization ─────────────────────────────────────────────────────

    /// One-shot transition. Freezes multipliers, scores, ranking and the
    /// prize schedule. Everything is computed before the first write.
    pub fn finalize(
        &mut self,
        now: i64,
        boosts: &[u64; HOUSE_COUNT],
        distribution: &[u16],
    ) -> Result<FinalizationRecord> {
        require!(now > self.end_time, WarsError::NotEnded);
        require!(!self.finalized, WarsError::AlreadyFinalized);
        math::validate_distribution(distribution)?;

        let mut total_multipliers = [0u64; HOUSE_COUNT];
        let mut final_scores = [0u64; HOUSE_COUNT];
        for house in House::ALL {
            let i = house.index();
            total_multipliers[i] = math::combine_multiplier(self.multipliers[i], boosts[i]);
            final_scores[i] = math::apply_multiplier(self.house_scores[i], total_multipliers[i])?;
        }
        let ranking = math::rank_houses(&final_scores);
        let (prize_entitlements, undistributed) = math::split_prize(self.prize_pool, distribution)?;
        let standings_hash = math::standings_digest(self.season_id, &ranking, &final_scores);

        self.finalized = true;
        self.finalized_at = now;
        self.final_boosts = *boosts;
        self.final_multipliers = total_multipliers;
        self.final_scores = final_scores;
        self.ranking = ranking;
        self.prize_distribution = distribution.to_vec();
        self.prize_entitlements = prize_entitlements;
        self.undistributed = undistributed;
        self.standings_hash = standings_hash;

        Ok(FinalizationRecord {
            season_id: self.season_id,
            ranking,
            final_scores,
            total_multipliers,
            prize_pool: self.prize_pool,
            prize_entitlements,
            undistributed,
            standings_hash,
            finalized_at: now,
        })
    }

    // ── Reads for the projector ──────────────────────────────────────────

    /// Houses ordered by final score. Uses frozen values once finalized.
    pub fn leaderboard(&self, live_boosts: &[u64; HOUSE_COUNT]) -> Result<Vec<LeaderboardEntry>> {
        let boosts = if self.finalized { &self.final_boosts } else { live_boosts };

        let mut totals = [0u64; HOUSE_COUNT];
        let mut finals = [0u64; HOUSE_COUNT];
        for house in House::ALL {
            let i = house.index();
            totals[i] = self.total_multiplier(house.id(), boosts[i])?;
            finals[i] = self.final_score(house.id(), boosts[i])?;
        }
        let ranking = if self.finalized { self.ranking } else { math::rank_houses(&finals) };

        Ok(ranking
            .iter()
            .enumerate()
            .map(|(rank, house_id)| {
                let i = *house_id as usize;
                LeaderboardEntry {
                    rank:                 rank as u8 + 1,
                    house_id:             *house_id,
                    raw_score:            self.house_scores[i],
                    configured_bps:       self.multipliers[i],
                    stake_boost_bps:      boosts[i],
                    total_multiplier_bps: totals[i],
                    final_score:          finals[i],
                }
            })
            .collect())
    }

    /// Payout schedule frozen at finalization, one row per paid rank.
    pub fn entitlements(&self) -> Result<Vec<PrizeEntitlement>> {
        require!(self.finalized, WarsError::SeasonNotFinalized);
        Ok(self
            .prize_distribution
            .iter()
            .enumerate()
            .map(|(rank, _)| PrizeEntitlement {
                rank:     rank as u8 + 1,
                house_id: self.ranking[rank],
                amount:   self.prize_entitlements[rank],
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_BOOST: [u64; HOUSE_COUNT] = [BASE_MULTIPLIER_BPS; HOUSE_COUNT];

    fn code(e: WarsError) -> anchor_lang::error::Error {
        e.into()
    }

    fn open_season() -> Season {
        let mut season = Season::default();
        season.open(1, 100, 110, 255);
        season
    }

    #[test]
    fn open_resets_every_house() {
        let mut season = open_season();
        season.record_score(3, 50).unwrap();
        season.open(2, 200, 300, 254);
        assert_eq!(season.season_id, 2);
        assert_eq!(season.house_scores, [0; HOUSE_COUNT]);
        assert_eq!(season.multipliers, [10_000; HOUSE_COUNT]);
        assert!(!season.finalized);
        assert_eq!(season.prize_pool, 0);
    }

    #[test]
    fn activity_window_is_half_open() {
        let season = open_season();
        assert!(season.is_active(100));
        assert!(season.is_active(109));
        assert!(!season.is_active(110));
    }

    #[test]
    fn scores_accumulate_per_house() {
        let mut season = open_season();
        assert_eq!(season.record_score(0, 15).unwrap(), 15);
        assert_eq!(season.record_score(0, 10).unwrap(), 25);
        season.record_score(1, 0).unwrap();
        assert_eq!(season.house_score(0).unwrap(), 25);
        assert_eq!(season.house_score(1).unwrap(), 0);
    }

    #[test]
    fn invalid_house_is_checked_first() {
        let mut season = open_season();
        season.finalized = true;
        assert_eq!(season.record_score(7, 1).unwrap_err(), code(WarsError::InvalidHouseId));
        assert_eq!(season.set_multiplier(9, 1).unwrap_err(), code(WarsError::InvalidHouseId));
    }

    #[test]
    fn score_overflow_leaves_total_unchanged() {
        let mut season = open_season();
        season.record_score(2, MAX_RAW_SCORE - 1).unwrap();
        assert_eq!(season.record_score(2, 2).unwrap_err(), code(WarsError::MathOverflow));
        assert_eq!(season.record_score(2, u64::MAX).unwrap_err(), code(WarsError::MathOverflow));
        assert_eq!(season.house_score(2).unwrap(), MAX_RAW_SCORE - 1);
    }

    #[test]
    fn score_above_the_multiplier_headroom_is_rejected() {
        let mut season = open_season();
        let err = season.record_score(0, u64::MAX / 2).unwrap_err();
        assert_eq!(err, code(WarsError::MathOverflow));
        assert_eq!(season.house_score(0).unwrap(), 0);
    }

    #[test]
    fn max_score_at_max_multiplier_still_finalizes() {
        let mut season = open_season();
        season.record_score(0, MAX_RAW_SCORE).unwrap();
        season.set_multiplier(0, MAX_MULTIPLIER_BPS).unwrap();
        let full_boost = [BASE_MULTIPLIER_BPS + DEFAULT_MAX_BONUS_BPS; HOUSE_COUNT];

        assert_eq!(season.final_score(0, full_boost[0]).unwrap(), MAX_RAW_SCORE * 5);
        let record = season.finalize(111, &full_boost, &DEFAULT_PRIZE_DISTRIBUTION).unwrap();
        assert!(season.finalized);
        assert_eq!(record.ranking[0], 0);
        assert_eq!(record.final_scores[0], MAX_RAW_SCORE * 5);
        assert_eq!(season.leaderboard(&NO_BOOST).unwrap()[0].final_score, MAX_RAW_SCORE * 5);
    }

    #[test]
    fn accepted_multipliers_read_back_exactly() {
        let mut season = open_season();
        season.set_multiplier(0, 15_000).unwrap();
        assert_eq!(season.house_multiplier(0).unwrap(), 15_000);
        season.set_multiplier(0, 1).unwrap();
        assert_eq!(season.house_multiplier(0).unwrap(), 1);

        assert_eq!(season.set_multiplier(0, 0).unwrap_err(), code(WarsError::InvalidMultiplier));
        assert_eq!(season.set_multiplier(0, 60_000).unwrap_err(), code(WarsError::InvalidMultiplier));
        assert_eq!(season.house_multiplier(0).unwrap(), 1);
    }

    #[test]
    fn final_score_tracks_multiplier_before_finalization() {
        let mut season = open_season();
        season.record_score(0, 1_000).unwrap();
        season.set_multiplier(0, 15_000).unwrap();
        assert_eq!(season.final_score(0, BASE_MULTIPLIER_BPS).unwrap(), 1_500);
        // 1.5x configured × 1.2x boost = 1.8x
        assert_eq!(season.total_multiplier(0, 12_000).unwrap(), 18_000);
        assert_eq!(season.final_score(0, 12_000).unwrap(), 1_800);
    }

    #[test]
    fn prize_pool_only_grows_while_open() {
        let mut season = open_season();
        assert_eq!(season.add_to_prize_pool(1_000).unwrap(), 1_000);
        assert_eq!(season.add_to_prize_pool(500).unwrap(), 1_500);
        assert_eq!(season.add_to_prize_pool(0).unwrap_err(), code(WarsError::ZeroAmount));

        season.finalize(111, &NO_BOOST, &DEFAULT_PRIZE_DISTRIBUTION).unwrap();
        assert_eq!(season.add_to_prize_pool(1).unwrap_err(), code(WarsError::SeasonFinalized));
        assert_eq!(season.prize_pool, 1_500);
    }

    #[test]
    fn finalize_is_gated_on_end_time_and_runs_once() {
        let mut season = open_season();
        assert_eq!(
            season.finalize(110, &NO_BOOST, &DEFAULT_PRIZE_DISTRIBUTION).unwrap_err(),
            code(WarsError::NotEnded)
        );
        assert!(!season.finalized);

        season.finalize(111, &NO_BOOST, &DEFAULT_PRIZE_DISTRIBUTION).unwrap();
        assert!(season.finalized);
        assert_eq!(season.finalized_at, 111);

        let frozen = season.clone();
        assert_eq!(
            season.finalize(500, &[20_000; HOUSE_COUNT], &[10_000]).unwrap_err(),
            code(WarsError::AlreadyFinalized)
        );
        assert_eq!(season, frozen);
    }

    #[test]
    fn writes_after_finalization_change_nothing() {
        let mut season = open_season();
        season.record_score(4, 900).unwrap();
        season.finalize(200, &NO_BOOST, &DEFAULT_PRIZE_DISTRIBUTION).unwrap();
        let frozen = season.clone();

        assert_eq!(season.record_score(4, 15).unwrap_err(), code(WarsError::SeasonFinalized));
        assert_eq!(season.set_multiplier(4, 20_000).unwrap_err(), code(WarsError::SeasonFinalized));
        assert_eq!(season, frozen);
        assert_eq!(season.house_score(4).unwrap(), 900);
    }

    #[test]
    fn frozen_values_ignore_later_boosts() {
        let mut season = open_season();
        season.record_score(1, 1_000).unwrap();
        let mut boosts = NO_BOOST;
        boosts[1] = 12_000;
        season.finalize(111, &boosts, &DEFAULT_PRIZE_DISTRIBUTION).unwrap();

        assert_eq!(season.final_score(1, 20_000).unwrap(), 1_200);
        assert_eq!(season.total_multiplier(1, 20_000).unwrap(), 12_000);

        let board = season.leaderboard(&[20_000; HOUSE_COUNT]).unwrap();
        assert_eq!(board[0].house_id, 1);
        assert_eq!(board[0].stake_boost_bps, 12_000);
        assert_eq!(board[0].final_score, 1_200);
    }

    #[test]
    fn entitlements_follow_ranking() {
        let mut season = open_season();
        for (house, points) in [(0u8, 10u64), (1, 30), (2, 20)] {
            season.record_score(house, points).unwrap();
        }
        season.add_to_prize_pool(1_001).unwrap();
        assert_eq!(season.entitlements().unwrap_err(), code(WarsError::SeasonNotFinalized));

        let record = season.finalize(111, &NO_BOOST, &DEFAULT_PRIZE_DISTRIBUTION).unwrap();
        assert_eq!(&record.ranking[..3], &[1, 2, 0]);
        assert_eq!(record.undistributed, 1);

        let rows = season.entitlements().unwrap();
        assert_eq!(
            rows,
            vec![
                PrizeEntitlement { rank: 1, house_id: 1, amount: 500 },
                PrizeEntitlement { rank: 2, house_id: 2, amount: 300 },
                PrizeEntitlement { rank: 3, house_id: 0, amount: 200 },
            ]
        );
    }

    #[test]
    fn invalid_schedule_blocks_finalization() {
        let mut season = open_season();
        let err = season.finalize(111, &NO_BOOST, &[5_000, 3_000, 1_000]).unwrap_err();
        assert_eq!(err, code(WarsError::InvalidDistributionTotal));
        assert!(!season.finalized);
    }
}
