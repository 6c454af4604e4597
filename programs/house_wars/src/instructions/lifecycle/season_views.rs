use anchor_lang::prelude::*;

use crate::constants::{SEED_CONFIG, SEED_SEASON, SEED_STAKE_REGISTRY};
use crate::state::{
    House, LeaderboardEntry, PrizeEntitlement, Season, SeasonInfo, StakeRegistry, WarsConfig,
};

/// Read-only context for season queries. Callers simulate these
/// instructions and read the return data.
#[derive(Accounts)]
#[instruction(season_id: u64)]
pub struct SeasonView<'info> {
    #[account(seeds = [SEED_CONFIG], bump = config.bump)]
    pub config: Account<'info, WarsConfig>,
    #[account(seeds = [SEED_STAKE_REGISTRY], bump = stake_registry.bump)]
    pub stake_registry: Account<'info, StakeRegistry>,
    #[account(seeds = [SEED_SEASON, season_id.to_le_bytes().as_ref()], bump = season.bump)]
    pub season: Account<'info, Season>,
}

impl<'info> SeasonView<'info> {
    fn live_boost(&self, house_id: u8) -> Result<u64> {
        let house = House::from_id(house_id)?;
        Ok(self.stake_registry.house_boost(house, &self.config.params.boost))
    }
}

pub fn get_season_info(ctx: Context<SeasonView>, _season_id: u64) -> Result<SeasonInfo> {
    Ok(ctx.accounts.season.info())
}

pub fn is_season_active(ctx: Context<SeasonView>, _season_id: u64) -> Result<bool> {
    let now = Clock::get()?.unix_timestamp;
    Ok(ctx.accounts.season.is_active(now))
}

pub fn get_house_score(ctx: Context<SeasonView>, _season_id: u64, house_id: u8) -> Result<u64> {
    ctx.accounts.season.house_score(house_id)
}

pub fn get_house_multiplier(ctx: Context<SeasonView>, _season_id: u64, house_id: u8) -> Result<u64> {
    ctx.accounts.season.house_multiplier(house_id)
}

pub fn get_total_multiplier(ctx: Context<SeasonView>, _season_id: u64, house_id: u8) -> Result<u64> {
    let boost = ctx.accounts.live_boost(house_id)?;
    ctx.accounts.season.total_multiplier(house_id, boost)
}

pub fn get_final_score(ctx: Context<SeasonView>, _season_id: u64, house_id: u8) -> Result<u64> {
    let boost = ctx.accounts.live_boost(house_id)?;
    ctx.accounts.season.final_score(house_id, boost)
}

pub fn get_leaderboard(ctx: Context<SeasonView>, _season_id: u64) -> Result<Vec<LeaderboardEntry>> {
    let boosts = ctx.accounts.stake_registry.boosts(&ctx.accounts.config.params.boost);
    ctx.accounts.season.leaderboard(&boosts)
}

pub fn get_prize_entitlements(ctx: Context<SeasonView>, _season_id: u64) -> Result<Vec<PrizeEntitlement>> {
    ctx.accounts.season.entitlements()
}
