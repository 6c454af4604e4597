use anchor_lang::prelude::*;

pub mod auth;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod math;
pub mod state;

use instructions::*;
use state::{LeaderboardEntry, PrizeEntitlement, SeasonInfo, WarsParams};

declare_id!("HWarsq7nX3Jc8k5mGZfVqN2yQfJ1pRkB4sDwE9tLhA6u");

#[cfg(not(feature = "no-entrypoint"))]
use solana_security_txt::security_txt;

#[cfg(not(feature = "no-entrypoint"))]
security_txt! {
    name: "House Wars",
    project_url: "https://housewars.gg",
    contacts: "email:security@housewars.gg",
    policy: "https://housewars.gg/security",
    preferred_languages: "en",
    source_code: "https://github.com/house-wars/house-wars-program",
    auditors: "Unaudited"
}

#[program]
pub mod house_wars {
    use super::*;

    // ── Admin ─────────────────────────────────────────────────────
    pub fn initialize(ctx: Context<Initialize>, params: WarsParams) -> Result<()> {
        admin::initialize(ctx, params)
    }

    pub fn update_params(ctx: Context<AdminOnly>, params: WarsParams) -> Result<()> {
        admin::update_params(ctx, params)
    }

    pub fn set_prize_distribution(ctx: Context<AdminOnly>, distribution: Vec<u16>) -> Result<()> {
        admin::set_prize_distribution(ctx, distribution)
    }

    pub fn grant_game_master(ctx: Context<AdminOnly>, game_master: Pubkey) -> Result<()> {
        admin::grant_game_master(ctx, game_master)
    }

    pub fn revoke_game_master(ctx: Context<AdminOnly>, game_master: Pubkey) -> Result<()> {
        admin::revoke_game_master(ctx, game_master)
    }

    // ── Authority transfer (72h timelock) ────────────────────────
    pub fn propose_authority_transfer(
        ctx: Context<AdminOnly>,
        new_authority: Pubkey,
    ) -> Result<()> {
        admin::propose_authority_transfer(ctx, new_authority)
    }

    pub fn cancel_authority_transfer(ctx: Context<AdminOnly>) -> Result<()> {
        admin::cancel_authority_transfer(ctx)
    }

    pub fn execute_authority_transfer(ctx: Context<ExecuteAuthorityTransfer>) -> Result<()> {
        admin::execute_authority_transfer(ctx)
    }

    // ── Season lifecycle ──────────────────────────────────────────
    pub fn start_season(ctx: Context<StartSeason>, duration: i64) -> Result<u64> {
        lifecycle::start_season(ctx, duration)
    }

    pub fn record_score(
        ctx: Context<GameMasterSeason>,
        season_id: u64,
        house_id: u8,
        points: u64,
    ) -> Result<()> {
        lifecycle::record_score(ctx, season_id, house_id, points)
    }

    pub fn set_multiplier(
        ctx: Context<GameMasterSeason>,
        season_id: u64,
        house_id: u8,
        multiplier_bps: u64,
    ) -> Result<()> {
        lifecycle::set_multiplier(ctx, season_id, house_id, multiplier_bps)
    }

    pub fn finalize_season(ctx: Context<FinalizeSeason>, season_id: u64) -> Result<()> {
        lifecycle::finalize_season(ctx, season_id)
    }

    // ── Prize pool (anyone can contribute) ───────────────────────
    pub fn add_to_prize_pool(
        ctx: Context<AddToPrizePool>,
        season_id: u64,
        amount: u64,
    ) -> Result<()> {
        lifecycle::add_to_prize_pool(ctx, season_id, amount)
    }

    pub fn fund_current_season(ctx: Context<FundCurrentSeason>, amount: u64) -> Result<()> {
        lifecycle::fund_current_season(ctx, amount)
    }

    // ── Staking ───────────────────────────────────────────────────
    pub fn stake_for_house(
        ctx: Context<StakeForHouse>,
        amount: u64,
        house_id: u8,
        lock_seconds: i64,
    ) -> Result<()> {
        staking::stake_for_house(ctx, amount, house_id, lock_seconds)
    }

    pub fn unstake(ctx: Context<Unstake>, position_id: u64) -> Result<()> {
        staking::unstake(ctx, position_id)
    }

    // ── Views ─────────────────────────────────────────────────────
    pub fn get_house_boost(ctx: Context<BoostView>, house_id: u8) -> Result<u64> {
        staking::get_house_boost(ctx, house_id)
    }

    pub fn get_season_info(ctx: Context<SeasonView>, season_id: u64) -> Result<SeasonInfo> {
        lifecycle::get_season_info(ctx, season_id)
    }

    pub fn is_season_active(ctx: Context<SeasonView>, season_id: u64) -> Result<bool> {
        lifecycle::is_season_active(ctx, season_id)
    }

    pub fn get_house_score(ctx: Context<SeasonView>, season_id: u64, house_id: u8) -> Result<u64> {
        lifecycle::get_house_score(ctx, season_id, house_id)
    }

    pub fn get_house_multiplier(
        ctx: Context<SeasonView>,
        season_id: u64,
        house_id: u8,
    ) -> Result<u64> {
        lifecycle::get_house_multiplier(ctx, season_id, house_id)
    }

    pub fn get_total_multiplier(
        ctx: Context<SeasonView>,
        season_id: u64,
        house_id: u8,
    ) -> Result<u64> {
        lifecycle::get_total_multiplier(ctx, season_id, house_id)
    }

    pub fn get_final_score(ctx: Context<SeasonView>, season_id: u64, house_id: u8) -> Result<u64> {
        lifecycle::get_final_score(ctx, season_id, house_id)
    }

    pub fn get_leaderboard(
        ctx: Context<SeasonView>,
        season_id: u64,
    ) -> Result<Vec<LeaderboardEntry>> {
        lifecycle::get_leaderboard(ctx, season_id)
    }

    pub fn get_prize_entitlements(
        ctx: Context<SeasonView>,
        season_id: u64,
    ) -> Result<Vec<PrizeEntitlement>> {
        lifecycle::get_prize_entitlements(ctx, season_id)
    }
}
