use anchor_lang::prelude::*;

use crate::auth::{MutationPolicy, Role};
use crate::constants::{SEED_CONFIG, SEED_SEASON, SEED_STAKE_REGISTRY};
use crate::events::SeasonFinalized;
use crate::state::{House, Season, StakeRegistry, WarsConfig};

#[derive(Accounts)]
#[instruction(season_id: u64)]
pub struct FinalizeSeason<'info> {
    #[account(mut, seeds = [SEED_CONFIG], bump = config.bump)]
    pub config: Account<'info, WarsConfig>,
    #[account(seeds = [SEED_STAKE_REGISTRY], bump = stake_registry.bump)]
    pub stake_registry: Account<'info, StakeRegistry>,
    #[account(mut, seeds = [SEED_SEASON, season_id.to_le_bytes().as_ref()], bump = season.bump)]
    pub season: Account<'info, Season>,
    pub game_master: Signer<'info>,
}

/// Freezes the season: final multipliers (configured × current stake boost),
/// final scores, ranking and the prize entitlement schedule. A second call
/// always fails; nothing is ever recomputed.
pub fn finalize_season(ctx: Context<FinalizeSeason>, season_id: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let game_master = ctx.accounts.game_master.key();
    ctx.accounts.config.authorize(&game_master, Role::GameMaster)?;

    let boosts = ctx.accounts.stake_registry.boosts(&ctx.accounts.config.params.boost);
    let distribution = ctx.accounts.config.prize_distribution.clone();
    let record = ctx.accounts.season.finalize(now, &boosts, &distribution)?;
    ctx.accounts.config.mark_finalized(season_id);

    let winner = House::from_id(record.ranking[0])?;
    msg!(
        "Season {} finalized: {} wins with {} (pool {})",
        season_id, winner.name(), record.final_scores[winner.index()], record.prize_pool
    );
    emit!(SeasonFinalized {
        season_id,
        ranking:            record.ranking,
        final_scores:       record.final_scores,
        total_multipliers:  record.total_multipliers,
        prize_pool:         record.prize_pool,
        prize_entitlements: record.prize_entitlements,
        undistributed:      record.undistributed,
        standings_hash:     record.standings_hash,
        finalized_at:       record.finalized_at,
    });
    Ok(())
}
