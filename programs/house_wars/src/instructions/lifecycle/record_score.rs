use anchor_lang::prelude::*;

use crate::auth::{MutationPolicy, Role};
use crate::constants::{SEED_CONFIG, SEED_SEASON};
use crate::events::{MultiplierSet, ScoreRecorded};
use crate::state::{Season, WarsConfig};

/// Game-master write against a single season. Seasons are separate
/// accounts, so writes to different seasons never contend.
#[derive(Accounts)]
#[instruction(season_id: u64)]
pub struct GameMasterSeason<'info> {
    #[account(seeds = [SEED_CONFIG], bump = config.bump)]
    pub config: Account<'info, WarsConfig>,
    #[account(mut, seeds = [SEED_SEASON, season_id.to_le_bytes().as_ref()], bump = season.bump)]
    pub season: Account<'info, Season>,
    pub game_master: Signer<'info>,
}

pub fn record_score(ctx: Context<GameMasterSeason>, season_id: u64, house_id: u8, points: u64) -> Result<()> {
    let recorder = ctx.accounts.game_master.key();
    ctx.accounts.config.authorize(&recorder, Role::GameMaster)?;

    let house_total = ctx.accounts.season.record_score(house_id, points)?;

    emit!(ScoreRecorded { season_id, house_id, points, house_total, recorder });
    Ok(())
}

pub fn set_multiplier(ctx: Context<GameMasterSeason>, season_id: u64, house_id: u8, multiplier_bps: u64) -> Result<()> {
    let set_by = ctx.accounts.game_master.key();
    ctx.accounts.config.authorize(&set_by, Role::GameMaster)?;

    ctx.accounts.season.set_multiplier(house_id, multiplier_bps)?;

    emit!(MultiplierSet { season_id, house_id, multiplier_bps, set_by });
    Ok(())
}
