use anchor_lang::prelude::*;

use crate::auth::{MutationPolicy, Role};
use crate::constants::{SEED_CONFIG, SEED_SEASON};
use crate::events::SeasonStarted;
use crate::state::{Season, WarsConfig};

#[derive(Accounts)]
pub struct StartSeason<'info> {
    #[account(mut, seeds = [SEED_CONFIG], bump = config.bump)]
    pub config: Account<'info, WarsConfig>,
    #[account(init, payer = game_master, space = 8 + Season::LEN,
              seeds = [SEED_SEASON, config.next_season_id().to_le_bytes().as_ref()], bump)]
    pub season: Account<'info, Season>,
    #[account(mut)] pub game_master: Signer<'info>,
    pub system_program: Program<'info, System>,
}

/// Opens the next season. Only allowed once the previous one is finalized.
pub fn start_season(ctx: Context<StartSeason>, duration: i64) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let game_master = ctx.accounts.game_master.key();

    let config = &mut ctx.accounts.config;
    config.authorize(&game_master, Role::GameMaster)?;
    let (season_id, end_time) = config.begin_season(duration, now)?;

    ctx.accounts.season.open(season_id, now, end_time, ctx.bumps.season);

    msg!("Season {} started: {} → {}", season_id, now, end_time);
    emit!(SeasonStarted {
        season_id,
        start_time: now,
        end_time,
        started_by: game_master,
    });
    Ok(season_id)
}
