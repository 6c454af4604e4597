use anchor_lang::prelude::*;

use crate::auth::{MutationPolicy, Role};
use crate::constants::SEED_CONFIG;
use crate::events::{ParamsUpdated, PrizeDistributionUpdated};
use crate::state::{WarsConfig, WarsParams};

/// Shared context for every configuration write. The signer's role is
/// checked inside each handler through `MutationPolicy`.
#[derive(Accounts)]
pub struct AdminOnly<'info> {
    #[account(mut, seeds = [SEED_CONFIG], bump = config.bump)]
    pub config: Account<'info, WarsConfig>,
    pub authority: Signer<'info>,
}

pub fn update_params(ctx: Context<AdminOnly>, params: WarsParams) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.authorize(&ctx.accounts.authority.key(), Role::Admin)?;
    config.update_params(params)?;

    emit!(ParamsUpdated {
        min_duration:       params.min_duration,
        max_duration:       params.max_duration,
        boost_unit_amount:  params.boost.boost_unit_amount,
        boost_per_unit_bps: params.boost.boost_per_unit_bps,
        max_bonus_bps:      params.boost.max_bonus_bps,
        min_lock:           params.min_lock,
        max_lock:           params.max_lock,
    });
    Ok(())
}

/// Replaces the top-N payout schedule. Seasons already finalized keep the
/// schedule they were frozen with.
pub fn set_prize_distribution(ctx: Context<AdminOnly>, distribution: Vec<u16>) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.authorize(&ctx.accounts.authority.key(), Role::Admin)?;
    config.set_prize_distribution(distribution.clone())?;

    emit!(PrizeDistributionUpdated { distribution });
    Ok(())
}
