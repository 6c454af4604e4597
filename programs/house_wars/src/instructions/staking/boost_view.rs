use anchor_lang::prelude::*;

use crate::constants::{SEED_CONFIG, SEED_STAKE_REGISTRY};
use crate::state::{House, StakeRegistry, WarsConfig};

#[derive(Accounts)]
pub struct BoostView<'info> {
    #[account(seeds = [SEED_CONFIG], bump = config.bump)]
    pub config: Account<'info, WarsConfig>,
    #[account(seeds = [SEED_STAKE_REGISTRY], bump = stake_registry.bump)]
    pub stake_registry: Account<'info, StakeRegistry>,
}

/// Stake boost in bps, derived from outstanding stake on every call.
pub fn get_house_boost(ctx: Context<BoostView>, house_id: u8) -> Result<u64> {
    let house = House::from_id(house_id)?;
    Ok(ctx.accounts.stake_registry.house_boost(house, &ctx.accounts.config.params.boost))
}
