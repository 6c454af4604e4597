use anchor_lang::prelude::*;

use crate::constants::{DEFAULT_PRIZE_DISTRIBUTION, SEED_CONFIG, SEED_STAKE_REGISTRY};
use crate::events::ConfigInitialized;
use crate::state::{StakeRegistry, WarsConfig, WarsParams};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(init, payer = authority, space = 8 + WarsConfig::LEN,
              seeds = [SEED_CONFIG], bump)]
    pub config: Account<'info, WarsConfig>,
    #[account(init, payer = authority, space = 8 + StakeRegistry::LEN,
              seeds = [SEED_STAKE_REGISTRY], bump)]
    pub stake_registry: Account<'info, StakeRegistry>,
    #[account(mut)] pub authority: Signer<'info>,
    pub system_program: Program<'info, System>,
}

pub fn initialize(ctx: Context<Initialize>, params: WarsParams) -> Result<()> {
    params.validate()?;

    let config = &mut ctx.accounts.config;
    config.authority                = ctx.accounts.authority.key();
    config.game_masters             = Vec::new();
    config.current_season_id        = 0;
    config.current_season_finalized = false;
    config.params                   = params;
    config.prize_distribution       = DEFAULT_PRIZE_DISTRIBUTION.to_vec();
    config.pending_authority        = None;
    config.authority_transfer_at    = 0;
    config.bump                     = ctx.bumps.config;

    let registry = &mut ctx.accounts.stake_registry;
    registry.bump = ctx.bumps.stake_registry;

    msg!("House Wars initialized, authority {}", config.authority);
    emit!(ConfigInitialized { authority: config.authority });
    Ok(())
}
