use anchor_lang::prelude::*;
use anchor_lang::solana_program::program::invoke;
use anchor_lang::solana_program::system_instruction;

use crate::constants::{SEED_CONFIG, SEED_POSITION, SEED_STAKER, SEED_STAKE_REGISTRY};
use crate::events::HouseStaked;
use crate::state::{
    open_position, House, StakePosition, StakeRequest, StakeRegistry, StakerProfile, WarsConfig,
};

#[derive(Accounts)]
pub struct StakeForHouse<'info> {
    #[account(mut)] pub staker: Signer<'info>,
    #[account(seeds = [SEED_CONFIG], bump = config.bump)]
    pub config: Account<'info, WarsConfig>,
    #[account(mut, seeds = [SEED_STAKE_REGISTRY], bump = stake_registry.bump)]
    pub stake_registry: Account<'info, StakeRegistry>,
    #[account(init_if_needed, payer = staker, space = 8 + StakerProfile::LEN,
              seeds = [SEED_STAKER, staker.key().as_ref()], bump)]
    pub profile: Account<'info, StakerProfile>,
    /// Escrows the staked lamports until the position is withdrawn.
    #[account(init, payer = staker, space = 8 + StakePosition::LEN,
              seeds = [SEED_POSITION, staker.key().as_ref(), profile.next_position_id.to_le_bytes().as_ref()],
              bump)]
    pub position: Account<'info, StakePosition>,
    pub system_program: Program<'info, System>,
}

/// Opens a locked position backing `house_id`. The first stake fixes the
/// wallet's house for good.
pub fn stake_for_house(ctx: Context<StakeForHouse>, amount: u64, house_id: u8, lock_seconds: i64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let house = House::from_id(house_id)?;
    let staker = ctx.accounts.staker.key();
    let params = ctx.accounts.config.params;

    let house_weighted_stake = open_position(
        &mut ctx.accounts.profile,
        &mut ctx.accounts.position,
        &mut ctx.accounts.stake_registry,
        StakeRequest { owner: staker, house, amount, lock_seconds, now },
        params.min_lock,
        params.max_lock,
    )?;
    ctx.accounts.profile.bump = ctx.bumps.profile;
    ctx.accounts.position.bump = ctx.bumps.position;

    let ix = system_instruction::transfer(&staker, &ctx.accounts.position.key(), amount);
    invoke(&ix, &[
        ctx.accounts.staker.to_account_info(),
        ctx.accounts.position.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
    ])?;

    let position = &ctx.accounts.position;
    msg!("{} staked {} for {} until {}", staker, amount, house.name(), position.lock_expiry);
    emit!(HouseStaked {
        staker,
        house_id,
        position_id: position.position_id,
        amount,
        lock_seconds,
        lock_expiry: position.lock_expiry,
        weight: position.weight,
        house_weighted_stake,
    });
    Ok(())
}
