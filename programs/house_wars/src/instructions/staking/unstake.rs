use anchor_lang::prelude::*;

use crate::constants::{SEED_POSITION, SEED_STAKER, SEED_STAKE_REGISTRY};
use crate::errors::WarsError;
use crate::events::StakeWithdrawn;
use crate::state::{close_position, StakePosition, StakeRegistry, StakerProfile};

#[derive(Accounts)]
#[instruction(position_id: u64)]
pub struct Unstake<'info> {
    #[account(mut)] pub staker: Signer<'info>,
    #[account(mut, seeds = [SEED_STAKE_REGISTRY], bump = stake_registry.bump)]
    pub stake_registry: Account<'info, StakeRegistry>,
    #[account(mut, seeds = [SEED_STAKER, staker.key().as_ref()], bump = profile.bump)]
    pub profile: Account<'info, StakerProfile>,
    /// Closing returns the escrowed stake plus rent to the staker.
    #[account(
        mut, close = staker,
        seeds = [SEED_POSITION, staker.key().as_ref(), position_id.to_le_bytes().as_ref()],
        bump = position.bump,
        constraint = position.owner == staker.key() @ WarsError::Unauthorized,
    )]
    pub position: Account<'info, StakePosition>,
}

pub fn unstake(ctx: Context<Unstake>, position_id: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let house_weighted_stake = close_position(
        &mut ctx.accounts.profile,
        &ctx.accounts.position,
        &mut ctx.accounts.stake_registry,
        now,
    )?;

    let position = &ctx.accounts.position;
    emit!(StakeWithdrawn {
        staker: position.owner,
        house_id: position.house_id,
        position_id,
        amount: position.amount,
        house_weighted_stake,
    });
    Ok(())
}
