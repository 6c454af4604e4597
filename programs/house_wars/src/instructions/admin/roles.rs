use anchor_lang::prelude::*;

use crate::auth::{MutationPolicy, Role};
use crate::events::{GameMasterGranted, GameMasterRevoked};
use super::AdminOnly;

pub fn grant_game_master(ctx: Context<AdminOnly>, game_master: Pubkey) -> Result<()> {
    let admin = ctx.accounts.authority.key();
    let config = &mut ctx.accounts.config;
    config.authorize(&admin, Role::Admin)?;
    config.grant_game_master(game_master)?;

    msg!("Game master granted: {}", game_master);
    emit!(GameMasterGranted { game_master, granted_by: admin });
    Ok(())
}

pub fn revoke_game_master(ctx: Context<AdminOnly>, game_master: Pubkey) -> Result<()> {
    let admin = ctx.accounts.authority.key();
    let config = &mut ctx.accounts.config;
    config.authorize(&admin, Role::Admin)?;
    config.revoke_game_master(&game_master)?;

    msg!("Game master revoked: {}", game_master);
    emit!(GameMasterRevoked { game_master, revoked_by: admin });
    Ok(())
}
