use anchor_lang::prelude::*;

use crate::auth::{MutationPolicy, Role};
use crate::constants::SEED_CONFIG;
use crate::events::{AuthorityTransferCancelled, AuthorityTransferProposed, AuthorityTransferred};
use crate::state::WarsConfig;
use super::AdminOnly;

#[derive(Accounts)]
pub struct ExecuteAuthorityTransfer<'info> {
    #[account(mut, seeds = [SEED_CONFIG], bump = config.bump)]
    pub config: Account<'info, WarsConfig>,
    /// The new authority must sign to accept the transfer
    pub new_authority: Signer<'info>,
}

pub fn propose_authority_transfer(ctx: Context<AdminOnly>, new_authority: Pubkey) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let config = &mut ctx.accounts.config;
    config.authorize(&ctx.accounts.authority.key(), Role::Admin)?;
    let unlocks_at = config.propose_authority(new_authority, now)?;

    emit!(AuthorityTransferProposed {
        current: config.authority,
        proposed: new_authority,
        unlocks_at,
    });
    Ok(())
}

pub fn cancel_authority_transfer(ctx: Context<AdminOnly>) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.authorize(&ctx.accounts.authority.key(), Role::Admin)?;
    config.cancel_authority_transfer()?;

    emit!(AuthorityTransferCancelled { authority: config.authority });
    Ok(())
}

pub fn execute_authority_transfer(ctx: Context<ExecuteAuthorityTransfer>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let new_authority = ctx.accounts.new_authority.key();
    let config = &mut ctx.accounts.config;
    let old_authority = config.accept_authority(&new_authority, now)?;

    msg!("Authority transferred: {} → {}", old_authority, new_authority);
    emit!(AuthorityTransferred { old_authority, new_authority });
    Ok(())
}
