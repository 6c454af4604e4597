use anchor_lang::prelude::*;
use anchor_lang::solana_program::program::invoke;
use anchor_lang::solana_program::system_instruction;

use crate::constants::{SEED_CONFIG, SEED_SEASON};
use crate::events::PrizePoolIncreased;
use crate::state::{Season, WarsConfig};

#[derive(Accounts)]
#[instruction(season_id: u64)]
pub struct AddToPrizePool<'info> {
    #[account(mut, seeds = [SEED_SEASON, season_id.to_le_bytes().as_ref()], bump = season.bump)]
    pub season: Account<'info, Season>,
    #[account(mut)] pub contributor: Signer<'info>,
    pub system_program: Program<'info, System>,
}

/// Plain value transfer into whatever season is current.
#[derive(Accounts)]
pub struct FundCurrentSeason<'info> {
    #[account(seeds = [SEED_CONFIG], bump = config.bump)]
    pub config: Account<'info, WarsConfig>,
    #[account(mut, seeds = [SEED_SEASON, config.current_season_id.to_le_bytes().as_ref()],
              bump = season.bump)]
    pub season: Account<'info, Season>,
    #[account(mut)] pub contributor: Signer<'info>,
    pub system_program: Program<'info, System>,
}

pub fn add_to_prize_pool(ctx: Context<AddToPrizePool>, _season_id: u64, amount: u64) -> Result<()> {
    escrow_contribution(
        &mut ctx.accounts.season,
        &ctx.accounts.contributor,
        &ctx.accounts.system_program,
        amount,
    )
}

pub fn fund_current_season(ctx: Context<FundCurrentSeason>, amount: u64) -> Result<()> {
    escrow_contribution(
        &mut ctx.accounts.season,
        &ctx.accounts.contributor,
        &ctx.accounts.system_program,
        amount,
    )
}

/// Credits the ledger first so a finalized season rejects the contribution
/// before any lamports move, then escrows the lamports in the season account.
fn escrow_contribution<'info>(
    season:         &mut Account<'info, Season>,
    contributor:    &Signer<'info>,
    system_program: &Program<'info, System>,
    amount:         u64,
) -> Result<()> {
    let new_total = season.add_to_prize_pool(amount)?;

    let ix = system_instruction::transfer(&contributor.key(), &season.key(), amount);
    invoke(&ix, &[
        contributor.to_account_info(),
        season.to_account_info(),
        system_program.to_account_info(),
    ])?;

    emit!(PrizePoolIncreased {
        season_id: season.season_id,
        amount,
        new_total,
        contributor: contributor.key(),
    });
    Ok(())
}
