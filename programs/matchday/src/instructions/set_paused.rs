use anchor_lang::prelude::*;

use crate::constants::TOURNAMENT_SEED;
use crate::errors::MatchdayError;
use crate::state::Tournament;

#[derive(Accounts)]
pub struct SetPaused<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [TOURNAMENT_SEED],
        bump = tournament.bump,
        constraint = tournament.authority == authority.key() @ MatchdayError::Unauthorized,
    )]
    pub tournament: Account<'info, Tournament>,
}

pub fn set_paused(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
    let tournament = &mut ctx.accounts.tournament;
    tournament.paused = paused;

    msg!("Resale market paused: {}", paused);

    Ok(())
}
