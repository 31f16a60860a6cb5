use anchor_lang::prelude::*;

use crate::constants::TOURNAMENT_SEED;
use crate::errors::MatchdayError;
use crate::state::Tournament;

#[derive(Accounts)]
pub struct InitializeTournament<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        seeds = [TOURNAMENT_SEED],
        bump,
        space = 8 + Tournament::SIZE,
    )]
    pub tournament: Account<'info, Tournament>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_tournament(ctx: Context<InitializeTournament>, treasury: Pubkey) -> Result<()> {
    require!(
        treasury != Pubkey::default(),
        MatchdayError::InvalidTreasury
    );

    let tournament = &mut ctx.accounts.tournament;
    tournament.authority = ctx.accounts.authority.key();
    tournament.treasury = treasury;
    tournament.paused = false;
    tournament.total_fixtures = 0;
    tournament.total_tickets_sold = 0;
    tournament.total_listings = 0;
    tournament.total_resales = 0;
    tournament.total_commission_collected = 0;
    tournament.bump = ctx.bumps.tournament;

    emit!(TournamentInitialized {
        authority: tournament.authority,
        treasury,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Tournament initialized");

    Ok(())
}

#[event]
pub struct TournamentInitialized {
    pub authority: Pubkey,
    pub treasury: Pubkey,
    pub timestamp: i64,
}
