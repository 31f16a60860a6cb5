use anchor_lang::prelude::*;

use crate::constants::{FIXTURE_SEED, TOURNAMENT_SEED};
use crate::errors::MatchdayError;
use crate::state::{Fixture, ScoreLine, Tournament};

#[derive(Accounts)]
pub struct RecordResult<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [TOURNAMENT_SEED],
        bump = tournament.bump,
        constraint = tournament.authority == authority.key() @ MatchdayError::Unauthorized,
    )]
    pub tournament: Account<'info, Tournament>,

    #[account(
        mut,
        seeds = [
            FIXTURE_SEED,
            tournament.key().as_ref(),
            fixture.fixture_id.to_le_bytes().as_ref()
        ],
        bump = fixture.bump,
    )]
    pub fixture: Account<'info, Fixture>,
}

pub fn record_result(ctx: Context<RecordResult>, home_goals: u8, away_goals: u8) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp;
    let fixture = &mut ctx.accounts.fixture;

    require!(
        fixture.has_kicked_off(current_time),
        MatchdayError::MatchNotStarted
    );
    require!(
        fixture.final_score.is_none(),
        MatchdayError::ResultAlreadyRecorded
    );

    fixture.final_score = Some(ScoreLine {
        home: home_goals,
        away: away_goals,
    });

    emit!(ResultRecorded {
        fixture: fixture.key(),
        fixture_id: fixture.fixture_id,
        home_goals,
        away_goals,
        timestamp: current_time,
    });

    msg!("Final score recorded: {} - {}", home_goals, away_goals);

    Ok(())
}

#[event]
pub struct ResultRecorded {
    pub fixture: Pubkey,
    pub fixture_id: u64,
    pub home_goals: u8,
    pub away_goals: u8,
    pub timestamp: i64,
}
