use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::MatchdayError;
use crate::state::{CreateFixtureParams, Fixture, Tournament};
use crate::utils::validation::validate_fixture_params;
use crate::utils::{safe_add, string_to_bytes};

#[derive(Accounts)]
#[instruction(params: CreateFixtureParams)]
pub struct CreateFixture<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [TOURNAMENT_SEED],
        bump = tournament.bump,
        constraint = tournament.authority == authority.key() @ MatchdayError::Unauthorized,
    )]
    pub tournament: Account<'info, Tournament>,

    #[account(
        init,
        payer = authority,
        seeds = [
            FIXTURE_SEED,
            tournament.key().as_ref(),
            params.fixture_id.to_le_bytes().as_ref()
        ],
        bump,
        space = 8 + Fixture::SIZE,
    )]
    pub fixture: Account<'info, Fixture>,

    pub system_program: Program<'info, System>,
}

pub fn create_fixture(ctx: Context<CreateFixture>, params: CreateFixtureParams) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp;

    validate_fixture_params(&params, current_time)?;

    let fixture = &mut ctx.accounts.fixture;
    fixture.tournament = ctx.accounts.tournament.key();
    fixture.fixture_id = params.fixture_id;
    fixture.home_team = string_to_bytes(&params.home_team, MAX_TEAM_NAME)?
        .try_into()
        .map_err(|_| MatchdayError::TeamNameTooLong)?;
    fixture.away_team = string_to_bytes(&params.away_team, MAX_TEAM_NAME)?
        .try_into()
        .map_err(|_| MatchdayError::TeamNameTooLong)?;
    fixture.home_flag_uri = string_to_bytes(&params.home_flag_uri, MAX_FLAG_URI)?
        .try_into()
        .map_err(|_| MatchdayError::UriTooLong)?;
    fixture.away_flag_uri = string_to_bytes(&params.away_flag_uri, MAX_FLAG_URI)?
        .try_into()
        .map_err(|_| MatchdayError::UriTooLong)?;
    fixture.stadium = string_to_bytes(&params.stadium, MAX_STADIUM_NAME)?
        .try_into()
        .map_err(|_| MatchdayError::StadiumNameTooLong)?;
    fixture.round_label = string_to_bytes(&params.round_label, MAX_ROUND_LABEL)?
        .try_into()
        .map_err(|_| MatchdayError::RoundLabelTooLong)?;
    fixture.kickoff_at = params.kickoff_at;
    fixture.ticket_price = params.ticket_price;
    fixture.capacity = params.capacity;
    fixture.tickets_sold = 0;
    fixture.final_score = None;
    fixture.bump = ctx.bumps.fixture;

    let tournament = &mut ctx.accounts.tournament;
    tournament.total_fixtures = safe_add(tournament.total_fixtures, 1)?;

    emit!(FixtureCreated {
        tournament: tournament.key(),
        fixture: ctx.accounts.fixture.key(),
        fixture_id: params.fixture_id,
        kickoff_at: params.kickoff_at,
        ticket_price: params.ticket_price,
        capacity: params.capacity,
        timestamp: current_time,
    });

    msg!(
        "Fixture {} created: {} vs {}",
        params.fixture_id,
        params.home_team,
        params.away_team
    );

    Ok(())
}

#[event]
pub struct FixtureCreated {
    pub tournament: Pubkey,
    pub fixture: Pubkey,
    pub fixture_id: u64,
    pub kickoff_at: i64,
    pub ticket_price: u64,
    pub capacity: u32,
    pub timestamp: i64,
}
