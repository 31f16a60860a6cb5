use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::MatchdayError;
use crate::state::CreateFixtureParams;
use crate::utils::validate_string;

pub fn validate_fixture_params(params: &CreateFixtureParams, current_time: i64) -> Result<()> {
    require!(
        !params.home_team.is_empty() && !params.away_team.is_empty(),
        MatchdayError::TeamNameEmpty
    );
    require!(
        params.home_team.len() <= MAX_TEAM_NAME && params.away_team.len() <= MAX_TEAM_NAME,
        MatchdayError::TeamNameTooLong
    );
    require!(
        params.stadium.len() <= MAX_STADIUM_NAME,
        MatchdayError::StadiumNameTooLong
    );
    require!(
        params.round_label.len() <= MAX_ROUND_LABEL,
        MatchdayError::RoundLabelTooLong
    );
    require!(
        params.home_flag_uri.len() <= MAX_FLAG_URI && params.away_flag_uri.len() <= MAX_FLAG_URI,
        MatchdayError::UriTooLong
    );

    validate_string(&params.home_team)?;
    validate_string(&params.away_team)?;
    validate_string(&params.stadium)?;
    validate_string(&params.round_label)?;

    require!(
        params.kickoff_at > current_time,
        MatchdayError::KickoffInPast
    );

    validate_price_bounds(params.ticket_price)?;
    validate_capacity(params.capacity)?;

    Ok(())
}

pub fn validate_price_bounds(price: u64) -> Result<()> {
    require!(price >= MIN_TICKET_PRICE, MatchdayError::PriceTooLow);
    require!(price <= MAX_TICKET_PRICE, MatchdayError::PriceTooHigh);
    Ok(())
}

pub fn validate_capacity(capacity: u32) -> Result<()> {
    require!(
        capacity > 0 && capacity <= MAX_FIXTURE_CAPACITY,
        MatchdayError::InvalidCapacity
    );
    Ok(())
}
