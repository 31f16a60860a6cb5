use anchor_lang::prelude::*;

use crate::state::{
    CreateFixtureParams, Fixture, FixtureSnapshot, IdentityTag, Listing, PassTier, ScoreLine,
    Ticket, Tournament,
};
use crate::utils::validation::{validate_capacity, validate_fixture_params, validate_price_bounds};
use crate::utils::{bytes_to_string, safe_add, safe_div, safe_mul, string_to_bytes};

fn fixture_params() -> CreateFixtureParams {
    CreateFixtureParams {
        fixture_id: 3,
        home_team: "Morocco".to_string(),
        away_team: "Nigeria".to_string(),
        home_flag_uri: "https://flagcdn.com/ma.svg".to_string(),
        away_flag_uri: "https://flagcdn.com/ng.svg".to_string(),
        stadium: "Stade de Marrakech".to_string(),
        round_label: "The Final".to_string(),
        kickoff_at: 2_000_000,
        ticket_price: 500_000_000,
        capacity: 45_000,
    }
}

fn fixture_from(params: &CreateFixtureParams) -> Fixture {
    Fixture {
        tournament: Pubkey::new_unique(),
        fixture_id: params.fixture_id,
        home_team: string_to_bytes(&params.home_team, 32).unwrap().try_into().unwrap(),
        away_team: string_to_bytes(&params.away_team, 32).unwrap().try_into().unwrap(),
        home_flag_uri: string_to_bytes(&params.home_flag_uri, 64).unwrap().try_into().unwrap(),
        away_flag_uri: string_to_bytes(&params.away_flag_uri, 64).unwrap().try_into().unwrap(),
        stadium: string_to_bytes(&params.stadium, 64).unwrap().try_into().unwrap(),
        round_label: string_to_bytes(&params.round_label, 32).unwrap().try_into().unwrap(),
        kickoff_at: params.kickoff_at,
        ticket_price: params.ticket_price,
        capacity: params.capacity,
        tickets_sold: 0,
        final_score: None,
        bump: 255,
    }
}

#[test]
fn test_tournament_size() {
    assert_eq!(Tournament::SIZE, 106);
}

#[test]
fn test_fixture_size() {
    assert_eq!(FixtureSnapshot::SIZE, 296);
    assert_eq!(Fixture::SIZE, 356);
}

#[test]
fn test_ticket_size() {
    assert_eq!(Ticket::SIZE, 418);
    assert_eq!(IdentityTag::SIZE, 97);
}

#[test]
fn test_listing_size() {
    assert_eq!(Listing::SIZE, 434);
}

#[test]
fn test_string_conversions() {
    let input = "Stade de Marrakech";
    let bytes = string_to_bytes(input, 64).unwrap();
    assert_eq!(bytes.len(), 64);
    assert_eq!(bytes_to_string(&bytes), input);

    // Padding
    let short = string_to_bytes("Mali", 32).unwrap();
    assert_eq!(short.len(), 32);
    assert_eq!(short[4], 0);

    // Too long for the field
    assert!(string_to_bytes(&"A".repeat(33), 32).is_err());
}

#[test]
fn test_snapshot_freezes_fixture_fields() {
    let params = fixture_params();
    let fixture = fixture_from(&params);
    let snapshot = fixture.snapshot();

    assert_eq!(bytes_to_string(&snapshot.home_team), "Morocco");
    assert_eq!(bytes_to_string(&snapshot.away_team), "Nigeria");
    assert_eq!(bytes_to_string(&snapshot.stadium), "Stade de Marrakech");
    assert_eq!(bytes_to_string(&snapshot.round_label), "The Final");
    assert_eq!(snapshot.kickoff_at, params.kickoff_at);
}

#[test]
fn test_fixture_sell_out() {
    let mut fixture = fixture_from(&fixture_params());
    assert!(!fixture.is_sold_out());
    fixture.tickets_sold = fixture.capacity;
    assert!(fixture.is_sold_out());
}

#[test]
fn test_final_score_is_optional() {
    let mut fixture = fixture_from(&fixture_params());
    assert!(fixture.final_score.is_none());
    fixture.final_score = Some(ScoreLine { home: 2, away: 1 });
    assert_eq!(fixture.final_score.unwrap().home, 2);
}

#[test]
fn test_tier_commission_rates() {
    assert_eq!(PassTier::Normal.commission_bps(), 500);
    assert_eq!(PassTier::Vip.commission_bps(), 1000);
    assert_eq!(PassTier::default(), PassTier::Normal);
}

#[test]
fn test_fixture_validation() {
    let current_time = 1_000_000;

    assert!(validate_fixture_params(&fixture_params(), current_time).is_ok());

    // Kickoff must be in the future
    let mut past = fixture_params();
    past.kickoff_at = current_time - 3600;
    assert!(validate_fixture_params(&past, current_time).is_err());

    // Team names must be present
    let mut unnamed = fixture_params();
    unnamed.home_team = String::new();
    assert!(validate_fixture_params(&unnamed, current_time).is_err());

    // Oversized stadium name
    let mut oversized = fixture_params();
    oversized.stadium = "S".repeat(65);
    assert!(validate_fixture_params(&oversized, current_time).is_err());

    // Price and capacity bounds
    assert!(validate_price_bounds(100_000).is_ok());
    assert!(validate_price_bounds(50_000).is_err());
    assert!(validate_price_bounds(2_000_000_000_000).is_err());
    assert!(validate_capacity(1).is_ok());
    assert!(validate_capacity(0).is_err());
    assert!(validate_capacity(200_001).is_err());
}

#[test]
fn test_math_overflow_protection() {
    assert!(safe_add(u64::MAX, 1).is_err());
    assert_eq!(safe_add(100, 200).unwrap(), 300);

    assert!(safe_mul(u64::MAX, 2).is_err());
    assert_eq!(safe_mul(100, 200).unwrap(), 20_000);

    assert!(safe_div(100, 0).is_err());
    assert_eq!(safe_div(100, 5).unwrap(), 20);
}
