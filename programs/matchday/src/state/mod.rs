use anchor_lang::prelude::*;

pub mod fixture;
pub mod listing;
pub mod ticket;
pub mod tournament;

#[cfg(test)]
mod tests;

pub use fixture::*;
pub use listing::*;
pub use ticket::*;
pub use tournament::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct CreateFixtureParams {
    pub fixture_id: u64,
    pub home_team: String,
    pub away_team: String,
    pub home_flag_uri: String,
    pub away_flag_uri: String,
    pub stadium: String,
    pub round_label: String,
    pub kickoff_at: i64,
    pub ticket_price: u64,
    pub capacity: u32,
}
