use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::{CreateFixtureParams, PassTier};

declare_id!("3nGiarm7JUDKUsAUmefoH7QHzV65MFxdtbuBNTNTikof");

#[program]
pub mod matchday {
    use super::*;

    pub fn initialize_tournament(
        ctx: Context<InitializeTournament>,
        treasury: Pubkey,
    ) -> Result<()> {
        instructions::initialize_tournament::initialize_tournament(ctx, treasury)
    }

    pub fn set_paused(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
        instructions::set_paused::set_paused(ctx, paused)
    }

    pub fn create_fixture(
        ctx: Context<CreateFixture>,
        params: CreateFixtureParams,
    ) -> Result<()> {
        instructions::create_fixture::create_fixture(ctx, params)
    }

    pub fn record_result(
        ctx: Context<RecordResult>,
        home_goals: u8,
        away_goals: u8,
    ) -> Result<()> {
        instructions::record_result::record_result(ctx, home_goals, away_goals)
    }

    pub fn purchase_ticket(
        ctx: Context<PurchaseTicket>,
        identity_commitment: [u8; 32],
    ) -> Result<()> {
        instructions::purchase_ticket::purchase_ticket(ctx, identity_commitment)
    }

    pub fn list_ticket(
        ctx: Context<ListTicket>,
        asking_price: u64,
        requested_tier: PassTier,
    ) -> Result<()> {
        instructions::list_ticket::list_ticket(ctx, asking_price, requested_tier)
    }

    pub fn buy_listing(
        ctx: Context<BuyListing>,
        identity_commitment: [u8; 32],
    ) -> Result<()> {
        instructions::buy_listing::buy_listing(ctx, identity_commitment)
    }
}

#[cfg(test)]
mod tests;
