use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::MatchdayError;
use crate::state::{IdentityTag, Listing, PassTier, Ticket, Tournament};
use crate::utils::pricing::classify_resale;
use crate::utils::reentrancy::ReentrancyGuard;
use crate::utils::safe_add;

#[derive(Accounts)]
pub struct ListTicket<'info> {
    #[account(mut)]
    pub seller: Signer<'info>,

    #[account(
        mut,
        seeds = [TOURNAMENT_SEED],
        bump = tournament.bump,
        constraint = !tournament.paused @ MatchdayError::TournamentPaused,
    )]
    pub tournament: Account<'info, Tournament>,

    #[account(
        mut,
        close = seller,
        seeds = [TICKET_SEED, ticket.fixture.as_ref(), seller.key().as_ref()],
        bump = ticket.bump,
        constraint = ticket.owner == seller.key() @ MatchdayError::NotTicketOwner,
    )]
    pub ticket: Account<'info, Ticket>,

    #[account(
        mut,
        close = seller,
        seeds = [IDENTITY_SEED, ticket.fixture.as_ref(), ticket.identity_commitment.as_ref()],
        bump = identity_tag.bump,
    )]
    pub identity_tag: Account<'info, IdentityTag>,

    #[account(
        init,
        payer = seller,
        seeds = [LISTING_SEED, seller.key().as_ref(), ticket.key().as_ref()],
        bump,
        space = 8 + Listing::SIZE,
    )]
    pub listing: Account<'info, Listing>,

    #[account(
        init,
        payer = seller,
        seeds = [REENTRANCY_SEED, listing.key().as_ref()],
        bump,
        space = 8 + ReentrancyGuard::INIT_SPACE,
    )]
    pub reentrancy_guard: Account<'info, ReentrancyGuard>,

    pub system_program: Program<'info, System>,
}

pub fn list_ticket(
    ctx: Context<ListTicket>,
    asking_price: u64,
    requested_tier: PassTier,
) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp;
    let ticket = &ctx.accounts.ticket;

    // Lock state is computed from the ticket's own snapshot; a missing or
    // closed fixture account must never unlock a resale
    require!(
        !ticket.snapshot.is_resale_locked(current_time),
        MatchdayError::ResaleWindowClosed
    );

    let pricing = classify_resale(asking_price, ticket.face_value, requested_tier)?;

    let ticket_key = ctx.accounts.ticket.key();
    let listing_key = ctx.accounts.listing.key();
    let seller_key = ctx.accounts.seller.key();
    let fixture_key = ticket.fixture;
    let listing_bump = ctx.bumps.listing;

    let listing = Listing::from_ticket(
        &ctx.accounts.ticket,
        ticket_key,
        &pricing,
        asking_price,
        current_time,
        listing_bump,
    );
    ctx.accounts.listing.set_inner(listing);

    let reentrancy_guard = &mut ctx.accounts.reentrancy_guard;
    reentrancy_guard.is_locked = false;
    reentrancy_guard.bump = ctx.bumps.reentrancy_guard;

    let tournament = &mut ctx.accounts.tournament;
    tournament.total_listings = safe_add(tournament.total_listings, 1)?;

    emit!(TicketListed {
        seller: seller_key,
        fixture: fixture_key,
        listing: listing_key,
        ticket: ticket_key,
        asking_price,
        tier: pricing.tier,
        buyer_total: pricing.buyer_total,
        timestamp: current_time,
    });

    msg!(
        "Ticket listed at {} ({:?} tier, buyer pays {})",
        asking_price,
        pricing.tier,
        pricing.buyer_total
    );

    Ok(())
}

#[event]
pub struct TicketListed {
    pub seller: Pubkey,
    pub fixture: Pubkey,
    pub listing: Pubkey,
    pub ticket: Pubkey,
    pub asking_price: u64,
    pub tier: PassTier,
    pub buyer_total: u64,
    pub timestamp: i64,
}
