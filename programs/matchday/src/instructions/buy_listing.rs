use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::MatchdayError;
use crate::state::{IdentityTag, Listing, PassTier, Ticket, Tournament};
use crate::utils::pricing::classify_resale;
use crate::utils::reentrancy::ReentrancyGuard;
use crate::utils::safe_add;

#[derive(Accounts)]
#[instruction(identity_commitment: [u8; 32])]
pub struct BuyListing<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

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
        constraint = listing.seller == seller.key() @ MatchdayError::Unauthorized,
        constraint = listing.seller != buyer.key() @ MatchdayError::SelfPurchaseForbidden,
    )]
    pub listing: Account<'info, Listing>,

    /// CHECK: Seller receives the asking price and the listing rent
    #[account(mut)]
    pub seller: UncheckedAccount<'info>,

    /// CHECK: Tournament treasury receives the commission
    #[account(
        mut,
        constraint = treasury.key() == tournament.treasury @ MatchdayError::InvalidTreasury
    )]
    pub treasury: UncheckedAccount<'info>,

    #[account(
        init,
        payer = buyer,
        seeds = [TICKET_SEED, listing.fixture.as_ref(), buyer.key().as_ref()],
        bump,
        space = 8 + Ticket::SIZE,
    )]
    pub ticket: Account<'info, Ticket>,

    #[account(
        init,
        payer = buyer,
        seeds = [IDENTITY_SEED, listing.fixture.as_ref(), identity_commitment.as_ref()],
        bump,
        space = 8 + IdentityTag::SIZE,
    )]
    pub identity_tag: Account<'info, IdentityTag>,

    #[account(
        mut,
        close = seller,
        seeds = [REENTRANCY_SEED, listing.key().as_ref()],
        bump = reentrancy_guard.bump,
    )]
    pub reentrancy_guard: Account<'info, ReentrancyGuard>,

    pub system_program: Program<'info, System>,
}

pub fn buy_listing(ctx: Context<BuyListing>, identity_commitment: [u8; 32]) -> Result<()> {
    ctx.accounts.reentrancy_guard.lock()?;

    let current_time = Clock::get()?.unix_timestamp;
    let listing = &ctx.accounts.listing;

    // Both gates are recomputed from the listing's snapshot at the moment
    // of purchase; UI countdowns are never authoritative
    require!(
        !listing.has_kicked_off(current_time),
        MatchdayError::MatchAlreadyPlayed
    );
    require!(
        !listing.is_resale_locked(current_time),
        MatchdayError::ResaleWindowClosed
    );

    // Re-derive the breakdown rather than trusting the stored figure
    let pricing = classify_resale(listing.asking_price, listing.original_price, listing.tier)?;
    let asking_price = listing.asking_price;

    // Asking price to the seller
    anchor_lang::system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            anchor_lang::system_program::Transfer {
                from: ctx.accounts.buyer.to_account_info(),
                to: ctx.accounts.seller.to_account_info(),
            },
        ),
        asking_price,
    )?;

    // Commission to the tournament treasury
    if pricing.commission > 0 {
        anchor_lang::system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                anchor_lang::system_program::Transfer {
                    from: ctx.accounts.buyer.to_account_info(),
                    to: ctx.accounts.treasury.to_account_info(),
                },
            ),
            pricing.commission,
        )?;
    }

    // Capture keys before mutable borrows
    let buyer_key = ctx.accounts.buyer.key();
    let seller_key = ctx.accounts.listing.seller;
    let fixture_key = ctx.accounts.listing.fixture;
    let listing_key = ctx.accounts.listing.key();
    let ticket_key = ctx.accounts.ticket.key();
    let ticket_bump = ctx.bumps.ticket;

    let reissued = Ticket::reissued_to(
        buyer_key,
        &ctx.accounts.listing,
        identity_commitment,
        current_time,
        ticket_bump,
    );
    let tier = reissued.tier;
    ctx.accounts.ticket.set_inner(reissued);

    let identity_tag = &mut ctx.accounts.identity_tag;
    identity_tag.fixture = fixture_key;
    identity_tag.commitment = identity_commitment;
    identity_tag.ticket = ticket_key;
    identity_tag.bump = ctx.bumps.identity_tag;

    let tournament = &mut ctx.accounts.tournament;
    tournament.total_resales = safe_add(tournament.total_resales, 1)?;
    tournament.total_commission_collected =
        safe_add(tournament.total_commission_collected, pricing.commission)?;

    emit!(ListingSold {
        buyer: buyer_key,
        seller: seller_key,
        fixture: fixture_key,
        listing: listing_key,
        ticket: ticket_key,
        asking_price,
        commission: pricing.commission,
        buyer_total: pricing.buyer_total,
        tier,
        timestamp: current_time,
    });

    msg!(
        "Listing sold for {} plus {} commission",
        asking_price,
        pricing.commission
    );

    ctx.accounts.reentrancy_guard.unlock()?;

    Ok(())
}

#[event]
pub struct ListingSold {
    pub buyer: Pubkey,
    pub seller: Pubkey,
    pub fixture: Pubkey,
    pub listing: Pubkey,
    pub ticket: Pubkey,
    pub asking_price: u64,
    pub commission: u64,
    pub buyer_total: u64,
    pub tier: PassTier,
    pub timestamp: i64,
}
