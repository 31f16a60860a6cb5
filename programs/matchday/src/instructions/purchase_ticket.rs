use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::MatchdayError;
use crate::state::{Fixture, IdentityTag, Ticket, Tournament};
use crate::utils::safe_add;

#[derive(Accounts)]
#[instruction(identity_commitment: [u8; 32])]
pub struct PurchaseTicket<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(
        mut,
        seeds = [TOURNAMENT_SEED],
        bump = tournament.bump,
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

    /// CHECK: Tournament treasury receives the face value
    #[account(
        mut,
        constraint = treasury.key() == tournament.treasury @ MatchdayError::InvalidTreasury
    )]
    pub treasury: UncheckedAccount<'info>,

    #[account(
        init,
        payer = buyer,
        seeds = [TICKET_SEED, fixture.key().as_ref(), buyer.key().as_ref()],
        bump,
        space = 8 + Ticket::SIZE,
    )]
    pub ticket: Account<'info, Ticket>,

    #[account(
        init,
        payer = buyer,
        seeds = [IDENTITY_SEED, fixture.key().as_ref(), identity_commitment.as_ref()],
        bump,
        space = 8 + IdentityTag::SIZE,
    )]
    pub identity_tag: Account<'info, IdentityTag>,

    pub system_program: Program<'info, System>,
}

pub fn purchase_ticket(
    ctx: Context<PurchaseTicket>,
    identity_commitment: [u8; 32],
) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp;
    let fixture = &ctx.accounts.fixture;

    // Primary sales close at kickoff
    require!(
        current_time < fixture.kickoff_at,
        MatchdayError::MatchAlreadyPlayed
    );
    require!(!fixture.is_sold_out(), MatchdayError::SoldOut);

    let face_value = fixture.ticket_price;
    let serial = fixture
        .tickets_sold
        .checked_add(1)
        .ok_or(MatchdayError::MathOverflow)?;
    let snapshot = fixture.snapshot();

    // Face value goes to the tournament treasury
    anchor_lang::system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            anchor_lang::system_program::Transfer {
                from: ctx.accounts.buyer.to_account_info(),
                to: ctx.accounts.treasury.to_account_info(),
            },
        ),
        face_value,
    )?;

    // Capture keys before mutable borrows
    let fixture_key = ctx.accounts.fixture.key();
    let ticket_key = ctx.accounts.ticket.key();
    let buyer_key = ctx.accounts.buyer.key();
    let ticket_bump = ctx.bumps.ticket;

    ctx.accounts.ticket.set_inner(Ticket::issued(
        buyer_key,
        fixture_key,
        serial,
        snapshot,
        face_value,
        identity_commitment,
        current_time,
        ticket_bump,
    ));

    let identity_tag = &mut ctx.accounts.identity_tag;
    identity_tag.fixture = fixture_key;
    identity_tag.commitment = identity_commitment;
    identity_tag.ticket = ticket_key;
    identity_tag.bump = ctx.bumps.identity_tag;

    let fixture = &mut ctx.accounts.fixture;
    fixture.tickets_sold = serial;

    let tournament = &mut ctx.accounts.tournament;
    tournament.total_tickets_sold = safe_add(tournament.total_tickets_sold, 1)?;

    emit!(TicketIssued {
        buyer: buyer_key,
        fixture: fixture_key,
        ticket: ticket_key,
        serial,
        face_value,
        timestamp: current_time,
    });

    msg!("Ticket #{} issued at face value {}", serial, face_value);

    Ok(())
}

#[event]
pub struct TicketIssued {
    pub buyer: Pubkey,
    pub fixture: Pubkey,
    pub ticket: Pubkey,
    pub serial: u32,
    pub face_value: u64,
    pub timestamp: i64,
}
