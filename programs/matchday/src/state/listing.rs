use anchor_lang::prelude::*;

use crate::state::{FixtureSnapshot, PassTier, Ticket};
use crate::utils::pricing::PricingBreakdown;

#[account]
pub struct Listing {
    pub seller: Pubkey,            // 32 bytes - receives the asking price
    pub fixture: Pubkey,           // 32 bytes - fixture PDA (may no longer resolve)
    pub ticket: Pubkey,            // 32 bytes - closed ticket account, provenance + seed
    pub serial: u32,               // 4 bytes
    pub snapshot: FixtureSnapshot, // 296 bytes - carried over from the ticket
    pub asking_price: u64,         // 8 bytes
    pub original_price: u64,       // 8 bytes - face value the cap is measured against
    pub tier: PassTier,            // 1 byte - classification outcome
    pub buyer_total: u64,          // 8 bytes - asking price plus commission
    pub transfer_count: u32,       // 4 bytes - resales completed before this listing
    pub created_at: i64,           // 8 bytes - Unix timestamp
    pub bump: u8,                  // 1 byte
}

impl Listing {
    pub const SIZE: usize = 32 + 32 + 32 + 4 + FixtureSnapshot::SIZE + 8 + 8 + 1 + 8 + 4 + 8 + 1;

    /// A listing is built from the ticket it replaces; the snapshot moves
    /// with it so display and lock checks never depend on a live fixture.
    pub fn from_ticket(
        ticket: &Ticket,
        ticket_key: Pubkey,
        pricing: &PricingBreakdown,
        asking_price: u64,
        created_at: i64,
        bump: u8,
    ) -> Self {
        Self {
            seller: ticket.owner,
            fixture: ticket.fixture,
            ticket: ticket_key,
            serial: ticket.serial,
            snapshot: ticket.snapshot,
            asking_price,
            original_price: ticket.face_value,
            tier: pricing.tier,
            buyer_total: pricing.buyer_total,
            transfer_count: ticket.transfer_count,
            created_at,
            bump,
        }
    }

    /// Sellers never see their own listings in the buy view.
    pub fn is_visible_to(&self, viewer: &Pubkey) -> bool {
        self.seller != *viewer
    }

    pub fn is_resale_locked(&self, now: i64) -> bool {
        self.snapshot.is_resale_locked(now)
    }

    pub fn has_kicked_off(&self, now: i64) -> bool {
        self.snapshot.has_kicked_off(now)
    }
}
