use anchor_lang::prelude::*;

use crate::constants::{NORMAL_COMMISSION_BPS, VIP_COMMISSION_BPS};
use crate::state::{FixtureSnapshot, Listing};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum PassTier {
    Normal,
    Vip,
}

impl PassTier {
    pub fn commission_bps(&self) -> u16 {
        match self {
            PassTier::Normal => NORMAL_COMMISSION_BPS,
            PassTier::Vip => VIP_COMMISSION_BPS,
        }
    }
}

impl Default for PassTier {
    fn default() -> Self {
        PassTier::Normal
    }
}

#[account]
pub struct Ticket {
    pub owner: Pubkey,                 // 32 bytes - current holder
    pub fixture: Pubkey,               // 32 bytes - fixture PDA
    pub serial: u32,                   // 4 bytes - issue number within fixture
    pub snapshot: FixtureSnapshot,     // 296 bytes - frozen at primary purchase
    pub face_value: u64,               // 8 bytes - original price in lamports
    pub tier: PassTier,                // 1 byte
    pub purchased_at: i64,             // 8 bytes - Unix timestamp
    pub transfer_count: u32,           // 4 bytes - completed resales
    pub identity_commitment: [u8; 32], // 32 bytes - opaque digest from the verifier
    pub bump: u8,                      // 1 byte
}

impl Ticket {
    pub const SIZE: usize = 32 + 32 + 4 + FixtureSnapshot::SIZE + 8 + 1 + 8 + 4 + 32 + 1;

    /// Primary issue: snapshot taken from the live fixture, tier starts at
    /// Normal, no transfer history.
    pub fn issued(
        owner: Pubkey,
        fixture: Pubkey,
        serial: u32,
        snapshot: FixtureSnapshot,
        face_value: u64,
        identity_commitment: [u8; 32],
        purchased_at: i64,
        bump: u8,
    ) -> Self {
        Self {
            owner,
            fixture,
            serial,
            snapshot,
            face_value,
            tier: PassTier::Normal,
            purchased_at,
            transfer_count: 0,
            identity_commitment,
            bump,
        }
    }

    /// Resale completion: the buyer's ticket inherits the listing's snapshot
    /// and provenance under a fresh address, bound to the buyer's identity.
    pub fn reissued_to(
        buyer: Pubkey,
        listing: &Listing,
        identity_commitment: [u8; 32],
        purchased_at: i64,
        bump: u8,
    ) -> Self {
        Self {
            owner: buyer,
            fixture: listing.fixture,
            serial: listing.serial,
            snapshot: listing.snapshot,
            face_value: listing.original_price,
            tier: listing.tier,
            purchased_at,
            transfer_count: listing.transfer_count + 1,
            identity_commitment,
            bump,
        }
    }
}

/// Binds one identity commitment to one live ticket per fixture. Created
/// alongside the ticket, closed when the ticket leaves the holder's hands.
/// The commitment itself is never interpreted on-chain.
#[account]
pub struct IdentityTag {
    pub fixture: Pubkey,     // 32 bytes
    pub commitment: [u8; 32], // 32 bytes
    pub ticket: Pubkey,      // 32 bytes - the bound ticket PDA
    pub bump: u8,            // 1 byte
}

impl IdentityTag {
    pub const SIZE: usize = 32 + 32 + 32 + 1;
}
