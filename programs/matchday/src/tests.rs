use anchor_lang::prelude::*;

use crate::state::{FixtureSnapshot, Listing, PassTier, Ticket};
use crate::utils::pricing::{classify_resale, total_with_commission};
use crate::utils::reentrancy::ReentrancyGuard;
use crate::utils::window::{has_kicked_off, is_resale_locked};

const HOUR: i64 = 3600;
const NOW: i64 = 1_700_000_000;

fn snapshot_at(kickoff_at: i64) -> FixtureSnapshot {
    FixtureSnapshot {
        kickoff_at,
        ..Default::default()
    }
}

fn ticket_for(owner: Pubkey, kickoff_at: i64, face_value: u64) -> Ticket {
    Ticket::issued(
        owner,
        Pubkey::new_unique(),
        42,
        snapshot_at(kickoff_at),
        face_value,
        [7u8; 32],
        NOW - 14 * 24 * HOUR,
        255,
    )
}

#[test]
fn test_normal_markup_stays_normal_tier() {
    // 260 / 250 = 1.04 markup
    let pricing = classify_resale(260, 250, PassTier::Normal).unwrap();
    assert_eq!(pricing.tier, PassTier::Normal);
    assert_eq!(pricing.commission_bps, 500);
    assert_eq!(pricing.buyer_total, 273); // round(260 * 1.05)
    assert_eq!(pricing.commission, 13);
}

#[test]
fn test_high_markup_forces_vip_tier() {
    // 270 / 250 = 1.08 markup, above the 1.05 threshold
    let pricing = classify_resale(270, 250, PassTier::Normal).unwrap();
    assert_eq!(pricing.tier, PassTier::Vip);
    assert_eq!(pricing.commission_bps, 1000);
    assert_eq!(pricing.buyer_total, 297); // round(270 * 1.10)
    assert_eq!(pricing.commission, 27);
}

#[test]
fn test_ceiling_rejects_listing() {
    // 280 / 250 = 1.12 markup, no tier may charge this
    assert!(classify_resale(280, 250, PassTier::Normal).is_err());
    assert!(classify_resale(280, 250, PassTier::Vip).is_err());
    assert!(classify_resale(276, 250, PassTier::Vip).is_err());
}

#[test]
fn test_exact_ceiling_is_allowed() {
    // 275 / 250 = 1.10 exactly
    let pricing = classify_resale(275, 250, PassTier::Normal).unwrap();
    assert_eq!(pricing.tier, PassTier::Vip);
    assert_eq!(pricing.buyer_total, 303);
}

#[test]
fn test_explicit_vip_request_honored_below_threshold() {
    // No markup at all, but the seller asked for VIP
    let pricing = classify_resale(250, 250, PassTier::Vip).unwrap();
    assert_eq!(pricing.tier, PassTier::Vip);
    assert_eq!(pricing.commission_bps, 1000);
    assert_eq!(pricing.buyer_total, 275);
}

#[test]
fn test_threshold_markup_is_not_forced() {
    // 210 / 200 = 1.05 exactly; only exceeding the threshold forces VIP
    let pricing = classify_resale(210, 200, PassTier::Normal).unwrap();
    assert_eq!(pricing.tier, PassTier::Normal);
    assert_eq!(pricing.buyer_total, 221); // round(220.5)
}

#[test]
fn test_zero_prices_rejected() {
    assert!(classify_resale(0, 250, PassTier::Normal).is_err());
    assert!(classify_resale(260, 0, PassTier::Normal).is_err());
}

#[test]
fn test_buyer_total_never_below_asking() {
    for price in [1u64, 30, 99, 250, 999_983] {
        for tier in [PassTier::Normal, PassTier::Vip] {
            let total = total_with_commission(price, tier.commission_bps()).unwrap();
            assert!(total >= price);
        }
    }
}

#[test]
fn test_commission_rounds_to_nearest() {
    assert_eq!(total_with_commission(210, 500).unwrap(), 221); // 220.5 up
    assert_eq!(total_with_commission(99, 500).unwrap(), 104); // 103.95 up
    assert_eq!(total_with_commission(30, 500).unwrap(), 32); // 31.5 up
    assert_eq!(total_with_commission(260, 500).unwrap(), 273); // 273.0 exact
}

#[test]
fn test_lock_closes_24h_before_kickoff() {
    assert!(is_resale_locked(NOW + 23 * HOUR, NOW));
    assert!(!is_resale_locked(NOW + 25 * HOUR, NOW));
    // the boundary itself is still open
    assert!(!is_resale_locked(NOW + 24 * HOUR, NOW));
}

#[test]
fn test_lock_is_monotonic() {
    let kickoff = NOW + 30 * HOUR;
    let mut was_locked = false;
    for h in 0..40 {
        let locked = is_resale_locked(kickoff, NOW + h * HOUR);
        if was_locked {
            assert!(locked);
        }
        was_locked = locked;
    }
    assert!(was_locked);
}

#[test]
fn test_played_match_is_locked_and_kicked_off() {
    let kickoff = NOW - 2 * HOUR;
    assert!(is_resale_locked(kickoff, NOW));
    assert!(has_kicked_off(kickoff, NOW));
}

#[test]
fn test_locked_does_not_imply_kicked_off() {
    let kickoff = NOW + 10 * HOUR;
    assert!(is_resale_locked(kickoff, NOW));
    assert!(!has_kicked_off(kickoff, NOW));
}

#[test]
fn test_unset_kickoff_fails_safe() {
    // an unknown kickoff locks the resale instead of freeing it
    assert!(is_resale_locked(0, NOW));
    assert!(is_resale_locked(-1, NOW));
    assert!(has_kicked_off(0, NOW));
}

#[test]
fn test_listing_carries_ticket_snapshot() {
    let seller = Pubkey::new_unique();
    let ticket = ticket_for(seller, NOW + 48 * HOUR, 250);
    let ticket_key = Pubkey::new_unique();

    let pricing = classify_resale(260, ticket.face_value, PassTier::Normal).unwrap();
    let listing = Listing::from_ticket(&ticket, ticket_key, &pricing, 260, NOW, 254);

    assert_eq!(listing.seller, seller);
    assert_eq!(listing.fixture, ticket.fixture);
    assert_eq!(listing.ticket, ticket_key);
    assert_eq!(listing.serial, ticket.serial);
    assert_eq!(listing.snapshot, ticket.snapshot);
    assert_eq!(listing.asking_price, 260);
    assert_eq!(listing.original_price, 250);
    assert_eq!(listing.tier, PassTier::Normal);
    assert_eq!(listing.buyer_total, 273);
    assert_eq!(listing.transfer_count, 0);
}

#[test]
fn test_sale_reissues_ticket_to_buyer() {
    let seller = Pubkey::new_unique();
    let buyer = Pubkey::new_unique();
    let ticket = ticket_for(seller, NOW + 48 * HOUR, 250);

    let pricing = classify_resale(270, ticket.face_value, PassTier::Normal).unwrap();
    let listing = Listing::from_ticket(&ticket, Pubkey::new_unique(), &pricing, 270, NOW, 254);

    let reissued = Ticket::reissued_to(buyer, &listing, [9u8; 32], NOW + HOUR, 251);

    assert_eq!(reissued.owner, buyer);
    assert_eq!(reissued.fixture, ticket.fixture);
    assert_eq!(reissued.serial, ticket.serial);
    assert_eq!(reissued.snapshot, ticket.snapshot);
    assert_eq!(reissued.face_value, 250);
    assert_eq!(reissued.tier, PassTier::Vip); // forced at listing time
    assert_eq!(reissued.transfer_count, 1);
    assert_eq!(reissued.identity_commitment, [9u8; 32]);
}

#[test]
fn test_seller_cannot_see_own_listing() {
    let seller = Pubkey::new_unique();
    let other = Pubkey::new_unique();
    let ticket = ticket_for(seller, NOW + 48 * HOUR, 250);

    let pricing = classify_resale(250, ticket.face_value, PassTier::Normal).unwrap();
    let listing = Listing::from_ticket(&ticket, Pubkey::new_unique(), &pricing, 250, NOW, 254);

    assert!(!listing.is_visible_to(&seller));
    assert!(listing.is_visible_to(&other));
}

#[test]
fn test_listing_lock_follows_snapshot() {
    let seller = Pubkey::new_unique();
    let ticket = ticket_for(seller, NOW + 48 * HOUR, 250);

    let pricing = classify_resale(250, ticket.face_value, PassTier::Normal).unwrap();
    let listing = Listing::from_ticket(&ticket, Pubkey::new_unique(), &pricing, 250, NOW, 254);

    assert!(!listing.is_resale_locked(NOW));
    assert!(listing.is_resale_locked(NOW + 25 * HOUR));
    assert!(listing.has_kicked_off(NOW + 49 * HOUR));
}

#[test]
fn test_reentrancy_guard() {
    let mut guard = ReentrancyGuard {
        is_locked: false,
        bump: 255,
    };

    assert!(guard.lock().is_ok());
    assert!(guard.is_locked);

    // Double lock fails
    assert!(guard.lock().is_err());

    assert!(guard.unlock().is_ok());
    assert!(!guard.is_locked);
}
