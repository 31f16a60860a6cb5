use anchor_lang::prelude::*;

use crate::constants::{BPS_DENOMINATOR, NORMAL_MARKUP_CAP_BPS, RESALE_PRICE_CAP_BPS};
use crate::errors::MatchdayError;
use crate::state::PassTier;
use crate::utils::{safe_add, safe_div, safe_mul, safe_sub};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PricingBreakdown {
    pub tier: PassTier,
    pub commission_bps: u16,
    pub commission: u64,
    pub buyer_total: u64,
}

/// Classify a resale request against the ticket's face value.
///
/// - above 110% of face: rejected outright, no tier may charge more
/// - above 105%: tier is forced to VIP at the 10% commission rate
/// - at or below 105%: the requested tier stands; an explicit VIP request
///   keeps the VIP rate even under the threshold
pub fn classify_resale(
    asking_price: u64,
    original_price: u64,
    requested_tier: PassTier,
) -> Result<PricingBreakdown> {
    require!(original_price > 0, MatchdayError::InvalidFacePrice);
    require!(asking_price > 0, MatchdayError::InvalidAskingPrice);

    let scaled_asking = safe_mul(asking_price, BPS_DENOMINATOR)?;
    require!(
        scaled_asking <= safe_mul(original_price, RESALE_PRICE_CAP_BPS)?,
        MatchdayError::PriceExceedsCeiling
    );

    let tier = if scaled_asking > safe_mul(original_price, NORMAL_MARKUP_CAP_BPS)? {
        PassTier::Vip
    } else {
        requested_tier
    };

    let commission_bps = tier.commission_bps();
    let buyer_total = total_with_commission(asking_price, commission_bps)?;
    let commission = safe_sub(buyer_total, asking_price)?;

    Ok(PricingBreakdown {
        tier,
        commission_bps,
        commission,
        buyer_total,
    })
}

/// Commission is additive on top of the asking price, rounded to the
/// nearest lamport (half up).
pub fn total_with_commission(price: u64, commission_bps: u16) -> Result<u64> {
    let gross = safe_mul(price, BPS_DENOMINATOR + commission_bps as u64)?;
    safe_div(safe_add(gross, BPS_DENOMINATOR / 2)?, BPS_DENOMINATOR)
}
