// Seeds
pub const TOURNAMENT_SEED: &[u8] = b"tournament";
pub const FIXTURE_SEED: &[u8] = b"fixture";
pub const TICKET_SEED: &[u8] = b"ticket";
pub const LISTING_SEED: &[u8] = b"listing";
pub const IDENTITY_SEED: &[u8] = b"identity";
pub const REENTRANCY_SEED: &[u8] = b"reentrancy";

// Financial constants
pub const BPS_DENOMINATOR: u64 = 10_000;
pub const NORMAL_COMMISSION_BPS: u16 = 500;            // 5% buyer commission
pub const VIP_COMMISSION_BPS: u16 = 1000;              // 10% buyer commission
pub const NORMAL_MARKUP_CAP_BPS: u64 = 10_500;         // above 105% of face, tier is forced to VIP
pub const RESALE_PRICE_CAP_BPS: u64 = 11_000;          // 110% max markup, any tier
pub const MIN_TICKET_PRICE: u64 = 100_000;             // 0.0001 SOL
pub const MAX_TICKET_PRICE: u64 = 1_000_000_000_000;   // 1000 SOL

// Resale window: no listing or purchase inside 24h of kickoff
pub const RESALE_LOCK_SECONDS: i64 = 86_400;

// Field limits
pub const MAX_TEAM_NAME: usize = 32;
pub const MAX_STADIUM_NAME: usize = 64;
pub const MAX_ROUND_LABEL: usize = 32;
pub const MAX_FLAG_URI: usize = 64;
pub const MAX_FIXTURE_CAPACITY: u32 = 200_000;
