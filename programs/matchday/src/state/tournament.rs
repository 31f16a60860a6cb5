use anchor_lang::prelude::*;

#[account]
#[derive(Default)]
pub struct Tournament {
    pub authority: Pubkey,               // 32 bytes
    pub treasury: Pubkey,                // 32 bytes
    pub paused: bool,                    // 1 byte - resale kill-switch
    pub total_fixtures: u64,             // 8 bytes
    pub total_tickets_sold: u64,         // 8 bytes
    pub total_listings: u64,             // 8 bytes
    pub total_resales: u64,              // 8 bytes
    pub total_commission_collected: u64, // 8 bytes
    pub bump: u8,                        // 1 byte
}

impl Tournament {
    pub const SIZE: usize = 32 + 32 + 1 + 8 + 8 + 8 + 8 + 8 + 1;
}
