use anchor_lang::prelude::*;

use crate::utils::window::{has_kicked_off, is_resale_locked};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct ScoreLine {
    pub home: u8, // 1 byte
    pub away: u8, // 1 byte
}

impl ScoreLine {
    pub const SIZE: usize = 1 + 1;
}

/// Displayable fixture fields frozen into every ticket and listing at
/// creation. Tickets and listings stay renderable and lockable even if the
/// fixture account is later closed or unavailable.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct FixtureSnapshot {
    pub home_team: [u8; 32],     // 32 bytes
    pub away_team: [u8; 32],     // 32 bytes
    pub home_flag_uri: [u8; 64], // 64 bytes
    pub away_flag_uri: [u8; 64], // 64 bytes
    pub stadium: [u8; 64],       // 64 bytes
    pub round_label: [u8; 32],   // 32 bytes
    pub kickoff_at: i64,         // 8 bytes
}

impl FixtureSnapshot {
    pub const SIZE: usize = 32 + 32 + 64 + 64 + 64 + 32 + 8;

    pub fn is_resale_locked(&self, now: i64) -> bool {
        is_resale_locked(self.kickoff_at, now)
    }

    pub fn has_kicked_off(&self, now: i64) -> bool {
        has_kicked_off(self.kickoff_at, now)
    }
}

impl Default for FixtureSnapshot {
    fn default() -> Self {
        Self {
            home_team: [0u8; 32],
            away_team: [0u8; 32],
            home_flag_uri: [0u8; 64],
            away_flag_uri: [0u8; 64],
            stadium: [0u8; 64],
            round_label: [0u8; 32],
            kickoff_at: 0,
        }
    }
}

#[account]
pub struct Fixture {
    pub tournament: Pubkey,            // 32 bytes - parent tournament
    pub fixture_id: u64,               // 8 bytes - unique ID within tournament
    pub home_team: [u8; 32],           // 32 bytes
    pub away_team: [u8; 32],           // 32 bytes
    pub home_flag_uri: [u8; 64],       // 64 bytes
    pub away_flag_uri: [u8; 64],       // 64 bytes
    pub stadium: [u8; 64],             // 64 bytes
    pub round_label: [u8; 32],         // 32 bytes - e.g. "Semi-Final"
    pub kickoff_at: i64,               // 8 bytes - Unix timestamp
    pub ticket_price: u64,             // 8 bytes - face value in lamports
    pub capacity: u32,                 // 4 bytes
    pub tickets_sold: u32,             // 4 bytes
    pub final_score: Option<ScoreLine>, // 1 + 2 bytes - set once, after kickoff
    pub bump: u8,                      // 1 byte
}

impl Fixture {
    pub const SIZE: usize =
        32 + 8 + 32 + 32 + 64 + 64 + 64 + 32 + 8 + 8 + 4 + 4 + (1 + ScoreLine::SIZE) + 1;

    pub fn is_sold_out(&self) -> bool {
        self.tickets_sold >= self.capacity
    }

    pub fn has_kicked_off(&self, now: i64) -> bool {
        has_kicked_off(self.kickoff_at, now)
    }

    pub fn snapshot(&self) -> FixtureSnapshot {
        FixtureSnapshot {
            home_team: self.home_team,
            away_team: self.away_team,
            home_flag_uri: self.home_flag_uri,
            away_flag_uri: self.away_flag_uri,
            stadium: self.stadium,
            round_label: self.round_label,
            kickoff_at: self.kickoff_at,
        }
    }
}
