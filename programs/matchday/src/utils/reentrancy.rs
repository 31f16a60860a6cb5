use anchor_lang::prelude::*;

use crate::errors::MatchdayError;

/// Per-listing lock held for the duration of a purchase.
#[account]
#[derive(InitSpace)]
pub struct ReentrancyGuard {
    pub is_locked: bool,
    pub bump: u8,
}

impl ReentrancyGuard {
    pub fn lock(&mut self) -> Result<()> {
        require!(!self.is_locked, MatchdayError::ReentrancyLocked);
        self.is_locked = true;
        Ok(())
    }

    pub fn unlock(&mut self) -> Result<()> {
        self.is_locked = false;
        Ok(())
    }
}
