use crate::constants::RESALE_LOCK_SECONDS;

/// A ticket may not be listed or bought inside the 24h window before
/// kickoff; already-played matches stay locked. An unset or corrupt kickoff
/// locks the ticket rather than freeing it.
pub fn is_resale_locked(kickoff_at: i64, now: i64) -> bool {
    if kickoff_at <= 0 {
        return true;
    }
    kickoff_at.saturating_sub(now) < RESALE_LOCK_SECONDS
}

/// The kickoff instant has passed. Implies locked, not the reverse.
pub fn has_kicked_off(kickoff_at: i64, now: i64) -> bool {
    kickoff_at < now
}
