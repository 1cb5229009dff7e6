use chrono::{DateTime, Utc};
use std::time::Duration;
use tracing::debug;

use crate::models::{SeatLock, SeatState};
use super::registry::SeatRegistry;

/// How long an unconfirmed lock is held before the sweep releases it.
pub const LOCK_DURATION: Duration = Duration::from_secs(60);

/// A lock is stale once strictly more than `LOCK_DURATION` has passed.
/// Locks stamped in the future (clock skew) are never stale.
pub fn is_stale(lock: &SeatLock, now: DateTime<Utc>) -> bool {
    (now - lock.locked_at)
        .to_std()
        .map(|held| held > LOCK_DURATION)
        .unwrap_or(false)
}

impl SeatRegistry {
    /// Releases every lock older than `LOCK_DURATION`.
    ///
    /// Runs lazily at the top of every registry operation, there is no
    /// background timer. Returns the number of seats released.
    pub fn expire_stale_locks(&mut self, now: DateTime<Utc>) -> usize {
        let mut expired = 0;
        for seat in &mut self.seats {
            let stale = match &seat.state {
                SeatState::Locked(lock) if is_stale(lock, now) => Some(lock.user_id.clone()),
                _ => None,
            };
            if let Some(user_id) = stale {
                seat.state = SeatState::Available;
                expired += 1;
                debug!(seat_id = %seat.id, user_id = %user_id, "⏰ Lock expired, seat released");
            }
        }
        expired
    }
}
