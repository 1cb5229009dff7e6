use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::ReservationError;
use crate::models::{ActionKind, Seat, SeatAction, SeatLock, SeatState, SeatTable};

/// Number of seats created at startup (`S1`..`S10`).
pub const SEAT_COUNT: usize = 10;

/// In-memory seat table and the only writer of seat state.
///
/// Every operation first runs the expiry sweep against `now`, then evaluates
/// its guards, and only mutates after all guards pass. A rejected call leaves
/// the table untouched.
#[derive(Debug, Clone)]
pub struct SeatRegistry {
    pub(super) seats: Vec<Seat>,
}

impl Default for SeatRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SeatRegistry {
    pub fn new() -> Self {
        let seats = (1..=SEAT_COUNT).map(|n| Seat::available(format!("S{n}"))).collect();
        Self { seats }
    }

    /// Sweeps stale locks and returns a snapshot of every seat.
    pub fn seats(&mut self, now: DateTime<Utc>) -> SeatTable {
        self.expire_stale_locks(now);
        SeatTable(self.seats.clone())
    }

    /// Sweeps stale locks and returns one seat.
    pub fn seat(&mut self, seat_id: &str, now: DateTime<Utc>) -> Result<Seat, ReservationError> {
        self.expire_stale_locks(now);
        self.seats
            .iter()
            .find(|seat| seat.id == seat_id)
            .cloned()
            .ok_or(ReservationError::NotFound)
    }

    pub fn lock(
        &mut self,
        seat_id: &str,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<SeatAction, ReservationError> {
        let seat = self.seat_mut(seat_id, now)?;
        match seat.state {
            SeatState::Booked => return Err(ReservationError::AlreadyBooked),
            SeatState::Locked(_) => return Err(ReservationError::AlreadyLocked),
            SeatState::Available => {}
        }

        seat.state = SeatState::Locked(SeatLock {
            user_id: user_id.to_string(),
            locked_at: now,
        });
        Ok(record(seat_id, ActionKind::Locked, user_id, now))
    }

    pub fn confirm(
        &mut self,
        seat_id: &str,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<SeatAction, ReservationError> {
        let seat = self.seat_mut(seat_id, now)?;
        let holder = seat.locked_by().ok_or(ReservationError::NotLocked)?;
        if holder != user_id {
            return Err(ReservationError::LockedByOther);
        }

        seat.state = SeatState::Booked;
        Ok(record(seat_id, ActionKind::Booked, user_id, now))
    }

    pub fn unlock(
        &mut self,
        seat_id: &str,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<SeatAction, ReservationError> {
        let seat = self.seat_mut(seat_id, now)?;
        if seat.locked_by() != Some(user_id) {
            return Err(ReservationError::NotLockedByUser);
        }

        seat.state = SeatState::Available;
        Ok(record(seat_id, ActionKind::Unlocked, user_id, now))
    }

    /// Any user may cancel any booked seat; there is no ownership check.
    pub fn cancel(
        &mut self,
        seat_id: &str,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<SeatAction, ReservationError> {
        let seat = self.seat_mut(seat_id, now)?;
        if seat.state != SeatState::Booked {
            return Err(ReservationError::NotBooked);
        }

        seat.state = SeatState::Available;
        Ok(record(seat_id, ActionKind::Cancelled, user_id, now))
    }

    fn seat_mut(&mut self, seat_id: &str, now: DateTime<Utc>) -> Result<&mut Seat, ReservationError> {
        self.expire_stale_locks(now);
        self.seats
            .iter_mut()
            .find(|seat| seat.id == seat_id)
            .ok_or(ReservationError::InvalidSeatId)
    }
}

fn record(seat_id: &str, action: ActionKind, user_id: &str, now: DateTime<Utc>) -> SeatAction {
    info!(
        user_id = %user_id,
        seat_id = %seat_id,
        action = %action,
        timestamp = %crate::models::iso_millis(&now),
        "🎫 {} {} seat {}", user_id, action, seat_id
    );
    SeatAction {
        seat_id: seat_id.to_string(),
        action,
        user_id: user_id.to_string(),
        timestamp: now,
    }
}
