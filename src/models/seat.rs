use chrono::{DateTime, Utc};
use serde::{ser::SerializeMap, Serialize, Serializer};

use super::iso_millis;

/// Coarse status of a seat as exposed over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    Available,
    Locked,
    Booked,
}

/// An active, time-bounded claim on a seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatLock {
    pub user_id: String,
    pub locked_at: DateTime<Utc>,
}

/// Holder and lock time only exist while the seat is locked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeatState {
    Available,
    Locked(SeatLock),
    Booked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    pub id: String,
    pub state: SeatState,
}

impl Seat {
    pub fn available(id: impl Into<String>) -> Self {
        Self { id: id.into(), state: SeatState::Available }
    }

    pub fn status(&self) -> SeatStatus {
        match self.state {
            SeatState::Available => SeatStatus::Available,
            SeatState::Locked(_) => SeatStatus::Locked,
            SeatState::Booked => SeatStatus::Booked,
        }
    }

    pub fn lock(&self) -> Option<&SeatLock> {
        match &self.state {
            SeatState::Locked(lock) => Some(lock),
            _ => None,
        }
    }

    pub fn locked_by(&self) -> Option<&str> {
        self.lock().map(|lock| lock.user_id.as_str())
    }
}

// Плоская запись {status, lockedBy, lockTime}, как её видит клиент
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SeatRecord<'a> {
    status: SeatStatus,
    locked_by: Option<&'a str>,
    lock_time: Option<String>,
}

impl Serialize for Seat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SeatRecord {
            status: self.status(),
            locked_by: self.locked_by(),
            lock_time: self.lock().map(|lock| iso_millis(&lock.locked_at)),
        }
        .serialize(serializer)
    }
}

/// Point-in-time copy of the whole seat table, serialized as an object keyed
/// by seat id in registry order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatTable(pub Vec<Seat>);

impl SeatTable {
    pub fn get(&self, seat_id: &str) -> Option<&Seat> {
        self.0.iter().find(|seat| seat.id == seat_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Seat> {
        self.0.iter()
    }
}

impl Serialize for SeatTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for seat in &self.0 {
            map.serialize_entry(&seat.id, seat)?;
        }
        map.end()
    }
}
