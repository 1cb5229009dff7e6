pub mod seat;
pub mod action;

pub use seat::{Seat, SeatLock, SeatState, SeatStatus, SeatTable};
pub use action::{ActionKind, SeatAction};

use chrono::{DateTime, SecondsFormat, Utc};

// ISO-8601, миллисекунды, суффикс Z
pub fn iso_millis(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}
