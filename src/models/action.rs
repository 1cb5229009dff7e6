use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;

use super::iso_millis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Locked,
    Booked,
    Unlocked,
    Cancelled,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionKind::Locked => "locked",
            ActionKind::Booked => "booked",
            ActionKind::Unlocked => "unlocked",
            ActionKind::Cancelled => "cancelled",
        };
        f.write_str(name)
    }
}

/// Record of one successful seat transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatAction {
    pub seat_id: String,
    pub action: ActionKind,
    pub user_id: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: DateTime<Utc>,
}

fn serialize_timestamp<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&iso_millis(ts))
}
