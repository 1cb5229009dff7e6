pub mod expiry;
pub mod registry;

pub use expiry::LOCK_DURATION;
pub use registry::{SeatRegistry, SEAT_COUNT};
