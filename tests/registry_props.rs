//! Property tests: arbitrary operation sequences never break seat invariants.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

use seat_reservation::models::{SeatState, SeatStatus};
use seat_reservation::services::SeatRegistry;

#[derive(Debug, Clone)]
enum Op {
    Lock(usize, usize),
    Confirm(usize, usize),
    Unlock(usize, usize),
    Cancel(usize, usize),
    Wait(i64),
}

const USERS: [&str; 3] = ["alice", "bob", "carol"];

fn op() -> impl Strategy<Value = Op> {
    let seat = 1usize..=11;
    let user = 0usize..USERS.len();
    prop_oneof![
        (seat.clone(), user.clone()).prop_map(|(s, u)| Op::Lock(s, u)),
        (seat.clone(), user.clone()).prop_map(|(s, u)| Op::Confirm(s, u)),
        (seat.clone(), user.clone()).prop_map(|(s, u)| Op::Unlock(s, u)),
        (seat, user).prop_map(|(s, u)| Op::Cancel(s, u)),
        (0i64..90).prop_map(Op::Wait),
    ]
}

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 8, 0, 0).unwrap()
}

proptest! {
    #[test]
    fn operations_preserve_invariants(ops in prop::collection::vec(op(), 1..60)) {
        let mut registry = SeatRegistry::new();
        let mut now = start();

        for op in ops {
            let before = registry.seats(now);
            let (seat_id, result) = match op {
                Op::Wait(secs) => {
                    now += Duration::seconds(secs);
                    continue;
                }
                Op::Lock(s, u) => (format!("S{s}"), registry.lock(&format!("S{s}"), USERS[u], now)),
                Op::Confirm(s, u) => (format!("S{s}"), registry.confirm(&format!("S{s}"), USERS[u], now)),
                Op::Unlock(s, u) => (format!("S{s}"), registry.unlock(&format!("S{s}"), USERS[u], now)),
                Op::Cancel(s, u) => (format!("S{s}"), registry.cancel(&format!("S{s}"), USERS[u], now)),
            };
            let after = registry.seats(now);

            match result {
                // Failed calls never mutate
                Err(_) => prop_assert_eq!(&before, &after),
                // Success touches exactly the named seat
                Ok(action) => {
                    prop_assert_eq!(&action.seat_id, &seat_id);
                    for (b, a) in before.iter().zip(after.iter()) {
                        if b.id != seat_id {
                            prop_assert_eq!(b, a);
                        }
                    }
                }
            }

            prop_assert_eq!(after.iter().count(), 10);
            for seat in after.iter() {
                match &seat.state {
                    SeatState::Locked(lock) => {
                        prop_assert_eq!(seat.status(), SeatStatus::Locked);
                        prop_assert!(now - lock.locked_at <= Duration::seconds(60));
                    }
                    _ => prop_assert!(seat.lock().is_none()),
                }
            }
        }
    }

    #[test]
    fn cancel_succeeds_for_any_user_iff_booked(holder in 0usize..3, canceller in 0usize..3) {
        let mut registry = SeatRegistry::new();
        let now = start();
        prop_assert!(registry.cancel("S1", USERS[canceller], now).is_err());

        registry.lock("S1", USERS[holder], now).unwrap();
        prop_assert!(registry.cancel("S1", USERS[canceller], now).is_err());

        registry.confirm("S1", USERS[holder], now).unwrap();
        prop_assert!(registry.cancel("S1", USERS[canceller], now).is_ok());
        prop_assert_eq!(registry.seat("S1", now).unwrap().status(), SeatStatus::Available);
    }
}
