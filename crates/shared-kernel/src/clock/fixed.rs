// crates/shared-kernel/src/clock/fixed.rs

use std::sync::Mutex;
use chrono::{DateTime, Duration, Utc};
use crate::clock::Clock;

/// Horloge pilotable pour les tests d'expiration
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now: Mutex::new(now) }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}
