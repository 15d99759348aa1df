// crates/shared-kernel/src/clock/mod.rs

use chrono::{DateTime, Utc};

mod system;

pub use system::SystemClock;

#[cfg(any(test, feature = "test-utils"))]
mod fixed;
#[cfg(any(test, feature = "test-utils"))]
pub use fixed::FixedClock;

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
