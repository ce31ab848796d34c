use time::OffsetDateTime;

use crate::Timestamp;

/// Time source used to stamp decoded pose samples.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

/// Wall-clock time (UTC).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let now = OffsetDateTime::now_utc();
        Timestamp {
            sec: now.unix_timestamp(),
            nanosec: now.nanosecond(),
        }
    }
}

/// Clock frozen at a single instant, for reproducible decoding.
///
/// # Examples
/// ```
/// use q2r_wire_core::{Clock, FixedClock, Timestamp};
///
/// let clock = FixedClock(Timestamp { sec: 10, nanosec: 5 });
/// assert_eq!(clock.now().sec, 10);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}
