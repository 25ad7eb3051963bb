//! Time sources.
//!
//! Domain code never reads the wall clock directly; callers pass a `Clock` so
//! time-dependent predicates (such as expiry) stay deterministic under test.

use chrono::{DateTime, Local, NaiveDate, Utc};

/// A source of "now".
///
/// Date-granular checks such as expiry go through `today()`, so each clock
/// decides which calendar it answers in.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Calendar date of `now()`. Defaults to the UTC date.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }

    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Wall-clock time. `today()` is the date in the host's local time zone.
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one instant.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    /// Midnight UTC at the start of `date`.
    pub fn on(date: NaiveDate) -> Self {
        Self(date.and_time(chrono::NaiveTime::MIN).and_utc())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
