use chrono::DateTime;
use chrono::Utc;

/// Source of the current instant for session expiry decisions.
///
/// The store takes its notion of "now" through this trait so tests can
/// substitute a fake clock instead of sleeping through real TTLs.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
