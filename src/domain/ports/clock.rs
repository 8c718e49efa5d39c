use chrono::{DateTime, Utc};

/// Source of the reference instant for time-dependent decisions.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
