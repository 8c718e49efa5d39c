use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Out-of-office configuration of one account.
///
/// `Vacation::default()` is the disabled, empty configuration that repositories
/// hand out for accounts which never stored one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vacation {
    pub is_enabled: bool,
    pub from_date: Option<DateTime<Utc>>,
    pub to_date: Option<DateTime<Utc>>,
    pub subject: Option<String>,
    pub text_body: Option<String>,
    pub html_body: Option<String>,
}

impl Vacation {
    pub fn enabled_between(
        from_date: Option<DateTime<Utc>>,
        to_date: Option<DateTime<Utc>>,
        text_body: Option<String>,
    ) -> Self {
        Self {
            is_enabled: true,
            from_date,
            to_date,
            text_body,
            ..Self::default()
        }
    }

    /// Whether the auto-response applies at `instant`.
    ///
    /// Both bounds are inclusive and a missing bound leaves that side open.
    /// The caller supplies the instant; this never reads the system clock.
    pub fn is_active_at(&self, instant: DateTime<Utc>) -> bool {
        self.is_enabled
            && self.is_after_or_equal_to_from_date(instant)
            && self.is_before_or_equal_to_to_date(instant)
    }

    fn is_after_or_equal_to_from_date(&self, instant: DateTime<Utc>) -> bool {
        self.from_date.map_or(true, |from_date| instant >= from_date)
    }

    fn is_before_or_equal_to_to_date(&self, instant: DateTime<Utc>) -> bool {
        self.to_date.map_or(true, |to_date| instant <= to_date)
    }
}
