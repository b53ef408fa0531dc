use std::fmt;

use chrono::NaiveDate;

use crate::inventory::errors::InventoryError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Urgency category of an expiration date relative to a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryStatus {
    Expired,
    ExpiresToday,
    Critical { days_left: i64 },
    Normal { days_left: i64 },
}

/// One row of the classification policy: day counts up to `max_days`
/// (inclusive) map to the category built by `build`.
struct Rule {
    max_days: i64,
    build: fn(i64) -> ExpiryStatus,
}

/// Ordered policy table. Scanned top to bottom; the first matching upper
/// bound wins, and anything beyond the last bound is `Normal`.
const RULES: &[Rule] = &[
    Rule {
        max_days: -1,
        build: |_| ExpiryStatus::Expired,
    },
    Rule {
        max_days: 0,
        build: |_| ExpiryStatus::ExpiresToday,
    },
    Rule {
        max_days: 7,
        build: |days_left| ExpiryStatus::Critical { days_left },
    },
];

/// Classify an expiration date against a reference date.
///
/// Pure and deterministic: the same date pair always yields the same
/// category, with no side effects.
pub fn classify(expires_on: NaiveDate, reference: NaiveDate) -> ExpiryStatus {
    let days_left = (expires_on - reference).num_days();

    RULES
        .iter()
        .find(|rule| days_left <= rule.max_days)
        .map(|rule| (rule.build)(days_left))
        .unwrap_or(ExpiryStatus::Normal { days_left })
}

/// Parse a `YYYY-MM-DD` expiration date string.
///
/// # Errors
/// * `InvalidDateFormat` - Input does not parse; a malformed date is never
///   silently mapped to a category
pub fn parse_expiration_date(raw: &str) -> Result<NaiveDate, InventoryError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| InventoryError::InvalidDateFormat(raw.to_string()))
}

impl fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpiryStatus::Expired => f.write_str("expired"),
            ExpiryStatus::ExpiresToday => f.write_str("expires today"),
            ExpiryStatus::Critical { days_left } => {
                write!(f, "critical ({} days left)", days_left)
            }
            ExpiryStatus::Normal { days_left } => write!(f, "ok ({} days left)", days_left),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_classify_expired() {
        let status = classify(date("2024-06-05"), date("2024-06-10"));
        assert_eq!(status, ExpiryStatus::Expired);
    }

    #[test]
    fn test_classify_expires_today() {
        let status = classify(date("2024-06-10"), date("2024-06-10"));
        assert_eq!(status, ExpiryStatus::ExpiresToday);
    }

    #[test]
    fn test_classify_critical() {
        let status = classify(date("2024-06-15"), date("2024-06-10"));
        assert_eq!(status, ExpiryStatus::Critical { days_left: 5 });
    }

    #[test]
    fn test_classify_normal() {
        let status = classify(date("2024-07-01"), date("2024-06-10"));
        assert_eq!(status, ExpiryStatus::Normal { days_left: 21 });
    }

    #[test]
    fn test_classify_boundaries() {
        let reference = date("2024-06-10");

        // One day left is the lower edge of critical, seven days the upper.
        assert_eq!(
            classify(date("2024-06-11"), reference),
            ExpiryStatus::Critical { days_left: 1 }
        );
        assert_eq!(
            classify(date("2024-06-17"), reference),
            ExpiryStatus::Critical { days_left: 7 }
        );
        assert_eq!(
            classify(date("2024-06-18"), reference),
            ExpiryStatus::Normal { days_left: 8 }
        );
        assert_eq!(classify(date("2024-06-09"), reference), ExpiryStatus::Expired);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let first = classify(date("2024-06-15"), date("2024-06-10"));
        let second = classify(date("2024-06-15"), date("2024-06-10"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_expiration_date() {
        assert_eq!(parse_expiration_date("2024-06-10"), Ok(date("2024-06-10")));

        for raw in ["06/10/2024", "2024-13-01", "soon", ""] {
            assert!(matches!(
                parse_expiration_date(raw),
                Err(InventoryError::InvalidDateFormat(_))
            ));
        }
    }

    #[test]
    fn test_status_rendering() {
        assert_eq!(ExpiryStatus::Expired.to_string(), "expired");
        assert_eq!(ExpiryStatus::ExpiresToday.to_string(), "expires today");
        assert_eq!(
            ExpiryStatus::Critical { days_left: 5 }.to_string(),
            "critical (5 days left)"
        );
        assert_eq!(
            ExpiryStatus::Normal { days_left: 21 }.to_string(),
            "ok (21 days left)"
        );
    }
}
