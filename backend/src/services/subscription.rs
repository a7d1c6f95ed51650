//! Subscription validity, as evaluated before catalogue access.
//!
//! A subscription counts as active only when all three hold: a payment
//! record exists with status `settled` (case-insensitive), a subscription
//! record exists, and its `end_date` is strictly in the future. The core
//! API owns settlement itself; this is purely an access gate.

use chrono::{DateTime, NaiveDate, Utc};

use adapters::models::UserSubscription;

/// Parses the core API's date strings: full RFC 3339 timestamps or bare
/// `YYYY-MM-DD` dates (taken as midnight UTC).
fn parse_end_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = raw.parse::<chrono::NaiveDateTime>() {
        return Some(naive.and_utc());
    }
    raw.parse::<NaiveDate>()
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

pub fn is_active(record: &UserSubscription, now: DateTime<Utc>) -> bool {
    let (Some(subscription), Some(payment)) = (&record.subscription, &record.payment) else {
        return false;
    };

    let settled = payment
        .status
        .as_deref()
        .is_some_and(|status| status.eq_ignore_ascii_case("settled"));
    if !settled {
        return false;
    }

    parse_end_date(&subscription.end_date).is_some_and(|end| end > now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use adapters::models::{PaymentData, SubscriptionData};
    use chrono::TimeZone;

    fn subscription(end_date: &str) -> SubscriptionData {
        SubscriptionData {
            id: "sub-1".to_string(),
            plan_name: "Annual".to_string(),
            plan_price: 1200.0,
            duration_days: 365,
            start_date: "2025-01-01T00:00:00Z".to_string(),
            end_date: end_date.to_string(),
            status: "active".to_string(),
            amount_paid: 1200.0,
        }
    }

    fn payment(status: &str) -> PaymentData {
        PaymentData {
            status: Some(status.to_string()),
            ..Default::default()
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn settled_payment_with_future_end_date_is_active() {
        let record = UserSubscription {
            subscription: Some(subscription("2026-01-01T00:00:00Z")),
            payment: Some(payment("settled")),
        };
        assert!(is_active(&record, now()));
    }

    #[test]
    fn settled_is_case_insensitive() {
        let record = UserSubscription {
            subscription: Some(subscription("2026-01-01T00:00:00Z")),
            payment: Some(payment("SETTLED")),
        };
        assert!(is_active(&record, now()));
    }

    #[test]
    fn missing_payment_half_is_inactive() {
        let record = UserSubscription {
            subscription: Some(subscription("2026-01-01T00:00:00Z")),
            payment: None,
        };
        assert!(!is_active(&record, now()));
    }

    #[test]
    fn missing_subscription_half_is_inactive() {
        let record = UserSubscription {
            subscription: None,
            payment: Some(payment("settled")),
        };
        assert!(!is_active(&record, now()));
    }

    #[test]
    fn declined_payment_is_inactive() {
        let record = UserSubscription {
            subscription: Some(subscription("2026-01-01T00:00:00Z")),
            payment: Some(payment("decline")),
        };
        assert!(!is_active(&record, now()));
    }

    #[test]
    fn past_end_date_is_inactive() {
        let record = UserSubscription {
            subscription: Some(subscription("2025-01-31T00:00:00Z")),
            payment: Some(payment("settled")),
        };
        assert!(!is_active(&record, now()));
    }

    #[test]
    fn bare_date_strings_parse() {
        let record = UserSubscription {
            subscription: Some(subscription("2026-03-15")),
            payment: Some(payment("settled")),
        };
        assert!(is_active(&record, now()));
    }

    #[test]
    fn unparseable_end_date_is_inactive() {
        let record = UserSubscription {
            subscription: Some(subscription("soon")),
            payment: Some(payment("settled")),
        };
        assert!(!is_active(&record, now()));
    }
}
