use crate::compliance::is_active;
use chrono::{DateTime, Datelike, Utc};
use derive_getters::Getters;
use dto::plan_type::PlanType;
use dto::subscription::Subscription;

/// Counters displayed on the subscriptions page.
#[derive(Debug, Default, Getters, PartialEq, Clone)]
pub struct SubscriptionStats {
    active_monthly: usize,
    active_quarterly: usize,
    expired: usize,
    month_earnings: f64,
}

impl SubscriptionStats {
    pub fn compute(subscriptions: &[Subscription], now: &DateTime<Utc>) -> Self {
        Self {
            active_monthly: count_active(subscriptions, &PlanType::Month, now),
            active_quarterly: count_active(subscriptions, &PlanType::Quarterly, now),
            expired: count_expired(subscriptions, now),
            month_earnings: month_earnings(subscriptions, now),
        }
    }
}

pub fn count_active(
    subscriptions: &[Subscription],
    plan_type: &PlanType,
    now: &DateTime<Utc>,
) -> usize {
    subscriptions
        .iter()
        .filter(|subscription| {
            subscription.plan_type() == plan_type
                && subscription
                    .expiration()
                    .as_ref()
                    .is_some_and(|expiration| is_active(expiration, now))
        })
        .count()
}

/// Subscriptions whose expiration is strictly before `now`.
pub fn count_expired(subscriptions: &[Subscription], now: &DateTime<Utc>) -> usize {
    subscriptions
        .iter()
        .filter(|subscription| {
            subscription
                .expiration()
                .as_ref()
                .is_some_and(|expiration| expiration < now)
        })
        .count()
}

/// Sum of the amounts of the subscriptions created during the month of `now`.
/// Subscriptions without a creation date are left out.
pub fn month_earnings(subscriptions: &[Subscription], now: &DateTime<Utc>) -> f64 {
    subscriptions
        .iter()
        .filter(|subscription| {
            subscription.created_at().is_some_and(|created_at| {
                created_at.month() == now.month() && created_at.year() == now.year()
            })
        })
        .map(|subscription| *subscription.amount())
        .sum()
}
