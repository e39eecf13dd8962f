use crate::athlete::alerts::AthleteAlerts;
use crate::subscription::expired::{ExpiredSubscription, expired_subscriptions};
use crate::subscription::stats::SubscriptionStats;
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use dto::athlete::Athlete;
use dto::subscription::Subscription;

/// Every value derived from the athletes and subscriptions collections.
/// It is recomputed as a whole; nothing is updated incrementally.
#[derive(Debug, Default, Getters, PartialEq, Clone)]
pub struct Dashboard {
    athletes_count: usize,
    athlete_alerts: AthleteAlerts,
    expired_subscriptions: Vec<ExpiredSubscription>,
    subscription_stats: SubscriptionStats,
}

impl Dashboard {
    pub fn compute(
        athletes: &[Athlete],
        subscriptions: &[Subscription],
        now: &DateTime<Utc>,
    ) -> Self {
        Self {
            athletes_count: athletes.len(),
            athlete_alerts: AthleteAlerts::compute(athletes, now),
            expired_subscriptions: expired_subscriptions(subscriptions, athletes, now),
            subscription_stats: SubscriptionStats::compute(subscriptions, now),
        }
    }
}
