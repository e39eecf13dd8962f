use crate::athlete::names::AthleteNames;
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use dto::athlete::Athlete;
use dto::subscription::Subscription;

const MILLISECONDS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// An expired subscription, as listed on the dashboard.
#[derive(Debug, Getters, PartialEq, Clone)]
pub struct ExpiredSubscription {
    subscription_id: String,
    athlete_id: String,
    athlete_name: String,
    days_expired: i64,
}

/// Subscriptions whose expiration is strictly before `now`, with the name of their athlete.
pub fn expired_subscriptions(
    subscriptions: &[Subscription],
    athletes: &[Athlete],
    now: &DateTime<Utc>,
) -> Vec<ExpiredSubscription> {
    let names = AthleteNames::new(athletes);
    subscriptions
        .iter()
        .filter_map(|subscription| {
            let expiration = subscription.expiration().as_ref()?;
            (expiration < now).then(|| ExpiredSubscription {
                subscription_id: subscription.id().clone(),
                athlete_id: subscription.athlete_id().clone(),
                athlete_name: names.full_name(subscription.athlete_id()),
                days_expired: days_expired(expiration, now),
            })
        })
        .collect()
}

/// Days elapsed since `expiration`, rounded up: any started day counts.
pub fn days_expired(expiration: &DateTime<Utc>, now: &DateTime<Utc>) -> i64 {
    let elapsed = (*now - *expiration).num_milliseconds();
    if elapsed <= 0 {
        return 0;
    }

    (elapsed + MILLISECONDS_PER_DAY - 1) / MILLISECONDS_PER_DAY
}
