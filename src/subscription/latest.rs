use dto::subscription::Subscription;

/// The subscription of the athlete expiring last, if any.
pub fn latest_subscription<'a>(
    subscriptions: &'a [Subscription],
    athlete_id: &str,
) -> Option<&'a Subscription> {
    subscriptions
        .iter()
        .filter(|subscription| subscription.athlete_id() == athlete_id)
        .max_by_key(|subscription| *subscription.expiration())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use dto::plan_type::PlanType;

    #[test]
    fn should_retrieve_latest_subscription() {
        let now = Utc::now();
        let subscriptions = vec![
            Subscription::new_test("old", "1", PlanType::Month, now - Duration::days(30), 80.0, None),
            Subscription::new_test("new", "1", PlanType::Month, now + Duration::days(1), 80.0, None),
            Subscription::new_test("other", "2", PlanType::Quarterly, now + Duration::days(60), 210.0, None),
        ];

        let latest = latest_subscription(&subscriptions, "1");

        assert_eq!(Some(&subscriptions[1]), latest);
    }

    #[test]
    fn should_not_retrieve_latest_subscription_as_none_exists() {
        let subscriptions: Vec<Subscription> = vec![];
        assert_eq!(None, latest_subscription(&subscriptions, "1"));
    }
}
