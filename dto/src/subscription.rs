use crate::date_format::{option_naive_date, option_utc_datetime};
use crate::payment_method::PaymentMethod;
use crate::plan_type::PlanType;
use chrono::{DateTime, NaiveDate, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Everything the backend stores about a subscription, except what it computes itself.
/// This is the payload sent when creating or editing a subscription.
/// Records stored with a missing or unreadable date still load; they just never count as
/// active or expired.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionDetails {
    athlete_id: String,
    #[serde(rename = "date", default, with = "option_naive_date")]
    start_date: Option<NaiveDate>,
    #[serde(rename = "type")]
    plan_type: PlanType,
    /// Final price, discount included.
    amount: f64,
    #[serde(rename = "subscriptionExp", default, with = "option_utc_datetime")]
    expiration: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
    #[serde(rename = "paymentType")]
    payment_method: PaymentMethod,
}

impl SubscriptionDetails {
    pub fn new(
        athlete_id: String,
        start_date: NaiveDate,
        plan_type: PlanType,
        amount: f64,
        expiration: DateTime<Utc>,
        notes: Option<String>,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            athlete_id,
            start_date: Some(start_date),
            plan_type,
            amount,
            expiration: Some(expiration),
            notes,
            payment_method,
        }
    }
}

/// A subscription as stored by the backend.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    #[serde(rename = "_id")]
    id: String,
    #[serde(flatten)]
    details: SubscriptionDetails,
    #[serde(default, with = "option_utc_datetime")]
    created_at: Option<DateTime<Utc>>,
}

impl Subscription {
    pub fn new(id: String, details: SubscriptionDetails, created_at: Option<DateTime<Utc>>) -> Self {
        Self {
            id,
            details,
            created_at,
        }
    }
}

impl Deref for Subscription {
    type Target = SubscriptionDetails;

    fn deref(&self) -> &Self::Target {
        &self.details
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;
    use crate::date_format::start_of_day;

    pub const SUBSCRIPTION_ID: &str = "66b1f7d9a4e5d3b2c1a0a001";

    impl Subscription {
        pub fn new_test(
            id: &str,
            athlete_id: &str,
            plan_type: PlanType,
            expiration: DateTime<Utc>,
            amount: f64,
            created_at: Option<DateTime<Utc>>,
        ) -> Self {
            Subscription {
                id: id.to_owned(),
                details: SubscriptionDetails {
                    athlete_id: athlete_id.to_owned(),
                    start_date: Some(expiration.date_naive()),
                    plan_type,
                    amount,
                    expiration: Some(expiration),
                    notes: None,
                    payment_method: PaymentMethod::Cash,
                },
                created_at,
            }
        }
    }

    pub fn get_expected_subscription() -> Subscription {
        Subscription {
            id: SUBSCRIPTION_ID.to_owned(),
            details: SubscriptionDetails {
                athlete_id: crate::athlete::tests::ATHLETE_ID.to_owned(),
                start_date: NaiveDate::from_ymd_opt(2024, 1, 10),
                plan_type: PlanType::Month,
                amount: 72.0,
                expiration: Some(start_of_day(NaiveDate::from_ymd_opt(2024, 2, 15).unwrap())),
                notes: Some("Sconto fratelli".to_owned()),
                payment_method: PaymentMethod::BankTransfer,
            },
            created_at: DateTime::parse_from_rfc3339("2024-01-10T18:42:11.512Z")
                .ok()
                .map(|date_time| date_time.with_timezone(&Utc)),
        }
    }

    pub fn get_subscription_as_json() -> String {
        format!(
            r#"{{
                "_id": "{SUBSCRIPTION_ID}",
                "athleteId": "{}",
                "date": "2024-01-10T00:00:00.000Z",
                "type": "month",
                "amount": 72,
                "subscriptionExp": "2024-02-15T00:00:00.000Z",
                "notes": "Sconto fratelli",
                "paymentType": "banktransfer",
                "createdAt": "2024-01-10T18:42:11.512Z",
                "updatedAt": "2024-01-10T18:42:11.512Z"
            }}"#,
            crate::athlete::tests::ATHLETE_ID
        )
    }

    #[test]
    fn should_deserialize_subscription_from_backend() {
        let subscription: Subscription =
            serde_json::from_str(&get_subscription_as_json()).unwrap();
        assert_eq!(get_expected_subscription(), subscription);
    }

    #[test]
    fn should_deserialize_subscription_without_creation_date() {
        let json = r#"{
            "_id": "1",
            "athleteId": "2",
            "date": "2024-03-01",
            "type": "quarterly",
            "amount": 150,
            "subscriptionExp": "2024-06-15",
            "paymentType": "cash"
        }"#;
        let subscription: Subscription = serde_json::from_str(json).unwrap();
        assert_eq!(&None, subscription.created_at());
        assert_eq!(&PlanType::Quarterly, subscription.plan_type());
        assert_eq!(&None, subscription.notes());
    }

    #[test]
    fn should_deserialize_subscriptions_with_missing_dates() {
        let json = r#"[
            {"_id": "1", "athleteId": "2", "date": "2024-03-01", "type": "month", "amount": 80, "subscriptionExp": "2024-04-15", "paymentType": "cash"},
            {"_id": "3", "athleteId": "4", "date": "", "type": "month", "amount": 80, "subscriptionExp": null, "paymentType": "cash"},
            {"_id": "5", "athleteId": "6", "type": "quarterly", "amount": 210, "paymentType": "paypal"}
        ]"#;
        let subscriptions: Vec<Subscription> = serde_json::from_str(json).unwrap();

        assert_eq!(3, subscriptions.len());
        assert_eq!(
            &Some(start_of_day(NaiveDate::from_ymd_opt(2024, 4, 15).unwrap())),
            subscriptions[0].expiration()
        );
        assert_eq!(&None, subscriptions[1].start_date());
        assert_eq!(&None, subscriptions[1].expiration());
        assert_eq!(&None, subscriptions[2].expiration());
    }

    #[test]
    fn should_serialize_details_with_backend_names() {
        let value = serde_json::to_value(get_expected_subscription().details()).unwrap();
        assert_eq!("2024-01-10", value["date"]);
        assert_eq!("month", value["type"]);
        assert_eq!("2024-02-15T00:00:00.000Z", value["subscriptionExp"]);
        assert_eq!("banktransfer", value["paymentType"]);
        assert_eq!(72.0, value["amount"]);
    }
}
