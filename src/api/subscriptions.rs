use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use dto::subscription::{Subscription, SubscriptionDetails};
use reqwest::Method;

impl ApiClient {
    pub async fn get_subscriptions(&self) -> Result<Vec<Subscription>, ApiError> {
        let request = self.request(Method::GET, "/subscription/getall");
        self.send_json(request, "Can't retrieve subscriptions").await
    }

    pub async fn get_subscription(&self, id: &str) -> Result<Subscription, ApiError> {
        let request = self.request(Method::GET, &format!("/subscription/get/{id}"));
        self.send_json(request, "Can't retrieve subscription").await
    }

    /// The backend answers `null` when the athlete never subscribed.
    pub async fn get_last_subscription_of_athlete(
        &self,
        athlete_id: &str,
    ) -> Result<Option<Subscription>, ApiError> {
        let request = self.request(
            Method::GET,
            &format!("/subscription/getbyathlete/{athlete_id}"),
        );
        self.send_json(request, "Can't retrieve subscription of athlete")
            .await
    }

    pub async fn add_subscription(
        &self,
        subscription: &SubscriptionDetails,
    ) -> Result<Subscription, ApiError> {
        let request = self
            .request(
                Method::POST,
                &format!("/subscription/post/{}", subscription.athlete_id()),
            )
            .json(subscription);
        self.send_json(request, "Can't add subscription").await
    }

    pub async fn edit_subscription(
        &self,
        id: &str,
        subscription: &SubscriptionDetails,
    ) -> Result<Subscription, ApiError> {
        let request = self
            .request(Method::PUT, &format!("/subscription/edit/{id}"))
            .json(subscription);
        self.send_json(request, "Can't edit subscription").await
    }
}
