use crate::api::client::ApiClient;
use crate::api::config::ApiConfig;
use crate::api::error::ApiError;
use crate::error::Result;
use crate::state::AppState;
use dto::athlete::{Athlete, AthleteDetails};
use dto::credentials::Credentials;
use dto::subscription::{Subscription, SubscriptionDetails};
use log::{info, warn};

const LOGIN_FAILED: &str = "Errore nel login";
const ATHLETES_RETRIEVAL_FAILED: &str = "Errore nel recupero degli atleti";
const ATHLETE_RETRIEVAL_FAILED: &str = "Errore nel recupero dell'atleta";
const ATHLETE_CREATION_FAILED: &str = "Errore nella creazione dell'atleta";
const ATHLETE_UPDATE_FAILED: &str = "Errore nell'aggiornamento dell'atleta";
const ATHLETE_DELETION_FAILED: &str = "Errore nell'eliminazione dell'atleta";
const SUBSCRIPTIONS_RETRIEVAL_FAILED: &str = "Errore nel recupero degli abbonamenti";
const SUBSCRIPTION_RETRIEVAL_FAILED: &str = "Errore nel recupero dell'abbonamento";
const ATHLETE_SUBSCRIPTION_RETRIEVAL_FAILED: &str =
    "Errore nel recupero dell'abbonamento per atleta";
const SUBSCRIPTION_CREATION_FAILED: &str = "Errore nella creazione della subscription";
const SUBSCRIPTION_UPDATE_FAILED: &str = "Errore nell'aggiornamento dell'abbonamento";

/// Glue between the backend and the application state.
/// The state only changes once the backend accepted a call;
/// a failed call leaves it untouched and records a message for the staff.
pub struct AppController {
    client: ApiClient,
    state: AppState,
    error: Option<String>,
}

impl AppController {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Ok(Self::with_state(ApiClient::new(config)?, AppState::default()))
    }

    /// Build a controller from the `--api-url` argument or the `API_URL` variable.
    pub fn from_env() -> Result<Self> {
        Self::new(&ApiConfig::from_env()?)
    }

    pub fn with_state(client: ApiClient, state: AppState) -> Self {
        Self {
            client,
            state,
            error: None,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Message of the last failed call, cleared by the next call.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.client.is_authenticated()
    }

    pub fn refresh(&mut self) {
        self.state.refresh();
    }

    pub async fn login(&mut self, credentials: &Credentials) -> Result<()> {
        self.error = None;
        let result = self.client.login(credentials).await;
        self.record(result, LOGIN_FAILED)?;
        info!("Logged in as {}.", credentials.username());
        Ok(())
    }

    pub fn logout(&mut self) {
        self.client.clear_token();
    }

    // region Athletes
    pub async fn load_athletes(&mut self) -> Result<()> {
        self.error = None;
        let result = self.client.get_athletes().await;
        let athletes = self.record(result, ATHLETES_RETRIEVAL_FAILED)?;
        info!("{} athletes loaded.", athletes.len());
        self.state.set_athletes(athletes);
        Ok(())
    }

    pub async fn get_athlete(&mut self, id: &str) -> Result<Athlete> {
        self.error = None;
        let result = self.client.get_athlete(id).await;
        self.record(result, ATHLETE_RETRIEVAL_FAILED)
    }

    pub async fn add_athlete(&mut self, athlete: &AthleteDetails) -> Result<Athlete> {
        self.error = None;
        let result = self.client.add_athlete(athlete).await;
        let athlete = self.record(result, ATHLETE_CREATION_FAILED)?;
        self.state.add_athlete(athlete.clone());
        Ok(athlete)
    }

    pub async fn edit_athlete(&mut self, id: &str, athlete: &AthleteDetails) -> Result<Athlete> {
        self.error = None;
        let result = self.client.edit_athlete(id, athlete).await;
        let athlete = self.record(result, ATHLETE_UPDATE_FAILED)?;
        if !self.state.update_athlete(athlete.clone()) {
            warn!("Edited athlete was not loaded [id: {id}]");
        }
        Ok(athlete)
    }

    pub async fn delete_athlete(&mut self, id: &str) -> Result<()> {
        self.error = None;
        let result = self.client.delete_athlete(id).await;
        self.record(result, ATHLETE_DELETION_FAILED)?;
        self.state.remove_athlete(id);
        Ok(())
    }
    // endregion

    // region Subscriptions
    pub async fn load_subscriptions(&mut self) -> Result<()> {
        self.error = None;
        let result = self.client.get_subscriptions().await;
        let subscriptions = self.record(result, SUBSCRIPTIONS_RETRIEVAL_FAILED)?;
        info!("{} subscriptions loaded.", subscriptions.len());
        self.state.set_subscriptions(subscriptions);
        Ok(())
    }

    pub async fn get_subscription(&mut self, id: &str) -> Result<Subscription> {
        self.error = None;
        let result = self.client.get_subscription(id).await;
        self.record(result, SUBSCRIPTION_RETRIEVAL_FAILED)
    }

    pub async fn get_last_subscription_of_athlete(
        &mut self,
        athlete_id: &str,
    ) -> Result<Option<Subscription>> {
        self.error = None;
        let result = self.client.get_last_subscription_of_athlete(athlete_id).await;
        self.record(result, ATHLETE_SUBSCRIPTION_RETRIEVAL_FAILED)
    }

    /// The new subscription replaces the previous one of the same athlete.
    pub async fn add_subscription(
        &mut self,
        subscription: &SubscriptionDetails,
    ) -> Result<Subscription> {
        self.error = None;
        let result = self.client.add_subscription(subscription).await;
        let subscription = self.record(result, SUBSCRIPTION_CREATION_FAILED)?;
        self.state.add_subscription(subscription.clone());
        Ok(subscription)
    }

    pub async fn edit_subscription(
        &mut self,
        id: &str,
        subscription: &SubscriptionDetails,
    ) -> Result<Subscription> {
        self.error = None;
        let result = self.client.edit_subscription(id, subscription).await;
        let subscription = self.record(result, SUBSCRIPTION_UPDATE_FAILED)?;
        if !self.state.update_subscription(subscription.clone()) {
            warn!("Edited subscription was not loaded [id: {id}]");
        }
        Ok(subscription)
    }
    // endregion

    /// Keep the message of a failed call. A backend rejection reason is kept as is.
    fn record<T>(&mut self, result: Result<T, ApiError>, message: &str) -> Result<T> {
        result.map_err(|error| {
            self.error = Some(match &error {
                ApiError::Rejected(reason) => reason.clone(),
                _ => message.to_owned(),
            });
            error.into()
        })
    }
}
