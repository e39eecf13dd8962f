use crate::athlete::profile::AthleteProfile;
use crate::dashboard::Dashboard;
use crate::state::athletes_state::AthletesState;
use crate::state::subscriptions_state::SubscriptionsState;
use chrono::{DateTime, Utc};
use dto::athlete::Athlete;
use dto::subscription::Subscription;
use log::debug;

pub mod athletes_state;
pub mod subscriptions_state;

pub type Clock = fn() -> DateTime<Utc>;

/// Holds the athletes and subscriptions collections along with what is derived from them.
/// Collections are only changed through the methods below,
/// each of which recomputes the [Dashboard] right away.
#[derive(Debug)]
pub struct AppState {
    athletes: AthletesState,
    subscriptions: SubscriptionsState,
    dashboard: Dashboard,
    clock: Clock,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_clock(Utc::now)
    }
}

impl AppState {
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            athletes: AthletesState::default(),
            subscriptions: SubscriptionsState::default(),
            dashboard: Dashboard::default(),
            clock,
        }
    }

    pub fn athletes(&self) -> &AthletesState {
        &self.athletes
    }

    pub fn subscriptions(&self) -> &SubscriptionsState {
        &self.subscriptions
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    pub fn athlete_profile(&self, athlete_id: &str) -> Option<AthleteProfile> {
        self.athletes
            .get(athlete_id)
            .map(|athlete| AthleteProfile::compute(athlete, &self.subscriptions, &self.now()))
    }

    // region Athletes
    pub fn set_athletes(&mut self, athletes: Vec<Athlete>) {
        self.athletes.replace_all(athletes);
        self.recompute();
    }

    pub fn add_athlete(&mut self, athlete: Athlete) {
        self.athletes.add(athlete);
        self.recompute();
    }

    /// Replace the athlete with the same identifier. Returns whether it was known.
    pub fn update_athlete(&mut self, athlete: Athlete) -> bool {
        let updated = self.athletes.update(athlete);
        self.recompute();
        updated
    }

    /// Returns whether the athlete was known.
    pub fn remove_athlete(&mut self, athlete_id: &str) -> bool {
        let removed = self.athletes.remove(athlete_id);
        self.recompute();
        removed
    }
    // endregion

    // region Subscriptions
    pub fn set_subscriptions(&mut self, subscriptions: Vec<Subscription>) {
        self.subscriptions.replace_all(subscriptions);
        self.recompute();
    }

    /// Add a subscription, which supersedes any previous subscription of the same athlete.
    pub fn add_subscription(&mut self, subscription: Subscription) {
        self.subscriptions.add_for_athlete(subscription);
        self.recompute();
    }

    /// Replace the subscription with the same identifier. Returns whether it was known.
    pub fn update_subscription(&mut self, subscription: Subscription) -> bool {
        let updated = self.subscriptions.update(subscription);
        self.recompute();
        updated
    }
    // endregion

    /// Recompute derived values, e.g. once time has passed.
    pub fn refresh(&mut self) {
        self.recompute();
    }

    fn recompute(&mut self) {
        let now = self.now();
        self.dashboard = Dashboard::compute(&self.athletes, &self.subscriptions, &now);
        debug!(
            "Dashboard recomputed [athletes: {}, subscriptions: {}]",
            self.athletes.len(),
            self.subscriptions.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use dto::plan_type::PlanType;

    fn fixed_now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-06-15T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn state() -> AppState {
        AppState::with_clock(fixed_now)
    }

    #[test]
    fn new_state_should_be_empty() {
        let state = state();
        assert!(state.athletes().is_empty());
        assert!(state.subscriptions().is_empty());
        assert_eq!(&Dashboard::default(), state.dashboard());
    }

    #[test]
    fn dashboard_should_follow_athletes_changes() {
        let mut state = state();

        state.set_athletes(vec![
            Athlete::new_test_with_certificate("1", None),
            Athlete::new_test_with_certificate("2", Some(fixed_now() + Duration::days(1))),
        ]);
        assert_eq!(2, *state.dashboard().athletes_count());
        assert_eq!(1, state.dashboard().athlete_alerts().without_medical_certificate().len());

        state.add_athlete(Athlete::new_test_with_certificate("3", None));
        assert_eq!(3, *state.dashboard().athletes_count());
        assert_eq!(2, state.dashboard().athlete_alerts().without_medical_certificate().len());

        assert!(state.update_athlete(Athlete::new_test_with_certificate(
            "2",
            Some(fixed_now() - Duration::days(1))
        )));
        assert_eq!(1, state.dashboard().athlete_alerts().expired_medical_certificate().len());

        assert!(state.remove_athlete("1"));
        assert!(!state.remove_athlete("1"));
        assert_eq!(2, *state.dashboard().athletes_count());
        assert_eq!(1, state.dashboard().athlete_alerts().without_medical_certificate().len());
    }

    #[test]
    fn dashboard_should_follow_subscriptions_changes() {
        let mut state = state();
        state.set_athletes(vec![Athlete::new_test("1", "Mario", "Rossi")]);

        state.set_subscriptions(vec![Subscription::new_test(
            "a",
            "1",
            PlanType::Month,
            fixed_now() - Duration::days(2),
            80.0,
            Some(fixed_now()),
        )]);
        assert_eq!(1, *state.dashboard().subscription_stats().expired());
        assert_eq!("Mario Rossi", state.dashboard().expired_subscriptions()[0].athlete_name());

        state.add_subscription(Subscription::new_test(
            "b",
            "1",
            PlanType::Quarterly,
            fixed_now() + Duration::days(80),
            210.0,
            Some(fixed_now()),
        ));
        assert_eq!(1, state.subscriptions().len());
        assert_eq!(0, *state.dashboard().subscription_stats().expired());
        assert_eq!(1, *state.dashboard().subscription_stats().active_quarterly());
        assert_eq!(210.0, *state.dashboard().subscription_stats().month_earnings());
    }

    #[test]
    fn expired_subscription_names_should_follow_athletes_changes() {
        let mut state = state();
        state.set_subscriptions(vec![Subscription::new_test(
            "a",
            "1",
            PlanType::Month,
            fixed_now() - Duration::days(2),
            80.0,
            None,
        )]);
        assert_eq!(
            "Nessun atleta trovato",
            state.dashboard().expired_subscriptions()[0].athlete_name()
        );

        state.add_athlete(Athlete::new_test("1", "Anna", "Bianchi"));
        assert_eq!("Anna Bianchi", state.dashboard().expired_subscriptions()[0].athlete_name());
    }

    #[test]
    fn should_build_profile_of_known_athlete_only() {
        let mut state = state();
        state.set_athletes(vec![Athlete::new_test("1", "Anna", "Bianchi")]);

        assert!(state.athlete_profile("1").is_some());
        assert_eq!(None, state.athlete_profile("2"));
    }
}
