use dto::subscription::Subscription;
use std::ops::Deref;

#[derive(Debug, Default, Clone)]
pub struct SubscriptionsState {
    subscriptions: Vec<Subscription>,
}

impl SubscriptionsState {
    pub fn get(&self, subscription_id: &str) -> Option<&Subscription> {
        self.subscriptions.iter().find(|subscription| subscription.id() == subscription_id)
    }

    pub(super) fn replace_all(&mut self, subscriptions: Vec<Subscription>) {
        self.subscriptions = subscriptions;
    }

    /// An athlete holds a single subscription: a new one drops the previous ones.
    pub(super) fn add_for_athlete(&mut self, subscription: Subscription) {
        self.subscriptions.retain(|known| known.athlete_id() != subscription.athlete_id());
        self.subscriptions.push(subscription);
    }

    pub(super) fn update(&mut self, subscription: Subscription) -> bool {
        match self.subscriptions.iter_mut().find(|known| known.id() == subscription.id()) {
            Some(known) => {
                *known = subscription;
                true
            }
            None => false,
        }
    }
}

impl Deref for SubscriptionsState {
    type Target = [Subscription];

    fn deref(&self) -> &Self::Target {
        &self.subscriptions
    }
}
