use dto::athlete::Athlete;
use std::collections::HashMap;

/// Shown when a record refers to an athlete that is not known (anymore).
pub const UNKNOWN_ATHLETE_NAME: &str = "Nessun atleta trovato";

/// Index of athletes by identifier, to join subscriptions with their owner.
pub struct AthleteNames<'a> {
    athletes_by_id: HashMap<&'a str, &'a Athlete>,
}

impl<'a> AthleteNames<'a> {
    pub fn new(athletes: &'a [Athlete]) -> Self {
        Self {
            athletes_by_id: athletes
                .iter()
                .map(|athlete| (athlete.id().as_str(), athlete))
                .collect(),
        }
    }

    pub fn get(&self, athlete_id: &str) -> Option<&'a Athlete> {
        self.athletes_by_id.get(athlete_id).copied()
    }

    /// Full name of the athlete, or [UNKNOWN_ATHLETE_NAME].
    pub fn full_name(&self, athlete_id: &str) -> String {
        self.get(athlete_id)
            .map(|athlete| athlete.full_name())
            .unwrap_or_else(|| UNKNOWN_ATHLETE_NAME.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_resolve_full_name() {
        let athletes = vec![
            Athlete::new_test("1", "Mario", "Rossi"),
            Athlete::new_test("2", "Anna", "Bianchi"),
        ];
        let names = AthleteNames::new(&athletes);

        assert_eq!("Anna Bianchi", names.full_name("2"));
        assert_eq!(Some(&athletes[0]), names.get("1"));
    }

    #[test]
    fn should_fall_back_to_placeholder() {
        let names = AthleteNames::new(&[]);

        assert_eq!(UNKNOWN_ATHLETE_NAME, names.full_name("1"));
        assert_eq!(None, names.get("1"));
    }
}
