use dto::athlete::Athlete;
use std::ops::Deref;

#[derive(Debug, Default, Clone)]
pub struct AthletesState {
    athletes: Vec<Athlete>,
}

impl AthletesState {
    pub fn get(&self, athlete_id: &str) -> Option<&Athlete> {
        self.athletes.iter().find(|athlete| athlete.id() == athlete_id)
    }

    pub(super) fn replace_all(&mut self, athletes: Vec<Athlete>) {
        self.athletes = athletes;
    }

    pub(super) fn add(&mut self, athlete: Athlete) {
        self.athletes.push(athlete);
    }

    pub(super) fn update(&mut self, athlete: Athlete) -> bool {
        match self.athletes.iter_mut().find(|known| known.id() == athlete.id()) {
            Some(known) => {
                *known = athlete;
                true
            }
            None => false,
        }
    }

    pub(super) fn remove(&mut self, athlete_id: &str) -> bool {
        let count = self.athletes.len();
        self.athletes.retain(|athlete| athlete.id() != athlete_id);
        count != self.athletes.len()
    }
}

impl Deref for AthletesState {
    type Target = [Athlete];

    fn deref(&self) -> &Self::Target {
        &self.athletes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_update_known_athlete_only() {
        let mut state = AthletesState::default();
        state.add(Athlete::new_test("1", "Mario", "Rossi"));

        assert!(state.update(Athlete::new_test("1", "Luigi", "Rossi")));
        assert!(!state.update(Athlete::new_test("2", "Anna", "Bianchi")));

        assert_eq!(1, state.len());
        assert_eq!("Luigi", state.get("1").unwrap().name());
        assert!(state.get("2").is_none());
    }
}
