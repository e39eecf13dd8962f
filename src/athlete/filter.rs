use crate::tools::normalize;
use derive_getters::Getters;
use dto::athlete::Athlete;
use dto::belt::Belt;
use dto::category::AthleteCategory;

/// Criteria of the athletes list. Every criterion is optional; an empty filter keeps everyone.
#[derive(Debug, Default, Getters, PartialEq, Clone)]
pub struct AthleteFilter {
    search: Option<String>,
    category: Option<AthleteCategory>,
    belt: Option<Belt>,
}

impl AthleteFilter {
    pub fn new(
        search: Option<String>,
        category: Option<AthleteCategory>,
        belt: Option<Belt>,
    ) -> Self {
        Self {
            search,
            category,
            belt,
        }
    }

    /// Keep the athletes whose "name surname" contains the search text
    /// (ignoring case and accents) and who match the category and belt, if any.
    pub fn apply<'a>(&self, athletes: &'a [Athlete]) -> Vec<&'a Athlete> {
        let search = self
            .search
            .as_deref()
            .map(normalize)
            .filter(|search| !search.is_empty());

        athletes
            .iter()
            .filter(|athlete| match &search {
                Some(search) => normalize(&athlete.full_name()).contains(search.as_str()),
                None => true,
            })
            .filter(|athlete| {
                self.category
                    .is_none_or(|category| *athlete.category() == category)
            })
            .filter(|athlete| self.belt.is_none_or(|belt| *athlete.belt() == belt))
            .collect()
    }
}
