use chrono::{Datelike, NaiveDate};
use dto::athlete::AthleteDetails;
use dto::category::AthleteCategory;

/// Athletes are adults from that age on.
pub const ADULT_AGE: u32 = 16;

/// Calendar age at `as_of`: a year is only counted once the birthday has been reached.
/// No age can be computed for someone born after `as_of`.
pub fn age(birth_date: &NaiveDate, as_of: &NaiveDate) -> Option<u32> {
    if birth_date > as_of {
        return None;
    }

    let mut age = as_of.year() - birth_date.year();
    if (as_of.month(), as_of.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }

    u32::try_from(age).ok()
}

pub fn category_from_age(age: u32) -> AthleteCategory {
    if age >= ADULT_AGE {
        AthleteCategory::Adult
    } else {
        AthleteCategory::Kid
    }
}

pub fn category_from_birth_date(birth_date: &NaiveDate, as_of: &NaiveDate) -> Option<AthleteCategory> {
    age(birth_date, as_of).map(category_from_age)
}

/// Age of an athlete, if their birth date is known.
pub fn athlete_age(athlete: &AthleteDetails, as_of: &NaiveDate) -> Option<u32> {
    athlete
        .birth_date()
        .as_ref()
        .and_then(|birth_date| age(birth_date, as_of))
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[parameterized(
        as_of = {date(2024, 6, 14), date(2024, 6, 15), date(2024, 6, 16), date(2024, 1, 1), date(2024, 12, 31), date(2010, 6, 15)},
        expected = {Some(13), Some(14), Some(14), Some(13), Some(14), Some(0)}
    )]
    fn should_compute_calendar_age(as_of: NaiveDate, expected: Option<u32>) {
        assert_eq!(expected, age(&date(2010, 6, 15), &as_of));
    }

    #[test]
    fn should_not_compute_age_before_birth() {
        assert_eq!(None, age(&date(2010, 6, 15), &date(2010, 6, 14)));
    }

    #[test]
    fn leap_day_birthday_should_be_reached_on_first_of_march() {
        let birth_date = date(2008, 2, 29);
        assert_eq!(Some(15), age(&birth_date, &date(2024, 2, 28)));
        assert_eq!(Some(16), age(&birth_date, &date(2024, 2, 29)));
        assert_eq!(Some(16), age(&birth_date, &date(2025, 2, 28)));
        assert_eq!(Some(17), age(&birth_date, &date(2025, 3, 1)));
    }

    #[parameterized(
        age = {0, 15, 16, 40},
        expected = {AthleteCategory::Kid, AthleteCategory::Kid, AthleteCategory::Adult, AthleteCategory::Adult}
    )]
    fn should_compute_category_from_age(age: u32, expected: AthleteCategory) {
        assert_eq!(expected, category_from_age(age));
    }

    #[test]
    fn should_compute_category_from_birth_date() {
        let birth_date = date(2008, 6, 15);
        assert_eq!(
            Some(AthleteCategory::Kid),
            category_from_birth_date(&birth_date, &date(2024, 6, 14))
        );
        assert_eq!(
            Some(AthleteCategory::Adult),
            category_from_birth_date(&birth_date, &date(2024, 6, 15))
        );
        assert_eq!(None, category_from_birth_date(&birth_date, &date(2000, 1, 1)));
    }

    #[test]
    fn should_not_compute_age_of_athlete_without_birth_date() {
        let athlete = AthleteDetails::new_test("Anna", "Bianchi", AthleteCategory::Adult, None);
        assert_eq!(None, athlete_age(&athlete, &date(2024, 6, 15)));
    }
}
