use chrono::{DateTime, Utc};
use derive_getters::Getters;
use dto::athlete::Athlete;

/// Athletes requiring attention because of their medical certificate.
#[derive(Debug, Default, Getters, PartialEq, Clone)]
pub struct AthleteAlerts {
    without_medical_certificate: Vec<Athlete>,
    expired_medical_certificate: Vec<Athlete>,
}

impl AthleteAlerts {
    pub fn compute(athletes: &[Athlete], now: &DateTime<Utc>) -> Self {
        Self {
            without_medical_certificate: athletes_without_medical_certificate(athletes)
                .into_iter()
                .cloned()
                .collect(),
            expired_medical_certificate: athletes_with_expired_medical_certificate(athletes, now)
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}

pub fn athletes_without_medical_certificate(athletes: &[Athlete]) -> Vec<&Athlete> {
    athletes
        .iter()
        .filter(|athlete| !athlete.medical_certificate())
        .collect()
}

/// Athletes holding a certificate whose expiration is strictly before `now`.
pub fn athletes_with_expired_medical_certificate<'a>(
    athletes: &'a [Athlete],
    now: &DateTime<Utc>,
) -> Vec<&'a Athlete> {
    athletes
        .iter()
        .filter(|athlete| {
            *athlete.medical_certificate()
                && athlete
                    .medical_certificate_exp()
                    .is_some_and(|expiration| expiration < *now)
        })
        .collect()
}
