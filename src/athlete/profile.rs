use crate::athlete::age::athlete_age;
use crate::compliance::{ComplianceStatus, compute_compliance_status};
use crate::subscription::latest::latest_subscription;
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use dto::athlete::Athlete;
use dto::subscription::Subscription;

/// Everything the profile page of an athlete shows besides the raw record.
#[derive(Debug, Getters, PartialEq, Clone)]
pub struct AthleteProfile {
    age: Option<u32>,
    medical_certificate: ComplianceStatus,
    insurance: ComplianceStatus,
    subscription: ComplianceStatus,
    last_subscription: Option<Subscription>,
}

impl AthleteProfile {
    pub fn compute(
        athlete: &Athlete,
        subscriptions: &[Subscription],
        now: &DateTime<Utc>,
    ) -> Self {
        let last_subscription = latest_subscription(subscriptions, athlete.id()).cloned();
        let medical_certificate_exp = athlete
            .medical_certificate_exp()
            .as_ref()
            .filter(|_| *athlete.medical_certificate());
        let insurance_exp = athlete
            .insurance_exp()
            .as_ref()
            .filter(|_| *athlete.insurance());

        Self {
            age: athlete_age(athlete, &now.date_naive()),
            medical_certificate: compute_compliance_status(medical_certificate_exp, now),
            insurance: compute_compliance_status(insurance_exp, now),
            subscription: compute_compliance_status(
                last_subscription
                    .as_ref()
                    .and_then(|subscription| subscription.expiration().as_ref()),
                now,
            ),
            last_subscription,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use dto::athlete::tests::{ATHLETE_ID, get_expected_athlete};
    use dto::plan_type::PlanType;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-01-20T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn should_compute_profile() {
        let athlete = get_expected_athlete();
        let subscriptions = vec![
            Subscription::new_test("old", ATHLETE_ID, PlanType::Month, now() - Duration::days(40), 80.0, None),
            Subscription::new_test("new", ATHLETE_ID, PlanType::Month, now() + Duration::days(5), 80.0, None),
            Subscription::new_test("other", "2", PlanType::Month, now() + Duration::days(50), 80.0, None),
        ];

        let profile = AthleteProfile::compute(&athlete, &subscriptions, &now());

        assert_eq!(&Some(14), profile.age());
        assert_eq!(&ComplianceStatus::Active, profile.medical_certificate());
        assert_eq!(&ComplianceStatus::Active, profile.insurance());
        assert_eq!(&ComplianceStatus::Active, profile.subscription());
        assert_eq!("new", profile.last_subscription().as_ref().unwrap().id());
    }

    #[test]
    fn should_report_absent_and_expired_statuses() {
        let athlete = Athlete::new_test_with_certificate("1", Some(now() - Duration::days(1)));

        let profile = AthleteProfile::compute(&athlete, &[], &now());

        assert_eq!(&None, profile.age());
        assert_eq!(&ComplianceStatus::Expired, profile.medical_certificate());
        assert_eq!(&ComplianceStatus::Absent, profile.insurance());
        assert_eq!(&ComplianceStatus::Absent, profile.subscription());
        assert_eq!("Assente", profile.subscription().label(false));
    }
}
