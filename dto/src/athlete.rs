use crate::belt::Belt;
use crate::category::AthleteCategory;
use crate::date_format::{option_naive_date, option_utc_datetime};
use crate::gender::Gender;
use crate::insurance_type::InsuranceType;
use chrono::{DateTime, NaiveDate, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Everything the backend stores about an athlete, except its identifier.
/// This is the payload sent when creating or editing an athlete.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AthleteDetails {
    name: String,
    surname: String,
    #[serde(default, with = "option_naive_date")]
    birth_date: Option<NaiveDate>,
    #[serde(default)]
    fiscal_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gender: Option<Gender>,
    #[serde(default)]
    email: String,
    #[serde(default)]
    phone_number: String,
    #[serde(rename = "type")]
    category: AthleteCategory,
    belt: Belt,
    #[serde(default)]
    medical_certificate: bool,
    #[serde(default, with = "option_utc_datetime")]
    medical_certificate_exp: Option<DateTime<Utc>>,
    #[serde(rename = "ensurance", default)]
    insurance: bool,
    #[serde(rename = "ensuranceType", default)]
    insurance_type: Option<InsuranceType>,
    #[serde(rename = "ensuranceExp", default, with = "option_utc_datetime")]
    insurance_exp: Option<DateTime<Utc>>,
}

impl AthleteDetails {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        surname: String,
        birth_date: Option<NaiveDate>,
        fiscal_code: String,
        gender: Option<Gender>,
        email: String,
        phone_number: String,
        category: AthleteCategory,
        belt: Belt,
        medical_certificate_exp: Option<DateTime<Utc>>,
        insurance_type: Option<InsuranceType>,
        insurance_exp: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            name,
            surname,
            birth_date,
            fiscal_code,
            gender,
            email,
            phone_number,
            category,
            belt,
            medical_certificate: medical_certificate_exp.is_some(),
            medical_certificate_exp,
            insurance: insurance_exp.is_some(),
            insurance_type,
            insurance_exp,
        }
    }

    /// `name surname`, as displayed everywhere in the application.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}

/// An athlete as stored by the backend.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct Athlete {
    #[serde(rename = "_id")]
    id: String,
    #[serde(flatten)]
    details: AthleteDetails,
}

impl Athlete {
    pub fn new(id: String, details: AthleteDetails) -> Self {
        Self { id, details }
    }
}

impl Deref for Athlete {
    type Target = AthleteDetails;

    fn deref(&self) -> &Self::Target {
        &self.details
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;
    use crate::date_format::start_of_day;

    pub const ATHLETE_ID: &str = "66b1f0c2a4e5d3b2c1a09f01";
    pub const ATHLETE_NAME: &str = "Mario";
    pub const ATHLETE_SURNAME: &str = "Rossi";

    impl AthleteDetails {
        pub fn new_test(
            name: &str,
            surname: &str,
            category: AthleteCategory,
            medical_certificate_exp: Option<DateTime<Utc>>,
        ) -> Self {
            AthleteDetails {
                name: name.to_owned(),
                surname: surname.to_owned(),
                birth_date: None,
                fiscal_code: "".to_owned(),
                gender: None,
                email: "".to_owned(),
                phone_number: "".to_owned(),
                category,
                belt: Belt::White,
                medical_certificate: medical_certificate_exp.is_some(),
                medical_certificate_exp,
                insurance: false,
                insurance_type: None,
                insurance_exp: None,
            }
        }
    }

    impl Athlete {
        pub fn new_test(id: &str, name: &str, surname: &str) -> Self {
            Athlete::new(
                id.to_owned(),
                AthleteDetails::new_test(name, surname, AthleteCategory::Adult, None),
            )
        }

        pub fn new_test_with_certificate(
            id: &str,
            medical_certificate_exp: Option<DateTime<Utc>>,
        ) -> Self {
            Athlete::new(
                id.to_owned(),
                AthleteDetails::new_test(
                    ATHLETE_NAME,
                    ATHLETE_SURNAME,
                    AthleteCategory::Adult,
                    medical_certificate_exp,
                ),
            )
        }
    }

    pub fn get_expected_athlete() -> Athlete {
        Athlete {
            id: ATHLETE_ID.to_owned(),
            details: AthleteDetails {
                name: ATHLETE_NAME.to_owned(),
                surname: ATHLETE_SURNAME.to_owned(),
                birth_date: NaiveDate::from_ymd_opt(2010, 6, 15),
                fiscal_code: "RSSMRA10H15H501Z".to_owned(),
                gender: Some(Gender::Male),
                email: "mario.rossi@example.com".to_owned(),
                phone_number: "+39 333 123 4567".to_owned(),
                category: AthleteCategory::Kid,
                belt: Belt::GreyWhite,
                medical_certificate: true,
                medical_certificate_exp: NaiveDate::from_ymd_opt(2025, 9, 1).map(start_of_day),
                insurance: true,
                insurance_type: Some(InsuranceType::A),
                insurance_exp: NaiveDate::from_ymd_opt(2025, 9, 1).map(start_of_day),
            },
        }
    }

    pub fn get_athlete_as_json() -> String {
        format!(
            r#"{{
                "_id": "{ATHLETE_ID}",
                "name": "{ATHLETE_NAME}",
                "surname": "{ATHLETE_SURNAME}",
                "birthDate": "2010-06-15T00:00:00.000Z",
                "fiscalCode": "RSSMRA10H15H501Z",
                "gender": "M",
                "email": "mario.rossi@example.com",
                "phoneNumber": "+39 333 123 4567",
                "type": "kids",
                "belt": "greywhite",
                "subscriptionId": "",
                "medicalCertificate": true,
                "medicalCertificateExp": "2025-09-01T00:00:00.000Z",
                "ensurance": true,
                "ensuranceType": "A",
                "ensuranceExp": "2025-09-01T00:00:00.000Z",
                "__v": 0
            }}"#
        )
    }

    #[test]
    fn should_deserialize_athlete_from_backend() {
        let athlete: Athlete = serde_json::from_str(&get_athlete_as_json()).unwrap();
        assert_eq!(get_expected_athlete(), athlete);
        assert_eq!("Mario Rossi", athlete.full_name());
    }

    #[test]
    fn should_deserialize_athlete_without_certificate() {
        let json = r#"{
            "_id": "1",
            "name": "Anna",
            "surname": "Bianchi",
            "type": "adult",
            "belt": "blue",
            "medicalCertificate": false,
            "medicalCertificateExp": null
        }"#;
        let athlete: Athlete = serde_json::from_str(json).unwrap();
        assert!(!athlete.medical_certificate());
        assert_eq!(&None, athlete.medical_certificate_exp());
        assert_eq!(&None, athlete.birth_date());
    }

    #[test]
    fn should_serialize_details_with_backend_names() {
        let value = serde_json::to_value(get_expected_athlete().details()).unwrap();
        assert_eq!("2010-06-15", value["birthDate"]);
        assert_eq!("kid", value["type"]);
        assert_eq!("A", value["ensuranceType"]);
        assert_eq!("2025-09-01T00:00:00.000Z", value["ensuranceExp"]);
        assert!(value.get("_id").is_none());
    }
}
