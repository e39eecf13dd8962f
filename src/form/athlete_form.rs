use crate::athlete::age::category_from_birth_date;
use crate::athlete::belts;
use crate::compliance::compliance_expiration;
use crate::form::engine::{Form, FormValues};
use crate::form::error::FormError;
use crate::form::error::FormError::{InvalidValue, WrongRegex};
use crate::form::field::{FieldConfig, FieldKind, SelectOption};
use crate::tools::log_error_and_return;
use chrono::{DateTime, Months, NaiveDate, Utc};
use dto::athlete::{Athlete, AthleteDetails};
use dto::belt::Belt;
use dto::category::AthleteCategory;
use dto::date_format::{DATE_FORMAT, parse_date, start_of_day};
use dto::gender::Gender;
use dto::insurance_type::InsuranceType;
use log::debug;
use regex::Regex;
use std::str::FromStr;

pub const NAME: &str = "name";
pub const SURNAME: &str = "surname";
pub const BIRTH_DATE: &str = "birthDate";
pub const FISCAL_CODE: &str = "fiscalCode";
pub const GENDER: &str = "gender";
pub const CATEGORY: &str = "type";
pub const BELT: &str = "belt";
pub const EMAIL: &str = "email";
pub const PHONE_NUMBER: &str = "phoneNumber";
pub const MEDICAL_CERTIFICATE_RELEASE: &str = "medicalCertificateRelease";
pub const INSURANCE_TYPE: &str = "ensuranceType";
pub const INSURANCE_START: &str = "ensuranceStart";

const FISCAL_CODE_LENGTH: usize = 16;
const EMAIL_PATTERN: &str = r"\S+@\S+\.\S+";
const PHONE_NUMBER_PATTERN: &str = r"^[\+]?[0-9\s\-\(\)]{10,}$";

#[derive(Debug, Clone, PartialEq)]
pub enum AthleteFormMode {
    Create,
    Edit(String),
}

/// Form creating or editing an athlete.
/// The category follows the birth date, and the belt is reset whenever the category may change.
pub struct AthleteForm {
    form: Form,
    mode: AthleteFormMode,
    today: NaiveDate,
}

impl AthleteForm {
    pub fn new(today: NaiveDate) -> Result<Self, FormError> {
        Ok(Self {
            form: Form::new(build_fields(today)?),
            mode: AthleteFormMode::Create,
            today,
        })
    }

    /// Form pre-filled with a known athlete.
    /// Release and start dates are rebuilt from the stored expirations.
    pub fn edit(athlete: &Athlete, today: NaiveDate) -> Result<Self, FormError> {
        let mut athlete_form = Self {
            form: Form::new(build_fields(today)?).with_initial_values(values_from_athlete(athlete)),
            mode: AthleteFormMode::Edit(athlete.id().to_owned()),
            today,
        };
        athlete_form.refresh_belt_options();
        Ok(athlete_form)
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn mode(&self) -> &AthleteFormMode {
        &self.mode
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            AthleteFormMode::Create => "Aggiungi Atleta",
            AthleteFormMode::Edit(_) => "Aggiorna Atleta",
        }
    }

    /// Update a field, along with the fields depending on it.
    pub fn change(&mut self, name: &str, value: &str) {
        self.form.update_value(name, value);

        match name {
            BIRTH_DATE => {
                let category = parse_date(value)
                    .and_then(|birth_date| category_from_birth_date(&birth_date, &self.today));
                if let Some(category) = category {
                    debug!("Category deduced from birth date [category: {category:?}]");
                    self.form.update_value(CATEGORY, category.value());
                    self.form.update_value(BELT, "");
                    self.refresh_belt_options();
                }
            }
            CATEGORY => {
                self.form.update_value(BELT, "");
                self.refresh_belt_options();
            }
            _ => {}
        }
    }

    pub fn category(&self) -> Option<AthleteCategory> {
        AthleteCategory::from_str(self.form.value(CATEGORY)).ok()
    }

    /// Belts that can be picked, none until a category is chosen.
    pub fn belt_options(&self) -> Vec<Belt> {
        self.category()
            .map(|category| belts::belt_options(Some(&category)))
            .unwrap_or_default()
    }

    pub fn validate(&mut self) -> bool {
        self.form.validate()
    }

    /// Validate the form, then hand the athlete built from it to `handler`.
    pub async fn submit<F, Fut, T, E>(&mut self, handler: F) -> Result<T, E>
    where
        F: FnOnce(AthleteDetails) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: From<FormError>,
    {
        let today = self.today;
        self.form
            .submit(|values| async move {
                let details = athlete_details_from_values(&values, &today)?;
                handler(details).await
            })
            .await
    }

    fn refresh_belt_options(&mut self) {
        let options = self
            .belt_options()
            .iter()
            .map(|belt| SelectOption::new(belt.value(), belt.label()))
            .collect();
        self.form.set_field_options(BELT, options);
    }
}

fn build_fields(today: NaiveDate) -> Result<Vec<FieldConfig>, FormError> {
    let email_regex = Regex::new(EMAIL_PATTERN).map_err(log_error_and_return(WrongRegex))?;
    let phone_number_regex =
        Regex::new(PHONE_NUMBER_PATTERN).map_err(log_error_and_return(WrongRegex))?;

    Ok(vec![
        FieldConfig::new(NAME, FieldKind::Text, "Nome")
            .mandatory()
            .with_validator(|value| min_length(value, "Nome deve avere almeno 2 caratteri")),
        FieldConfig::new(SURNAME, FieldKind::Text, "Cognome")
            .mandatory()
            .with_validator(|value| min_length(value, "Cognome deve avere almeno 2 caratteri")),
        FieldConfig::new(BIRTH_DATE, FieldKind::Date, "Data di nascita")
            .with_validator(move |value| not_after_today(value, &today)),
        FieldConfig::new(FISCAL_CODE, FieldKind::Text, "Codice Fiscale").with_validator(|value| {
            (value.chars().count() != FISCAL_CODE_LENGTH)
                .then(|| "Il Codice Fiscale deve essere lungo 16 caratteri".to_owned())
        }),
        FieldConfig::new(GENDER, FieldKind::Select, "Sesso").with_options(
            Gender::ALL
                .iter()
                .map(|gender| SelectOption::new(gender.value(), gender.label()))
                .collect(),
        ),
        FieldConfig::new(CATEGORY, FieldKind::Select, "Tipologia")
            .mandatory()
            .with_options(
                AthleteCategory::ALL
                    .iter()
                    .map(|category| SelectOption::new(category.value(), category.label()))
                    .collect(),
            ),
        FieldConfig::new(BELT, FieldKind::Select, "Cintura").mandatory(),
        FieldConfig::new(EMAIL, FieldKind::Email, "Email")
            .mandatory()
            .with_validator(move |value| {
                (!email_regex.is_match(value)).then(|| "Email non valida".to_owned())
            }),
        FieldConfig::new(PHONE_NUMBER, FieldKind::Text, "Numero di telefono")
            .mandatory()
            .with_validator(move |value| {
                (!phone_number_regex.is_match(value))
                    .then(|| "Numero di telefono non valido".to_owned())
            }),
        FieldConfig::new(
            MEDICAL_CERTIFICATE_RELEASE,
            FieldKind::Date,
            "Data rilascio certificato",
        )
        .with_validator(valid_date),
        FieldConfig::new(INSURANCE_TYPE, FieldKind::Select, "Tipologia Assicurazione")
            .mandatory()
            .with_options(
                InsuranceType::ALL
                    .iter()
                    .map(|insurance_type| {
                        SelectOption::new(insurance_type.value(), insurance_type.label())
                    })
                    .collect(),
            ),
        FieldConfig::new(
            INSURANCE_START,
            FieldKind::Date,
            "Data attivazione assicurazione",
        )
        .mandatory()
        .with_validator(valid_date),
    ])
}

fn min_length(value: &str, message: &str) -> Option<String> {
    (value.chars().count() < 2).then(|| message.to_owned())
}

fn valid_date(value: &str) -> Option<String> {
    parse_date(value)
        .is_none()
        .then(|| "Data inserita non valida".to_owned())
}

pub(super) fn not_after_today(value: &str, today: &NaiveDate) -> Option<String> {
    parse_date(value)
        .is_none_or(|date| date > *today)
        .then(|| "Data inserita non valida".to_owned())
}

fn values_from_athlete(athlete: &Athlete) -> FormValues {
    let format_date = |date: &NaiveDate| date.format(DATE_FORMAT).to_string();
    let release_date = |expiration: &Option<DateTime<Utc>>| {
        expiration
            .and_then(|expiration| expiration.date_naive().checked_sub_months(Months::new(12)))
            .map(|date| format_date(&date))
            .unwrap_or_default()
    };

    [
        (NAME, athlete.name().to_owned()),
        (SURNAME, athlete.surname().to_owned()),
        (BIRTH_DATE, athlete.birth_date().as_ref().map(format_date).unwrap_or_default()),
        (FISCAL_CODE, athlete.fiscal_code().to_owned()),
        (GENDER, athlete.gender().map(|gender| gender.value().to_owned()).unwrap_or_default()),
        (CATEGORY, athlete.category().value().to_owned()),
        (BELT, athlete.belt().value().to_owned()),
        (EMAIL, athlete.email().to_owned()),
        (PHONE_NUMBER, athlete.phone_number().to_owned()),
        (MEDICAL_CERTIFICATE_RELEASE, release_date(athlete.medical_certificate_exp())),
        (
            INSURANCE_TYPE,
            athlete
                .insurance_type()
                .map(|insurance_type| insurance_type.value().to_owned())
                .unwrap_or_default(),
        ),
        (INSURANCE_START, release_date(athlete.insurance_exp())),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_owned(), value))
    .collect()
}

/// Build the athlete record out of validated values.
/// A known birth date decides the category; the belt must belong to that category.
/// Certificate and insurance expire one year after their release or start date.
pub fn athlete_details_from_values(
    values: &FormValues,
    today: &NaiveDate,
) -> Result<AthleteDetails, FormError> {
    let value = |name: &str| values.get(name).map(|value| value.trim()).unwrap_or_default();
    let optional_date = |name: &'static str| -> Result<Option<NaiveDate>, FormError> {
        match value(name) {
            "" => Ok(None),
            date => parse_date(date).map(Some).ok_or(InvalidValue(name)),
        }
    };
    let expiration = |date: Option<NaiveDate>, name: &'static str| {
        date.map(|date| {
            compliance_expiration(date)
                .map(start_of_day)
                .ok_or(InvalidValue(name))
        })
        .transpose()
    };

    let birth_date = optional_date(BIRTH_DATE)?;
    let category = match birth_date {
        Some(birth_date) => category_from_birth_date(&birth_date, today),
        None => AthleteCategory::from_str(value(CATEGORY)).ok(),
    }
    .ok_or(InvalidValue(CATEGORY))?;

    let belt = Belt::from_str(value(BELT))
        .ok()
        .filter(|belt| belt.is_valid_for(&category))
        .ok_or(InvalidValue(BELT))?;

    let gender = match value(GENDER) {
        "" => None,
        gender => Some(Gender::from_str(gender).map_err(|_| InvalidValue(GENDER))?),
    };
    let insurance_type =
        InsuranceType::from_str(value(INSURANCE_TYPE)).map_err(|_| InvalidValue(INSURANCE_TYPE))?;
    let insurance_start = optional_date(INSURANCE_START)?.ok_or(InvalidValue(INSURANCE_START))?;

    Ok(AthleteDetails::new(
        value(NAME).to_owned(),
        value(SURNAME).to_owned(),
        birth_date,
        value(FISCAL_CODE).to_uppercase(),
        gender,
        value(EMAIL).to_owned(),
        value(PHONE_NUMBER).to_owned(),
        category,
        belt,
        expiration(optional_date(MEDICAL_CERTIFICATE_RELEASE)?, MEDICAL_CERTIFICATE_RELEASE)?,
        Some(insurance_type),
        expiration(Some(insurance_start), INSURANCE_START)?,
    ))
}
