use crate::athlete::age::category_from_birth_date;
use crate::athlete::names::AthleteNames;
use crate::form::athlete_form::not_after_today;
use crate::form::engine::{Form, FormValues};
use crate::form::error::FormError;
use crate::form::error::FormError::InvalidValue;
use crate::form::field::{FieldConfig, FieldKind, SelectOption};
use crate::subscription::error::PricingError;
use crate::subscription::expiration::{subscription_expiration, subscription_expiration_instant};
use crate::subscription::pricing::{
    discounted_price, format_amount, list_price, parse_amount, parse_discount,
};
use chrono::NaiveDate;
use derive_getters::Getters;
use dto::athlete::Athlete;
use dto::category::AthleteCategory;
use dto::date_format::{DATE_FORMAT, format_date, parse_date};
use dto::payment_method::PaymentMethod;
use dto::plan_type::PlanType;
use dto::subscription::{Subscription, SubscriptionDetails};
use log::debug;
use std::str::FromStr;

pub const ATHLETE: &str = "athleteId";
pub const START_DATE: &str = "date";
pub const PLAN_TYPE: &str = "type";
pub const AMOUNT: &str = "amount";
pub const PAYMENT_METHOD: &str = "paymentType";
pub const NOTES: &str = "notes";

pub const UNKNOWN_PAYMENT_METHOD: &str = "Nessuna tipologia di pagamento trovata";

#[derive(Debug, Clone, PartialEq)]
pub enum SubscriptionFormMode {
    Create,
    Edit(String),
}

/// What the subscription being filled looks like, blank parts omitted.
#[derive(Debug, Default, Getters, PartialEq, Clone)]
pub struct SubscriptionSummary {
    athlete_name: String,
    plan: String,
    period: String,
    payment_method: String,
    amount: String,
}

/// Form creating or editing a subscription.
/// Picking an athlete loads the prices of their category; picking a plan fills in its price.
/// The discount lives outside the form values and is only applied on conversion.
pub struct SubscriptionForm {
    form: Form,
    mode: SubscriptionFormMode,
    athletes: Vec<Athlete>,
    discount: f64,
    today: NaiveDate,
}

impl SubscriptionForm {
    pub fn new(athletes: &[Athlete], today: NaiveDate) -> Self {
        Self {
            form: Form::new(build_fields(athletes, today)),
            mode: SubscriptionFormMode::Create,
            athletes: athletes.to_vec(),
            discount: 0.0,
            today,
        }
    }

    /// Form with the athlete already picked, e.g. from their profile.
    pub fn for_athlete(athletes: &[Athlete], athlete_id: &str, today: NaiveDate) -> Self {
        let mut subscription_form = Self::new(athletes, today);
        subscription_form.change(ATHLETE, athlete_id);
        subscription_form
    }

    pub fn edit(subscription: &Subscription, athletes: &[Athlete], today: NaiveDate) -> Self {
        let values: FormValues = [
            (ATHLETE, subscription.athlete_id().to_owned()),
            (
                START_DATE,
                subscription
                    .start_date()
                    .map(|date| date.format(DATE_FORMAT).to_string())
                    .unwrap_or_default(),
            ),
            (PLAN_TYPE, subscription.plan_type().value().to_owned()),
            (AMOUNT, format_amount(*subscription.amount())),
            (PAYMENT_METHOD, subscription.payment_method().value().to_owned()),
            (NOTES, subscription.notes().clone().unwrap_or_default()),
        ]
        .into_iter()
        .map(|(name, value)| (name.to_owned(), value))
        .collect();

        let mut subscription_form = Self {
            form: Form::new(build_fields(athletes, today)).with_initial_values(values),
            mode: SubscriptionFormMode::Edit(subscription.id().to_owned()),
            athletes: athletes.to_vec(),
            discount: 0.0,
            today,
        };
        subscription_form.refresh_plan_options();
        subscription_form
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn mode(&self) -> &SubscriptionFormMode {
        &self.mode
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            SubscriptionFormMode::Create => "Aggiungi Abbonamento",
            SubscriptionFormMode::Edit(_) => "Aggiorna Abbonamento",
        }
    }

    pub fn discount(&self) -> f64 {
        self.discount
    }

    /// Set the discount percentage. An invalid one leaves the previous discount in place.
    pub fn set_discount(&mut self, value: &str) -> Result<(), PricingError> {
        self.discount = parse_discount(value)?;
        Ok(())
    }

    /// Update a field, along with the fields depending on it.
    pub fn change(&mut self, name: &str, value: &str) {
        self.form.update_value(name, value);
        if value.is_empty() {
            return;
        }

        match name {
            ATHLETE => {
                self.form.update_value(PLAN_TYPE, "");
                self.form.update_value(AMOUNT, "");
                self.refresh_plan_options();
            }
            PLAN_TYPE => {
                let price = PlanType::from_str(value)
                    .ok()
                    .and_then(|plan_type| self.list_price(&plan_type));
                if let Some(price) = price {
                    debug!("Amount filled with list price [plan: {value}, price: {price}]");
                    self.form.update_value(AMOUNT, &format_amount(price));
                }
            }
            _ => {}
        }
    }

    /// Category of the picked athlete, deduced from the birth date when known.
    pub fn athlete_category(&self) -> Option<AthleteCategory> {
        let athlete_id = self.form.value(ATHLETE);
        let athlete = self.athletes.iter().find(|athlete| athlete.id() == athlete_id)?;
        athlete
            .birth_date()
            .and_then(|birth_date| category_from_birth_date(&birth_date, &self.today))
            .or(Some(*athlete.category()))
    }

    pub fn list_price(&self, plan_type: &PlanType) -> Option<f64> {
        self.athlete_category()
            .map(|category| list_price(&category, plan_type))
    }

    pub fn summary(&self) -> SubscriptionSummary {
        let athlete_id = self.form.value(ATHLETE);
        let plan_type = PlanType::from_str(self.form.value(PLAN_TYPE)).ok();
        let start_date = parse_date(self.form.value(START_DATE));
        let payment_method = self.form.value(PAYMENT_METHOD);

        SubscriptionSummary {
            athlete_name: match athlete_id {
                "" => String::new(),
                athlete_id => AthleteNames::new(&self.athletes).full_name(athlete_id),
            },
            plan: plan_type
                .map(|plan_type| plan_type.label().to_owned())
                .unwrap_or_default(),
            period: start_date
                .zip(plan_type)
                .and_then(|(start_date, plan_type)| {
                    subscription_expiration(&start_date, &plan_type).map(|expiration| {
                        format!("dal {} al {}", format_date(&start_date), format_date(&expiration))
                    })
                })
                .unwrap_or_default(),
            payment_method: match payment_method {
                "" => String::new(),
                payment_method => PaymentMethod::from_str(payment_method)
                    .map(|payment_method| payment_method.label())
                    .unwrap_or(UNKNOWN_PAYMENT_METHOD)
                    .to_owned(),
            },
            amount: parse_amount(self.form.value(AMOUNT))
                .map(|amount| format!("{} €", format_amount(discounted_price(amount, self.discount))))
                .unwrap_or_default(),
        }
    }

    pub fn validate(&mut self) -> bool {
        self.form.validate()
    }

    /// Validate the form, then hand the subscription built from it to `handler`.
    pub async fn submit<F, Fut, T, E>(&mut self, handler: F) -> Result<T, E>
    where
        F: FnOnce(SubscriptionDetails) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: From<FormError>,
    {
        let category = self.athlete_category();
        let discount = self.discount;
        self.form
            .submit(|values| async move {
                let details = subscription_details_from_values(&values, discount, category)?;
                handler(details).await
            })
            .await
    }

    fn refresh_plan_options(&mut self) {
        let options = PlanType::ALL
            .iter()
            .map(|plan_type| {
                let label = match self.list_price(plan_type) {
                    Some(price) => format!("{} - {} €", plan_type.label(), format_amount(price)),
                    None => plan_type.label().to_owned(),
                };
                SelectOption::new(plan_type.value(), label)
            })
            .collect();
        self.form.set_field_options(PLAN_TYPE, options);
    }
}

fn build_fields(athletes: &[Athlete], today: NaiveDate) -> Vec<FieldConfig> {
    vec![
        FieldConfig::new(ATHLETE, FieldKind::Select, "Atleta")
            .mandatory()
            .with_options(
                athletes
                    .iter()
                    .map(|athlete| SelectOption::new(athlete.id().as_str(), athlete.full_name()))
                    .collect(),
            ),
        FieldConfig::new(START_DATE, FieldKind::Date, "Data di inizio")
            .mandatory()
            .with_validator(move |value| not_after_today(value, &today)),
        FieldConfig::new(PLAN_TYPE, FieldKind::Select, "Tipologia di Abbonamento")
            .mandatory()
            .with_options(
                PlanType::ALL
                    .iter()
                    .map(|plan_type| SelectOption::new(plan_type.value(), plan_type.label()))
                    .collect(),
            ),
        FieldConfig::new(AMOUNT, FieldKind::Text, "Importo Finale").with_validator(|value| {
            parse_amount(value)
                .err()
                .map(|_| "Importo non valido".to_owned())
        }),
        FieldConfig::new(PAYMENT_METHOD, FieldKind::Select, "Metodo di pagamento")
            .mandatory()
            .with_options(
                PaymentMethod::ALL
                    .iter()
                    .map(|payment_method| {
                        SelectOption::new(payment_method.value(), payment_method.label())
                    })
                    .collect(),
            ),
        FieldConfig::new(NOTES, FieldKind::TextArea, "Note"),
    ]
}

/// Build the subscription record out of validated values.
/// A blank amount falls back to the list price; the discount is applied when positive.
pub fn subscription_details_from_values(
    values: &FormValues,
    discount: f64,
    category: Option<AthleteCategory>,
) -> Result<SubscriptionDetails, FormError> {
    let value = |name: &str| values.get(name).map(|value| value.trim()).unwrap_or_default();

    let athlete_id = match value(ATHLETE) {
        "" => return Err(InvalidValue(ATHLETE)),
        athlete_id => athlete_id.to_owned(),
    };
    let start_date = parse_date(value(START_DATE)).ok_or(InvalidValue(START_DATE))?;
    let plan_type = PlanType::from_str(value(PLAN_TYPE)).map_err(|_| InvalidValue(PLAN_TYPE))?;
    let payment_method =
        PaymentMethod::from_str(value(PAYMENT_METHOD)).map_err(|_| InvalidValue(PAYMENT_METHOD))?;

    let amount = match value(AMOUNT) {
        "" => category
            .map(|category| list_price(&category, &plan_type))
            .ok_or(InvalidValue(AMOUNT))?,
        amount => parse_amount(amount)?,
    };
    let amount = if discount > 0.0 {
        discounted_price(amount, discount)
    } else {
        amount
    };

    let expiration =
        subscription_expiration_instant(&start_date, &plan_type).ok_or(InvalidValue(START_DATE))?;
    let notes = Some(value(NOTES).to_owned()).filter(|notes| !notes.is_empty());

    Ok(SubscriptionDetails::new(
        athlete_id,
        start_date,
        plan_type,
        amount,
        expiration,
        notes,
        payment_method,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::engine::tests::values;
    use dto::athlete::AthleteDetails;
    use dto::belt::Belt;
    use dto::date_format::start_of_day;
    use dto::subscription::tests::get_expected_subscription;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn athletes() -> Vec<Athlete> {
        let kid = AthleteDetails::new(
            "Luca".to_owned(),
            "Verdi".to_owned(),
            NaiveDate::from_ymd_opt(2014, 4, 2),
            "".to_owned(),
            None,
            "".to_owned(),
            "".to_owned(),
            AthleteCategory::Adult,
            Belt::White,
            None,
            None,
            None,
        );
        vec![
            Athlete::new_test("adult", "Mario", "Rossi"),
            Athlete::new("kid".to_owned(), kid),
        ]
    }

    #[test]
    fn picking_athlete_should_load_category_prices() {
        let mut form = SubscriptionForm::new(&athletes(), today());
        form.change(PLAN_TYPE, "month");
        form.change(AMOUNT, "12");

        form.change(ATHLETE, "kid");

        assert_eq!("", form.form().value(PLAN_TYPE));
        assert_eq!("", form.form().value(AMOUNT));
        let labels: Vec<&str> = form
            .form()
            .field(PLAN_TYPE)
            .unwrap()
            .options()
            .iter()
            .map(|option| option.label().as_str())
            .collect();
        assert_eq!(vec!["Mensile - 60 €", "Trimestrale - 150 €"], labels);
    }

    #[test]
    fn birth_date_should_take_precedence_over_stored_category() {
        let form = SubscriptionForm::for_athlete(&athletes(), "kid", today());
        assert_eq!(Some(AthleteCategory::Kid), form.athlete_category());

        let form = SubscriptionForm::for_athlete(&athletes(), "adult", today());
        assert_eq!(Some(AthleteCategory::Adult), form.athlete_category());
    }

    #[test]
    fn picking_plan_should_fill_amount() {
        let mut form = SubscriptionForm::for_athlete(&athletes(), "adult", today());

        form.change(PLAN_TYPE, "quarterly");
        assert_eq!("210", form.form().value(AMOUNT));

        form.change(PLAN_TYPE, "month");
        assert_eq!("80", form.form().value(AMOUNT));
    }

    #[test]
    fn should_reject_invalid_discount() {
        let mut form = SubscriptionForm::new(&athletes(), today());

        assert_eq!(Ok(()), form.set_discount("10"));
        assert_eq!(
            Err(PricingError::InvalidDiscount("120".to_owned())),
            form.set_discount("120")
        );
        assert_eq!(10.0, form.discount());
    }

    #[test]
    fn should_summarize_subscription() {
        let mut form = SubscriptionForm::for_athlete(&athletes(), "adult", today());
        assert_eq!("Mario Rossi", form.summary().athlete_name());
        assert_eq!("", form.summary().period());

        form.change(PLAN_TYPE, "month");
        form.change(START_DATE, "2024-01-10");
        form.change(PAYMENT_METHOD, "banktransfer");
        form.set_discount("10").unwrap();

        let summary = form.summary();
        assert_eq!("Mensile", summary.plan());
        assert_eq!("dal 10/1/2024 al 15/2/2024", summary.period());
        assert_eq!("Bonifico Bancario", summary.payment_method());
        assert_eq!("72 €", summary.amount());
    }

    #[test]
    fn summary_should_flag_unknown_athlete_and_payment() {
        let mut form = SubscriptionForm::new(&athletes(), today());
        form.change(ATHLETE, "ghost");
        form.change(PAYMENT_METHOD, "bitcoin");

        let summary = form.summary();
        assert_eq!("Nessun atleta trovato", summary.athlete_name());
        assert_eq!(UNKNOWN_PAYMENT_METHOD, summary.payment_method());
    }

    #[test]
    fn subscription_may_start_today() {
        let mut form = SubscriptionForm::for_athlete(&athletes(), "adult", today());
        form.change(START_DATE, "2024-06-15");
        form.change(PLAN_TYPE, "month");
        form.change(PAYMENT_METHOD, "cash");

        assert!(form.validate(), "{:?}", form.form().errors());
    }

    #[test]
    fn should_report_validation_errors() {
        let mut form = SubscriptionForm::new(&athletes(), today());
        form.change(START_DATE, "2024-06-20");
        form.change(AMOUNT, "abc");

        assert!(!form.validate());
        let errors = form.form().errors();
        assert_eq!("Atleta è obbligatorio", errors[ATHLETE]);
        assert_eq!("Data inserita non valida", errors[START_DATE]);
        assert_eq!("Tipologia di Abbonamento è obbligatorio", errors[PLAN_TYPE]);
        assert_eq!("Importo non valido", errors[AMOUNT]);
        assert_eq!("Metodo di pagamento è obbligatorio", errors[PAYMENT_METHOD]);
        assert!(!errors.contains_key(NOTES));
    }

    #[test]
    fn should_build_subscription_from_values() {
        let values = values(&[
            (ATHLETE, "adult"),
            (START_DATE, "2024-11-20"),
            (PLAN_TYPE, "quarterly"),
            (AMOUNT, "210"),
            (PAYMENT_METHOD, "cash"),
        ]);

        let details =
            subscription_details_from_values(&values, 10.0, Some(AthleteCategory::Adult)).unwrap();

        assert_eq!(189.0, *details.amount());
        assert_eq!(
            &Some(start_of_day(NaiveDate::from_ymd_opt(2025, 2, 15).unwrap())),
            details.expiration()
        );
        assert_eq!(&None, details.notes());
    }

    #[test]
    fn blank_amount_should_fall_back_to_list_price() {
        let values = values(&[
            (ATHLETE, "kid"),
            (START_DATE, "2024-01-10"),
            (PLAN_TYPE, "month"),
            (PAYMENT_METHOD, "paypal"),
            (NOTES, "Sconto fratelli"),
        ]);

        let details =
            subscription_details_from_values(&values, 0.0, Some(AthleteCategory::Kid)).unwrap();
        assert_eq!(60.0, *details.amount());
        assert_eq!(&Some("Sconto fratelli".to_owned()), details.notes());

        assert_eq!(
            Err(InvalidValue(AMOUNT)),
            subscription_details_from_values(&values, 0.0, None)
        );
    }

    #[test]
    fn should_prefill_form_when_editing() {
        let subscription = get_expected_subscription();

        let form = SubscriptionForm::edit(&subscription, &athletes(), today());

        assert_eq!("Aggiorna Abbonamento", form.submit_label());
        assert_eq!("2024-01-10", form.form().value(START_DATE));
        assert_eq!("72", form.form().value(AMOUNT));
        assert_eq!("banktransfer", form.form().value(PAYMENT_METHOD));
        assert_eq!("Sconto fratelli", form.form().value(NOTES));
    }

    #[tokio::test]
    async fn should_submit_discounted_subscription() {
        let mut form = SubscriptionForm::for_athlete(&athletes(), "adult", today());
        form.change(START_DATE, "2024-06-01");
        form.change(PLAN_TYPE, "month");
        form.change(PAYMENT_METHOD, "cash");
        form.set_discount("25").unwrap();

        let result: Result<f64, FormError> = form
            .submit(|details| async move { Ok(*details.amount()) })
            .await;

        assert_eq!(Ok(60.0), result);
    }
}
