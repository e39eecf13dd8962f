use crate::form::error::FormError;
use crate::form::field::{FieldConfig, SelectOption};
use log::{debug, warn};
use std::collections::BTreeMap;

pub type FormValues = BTreeMap<String, String>;
pub type FormErrors = BTreeMap<String, String>;

/// Cross-field rule, run once every field is checked.
pub type FormValidator = Box<dyn Fn(&FormValues) -> FormErrors + Send + Sync>;

/// Lifecycle of a form. A submission walks
/// `Idle → Validating → Invalid | (Valid → Submitting → Success | Failure)`
/// and always lands back on `Idle`; [Form::last_outcome] keeps where it ended.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Validating,
    Invalid,
    Valid,
    Submitting,
    Success,
    Failure,
}

/// Generic form: a list of fields, their values and the errors of the last validation.
/// It knows nothing about how fields depend on each other.
pub struct Form {
    fields: Vec<FieldConfig>,
    values: FormValues,
    errors: FormErrors,
    validator: Option<FormValidator>,
    state: FormState,
    last_outcome: Option<FormState>,
}

impl Form {
    pub fn new(fields: Vec<FieldConfig>) -> Self {
        Self {
            fields,
            values: FormValues::new(),
            errors: FormErrors::new(),
            validator: None,
            state: FormState::Idle,
            last_outcome: None,
        }
    }

    pub fn with_initial_values(mut self, values: FormValues) -> Self {
        self.values = values;
        self
    }

    pub fn with_validator<V>(mut self, validator: V) -> Self
    where
        V: Fn(&FormValues) -> FormErrors + Send + Sync + 'static,
    {
        self.validator = Some(Box::new(validator));
        self
    }

    pub fn fields(&self) -> &[FieldConfig] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldConfig> {
        self.fields.iter().find(|field| field.name() == name)
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Value of a field, blank when never set.
    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or_default()
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// Where the last submission ended: `Invalid`, `Success` or `Failure`.
    pub fn last_outcome(&self) -> Option<FormState> {
        self.last_outcome
    }

    /// Store a value and forget the error the field may have.
    /// A form checked as valid or invalid goes back to idle.
    pub fn update_value(&mut self, name: &str, value: &str) {
        self.values.insert(name.to_owned(), value.to_owned());
        self.errors.remove(name);
        self.state = FormState::Idle;
    }

    /// Replace the options of a select field. Returns whether the field exists.
    pub fn set_field_options(&mut self, name: &str, options: Vec<SelectOption>) -> bool {
        match self.fields.iter_mut().find(|field| field.name() == name) {
            Some(field) => {
                field.set_options(options);
                true
            }
            None => {
                warn!("Can't set options of unknown field [field: {name}]");
                false
            }
        }
    }

    /// Check every field against the current values, replacing previous errors.
    /// Returns whether the form is valid, and leaves the form `Valid` or `Invalid`.
    pub fn validate(&mut self) -> bool {
        self.state = FormState::Validating;
        let mut errors: FormErrors = self
            .fields
            .iter()
            .filter_map(|field| {
                field
                    .check(self.value(field.name()))
                    .map(|error| (field.name().to_owned(), error))
            })
            .collect();

        if let Some(validator) = &self.validator {
            for (name, error) in validator(&self.values) {
                errors.entry(name).or_insert(error);
            }
        }

        self.errors = errors;
        self.state = if self.errors.is_empty() {
            FormState::Valid
        } else {
            FormState::Invalid
        };
        self.errors.is_empty()
    }

    /// Validate the form and hand its values to `handler` when valid.
    /// An invalid form never reaches the handler.
    pub async fn submit<F, Fut, T, E>(&mut self, handler: F) -> Result<T, E>
    where
        F: FnOnce(FormValues) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: From<FormError>,
    {
        if !self.validate() {
            debug!("Form submission refused [errors: {:?}]", self.errors);
            self.finish(FormState::Invalid);
            return Err(FormError::Invalid(self.errors.clone()).into());
        }

        debug!("Form is valid, submitting it.");
        self.state = FormState::Submitting;
        let result = handler(self.values.clone()).await;
        self.finish(if result.is_ok() {
            FormState::Success
        } else {
            FormState::Failure
        });
        result
    }

    pub fn reset(&mut self) {
        self.values.clear();
        self.errors.clear();
        self.state = FormState::Idle;
        self.last_outcome = None;
    }

    fn finish(&mut self, outcome: FormState) {
        self.last_outcome = Some(outcome);
        self.state = FormState::Idle;
    }
}
