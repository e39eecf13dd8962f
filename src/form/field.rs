use derive_getters::Getters;
use std::fmt::{Debug, Formatter};

/// How a field is meant to be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Number,
    Select,
    TextArea,
    Date,
    Checkbox,
}

#[derive(Debug, Getters, Clone, PartialEq, Eq)]
pub struct SelectOption {
    value: String,
    label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Returns an error message when the value is not acceptable.
pub type Validator = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

#[derive(Getters)]
pub struct FieldConfig {
    #[getter(skip)]
    name: &'static str,
    kind: FieldKind,
    label: String,
    placeholder: Option<String>,
    required: bool,
    #[getter(skip)]
    validator: Option<Validator>,
    options: Vec<SelectOption>,
}

impl FieldConfig {
    pub fn new(name: &'static str, kind: FieldKind, label: &str) -> Self {
        Self {
            name,
            kind,
            label: label.to_owned(),
            placeholder: None,
            required: false,
            validator: None,
            options: vec![],
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn mandatory(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_owned());
        self
    }

    pub fn with_validator<V>(mut self, validator: V) -> Self
    where
        V: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.validator = Some(Box::new(validator));
        self
    }

    pub fn with_options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    pub(super) fn set_options(&mut self, options: Vec<SelectOption>) {
        self.options = options;
    }

    /// Error of the field for `value`, if any.
    /// A blank value only fails when the field is required; validators never see it.
    pub fn check(&self, value: &str) -> Option<String> {
        if value.trim().is_empty() {
            return self
                .required
                .then(|| format!("{} è obbligatorio", self.label));
        }

        self.validator.as_ref().and_then(|validate| validate(value))
    }
}

impl Debug for FieldConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldConfig")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("label", &self.label)
            .field("required", &self.required)
            .field("validated", &self.validator.is_some())
            .field("options", &self.options)
            .finish()
    }
}
