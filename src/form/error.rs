use crate::form::engine::FormErrors;
use crate::subscription::error::PricingError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("The form has invalid fields [errors: {0:?}]")]
    Invalid(FormErrors),
    #[error("The field holds a value that can't be converted [field: {0}]")]
    InvalidValue(&'static str),
    #[error("A validation pattern can't be compiled.")]
    WrongRegex,
    #[error(transparent)]
    Pricing(#[from] PricingError),
}
