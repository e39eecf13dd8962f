use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    #[error("The amount is not a valid non-negative number [amount: {0}]")]
    InvalidAmount(String),
    #[error("The discount is not a percentage between 0 and 100 [discount: {0}]")]
    InvalidDiscount(String),
}
