use crate::api::error::{ApiError, ConfigError};
use crate::form::error::FormError;
use crate::subscription::error::PricingError;
use thiserror::Error;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error, PartialEq)]
pub enum ApplicationError {
    #[error("An error has been encountered while calling the backend.")]
    Api(#[from] ApiError),
    #[error("The application is not configured.")]
    Config(#[from] ConfigError),
    #[error("The form can't be submitted.")]
    Form(#[from] FormError),
    #[error("A price can't be computed.")]
    Pricing(#[from] PricingError),
}

impl ApplicationError {
    /// Message meant for the school staff, in Italian.
    pub fn user_message(&self) -> String {
        match self {
            ApplicationError::Api(error) => match error {
                ApiError::Rejected(reason) => reason.clone(),
                ApiError::ConnectionFailed => "Impossibile contattare il server".to_owned(),
                ApiError::Unauthorized => {
                    "Sessione scaduta, effettua di nuovo il login".to_owned()
                }
                ApiError::WrongCredentials => "Credenziali non valide".to_owned(),
                ApiError::NotFound => "Elemento non trovato".to_owned(),
                ApiError::CantCreateClient
                | ApiError::UnexpectedStatus(_)
                | ApiError::MalformedResponse => {
                    "Errore di comunicazione con il server".to_owned()
                }
            },
            ApplicationError::Config(ConfigError::MissingApiUrl) => {
                "Indirizzo del server non configurato".to_owned()
            }
            ApplicationError::Form(error) => match error {
                FormError::Invalid(_) => "Alcuni campi non sono validi".to_owned(),
                FormError::InvalidValue(field) => format!("Valore non valido [{field}]"),
                FormError::WrongRegex => "Errore interno del modulo".to_owned(),
                FormError::Pricing(error) => pricing_message(error).to_owned(),
            },
            ApplicationError::Pricing(error) => pricing_message(error).to_owned(),
        }
    }
}

fn pricing_message(error: &PricingError) -> &'static str {
    match error {
        PricingError::InvalidAmount(_) => "Importo non valido",
        PricingError::InvalidDiscount(_) => "Lo sconto deve essere compreso tra 0 e 100",
    }
}
