use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    #[error("Can't create HTTP client.")]
    CantCreateClient,
    #[error("The backend can't be reached.")]
    ConnectionFailed,
    #[error("The request requires a valid authentication token.")]
    Unauthorized,
    #[error("Login refused, wrong credentials?")]
    WrongCredentials,
    #[error("The requested resource doesn't exist.")]
    NotFound,
    #[error("The backend rejected the request [reason: {0}]")]
    Rejected(String),
    #[error("The backend answered with an unexpected status [status: {0}]")]
    UnexpectedStatus(u16),
    #[error("The backend response can't be read.")]
    MalformedResponse,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("The backend URL is missing, use --api-url=<url> or API_URL.")]
    MissingApiUrl,
}
