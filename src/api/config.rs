use crate::api::error::ConfigError;
use crate::api::error::ConfigError::MissingApiUrl;
use crate::tools::env_args::retrieve_expected_setting;
use derive_getters::Getters;

pub const API_URL_ARGS: [&str; 2] = ["-u", "--api-url"];
pub const API_URL_ENV: &str = "API_URL";

#[derive(Debug, Getters, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Read the backend URL from `-u=<url>` or `--api-url=<url>`, then from the `API_URL` variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url =
            retrieve_expected_setting(API_URL_ARGS.to_vec(), API_URL_ENV, MissingApiUrl)?;
        Ok(Self::new(&base_url))
    }
}
