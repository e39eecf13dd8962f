use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::api::error::ApiError::{Unauthorized, WrongCredentials};
use dto::credentials::{Credentials, LoginResponse};
use log::{debug, error};
use reqwest::Method;

impl ApiClient {
    /// Log in the backend and keep the returned token for the next requests.
    pub async fn login(&mut self, credentials: &Credentials) -> Result<(), ApiError> {
        let request = self.request(Method::POST, "/user/login").json(credentials);
        let response: LoginResponse = self
            .send_json(request, "Failed to log in the backend")
            .await
            .map_err(|e| match e {
                Unauthorized => {
                    error!("Failed to log in the backend. Wrong credentials?");
                    WrongCredentials
                }
                e => e,
            })?;

        debug!("Logged in as {}.", credentials.username());
        self.set_token(response.token().to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::api::client::tests::build_api_client;
    use crate::api::error::ApiError::{UnexpectedStatus, WrongCredentials};
    use dto::credentials::Credentials;
    use wiremock::matchers::{body_json_string, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn credentials() -> Credentials {
        Credentials::new("sensei".to_owned(), "password".to_owned())
    }

    #[tokio::test]
    async fn should_login() {
        let mock_server = MockServer::start().await;
        let mut client = build_api_client(&mock_server);

        Mock::given(method("POST"))
            .and(path("/user/login"))
            .and(body_json_string(r#"{"username":"sensei","password":"password"}"#))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"token":"jwt"}"#))
            .mount(&mock_server)
            .await;

        assert_eq!(Ok(()), client.login(&credentials()).await);
        assert!(client.is_authenticated());
    }

    #[tokio::test]
    async fn should_fail_to_login_when_wrong_credentials() {
        let mock_server = MockServer::start().await;
        let mut client = build_api_client(&mock_server);

        Mock::given(method("POST"))
            .and(path("/user/login"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        assert_eq!(Err(WrongCredentials), client.login(&credentials()).await);
        assert!(!client.is_authenticated());
    }

    #[tokio::test]
    async fn should_fail_to_login_when_other_error() {
        let mock_server = MockServer::start().await;
        let mut client = build_api_client(&mock_server);

        Mock::given(method("POST"))
            .and(path("/user/login"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        assert_eq!(Err(UnexpectedStatus(500)), client.login(&credentials()).await);
        assert!(!client.is_authenticated());
    }
}
