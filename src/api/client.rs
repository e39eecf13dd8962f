use crate::api::config::ApiConfig;
use crate::api::error::ApiError;
use crate::api::error::ApiError::{
    ConnectionFailed, MalformedResponse, NotFound, Rejected, Unauthorized, UnexpectedStatus,
};
use crate::tools::log_message_and_return;
use crate::tools::web::build_client;
use log::error;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Body of a backend rejection.
#[derive(Deserialize)]
struct RejectionBody {
    error: String,
}

/// Client of the membership backend.
/// Once a token is set, every request carries it as a bearer authorization.
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        Ok(Self {
            client: build_client()?,
            base_url: config.base_url().to_owned(),
            token: None,
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    pub(super) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self.client.request(method, format!("{}{path}", self.base_url));
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub(super) async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        context: &str,
    ) -> Result<T, ApiError> {
        let response = send(request, context).await?;
        response
            .json::<T>()
            .await
            .map_err(log_message_and_return(context, MalformedResponse))
    }

    pub(super) async fn send_empty(
        &self,
        request: RequestBuilder,
        context: &str,
    ) -> Result<(), ApiError> {
        send(request, context).await.map(|_| ())
    }
}

async fn send(request: RequestBuilder, context: &str) -> Result<Response, ApiError> {
    let response = request
        .send()
        .await
        .map_err(log_message_and_return(context, ConnectionFailed))?;

    if response.status().is_success() {
        Ok(response)
    } else {
        Err(error_from_response(response, context).await)
    }
}

async fn error_from_response(response: Response, context: &str) -> ApiError {
    let status = response.status();
    error!("{context} [status: {status}]");
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Unauthorized,
        StatusCode::NOT_FOUND => NotFound,
        _ => match response.json::<RejectionBody>().await {
            Ok(body) => Rejected(body.error),
            Err(_) => UnexpectedStatus(status.as_u16()),
        },
    }
}
