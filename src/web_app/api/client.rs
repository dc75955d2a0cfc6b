// web_app/api/client.rs - HTTP client for the remote auth/catalog API
//
// Every screen talks to the service through this one contract. Requests are
// JSON in, JSON out; authorized endpoints take the session token explicitly.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use tracing::instrument;

use super::error::ApiError;
use crate::web_app::config::ApiConfig;
use crate::web_app::model::{
    Credentials, ErrorBody, LoginResponse, MeResponse, Product, SignupResponse, UserIdentity,
};

pub const SIGNUP_PATH: &str = "/auth/signup";
pub const LOGIN_PATH: &str = "/auth/login";
pub const ME_PATH: &str = "/api/me";
pub const PRODUCTS_PATH: &str = "/api/products";

/// Client for the remote API
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Register a new account.
    #[instrument(skip_all, fields(email = %credentials.email))]
    pub async fn signup(&self, credentials: &Credentials) -> Result<SignupResponse, ApiError> {
        let request = self.http.post(self.config.endpoint(SIGNUP_PATH)).json(credentials);
        let body = self.send(request).await?;
        Ok(decode_or_default(&body))
    }

    /// Exchange credentials for a session token.
    #[instrument(skip_all, fields(email = %credentials.email))]
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let request = self.http.post(self.config.endpoint(LOGIN_PATH)).json(credentials);
        let body = self.send(request).await?;
        Ok(decode_or_default(&body))
    }

    /// Resolve who the token belongs to.
    #[instrument(skip_all)]
    pub async fn current_user(&self, token: Option<&str>) -> Result<UserIdentity, ApiError> {
        let request = authorized(self.http.get(self.config.endpoint(ME_PATH)), token);
        let body = self.send(request).await?;
        let me: MeResponse = serde_json::from_str(&body)?;
        Ok(me.user)
    }

    /// Fetch the full product listing.
    ///
    /// A 2xx body that is not a JSON array is reported as
    /// [`ApiError::UnexpectedShape`] rather than a decode failure.
    #[instrument(skip_all)]
    pub async fn products(&self, token: Option<&str>) -> Result<Vec<Product>, ApiError> {
        let request = authorized(self.http.get(self.config.endpoint(PRODUCTS_PATH)), token);
        let body = self.send(request).await?;

        let value: serde_json::Value = serde_json::from_str(&body)?;
        if !value.is_array() {
            tracing::warn!("Product listing was not an array");
            return Err(ApiError::UnexpectedShape);
        }

        let products: Vec<Product> = serde_json::from_value(value)?;
        tracing::debug!("Fetched {} products", products.len());
        Ok(products)
    }

    /// Send a request and return the body of a 2xx response.
    async fn send(&self, request: RequestBuilder) -> Result<String, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message);
            tracing::warn!("API request failed with HTTP {}", status.as_u16());
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(body)
    }
}

fn authorized(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => request.bearer_auth(token),
        None => {
            tracing::warn!("No session token stored, sending request unauthenticated");
            request
        }
    }
}

// A 2xx body that is empty or not the expected JSON object still counts as
// success; it just carries no message and no token.
fn decode_or_default<T: DeserializeOwned + Default>(body: &str) -> T {
    if body.trim().is_empty() {
        return T::default();
    }
    serde_json::from_str(body).unwrap_or_else(|e| {
        tracing::debug!("Ignoring unparseable 2xx body: {}", e);
        T::default()
    })
}
