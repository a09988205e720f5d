use crate::config::PetstoreConfig;
use crate::error::{PetstoreError, PetstoreResult};
use crate::logging::{log_debug, log_trace};
use crate::models::{Order, Pet};
use crate::schema::ResourceSchema;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// A completed HTTP exchange with the Petstore service
///
/// The body is read eagerly as text so a test case can assert on the literal
/// text (`Pet deleted`), on its JSON shape, or on both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    method: Method,
    url: String,
    status: u16,
    body: String,
}

impl ApiResponse {
    pub fn new(
        method: Method,
        url: impl Into<String>,
        status: u16,
        body: impl Into<String>,
    ) -> Self {
        Self {
            method,
            url: url.into(),
            status,
            body: body.into(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn text(&self) -> &str {
        &self.body
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fail unless the service answered with `expected`
    pub fn expect_status(&self, expected: u16) -> PetstoreResult<&Self> {
        if self.status == expected {
            Ok(self)
        } else {
            Err(PetstoreError::assertion_failed(
                format!("status code of {} {}", self.method, self.url),
                expected,
                self.status,
            ))
        }
    }

    /// Fail unless the body is exactly `expected`
    pub fn expect_text(&self, expected: &str) -> PetstoreResult<&Self> {
        if self.body == expected {
            Ok(self)
        } else {
            Err(PetstoreError::assertion_failed(
                format!("response text of {} {}", self.method, self.url),
                expected,
                &self.body,
            ))
        }
    }

    /// Parse the body as untyped JSON
    pub fn json(&self) -> PetstoreResult<Value> {
        serde_json::from_str(&self.body).map_err(|e| {
            PetstoreError::response_parsing_error(format!(
                "{} {} returned non-JSON body {:?}: {}",
                self.method, self.url, self.body, e
            ))
        })
    }

    /// Decode the body into a resource type
    pub fn decode<T: DeserializeOwned>(&self) -> PetstoreResult<T> {
        serde_json::from_str(&self.body).map_err(|e| {
            PetstoreError::response_parsing_error(format!(
                "{} {} returned an unexpected body {:?}: {}",
                self.method, self.url, self.body, e
            ))
        })
    }

    /// Parse the body as JSON and check it against `schema`
    ///
    /// Returns the parsed body so callers can go on asserting field values.
    pub fn validate(&self, schema: ResourceSchema) -> PetstoreResult<Value> {
        let body = self.json()?;
        schema.validate(&body)?;
        Ok(body)
    }
}

/// HTTP client for the Petstore `pet` and `store` resources
///
/// One method per endpoint. Every method performs exactly one request and
/// returns whatever the service answered; only transport failures become
/// errors here. Status and body checks belong to the calling test case.
#[derive(Debug, Clone)]
pub struct PetstoreClient {
    http: reqwest::Client,
    config: PetstoreConfig,
}

impl PetstoreClient {
    /// Create a client for the configured service
    ///
    /// # Errors
    ///
    /// Returns [`PetstoreError::Configuration`] if:
    /// - Configuration validation fails
    /// - HTTP client initialization fails
    pub fn new(config: PetstoreConfig) -> PetstoreResult<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| {
            PetstoreError::configuration_error(format!("Failed to build HTTP client: {}", e))
        })?;

        log_debug!(
            base_url = %config.base_url,
            request_timeout_secs = config.request_timeout.map(|t| t.as_secs()),
            "Petstore client initialized"
        );

        Ok(Self { http, config })
    }

    /// Create a client using environment variables for configuration
    ///
    /// See [`PetstoreConfig::from_env`].
    pub fn from_env() -> PetstoreResult<Self> {
        Self::new(PetstoreConfig::from_env()?)
    }

    pub fn config(&self) -> &PetstoreConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.normalized_base_url(), path)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        build: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> PetstoreResult<ApiResponse> {
        let url = self.url(path);
        let request = build(self.http.request(method.clone(), &url));

        let response = request.send().await.map_err(|e| {
            PetstoreError::request_failed(
                format!("{} {}: {}", method, url, e),
                Some(Box::new(e)),
            )
        })?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            PetstoreError::request_failed(
                format!("{} {}: failed to read body: {}", method, url, e),
                Some(Box::new(e)),
            )
        })?;

        log_debug!(method = %method, url = %url, status = status, "Petstore request completed");
        log_trace!(method = %method, url = %url, body = %body, "Petstore response body");

        Ok(ApiResponse::new(method, url, status, body))
    }

    async fn send_json<T: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        payload: &T,
    ) -> PetstoreResult<ApiResponse> {
        self.send(method, path, |request| request.json(payload)).await
    }

    // ------------------------------------------------------------------------
    // pet
    // ------------------------------------------------------------------------

    /// `POST /pet`: create (or replace) a pet
    pub async fn add_pet(&self, pet: &Pet) -> PetstoreResult<ApiResponse> {
        self.send_json(Method::POST, "/pet", pet).await
    }

    /// `GET /pet/{id}`
    pub async fn get_pet(&self, id: impl fmt::Display) -> PetstoreResult<ApiResponse> {
        self.send(Method::GET, &format!("/pet/{id}"), |request| request).await
    }

    /// `PUT /pet`: update an existing pet
    pub async fn update_pet(&self, pet: &Pet) -> PetstoreResult<ApiResponse> {
        self.send_json(Method::PUT, "/pet", pet).await
    }

    /// `DELETE /pet/{id}`
    pub async fn delete_pet(&self, id: impl fmt::Display) -> PetstoreResult<ApiResponse> {
        self.send(Method::DELETE, &format!("/pet/{id}"), |request| request).await
    }

    /// `GET /pet/findByStatus?status=`
    ///
    /// Takes a raw string so invalid statuses can be sent on purpose.
    pub async fn find_pets_by_status(&self, status: &str) -> PetstoreResult<ApiResponse> {
        self.send(Method::GET, "/pet/findByStatus", |request| {
            request.query(&[("status", status)])
        })
        .await
    }

    // ------------------------------------------------------------------------
    // store
    // ------------------------------------------------------------------------

    /// `POST /store/order`
    pub async fn place_order(&self, order: &Order) -> PetstoreResult<ApiResponse> {
        self.send_json(Method::POST, "/store/order", order).await
    }

    /// `GET /store/order/{id}`
    pub async fn get_order(&self, id: impl fmt::Display) -> PetstoreResult<ApiResponse> {
        self.send(Method::GET, &format!("/store/order/{id}"), |request| request)
            .await
    }

    /// `DELETE /store/order/{id}`
    ///
    /// The id is sent verbatim, so non-numeric ids reach the service as-is.
    pub async fn delete_order(&self, id: impl fmt::Display) -> PetstoreResult<ApiResponse> {
        self.send(Method::DELETE, &format!("/store/order/{id}"), |request| request)
            .await
    }

    /// `GET /store/inventory`
    pub async fn get_inventory(&self) -> PetstoreResult<ApiResponse> {
        self.send(Method::GET, "/store/inventory", |request| request).await
    }
}
