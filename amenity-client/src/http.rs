//! HTTP client for the amenity, booking and user services

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::response::ErrorBody;

use crate::{ClientConfig, ClientError, ClientResult};

/// Header carrying the session token on authenticated calls
pub const SESSION_HEADER: &str = "X-SESSION-TOKEN";

/// Back-end service a request is addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Amenity,
    Booking,
    User,
}

/// HTTP client trait
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, service: Service, path: &str) -> ClientResult<T>;
    async fn get_with_query<T: DeserializeOwned, Q: Serialize + Sync>(
        &self,
        service: Service,
        path: &str,
        query: &Q,
    ) -> ClientResult<T>;
    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        service: Service,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn delete(&self, service: Service, path: &str) -> ClientResult<()>;
    fn set_token(&mut self, token: Option<String>);
}

/// Network HTTP client backed by reqwest
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    amenity_url: String,
    booking_url: String,
    user_url: String,
    token: Option<String>,
}

impl NetworkHttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            amenity_url: config.amenity_url.clone(),
            booking_url: config.booking_url.clone(),
            user_url: config.user_url.clone(),
            token: config.token.clone(),
        })
    }

    /// Base URL of a service
    pub fn base_url(&self, service: Service) -> &str {
        match service {
            Service::Amenity => &self.amenity_url,
            Service::Booking => &self.booking_url,
            Service::User => &self.user_url,
        }
    }

    fn url(&self, service: Service, path: &str) -> String {
        format!("{}/{}", self.base_url(service), path.trim_start_matches('/'))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.header(SESSION_HEADER, token),
            None => request,
        }
    }

    async fn send(request: RequestBuilder) -> ClientResult<Response> {
        let response = request.send().await.inspect_err(|e| {
            tracing::error!(error = %e, "request failed before a response was received");
        })?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = ErrorBody::text_from(&text).unwrap_or_default();
        tracing::debug!(status = status.as_u16(), %message, "request rejected");
        Err(ClientError::from_status(status.as_u16(), message))
    }

    /// Decode the response body
    async fn handle_response<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::warn!(error = %e, len = bytes.len(), "response body is not the expected JSON");
            ClientError::from(e)
        })
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, service: Service, path: &str) -> ClientResult<T> {
        let url = self.url(service, path);
        tracing::debug!(%url, "GET");
        let response = Self::send(self.authorize(self.client.get(&url))).await?;
        Self::handle_response(response).await
    }

    async fn get_with_query<T: DeserializeOwned, Q: Serialize + Sync>(
        &self,
        service: Service,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        let url = self.url(service, path);
        tracing::debug!(%url, "GET");
        let request = self.authorize(self.client.get(&url).query(query));
        let response = Self::send(request).await?;
        Self::handle_response(response).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        service: Service,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = self.url(service, path);
        tracing::debug!(%url, "POST");
        let response = Self::send(self.authorize(self.client.post(&url).json(body))).await?;
        Self::handle_response(response).await
    }

    async fn delete(&self, service: Service, path: &str) -> ClientResult<()> {
        let url = self.url(service, path);
        tracing::debug!(%url, "DELETE");
        Self::send(self.authorize(self.client.delete(&url))).await?;
        Ok(())
    }

    fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }
}
