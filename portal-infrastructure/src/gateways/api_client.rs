use std::time::Duration;

use anyhow::Result;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use portal_domain::ports::GatewayResult;
use portal_domain::{GatewayError, RuntimeConfig};

const FALLBACK_MESSAGE: &str = "Request failed";

/// Thin JSON client over the portal backend. Every call takes an optional
/// bearer token; the client itself holds no credentials.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &RuntimeConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds.max(1)))
            .build()?;
        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(method = %method, url = %url, token_set = token.is_some(), "backend request");
        let builder = self.client.request(method, url);
        match token {
            Some(token) => builder.header(AUTHORIZATION, format!("Bearer {}", token)),
            None => builder,
        }
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> GatewayResult<T> {
        let response = self.send(builder, FALLBACK_MESSAGE).await?;
        let body = response.bytes().await.map_err(transport_error)?;
        serde_json::from_slice(&body).map_err(|err| GatewayError::Decode(err.to_string()))
    }

    pub(crate) async fn send_empty(&self, builder: RequestBuilder) -> GatewayResult<()> {
        self.send(builder, FALLBACK_MESSAGE).await?;
        Ok(())
    }

    pub(crate) async fn send_bytes(
        &self,
        builder: RequestBuilder,
        fallback: &str,
    ) -> GatewayResult<Vec<u8>> {
        let response = self.send(builder, fallback).await?;
        let body = response.bytes().await.map_err(transport_error)?;
        Ok(body.to_vec())
    }

    async fn send(&self, builder: RequestBuilder, fallback: &str) -> GatewayResult<Response> {
        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let text = response.text().await.unwrap_or_default();
        debug!(status = status.as_u16(), "backend rejected request");
        Err(status_error(status, text, fallback))
    }
}

/// Maps a non-2xx response to a typed error. The body is kept verbatim.
pub fn status_error(status: StatusCode, body: String, fallback: &str) -> GatewayError {
    let message = if body.trim().is_empty() {
        fallback.to_string()
    } else {
        body
    };
    match status {
        StatusCode::UNAUTHORIZED => GatewayError::Unauthenticated,
        StatusCode::FORBIDDEN => GatewayError::Forbidden(message),
        StatusCode::NOT_FOUND => GatewayError::NotFound(message),
        _ => GatewayError::Rejected {
            status: status.as_u16(),
            message,
        },
    }
}

fn transport_error(err: reqwest::Error) -> GatewayError {
    if err.is_decode() {
        GatewayError::Decode(err.to_string())
    } else {
        GatewayError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_map_to_typed_errors() {
        assert_eq!(
            status_error(StatusCode::UNAUTHORIZED, "{\"detail\":\"Not authenticated\"}".into(), FALLBACK_MESSAGE),
            GatewayError::Unauthenticated
        );
        assert_eq!(
            status_error(StatusCode::FORBIDDEN, String::new(), FALLBACK_MESSAGE),
            GatewayError::Forbidden("Request failed".to_string())
        );
        match status_error(StatusCode::BAD_REQUEST, "Event is full".into(), FALLBACK_MESSAGE) {
            GatewayError::Rejected { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Event is full");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_transport_error() {
        let config = RuntimeConfig {
            api_base_url: "http://127.0.0.1:9".to_string(),
            request_timeout_seconds: 2,
            ..RuntimeConfig::default()
        };
        let client = ApiClient::new(&config).expect("client");
        let result: GatewayResult<serde_json::Value> = client
            .send_json(client.request(Method::GET, "/events", None))
            .await;
        assert!(matches!(result, Err(GatewayError::Transport(_))));
    }
}
