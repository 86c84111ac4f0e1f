// ============================================================================
// HTTP TRANSPORT - single fetch round trip, no retry
// ============================================================================

use gloo_net::http::Request;
use serde_json::Value;

use crate::errors::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    pub body: Option<Value>,
}

/// Status plus undecoded body
#[derive(Clone, Debug, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as JSON; anything unparsable is `null`
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or(Value::Null)
    }
}

/// Seam between the API client and the network
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError>;
}

/// Browser `fetch` through gloo-net
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlooTransport;

impl HttpTransport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let builder = match request.method {
            HttpMethod::Get => Request::get(&request.url),
            HttpMethod::Post => Request::post(&request.url),
            HttpMethod::Delete => Request::delete(&request.url),
        }
        .header("Content-Type", "application/json");

        let response = match &request.body {
            Some(body) => {
                builder
                    .json(body)
                    .map_err(|e| ApiError::Serialize(e.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}
