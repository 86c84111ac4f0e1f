// ============================================================================
// API CLIENT - HTTP only, no business logic (stateless)
// ============================================================================
// One method per endpoint. Status branching is left to the caller through
// `ApiOutcome`; `call` collapses it into a plain `Result`.
// ============================================================================

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::CONFIG;
use crate::errors::{ApiError, DEFAULT_API_FAILURE};
use crate::models::booking::{BookingsResponse, CreateBookingRequest};
use crate::models::demo::ForeignKeyProbe;
use crate::models::health::HealthResponse;
use crate::models::pet::{NewPet, PetId, PetsResponse};
use crate::models::review::ReviewDraft;
use crate::models::user::{
    AuthResponse, LoginRequest, ProfileResponse, SignupRequest, StatsResponse, UserId,
};
use crate::models::walker::WalkersResponse;
use crate::models::TimeSlot;
use crate::services::transport::{ApiRequest, GlooTransport, HttpMethod, HttpTransport, RawResponse};

/// Tagged result of a request that reached the server
#[derive(Clone, Debug, PartialEq)]
pub enum ApiOutcome<T> {
    /// 2xx
    Success(T),
    /// 400
    Validation(Option<String>),
    /// 409
    Conflict(Option<String>),
    ServerError { status: u16, message: Option<String> },
}

impl<T> ApiOutcome<T> {
    /// Server-provided message of a failed outcome
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiOutcome::Success(_) => None,
            ApiOutcome::Validation(message)
            | ApiOutcome::Conflict(message)
            | ApiOutcome::ServerError { message, .. } => message.as_deref(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiOutcome::Success(_) => None,
            ApiOutcome::Validation(_) => Some(400),
            ApiOutcome::Conflict(_) => Some(409),
            ApiOutcome::ServerError { status, .. } => Some(*status),
        }
    }

    /// Failures become `ApiError::Server`, defaulting to "API call failed"
    pub fn into_result(self) -> Result<T, ApiError> {
        match self {
            ApiOutcome::Success(value) => Ok(value),
            failed => {
                let status = failed.status().unwrap_or_default();
                let message = failed
                    .message()
                    .unwrap_or(DEFAULT_API_FAILURE)
                    .to_string();
                Err(ApiError::Server { status, message })
            }
        }
    }
}

/// Server `message` from a JSON error body
pub fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value.get("message").and_then(Value::as_str).map(str::to_string)
}

/// Stateless JSON client over an `HttpTransport`
#[derive(Clone, Debug)]
pub struct ApiClient<T = GlooTransport> {
    base_url: String,
    transport: T,
}

impl ApiClient<GlooTransport> {
    pub fn new() -> Self {
        Self::with_transport(CONFIG.api_base_url(), GlooTransport)
    }
}

impl Default for ApiClient<GlooTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn with_transport(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Single round trip; the body is dropped for GET
    pub async fn raw(
        &self,
        endpoint: &str,
        method: HttpMethod,
        body: Option<Value>,
    ) -> Result<RawResponse, ApiError> {
        let request = ApiRequest {
            method,
            url: self.url(endpoint),
            body: if method == HttpMethod::Get { None } else { body },
        };
        log::debug!("🌐 {} {}", method.as_str(), request.url);

        self.transport.send(request).await.map_err(|e| {
            log::error!("❌ API error on {}: {}", endpoint, e);
            e
        })
    }

    /// Decoded body on 2xx, otherwise the tagged failure
    pub async fn request<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        method: HttpMethod,
        body: Option<Value>,
    ) -> Result<ApiOutcome<R>, ApiError> {
        let raw = self.raw(endpoint, method, body).await?;

        if raw.is_success() {
            return decode::<R>(&raw.body).map(ApiOutcome::Success);
        }

        let message = error_message(&raw.body);
        log::warn!("⚠️ {} {} -> HTTP {}", method.as_str(), endpoint, raw.status);
        Ok(match raw.status {
            400 => ApiOutcome::Validation(message),
            409 => ApiOutcome::Conflict(message),
            status => ApiOutcome::ServerError { status, message },
        })
    }

    /// Decoded body, or an error for any non-2xx status
    pub async fn call<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        method: HttpMethod,
        body: Option<Value>,
    ) -> Result<R, ApiError> {
        self.request(endpoint, method, body).await?.into_result()
    }

    pub async fn get<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R, ApiError> {
        self.call(endpoint, HttpMethod::Get, None).await
    }

    async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        self.call(endpoint, HttpMethod::Post, Some(encode(body)?)).await
    }

    // ========================================================================
    // AUTH
    // ========================================================================

    pub async fn current_user(&self) -> Result<AuthResponse, ApiError> {
        // Guests get a non-2xx with `success: false`; read the body either way
        let raw = self.raw("/current-user", HttpMethod::Get, None).await?;
        decode(&raw.body)
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<ApiOutcome<AuthResponse>, ApiError> {
        log::info!("🔐 Login for {}", request.email);
        self.request("/login", HttpMethod::Post, Some(encode(request)?)).await
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<ApiOutcome<Value>, ApiError> {
        log::info!("📝 Signup for {}", request.email);
        self.request("/signup", HttpMethod::Post, Some(encode(request)?)).await
    }

    pub async fn logout(&self) -> Result<AuthResponse, ApiError> {
        self.call("/logout", HttpMethod::Post, None).await
    }

    pub async fn profile(&self) -> Result<ProfileResponse, ApiError> {
        self.get("/profile").await
    }

    // ========================================================================
    // PETS
    // ========================================================================

    pub async fn pets(&self) -> Result<PetsResponse, ApiError> {
        self.get("/pets").await
    }

    pub async fn create_pet(&self, pet: &NewPet) -> Result<Value, ApiError> {
        self.post("/pets", pet).await
    }

    pub async fn delete_pet(&self, id: PetId) -> Result<Value, ApiError> {
        self.call(&format!("/pets/{}", id), HttpMethod::Delete, None).await
    }

    /// Pet creation against an arbitrary owner, outcome left tagged
    pub async fn probe_owner(&self, probe: &ForeignKeyProbe) -> Result<ApiOutcome<Value>, ApiError> {
        self.request("/pets", HttpMethod::Post, Some(encode(probe)?)).await
    }

    // ========================================================================
    // BOOKINGS
    // ========================================================================

    pub async fn walkers(&self, date: &str, time: TimeSlot) -> Result<WalkersResponse, ApiError> {
        self.get(&format!("/walkers?date={}&time={}", date, time.as_str())).await
    }

    pub async fn create_booking(&self, request: &CreateBookingRequest) -> Result<Value, ApiError> {
        self.post("/bookings", request).await
    }

    pub async fn bookings(&self) -> Result<BookingsResponse, ApiError> {
        self.get("/bookings").await
    }

    pub async fn create_review(&self, review: &ReviewDraft) -> Result<Value, ApiError> {
        self.post("/reviews", review).await
    }

    // ========================================================================
    // STATS / DEMO
    // ========================================================================

    pub async fn stats(&self) -> Result<StatsResponse, ApiError> {
        self.get("/stats").await
    }

    /// Health body is read regardless of status
    pub async fn health(&self) -> Result<HealthResponse, ApiError> {
        let raw = self.raw("/health", HttpMethod::Get, None).await?;
        decode(&raw.body)
    }

    pub async fn service_info(&self) -> Result<Value, ApiError> {
        self.get("/service-info").await
    }

    /// Any status comes back; the demo panel reads its own error fields
    pub async fn composite_stats(&self) -> Result<RawResponse, ApiError> {
        self.raw("/demo/composite-stats", HttpMethod::Get, None).await
    }

    pub async fn user_complete(&self, user_id: UserId) -> Result<ApiOutcome<Value>, ApiError> {
        self.request(&format!("/demo/user-complete/{}", user_id), HttpMethod::Get, None)
            .await
    }

    pub async fn cascade_delete(&self, user_id: UserId) -> Result<ApiOutcome<Value>, ApiError> {
        self.request(&format!("/demo/cascade-delete/{}", user_id), HttpMethod::Delete, None)
            .await
    }
}

fn encode<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Serialize(e.to_string()))
}

fn decode<R: DeserializeOwned>(body: &str) -> Result<R, ApiError> {
    let text = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}
