// ============================================================================
// DEMO VIEWMODEL - composite service showcase
// ============================================================================
// Each action is one independent request rendered into a `PanelView`.
// ============================================================================

use serde_json::Value;

use crate::config::CONFIG;
use crate::errors::{ApiError, DEFAULT_API_FAILURE};
use crate::models::demo::{pretty_json, ForeignKeyProbe};
use crate::models::{PanelTone, PanelView, ServiceStatus, UserId};
use crate::services::{ApiClient, ApiOutcome, GlooTransport, HttpTransport};
use crate::utils::browser::now_ms;

/// Timing and data areas of the parallel execution demo
#[derive(Clone, Debug, PartialEq)]
pub struct ParallelResult {
    pub timing: PanelView,
    pub data: Option<PanelView>,
}

pub fn cascade_confirm_text(user_id: &str) -> String {
    format!(
        "Are you sure you want to delete user {} and all their dogs? This is for demo purposes.",
        user_id.trim()
    )
}

fn parse_id(value: &str, label: &'static str) -> Result<UserId, PanelView> {
    value.trim().parse().map_err(|_| {
        PanelView::new(PanelTone::Error, "Error:").message(format!("{} must be a number.", label))
    })
}

/// Transport failure panel with the composite service hint
fn service_unreachable(error: &ApiError) -> PanelView {
    PanelView::new(PanelTone::Error, "Error:")
        .message(error.to_string())
        .hint(format!(
            "Make sure the composite service is running on port {}",
            CONFIG.demo_config.composite_service_port
        ))
}

fn message_of(body: &Value) -> Option<String> {
    body.get("message").and_then(Value::as_str).map(str::to_string)
}

pub struct DemoViewModel<T = GlooTransport> {
    api: ApiClient<T>,
}

impl DemoViewModel {
    pub fn new() -> Self {
        Self::with_client(ApiClient::new())
    }
}

impl<T: HttpTransport> DemoViewModel<T> {
    pub fn with_client(api: ApiClient<T>) -> Self {
        Self { api }
    }

    /// `None` when health itself could not be fetched; indicator left as is
    pub async fn check_service_status(&self) -> Option<ServiceStatus> {
        match self.api.health().await {
            Ok(health) => {
                let status = health.composite_status();
                match status {
                    ServiceStatus::Healthy => log::info!("✅ Composite Service is available"),
                    ServiceStatus::Unavailable => {
                        log::warn!("⚠️ Composite Service may be unavailable")
                    }
                }
                Some(status)
            }
            Err(e) => {
                log::error!("❌ Failed to check service status: {}", e);
                None
            }
        }
    }

    /// Create a dog for `owner_id`; an unknown owner must be refused
    pub async fn test_foreign_key_validation(&self, owner_id: &str, dog_name: &str) -> PanelView {
        let owner_id = match parse_id(owner_id, "Owner ID") {
            Ok(id) => id,
            Err(panel) => return panel,
        };
        let probe = ForeignKeyProbe::new(owner_id, dog_name.trim());

        match self.api.probe_owner(&probe).await {
            Ok(ApiOutcome::Success(body)) => PanelView::new(PanelTone::Success, "✓ Success!")
                .message(format!("Dog created successfully. Owner ID {} exists.", owner_id))
                .json(&body),
            Ok(failed) => PanelView::new(PanelTone::Error, "✗ Validation Failed (Expected)")
                .message(failed.message().unwrap_or(DEFAULT_API_FAILURE))
                .hint("This is the expected behavior - dogs cannot be created with invalid owner IDs!"),
            Err(e) => service_unreachable(&e),
        }
    }

    /// One call the backend fans out; measures the whole round trip
    pub async fn test_parallel_execution(&self, user_id: &str) -> ParallelResult {
        let user_id = match parse_id(user_id, "User ID") {
            Ok(id) => id,
            Err(panel) => return ParallelResult { timing: panel, data: None },
        };

        let started = now_ms();
        let outcome = self.api.user_complete(user_id).await;
        let elapsed_ms = (now_ms() - started).max(0.0);
        log::info!("⏱️ user-complete/{} took {:.2}ms", user_id, elapsed_ms);

        match outcome {
            Ok(ApiOutcome::Success(body)) => ParallelResult {
                timing: PanelView::new(PanelTone::Success, "✓ Parallel Execution Complete")
                    .message(format!("Total time: {:.2}ms", elapsed_ms))
                    .hint("User data, dogs, and stats were fetched simultaneously using worker threads!"),
                data: Some(PanelView::new(PanelTone::Success, "Retrieved Data:").json(&body)),
            },
            Ok(failed) => ParallelResult {
                timing: PanelView::new(PanelTone::Error, "Error:")
                    .message(failed.message().unwrap_or("Failed to fetch data")),
                data: None,
            },
            Err(e) => ParallelResult {
                timing: service_unreachable(&e),
                data: None,
            },
        }
    }

    /// Caller confirms first (`cascade_confirm_text`)
    pub async fn test_cascade_delete(&self, user_id: &str) -> PanelView {
        let user_id = match parse_id(user_id, "User ID") {
            Ok(id) => id,
            Err(panel) => return panel,
        };

        match self.api.cascade_delete(user_id).await {
            Ok(ApiOutcome::Success(body)) => {
                log::info!("🗑️ Cascade delete of user {} done", user_id);
                let mut panel = PanelView::new(PanelTone::Success, "✓ Cascade Delete Successful");
                if let Some(message) = message_of(&body) {
                    panel = panel.message(message);
                }
                panel.json(body.get("data").unwrap_or(&Value::Null))
            }
            Ok(failed) => PanelView::new(PanelTone::Note, "Note:")
                .message(
                    failed
                        .message()
                        .unwrap_or("User may not exist or already deleted"),
                )
                .hint("Try with a different user ID that exists in the database"),
            Err(e) => service_unreachable(&e),
        }
    }

    /// Shows `data` when present, else the whole body
    pub async fn load_aggregated_stats(&self) -> PanelView {
        let raw = match self.api.composite_stats().await {
            Ok(raw) => raw,
            Err(e) => return service_unreachable(&e),
        };
        let body = raw.json();

        if raw.is_success() {
            let stats = body.get("data").unwrap_or(&body);
            return PanelView::new(PanelTone::Success, "Aggregated Statistics from All Services:")
                .json(stats)
                .hint("This data is aggregated from multiple atomic services through the composite service!");
        }

        // `error` wins over `message` here
        let reason = ["error", "message"]
            .iter()
            .find_map(|key| body.get(*key).and_then(Value::as_str));
        let panel = PanelView::new(PanelTone::Error, "Error:");
        match reason {
            Some(reason) => panel.message(format!("Failed to load statistics: {}", reason)),
            None => panel.message("Failed to load statistics"),
        }
    }

    /// Pretty JSON of `/api/service-info`
    pub async fn load_service_info(&self) -> Option<String> {
        match self.api.service_info().await {
            Ok(info) => Some(pretty_json(&info)),
            Err(e) => {
                log::warn!("⚠️ Service info unavailable: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::transport::testing::MockTransport;
    use crate::services::HttpMethod;
    use serde_json::json;

    fn vm(transport: MockTransport) -> DemoViewModel<MockTransport> {
        DemoViewModel::with_client(ApiClient::with_transport("/api", transport))
    }

    #[tokio::test]
    async fn healthy_composite_is_green() {
        let vm = vm(MockTransport::new()
            .reply(200, json!({"status": "healthy", "dependencies": {"composite_service": "healthy"}})));
        let status = vm.check_service_status().await.unwrap();
        assert_eq!(status.color(), "green");
    }

    #[tokio::test]
    async fn other_or_absent_composite_is_red() {
        let vm = vm(MockTransport::new()
            .reply(200, json!({"dependencies": {"composite_service": "unhealthy"}}))
            .reply(200, json!({"dependencies": {}})));
        assert_eq!(vm.check_service_status().await.unwrap().color(), "red");
        assert_eq!(vm.check_service_status().await.unwrap().color(), "red");
    }

    #[tokio::test]
    async fn health_network_failure_leaves_indicator() {
        let vm = vm(MockTransport::new().fail("Failed to fetch"));
        assert_eq!(vm.check_service_status().await, None);
    }

    #[tokio::test]
    async fn foreign_key_rejection_is_expected_failure() {
        let vm = vm(MockTransport::new()
            .reply(400, json!({"message": "Owner with ID 99999 does not exist"})));
        let panel = vm.test_foreign_key_validation("99999", "Ghost").await;

        assert_eq!(panel.tone, PanelTone::Error);
        assert_eq!(panel.title, "✗ Validation Failed (Expected)");
        assert_eq!(panel.message.as_deref(), Some("Owner with ID 99999 does not exist"));

        let request = &vm.api.transport().requests()[0];
        assert_eq!(request.url, "/api/pets");
        assert_eq!(
            request.body,
            Some(json!({"owner_id": 99999, "name": "Ghost", "breed": "Test Breed", "size": "medium"}))
        );
    }

    #[tokio::test]
    async fn foreign_key_success_shows_body() {
        let vm = vm(MockTransport::new().reply(201, json!({"id": 40})));
        let panel = vm.test_foreign_key_validation("2", "Rex").await;
        assert_eq!(panel.tone.color(), "green");
        assert_eq!(panel.message.as_deref(), Some("Dog created successfully. Owner ID 2 exists."));
        assert_eq!(panel.json.as_deref(), Some("{\n  \"id\": 40\n}"));
    }

    #[tokio::test]
    async fn non_numeric_owner_sends_nothing() {
        let vm = vm(MockTransport::new());
        let panel = vm.test_foreign_key_validation("abc", "Rex").await;
        assert_eq!(panel.message.as_deref(), Some("Owner ID must be a number."));
        assert_eq!(vm.api.transport().request_count(), 0);
    }

    #[tokio::test]
    async fn parallel_execution_reports_time_and_data() {
        let vm = vm(MockTransport::new().reply(200, json!({"user": {"id": 1}, "dogs": []})));
        let result = vm.test_parallel_execution("1").await;

        let timing = result.timing.message.unwrap();
        assert!(timing.starts_with("Total time: "));
        assert!(timing.ends_with("ms"));
        let decimals = timing.trim_end_matches("ms").rsplit('.').next().unwrap();
        assert_eq!(decimals.len(), 2);
        assert!(result.data.unwrap().json.unwrap().contains("\"dogs\""));
        assert_eq!(vm.api.transport().requests()[0].url, "/api/demo/user-complete/1");
    }

    #[tokio::test]
    async fn parallel_failure_uses_default_text() {
        let vm = vm(MockTransport::new().reply(404, json!({})));
        let result = vm.test_parallel_execution("5").await;
        assert_eq!(result.timing.message.as_deref(), Some("Failed to fetch data"));
        assert!(result.data.is_none());
    }

    #[tokio::test]
    async fn cascade_delete_success_and_note() {
        let vm = vm(MockTransport::new()
            .reply(200, json!({"message": "User and 2 dogs deleted", "data": {"dogsDeleted": 2}}))
            .reply(404, json!({})));

        let done = vm.test_cascade_delete("3").await;
        assert_eq!(done.title, "✓ Cascade Delete Successful");
        assert_eq!(done.message.as_deref(), Some("User and 2 dogs deleted"));
        assert!(done.json.unwrap().contains("dogsDeleted"));
        assert_eq!(vm.api.transport().requests()[0].method, HttpMethod::Delete);

        let note = vm.test_cascade_delete("3").await;
        assert_eq!(note.tone.color(), "orange");
        assert_eq!(note.message.as_deref(), Some("User may not exist or already deleted"));
    }

    #[tokio::test]
    async fn aggregated_stats_prefers_data() {
        let vm = vm(MockTransport::new()
            .reply(200, json!({"success": true, "data": {"totalUsers": 3}}))
            .reply(200, json!({"totalUsers": 4}))
            .reply(502, json!({"error": "Composite service unavailable"})));

        assert_eq!(
            vm.load_aggregated_stats().await.json.as_deref(),
            Some("{\n  \"totalUsers\": 3\n}")
        );
        assert_eq!(
            vm.load_aggregated_stats().await.json.as_deref(),
            Some("{\n  \"totalUsers\": 4\n}")
        );
        assert_eq!(
            vm.load_aggregated_stats().await.message.as_deref(),
            Some("Failed to load statistics: Composite service unavailable")
        );
    }

    #[tokio::test]
    async fn aggregated_stats_error_beats_message() {
        let vm = vm(MockTransport::new()
            .reply(500, json!({"message": "Internal", "error": "Timeout calling pet service"}))
            .reply(500, json!({"message": "Internal"}))
            .reply(500, json!({})));

        assert_eq!(
            vm.load_aggregated_stats().await.message.as_deref(),
            Some("Failed to load statistics: Timeout calling pet service")
        );
        assert_eq!(
            vm.load_aggregated_stats().await.message.as_deref(),
            Some("Failed to load statistics: Internal")
        );
        assert_eq!(
            vm.load_aggregated_stats().await.message.as_deref(),
            Some("Failed to load statistics")
        );
    }

    #[tokio::test]
    async fn service_info_is_pretty_printed() {
        let vm = vm(MockTransport::new()
            .reply(200, json!({"service": "web"}))
            .reply(503, json!({"error": "down"})));

        assert_eq!(
            vm.load_service_info().await.as_deref(),
            Some("{\n  \"service\": \"web\"\n}")
        );
        assert_eq!(vm.api.transport().requests()[0].url, "/api/service-info");
        assert_eq!(vm.load_service_info().await, None);
    }

    #[test]
    fn confirm_text_names_user() {
        assert_eq!(
            cascade_confirm_text(" 12 "),
            "Are you sure you want to delete user 12 and all their dogs? This is for demo purposes."
        );
    }
}
