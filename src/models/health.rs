use serde::Deserialize;
use serde_json::Value;

/// Body of `GET /api/health`
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub dependencies: Option<Dependencies>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Dependencies {
    #[serde(default)]
    pub composite_service: Option<Value>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceStatus {
    Healthy,
    Unavailable,
}

impl ServiceStatus {
    pub fn color(self) -> &'static str {
        match self {
            ServiceStatus::Healthy => "green",
            ServiceStatus::Unavailable => "red",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ServiceStatus::Healthy => "✓ Healthy",
            ServiceStatus::Unavailable => "✗ Unavailable",
        }
    }
}

impl HealthResponse {
    /// Healthy only for `"healthy"`, either as the plain value or as the
    /// `status` of a dependency object. Anything else, or absent, is unavailable.
    pub fn composite_status(&self) -> ServiceStatus {
        let value = self
            .dependencies
            .as_ref()
            .and_then(|deps| deps.composite_service.as_ref());

        let status = match value {
            Some(Value::String(status)) => Some(status.as_str()),
            Some(Value::Object(fields)) => fields.get("status").and_then(Value::as_str),
            _ => None,
        };

        match status {
            Some("healthy") => ServiceStatus::Healthy,
            _ => ServiceStatus::Unavailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> HealthResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn healthy_string_is_green() {
        let health = parse(r#"{"dependencies": {"composite_service": "healthy"}}"#);
        assert_eq!(health.composite_status(), ServiceStatus::Healthy);
        assert_eq!(health.composite_status().color(), "green");
    }

    #[test]
    fn other_values_are_red() {
        for body in [
            r#"{"dependencies": {"composite_service": "unhealthy"}}"#,
            r#"{"dependencies": {"composite_service": "unavailable"}}"#,
            r#"{"dependencies": {"composite_service": null}}"#,
            r#"{"dependencies": {"composite_service": 1}}"#,
            r#"{"dependencies": {}}"#,
            r#"{"status": "healthy"}"#,
        ] {
            let health = parse(body);
            assert_eq!(health.composite_status(), ServiceStatus::Unavailable, "{body}");
            assert_eq!(health.composite_status().color(), "red");
        }
    }

    #[test]
    fn dependency_object_uses_its_status() {
        let healthy = parse(r#"{"dependencies": {"composite_service": {"status": "healthy", "deployment": "local"}}}"#);
        assert_eq!(healthy.composite_status(), ServiceStatus::Healthy);

        let down = parse(r#"{"dependencies": {"composite_service": {"status": "unavailable"}}}"#);
        assert_eq!(down.composite_status(), ServiceStatus::Unavailable);
    }
}
