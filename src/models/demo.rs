use serde::Serialize;
use serde_json::Value;

use crate::models::user::UserId;

/// Pet creation used to probe the composite service's owner check
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ForeignKeyProbe {
    pub owner_id: UserId,
    pub name: String,
    pub breed: String,
    pub size: String,
}

impl ForeignKeyProbe {
    pub fn new(owner_id: UserId, name: impl Into<String>) -> Self {
        Self {
            owner_id,
            name: name.into(),
            breed: "Test Breed".to_string(),
            size: "medium".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelTone {
    Success,
    Note,
    Error,
}

impl PanelTone {
    pub fn color(self) -> &'static str {
        match self {
            PanelTone::Success => "green",
            PanelTone::Note => "orange",
            PanelTone::Error => "red",
        }
    }
}

/// Rendered result of one demo action
#[derive(Clone, Debug, PartialEq)]
pub struct PanelView {
    pub tone: PanelTone,
    pub title: String,
    pub message: Option<String>,
    pub json: Option<String>,
    pub hint: Option<String>,
}

impl PanelView {
    pub fn new(tone: PanelTone, title: impl Into<String>) -> Self {
        Self {
            tone,
            title: title.into(),
            message: None,
            json: None,
            hint: None,
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Pretty-printed JSON block
    pub fn json(mut self, value: &Value) -> Self {
        self.json = Some(pretty_json(value));
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// One demo output area
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PanelState {
    #[default]
    Hidden,
    Loading(String),
    Done(PanelView),
}

pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn probe_uses_fixed_breed_and_size() {
        let json = serde_json::to_value(ForeignKeyProbe::new(99999, "Ghost")).unwrap();
        assert_eq!(json, json!({"owner_id": 99999, "name": "Ghost", "breed": "Test Breed", "size": "medium"}));
    }

    #[test]
    fn panel_builder_formats_json() {
        let view = PanelView::new(PanelTone::Success, "✓ Success!")
            .message("Dog created")
            .json(&json!({"id": 1}));
        assert_eq!(view.json.as_deref(), Some("{\n  \"id\": 1\n}"));
        assert_eq!(view.tone.color(), "green");
        assert!(view.hint.is_none());
    }
}
