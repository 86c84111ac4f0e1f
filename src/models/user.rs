use serde::{Deserialize, Serialize};

pub type UserId = i64;

/// Account type picked on signup (`accountType` on the wire)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    #[default]
    Owner,
    Walker,
}

/// Logged-in user as returned by `/api/login` and `/api/current-user`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl CurrentUser {
    pub fn welcome_text(&self) -> String {
        format!("Welcome, {}", self.name)
    }
}

/// Body shared by login, signup, logout and current-user responses
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<CurrentUser>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub name: String,
    pub email: String,
    /// Fixed placeholder; the backend authenticates on name + email
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    #[serde(rename = "accountType")]
    pub account_type: AccountType,
    pub phone: String,
    pub location: String,
    pub profile_image_url: String,
    pub bio: String,
}

/// Extended profile from `/api/profile`
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<UserId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ProfileData {
    #[serde(default)]
    pub user: UserProfile,
    #[serde(default)]
    pub dogs: Vec<serde_json::Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ProfileResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<ProfileData>,
}

/// Read-only rows of the profile info tab
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileView {
    pub name: String,
    pub email: String,
    pub role: String,
    pub location: String,
    pub phone: Option<String>,
    pub bio: Option<String>,
}

impl ProfileView {
    /// Session user first, profile endpoint fills the gaps
    pub fn build(user: &CurrentUser, profile: Option<&UserProfile>) -> Self {
        let profile_field = |pick: fn(&UserProfile) -> Option<&String>| {
            profile.and_then(pick).and_then(non_blank)
        };

        Self {
            name: non_blank(&user.name)
                .or_else(|| profile_field(|p| p.name.as_ref()))
                .unwrap_or_else(|| "User".to_string()),
            email: non_blank(&user.email)
                .or_else(|| profile_field(|p| p.email.as_ref()))
                .unwrap_or_else(|| "user@example.com".to_string()),
            role: user.role.as_ref().and_then(non_blank)
                .or_else(|| profile_field(|p| p.role.as_ref()))
                .unwrap_or_else(|| "owner".to_string()),
            location: user.location.as_ref().and_then(non_blank)
                .or_else(|| profile_field(|p| p.location.as_ref()))
                .unwrap_or_else(|| "Not set".to_string()),
            phone: profile_field(|p| p.phone.as_ref()),
            bio: profile_field(|p| p.bio.as_ref()),
        }
    }
}

fn non_blank(value: &String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.clone())
    }
}

/// Platform counters from `/api/stats`
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStats {
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_dogs: u64,
    #[serde(default)]
    pub owners: u64,
    #[serde(default)]
    pub walkers: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct StatsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub stats: Option<PlatformStats>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> CurrentUser {
        CurrentUser {
            id: 7,
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            role: None,
            location: None,
        }
    }

    #[test]
    fn signup_request_uses_account_type_key() {
        let request = SignupRequest {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            account_type: AccountType::Walker,
            phone: "15551234567".to_string(),
            location: "NYC".to_string(),
            profile_image_url: "https://img.example.com/a.png".to_string(),
            bio: "Loves dogs".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["accountType"], "walker");
        assert_eq!(json["profile_image_url"], "https://img.example.com/a.png");
    }

    #[test]
    fn auth_response_tolerates_missing_user() {
        let body: AuthResponse =
            serde_json::from_str(r#"{"success": false, "message": "Not logged in"}"#).unwrap();
        assert!(!body.success);
        assert!(body.user.is_none());
        assert_eq!(body.message.as_deref(), Some("Not logged in"));
    }

    #[test]
    fn profile_view_falls_back_to_defaults() {
        let view = ProfileView::build(&user(), None);
        assert_eq!(view.role, "owner");
        assert_eq!(view.location, "Not set");
        assert_eq!(view.phone, None);
    }

    #[test]
    fn profile_view_uses_profile_for_missing_fields() {
        let profile = UserProfile {
            location: Some("Brooklyn".to_string()),
            phone: Some("15551234567".to_string()),
            role: Some("walker".to_string()),
            ..UserProfile::default()
        };
        let view = ProfileView::build(&user(), Some(&profile));
        assert_eq!(view.name, "Ana");
        assert_eq!(view.location, "Brooklyn");
        assert_eq!(view.role, "walker");
        assert_eq!(view.phone.as_deref(), Some("15551234567"));
    }

    #[test]
    fn stats_decode_camel_case() {
        let body: StatsResponse = serde_json::from_str(
            r#"{"success": true, "stats": {"totalUsers": 12, "totalDogs": 30, "owners": 8, "walkers": 4, "breeds": []}}"#,
        )
        .unwrap();
        let stats = body.stats.unwrap();
        assert_eq!(stats.total_users, 12);
        assert_eq!(stats.total_dogs, 30);
    }
}
