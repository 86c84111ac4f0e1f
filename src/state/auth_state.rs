// ============================================================================
// AUTH STATE - who is using the tab (in memory only)
// ============================================================================

use crate::models::CurrentUser;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum AuthStatus {
    /// `/api/current-user` not answered yet
    #[default]
    Checking,
    Guest,
    LoggedIn(CurrentUser),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub status: AuthStatus,
}

impl AuthState {
    pub fn user(&self) -> Option<&CurrentUser> {
        match &self.status {
            AuthStatus::LoggedIn(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.user().is_some()
    }

    pub fn set_user(&mut self, user: CurrentUser) {
        log::info!("👤 Logged in as {}", user.name);
        self.status = AuthStatus::LoggedIn(user);
    }

    pub fn set_guest(&mut self) {
        self.status = AuthStatus::Guest;
    }

    /// Login/signup links
    pub fn shows_guest_nav(&self) -> bool {
        !self.is_logged_in()
    }

    /// Profile, bookings and logout links
    pub fn shows_auth_nav(&self) -> bool {
        self.is_logged_in()
    }

    pub fn welcome_text(&self) -> Option<String> {
        self.user().map(CurrentUser::welcome_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> CurrentUser {
        CurrentUser {
            id: 1,
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            role: Some("owner".to_string()),
            location: None,
        }
    }

    #[test]
    fn guest_sees_guest_nav_only() {
        let mut auth = AuthState::default();
        auth.set_guest();
        assert!(auth.shows_guest_nav());
        assert!(!auth.shows_auth_nav());
        assert_eq!(auth.welcome_text(), None);
    }

    #[test]
    fn logged_in_user_is_welcomed() {
        let mut auth = AuthState::default();
        auth.set_user(ana());
        assert!(auth.shows_auth_nav());
        assert!(!auth.shows_guest_nav());
        assert_eq!(auth.welcome_text().as_deref(), Some("Welcome, Ana"));
    }
}
