// ============================================================================
// AUTH VIEWMODEL - login, signup, logout, login status
// ============================================================================
// Returns outcomes; components dispatch and alert
// ============================================================================

use crate::config::CONFIG;
use crate::errors::ValidationError;
use crate::models::user::{LoginRequest, SignupRequest};
use crate::models::{AccountType, CurrentUser};
use crate::services::{ApiClient, ApiOutcome, GlooTransport, HttpTransport};
use crate::utils::validation::{missing_fields, validate_phone};

/// Raw login inputs
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub name: String,
    pub email: String,
}

impl LoginForm {
    /// Name trimmed, email trimmed and lower-cased, placeholder password
    pub fn to_request(&self, placeholder_password: &str) -> LoginRequest {
        LoginRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            password: placeholder_password.to_string(),
        }
    }
}

/// Raw signup inputs; account type comes from the selection
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub profile_image_url: String,
    pub bio: String,
}

impl SignupForm {
    pub fn validate(&self, account_type: AccountType) -> Result<SignupRequest, ValidationError> {
        let request = SignupRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            account_type,
            phone: self.phone.trim().to_string(),
            location: self.location.trim().to_string(),
            profile_image_url: self.profile_image_url.trim().to_string(),
            bio: self.bio.trim().to_string(),
        };

        let missing = missing_fields(&[
            ("Full Name", request.name.as_str()),
            ("Email", request.email.as_str()),
            ("Phone", request.phone.as_str()),
            ("Location", request.location.as_str()),
            ("Profile Image URL", request.profile_image_url.as_str()),
            ("Bio", request.bio.as_str()),
        ]);
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        validate_phone(&request.phone)?;
        Ok(request)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum LoginOutcome {
    LoggedIn(CurrentUser),
    Rejected(String),
    NetworkError(String),
}

impl LoginOutcome {
    pub fn alert_text(&self) -> String {
        match self {
            LoginOutcome::LoggedIn(user) => format!("✅ Welcome back, {}!", user.name),
            LoginOutcome::Rejected(message) => format!("❌ Login failed!\n\n{}", message),
            LoginOutcome::NetworkError(error) => {
                format!("❌ Login failed!\n\nNetwork error: {}", error)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SignupOutcome {
    Invalid(ValidationError),
    Created { name: String, email: String },
    DuplicateEmail,
    Rejected(String),
    Failed(String),
    NetworkError(String),
}

impl SignupOutcome {
    pub fn alert_text(&self) -> String {
        match self {
            SignupOutcome::Invalid(error) => error.to_string(),
            SignupOutcome::Created { name, email } => format!(
                "✅ Account created successfully!\n\nYou can now login with:\nName: {}\nEmail: {}",
                name, email
            ),
            SignupOutcome::DuplicateEmail => "❌ Registration failed!\n\nEmail already exists. Please use a different email or login.".to_string(),
            SignupOutcome::Rejected(message) | SignupOutcome::Failed(message) => {
                format!("❌ Registration failed!\n\n{}", message)
            }
            SignupOutcome::NetworkError(error) => {
                format!("❌ Registration failed!\n\nNetwork error: {}", error)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum LogoutOutcome {
    LoggedOut,
    /// Server answered without `success`
    Declined,
    Failed,
}

impl LogoutOutcome {
    pub fn alert_text(&self) -> Option<&'static str> {
        match self {
            LogoutOutcome::LoggedOut => Some("You have been logged out successfully."),
            LogoutOutcome::Declined => None,
            LogoutOutcome::Failed => Some("Error logging out. Please try again."),
        }
    }
}

pub struct AuthViewModel<T = GlooTransport> {
    api: ApiClient<T>,
}

impl AuthViewModel {
    pub fn new() -> Self {
        Self::with_client(ApiClient::new())
    }
}

impl<T: HttpTransport> AuthViewModel<T> {
    pub fn with_client(api: ApiClient<T>) -> Self {
        Self { api }
    }

    /// `None` for guests and when the check itself fails
    pub async fn check_login_status(&self) -> Option<CurrentUser> {
        match self.api.current_user().await {
            Ok(response) if response.success => response.user,
            Ok(_) => None,
            Err(e) => {
                log::error!("❌ Error checking login status: {}", e);
                None
            }
        }
    }

    pub async fn login(&self, form: &LoginForm) -> LoginOutcome {
        let request = form.to_request(&CONFIG.login_placeholder_password);

        match self.api.login(&request).await {
            Ok(ApiOutcome::Success(response)) if response.success => match response.user {
                Some(user) => {
                    log::info!("✅ Login successful: {}", user.name);
                    LoginOutcome::LoggedIn(user)
                }
                None => LoginOutcome::Rejected(
                    response
                        .message
                        .unwrap_or_else(|| "Please check your name and email.".to_string()),
                ),
            },
            Ok(ApiOutcome::Success(response)) => LoginOutcome::Rejected(
                response
                    .message
                    .unwrap_or_else(|| "Please check your name and email.".to_string()),
            ),
            Ok(failed) => LoginOutcome::Rejected(
                failed
                    .message()
                    .unwrap_or("Please check your name and email.")
                    .to_string(),
            ),
            Err(e) => {
                log::error!("❌ Login error: {}", e);
                LoginOutcome::NetworkError(e.to_string())
            }
        }
    }

    /// No request unless every field is present and the phone is valid
    pub async fn signup(&self, form: &SignupForm, account_type: AccountType) -> SignupOutcome {
        let request = match form.validate(account_type) {
            Ok(request) => request,
            Err(error) => return SignupOutcome::Invalid(error),
        };

        match self.api.signup(&request).await {
            Ok(ApiOutcome::Success(_)) => {
                log::info!("✅ Signup successful: {}", request.email);
                SignupOutcome::Created {
                    name: request.name,
                    email: request.email,
                }
            }
            Ok(ApiOutcome::Conflict(_)) => SignupOutcome::DuplicateEmail,
            Ok(ApiOutcome::Validation(message)) => SignupOutcome::Rejected(
                message.unwrap_or_else(|| "Invalid input data. Please check all fields.".to_string()),
            ),
            Ok(ApiOutcome::ServerError { message, .. }) => SignupOutcome::Failed(
                message.unwrap_or_else(|| "Server error. Please try again.".to_string()),
            ),
            Err(e) => {
                log::error!("❌ Signup error: {}", e);
                SignupOutcome::NetworkError(e.to_string())
            }
        }
    }

    pub async fn logout(&self) -> LogoutOutcome {
        match self.api.logout().await {
            Ok(response) if response.success => {
                log::info!("👋 Logged out");
                LogoutOutcome::LoggedOut
            }
            Ok(_) => LogoutOutcome::Declined,
            Err(e) => {
                log::error!("❌ Logout error: {}", e);
                LogoutOutcome::Failed
            }
        }
    }
}
