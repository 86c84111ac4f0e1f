// ============================================================================
// STATE MODULE - reducer state (yew::Reducible) and its parts
// ============================================================================

pub mod router;
pub mod selection;
pub mod auth_state;
pub mod app_state;

pub use router::*;
pub use selection::*;
pub use auth_state::*;
pub use app_state::*;
