pub mod transport;
pub mod api_client;
pub mod draft_service;

pub use api_client::{ApiClient, ApiOutcome};
pub use draft_service::{DraftStore, SessionDraftStore};
pub use transport::{GlooTransport, HttpMethod, HttpTransport};
