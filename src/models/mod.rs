pub mod user;
pub mod pet;
pub mod walker;
pub mod booking;
pub mod review;
pub mod health;
pub mod demo;
pub(crate) mod lenient;

pub use user::{AccountType, AuthResponse, CurrentUser, PlatformStats, ProfileView, UserId, UserProfile};
pub use pet::{NewPet, Pet, PetId, PetSex, PetSize, PetType};
pub use walker::{Walker, WalkerId};
pub use booking::{BookingDraft, BookingLists, BookingSummary, Schedule, TimeSlot};
pub use review::{Rating, ReviewDraft};
pub use health::{HealthResponse, ServiceStatus};
pub use demo::{PanelState, PanelTone, PanelView};
