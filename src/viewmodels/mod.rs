pub mod auth_viewmodel;
pub mod pet_viewmodel;
pub mod booking_viewmodel;
pub mod review_viewmodel;
pub mod demo_viewmodel;

pub use auth_viewmodel::{AuthViewModel, LoginForm, LoginOutcome, LogoutOutcome, SignupForm, SignupOutcome};
pub use pet_viewmodel::{AddPetForm, PetOutcome, PetViewModel};
pub use booking_viewmodel::{BookingForm, BookingSubmission, BookingViewModel, WalkerOutcome};
pub use review_viewmodel::{ReviewOutcome, ReviewViewModel};
pub use demo_viewmodel::{DemoViewModel, ParallelResult};
