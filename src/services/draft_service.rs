// ============================================================================
// DRAFT SERVICE - booking draft carried from services page to walker pick
// ============================================================================

use gloo_storage::{SessionStorage, Storage};

use crate::models::booking::BookingDraft;
use crate::utils::constants::BOOKING_INFO_KEY;

/// Where the booking draft lives between the two booking steps
pub trait DraftStore {
    fn save(&self, draft: &BookingDraft) -> Result<(), String>;

    /// Last saved draft. Missing or unreadable is `None`.
    fn load(&self) -> Option<BookingDraft>;
}

/// `sessionStorage["bookingInfo"]`, survives page switches in the same tab
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SessionDraftStore;

impl DraftStore for SessionDraftStore {
    fn save(&self, draft: &BookingDraft) -> Result<(), String> {
        SessionStorage::set(BOOKING_INFO_KEY, draft)
            .map_err(|e| format!("Error saving booking draft: {}", e))
    }

    fn load(&self) -> Option<BookingDraft> {
        match SessionStorage::get::<BookingDraft>(BOOKING_INFO_KEY) {
            Ok(draft) => Some(draft),
            Err(e) => {
                log::warn!("⚠️ No booking draft in session: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    pub struct MemoryDraftStore {
        draft: RefCell<Option<BookingDraft>>,
    }

    impl MemoryDraftStore {
        pub fn with(draft: BookingDraft) -> Self {
            Self {
                draft: RefCell::new(Some(draft)),
            }
        }
    }

    impl DraftStore for MemoryDraftStore {
        fn save(&self, draft: &BookingDraft) -> Result<(), String> {
            *self.draft.borrow_mut() = Some(draft.clone());
            Ok(())
        }

        fn load(&self) -> Option<BookingDraft> {
            self.draft.borrow().clone()
        }
    }
}
