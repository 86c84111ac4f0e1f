// ============================================================================
// BOOKING VIEWMODEL - draft, walker search, booking creation, bookings list
// ============================================================================

use chrono::NaiveDate;

use crate::errors::ValidationError;
use crate::models::booking::CreateBookingRequest;
use crate::models::{BookingDraft, BookingLists, WalkerId};
use crate::services::{ApiClient, DraftStore, GlooTransport, HttpTransport, SessionDraftStore};
use crate::state::{SelectionState, WalkerSearch};

/// Raw booking form inputs; schedule, pets and time come from the selection
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingForm {
    pub date: String,
    pub address: String,
}

impl BookingForm {
    /// At least one pet, nothing else is checked
    pub fn to_draft(&self, selection: &SelectionState) -> Result<BookingDraft, ValidationError> {
        if selection.chosen_pets().is_empty() {
            return Err(ValidationError::NoPetSelected);
        }
        Ok(BookingDraft {
            schedule: selection.schedule,
            pets: selection.chosen_pets().to_vec(),
            date: self.date.clone(),
            time: selection.time_slot,
            address: self.address.clone(),
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum BookingSubmission {
    Invalid(ValidationError),
    Walkers(WalkerSearch),
    /// Draft stored but the search failed; walkers page still shown
    WalkersUnavailable,
}

impl BookingSubmission {
    pub fn alert_text(&self) -> Option<String> {
        match self {
            BookingSubmission::Invalid(error) => Some(error.to_string()),
            BookingSubmission::Walkers(_) => None,
            BookingSubmission::WalkersUnavailable => Some("Failed to load walkers".to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum WalkerOutcome {
    Booked,
    Failed(String),
}

impl WalkerOutcome {
    pub fn alert_text(&self) -> String {
        match self {
            WalkerOutcome::Booked => "Booking created successfully!".to_string(),
            WalkerOutcome::Failed(error) => format!("Failed to create booking: {}", error),
        }
    }
}

pub struct BookingViewModel<T = GlooTransport, S = SessionDraftStore> {
    api: ApiClient<T>,
    drafts: S,
}

impl BookingViewModel {
    pub fn new() -> Self {
        Self::with_parts(ApiClient::new(), SessionDraftStore)
    }
}

impl<T: HttpTransport, S: DraftStore> BookingViewModel<T, S> {
    pub fn with_parts(api: ApiClient<T>, drafts: S) -> Self {
        Self { api, drafts }
    }

    /// Store the draft and search walkers for its date and time
    pub async fn submit_booking(&self, form: &BookingForm, selection: &SelectionState) -> BookingSubmission {
        let draft = match form.to_draft(selection) {
            Ok(draft) => draft,
            Err(error) => return BookingSubmission::Invalid(error),
        };

        if let Err(e) = self.drafts.save(&draft) {
            log::warn!("⚠️ {}", e);
        }

        match self.api.walkers(&draft.date, draft.time).await {
            Ok(response) => {
                log::info!("🚶 {} walkers for {}", response.walkers.len(), draft.summary());
                BookingSubmission::Walkers(WalkerSearch {
                    summary: draft.summary(),
                    walkers: response.walkers,
                })
            }
            Err(e) => {
                log::error!("❌ Failed to load walkers: {}", e);
                BookingSubmission::WalkersUnavailable
            }
        }
    }

    /// Book the stored draft with `walker_id`. The draft stays stored.
    pub async fn select_walker(&self, walker_id: WalkerId) -> WalkerOutcome {
        let request = CreateBookingRequest {
            draft: self.drafts.load(),
            walker_id,
        };

        match self.api.create_booking(&request).await {
            Ok(_) => {
                log::info!("✅ Booking created with walker {}", walker_id);
                WalkerOutcome::Booked
            }
            Err(e) => {
                log::error!("❌ Failed to create booking: {}", e);
                WalkerOutcome::Failed(e.to_string())
            }
        }
    }

    /// Split around `today`; any failure shows empty lists
    pub async fn load_bookings(&self, today: NaiveDate) -> BookingLists {
        match self.api.bookings().await {
            Ok(response) => BookingLists::partition(response.bookings, today),
            Err(e) => {
                log::error!("❌ Failed to load bookings: {}", e);
                BookingLists::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Schedule, TimeSlot};
    use crate::services::draft_service::testing::MemoryDraftStore;
    use crate::services::transport::testing::MockTransport;
    use serde_json::json;

    type TestVm = BookingViewModel<MockTransport, MemoryDraftStore>;

    fn vm(transport: MockTransport, drafts: MemoryDraftStore) -> TestVm {
        BookingViewModel::with_parts(ApiClient::with_transport("/api", transport), drafts)
    }

    fn form() -> BookingForm {
        BookingForm {
            date: "2025-10-20".to_string(),
            address: "12 Elm St".to_string(),
        }
    }

    #[tokio::test]
    async fn zero_pets_sends_nothing() {
        let vm = vm(MockTransport::new(), MemoryDraftStore::default());
        let outcome = vm.submit_booking(&form(), &SelectionState::default()).await;

        assert_eq!(outcome, BookingSubmission::Invalid(ValidationError::NoPetSelected));
        assert_eq!(outcome.alert_text().as_deref(), Some("Please select at least one pet"));
        assert_eq!(vm.api.transport().request_count(), 0);
        assert_eq!(vm.drafts.load(), None);
    }

    #[tokio::test]
    async fn submit_stores_draft_and_searches() {
        let vm = vm(
            MockTransport::new().reply(
                200,
                json!({"success": true, "walkers": [{"id": 3, "name": "Elizabeth M.", "rating": 4.9, "reviews": 120, "price": 25}]}),
            ),
            MemoryDraftStore::default(),
        );
        let mut selection = SelectionState::default();
        selection.toggle_pet(8);
        selection.select_time_slot(TimeSlot::Midday);

        let outcome = vm.submit_booking(&form(), &selection).await;
        let BookingSubmission::Walkers(search) = outcome else {
            panic!("expected walkers");
        };
        assert_eq!(search.summary, "2025-10-20, 12pm-2pm");
        assert_eq!(search.walkers[0].review_count, 120);

        let stored = vm.drafts.load().unwrap();
        assert_eq!(stored.pets, vec![8]);
        assert_eq!(stored.schedule, Schedule::OneTime);
        assert_eq!(
            vm.api.transport().requests()[0].url,
            "/api/walkers?date=2025-10-20&time=12pm-2pm"
        );
    }

    #[tokio::test]
    async fn unrated_walker_does_not_sink_the_search() {
        let vm = vm(
            MockTransport::new().reply(
                200,
                json!({"success": true, "walkers": [
                    {"id": 1, "name": "New W.", "rating": null, "reviews": 0, "price": 20},
                    {"id": 2, "name": "Elizabeth M.", "rating": 4.9, "reviews": 120, "price": 25}
                ]}),
            ),
            MemoryDraftStore::default(),
        );
        let mut selection = SelectionState::default();
        selection.toggle_pet(1);

        let BookingSubmission::Walkers(search) = vm.submit_booking(&form(), &selection).await else {
            panic!("expected walkers");
        };
        assert_eq!(search.walkers.len(), 2);
        assert_eq!(search.walkers[0].rating, 0.0);
    }

    #[tokio::test]
    async fn failed_search_still_keeps_draft() {
        let vm = vm(MockTransport::new().fail("offline"), MemoryDraftStore::default());
        let mut selection = SelectionState::default();
        selection.toggle_pet(1);

        let outcome = vm.submit_booking(&form(), &selection).await;
        assert_eq!(outcome, BookingSubmission::WalkersUnavailable);
        assert!(vm.drafts.load().is_some());
    }

    #[tokio::test]
    async fn select_walker_posts_draft_plus_walker_and_keeps_draft() {
        let draft = BookingDraft {
            schedule: Schedule::Recurring,
            pets: vec![1, 2],
            date: "2025-10-20".to_string(),
            time: TimeSlot::LateAfternoon,
            address: "12 Elm St".to_string(),
        };
        let vm = vm(
            MockTransport::new().reply(201, json!({"success": true})),
            MemoryDraftStore::with(draft.clone()),
        );

        assert_eq!(vm.select_walker(5).await, WalkerOutcome::Booked);
        let body = vm.api.transport().requests()[0].body.clone().unwrap();
        assert_eq!(body["walkerId"], 5);
        assert_eq!(body["schedule"], "recurring");
        assert_eq!(body["pets"], json!([1, 2]));
        assert_eq!(vm.drafts.load(), Some(draft));
    }

    #[tokio::test]
    async fn select_walker_without_draft_sends_walker_only() {
        let vm = vm(
            MockTransport::new().reply(500, json!({})),
            MemoryDraftStore::default(),
        );
        let outcome = vm.select_walker(2).await;
        assert_eq!(outcome.alert_text(), "Failed to create booking: API call failed");
        assert_eq!(vm.api.transport().requests()[0].body, Some(json!({"walkerId": 2})));
    }

    #[tokio::test]
    async fn bookings_failure_gives_empty_lists() {
        let today = NaiveDate::from_ymd_opt(2025, 10, 18).unwrap();
        let vm = vm(MockTransport::new().fail("offline"), MemoryDraftStore::default());
        assert_eq!(vm.load_bookings(today).await, BookingLists::default());
    }

    #[tokio::test]
    async fn bookings_split_by_today() {
        let today = NaiveDate::from_ymd_opt(2025, 10, 18).unwrap();
        let vm = vm(
            MockTransport::new().reply(
                200,
                json!({"bookings": [{"date": "2025-10-20", "walker_name": "Elizabeth M."}, {"date": "2025-10-15"}]}),
            ),
            MemoryDraftStore::default(),
        );
        let lists = vm.load_bookings(today).await;
        assert_eq!(lists.upcoming.len(), 1);
        assert_eq!(lists.past.len(), 1);
    }
}
