// ============================================================================
// APP STATE - single reducer for the whole front end
// ============================================================================
// Every UI event and every resolved request becomes an `AppAction`.
// `apply` is plain data manipulation so it can be tested without a browser.
// ============================================================================

use std::rc::Rc;

use yew::Reducible;

use crate::models::{
    AccountType, BookingLists, CurrentUser, PanelState, Pet, PetId, PetSex, PetType,
    PlatformStats, ProfileView, Schedule, ServiceStatus, TimeSlot, UserProfile, Walker, WalkerId,
};
use crate::state::auth_state::AuthState;
use crate::state::router::{BookingsTab, Modal, Page, ProfileTab, RouterState};
use crate::state::selection::SelectionState;

/// Output areas of the demo page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DemoPanel {
    ForeignKey,
    ParallelTiming,
    ParallelData,
    Cascade,
    CompositeStats,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DemoState {
    pub service_status: Option<ServiceStatus>,
    pub service_info: Option<String>,
    pub foreign_key: PanelState,
    pub parallel_timing: PanelState,
    pub parallel_data: PanelState,
    pub cascade: PanelState,
    pub composite_stats: PanelState,
}

impl DemoState {
    pub fn panel(&self, panel: DemoPanel) -> &PanelState {
        match panel {
            DemoPanel::ForeignKey => &self.foreign_key,
            DemoPanel::ParallelTiming => &self.parallel_timing,
            DemoPanel::ParallelData => &self.parallel_data,
            DemoPanel::Cascade => &self.cascade,
            DemoPanel::CompositeStats => &self.composite_stats,
        }
    }

    fn panel_mut(&mut self, panel: DemoPanel) -> &mut PanelState {
        match panel {
            DemoPanel::ForeignKey => &mut self.foreign_key,
            DemoPanel::ParallelTiming => &mut self.parallel_timing,
            DemoPanel::ParallelData => &mut self.parallel_data,
            DemoPanel::Cascade => &mut self.cascade,
            DemoPanel::CompositeStats => &mut self.composite_stats,
        }
    }
}

/// Walkers found for the stored booking draft
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WalkerSearch {
    /// "date, time" header
    pub summary: String,
    pub walkers: Vec<Walker>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum AppAction {
    // Router
    Navigate(Page),
    /// Section id from the URL fragment
    ShowPage(String),
    ShowProfileTab(ProfileTab),
    ShowBookingsTab(BookingsTab),
    ShowModal(Modal),
    CloseModal(Modal),

    // Selection
    SelectAccountType(AccountType),
    SelectPetType(PetType),
    SelectPetSex(PetSex),
    SelectSchedule(Schedule),
    SelectTimeSlot(TimeSlot),
    SetRating(u8),
    TogglePet(PetId),
    SelectWalker(WalkerId),

    // Auth
    LoggedIn(CurrentUser),
    Guest,
    LoggedOut,

    // Loaded data
    PetsLoaded(Vec<Pet>),
    ProfileLoaded(Option<UserProfile>),
    BookingsLoaded(BookingLists),
    WalkersLoaded(WalkerSearch),
    StatsLoaded(PlatformStats),

    // Demo
    ServiceStatus(ServiceStatus),
    ServiceInfo(String),
    Panel(DemoPanel, PanelState),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub router: RouterState,
    pub selection: SelectionState,
    pub auth: AuthState,
    pub pets: Vec<Pet>,
    pub profile: Option<UserProfile>,
    pub bookings: BookingLists,
    pub walker_search: WalkerSearch,
    pub stats: Option<PlatformStats>,
    pub demo: DemoState,
}

impl AppState {
    pub fn apply(&mut self, action: AppAction) {
        match action {
            AppAction::Navigate(page) => self.router.navigate(page),
            AppAction::ShowPage(id) => match self.router.show_page(&id) {
                Some(loads) => log::debug!("📄 #{} opened ({} loaders)", id, loads.len()),
                None => log::warn!("⚠️ Unknown page #{}", id),
            },
            AppAction::ShowProfileTab(tab) => self.router.show_profile_tab(tab),
            AppAction::ShowBookingsTab(tab) => self.router.show_bookings_tab(tab),
            AppAction::ShowModal(modal) => self.router.show_modal(modal),
            AppAction::CloseModal(modal) => self.router.close_modal(modal),

            AppAction::SelectAccountType(kind) => self.selection.select_account_type(kind),
            AppAction::SelectPetType(kind) => self.selection.select_pet_type(kind),
            AppAction::SelectPetSex(sex) => self.selection.select_pet_sex(sex),
            AppAction::SelectSchedule(schedule) => self.selection.select_schedule(schedule),
            AppAction::SelectTimeSlot(slot) => self.selection.select_time_slot(slot),
            AppAction::SetRating(stars) => self.selection.set_rating(stars),
            AppAction::TogglePet(id) => {
                self.selection.toggle_pet(id);
            }
            AppAction::SelectWalker(id) => self.selection.select_walker(id),

            AppAction::LoggedIn(user) => {
                self.auth.set_user(user);
                if self.router.page.is_auth_form() {
                    self.router.navigate(Page::Home);
                }
            }
            AppAction::Guest => self.auth.set_guest(),
            AppAction::LoggedOut => {
                self.auth.set_guest();
                self.selection = SelectionState::default();
                self.pets.clear();
                self.profile = None;
                self.bookings = BookingLists::default();
                self.router.navigate(Page::Home);
            }

            AppAction::PetsLoaded(pets) => {
                let ids: Vec<PetId> = pets.iter().map(|pet| pet.id).collect();
                self.selection.retain_pets(&ids);
                self.pets = pets;
            }
            AppAction::ProfileLoaded(profile) => self.profile = profile,
            AppAction::BookingsLoaded(lists) => self.bookings = lists,
            AppAction::WalkersLoaded(search) => self.walker_search = search,
            AppAction::StatsLoaded(stats) => self.stats = Some(stats),

            AppAction::ServiceStatus(status) => self.demo.service_status = Some(status),
            AppAction::ServiceInfo(info) => self.demo.service_info = Some(info),
            AppAction::Panel(panel, state) => *self.demo.panel_mut(panel) = state,
        }
    }

    /// Profile info tab; nothing to show without a user
    pub fn profile_view(&self) -> Option<ProfileView> {
        self.auth
            .user()
            .map(|user| ProfileView::build(user, self.profile.as_ref()))
    }
}

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PanelView;
    use crate::models::PanelTone;
    use crate::state::router::PageLoad;

    fn user() -> CurrentUser {
        CurrentUser {
            id: 4,
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            role: None,
            location: Some("Queens".to_string()),
        }
    }

    fn pet(id: PetId) -> Pet {
        serde_json::from_value(serde_json::json!({"id": id, "name": format!("Pet {id}")})).unwrap()
    }

    #[test]
    fn login_on_auth_form_goes_home() {
        let mut state = AppState::default();
        state.apply(AppAction::Navigate(Page::Login));
        state.apply(AppAction::LoggedIn(user()));
        assert_eq!(state.router.page, Page::Home);
        assert!(state.auth.is_logged_in());
    }

    #[test]
    fn login_elsewhere_keeps_page() {
        let mut state = AppState::default();
        state.apply(AppAction::Navigate(Page::Demo));
        state.apply(AppAction::LoggedIn(user()));
        assert_eq!(state.router.page, Page::Demo);
    }

    #[test]
    fn logout_resets_selection_and_user() {
        let mut state = AppState::default();
        state.apply(AppAction::LoggedIn(user()));
        state.apply(AppAction::PetsLoaded(vec![pet(1)]));
        state.apply(AppAction::TogglePet(1));
        state.apply(AppAction::SetRating(5));
        state.apply(AppAction::Navigate(Page::Bookings));

        state.apply(AppAction::LoggedOut);
        assert!(!state.auth.is_logged_in());
        assert_eq!(state.selection, SelectionState::default());
        assert!(state.pets.is_empty());
        assert_eq!(state.router.page, Page::Home);
    }

    #[test]
    fn empty_pet_list_is_fine() {
        let mut state = AppState::default();
        state.apply(AppAction::PetsLoaded(vec![]));
        assert!(state.pets.is_empty());
        assert!(state.selection.chosen_pets().is_empty());
    }

    #[test]
    fn reloaded_pets_prune_selection() {
        let mut state = AppState::default();
        state.apply(AppAction::PetsLoaded(vec![pet(1), pet(2)]));
        state.apply(AppAction::TogglePet(1));
        state.apply(AppAction::TogglePet(2));
        state.apply(AppAction::PetsLoaded(vec![pet(2)]));
        assert_eq!(state.selection.chosen_pets(), &[2]);
    }

    #[test]
    fn profile_view_needs_user() {
        let mut state = AppState::default();
        assert!(state.profile_view().is_none());
        state.apply(AppAction::LoggedIn(user()));
        let view = state.profile_view().unwrap();
        assert_eq!(view.location, "Queens");
    }

    #[test]
    fn panel_updates_target_only() {
        let mut state = AppState::default();
        let done = PanelState::Done(PanelView::new(PanelTone::Note, "Note:"));
        state.apply(AppAction::Panel(DemoPanel::Cascade, done.clone()));
        assert_eq!(state.demo.panel(DemoPanel::Cascade), &done);
        assert_eq!(state.demo.panel(DemoPanel::ForeignKey), &PanelState::Hidden);
    }

    #[test]
    fn fragment_ids_navigate_known_pages_only() {
        let mut state = AppState::default();
        state.apply(AppAction::ShowPage("demo".to_string()));
        assert!(state.router.is_active(Page::Demo));
        let visit = state.router.visit;

        state.apply(AppAction::ShowPage("admin".to_string()));
        assert!(state.router.is_active(Page::Demo));
        assert_eq!(state.router.visit, visit);
    }

    #[test]
    fn reducer_navigation_exposes_loaders() {
        let state = Rc::new(AppState::default());
        let next = state.reduce(AppAction::Navigate(Page::Services));
        assert_eq!(next.router.page.loaders(), &[PageLoad::PetsForBooking]);
    }
}
