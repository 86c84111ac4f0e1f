// ============================================================================
// PAGE LOADER - runs the data loaders of the page being shown
// ============================================================================

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::PanelState;
use crate::state::{AppAction, AppState, DemoPanel, PageLoad};
use crate::utils::browser::today;
use crate::viewmodels::{BookingViewModel, DemoViewModel, PetViewModel};

/// Fire one loader; the result is dispatched when it resolves
pub fn run_loader(load: PageLoad, dispatcher: UseReducerDispatcher<AppState>) {
    spawn_local(async move {
        match load {
            PageLoad::Pets | PageLoad::PetsForBooking => {
                if let Some(pets) = PetViewModel::new().load_pets().await {
                    dispatcher.dispatch(AppAction::PetsLoaded(pets));
                }
            }
            PageLoad::Profile => {
                let profile = PetViewModel::new().load_profile().await;
                dispatcher.dispatch(AppAction::ProfileLoaded(profile));
            }
            PageLoad::Bookings => {
                let lists = BookingViewModel::new().load_bookings(today()).await;
                dispatcher.dispatch(AppAction::BookingsLoaded(lists));
            }
            PageLoad::DemoStats => {
                dispatcher.dispatch(AppAction::Panel(
                    DemoPanel::CompositeStats,
                    PanelState::Loading("Loading aggregated statistics...".to_string()),
                ));
                let panel = DemoViewModel::new().load_aggregated_stats().await;
                dispatcher.dispatch(AppAction::Panel(DemoPanel::CompositeStats, PanelState::Done(panel)));
            }
            PageLoad::ServiceStatus => {
                if let Some(status) = DemoViewModel::new().check_service_status().await {
                    dispatcher.dispatch(AppAction::ServiceStatus(status));
                }
            }
            PageLoad::ServiceInfo => {
                if let Some(info) = DemoViewModel::new().load_service_info().await {
                    dispatcher.dispatch(AppAction::ServiceInfo(info));
                }
            }
            PageLoad::PlatformStats => {
                if let Some(stats) = PetViewModel::new().load_platform_stats().await {
                    dispatcher.dispatch(AppAction::StatsLoaded(stats));
                }
            }
        }
    });
}

/// Re-runs on every navigation, including to the page already shown
#[hook]
pub fn use_page_loader(state: &UseReducerHandle<AppState>) {
    let page = state.router.page;
    let visit = state.router.visit;
    let dispatcher = state.dispatcher();

    use_effect_with((page, visit), move |(page, _)| {
        log::debug!("📄 Showing {}", page.id());
        for load in page.loaders() {
            run_loader(*load, dispatcher.clone());
        }
        || ()
    });
}
