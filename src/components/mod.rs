// ============================================================================
// COMPONENTS - Yew views over the shared app state
// ============================================================================

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::state::{AppAction, AppState};

pub mod app;
pub mod nav_bar;
pub mod option_group;
pub mod modal;
pub mod panel;
pub mod home_page;
pub mod login_page;
pub mod signup_page;
pub mod profile_page;
pub mod services_page;
pub mod walkers_page;
pub mod bookings_page;
pub mod demo_page;

pub use app::App;
pub use nav_bar::NavBar;
pub use option_group::OptionGroup;
pub use modal::Modal;
pub use panel::Panel;
pub use home_page::HomePage;
pub use login_page::LoginPage;
pub use signup_page::SignupPage;
pub use profile_page::ProfilePage;
pub use services_page::ServicesPage;
pub use walkers_page::WalkersPage;
pub use bookings_page::BookingsPage;
pub use demo_page::DemoPage;

/// Every page gets the reducer handle
#[derive(Properties, PartialEq)]
pub struct PageProps {
    pub state: UseReducerHandle<AppState>,
}

/// Callback that dispatches a fixed action, ignoring the event
pub fn action_callback<E: 'static>(state: &UseReducerHandle<AppState>, action: AppAction) -> Callback<E> {
    let dispatcher = state.dispatcher();
    Callback::from(move |_: E| dispatcher.dispatch(action.clone()))
}

pub fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

pub fn textarea_value(node: &NodeRef) -> String {
    node.cast::<HtmlTextAreaElement>()
        .map(|area| area.value())
        .unwrap_or_default()
}
