use yew::prelude::*;

use crate::state::{AppAction, AppState};

/// `#bookings` style fragment of the current URL, without the `#`
fn location_fragment() -> Option<String> {
    let hash = web_sys::window()?.location().hash().ok()?;
    let id = hash.trim_start_matches('#');
    (!id.is_empty()).then(|| id.to_string())
}

/// Open the section named in the URL fragment, once on mount
#[hook]
pub fn use_hash_page(state: &UseReducerHandle<AppState>) {
    let dispatcher = state.dispatcher();

    use_effect_with((), move |_| {
        if let Some(id) = location_fragment() {
            dispatcher.dispatch(AppAction::ShowPage(id));
        }
        || ()
    });
}
