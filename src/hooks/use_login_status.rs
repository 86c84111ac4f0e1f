use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::state::{AppAction, AppState};
use crate::viewmodels::AuthViewModel;

/// Ask the server who is logged in, once on mount
#[hook]
pub fn use_login_status(state: &UseReducerHandle<AppState>) {
    let dispatcher = state.dispatcher();

    use_effect_with((), move |_| {
        spawn_local(async move {
            match AuthViewModel::new().check_login_status().await {
                Some(user) => dispatcher.dispatch(AppAction::LoggedIn(user)),
                None => dispatcher.dispatch(AppAction::Guest),
            }
        });
        || ()
    });
}
