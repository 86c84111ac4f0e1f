use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{action_callback, PageProps};
use crate::state::{AppAction, Page};
use crate::utils::browser::alert;
use crate::viewmodels::{AuthViewModel, LogoutOutcome};

#[function_component(NavBar)]
pub fn nav_bar(props: &PageProps) -> Html {
    let state = &props.state;
    let auth = &state.auth;

    let link = |page: Page, label: &'static str| {
        let onclick = action_callback::<MouseEvent>(state, AppAction::Navigate(page));
        let class = classes!("nav-link", state.router.is_active(page).then_some("active"));
        html! { <a class={class} href={format!("#{}", page.id())} onclick={onclick}>{label}</a> }
    };

    let on_logout = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| {
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                let outcome = AuthViewModel::new().logout().await;
                if outcome == LogoutOutcome::LoggedOut {
                    dispatcher.dispatch(AppAction::LoggedOut);
                }
                if let Some(text) = outcome.alert_text() {
                    alert(text);
                }
            });
        })
    };

    html! {
        <nav class="navbar">
            <div class="logo" onclick={action_callback::<MouseEvent>(state, AppAction::Navigate(Page::Home))}>
                {"🐾 PawPal"}
            </div>
            <div class="nav-links">
                {link(Page::Home, "Home")}
                {link(Page::Services, "Book a Walk")}
                {link(Page::Demo, "Demo")}
                if auth.shows_guest_nav() {
                    <span class="nav-guest-only">
                        {link(Page::Login, "Login")}
                        {link(Page::Signup, "Sign Up")}
                    </span>
                }
                if auth.shows_auth_nav() {
                    <span class="nav-auth-required">
                        {link(Page::Profile, "My Profile")}
                        {link(Page::Bookings, "My Bookings")}
                        <span id="navUserName" class="nav-user">
                            {auth.welcome_text().unwrap_or_default()}
                        </span>
                        <a class="nav-link" onclick={on_logout}>{"Logout"}</a>
                    </span>
                }
            </div>
        </nav>
    }
}
