use yew::prelude::*;

use crate::components::{
    BookingsPage, DemoPage, HomePage, LoginPage, NavBar, ProfilePage, ServicesPage, SignupPage,
    WalkersPage,
};
use crate::hooks::{use_hash_page, use_login_status, use_page_loader};
use crate::state::AppState;

#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(AppState::default);

    use_login_status(&state);
    use_hash_page(&state);
    use_page_loader(&state);

    html! {
        <>
            <NavBar state={state.clone()} />
            <main class="container">
                <HomePage state={state.clone()} />
                <LoginPage state={state.clone()} />
                <SignupPage state={state.clone()} />
                <ProfilePage state={state.clone()} />
                <ServicesPage state={state.clone()} />
                <WalkersPage state={state.clone()} />
                <BookingsPage state={state.clone()} />
                <DemoPage state={state} />
            </main>
        </>
    }
}
