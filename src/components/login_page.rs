use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{action_callback, input_value, PageProps};
use crate::state::{AppAction, Page};
use crate::utils::browser::alert;
use crate::viewmodels::{AuthViewModel, LoginForm, LoginOutcome};

#[function_component(LoginPage)]
pub fn login_page(props: &PageProps) -> Html {
    let state = &props.state;
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();

    let on_submit = {
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let dispatcher = state.dispatcher();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = LoginForm {
                name: input_value(&name_ref),
                email: input_value(&email_ref),
            };
            let dispatcher = dispatcher.clone();

            spawn_local(async move {
                let outcome = AuthViewModel::new().login(&form).await;
                alert(&outcome.alert_text());
                if let LoginOutcome::LoggedIn(user) = outcome {
                    // leaves the login page for home
                    dispatcher.dispatch(AppAction::LoggedIn(user));
                }
            });
        })
    };

    html! {
        <section id="login" class={classes!("page", state.router.is_active(Page::Login).then_some("active"))}>
            <div class="form-container">
                <h2>{"Welcome back"}</h2>
                <form id="loginForm" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="loginName">{"Full Name"}</label>
                        <input type="text" id="loginName" ref={name_ref} required=true />
                    </div>
                    <div class="form-group">
                        <label for="loginEmail">{"Email"}</label>
                        <input type="email" id="loginEmail" ref={email_ref} required=true />
                    </div>
                    <button type="submit" class="btn">{"Login"}</button>
                </form>
                <p class="form-footer">
                    {"New to PawPal? "}
                    <a onclick={action_callback::<MouseEvent>(state, AppAction::Navigate(Page::Signup))}>{"Create an account"}</a>
                </p>
            </div>
        </section>
    }
}
