use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{action_callback, input_value, textarea_value, OptionGroup, PageProps};
use crate::models::AccountType;
use crate::state::{AppAction, Page};
use crate::utils::browser::alert;
use crate::viewmodels::{AuthViewModel, SignupForm, SignupOutcome};

#[function_component(SignupPage)]
pub fn signup_page(props: &PageProps) -> Html {
    let state = &props.state;
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let location_ref = use_node_ref();
    let image_ref = use_node_ref();
    let bio_ref = use_node_ref();

    let on_submit = {
        let refs = (
            name_ref.clone(),
            email_ref.clone(),
            phone_ref.clone(),
            location_ref.clone(),
            image_ref.clone(),
            bio_ref.clone(),
        );
        let account_type = state.selection.account_type;
        let dispatcher = state.dispatcher();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (name, email, phone, location, image, bio) = &refs;
            let form = SignupForm {
                name: input_value(name),
                email: input_value(email),
                phone: input_value(phone),
                location: input_value(location),
                profile_image_url: input_value(image),
                bio: textarea_value(bio),
            };
            let dispatcher = dispatcher.clone();

            spawn_local(async move {
                let outcome = AuthViewModel::new().signup(&form, account_type).await;
                alert(&outcome.alert_text());
                if matches!(outcome, SignupOutcome::Created { .. }) {
                    dispatcher.dispatch(AppAction::Navigate(Page::Login));
                }
            });
        })
    };

    let on_account_type = {
        let dispatcher = state.dispatcher();
        Callback::from(move |kind: AccountType| dispatcher.dispatch(AppAction::SelectAccountType(kind)))
    };

    html! {
        <section id="signup" class={classes!("page", state.router.is_active(Page::Signup).then_some("active"))}>
            <div class="form-container">
                <h2>{"Join PawPal"}</h2>
                <form id="signupForm" onsubmit={on_submit}>
                    <div class="form-group">
                        <label>{"I am a"}</label>
                        <OptionGroup<AccountType> selected={state.selection.account_type} on_select={on_account_type} />
                    </div>
                    <div class="form-group">
                        <label for="signupName">{"Full Name"}</label>
                        <input type="text" id="signupName" ref={name_ref} />
                    </div>
                    <div class="form-group">
                        <label for="signupEmail">{"Email"}</label>
                        <input type="email" id="signupEmail" ref={email_ref} />
                    </div>
                    <div class="form-group">
                        <label for="signupPhone">{"Phone"}</label>
                        <input type="tel" id="signupPhone" placeholder="15551234567" ref={phone_ref} />
                    </div>
                    <div class="form-group">
                        <label for="signupLocation">{"Location"}</label>
                        <input type="text" id="signupLocation" ref={location_ref} />
                    </div>
                    <div class="form-group">
                        <label for="signupProfileImage">{"Profile Image URL"}</label>
                        <input type="url" id="signupProfileImage" ref={image_ref} />
                    </div>
                    <div class="form-group">
                        <label for="signupBio">{"Bio"}</label>
                        <textarea id="signupBio" rows="3" ref={bio_ref}></textarea>
                    </div>
                    <button type="submit" class="btn">{"Create Account"}</button>
                </form>
                <p class="form-footer">
                    {"Already have an account? "}
                    <a onclick={action_callback::<MouseEvent>(state, AppAction::Navigate(Page::Login))}>{"Login"}</a>
                </p>
            </div>
        </section>
    }
}
