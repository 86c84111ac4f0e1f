use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{action_callback, input_value, Modal, OptionGroup, PageProps};
use crate::hooks::run_loader;
use crate::models::{Pet, PetSex, PetType, ProfileView};
use crate::state::{AppAction, AppState, Modal as ModalId, Page, PageLoad, ProfileTab};
use crate::utils::browser::{alert, confirm};
use crate::viewmodels::pet_viewmodel::remove_confirm_text;
use crate::viewmodels::{AddPetForm, PetOutcome, PetViewModel};

#[function_component(ProfilePage)]
pub fn profile_page(props: &PageProps) -> Html {
    let state = &props.state;
    let tab = state.router.profile_tab;
    let tab_class = |t: ProfileTab| classes!("tab", (tab == t).then_some("active"));

    html! {
        <section id="profile" class={classes!("page", state.router.is_active(Page::Profile).then_some("active"))}>
            <div class="tabs">
                <div class={tab_class(ProfileTab::Info)}
                     onclick={action_callback::<MouseEvent>(state, AppAction::ShowProfileTab(ProfileTab::Info))}>
                    {"My Info"}
                </div>
                <div class={tab_class(ProfileTab::Pets)}
                     onclick={action_callback::<MouseEvent>(state, AppAction::ShowProfileTab(ProfileTab::Pets))}>
                    {"My Pets"}
                </div>
            </div>

            if tab == ProfileTab::Info {
                <div id="info-tab" class="tab-content">
                    if let Some(view) = state.profile_view() {
                        <ProfileInfo view={view} />
                    }
                </div>
            } else {
                <div id="pets-tab" class="tab-content">
                    <div id="petsList">
                        { for state.pets.iter().map(|pet| html! {
                            <PetCard key={pet.id} pet={pet.clone()} dispatcher={state.dispatcher()} />
                        }) }
                    </div>
                    <button class="btn" onclick={action_callback::<MouseEvent>(state, AppAction::ShowModal(ModalId::AddPet))}>
                        {"+ Add Pet"}
                    </button>
                </div>
            }

            <AddPetModal state={state.clone()} />
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProfileInfoProps {
    view: ProfileView,
}

#[function_component(ProfileInfo)]
fn profile_info(props: &ProfileInfoProps) -> Html {
    let view = &props.view;
    let row = |label: &'static str, value: &str| html! {
        <div class="form-group">
            <label>{label}</label>
            <input type="text" value={value.to_string()} readonly=true />
        </div>
    };

    html! {
        <div class="form-container">
            {row("Full Name", &view.name)}
            {row("Email", &view.email)}
            {row("Role", &view.role)}
            {row("Location", &view.location)}
            if let Some(phone) = &view.phone {
                {row("Phone", phone)}
            }
            if let Some(bio) = &view.bio {
                {row("Bio", bio)}
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PetCardProps {
    pet: Pet,
    dispatcher: UseReducerDispatcher<AppState>,
}

#[function_component(PetCard)]
fn pet_card(props: &PetCardProps) -> Html {
    let pet = &props.pet;

    let on_remove = {
        let pet = pet.clone();
        let dispatcher = props.dispatcher.clone();
        Callback::from(move |_: MouseEvent| {
            if !confirm(&remove_confirm_text(&pet)) {
                return;
            }
            let id = pet.id;
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                let outcome = PetViewModel::new().delete_pet(id).await;
                if outcome.changed() {
                    run_loader(PageLoad::Pets, dispatcher);
                } else {
                    alert(&outcome.alert_text());
                }
            });
        })
    };

    html! {
        <div class="pet-card">
            <div class="pet-header">
                <div class="pet-avatar">{pet.pet_type.emoji()}</div>
                <div class="pet-details">
                    <h3>{pet.name.clone()}</h3>
                    <div class="pet-info">
                        <span>{pet.type_label()}</span>
                        <span>{"•"}</span>
                        <span>{pet.breed_label().to_string()}</span>
                    </div>
                </div>
                <button class="btn-link" onclick={on_remove}>{"Remove"}</button>
            </div>
        </div>
    }
}

#[function_component(AddPetModal)]
fn add_pet_modal(props: &PageProps) -> Html {
    let state = &props.state;
    let name_ref = use_node_ref();
    let breed_ref = use_node_ref();
    let weight_ref = use_node_ref();
    let years_ref = use_node_ref();
    let months_ref = use_node_ref();

    let on_submit = {
        let refs = (
            name_ref.clone(),
            breed_ref.clone(),
            weight_ref.clone(),
            years_ref.clone(),
            months_ref.clone(),
        );
        let pet_type = state.selection.pet_type;
        let sex = state.selection.pet_sex;
        let dispatcher = state.dispatcher();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (name, breed, weight, years, months) = &refs;
            let form = AddPetForm {
                name: input_value(name),
                breed: input_value(breed),
                weight: input_value(weight),
                age_years: input_value(years),
                age_months: input_value(months),
            };
            let dispatcher = dispatcher.clone();

            spawn_local(async move {
                let outcome = PetViewModel::new().add_pet(&form, pet_type, sex).await;
                alert(&outcome.alert_text());
                if outcome == PetOutcome::Added {
                    dispatcher.dispatch(AppAction::CloseModal(ModalId::AddPet));
                    run_loader(PageLoad::Pets, dispatcher);
                }
            });
        })
    };

    let on_close = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(AppAction::CloseModal(ModalId::AddPet)))
    };
    let on_pet_type = {
        let dispatcher = state.dispatcher();
        Callback::from(move |kind: PetType| dispatcher.dispatch(AppAction::SelectPetType(kind)))
    };
    let on_pet_sex = {
        let dispatcher = state.dispatcher();
        Callback::from(move |sex: PetSex| dispatcher.dispatch(AppAction::SelectPetSex(sex)))
    };

    html! {
        <Modal id="addPetModal" open={state.router.is_open(ModalId::AddPet)} title="Add a Pet" on_close={on_close}>
            <form id="addPetForm" onsubmit={on_submit}>
                <div class="form-group">
                    <label>{"Type"}</label>
                    <OptionGroup<PetType> selected={state.selection.pet_type} on_select={on_pet_type} />
                </div>
                <div class="form-group">
                    <label for="petName">{"Name"}</label>
                    <input type="text" id="petName" ref={name_ref} />
                </div>
                <div class="form-group">
                    <label for="petBreed">{"Breed"}</label>
                    <input type="text" id="petBreed" ref={breed_ref} />
                </div>
                <div class="form-group">
                    <label for="petWeight">{"Weight (lbs)"}</label>
                    <input type="number" id="petWeight" min="0" ref={weight_ref} />
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="petAgeYears">{"Age (years)"}</label>
                        <input type="number" id="petAgeYears" min="0" ref={years_ref} />
                    </div>
                    <div class="form-group">
                        <label for="petAgeMonths">{"Age (months)"}</label>
                        <input type="number" id="petAgeMonths" min="0" max="11" ref={months_ref} />
                    </div>
                </div>
                <div class="form-group">
                    <label>{"Sex"}</label>
                    <OptionGroup<PetSex> selected={state.selection.pet_sex} on_select={on_pet_sex} />
                </div>
                <button type="submit" class="btn">{"Save Pet"}</button>
            </form>
        </Modal>
    }
}
