use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{input_value, OptionGroup, PageProps};
use crate::models::{Schedule, TimeSlot};
use crate::state::{AppAction, Page};
use crate::utils::browser::{alert, today_iso};
use crate::viewmodels::{BookingForm, BookingSubmission, BookingViewModel};

#[function_component(ServicesPage)]
pub fn services_page(props: &PageProps) -> Html {
    let state = &props.state;
    let selection = &state.selection;
    let date_ref = use_node_ref();
    let address_ref = use_node_ref();

    let on_submit = {
        let date_ref = date_ref.clone();
        let address_ref = address_ref.clone();
        let selection = selection.clone();
        let dispatcher = state.dispatcher();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = BookingForm {
                date: input_value(&date_ref),
                address: input_value(&address_ref),
            };
            let selection = selection.clone();
            let dispatcher = dispatcher.clone();

            spawn_local(async move {
                let outcome = BookingViewModel::new().submit_booking(&form, &selection).await;
                if let Some(text) = outcome.alert_text() {
                    alert(&text);
                }
                match outcome {
                    BookingSubmission::Invalid(_) => {}
                    BookingSubmission::Walkers(search) => {
                        dispatcher.dispatch(AppAction::WalkersLoaded(search));
                        dispatcher.dispatch(AppAction::Navigate(Page::Walkers));
                    }
                    BookingSubmission::WalkersUnavailable => {
                        dispatcher.dispatch(AppAction::Navigate(Page::Walkers));
                    }
                }
            });
        })
    };

    let on_schedule = {
        let dispatcher = state.dispatcher();
        Callback::from(move |schedule: Schedule| dispatcher.dispatch(AppAction::SelectSchedule(schedule)))
    };
    let on_time = {
        let dispatcher = state.dispatcher();
        Callback::from(move |slot: TimeSlot| dispatcher.dispatch(AppAction::SelectTimeSlot(slot)))
    };

    html! {
        <section id="services" class={classes!("page", state.router.is_active(Page::Services).then_some("active"))}>
            <div class="form-container">
                <h2>{"Book a Dog Walk"}</h2>
                <form id="bookingForm" onsubmit={on_submit}>
                    <div class="form-group">
                        <label>{"Schedule"}</label>
                        <OptionGroup<Schedule>
                            selected={selection.schedule}
                            on_select={on_schedule}
                            class={classes!("schedule-options")}
                            option_class="schedule-option"
                        />
                    </div>

                    <div class="form-group">
                        <label>{"Which pets?"}</label>
                        <div id="petsSelection" class="radio-group">
                            { for state.pets.iter().map(|pet| {
                                let id = pet.id;
                                let dispatcher = state.dispatcher();
                                let class = classes!("radio-option", selection.is_pet_chosen(id).then_some("selected"));
                                html! {
                                    <div key={id} class={class} onclick={Callback::from(move |_: MouseEvent| dispatcher.dispatch(AppAction::TogglePet(id)))}>
                                        {format!("{} {}", pet.pet_type.emoji(), pet.name)}
                                    </div>
                                }
                            }) }
                        </div>
                    </div>

                    <div class="form-group">
                        <label for="bookingDate">{"Date"}</label>
                        <input type="date" id="bookingDate" min={today_iso()} ref={date_ref} />
                    </div>

                    <div class="form-group">
                        <label>{"Time"}</label>
                        <OptionGroup<TimeSlot>
                            selected={selection.time_slot}
                            on_select={on_time}
                            class={classes!("time-slots")}
                            option_class="time-slot"
                        />
                    </div>

                    <div class="form-group">
                        <label for="bookingAddress">{"Address"}</label>
                        <input type="text" id="bookingAddress" ref={address_ref} />
                    </div>

                    <button type="submit" class="btn">{"Find Walkers"}</button>
                </form>
            </div>
        </section>
    }
}
