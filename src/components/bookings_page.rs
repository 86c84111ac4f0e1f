use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{action_callback, textarea_value, Modal, PageProps};
use crate::hooks::run_loader;
use crate::models::review::MAX_RATING;
use crate::models::BookingSummary;
use crate::state::{AppAction, AppState, BookingsTab, Modal as ModalId, Page, PageLoad};
use crate::utils::browser::alert;
use crate::viewmodels::{ReviewOutcome, ReviewViewModel};

#[function_component(BookingsPage)]
pub fn bookings_page(props: &PageProps) -> Html {
    let state = &props.state;
    let tab = state.router.bookings_tab;
    let tab_class = |t: BookingsTab| classes!("tab", (tab == t).then_some("active"));

    let (list, empty_text, reviewable) = match tab {
        BookingsTab::Upcoming => (&state.bookings.upcoming, "No upcoming walks.", false),
        BookingsTab::Past => (&state.bookings.past, "No past walks yet.", true),
    };

    html! {
        <section id="bookings" class={classes!("page", state.router.is_active(Page::Bookings).then_some("active"))}>
            <div class="tabs">
                <div class={tab_class(BookingsTab::Upcoming)}
                     onclick={action_callback::<MouseEvent>(state, AppAction::ShowBookingsTab(BookingsTab::Upcoming))}>
                    {"Upcoming"}
                </div>
                <div class={tab_class(BookingsTab::Past)}
                     onclick={action_callback::<MouseEvent>(state, AppAction::ShowBookingsTab(BookingsTab::Past))}>
                    {"Past"}
                </div>
            </div>

            <div class="tab-content">
                if list.is_empty() {
                    <p class="empty">{empty_text}</p>
                }
                { for list.iter().map(|booking| html! {
                    <BookingCard booking={booking.clone()} reviewable={reviewable} dispatcher={state.dispatcher()} />
                }) }
            </div>

            <ReviewModal state={state.clone()} />
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct BookingCardProps {
    booking: BookingSummary,
    reviewable: bool,
    dispatcher: UseReducerDispatcher<AppState>,
}

#[function_component(BookingCard)]
fn booking_card(props: &BookingCardProps) -> Html {
    let booking = &props.booking;

    let on_review = {
        let walker = booking.walker_id;
        let dispatcher = props.dispatcher.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(walker) = walker {
                dispatcher.dispatch(AppAction::SelectWalker(walker));
            }
            dispatcher.dispatch(AppAction::ShowModal(ModalId::Review));
        })
    };

    html! {
        <div class="pet-card">
            <h3>{booking.title()}</h3>
            if let Some(walker) = &booking.walker_name {
                <p>{format!("Walker: {}", walker)}</p>
            }
            if let Some(time) = &booking.time {
                <p>{format!("Time: {}", time)}</p>
            }
            if let Some(pet) = &booking.pet_name {
                <p>{format!("Pet: {}", pet)}</p>
            }
            if let Some(status) = &booking.status {
                <p>{format!("Status: {}", status)}</p>
            }
            if props.reviewable {
                <button class="btn" onclick={on_review}>{"Leave Review"}</button>
            }
        </div>
    }
}

#[function_component(ReviewModal)]
fn review_modal(props: &PageProps) -> Html {
    let state = &props.state;
    let text_ref = use_node_ref();
    let rating = state.selection.rating;

    let on_submit = {
        let text_ref = text_ref.clone();
        let walker = state.selection.walker;
        let dispatcher = state.dispatcher();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let text = textarea_value(&text_ref);
            let dispatcher = dispatcher.clone();

            spawn_local(async move {
                let outcome = ReviewViewModel::new().submit_review(rating, &text, walker).await;
                alert(&outcome.alert_text());
                if outcome == ReviewOutcome::Submitted {
                    dispatcher.dispatch(AppAction::CloseModal(ModalId::Review));
                    run_loader(PageLoad::Bookings, dispatcher);
                }
            });
        })
    };

    let on_close = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(AppAction::CloseModal(ModalId::Review)))
    };

    html! {
        <Modal id="reviewModal" open={state.router.is_open(ModalId::Review)} title="Leave a Review" on_close={on_close}>
            <form id="reviewForm" onsubmit={on_submit}>
                <div id="ratingStars" class="rating-stars">
                    { for (0..MAX_RATING).map(|index| {
                        let opacity = if rating.is_lit(index) { "opacity: 1" } else { "opacity: 0.3" };
                        html! {
                            <span style={opacity}
                                  onclick={action_callback::<MouseEvent>(state, AppAction::SetRating(index + 1))}>
                                {"⭐"}
                            </span>
                        }
                    }) }
                </div>
                <div class="form-group">
                    <label for="reviewText">{"Your review"}</label>
                    <textarea id="reviewText" rows="4" ref={text_ref}></textarea>
                </div>
                <button type="submit" class="btn">{"Submit Review"}</button>
            </form>
        </Modal>
    }
}
