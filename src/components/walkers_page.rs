use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::PageProps;
use crate::models::Walker;
use crate::state::{AppAction, AppState, Page};
use crate::utils::browser::alert;
use crate::viewmodels::{BookingViewModel, WalkerOutcome};

#[function_component(WalkersPage)]
pub fn walkers_page(props: &PageProps) -> Html {
    let state = &props.state;
    let search = &state.walker_search;

    html! {
        <section id="walkers" class={classes!("page", state.router.is_active(Page::Walkers).then_some("active"))}>
            <h2>{"Available Walkers"}</h2>
            <p id="bookingInfo" class="booking-summary">{search.summary.clone()}</p>
            <div id="walkersList">
                { for search.walkers.iter().map(|walker| html! {
                    <WalkerCard key={walker.id} walker={walker.clone()} dispatcher={state.dispatcher()} />
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct WalkerCardProps {
    walker: Walker,
    dispatcher: UseReducerDispatcher<AppState>,
}

#[function_component(WalkerCard)]
fn walker_card(props: &WalkerCardProps) -> Html {
    let walker = &props.walker;

    let onclick = {
        let id = walker.id;
        let dispatcher = props.dispatcher.clone();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(AppAction::SelectWalker(id));
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                let outcome = BookingViewModel::new().select_walker(id).await;
                alert(&outcome.alert_text());
                if outcome == WalkerOutcome::Booked {
                    dispatcher.dispatch(AppAction::Navigate(Page::Bookings));
                }
            });
        })
    };

    html! {
        <div class="walker-card" onclick={onclick}>
            <div class="walker-avatar">{"👤"}</div>
            <div class="walker-info">
                <h3>{walker.name.clone()}</h3>
                <div class="rating">
                    <span class="stars">{format!("⭐ {}", walker.rating)}</span>
                    <span>{format!("• {} reviews", walker.review_count)}</span>
                </div>
            </div>
            <div class="walker-price">
                <small>{"from"}</small><br />
                {walker.price_label()}<br />
                <small>{"per walk"}</small>
            </div>
        </div>
    }
}
