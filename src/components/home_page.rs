use yew::prelude::*;

use crate::components::{action_callback, PageProps};
use crate::state::{AppAction, Page};

#[function_component(HomePage)]
pub fn home_page(props: &PageProps) -> Html {
    let state = &props.state;
    let logged_in = state.auth.is_logged_in();

    html! {
        <section id="home" class={classes!("page", state.router.is_active(Page::Home).then_some("active"))}>
            <div class="hero">
                <h1>{"Trusted walkers for your best friend"}</h1>
                <p>{"Book a walk, meet local walkers, and keep every pet happy."}</p>
                <div class="hero-actions">
                    <button class="btn" onclick={action_callback::<MouseEvent>(state, AppAction::Navigate(Page::Services))}>
                        {"Book a Walk"}
                    </button>
                    if !logged_in {
                        <button class="btn btn-secondary" onclick={action_callback::<MouseEvent>(state, AppAction::Navigate(Page::Signup))}>
                            {"Join PawPal"}
                        </button>
                    }
                </div>
            </div>

            if let Some(stats) = &state.stats {
                <div class="stats-grid">
                    <div class="stat-card"><strong>{stats.total_users}</strong><span>{"Users"}</span></div>
                    <div class="stat-card"><strong>{stats.total_dogs}</strong><span>{"Dogs"}</span></div>
                    <div class="stat-card"><strong>{stats.owners}</strong><span>{"Owners"}</span></div>
                    <div class="stat-card"><strong>{stats.walkers}</strong><span>{"Walkers"}</span></div>
                </div>
            }
        </section>
    }
}
