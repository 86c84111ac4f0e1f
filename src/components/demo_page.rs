use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{input_value, PageProps, Panel};
use crate::config::CONFIG;
use crate::hooks::run_loader;
use crate::models::PanelState;
use crate::state::{AppAction, AppState, DemoPanel, Page, PageLoad};
use crate::utils::browser::confirm;
use crate::utils::constants::DEMO_MISSING_OWNER_ID;
use crate::viewmodels::demo_viewmodel::cascade_confirm_text;
use crate::viewmodels::DemoViewModel;

fn loading(dispatcher: &UseReducerDispatcher<AppState>, panel: DemoPanel, text: &str) {
    dispatcher.dispatch(AppAction::Panel(panel, PanelState::Loading(text.to_string())));
}

#[function_component(DemoPage)]
pub fn demo_page(props: &PageProps) -> Html {
    let state = &props.state;
    let demo = &state.demo;
    let ports = &CONFIG.demo_config;

    let owner_ref = use_node_ref();
    let dog_ref = use_node_ref();
    let parallel_ref = use_node_ref();
    let cascade_ref = use_node_ref();

    let on_foreign_key = {
        let owner_ref = owner_ref.clone();
        let dog_ref = dog_ref.clone();
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| {
            let owner_id = input_value(&owner_ref);
            let dog_name = input_value(&dog_ref);
            let dispatcher = dispatcher.clone();
            loading(&dispatcher, DemoPanel::ForeignKey, "Testing foreign key validation...");
            spawn_local(async move {
                let panel = DemoViewModel::new()
                    .test_foreign_key_validation(&owner_id, &dog_name)
                    .await;
                dispatcher.dispatch(AppAction::Panel(DemoPanel::ForeignKey, PanelState::Done(panel)));
            });
        })
    };

    let on_parallel = {
        let parallel_ref = parallel_ref.clone();
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| {
            let user_id = input_value(&parallel_ref);
            let dispatcher = dispatcher.clone();
            loading(&dispatcher, DemoPanel::ParallelTiming, "Fetching data in parallel...");
            dispatcher.dispatch(AppAction::Panel(DemoPanel::ParallelData, PanelState::Hidden));
            spawn_local(async move {
                let result = DemoViewModel::new().test_parallel_execution(&user_id).await;
                dispatcher.dispatch(AppAction::Panel(
                    DemoPanel::ParallelTiming,
                    PanelState::Done(result.timing),
                ));
                let data = result.data.map_or(PanelState::Hidden, PanelState::Done);
                dispatcher.dispatch(AppAction::Panel(DemoPanel::ParallelData, data));
            });
        })
    };

    let on_cascade = {
        let cascade_ref = cascade_ref.clone();
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| {
            let user_id = input_value(&cascade_ref);
            if !confirm(&cascade_confirm_text(&user_id)) {
                return;
            }
            let dispatcher = dispatcher.clone();
            loading(&dispatcher, DemoPanel::Cascade, "Performing cascade delete...");
            spawn_local(async move {
                let panel = DemoViewModel::new().test_cascade_delete(&user_id).await;
                dispatcher.dispatch(AppAction::Panel(DemoPanel::Cascade, PanelState::Done(panel)));
            });
        })
    };

    let on_stats = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| run_loader(PageLoad::DemoStats, dispatcher.clone()))
    };
    let on_refresh_status = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| run_loader(PageLoad::ServiceStatus, dispatcher.clone()))
    };

    let composite = demo.service_status.map(|status| {
        let style = format!("color: {};", status.color());
        html! { <span style={style}>{status.label()}</span> }
    });

    html! {
        <section id="demo" class={classes!("page", state.router.is_active(Page::Demo).then_some("active"))}>
            <h2>{"Composite Service Demo"}</h2>

            <div class="demo-card">
                <h3>{"Service Status"}</h3>
                <div id="serviceStatus">
                    <div>{"Web App: "}<span style="color: green;">{"✓ Running"}</span></div>
                    <div>
                        {format!("Composite Service (Port {}): ", ports.composite_service_port)}
                        {composite.unwrap_or_else(|| html! { <span>{"Checking..."}</span> })}
                    </div>
                    <div class="hint">
                        {format!("Make sure composite-service is running on port {}", ports.composite_service_port)}<br />
                        {format!("User service should be running on port {}", ports.user_service_port)}
                    </div>
                </div>
                <button class="btn btn-secondary" onclick={on_refresh_status}>{"Refresh"}</button>
            </div>

            <div class="demo-card">
                <h3>{"1. Foreign Key Validation"}</h3>
                <div class="form-row">
                    <input type="number" id="demoOwnerId" value={DEMO_MISSING_OWNER_ID} ref={owner_ref} />
                    <input type="text" id="demoDogName" value="Ghost Dog" ref={dog_ref} />
                    <button class="btn" onclick={on_foreign_key}>{"Create Dog"}</button>
                </div>
                <Panel id="foreignKeyResult" state={demo.panel(DemoPanel::ForeignKey).clone()} />
            </div>

            <div class="demo-card">
                <h3>{"2. Parallel Execution"}</h3>
                <div class="form-row">
                    <input type="number" id="parallelUserId" value="1" ref={parallel_ref} />
                    <button class="btn" onclick={on_parallel}>{"Fetch User Data"}</button>
                </div>
                <Panel id="parallelTiming" state={demo.panel(DemoPanel::ParallelTiming).clone()} />
                <Panel id="parallelData" state={demo.panel(DemoPanel::ParallelData).clone()} />
            </div>

            <div class="demo-card">
                <h3>{"3. Cascade Delete"}</h3>
                <div class="form-row">
                    <input type="number" id="cascadeUserId" ref={cascade_ref} />
                    <button class="btn btn-danger" onclick={on_cascade}>{"Delete User"}</button>
                </div>
                <Panel id="cascadeResult" state={demo.panel(DemoPanel::Cascade).clone()} />
            </div>

            <div class="demo-card">
                <h3>{"4. Aggregated Statistics"}</h3>
                <button class="btn" onclick={on_stats}>{"Load Statistics"}</button>
                <Panel id="compositeStats" state={demo.panel(DemoPanel::CompositeStats).clone()} />
            </div>

            if let Some(info) = &demo.service_info {
                <div class="demo-card">
                    <h3>{"Service Info"}</h3>
                    <pre>{info.clone()}</pre>
                </div>
            }
        </section>
    }
}

