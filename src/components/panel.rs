use yew::prelude::*;

use crate::models::{PanelState, PanelView};

#[derive(Properties, PartialEq)]
pub struct PanelProps {
    pub id: &'static str,
    pub state: PanelState,
}

/// One demo output area: hidden, spinner, or result
#[function_component(Panel)]
pub fn panel(props: &PanelProps) -> Html {
    match &props.state {
        PanelState::Hidden => html! {},
        PanelState::Loading(text) => html! {
            <div id={props.id} class="demo-result">
                <div class="spinner"></div>
                {format!(" {}", text)}
            </div>
        },
        PanelState::Done(view) => html! {
            <div id={props.id} class="demo-result">
                <PanelBody view={view.clone()} />
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
struct PanelBodyProps {
    view: PanelView,
}

#[function_component(PanelBody)]
fn panel_body(props: &PanelBodyProps) -> Html {
    let view = &props.view;
    let style = format!("color: {};", view.tone.color());

    html! {
        <div style={style}>
            <strong>{view.title.clone()}</strong>
            if let Some(message) = &view.message {
                <div class="panel-message">{message.clone()}</div>
            }
            if let Some(json) = &view.json {
                <pre>{json.clone()}</pre>
            }
            if let Some(hint) = &view.hint {
                <small>{hint.clone()}</small>
            }
        </div>
    }
}
