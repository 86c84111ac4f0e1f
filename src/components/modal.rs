use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub id: &'static str,
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let class = classes!("modal", props.open.then_some("active"));

    html! {
        <div id={props.id} class={class}>
            <div class="modal-content">
                <div class="modal-header">
                    <h2>{props.title.clone()}</h2>
                    <button type="button" class="close-btn" onclick={props.on_close.reform(|_: MouseEvent| ())}>
                        {"×"}
                    </button>
                </div>
                {props.children.clone()}
            </div>
        </div>
    }
}
