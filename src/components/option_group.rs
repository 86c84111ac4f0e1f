// ============================================================================
// OPTION GROUP - mutually exclusive buttons bound to a `Choice`
// ============================================================================
// The "selected" class is derived from `selected`; nothing else tracks it.
// ============================================================================

use yew::prelude::*;

use crate::state::Choice;

#[derive(Properties, PartialEq)]
pub struct OptionGroupProps<C: Choice> {
    pub selected: C,
    pub on_select: Callback<C>,
    #[prop_or_else(|| classes!("radio-group"))]
    pub class: Classes,
    #[prop_or("radio-option")]
    pub option_class: &'static str,
}

/// Classes for one option; only the selected one gets "selected"
pub fn option_classes<C: Choice>(base: &'static str, option: C, selected: C) -> Classes {
    classes!(base, (option == selected).then_some("selected"))
}

#[function_component]
pub fn OptionGroup<C>(props: &OptionGroupProps<C>) -> Html
where
    C: Choice,
{
    html! {
        <div class={props.class.clone()}>
            { for C::ALL.iter().map(|option| {
                let option = *option;
                let class = option_classes(props.option_class, option, props.selected);
                let onclick = props.on_select.reform(move |_: MouseEvent| option);
                html! {
                    <div class={class} data-value={option.value()} onclick={onclick}>
                        {option.label()}
                    </div>
                }
            }) }
        </div>
    }
}
