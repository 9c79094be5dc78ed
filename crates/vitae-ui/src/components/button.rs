use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ButtonProps {
    #[prop_or_default]
    pub(crate) children: Children,
    #[prop_or_default]
    pub(crate) outline: bool,
    #[prop_or_default]
    pub(crate) is_loading: bool,
    #[prop_or_default]
    pub(crate) disabled: bool,
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or_default]
    pub(crate) r#type: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) onclick: Callback<MouseEvent>,
}

#[function_component(Button)]
pub(crate) fn button(props: &ButtonProps) -> Html {
    let classes = classes!(
        "btn",
        if props.outline { "btn-outline" } else { "btn-primary" },
        props.class.clone()
    );

    html! {
        <button
            class={classes}
            disabled={props.disabled || props.is_loading}
            aria-busy={props.is_loading.to_string()}
            type={props.r#type.clone().unwrap_or_else(|| AttrValue::from("button"))}
            onclick={props.onclick.clone()}
        >
            if props.is_loading {
                <span class="loading loading-spinner loading-sm" role="status" />
            }
            { for props.children.iter() }
        </button>
    }
}
