//! Modal host: chrome, title, body, and action region.
//!
//! # Design
//! - Open state is owned by the caller; the host only reports close requests.
//! - The action region is caller-rendered so each dialog decides its own controls.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct BaseModalProps {
    pub(crate) open: bool,
    pub(crate) title: AttrValue,
    #[prop_or_default]
    pub(crate) children: Children,
    #[prop_or_default]
    pub(crate) action: Html,
    #[prop_or_default]
    pub(crate) on_close: Callback<()>,
}

#[function_component(BaseModal)]
pub(crate) fn base_modal(props: &BaseModalProps) -> Html {
    let classes = classes!("modal", props.open.then_some("modal-open"));

    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_dismiss = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class={classes} role="dialog" aria-modal="true" aria-hidden={(!props.open).to_string()}>
            <div class="modal-box">
                <header class="flex items-center justify-between mb-4">
                    <h3 class="text-lg font-bold">{props.title.clone()}</h3>
                    <button class="btn btn-sm btn-circle btn-ghost" aria-label="close" onclick={on_dismiss}>{"✕"}</button>
                </header>
                { for props.children.iter() }
                <div class="modal-action">
                    { props.action.clone() }
                </div>
            </div>
            <button class="modal-backdrop" onclick={on_backdrop}></button>
        </div>
    }
}
