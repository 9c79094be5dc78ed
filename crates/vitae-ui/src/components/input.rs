use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct TextInputProps {
    pub(crate) id: AttrValue,
    pub(crate) label: AttrValue,
    #[prop_or_default]
    pub(crate) value: AttrValue,
    #[prop_or_default]
    pub(crate) placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) masked: bool,
    #[prop_or_default]
    pub(crate) oninput: Callback<String>,
}

/// Labelled text field; `masked` switches to password entry.
#[function_component(TextInput)]
pub(crate) fn text_input(props: &TextInputProps) -> Html {
    let oninput = {
        let oninput = props.oninput.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                oninput.emit(input.value());
            }
        })
    };
    let input_type = if props.masked { "password" } else { "text" };
    html! {
        <label class="form-control w-full">
            <span class="label-text">{props.label.clone()}</span>
            <input
                class="input input-bordered w-full"
                id={props.id.clone()}
                type={input_type}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                oninput={oninput}
            />
        </label>
    }
}
