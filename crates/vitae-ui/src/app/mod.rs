use crate::core::config::DialogConfig;
use crate::features::auth_dialog::commands::sync_session;
use crate::features::auth_dialog::state::AuthDialogState;
use crate::features::auth_dialog::view::AuthDialog;
use crate::i18n::TranslationBundle;
use crate::services::auth::RestAuthProvider;
use context::AuthCtx;
use pages::{DashboardPage, HomePage};
use preferences::{api_base_url, load_dialog_config, load_locale};
pub(crate) use routes::Route;
use std::rc::Rc;
use vitae_events::ModalBus;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::Dispatch;

pub(crate) mod context;
mod pages;
mod preferences;
mod routes;

#[function_component(VitaeApp)]
pub(crate) fn vitae_app() -> Html {
    let bundle = use_memo(|_| TranslationBundle::new(load_locale()), ());
    let config = use_memo(|_| load_dialog_config(), ());
    let bus = use_memo(|_| ModalBus::new(), ());
    let client = use_memo(|_| Rc::new(RestAuthProvider::new(api_base_url())), ());
    let auth_ctx = {
        let client = (*client).clone();
        use_memo(move |_| AuthCtx::new(client), ())
    };

    {
        let client = (*client).clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    client.restore().await;
                    sync_session(&*client, &Dispatch::<AuthDialogState>::new());
                });
                || ()
            },
            (),
        );
    }

    html! {
        <ContextProvider<AuthCtx> context={(*auth_ctx).clone()}>
            <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
                <ContextProvider<DialogConfig> context={(*config).clone()}>
                    <ContextProvider<ModalBus> context={(*bus).clone()}>
                        <BrowserRouter>
                            <Switch<Route> render={switch} />
                            <AuthDialog />
                        </BrowserRouter>
                    </ContextProvider<ModalBus>>
                </ContextProvider<DialogConfig>>
            </ContextProvider<TranslationBundle>>
        </ContextProvider<AuthCtx>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

/// Entrypoint for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<VitaeApp>::with_root(root).render();
    } else {
        yew::Renderer::<VitaeApp>::new().render();
    }
}
