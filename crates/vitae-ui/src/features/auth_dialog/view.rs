//! Sign-in dialog view.
//!
//! # Design
//! - Render purely from the `AuthDialogState` store slice.
//! - Listen on the modal bus from mount; dropping the guard on unmount aborts the listener.
//! - Hand every gesture to the command layer; never call the provider inline.

use crate::app::context::AuthCtx;
use crate::components::{BaseModal, Button, TextInput};
use crate::core::config::DialogConfig;
use crate::features::auth_dialog::actions::AuthDialogAction;
use crate::features::auth_dialog::commands::{
    DialogSink, SignInRequest, go_to_app, sign_in, sign_out, submit_password, sync_session,
};
use crate::features::auth_dialog::logic::{message, title};
use crate::features::auth_dialog::state::{AuthDialogState, DialogView};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use gloo::console;
use vitae_events::{ModalBus, ModalEvent};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::use_navigator;
use yewdux::prelude::use_store;

#[function_component(AuthDialog)]
pub(crate) fn auth_dialog() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    let config = use_context::<DialogConfig>().unwrap_or_default();
    let bus = use_context::<ModalBus>();
    let auth_ctx = use_context::<AuthCtx>();
    let navigator = use_navigator();
    let (state, dispatch) = use_store::<AuthDialogState>();

    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |(bus, auth_ctx): &(Option<ModalBus>, Option<AuthCtx>)| {
                if let Some(auth_ctx) = auth_ctx {
                    sync_session(auth_ctx.provider.as_ref(), &dispatch);
                }
                let subscription = bus.as_ref().map(|bus| {
                    let dispatch = dispatch.clone();
                    let (listen, subscription) = bus
                        .subscribe(ModalEvent::Auth)
                        .attach(move || dispatch.send(AuthDialogAction::OpenRequested));
                    spawn_local(listen);
                    subscription
                });
                move || drop(subscription)
            },
            (bus, auth_ctx.clone()),
        );
    }

    let Some(auth_ctx) = auth_ctx else {
        console::error!("auth provider missing from context");
        return html! {};
    };

    let on_google = {
        let provider = auth_ctx.provider.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            let provider = provider.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                if let Err(err) = sign_in(provider.as_ref(), &dispatch, SignInRequest::Google).await
                {
                    console::warn!("google sign-in failed", err.to_string());
                }
            });
        })
    };

    let on_anonymous = {
        let provider = auth_ctx.provider.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            let provider = provider.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                if let Err(err) =
                    sign_in(provider.as_ref(), &dispatch, SignInRequest::Anonymous).await
                {
                    console::warn!("anonymous sign-in failed", err.to_string());
                }
            });
        })
    };

    let on_submit = {
        let provider = auth_ctx.provider.clone();
        let dispatch = dispatch.clone();
        let state = state.clone();
        let config = config.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let provider = provider.clone();
            let dispatch = dispatch.clone();
            let draft = state.draft.clone();
            let config = config.clone();
            spawn_local(async move {
                if let Err(err) =
                    submit_password(provider.as_ref(), &dispatch, &draft, &config).await
                {
                    console::warn!("password sign-in failed", err.to_string());
                }
            });
        })
    };

    let on_logout = {
        let provider = auth_ctx.provider.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            let provider = provider.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                if let Err(err) = sign_out(provider.as_ref(), &dispatch).await {
                    console::warn!("sign-out failed", err.to_string());
                }
            });
        })
    };

    let on_go_to_app = {
        let dispatch = dispatch.clone();
        let config = config.clone();
        Callback::from(move |_: MouseEvent| match navigator.as_ref() {
            Some(navigator) => go_to_app(navigator, &dispatch, &config),
            None => console::error!("router missing; cannot navigate"),
        })
    };

    let emit = |action: AuthDialogAction| {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.send(action.clone()))
    };
    let on_email = {
        let dispatch = dispatch.clone();
        Callback::from(move |value: String| dispatch.send(AuthDialogAction::EmailChanged(value)))
    };
    let on_password = {
        let dispatch = dispatch.clone();
        Callback::from(move |value: String| {
            dispatch.send(AuthDialogAction::PasswordChanged(value));
        })
    };
    let on_close = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| dispatch.send(AuthDialogAction::Close))
    };

    let loading = state.loading;
    let action = match state.view() {
        DialogView::LoggedIn => html! {
            <>
                <Button outline={true} class="mr-8" onclick={on_logout}>
                    {t("shared.buttons.logout")}
                </Button>
                <Button onclick={on_go_to_app}>{t("landing.hero.go_to_app")}</Button>
            </>
        },
        DialogView::LoggedOutButtons => html! {
            <div class="flex">
                <Button is_loading={loading.google} onclick={on_google}>
                    {t("modals.auth.buttons.google")}
                </Button>
                <Button is_loading={loading.password} onclick={emit(AuthDialogAction::UsePassword)}>
                    {t("modals.auth.buttons.password")}
                </Button>
                <Button class="ml-8" is_loading={loading.anonymous} onclick={on_anonymous}>
                    {t("modals.auth.buttons.anonymous")}
                </Button>
            </div>
        },
        DialogView::LoggedOutPasswordForm => html! {
            <form class="w-full flex flex-col gap-2" onsubmit={on_submit}>
                <TextInput
                    id="email"
                    label={t("modals.auth.fields.email")}
                    placeholder={AttrValue::from(t("modals.auth.fields.email"))}
                    value={state.draft.email.clone()}
                    oninput={on_email}
                />
                <TextInput
                    id="password"
                    label={t("modals.auth.fields.password")}
                    placeholder={AttrValue::from(t("modals.auth.fields.password"))}
                    value={state.draft.password.clone()}
                    masked={true}
                    oninput={on_password}
                />
                <div class="flex gap-2">
                    <Button r#type="submit" is_loading={loading.password}>
                        {t("modals.auth.buttons.submit")}
                    </Button>
                    <Button outline={true} onclick={emit(AuthDialogAction::CancelPassword)}>
                        {t("modals.auth.buttons.cancel")}
                    </Button>
                </div>
            </form>
        },
    };

    let error = state.error.as_ref().map(|error| {
        html! {
            <div class="alert alert-error mt-4" role="alert">
                <span>{t(error.message_key())}</span>
                <button class="btn btn-sm btn-ghost" onclick={emit(AuthDialogAction::DismissError)}>
                    {t("shared.buttons.dismiss")}
                </button>
            </div>
        }
    });

    html! {
        <BaseModal
            open={state.visible}
            title={title(&bundle, state.user.as_ref(), &config)}
            action={action}
            on_close={on_close}
        >
            <p class="leading-loose">{message(&bundle, state.user.as_ref())}</p>
            { for error }
        </BaseModal>
    }
}
