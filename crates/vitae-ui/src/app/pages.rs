//! Landing and dashboard pages.

use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use gloo::console;
use vitae_events::{ModalBus, ModalEvent};
use yew::prelude::*;

#[function_component(HomePage)]
pub(crate) fn home_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    let bus = use_context::<ModalBus>();

    let on_get_started = Callback::from(move |_: MouseEvent| {
        let Some(bus) = bus.as_ref() else {
            console::error!("modal bus missing from context");
            return;
        };
        if let Err(err) = bus.emit(ModalEvent::Auth) {
            console::warn!("modal request dropped", err.event_kind());
        }
    });

    html! {
        <section class="hero min-h-screen">
            <div class="hero-content text-center flex-col">
                <h1 class="text-5xl font-bold">{t("landing.hero.title")}</h1>
                <button class="btn btn-primary" onclick={on_get_started}>
                    {t("landing.hero.get_started")}
                </button>
            </div>
        </section>
    }
}

#[function_component(DashboardPage)]
pub(crate) fn dashboard_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    html! {
        <section class="container mx-auto p-8">
            <h1 class="text-3xl font-bold mb-4">{t("dashboard.title")}</h1>
            <p class="opacity-70">{t("dashboard.empty")}</p>
        </section>
    }
}
