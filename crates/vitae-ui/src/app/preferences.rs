//! Persistence and environment helpers for the app shell.

use crate::core::config::DialogConfig;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;

pub(crate) const LOCALE_KEY: &str = "vitae.locale";
pub(crate) const DIALOG_CONFIG_KEY: &str = "vitae.dialog";
pub(crate) const API_BASE_URL_KEY: &str = "vitae.api_base_url";

pub(crate) fn load_locale() -> LocaleCode {
    if let Ok(value) = LocalStorage::get::<String>(LOCALE_KEY) {
        if let Some(locale) = LocaleCode::from_lang_tag(&value) {
            return locale;
        }
    }
    if let Some(nav) = window().navigator().language() {
        if let Some(locale) = LocaleCode::from_lang_tag(&nav) {
            return locale;
        }
    }
    DEFAULT_LOCALE
}

pub(crate) fn load_dialog_config() -> DialogConfig {
    let Some(raw) = read_raw(DIALOG_CONFIG_KEY) else {
        return DialogConfig::default();
    };
    DialogConfig::from_json(&raw).unwrap_or_else(|err| {
        console::warn!("ignoring invalid dialog config", DIALOG_CONFIG_KEY, err.to_string());
        DialogConfig::default()
    })
}

pub(crate) fn api_base_url() -> String {
    if let Ok(value) = LocalStorage::get::<String>(API_BASE_URL_KEY) {
        let trimmed = value.trim().trim_end_matches('/');
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    window()
        .location()
        .origin()
        .unwrap_or_else(|_| "http://localhost:8000".to_string())
}

fn read_raw(key: &'static str) -> Option<String> {
    match LocalStorage::raw().get_item(key) {
        Ok(value) => value,
        Err(_) => {
            console::error!("storage operation failed", "get", key);
            None
        }
    }
}
