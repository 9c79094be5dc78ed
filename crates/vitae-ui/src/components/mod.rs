//! Presentational building blocks shared by feature views.
pub(crate) mod button;
pub(crate) mod input;
pub(crate) mod modal;

pub(crate) use button::Button;
pub(crate) use input::TextInput;
pub(crate) use modal::BaseModal;
