//! Sign-in dialog feature wiring.
//!
//! # Design
//! - `state` is a pure reducer over [`actions::AuthDialogAction`].
//! - `commands` performs provider/router calls and only reports back through actions.
//! - `view` renders from the store and never calls the provider directly.

pub mod actions;
pub mod commands;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
