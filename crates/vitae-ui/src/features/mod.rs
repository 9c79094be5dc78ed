//! Feature slices, each split into actions, state, logic, commands, and view.
pub mod auth_dialog;
