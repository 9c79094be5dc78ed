//! Browser-side service clients.
pub(crate) mod auth;
