//! Shared provider context.
//!
//! # Design
//! - Exactly one provider per app boot, shared through Yew context.
//! - Views see the trait object; the shell keeps the concrete client for session restore.

use crate::services::auth::RestAuthProvider;
use std::rc::Rc;
use vitae_auth::AuthProvider;

/// Authentication provider handle for views.
#[derive(Clone)]
pub(crate) struct AuthCtx {
    pub(crate) provider: Rc<dyn AuthProvider>,
}

impl AuthCtx {
    pub(crate) fn new(client: Rc<RestAuthProvider>) -> Self {
        Self { provider: client }
    }
}

impl PartialEq for AuthCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.provider, &other.provider)
    }
}
