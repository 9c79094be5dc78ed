#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]

//! Authentication contract shared by the Vitae UI and its test doubles.
//!
//! Layout: `user.rs` (session user), `credentials.rs` (draft + validation),
//! `provider.rs` (async provider trait), `error.rs` (provider and validation
//! failures).

pub mod credentials;
pub mod error;
pub mod provider;
pub mod user;

pub use credentials::{Credentials, CredentialsDraft};
pub use error::{AuthError, AuthResult, ValidationError};
pub use provider::{AuthProvider, SignInMethod};
pub use user::User;
