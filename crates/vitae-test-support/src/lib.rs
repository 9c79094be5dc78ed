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
#![allow(clippy::multiple_crate_versions)]

//! Shared test helpers for the Vitae UI.
//! Layout: fixtures.rs (canned users), mocks.rs (scriptable auth provider).

pub mod fixtures;
pub mod mocks;

pub use mocks::{MockAuthProvider, ProviderCall};
