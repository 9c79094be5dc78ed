//! HTTP-backed authentication provider.
//!
//! # Design
//! - The backend owns tokens and cookies; this client only exchanges requests for users.
//! - The last known user is cached so `current_user` stays synchronous.
//! - Transport failures and HTTP statuses map onto `AuthError` variants.

use crate::core::status;
use anyhow::Context;
use async_trait::async_trait;
use gloo::console;
use gloo_net::http::{Request, Response};
use serde::Serialize;
use std::cell::RefCell;
use vitae_auth::{AuthError, AuthProvider, AuthResult, User};
use web_sys::RequestCredentials;

#[derive(Serialize)]
struct PasswordLogin<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug)]
pub(crate) struct RestAuthProvider {
    base_url: String,
    session: RefCell<Option<User>>,
}

impl RestAuthProvider {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            session: RefCell::new(None),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Load the backend session, if any, into the cache.
    pub(crate) async fn restore(&self) {
        let request = Request::get(&self.url("/v1/auth/session"))
            .credentials(RequestCredentials::Include);
        let user = match send(request).await {
            Ok(response) if response.ok() => match response.json::<User>().await {
                Ok(user) => Some(user),
                Err(err) => {
                    console::error!("session payload unreadable", err.to_string());
                    None
                }
            },
            Ok(response) => {
                if status::restore_failed(response.status()) {
                    console::error!("session restore failed", response.status());
                }
                None
            }
            Err(err) => {
                console::error!("session restore failed", format!("{err:#}"));
                None
            }
        };
        self.session.replace(user);
    }

    async fn login(&self, path: &str, body: Option<PasswordLogin<'_>>) -> AuthResult<User> {
        let request =
            Request::post(&self.url(path)).credentials(RequestCredentials::Include);
        let request = match body {
            Some(body) => request.json(&body).map_err(network)?,
            None => request,
        };
        let response = send(request).await.map_err(network)?;
        let user = read_user(response).await?;
        self.session.replace(Some(user.clone()));
        Ok(user)
    }
}

#[async_trait(?Send)]
impl AuthProvider for RestAuthProvider {
    async fn login_with_google(&self) -> AuthResult<User> {
        self.login("/v1/auth/google", None).await
    }

    async fn login_anonymously(&self) -> AuthResult<User> {
        self.login("/v1/auth/anonymous", None).await
    }

    async fn login_with_password(&self, email: &str, password: &str) -> AuthResult<User> {
        self.login("/v1/auth/password", Some(PasswordLogin { email, password }))
            .await
    }

    async fn logout(&self) -> AuthResult<()> {
        let request =
            Request::post(&self.url("/v1/auth/logout")).credentials(RequestCredentials::Include);
        let response = send(request).await.map_err(network)?;
        if !response.ok() {
            return Err(status_error(&response).await);
        }
        self.session.replace(None);
        Ok(())
    }

    fn current_user(&self) -> Option<User> {
        self.session.borrow().clone()
    }
}

async fn send(request: Request) -> anyhow::Result<Response> {
    request.send().await.context("auth request failed")
}

async fn read_user(response: Response) -> AuthResult<User> {
    if !response.ok() {
        return Err(status_error(&response).await);
    }
    response.json::<User>().await.map_err(network)
}

async fn status_error(response: &Response) -> AuthError {
    match status::known_failure(response.status()) {
        Some(error) => error,
        None => AuthError::Rejected {
            reason: response
                .text()
                .await
                .unwrap_or_else(|_| response.status_text()),
        },
    }
}

fn network(err: impl std::fmt::Display) -> AuthError {
    AuthError::Network {
        detail: format!("{err:#}"),
    }
}
