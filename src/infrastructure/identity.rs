// SPDX-License-Identifier: MPL-2.0
//! Local identity provider.

use crate::application::port::AuthGate;
use crate::domain::account::User;
use crate::error::Result;
use futures_util::future::{self, BoxFuture};
use futures_util::FutureExt;
use std::sync::Mutex;

const FALLBACK_LOGIN: &str = "guest";

/// Holds a single signed-in user until [`AuthGate::sign_out`] is called.
#[derive(Debug)]
pub struct StaticIdentity {
    user: Mutex<Option<User>>,
}

impl StaticIdentity {
    #[must_use]
    pub fn new(user: User) -> Self {
        Self {
            user: Mutex::new(Some(user)),
        }
    }

    /// Resolves the login from configuration, then the OS user name.
    #[must_use]
    pub fn from_config(login_id: Option<&str>) -> Self {
        let login = login_id
            .map(str::trim)
            .filter(|login| !login.is_empty())
            .map(str::to_owned)
            .or_else(|| std::env::var("USER").ok())
            .or_else(|| std::env::var("USERNAME").ok())
            .filter(|login| !login.is_empty())
            .unwrap_or_else(|| FALLBACK_LOGIN.to_string());
        Self::new(User::new(login))
    }
}

impl AuthGate for StaticIdentity {
    fn current_user(&self) -> Option<User> {
        self.user.lock().ok().and_then(|user| user.clone())
    }

    fn sign_out(&self) -> BoxFuture<'static, Result<()>> {
        if let Ok(mut user) = self.user.lock() {
            if let Some(previous) = user.take() {
                tracing::info!(login = %previous.login_id, "signed out");
            }
        }
        future::ready(Ok(())).boxed()
    }
}
