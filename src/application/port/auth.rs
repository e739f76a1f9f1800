// SPDX-License-Identifier: MPL-2.0
//! Authentication port.

use crate::domain::account::User;
use crate::error::Result;
use futures_util::future::BoxFuture;

/// Exposes the signed-in identity. Sign-in itself happens elsewhere.
pub trait AuthGate: Send + Sync {
    /// Returns the current user, or `None` once signed out.
    fn current_user(&self) -> Option<User>;

    fn sign_out(&self) -> BoxFuture<'static, Result<()>>;
}
