// SPDX-License-Identifier: MPL-2.0
//! Signed-in identity.

/// The user the dashboard greets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub login_id: String,
}

impl User {
    #[must_use]
    pub fn new(login_id: impl Into<String>) -> Self {
        Self {
            login_id: login_id.into(),
        }
    }
}
