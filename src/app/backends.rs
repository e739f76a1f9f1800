// SPDX-License-Identifier: MPL-2.0
//! Wiring of backend adapters from the configuration.
//!
//! Connecting never fails the application. An unusable HTTP backend falls
//! back to local files and an unreadable todo file falls back to an
//! in-memory store; each fallback is reported as a notification.

use super::paths;
use crate::application::port::AuthGate;
use crate::config::{BackendKind, Config};
use crate::error::{Error, Result};
use crate::infrastructure::{HttpStorage, LocalStorage, MemoryTodoStore, StaticIdentity};
use crate::ui::dashboard::Ports;
use crate::ui::notifications::Notification;
use std::sync::Arc;

/// Everything the application talks to outside the process.
#[derive(Clone)]
pub struct Backends {
    pub ports: Ports,
    pub auth: Arc<dyn AuthGate>,
}

/// Builds the backends described by `config`.
///
/// Returns the backends and the notifications to show for any fallback.
pub fn connect(config: &Config) -> (Backends, Vec<Notification>) {
    let mut warnings = Vec::new();

    let todos = match open_todo_store(config) {
        Ok(store) => store,
        Err(err) => {
            tracing::warn!(%err, "todo file unusable, keeping todos in memory");
            warnings.push(fallback_warning("notification-todo-file-error", &err));
            MemoryTodoStore::in_memory()
        }
    };
    let todos = Arc::new(todos);

    let ports = match config.backend.kind {
        BackendKind::Http => match http_storage(config) {
            Ok(storage) => {
                let storage = Arc::new(storage);
                Ports {
                    lister: storage.clone(),
                    resolver: storage.clone(),
                    uploader: storage,
                    todos,
                }
            }
            Err(err) => {
                tracing::warn!(%err, "HTTP storage unusable, falling back to local files");
                warnings.push(fallback_warning("notification-backend-error", &err));
                local_ports(config, todos, &mut warnings)
            }
        },
        BackendKind::Local => local_ports(config, todos, &mut warnings),
    };

    let auth = Arc::new(StaticIdentity::from_config(config.account.login_id.as_deref()));

    (Backends { ports, auth }, warnings)
}

fn fallback_warning(key: &str, err: &Error) -> Notification {
    Notification::warning(key).with_arg("reason", err.to_string())
}

fn open_todo_store(config: &Config) -> Result<MemoryTodoStore> {
    match paths::get_todo_file(config.backend.todo_file.as_deref()) {
        Some(path) => MemoryTodoStore::open(path),
        None => {
            tracing::debug!("no data directory, todos are kept in memory");
            Ok(MemoryTodoStore::in_memory())
        }
    }
}

fn http_storage(config: &Config) -> Result<HttpStorage> {
    let base_url = config
        .backend
        .base_url
        .as_deref()
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| Error::Config("backend.base_url is required for the http backend".into()))?;
    HttpStorage::new(base_url)
}

fn local_ports(
    config: &Config,
    todos: Arc<MemoryTodoStore>,
    warnings: &mut Vec<Notification>,
) -> Ports {
    let root = paths::get_storage_root(config.backend.local_root.as_deref())
        .unwrap_or_else(|| std::path::PathBuf::from(paths::APP_NAME));
    let storage = LocalStorage::new(root);
    if let Err(err) = storage.ensure_root() {
        tracing::warn!(root = %storage.root().display(), %err, "cannot create storage root");
        warnings.push(fallback_warning("notification-gallery-error", &err));
    }
    tracing::info!(root = %storage.root().display(), "using local storage");

    let storage = Arc::new(storage);
    Ports {
        lister: storage.clone(),
        resolver: storage.clone(),
        uploader: storage,
        todos,
    }
}
