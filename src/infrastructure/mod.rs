// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`local_storage`]: Object storage in a local directory
//!   (implements [`StorageLister`], [`ImageResolver`], [`ImageUploader`])
//! - [`http_storage`]: The same ports against an HTTP object service
//! - [`memory_todo`]: Todo store with live snapshots (implements [`TodoStore`])
//! - [`identity`]: Local signed-in user (implements [`AuthGate`])
//!
//! [`StorageLister`]: crate::application::port::StorageLister
//! [`ImageResolver`]: crate::application::port::ImageResolver
//! [`ImageUploader`]: crate::application::port::ImageUploader
//! [`TodoStore`]: crate::application::port::TodoStore
//! [`AuthGate`]: crate::application::port::AuthGate

pub mod http_storage;
pub mod identity;
pub mod local_storage;
pub mod memory_todo;

pub use http_storage::HttpStorage;
pub use identity::StaticIdentity;
pub use local_storage::LocalStorage;
pub use memory_todo::MemoryTodoStore;
