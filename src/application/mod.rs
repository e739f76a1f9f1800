// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`query`]: Read-side services (the paginated gallery listing)
//! - [`command`]: Write-side services (todo mutations)
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services

pub mod command;
pub mod port;
pub mod query;
