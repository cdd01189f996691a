//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls and UI mapping into screen states.
//! - Keep FFI/CLI layers decoupled from collaborator details.

pub mod feed_service;
