//! Repository layer for feed snapshots.
//!
//! # Responsibility
//! - Define the data-access contract used by feed services.
//! - Isolate collaborator calls and checksum details from orchestration.
//!
//! # Invariants
//! - Repositories return collaborator failures unchanged inside `FeedError`.
//! - Projection helpers are pure and total.

pub mod feed_repo;
