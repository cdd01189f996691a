//! Feed domain model shared by repository, mapper and presentation layers.
//!
//! # Responsibility
//! - Define the plain records that flow from collaborators to the UI.
//! - Keep one canonical shape per concept instead of per-feature copies.
//!
//! # Invariants
//! - Records are immutable values; every mapping call builds fresh ones.
//! - UI state is a tagged variant, so exactly one state is active at a time.

pub mod feed;
pub mod ui;
pub mod user;
