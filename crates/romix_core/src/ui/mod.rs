//! Feed-to-screen mapping.
//!
//! The mapper is pure: it never fetches or decides which state to show.
//! Callers pick the state; the mapper only builds it.

pub mod mapper;
