//! Flutter bridge for the Romix feed core.

pub mod api;
