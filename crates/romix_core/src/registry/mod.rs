//! Feature module registry.
//!
//! Each feature module is the same feed pipeline under its own id and label,
//! so modules are registered as data rather than generated as code.

pub mod descriptor;
pub mod feature_registry;
