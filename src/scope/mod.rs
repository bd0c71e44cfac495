// src/scope/mod.rs

//! Named scopes and dotted-path lookup.
//!
//! - [`table`] owns every scope and implements binding and resolution.
//! - [`path`] splits and validates dotted lookup paths.
//!
//! Lookups never fail loudly: a malformed path, an unbound name or a
//! segment that walks into something without a nested scope all come back
//! as `None`.

pub mod path;
pub mod table;

pub use path::split_path;
pub use table::{Binding, NamedScope, ScopeTable};
