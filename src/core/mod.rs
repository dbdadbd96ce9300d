//! Live game registry and summary ranking.

/// Summary ordering rules.
pub mod ranking;
/// Authoritative game registry.
pub mod registry;
