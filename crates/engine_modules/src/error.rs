// crates/engine_modules/src/error.rs

use thiserror::Error;

/// Failure conditions raised by [`crate::ModuleRegistry`].
///
/// Every variant names the capability types involved so a failed bootstrap
/// can tell the operator exactly what was missing or still in use. All three
/// conditions are recoverable by the caller; none are retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModuleError {
    /// A module declared requirements that are not currently registered.
    /// Register the missing modules first, then retry.
    #[error("cannot register {module}: missing required module(s) {missing:?}")]
    MissingRequirements {
        module: &'static str,
        missing: Vec<&'static str>,
    },

    /// Removal would strand a declared dependency of a live module.
    /// Remove the dependents first, in dependency order, then retry.
    #[error("cannot remove {module}: still required by {dependents:?}")]
    BlockedByDependents {
        module: &'static str,
        dependents: Vec<&'static str>,
    },

    /// Lookup of a capability type with no registered instance.
    #[error("module {module} is not registered")]
    NotRegistered { module: &'static str },
}
