// crates/engine_modules/src/lib.rs

//! Dependency-aware lifecycle container for engine subsystems.
//!
//! The engine is assembled out of independently developed modules (graphics
//! device, audio device, platform window, ...). [`ModuleRegistry`] guarantees
//! that a module is never activated before the modules it depends on, and
//! never torn down while another registered module still depends on it.

mod error;
mod module;
mod registry;
mod resolver;

pub use error::ModuleError;
pub use module::{Dependency, Module};
pub use registry::ModuleRegistry;
