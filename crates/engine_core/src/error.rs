// crates/engine_core/src/error.rs

use engine_modules::ModuleError;
use thiserror::Error;

use crate::audio::AudioError;

/// Errors surfaced by the engine bootstrap path.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Module(#[from] ModuleError),

    #[error("failed to create the platform window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error(transparent)]
    Audio(#[from] AudioError),
}
