// crates/engine_core/src/lib.rs

// Engine Assembly
pub mod game;
pub mod time;

// Standard Modules
pub mod audio;
pub mod graphics;
pub mod platform;

pub mod error;

// Re-export Game so the sandbox crate can find it easily
pub use error::EngineError;
pub use game::Game;

/// Installs the default fmt subscriber for engine logging.
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
