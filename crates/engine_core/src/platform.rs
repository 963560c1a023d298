// crates/engine_core/src/platform.rs

use std::any::Any;
use std::sync::Arc;

use engine_modules::Module;
use tracing::info;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

use crate::error::EngineError;

/// The OS window the engine renders into.
///
/// Registered first during bootstrap; the graphics device declares a
/// dependency on this capability, so the registry refuses to tear the
/// window down while a surface created from it is still registered.
pub struct Platform {
    window: Arc<Window>,
}

impl Platform {
    pub const DEFAULT_WIDTH: f64 = 1280.0;
    pub const DEFAULT_HEIGHT: f64 = 720.0;

    pub fn new(event_loop: &EventLoop<()>, title: &str) -> Result<Self, EngineError> {
        let window = WindowBuilder::new()
            .with_title(title)
            .with_inner_size(LogicalSize::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT))
            .build(event_loop)?;

        Ok(Self {
            window: Arc::new(window),
        })
    }

    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    pub fn inner_size(&self) -> PhysicalSize<u32> {
        self.window.inner_size()
    }

    pub fn set_title(&self, title: &str) {
        self.window.set_title(title);
    }

    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

impl Module for Platform {
    fn load(&mut self) {
        let size = self.window.inner_size();
        info!(width = size.width, height = size.height, "platform window ready");
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
