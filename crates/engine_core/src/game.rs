// crates/engine_core/src/game.rs

use engine_modules::ModuleRegistry;
use tracing::{error, info, warn};
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};

use crate::audio::{AudioDevice, ChannelLayout};
use crate::error::EngineError;
use crate::graphics::GraphicsDevice;
use crate::platform::Platform;
use crate::time::GameTime;

/// Owns the module registry and the frame loop.
///
/// `run` bootstraps the standard module set (platform window, graphics
/// device, audio device) in dependency order, then drives update/present
/// until the window closes.
pub struct Game {
    pub time: GameTime,
    pub modules: ModuleRegistry,
    window_title: String,
}

impl Game {
    pub fn new(title: &str) -> Self {
        Self {
            time: GameTime::new(),
            modules: ModuleRegistry::new(),
            window_title: title.to_string(),
        }
    }

    pub fn run(mut self) -> Result<(), EngineError> {
        let event_loop = EventLoop::new()?;

        // Registration order is dependency order; the registry rejects
        // anything else.
        let platform = Platform::new(&event_loop, &self.window_title)?;
        self.modules.add(platform)?;

        let graphics = GraphicsDevice::new(self.modules.find::<Platform>()?, None);
        self.modules.add(graphics)?;

        match AudioDevice::new(ChannelLayout::default()) {
            Ok(audio) => self.modules.add(audio)?,
            // An engine without speakers is still an engine.
            Err(err) => warn!(%err, "continuing without audio"),
        }

        info!(modules = self.modules.len(), "bootstrap complete");
        self.time.start();

        event_loop.run(move |event, elwt| {
            elwt.set_control_flow(ControlFlow::Poll);

            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested => {
                        // Whole-system shutdown: the one place dependent
                        // validation is skipped.
                        self.modules.clear();
                        elwt.exit();
                    }

                    WindowEvent::Resized(size) => {
                        if let Ok(graphics) = self.modules.find_mut::<GraphicsDevice>() {
                            graphics.resize(size);
                        }
                    }

                    WindowEvent::RedrawRequested => {
                        self.time.update();

                        let window_size = self
                            .modules
                            .find::<Platform>()
                            .map(|platform| platform.inner_size());

                        let Ok(graphics) = self.modules.find_mut::<GraphicsDevice>() else {
                            return;
                        };

                        match graphics.present() {
                            Ok(()) => {}
                            Err(wgpu::SurfaceError::Lost)
                            | Err(wgpu::SurfaceError::Outdated) => {
                                warn!("surface lost/outdated, reconfiguring swapchain");
                                if let Ok(size) = window_size {
                                    graphics.resize(size);
                                }
                            }
                            Err(wgpu::SurfaceError::OutOfMemory) => {
                                error!("out of GPU memory, exiting");
                                self.modules.clear();
                                elwt.exit();
                            }
                            Err(wgpu::SurfaceError::Timeout) => {
                                warn!("surface timeout, skipping this frame");
                            }
                        }
                    }

                    _ => {}
                },

                Event::AboutToWait => {
                    if let Ok(platform) = self.modules.find::<Platform>() {
                        platform.request_redraw();
                    }
                }

                _ => {}
            }
        })?;

        Ok(())
    }
}
