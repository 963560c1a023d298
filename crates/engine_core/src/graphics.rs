// crates/engine_core/src/graphics.rs

use std::any::Any;
use std::sync::Arc;

use engine_modules::{Dependency, Module};
use tracing::info;
use winit::dpi::PhysicalSize;
use winit::window::Window;

use crate::platform::Platform;

/// Swap-chain presentation cadence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum VSyncMode {
    /// Present on every vertical blank.
    #[default]
    EveryBlank,
    /// Present immediately, tearing allowed.
    Off,
}

impl VSyncMode {
    fn present_mode(self) -> wgpu::PresentMode {
        match self {
            VSyncMode::EveryBlank => wgpu::PresentMode::Fifo,
            VSyncMode::Off => wgpu::PresentMode::AutoNoVsync,
        }
    }
}

/// Swap-chain setup for the device. When no properties are supplied the
/// dimensions default from the platform window.
#[derive(Clone, Copy, Debug)]
pub struct DisplayProperties {
    pub width: u32,
    pub height: u32,
    pub vsync: VSyncMode,
    pub clear_color: wgpu::Color,
}

impl DisplayProperties {
    pub fn from_platform(platform: &Platform) -> Self {
        let size = platform.inner_size();
        Self {
            width: size.width,
            height: size.height,
            vsync: VSyncMode::EveryBlank,
            clear_color: wgpu::Color {
                r: 0.1,
                g: 0.2,
                b: 0.3,
                a: 1.0,
            },
        }
    }
}

/// The active graphics device: wgpu adapter/device/queue plus the surface
/// configured against the platform window.
pub struct GraphicsDevice {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,
    clear_color: wgpu::Color,
    adapter_name: String,
}

impl GraphicsDevice {
    /// Builds the device against `platform`'s window. Native device setup
    /// runs inline and blocks the calling thread, like every load path here.
    pub fn new(platform: &Platform, properties: Option<DisplayProperties>) -> Self {
        let properties =
            properties.unwrap_or_else(|| DisplayProperties::from_platform(platform));
        pollster::block_on(Self::new_async(platform.window().clone(), properties))
    }

    async fn new_async(window: Arc<Window>, properties: DisplayProperties) -> Self {
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        // The surface never outlives the window: this module holds the Arc,
        // and the registry refuses to remove Platform while we are registered.
        let surface = unsafe {
            instance.create_surface_unsafe(
                wgpu::SurfaceTargetUnsafe::from_window(window.as_ref()).unwrap(),
            )
        }
        .unwrap();

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to find an appropriate adapter");
        let adapter_name = adapter.get_info().name;

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    label: None,
                },
                None,
            )
            .await
            .unwrap();

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: properties.width,
            height: properties.height,
            present_mode: properties.vsync.present_mode(),
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        Self {
            window,
            surface,
            device,
            queue,
            size: PhysicalSize::new(properties.width, properties.height),
            config,
            clear_color: properties.clear_color,
            adapter_name,
        }
    }

    pub fn window(&self) -> &Window {
        self.window.as_ref()
    }

    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    pub fn set_clear_color(&mut self, color: wgpu::Color) {
        self.clear_color = color;
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Clears the back buffer and presents it.
    pub fn present(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Present Encoder"),
            });

        {
            let _clear_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Clear Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

impl Module for GraphicsDevice {
    fn dependencies() -> Vec<Dependency> {
        vec![Dependency::on::<Platform>()]
    }

    fn load(&mut self) {
        info!(
            adapter = %self.adapter_name,
            width = self.config.width,
            height = self.config.height,
            "graphics device ready",
        );
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
