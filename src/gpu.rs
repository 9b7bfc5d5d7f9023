//! # GPU Management Module
//!
//! The `gpu` module sets up the `wgpu` surface, device and queue for the demo window and offers
//! the small set of helpers the renderer needs: resizing the surface, building the depth texture
//! and querying GPU errors once per frame.
//!
//! ## Error Query
//!
//! `wgpu` reports validation errors asynchronously. The renderer brackets every frame with
//! [`Gpu::begin_error_query`] and [`Gpu::end_error_query`]; the latter logs whatever the frame
//! produced and never interrupts the render loop.

use wgpu::InstanceDescriptor;

use crate::error::{Error, Result};

/// The GPU context of the demo window.
pub struct Gpu {
    /// Presentation surface tied to the window.
    pub surface: wgpu::Surface<'static>,

    /// Creates buffers, textures and pipelines.
    pub device: wgpu::Device,

    /// Receives buffer writes and command submissions.
    pub queue: wgpu::Queue,

    /// Current surface size, format and present mode.
    pub surface_config: wgpu::SurfaceConfiguration,

    /// The color format the surface was configured with.
    pub surface_format: wgpu::TextureFormat,
}

impl Gpu {
    /// Width over height of the surface. A zero height counts as one.
    pub fn aspect_ratio(&self) -> f32 {
        self.surface_config.width as f32 / self.surface_config.height.max(1) as f32
    }

    /// Reconfigures the surface for a new size. Zero-sized requests are ignored, since a
    /// surface cannot be configured with them (minimized windows report 0x0).
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    /// Reapplies the current configuration after the surface was lost or became outdated.
    pub fn reconfigure(&self) {
        self.surface.configure(&self.device, &self.surface_config);
    }

    /// Creates a `Depth32Float` texture of the given size and returns its view.
    pub fn create_depth_texture(&self, width: u32, height: u32) -> wgpu::TextureView {
        let texture = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: crate::renderer::Renderer::DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }

    /// Starts collecting validation errors for the current frame.
    pub fn begin_error_query(&self) {
        self.device.push_error_scope(wgpu::ErrorFilter::Validation);
    }

    /// Stops collecting errors for the current frame and logs the first one, if any.
    ///
    /// Returns `true` when the frame was free of validation errors.
    pub fn end_error_query(&self) -> bool {
        match pollster::block_on(self.device.pop_error_scope()) {
            Some(error) => {
                log::error!("GPU error: {error}");
                false
            }
            None => true,
        }
    }

    /// Creates the GPU context for `window`, configured to `width` x `height`.
    ///
    /// Picks the default adapter compatible with the window surface, requests a device with
    /// default features and limits, and configures the surface with its first supported format
    /// and present mode.
    pub async fn new_async(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        let instance = wgpu::Instance::new(&InstanceDescriptor::default());
        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(Error::NoAdapter)?;
        log::info!("Using adapter: {:?}", adapter.get_info());

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("WGPU Device"),
                    memory_hints: wgpu::MemoryHints::default(),
                    required_features: wgpu::Features::default(),
                    required_limits: wgpu::Limits::default().using_resolution(adapter.limits()),
                },
                None,
            )
            .await?;

        let surface_capabilities = surface.get_capabilities(&adapter);
        let surface_format = surface_capabilities
            .formats
            .first()
            .copied()
            .ok_or(Error::UnsupportedSurface)?;

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: width.max(1),
            height: height.max(1),
            present_mode: surface_capabilities.present_modes[0],
            alpha_mode: surface_capabilities.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        surface.configure(&device, &surface_config);

        Ok(Self {
            surface,
            device,
            queue,
            surface_config,
            surface_format,
        })
    }
}
