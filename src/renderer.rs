//! # Renderer
//!
//! Ties the GPU context, the depth buffer and the [`Scene`] together and runs one render step
//! per displayed frame:
//!
//! 1. Open the frame's GPU error query.
//! 2. Recompute the transform block from the [`FrameContext`] and upload it in full.
//! 3. Acquire the surface texture, clear color to black and depth to `1.0`.
//! 4. Bind the uniform block and draw the box.
//! 5. Submit, present, and log any GPU error the frame produced.
//!
//! Surface problems never stop the loop except running out of memory: a lost or outdated surface
//! is reconfigured and the frame is skipped, a timeout just skips the frame.

use crate::gpu::Gpu;
use crate::scene::{FrameContext, Scene};

/// Color the frame is cleared to before the box is drawn.
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.0,
};

/// Depth value the depth buffer is cleared to.
pub const CLEAR_DEPTH: f32 = 1.0;

/// What happened to a requested frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    /// The frame was drawn and presented.
    Presented,
    /// No surface texture was available; nothing was drawn.
    Skipped,
    /// The GPU ran out of memory; the loop should stop.
    Fatal,
}

/// Renders the demo scene into the window surface.
pub struct Renderer {
    gpu: Gpu,
    depth_texture_view: wgpu::TextureView,
    scene: Scene,
}

impl Renderer {
    /// Format of the depth buffer the pipeline tests against.
    pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

    /// Creates the GPU context for `window` and the scene's resources.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        width: u32,
        height: u32,
    ) -> crate::Result<Self> {
        let gpu = Gpu::new_async(window, width, height).await?;
        log::info!(
            "Surface configured as {:?}, aspect ratio {:.3}",
            gpu.surface_format,
            gpu.aspect_ratio()
        );

        gpu.begin_error_query();
        let depth_texture_view = gpu.create_depth_texture(width, height);
        let scene = Scene::new(&gpu.device, gpu.surface_format);
        gpu.end_error_query();

        Ok(Self {
            gpu,
            depth_texture_view,
            scene,
        })
    }

    /// Resizes the surface and depth buffer. The projection is left alone.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.gpu.resize(width, height);
        self.depth_texture_view = self.gpu.create_depth_texture(width, height);
    }

    /// Runs one render step for the state in `ctx`.
    pub fn render_frame(&mut self, ctx: &mut FrameContext) -> FrameStatus {
        self.gpu.begin_error_query();
        let status = self.draw(ctx);
        self.gpu.end_error_query();
        status
    }

    fn draw(&mut self, ctx: &mut FrameContext) -> FrameStatus {
        let surface_texture = match self.gpu.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost or outdated, reconfiguring");
                self.gpu.reconfigure();
                return FrameStatus::Skipped;
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of GPU memory");
                return FrameStatus::Fatal;
            }
            Err(error) => {
                log::warn!("Skipping frame: {error}");
                return FrameStatus::Skipped;
            }
        };

        let block = ctx.recompute();
        self.scene.update(&self.gpu.queue, block);

        let surface_texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor {
                format: Some(self.gpu.surface_format),
                ..Default::default()
            });

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        // The pass borrows the encoder; it has to end before `finish`.
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_texture_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_DEPTH),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.scene.render(&mut render_pass);
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();
        FrameStatus::Presented
    }
}
