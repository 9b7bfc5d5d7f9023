//! # Scene
//!
//! The `scene` module holds everything the demo draws and the per-frame synchronization of the
//! `trans_prop` uniform block.
//!
//! ## Overview
//!
//! - [`FrameContext`] is the loop state touched by every frame: the camera, the projection and
//!   the host-side [`TransformBlock`]. The app owns it and passes it by reference to the render
//!   step, so nothing is captured implicitly.
//! - [`compute_transform_block`] is the pure part of the uniform sync:
//!   `modelview = view * model * translation`, with the projection copied unchanged.
//! - [`Scene`] owns the GPU side: the box's vertex and index buffers, the [`UniformBinding`] and
//!   the render pipeline. [`Scene::update`] re-uploads the whole block and [`Scene::render`]
//!   binds it and issues the one indexed draw.
//!
//! ## Per-frame Sequence
//!
//! 1. Events have already been applied to the camera by the app.
//! 2. `FrameContext::recompute` rebuilds the block from the camera's current view.
//! 3. `Scene::update` writes all 128 bytes of the block to the uniform buffer.
//! 4. `Scene::render` sets the pipeline, rebinds the uniform block and draws 36 indices.
//!
//! ## Render State
//!
//! Depth testing passes on `LessEqual` against a depth buffer cleared to `1.0`; triangles are
//! counter-clockwise front-facing and back faces are culled.

use nalgebra_glm as glm;

use crate::camera::Camera;
use crate::frame::Frame;
use crate::renderer::Renderer;
use crate::uniform_binding::UniformBinding;
use crate::uniform_buffer::TransformBlock;
use crate::vertex::{Vertex, BOX_INDICES, BOX_VERTICES};
use crate::SHADER_SOURCE;

/// Offset placing the box in front of the camera's starting position.
pub const OBJECT_TRANSLATION: [f32; 3] = [0.0, 0.0, -5.0];

/// Builds the uniform block for one frame.
///
/// `modelview = view * model * translation`, where `model` is the identity and `translation`
/// is [`OBJECT_TRANSLATION`]. The product is evaluated left to right exactly in this order.
pub fn compute_transform_block(view: &glm::Mat4, projection: &glm::Mat4) -> TransformBlock {
    let model = glm::Mat4::identity();
    let [x, y, z] = OBJECT_TRANSLATION;
    let translation = glm::translation(&glm::vec3(x, y, z));
    let modelview = view * model * translation;
    TransformBlock::new(modelview, *projection)
}

/// Loop state owned by the app and handed to each render step.
#[derive(Debug, Clone, Default)]
pub struct FrameContext {
    /// Mutated by key presses between frames.
    pub camera: Camera,

    /// Fixed projection, built once from the configured screen aspect.
    pub frame: Frame,

    /// Host copy of the uniform block, overwritten by [`FrameContext::recompute`].
    pub transform_block: TransformBlock,
}

impl FrameContext {
    pub fn new(aspect_ratio: f32) -> Self {
        Self {
            camera: Camera::default(),
            frame: Frame::new(aspect_ratio),
            transform_block: TransformBlock::default(),
        }
    }

    /// Rebuilds the uniform block from the camera's current view and the stored projection.
    pub fn recompute(&mut self) -> &TransformBlock {
        self.transform_block =
            compute_transform_block(&self.camera.view_matrix(), &self.frame.projection_matrix);
        &self.transform_block
    }
}

/// GPU resources for drawing the box with the `trans_prop` uniform block.
pub struct Scene {
    /// The box's 24 vertices.
    pub vertex_buffer: wgpu::Buffer,

    /// The box's 36 indices.
    pub index_buffer: wgpu::Buffer,

    /// The uniform buffer and its binding.
    pub uniform: UniformBinding,

    /// Pipeline compiled from the embedded WGSL with the demo's depth and culling state.
    pub pipeline: wgpu::RenderPipeline,
}

impl Scene {
    /// Creates the box buffers, the uniform binding and the render pipeline.
    ///
    /// Pipeline creation is where `wgpu` checks the shader's `trans_prop` declaration against the
    /// uniform layout, including its size.
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        let vertex_buffer = wgpu::util::DeviceExt::create_buffer_init(
            device,
            &wgpu::util::BufferInitDescriptor {
                label: Some("Box Vertex Buffer"),
                contents: bytemuck::cast_slice(&BOX_VERTICES),
                usage: wgpu::BufferUsages::VERTEX,
            },
        );

        let index_buffer = wgpu::util::DeviceExt::create_buffer_init(
            device,
            &wgpu::util::BufferInitDescriptor {
                label: Some("Box Index Buffer"),
                contents: bytemuck::cast_slice(&BOX_INDICES),
                usage: wgpu::BufferUsages::INDEX,
            },
        );

        let uniform = UniformBinding::new(device);
        let pipeline = Self::create_pipeline(device, surface_format, &uniform);

        Self {
            vertex_buffer,
            index_buffer,
            uniform,
            pipeline,
        }
    }

    /// Uploads the whole transform block. Returns the number of bytes written.
    pub fn update(&self, queue: &wgpu::Queue, block: &TransformBlock) -> u64 {
        self.uniform.upload(queue, block)
    }

    /// Binds the pipeline, the uniform block and the box buffers, then draws the box.
    pub fn render(&self, renderpass: &mut wgpu::RenderPass<'_>) {
        renderpass.set_pipeline(&self.pipeline);
        self.uniform.bind(renderpass);

        renderpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        renderpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);

        renderpass.draw_indexed(0..(BOX_INDICES.len() as u32), 0, 0..1);
    }

    fn create_pipeline(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        uniform: &UniformBinding,
    ) -> wgpu::RenderPipeline {
        let shader_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("ubo shader"),
            source: wgpu::ShaderSource::Wgsl(std::borrow::Cow::Borrowed(SHADER_SOURCE)),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("ubo pipeline layout"),
            bind_group_layouts: &[&uniform.bind_group_layout],
            push_constant_ranges: &[],
        });

        let attributes = Vertex::vertex_attributes();

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("ubo pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader_module,
                entry_point: Some("vertex_main"),
                buffers: &[Vertex::description(&attributes)],
                compilation_options: Default::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
                unclipped_depth: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: Renderer::DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::LessEqual,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader_module,
                entry_point: Some("fragment_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            multiview: None,
            cache: None,
        })
    }
}
