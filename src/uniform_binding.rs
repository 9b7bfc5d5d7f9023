//! # Uniform Binding Module
//!
//! This module defines the `UniformBinding` struct, the GPU-side half of the transform block. It
//! owns the persistent uniform buffer, the bind group layout describing it and the bind group
//! that attaches it to the shader's `trans_prop` block.
//!
//! ## Overview
//!
//! - **Uniform buffer**: one allocation sized to exactly one [`TransformBlock`], created at
//!   startup and rewritten wholesale every frame. There are no partial updates and no double
//!   buffering.
//! - **Bind group layout**: a single uniform-buffer entry at [`TRANS_PROP_BINDING`], visible to
//!   the vertex stage, with `min_binding_size` set to the block size. `wgpu` validates the
//!   shader's declared block against that size when the render pipeline is created, so a
//!   host/shader layout mismatch fails at startup instead of rendering garbage.
//! - **Bind group**: connects the buffer to the binding slot. It is set on the render pass right
//!   before the draw that reads it.
//!
//! ## Binding Contract
//!
//! The binding slot is not negotiated at runtime. The WGSL source hardcodes
//! `@group(0) @binding(0)` and the host uses [`TRANS_PROP_BINDING`]; the two are kept in
//! agreement by convention and a unit test in the crate root.
//!
//! ## Frame Ordering
//!
//! [`UniformBinding::upload`] goes through `wgpu::Queue::write_buffer`, which is ordered before
//! any command buffer submitted afterwards. Since the render step uploads before it submits the
//! frame's draw, the draw always observes the matrices of the same frame.

use crate::uniform_buffer::TransformBlock;

/// Binding index of the `trans_prop` uniform block, shared with the shader source.
pub const TRANS_PROP_BINDING: u32 = 0;

/// Bind group index the uniform block lives in.
pub const TRANS_PROP_GROUP: u32 = 0;

/// The GPU resources backing the `trans_prop` uniform block.
///
/// # Example
///
/// ```ignore
/// let uniform_binding = UniformBinding::new(&device);
///
/// // Every frame: overwrite the whole block, then bind it for the draw.
/// uniform_binding.upload(&queue, &block);
/// uniform_binding.bind(&mut render_pass);
/// ```
pub struct UniformBinding {
    /// The GPU buffer holding one [`TransformBlock`].
    ///
    /// Created with `UNIFORM | COPY_DST` so the shader can read it and the queue can overwrite
    /// it. Its size never changes after creation.
    pub buffer: wgpu::Buffer,

    /// Attaches `buffer` to [`TRANS_PROP_BINDING`] in group [`TRANS_PROP_GROUP`].
    pub bind_group: wgpu::BindGroup,

    /// Layout of `bind_group`; the render pipeline layout is built from it.
    pub bind_group_layout: wgpu::BindGroupLayout,
}

impl UniformBinding {
    /// Allocates the uniform buffer and builds its layout and bind group.
    ///
    /// The buffer starts out holding [`TransformBlock::default`], two identity matrices, so a
    /// draw issued before the first upload is still well defined.
    pub fn new(device: &wgpu::Device) -> Self {
        let buffer = wgpu::util::DeviceExt::create_buffer_init(
            device,
            &wgpu::util::BufferInitDescriptor {
                label: Some("trans_prop uniform buffer"),
                contents: TransformBlock::default().as_bytes(),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            },
        );

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[Self::layout_entry()],
            label: Some("trans_prop_bind_group_layout"),
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: TRANS_PROP_BINDING,
                resource: buffer.as_entire_binding(),
            }],
            label: Some("trans_prop_bind_group"),
        });

        Self {
            buffer,
            bind_group,
            bind_group_layout,
        }
    }

    /// Describes the single uniform entry: vertex-visible, fixed size, no dynamic offset.
    pub fn layout_entry() -> wgpu::BindGroupLayoutEntry {
        wgpu::BindGroupLayoutEntry {
            binding: TRANS_PROP_BINDING,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: wgpu::BufferSize::new(TransformBlock::SIZE),
            },
            count: None,
        }
    }

    /// Overwrites the whole uniform buffer with `block`.
    ///
    /// Always writes exactly [`TransformBlock::SIZE`] bytes at offset 0. Returns the number of
    /// bytes queued.
    pub fn upload(&self, queue: &wgpu::Queue, block: &TransformBlock) -> u64 {
        let bytes = block.as_bytes();
        queue.write_buffer(&self.buffer, 0, bytes);
        bytes.len() as u64
    }

    /// Sets the bind group on `render_pass` so the next draw reads this buffer.
    pub fn bind(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_bind_group(TRANS_PROP_GROUP, &self.bind_group, &[]);
    }
}
