//! # Uniform Buffer
//!
//! This module defines the `TransformBlock` struct, the host-side mirror of the `trans_prop`
//! uniform block declared in the demo's shader. It carries two matrices from the CPU to the GPU
//! every frame:
//!
//! - **`modelview`**: maps object-local coordinates into camera space. It is the composition of
//!   the camera's view matrix, the object's model matrix and the object's placement translation.
//! - **`proj`**: maps camera space into clip space. It is computed once at startup.
//!
//! The vertex shader multiplies them itself (`proj * modelview * position`), so the block keeps
//! them apart instead of uploading a premultiplied matrix.
//!
//! ## Memory Layout
//!
//! The shader declares:
//!
//! ```wgsl
//! struct TransProp {
//!     modelview: mat4x4<f32>,
//!     proj: mat4x4<f32>,
//! }
//! ```
//!
//! Each `mat4x4<f32>` is 64 bytes, column-major, 16-byte aligned, so the block is exactly 128
//! bytes with no padding. `nalgebra_glm::Mat4` is column-major as well, and `#[repr(C)]` keeps the
//! field order. The size is asserted at compile time; any drift between this struct and the shader
//! is otherwise a silent correctness bug.
//!
//! ## Traits
//!
//! - `#[repr(C)]`: C-compatible field order and layout.
//! - `bytemuck::Pod` and `bytemuck::Zeroable`: allow viewing the struct as raw bytes for
//!   `wgpu::Queue::write_buffer` without `unsafe`.

use nalgebra_glm as glm;

/// Host-side copy of the shader's `trans_prop` uniform block.
///
/// One value lives for the whole program. It is overwritten every frame and then uploaded in
/// full through [`crate::UniformBinding::upload`].
///
/// # Example
///
/// ```ignore
/// let block = TransformBlock::new(view * model * translation, frame.projection_matrix);
/// uniform_binding.upload(&queue, &block);
/// ```
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TransformBlock {
    /// Object-to-camera transform (`view * model * translation`).
    ///
    /// The composition order is fixed. The translation is applied first, then the model
    /// transform, then the camera's view.
    pub modelview: glm::Mat4,

    /// Camera-to-clip transform, copied unchanged from [`crate::Frame`].
    pub proj: glm::Mat4,
}

// Catch CPU/GPU layout mismatches at compile time
const _: () = assert!(TransformBlock::SIZE == 2 * 64);

impl Default for TransformBlock {
    fn default() -> Self {
        Self {
            modelview: glm::Mat4::identity(),
            proj: glm::Mat4::identity(),
        }
    }
}

impl TransformBlock {
    /// Byte size of the block, which is also the size of the GPU buffer allocated for it.
    pub const SIZE: u64 = std::mem::size_of::<Self>() as u64;

    pub fn new(modelview: glm::Mat4, proj: glm::Mat4) -> Self {
        Self { modelview, proj }
    }

    /// The exact bytes uploaded to the GPU.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_is_two_mat4() {
        assert_eq!(std::mem::size_of::<TransformBlock>(), 128);
        assert_eq!(TransformBlock::default().as_bytes().len(), 128);
    }

    #[test]
    fn modelview_precedes_proj_in_memory() {
        let block = TransformBlock::new(
            glm::Mat4::from_element(1.0),
            glm::Mat4::from_element(2.0),
        );
        let floats: &[f32] = bytemuck::cast_slice(block.as_bytes());
        assert!(floats[..16].iter().all(|&v| v == 1.0));
        assert!(floats[16..].iter().all(|&v| v == 2.0));
    }

    #[test]
    fn matrices_are_column_major() {
        let translation = glm::translation(&glm::vec3(7.0, 8.0, 9.0));
        let block = TransformBlock::new(translation, glm::Mat4::identity());
        let floats: &[f32] = bytemuck::cast_slice(block.as_bytes());
        // The translation lives in the fourth column, i.e. floats 12..15.
        assert_eq!(&floats[12..15], &[7.0, 8.0, 9.0]);
    }
}
