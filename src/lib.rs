//! # Uniform Buffer Object Demo
//!
//! This library renders a colored box whose transformation matrices reach the shader through a
//! single uniform buffer object. Each frame the model-view matrix is recomputed from a
//! keyboard-driven camera, packed together with a fixed projection into one fixed-layout block,
//! uploaded to the GPU in full and bound to the shader's `trans_prop` uniform block right before
//! the draw call.
//!
//! ## Modules
//!
//! - [`app`]: Frame driver on top of `winit`: window creation, event dispatch, render loop.
//! - [`settings`]: Command-line parsing into [`Settings`].
//! - [`camera`]: Position/orientation state producing the view matrix.
//! - [`camera_control`]: Maps `W`/`A`/`S`/`D` presses to camera motions.
//! - [`frame`]: Perspective projection storage.
//! - [`uniform_buffer`]: The host-side [`TransformBlock`] (`modelview`, `proj`).
//! - [`uniform_binding`]: GPU buffer, bind group layout and bind group of the block.
//! - [`scene`]: Per-frame uniform sync, box buffers and render pipeline.
//! - [`renderer`]: Render pass, depth buffer and per-frame GPU error query.
//! - [`gpu`]: Surface, device and queue setup.
//! - [`vertex`]: Vertex format and box geometry.
//! - [`fps`]: Frame rate reporting, muted by `--silent`.
//!
//! ## Shader Contract
//!
//! [`SHADER_SOURCE`] declares the uniform block as
//!
//! ```wgsl
//! @group(0) @binding(0)
//! var<uniform> trans_prop: TransProp;
//! ```
//!
//! The binding index is a literal in the shader and [`TRANS_PROP_BINDING`] on the host. They
//! agree by convention; nothing negotiates them at runtime.
//!
//! ## Dependencies
//!
//! - `wgpu`: GPU resources, pipelines and command submission.
//! - `winit`: Window and event loop.
//! - `nalgebra-glm`: Matrix and vector math.
//! - `bytemuck`: Byte views of the uniform block and vertex data.
//! - `log` and `env_logger`: Logging.
//! - `thiserror`: The startup [`Error`] type.

pub mod app;
pub mod camera;
pub mod camera_control;
pub mod error;
pub mod fps;
pub mod frame;
pub mod gpu;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod uniform_binding;
pub mod uniform_buffer;
pub mod vertex;

pub use crate::app::App;
pub use crate::camera::Camera;
pub use crate::camera_control::CameraCommand;
pub use crate::error::{Error, Result};
pub use crate::fps::FpsCounter;
pub use crate::frame::Frame;
pub use crate::gpu::Gpu;
pub use crate::renderer::Renderer;
pub use crate::scene::{compute_transform_block, FrameContext, Scene};
pub use crate::settings::Settings;
pub use crate::uniform_binding::{UniformBinding, TRANS_PROP_BINDING};
pub use crate::uniform_buffer::TransformBlock;
pub use crate::vertex::{Vertex, BOX_INDICES, BOX_VERTICES};

/// WGSL source of the demo's vertex and fragment stages.
///
/// The vertex stage reads `trans_prop.modelview` and `trans_prop.proj` and outputs
/// `proj * modelview * position`; the fragment stage passes the vertex color through.
pub const SHADER_SOURCE: &str = include_str!("ubo.wgsl");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shader_binding_matches_host_constant() {
        let declaration = format!("@binding({TRANS_PROP_BINDING})\nvar<uniform> trans_prop: TransProp;");
        assert!(SHADER_SOURCE.contains(&declaration));
    }

    #[test]
    fn shader_block_declares_modelview_then_proj() {
        let modelview = SHADER_SOURCE.find("modelview: mat4x4<f32>");
        let proj = SHADER_SOURCE.find("proj: mat4x4<f32>");
        assert!(matches!((modelview, proj), (Some(m), Some(p)) if m < p));
    }

    #[test]
    fn shader_entry_points_exist() {
        assert!(SHADER_SOURCE.contains("fn vertex_main("));
        assert!(SHADER_SOURCE.contains("fn fragment_main("));
    }
}
