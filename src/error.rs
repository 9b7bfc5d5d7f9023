//! # Errors
//!
//! Startup failures of the GPU context and the window. Everything that can go wrong once the
//! render loop is running (validation errors, lost surfaces) is logged and recovered from inside
//! the loop instead of being surfaced here.

/// Errors raised while bringing up the window and the GPU context.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The windowing system refused to create the application window.
    #[error("failed to create window: {0}")]
    CreateWindow(#[from] winit::error::OsError),

    /// The window could not be turned into a presentable surface.
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    /// No adapter compatible with the window surface was found.
    #[error("no compatible GPU adapter found")]
    NoAdapter,

    /// The adapter refused to hand out a device and queue.
    #[error("failed to request device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    /// The surface reports no supported texture formats for the adapter.
    #[error("surface is not supported by the selected adapter")]
    UnsupportedSurface,
}

/// Convenience alias used by the fallible startup functions of this crate.
pub type Result<T> = std::result::Result<T, Error>;
