//! # Application Core (`app.rs`)
//!
//! The `App` struct is the frame driver of the demo. It implements `winit`'s
//! `ApplicationHandler`, creates the window and the renderer on the first `resumed` call, turns
//! key presses into camera commands and runs one render step per redraw.
//!
//! ## Event Ordering
//!
//! `winit` dispatches every pending window event before `RedrawRequested`. Key presses are
//! applied to the camera inside `window_event` as they arrive, so by the time the render step
//! recomputes the matrices the camera already reflects all input of the current frame.
//!
//! ## Controls
//!
//! - `A` / `D`: turn left / right by 5 degrees per press.
//! - `W` / `S`: move forward / backward by 5 units per press.
//! - `Escape` or closing the window: exit.
//!
//! Key-repeat events are presses as well; every press applies its full increment once.

use std::sync::Arc;

use web_time::Instant;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow},
    keyboard::{KeyCode, PhysicalKey},
    window::{Fullscreen, Window, WindowId},
};

use crate::camera_control::CameraCommand;
use crate::error::Error;
use crate::fps::FpsCounter;
use crate::renderer::{FrameStatus, Renderer};
use crate::scene::FrameContext;
use crate::settings::{Settings, TITLE};

/// Window, renderer and per-frame state of the running demo.
pub struct App {
    settings: Settings,

    /// Created on the first `resumed`.
    window: Option<Arc<Window>>,

    /// Created together with the window.
    renderer: Option<Renderer>,

    /// Camera, projection and uniform block, passed by reference to each render step.
    context: FrameContext,

    fps: FpsCounter,

    /// The startup error that stopped the event loop, if any.
    error: Option<Error>,
}

impl App {
    /// Prepares the app. Nothing graphical is created until the event loop resumes it.
    pub fn new(settings: Settings) -> Self {
        let context = FrameContext::new(settings.aspect_ratio());
        let fps = FpsCounter::new(settings.silent, Instant::now());
        Self {
            settings,
            window: None,
            renderer: None,
            context,
            fps,
            error: None,
        }
    }

    /// Camera, projection and uniform block as of the last processed event or frame.
    pub fn context(&self) -> &FrameContext {
        &self.context
    }

    /// Takes the error that made the app exit, if startup failed.
    pub fn take_error(&mut self) -> Option<Error> {
        self.error.take()
    }

    fn window_attributes(&self) -> winit::window::WindowAttributes {
        let fullscreen = self
            .settings
            .fullscreen
            .then_some(Fullscreen::Borderless(None));
        Window::default_attributes()
            .with_title(TITLE)
            .with_inner_size(PhysicalSize::new(
                self.settings.screen_width,
                self.settings.screen_height,
            ))
            .with_fullscreen(fullscreen)
    }

    fn init_window_and_renderer(&mut self, event_loop: &ActiveEventLoop) -> crate::Result<()> {
        let window = Arc::new(event_loop.create_window(self.window_attributes())?);
        let size = window.inner_size();
        log::info!(
            "Created window {}x{} (requested {}x{}, fullscreen: {})",
            size.width,
            size.height,
            self.settings.screen_width,
            self.settings.screen_height,
            self.settings.fullscreen,
        );

        let renderer = pollster::block_on(Renderer::new(window.clone(), size.width, size.height))?;

        window.request_redraw();
        self.window = Some(window);
        self.renderer = Some(renderer);
        Ok(())
    }

    /// Applies one keyboard event. Returns `true` when the app should exit.
    fn handle_key(&mut self, event: &KeyEvent) -> bool {
        if event.state != ElementState::Pressed {
            return false;
        }
        let PhysicalKey::Code(key_code) = event.physical_key else {
            return false;
        };
        if key_code == KeyCode::Escape {
            return true;
        }
        if let Some(command) = CameraCommand::from_key(key_code) {
            command.apply(&mut self.context.camera);
            log::debug!(
                "{command:?}: position {:?}, yaw {:.3}",
                self.context.camera.position,
                self.context.camera.yaw()
            );
        }
        false
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        event_loop.set_control_flow(ControlFlow::Poll);

        if let Err(error) = self.init_window_and_renderer(event_loop) {
            log::error!("Startup failed: {error}");
            self.error = Some(error);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.clone() else {
            return;
        };
        if window.id() != window_id {
            return;
        }

        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if self.handle_key(&event) {
                    event_loop.exit();
                }
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                log::info!("Resizing renderer surface to: ({width}, {height})");
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(width, height);
                }
            }
            WindowEvent::CloseRequested => {
                log::info!("Close requested. Exiting...");
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                let Some(renderer) = self.renderer.as_mut() else {
                    return;
                };
                match renderer.render_frame(&mut self.context) {
                    FrameStatus::Presented => {
                        self.fps.tick(Instant::now());
                    }
                    FrameStatus::Skipped => {}
                    FrameStatus::Fatal => {
                        event_loop.exit();
                        return;
                    }
                }
                window.request_redraw();
            }
            _ => (),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_creates_nothing_graphical() {
        let app = App::new(Settings::from_args(["--screenx", "640", "--screeny", "480"]));
        assert!(app.window.is_none());
        assert!(app.renderer.is_none());
        assert!(app.error.is_none());
    }

    #[test]
    fn window_attributes_follow_settings() {
        let app = App::new(Settings::from_args(["--screenx", "640", "--screeny", "480"]));
        let attributes = app.window_attributes();
        assert_eq!(attributes.title, TITLE);
        assert_eq!(
            attributes.inner_size,
            Some(PhysicalSize::new(640u32, 480u32).into())
        );
        assert!(attributes.fullscreen.is_none());

        let app = App::new(Settings::from_args(["--fullscreen", ""]));
        assert!(app.window_attributes().fullscreen.is_some());
    }

    #[test]
    fn projection_uses_configured_aspect() {
        let app = App::new(Settings::from_args(["--screenx", "800", "--screeny", "400"]));
        let m = app.context().frame.projection_matrix;
        assert!((m[(1, 1)] / m[(0, 0)] - 2.0).abs() < 1e-5);
    }
}
