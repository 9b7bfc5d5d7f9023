use ubo_core::{settings, App, Settings};
use winit::event_loop::EventLoop;

fn main() -> anyhow::Result<()> {
    // Set RUST_LOG=debug (or wgpu=debug) for more verbose output.
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info,wgpu_core=warn,wgpu_hal=warn,naga=warn"),
    )
    .init();

    let settings = Settings::from_args(std::env::args().skip(1));
    settings.log_arguments();

    if settings.help {
        print!("{}", settings::usage());
        return Ok(());
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(settings);
    event_loop.run_app(&mut app)?;

    if let Some(error) = app.take_error() {
        return Err(error.into());
    }
    Ok(())
}
