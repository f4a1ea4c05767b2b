use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use glam::IVec2;
use log::{error, info, warn};
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use display_binding::cli::Cli;
use display_binding::core::presenter::GpuPresenter;
use display_binding::window::{logical_position, WinitSurface};
use display_binding::{
    DeviceConfig, DisplayEnumerator, DisplayLayout, EventLog, LogicalSurface, VideoDevice,
};

const DEVICE_NAME: &str = "display-binding";

// === Offline resolution ===

/// Resolve each probe position against a layout file and report the binding
fn run_layout(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.layout else {
        return Ok(());
    };
    let layout = DisplayLayout::load(path)?;
    info!("Loaded {} displays from {}", layout.len(), path.display());

    let mut surface = LogicalSurface::new(DEVICE_NAME, cli.width, cli.height, DeviceConfig::from(cli));
    let events = EventLog::new();

    for probe in &cli.probes {
        surface.set_absolute_position(probe.x, probe.y, &layout, &events);
        for event in events.drain() {
            info!("{}: surface {} -> {}", event.name(), event.target.raw(), event.display);
        }

        let display = surface
            .bound_display()
            .and_then(|id| layout.get(id))
            .map(|d| d.name.as_str())
            .unwrap_or("none");
        let format = surface.format();
        println!(
            "{},{} -> {} @ {:.3} Hz ({}x{}, ratio {})",
            probe.x,
            probe.y,
            display,
            format.hz,
            format.width,
            format.height,
            surface.device_pixel_ratio()
        );
    }

    Ok(())
}

// === Application ===

struct App {
    cli: Cli,
    device: Option<VideoDevice<WinitSurface>>,
    displays: DisplayLayout,
    events: EventLog,
}

impl App {
    fn new(cli: Cli) -> Self {
        Self {
            cli,
            device: None,
            displays: DisplayLayout::default(),
            events: EventLog::new(),
        }
    }

    fn create_device(&self, event_loop: &ActiveEventLoop) -> Result<VideoDevice<WinitSurface>> {
        let window = event_loop
            .create_window(
                Window::default_attributes()
                    .with_title("Display Binding")
                    .with_visible(false)
                    .with_inner_size(winit::dpi::LogicalSize::new(self.cli.width, self.cli.height)),
            )
            .context("Failed to create window")?;
        let window = Arc::new(window);

        let mut host = WinitSurface::new(window.clone());
        if !self.cli.no_gpu {
            let presenter = pollster::block_on(GpuPresenter::new(window))?;
            host = host.with_presenter(presenter);
        }

        let surface = LogicalSurface::new(
            DEVICE_NAME,
            self.cli.width,
            self.cli.height,
            DeviceConfig::from(&self.cli),
        );
        Ok(VideoDevice::new(surface, host))
    }

    /// Re-snapshot monitors and re-resolve the device's display
    ///
    /// `position` is in logical pixels, like the layout and surface size.
    fn update_position(&mut self, position: IVec2) {
        let Some(device) = &mut self.device else {
            return;
        };
        if let Some(host) = device.host() {
            self.displays = host.display_layout();
        }

        device.sync_size();
        device.set_absolute_position(position.x, position.y, &self.displays, &self.events);

        for event in self.events.drain() {
            let name = self
                .displays
                .get(event.display)
                .map(|d| d.name.as_str())
                .unwrap_or("?");
            info!(
                "{}: {} at {:.3} Hz",
                event.name(),
                name,
                self.displays.refresh_rate(event.display)
            );
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.device.is_some() {
            return;
        }

        let device = match self.create_device(event_loop) {
            Ok(device) => device,
            Err(e) => {
                error!("Failed to initialize video device: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        device.open();
        let position = device.host().and_then(|host| host.logical_position());
        self.device = Some(device);

        match position {
            Some(position) => self.update_position(position),
            None => warn!("Window position unavailable, display binding unresolved"),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => {
                if let Some(device) = &self.device {
                    device.close();
                }
                event_loop.exit();
            }
            WindowEvent::Moved(position) => {
                let scale_factor = self
                    .device
                    .as_ref()
                    .and_then(|device| device.host())
                    .map(|host| host.inner().scale_factor());
                if let Some(scale_factor) = scale_factor {
                    self.update_position(logical_position(position, scale_factor));
                }
            }
            WindowEvent::Resized(size) => {
                if let Some(device) = &mut self.device {
                    if let Some(host) = device.host_mut() {
                        host.resize(size.width, size.height);
                    }
                    device.sync_size();
                    device.redraw();
                }
            }
            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(device) = &mut self.device {
                    device.sync_size();
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(device) = &self.device {
                    if let Err(e) = device.sync_buffers() {
                        error!("Present error: {:#}", e);
                    }
                }
            }
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    if cli.layout.is_some() {
        return run_layout(&cli);
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli);
    event_loop.run_app(&mut app)?;

    Ok(())
}
