use std::sync::Arc;

use anyhow::Result;
use glam::IVec2;
use winit::dpi::{LogicalPosition, LogicalSize, PhysicalPosition, PhysicalSize};
use winit::monitor::MonitorHandle;
use winit::window::Window as WinitWindow;

use crate::core::display::{DisplayBounds, PhysicalDisplay};
use crate::core::layout::DisplayLayout;
use crate::core::presenter::GpuPresenter;
use crate::core::timing::RefreshRate;
use crate::traits::SurfaceHost;

/// Surface host backed by a winit window
pub struct WinitSurface {
    inner: Arc<WinitWindow>,
    presenter: Option<GpuPresenter>,
}

impl WinitSurface {
    pub fn new(window: Arc<WinitWindow>) -> Self {
        Self {
            inner: window,
            presenter: None,
        }
    }

    /// Present through a GPU swap chain instead of only notifying winit
    pub fn with_presenter(mut self, presenter: GpuPresenter) -> Self {
        self.presenter = Some(presenter);
        self
    }

    pub fn inner(&self) -> &Arc<WinitWindow> {
        &self.inner
    }

    /// Follow a physical resize of the window
    pub fn resize(&mut self, width: u32, height: u32) {
        if let Some(presenter) = &mut self.presenter {
            presenter.resize(width, height);
        }
    }

    /// Snapshot of the monitors the window can be placed on
    pub fn display_layout(&self) -> DisplayLayout {
        DisplayLayout::from_monitors(self.inner.available_monitors())
    }

    /// Outer position in logical pixels, matching [`SurfaceHost::logical_size`]
    pub fn logical_position(&self) -> Option<IVec2> {
        let position = self.inner.outer_position().ok()?;
        Some(logical_position(position, self.inner.scale_factor()))
    }
}

impl SurfaceHost for WinitSurface {
    fn logical_size(&self) -> (u32, u32) {
        let size = self
            .inner
            .inner_size()
            .to_logical::<u32>(self.inner.scale_factor());
        (size.width, size.height)
    }

    fn is_visible(&self) -> bool {
        // Some platforms cannot tell; treat that as visible
        self.inner.is_visible().unwrap_or(true)
    }

    fn set_visible(&self, visible: bool) {
        self.inner.set_visible(visible);
    }

    fn request_redraw(&self) {
        self.inner.request_redraw();
    }

    fn swap_buffers(&self) -> Result<()> {
        self.inner.pre_present_notify();
        match &self.presenter {
            Some(presenter) => presenter.present(),
            None => Ok(()),
        }
    }
}

/// Convert a physical desktop position to logical pixels
///
/// Surfaces, window positions and display bounds all have to share this
/// unit for the center lookup to be meaningful.
pub fn logical_position(position: PhysicalPosition<i32>, scale_factor: f64) -> IVec2 {
    let logical: LogicalPosition<i32> = position.to_logical(scale_factor);
    IVec2::new(logical.x, logical.y)
}

/// Bounds of a monitor in logical pixels
pub fn logical_bounds(
    position: PhysicalPosition<i32>,
    size: PhysicalSize<u32>,
    scale_factor: f64,
) -> DisplayBounds {
    let origin = logical_position(position, scale_factor);
    let size: LogicalSize<u32> = size.to_logical(scale_factor);
    DisplayBounds::new(origin.x, origin.y, size.width, size.height)
}

impl DisplayLayout {
    /// Build a layout from winit monitors, keeping their enumeration order
    ///
    /// Bounds are converted to logical pixels with each monitor's scale factor.
    pub fn from_monitors(monitors: impl IntoIterator<Item = MonitorHandle>) -> Self {
        Self::new(
            monitors
                .into_iter()
                .enumerate()
                .map(|(index, monitor)| physical_display(index, &monitor))
                .collect(),
        )
    }
}

fn physical_display(index: usize, monitor: &MonitorHandle) -> PhysicalDisplay {
    let scale_factor = monitor.scale_factor();
    let refresh_hz = monitor
        .refresh_rate_millihertz()
        .map(millihertz_to_hz)
        .unwrap_or(RefreshRate::UNKNOWN_HZ);

    PhysicalDisplay::new(
        monitor
            .name()
            .unwrap_or_else(|| format!("display-{}", index)),
        logical_bounds(monitor.position(), monitor.size(), scale_factor),
        refresh_hz,
    )
    .with_pixel_ratio(scale_factor as f32)
}

fn millihertz_to_hz(millihertz: u32) -> f32 {
    millihertz as f32 / 1000.0
}
