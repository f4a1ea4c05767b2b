use anyhow::Result;
use glam::IVec2;

use crate::core::surface::LogicalSurface;
use crate::core::timing::{Resolution, Timing, VideoFormat};
use crate::traits::{DisplayEnumerator, EventSink, SurfaceHost};

/// Video output device driving a window host
///
/// Forwards show/hide, redraw, buffer swap and resize to the host and
/// keeps the logical surface bound to the right display. Worker devices
/// have no host: they never show, draw or present.
pub struct VideoDevice<H: SurfaceHost> {
    surface: LogicalSurface,
    host: Option<H>,
}

impl<H: SurfaceHost> VideoDevice<H> {
    /// Create a device presenting into `host`
    pub fn new(surface: LogicalSurface, host: H) -> Self {
        Self {
            surface,
            host: Some(host),
        }
    }

    /// Create a hostless worker device alongside this one
    pub fn worker(&self) -> Self {
        Self {
            surface: self.surface.worker(),
            host: None,
        }
    }

    pub fn surface(&self) -> &LogicalSurface {
        &self.surface
    }

    pub fn host(&self) -> Option<&H> {
        self.host.as_ref()
    }

    pub fn host_mut(&mut self) -> Option<&mut H> {
        self.host.as_mut()
    }

    pub fn is_worker_device(&self) -> bool {
        self.host.is_none() || self.surface.is_worker()
    }

    fn primary_host(&self) -> Option<&H> {
        if self.surface.is_worker() {
            None
        } else {
            self.host.as_ref()
        }
    }

    pub fn open(&self) {
        if let Some(host) = self.primary_host() {
            host.set_visible(true);
        }
    }

    pub fn close(&self) {
        if let Some(host) = self.primary_host() {
            host.set_visible(false);
        }
    }

    pub fn is_open(&self) -> bool {
        self.primary_host().is_some_and(|host| host.is_visible())
    }

    pub fn redraw(&self) {
        if let Some(host) = self.primary_host() {
            host.request_redraw();
        }
    }

    /// Repaint as soon as possible, falling back to a queued redraw while
    /// the window is hidden
    pub fn redraw_immediately(&self) {
        match self.primary_host() {
            Some(host) if host.is_visible() => host.request_redraw(),
            Some(_) => self.redraw(),
            None => {}
        }
    }

    /// Present the back buffer
    pub fn sync_buffers(&self) -> Result<()> {
        match self.primary_host() {
            Some(host) => host.swap_buffers(),
            None => Ok(()),
        }
    }

    /// Pull the host's current logical size into the surface
    pub fn sync_size(&mut self) {
        if let Some((width, height)) = self.primary_host().map(|host| host.logical_size()) {
            self.surface.set_internal_size(width, height);
        }
    }

    pub fn set_absolute_position(
        &mut self,
        x: i32,
        y: i32,
        displays: &dyn DisplayEnumerator,
        events: &dyn EventSink,
    ) {
        self.surface.set_absolute_position(x, y, displays, events);
    }

    pub fn offset(&self) -> IVec2 {
        self.surface.offset()
    }

    pub fn resolution(&self) -> Resolution {
        self.surface.resolution()
    }

    pub fn internal_resolution(&self) -> Resolution {
        self.surface.internal_resolution()
    }

    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    pub fn timing(&self) -> Timing {
        self.surface.timing()
    }

    pub fn format(&self) -> VideoFormat {
        self.surface.format()
    }
}
