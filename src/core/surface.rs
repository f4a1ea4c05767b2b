use glam::{IVec2, UVec2};
use log::{debug, warn};

use crate::config::DeviceConfig;
use crate::core::display::DisplayId;
use crate::core::event::{RebindingEvent, SurfaceId};
use crate::core::timing::{RefreshRate, Resolution, Timing, VideoFormat};
use crate::traits::{DisplayEnumerator, EventSink};

/// What a surface is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceRole {
    /// Visible output bound to a window
    Primary,
    /// Offscreen helper sharing a context; never positioned or shown
    Worker,
}

/// Toolkit-agnostic output target a renderer draws into
///
/// Tracks where the surface sits on the desktop, which physical display
/// owns it and that display's refresh rate.
#[derive(Debug, Clone)]
pub struct LogicalSurface {
    id: SurfaceId,
    name: String,
    role: SurfaceRole,
    position: IVec2,
    /// Internal (pre-scaling) size in logical pixels
    size: UVec2,
    refresh: RefreshRate,
    display: Option<DisplayId>,
    device_pixel_ratio: f32,
    config: DeviceConfig,
}

impl LogicalSurface {
    pub fn new(name: impl Into<String>, width: u32, height: u32, config: DeviceConfig) -> Self {
        Self {
            id: SurfaceId::next(),
            name: name.into(),
            role: SurfaceRole::Primary,
            position: IVec2::ZERO,
            size: UVec2::new(width, height),
            refresh: RefreshRate::UNKNOWN,
            display: None,
            device_pixel_ratio: 1.0,
            config,
        }
    }

    /// Surface for a worker context, derived from this one
    pub fn worker(&self) -> Self {
        Self {
            name: format!("{}-workerContextDevice", self.name),
            role: SurfaceRole::Worker,
            ..Self::new("", self.size.x, self.size.y, self.config)
        }
    }

    pub fn id(&self) -> SurfaceId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> SurfaceRole {
        self.role
    }

    pub fn is_worker(&self) -> bool {
        self.role == SurfaceRole::Worker
    }

    /// Display the surface is currently bound to
    pub fn bound_display(&self) -> Option<DisplayId> {
        self.display
    }

    pub fn refresh_rate(&self) -> RefreshRate {
        self.refresh
    }

    pub fn device_pixel_ratio(&self) -> f32 {
        self.device_pixel_ratio
    }

    /// Top-left corner in desktop coordinates
    pub fn offset(&self) -> IVec2 {
        self.position
    }

    pub fn set_internal_size(&mut self, width: u32, height: u32) {
        self.size = UVec2::new(width, height);
    }

    pub fn internal_resolution(&self) -> Resolution {
        Resolution::new(self.size.x, self.size.y)
    }

    /// Resolution in physical pixels
    pub fn resolution(&self) -> Resolution {
        Resolution::new(self.width(), self.height())
    }

    pub fn width(&self) -> u32 {
        self.scaled(self.size.x)
    }

    pub fn height(&self) -> u32 {
        self.scaled(self.size.y)
    }

    pub fn timing(&self) -> Timing {
        Timing::new(self.refresh.timing_hz())
    }

    pub fn format(&self) -> VideoFormat {
        VideoFormat {
            width: self.width(),
            height: self.height(),
            pixel_aspect: 1.0,
            pixel_scale: 1.0,
            hz: self.refresh.timing_hz(),
            hardware_id: self.hardware_identification(),
        }
    }

    pub fn hardware_identification(&self) -> String {
        match self.display {
            Some(display) => format!("{}/{}", self.name, display),
            None => self.name.clone(),
        }
    }

    /// Bind to a physical display and pick up its pixel ratio
    pub fn bind_display(&mut self, display: DisplayId, displays: &dyn DisplayEnumerator) {
        self.display = Some(display);
        self.device_pixel_ratio = 1.0;

        if !self.config.hidpi {
            return;
        }

        if let Some(ratio) = displays
            .device_pixel_ratio(display)
            .filter(|r| r.is_finite() && *r > 0.0)
        {
            self.device_pixel_ratio = ratio;
        }
    }

    /// Move the surface and re-resolve the display under its center
    ///
    /// The lookup runs when the position changed or the refresh rate is
    /// still unknown. Every successful lookup rebinds the surface and emits
    /// a [`RebindingEvent`], even if the display is the one already bound.
    /// A candidate rate that is not strictly positive is never stored.
    pub fn set_absolute_position(
        &mut self,
        x: i32,
        y: i32,
        displays: &dyn DisplayEnumerator,
        events: &dyn EventSink,
    ) {
        if self.is_worker() {
            return;
        }

        let position = IVec2::new(x, y);
        if position != self.position || !self.refresh.is_known() {
            let mut candidate = RefreshRate::UNKNOWN_HZ;

            let center = position.saturating_add((self.size / 2).as_ivec2());
            if let Some(display) = displays.find_display_at(center) {
                self.bind_display(display, displays);
                candidate = displays.refresh_rate(display);
                events.emit(RebindingEvent::new(self.id, self.id, display));
            }

            if candidate != self.refresh.hz() {
                match RefreshRate::new(candidate) {
                    Some(rate) => {
                        self.refresh = rate;
                        debug!("{}: new desktop refresh rate {}", self.name, rate.hz());
                    }
                    None => warn!(
                        "{}: ignoring intended desktop refresh rate = {}",
                        self.name, candidate
                    ),
                }
            }
        }

        self.position = position;
    }

    fn scaled(&self, logical: u32) -> u32 {
        (logical as f32 * self.device_pixel_ratio) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::display::{DisplayBounds, PhysicalDisplay};
    use crate::core::event::EventLog;
    use crate::core::layout::DisplayLayout;

    fn layout() -> DisplayLayout {
        DisplayLayout::new(vec![
            PhysicalDisplay::new("DP-1", DisplayBounds::new(0, 0, 1920, 1080), 60.0),
            PhysicalDisplay::new("DP-2", DisplayBounds::new(1920, 0, 3840, 2160), 120.0)
                .with_pixel_ratio(2.0),
        ])
    }

    #[test]
    fn new_surface_starts_unbound() {
        let surface = LogicalSurface::new("main", 640, 480, DeviceConfig::default());
        assert_eq!(surface.offset(), IVec2::ZERO);
        assert_eq!(surface.bound_display(), None);
        assert!(!surface.refresh_rate().is_known());
        assert_eq!(surface.timing().hz, 0.0);
        assert_eq!(surface.device_pixel_ratio(), 1.0);
    }

    #[test]
    fn lookup_uses_center_not_corner() {
        // Corner on DP-1, center on DP-2
        let mut surface = LogicalSurface::new("main", 400, 400, DeviceConfig::default());
        let events = EventLog::new();
        surface.set_absolute_position(1800, 100, &layout(), &events);
        assert_eq!(surface.bound_display(), Some(DisplayId(1)));
        assert_eq!(surface.refresh_rate().hz(), 120.0);
    }

    #[test]
    fn binding_adopts_pixel_ratio() {
        let mut surface = LogicalSurface::new("main", 800, 600, DeviceConfig::default());
        surface.set_absolute_position(2000, 0, &layout(), &EventLog::new());
        assert_eq!(surface.device_pixel_ratio(), 2.0);
        assert_eq!(surface.internal_resolution(), Resolution::new(800, 600));
        assert_eq!(surface.resolution(), Resolution::new(1600, 1200));
        assert_eq!((surface.width(), surface.height()), (1600, 1200));
    }

    #[test]
    fn rebinding_resets_pixel_ratio() {
        let mut surface = LogicalSurface::new("main", 800, 600, DeviceConfig::default());
        let events = EventLog::new();
        surface.set_absolute_position(2000, 0, &layout(), &events);
        surface.set_absolute_position(10, 10, &layout(), &events);
        assert_eq!(surface.bound_display(), Some(DisplayId(0)));
        assert_eq!(surface.device_pixel_ratio(), 1.0);
        assert_eq!(surface.refresh_rate().hz(), 60.0);
    }

    #[test]
    fn hidpi_disabled_keeps_unit_ratio() {
        let config = DeviceConfig { hidpi: false };
        let mut surface = LogicalSurface::new("main", 800, 600, config);
        surface.set_absolute_position(2000, 0, &layout(), &EventLog::new());
        assert_eq!(surface.bound_display(), Some(DisplayId(1)));
        assert_eq!(surface.device_pixel_ratio(), 1.0);
        assert_eq!(surface.width(), 800);
    }

    #[test]
    fn invalid_pixel_ratio_is_ignored() {
        let displays = DisplayLayout::new(vec![PhysicalDisplay::new(
            "DP-1",
            DisplayBounds::new(0, 0, 1920, 1080),
            60.0,
        )
        .with_pixel_ratio(0.0)]);
        let mut surface = LogicalSurface::new("main", 100, 100, DeviceConfig::default());
        surface.set_absolute_position(0, 0, &displays, &EventLog::new());
        assert_eq!(surface.device_pixel_ratio(), 1.0);
    }

    #[test]
    fn worker_ignores_positioning() {
        let primary = LogicalSurface::new("main", 800, 600, DeviceConfig::default());
        let mut worker = primary.worker();
        let events = EventLog::new();
        worker.set_absolute_position(10, 10, &layout(), &events);

        assert!(worker.is_worker());
        assert_eq!(worker.name(), "main-workerContextDevice");
        assert_ne!(worker.id(), primary.id());
        assert_eq!(worker.offset(), IVec2::ZERO);
        assert_eq!(worker.bound_display(), None);
        assert!(events.is_empty());
    }

    #[test]
    fn format_reports_scaled_size_and_timing() {
        let mut surface = LogicalSurface::new("main", 800, 600, DeviceConfig::default());
        surface.set_absolute_position(2000, 0, &layout(), &EventLog::new());
        let format = surface.format();
        assert_eq!((format.width, format.height), (1600, 1200));
        assert_eq!(format.hz, 120.0);
        assert_eq!(format.hardware_id, "main/display-1");
    }

    #[test]
    fn unbound_format_reports_zero_hz() {
        let surface = LogicalSurface::new("main", 800, 600, DeviceConfig::default());
        let format = surface.format();
        assert_eq!(format.hz, 0.0);
        assert_eq!(format.hardware_id, "main");
    }

    #[test]
    fn center_saturates_at_integer_limits() {
        let mut surface = LogicalSurface::new("main", 800, 600, DeviceConfig::default());
        let events = EventLog::new();
        surface.set_absolute_position(i32::MAX, i32::MAX, &layout(), &events);
        assert_eq!(surface.offset(), IVec2::new(i32::MAX, i32::MAX));
        assert!(events.is_empty());
    }
}
