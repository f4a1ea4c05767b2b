use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Handle to a physical display, identified by its enumeration order
///
/// Surfaces hold this instead of the display itself: the enumerator owns
/// displays, and they can come and go independently of any surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayId(pub usize);

impl DisplayId {
    /// Enumeration index of the display
    pub fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for DisplayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "display-{}", self.0)
    }
}

/// Desktop-space rectangle covered by a display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayBounds {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl DisplayBounds {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Top-left corner
    pub fn origin(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    /// Half-open containment: the right and bottom edges belong to the
    /// neighbouring display.
    pub fn contains(&self, point: IVec2) -> bool {
        let (px, py) = (i64::from(point.x), i64::from(point.y));
        let (x, y) = (i64::from(self.x), i64::from(self.y));
        px >= x && py >= y && px < x + i64::from(self.width) && py < y + i64::from(self.height)
    }
}

fn default_pixel_ratio() -> f32 {
    1.0
}

/// An attached screen with its own timing characteristics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalDisplay {
    pub name: String,
    pub bounds: DisplayBounds,
    /// Refresh rate in Hz; non-positive when the platform does not report one
    pub refresh_hz: f32,
    #[serde(default = "default_pixel_ratio")]
    pub device_pixel_ratio: f32,
}

impl PhysicalDisplay {
    pub fn new(name: impl Into<String>, bounds: DisplayBounds, refresh_hz: f32) -> Self {
        Self {
            name: name.into(),
            bounds,
            refresh_hz,
            device_pixel_ratio: default_pixel_ratio(),
        }
    }

    pub fn with_pixel_ratio(mut self, ratio: f32) -> Self {
        self.device_pixel_ratio = ratio;
        self
    }
}
