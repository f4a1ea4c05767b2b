/// Stored refresh rate of a surface
///
/// Either the `-1.0` "unknown" sentinel or a strictly positive rate in Hz.
/// There is no way to build a zero, negative or NaN rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefreshRate(f32);

impl RefreshRate {
    /// Raw value of the "not yet known" sentinel
    pub const UNKNOWN_HZ: f32 = -1.0;

    pub const UNKNOWN: Self = Self(Self::UNKNOWN_HZ);

    /// Accepts only strictly positive rates
    pub fn new(hz: f32) -> Option<Self> {
        (hz > 0.0).then_some(Self(hz))
    }

    /// Raw value, sentinel included
    pub fn hz(&self) -> f32 {
        self.0
    }

    pub fn is_known(&self) -> bool {
        self.0 != Self::UNKNOWN_HZ
    }

    /// Rate reported to consumers: zero while unknown
    pub fn timing_hz(&self) -> f32 {
        if self.is_known() {
            self.0
        } else {
            0.0
        }
    }
}

impl Default for RefreshRate {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

/// Output timing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub hz: f32,
}

impl Timing {
    pub fn new(hz: f32) -> Self {
        Self { hz }
    }
}

/// Output resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
    pub pixel_aspect: f32,
    pub pixel_scale: f32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixel_aspect: 1.0,
            pixel_scale: 1.0,
        }
    }
}

/// Full description of what the device outputs
#[derive(Debug, Clone, PartialEq)]
pub struct VideoFormat {
    pub width: u32,
    pub height: u32,
    pub pixel_aspect: f32,
    pub pixel_scale: f32,
    pub hz: f32,
    pub hardware_id: String,
}
