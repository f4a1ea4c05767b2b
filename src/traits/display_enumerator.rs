use glam::IVec2;

use crate::core::display::DisplayId;

/// Lookup over the displays currently attached to the desktop
pub trait DisplayEnumerator {
    /// Display owning the given desktop-space point, if any
    fn find_display_at(&self, point: IVec2) -> Option<DisplayId>;

    /// Refresh rate of a display in Hz
    ///
    /// May be zero or negative when the platform does not know the rate.
    fn refresh_rate(&self, display: DisplayId) -> f32;

    /// Ratio between physical and logical pixels on a display
    fn device_pixel_ratio(&self, display: DisplayId) -> Option<f32>;
}
