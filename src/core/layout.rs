use std::path::Path;

use anyhow::{Context, Result};
use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::core::display::{DisplayId, PhysicalDisplay};
use crate::core::timing::RefreshRate;
use crate::traits::DisplayEnumerator;

/// In-memory set of attached displays, in enumeration order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayLayout {
    displays: Vec<PhysicalDisplay>,
}

impl DisplayLayout {
    pub fn new(displays: Vec<PhysicalDisplay>) -> Self {
        Self { displays }
    }

    /// Parse a layout from its JSON form
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid display layout")
    }

    /// Load a layout from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read display layout {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("While loading {}", path.display()))
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize display layout")
    }

    /// Append a display; its handle is its enumeration index
    pub fn push(&mut self, display: PhysicalDisplay) -> DisplayId {
        self.displays.push(display);
        DisplayId(self.displays.len() - 1)
    }

    pub fn get(&self, id: DisplayId) -> Option<&PhysicalDisplay> {
        self.displays.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.displays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.displays.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DisplayId, &PhysicalDisplay)> {
        self.displays
            .iter()
            .enumerate()
            .map(|(index, display)| (DisplayId(index), display))
    }
}

impl DisplayEnumerator for DisplayLayout {
    fn find_display_at(&self, point: IVec2) -> Option<DisplayId> {
        self.iter()
            .find(|(_, display)| display.bounds.contains(point))
            .map(|(id, _)| id)
    }

    fn refresh_rate(&self, display: DisplayId) -> f32 {
        self.get(display)
            .map(|d| d.refresh_hz)
            .unwrap_or(RefreshRate::UNKNOWN_HZ)
    }

    fn device_pixel_ratio(&self, display: DisplayId) -> Option<f32> {
        self.get(display).map(|d| d.device_pixel_ratio)
    }
}
