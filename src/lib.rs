pub mod cli;
pub mod config;
pub mod core;
pub mod traits;
pub mod window;

pub use crate::config::DeviceConfig;
pub use crate::core::{
    DisplayBounds, DisplayId, DisplayLayout, EventLog, LogicalSurface, PhysicalDisplay,
    RebindingEvent, RefreshRate, SurfaceId, VideoDevice,
};
pub use crate::traits::{DisplayEnumerator, EventSink, SurfaceHost};
