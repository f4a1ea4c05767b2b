pub mod display_enumerator;
pub mod event_sink;
pub mod surface_host;

pub use display_enumerator::*;
pub use event_sink::*;
pub use surface_host::*;
