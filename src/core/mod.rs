pub mod device;
pub mod display;
pub mod event;
pub mod layout;
pub mod presenter;
pub mod surface;
pub mod timing;

pub use device::*;
pub use display::*;
pub use event::*;
pub use layout::*;
pub use presenter::*;
pub use surface::*;
pub use timing::*;
