/// Window a video device renders into
pub trait SurfaceHost {
    /// Size in logical (pre-scaling) pixels
    fn logical_size(&self) -> (u32, u32);

    fn is_visible(&self) -> bool;

    fn set_visible(&self, visible: bool);

    /// Schedule a repaint on the next event loop turn
    fn request_redraw(&self);

    /// Present the back buffer
    fn swap_buffers(&self) -> anyhow::Result<()>;
}
