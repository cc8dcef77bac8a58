//! Redraw requests sent to the host.

/// Host hook that schedules a redraw before the next frame.
///
/// Calls are fire-and-forget and must not block.
pub trait RedrawRequester: Send + Sync {
    fn request_redraw(&self);
}

/// [`RedrawRequester`] that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRedraw;

impl RedrawRequester for NoopRedraw {
    fn request_redraw(&self) {}
}

impl<F> RedrawRequester for F
where
    F: Fn() + Send + Sync,
{
    fn request_redraw(&self) {
        self()
    }
}
