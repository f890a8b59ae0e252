use crate::paint::Canvas2d;
use crate::viewport::{LogicalSize, Viewport};

/// Handle to a registered resize listener.
pub trait ResizeSubscription {
    /// Stop receiving resize notifications.
    fn unsubscribe(&mut self);
}

/// Owns the drawable surface and its size. Drawing goes through the context
/// handed out by `begin_frame`, already scaled so coordinates are logical
/// pixels.
pub struct SurfaceManager<C, L> {
    canvas: Option<C>,
    listener: Option<L>,
    viewport: Viewport,
    transform_dirty: bool,
}

impl<C, L> Default for SurfaceManager<C, L> {
    fn default() -> Self {
        Self {
            canvas: None,
            listener: None,
            viewport: Viewport::default(),
            transform_dirty: false,
        }
    }
}

impl<C: Canvas2d, L: ResizeSubscription> SurfaceManager<C, L> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the surface and size it. A previous binding is torn down first.
    pub fn mount(&mut self, canvas: C, listener: L, viewport: Viewport) {
        if self.is_mounted() {
            log::warn!("[surface] mount while already mounted; releasing previous surface");
            self.teardown();
        }
        self.canvas = Some(canvas);
        self.listener = Some(listener);
        self.apply(viewport);
    }

    /// Re-measure after a resize notification.
    pub fn resize(&mut self, viewport: Viewport) {
        if self.canvas.is_none() {
            return;
        }
        self.apply(viewport);
    }

    fn apply(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if let Some(canvas) = self.canvas.as_mut() {
            let (w, h) = viewport.physical_size();
            canvas.set_backing_size(w, h);
            // Resizing the buffer resets the transform; reapply on next use.
            self.transform_dirty = true;
        }
        if viewport.size.is_degenerate() {
            log::debug!(
                "[surface] degenerate size {}x{}",
                viewport.size.width,
                viewport.size.height
            );
        }
    }

    /// Drawing context in logical pixels, or `None` while unavailable.
    pub fn context(&mut self) -> Option<&mut C> {
        let canvas = self.canvas.as_mut()?;
        if !canvas.ready() {
            return None;
        }
        if self.transform_dirty {
            canvas.set_scale_transform(self.viewport.dpr);
            self.transform_dirty = false;
        }
        Some(canvas)
    }

    /// Clear the logical area and hand out the context for this frame.
    pub fn begin_frame(&mut self) -> Option<&mut C> {
        let size = self.viewport.size;
        let canvas = self.context()?;
        canvas.clear_rect(size.width, size.height);
        Some(canvas)
    }

    /// Erase the drawable region; false if there was nothing to clear.
    #[allow(dead_code)]
    pub fn clear(&mut self) -> bool {
        self.begin_frame().is_some()
    }

    /// Drop the resize listener. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        if let Some(mut listener) = self.listener.take() {
            listener.unsubscribe();
            log::debug!("[surface] resize listener removed");
        }
        self.canvas = None;
        self.transform_dirty = false;
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.canvas.is_some()
    }

    #[inline]
    pub fn logical_size(&self) -> LogicalSize {
        self.viewport.size
    }
}
