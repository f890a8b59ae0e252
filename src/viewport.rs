/// Size of the host region in logical (CSS) pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LogicalSize {
    pub width: f64,
    pub height: f64,
}

impl LogicalSize {
    /// Negative or non-finite dimensions collapse to zero (not laid out yet).
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: sanitize_extent(width),
            height: sanitize_extent(height),
        }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Logical size plus the device pixel ratio it was measured at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub size: LogicalSize,
    pub dpr: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            size: LogicalSize::default(),
            dpr: 1.0,
        }
    }
}

impl Viewport {
    pub fn new(size: LogicalSize, dpr: f64) -> Self {
        let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        Self { size, dpr }
    }

    /// Backing buffer size in device pixels, never smaller than 1x1.
    pub fn physical_size(&self) -> (u32, u32) {
        let w = (self.size.width * self.dpr) as u32;
        let h = (self.size.height * self.dpr) as u32;
        (w.max(1), h.max(1))
    }
}

#[inline]
fn sanitize_extent(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}
