use std::fmt;

/// Minimal 2D drawing surface, shaped after `CanvasRenderingContext2d`.
///
/// Everything except `set_backing_size` and `ready` needs a live context and
/// is only called after `ready` returned true.
pub trait Canvas2d {
    /// Try to obtain the drawing context; false while it is unavailable.
    fn ready(&mut self) -> bool;
    /// Physical (device-pixel) buffer size. Resets the context transform.
    fn set_backing_size(&mut self, width: u32, height: u32);
    fn set_scale_transform(&mut self, dpr: f64);
    fn clear_rect(&mut self, width: f64, height: f64);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, radians: f64);
    /// Fill `(0, 0, width, length)` with a gradient running from y = 0 to
    /// y = length.
    fn fill_vertical_gradient(&mut self, width: f64, length: f64, stops: &[GradientStop]);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
}

impl Hsla {
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            ..self
        }
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({:.1}, {:.0}%, {:.0}%, {:.4})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Hsla,
}
