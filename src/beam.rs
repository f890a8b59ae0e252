use crate::config::ColorMode;
use crate::constants::*;
use crate::paint::{GradientStop, Hsla};
use crate::viewport::LogicalSize;
use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;

/// One translucent shaft of light drifting upwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Beam {
    /// Top-left anchor in logical pixels.
    pub position: DVec2,
    pub width: f64,
    /// Twice the surface height at the last (re)spawn.
    pub length: f64,
    pub angle_deg: f64,
    /// Pixels per nominal tick.
    pub speed: f64,
    pub base_opacity: f64,
    pub hue: f64,
    /// Radians; never wrapped, only its sine is used.
    pub pulse_phase: f64,
    pub pulse_speed: f64,
    pub is_grayscale: bool,
}

impl Beam {
    /// Fresh beam anywhere in the 1.5x oversized region centered on the surface.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, size: LogicalSize, color: ColorMode) -> Self {
        let x = rng.gen::<f64>() * size.width * SPAWN_OVERSAMPLE + size.width * SPAWN_OFFSET;
        let y = rng.gen::<f64>() * size.height * SPAWN_OVERSAMPLE + size.height * SPAWN_OFFSET;
        Self {
            position: DVec2::new(x, y),
            width: rng.gen_range(SPAWN_WIDTH_PX),
            length: size.height * LENGTH_PER_HEIGHT,
            angle_deg: rng.gen_range(ANGLE_DEG),
            speed: rng.gen_range(SPAWN_SPEED),
            base_opacity: rng.gen_range(SPAWN_OPACITY),
            hue: (color.base_hue + (rng.gen::<f64>() - 0.5) * HUE_SPREAD_DEG).rem_euclid(360.0),
            pulse_phase: rng.gen::<f64>() * TAU,
            pulse_speed: rng.gen_range(PULSE_SPEED),
            is_grayscale: color.grayscale,
        }
    }

    /// Move up and advance the pulse by `delta_ms` of wall time.
    #[inline]
    pub fn advance(&mut self, delta_ms: f64) {
        let ticks = delta_ms / NOMINAL_TICK_MS;
        self.position.y -= self.speed * ticks;
        self.pulse_phase += self.pulse_speed * ticks;
    }

    /// Trailing edge is more than the margin above the top of the surface.
    #[inline]
    pub fn is_past_top(&self) -> bool {
        self.position.y + self.length < -RECYCLE_MARGIN_PX
    }

    /// Reset in place just below the bottom edge, in the column picked by
    /// `index`. Angle and pulse state carry over.
    pub fn recycle<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        index: usize,
        total: usize,
        size: LogicalSize,
        color: ColorMode,
    ) {
        let column = (index % RECYCLE_COLUMNS) as f64;
        let band = size.width / RECYCLE_COLUMNS as f64;
        let jitter = (rng.gen::<f64>() - 0.5) * band * RECYCLE_JITTER;
        self.position = DVec2::new(
            column * band + band * 0.5 + jitter,
            size.height + RECYCLE_MARGIN_PX,
        );
        self.width = rng.gen_range(RECYCLE_WIDTH_PX);
        self.length = size.height * LENGTH_PER_HEIGHT;
        self.speed = rng.gen_range(RECYCLE_SPEED);
        self.base_opacity = rng.gen_range(RECYCLE_OPACITY);
        self.hue = if color.grayscale {
            color.base_hue
        } else {
            let step = HUE_SPREAD_DEG / total.max(1) as f64;
            (color.base_hue - HUE_SPREAD_DEG * 0.5 + index as f64 * step).rem_euclid(360.0)
        };
        self.is_grayscale = color.grayscale;
        log::trace!(
            "[beam] recycled #{} to ({:.1}, {:.1})",
            index,
            self.position.x,
            self.position.y
        );
    }

    /// Opacity modulation factor, always within [0.6, 1.0].
    #[inline]
    pub fn pulse_factor(&self) -> f64 {
        PULSE_BASE + PULSE_DEPTH * self.pulse_phase.sin()
    }

    #[inline]
    pub fn pulsing_opacity(&self, opacity_scale: f64) -> f64 {
        self.base_opacity * self.pulse_factor() * opacity_scale
    }

    /// Opaque base colour; grayscale beams ignore their hue.
    pub fn base_color(&self) -> Hsla {
        if self.is_grayscale {
            Hsla {
                hue: 0.0,
                saturation: GRAYSCALE_SATURATION,
                lightness: GRAYSCALE_LIGHTNESS,
                alpha: 1.0,
            }
        } else {
            Hsla {
                hue: self.hue,
                saturation: BEAM_SATURATION,
                lightness: BEAM_LIGHTNESS,
                alpha: 1.0,
            }
        }
    }

    /// Soft-edged gradient along the beam's length.
    pub fn gradient(&self, opacity_scale: f64) -> [GradientStop; 6] {
        let peak = self.pulsing_opacity(opacity_scale);
        let color = self.base_color();
        GRADIENT_STOPS.map(|(offset, weight)| GradientStop {
            offset,
            color: color.with_alpha(peak * weight),
        })
    }
}

/// Fixed-size set of beams. Only ever replaced wholesale; individual beams are
/// recycled in their slot.
#[derive(Clone, Debug, Default)]
pub struct BeamPool {
    beams: Vec<Beam>,
}

impl BeamPool {
    pub fn generate<R: Rng + ?Sized>(
        count: usize,
        rng: &mut R,
        size: LogicalSize,
        color: ColorMode,
    ) -> Self {
        let beams = (0..count).map(|_| Beam::spawn(rng, size, color)).collect();
        Self { beams }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.beams.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Beam> {
        self.beams.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Beam> {
        self.beams.iter_mut()
    }

    #[allow(dead_code)]
    pub fn get(&self, index: usize) -> Option<&Beam> {
        self.beams.get(index)
    }

    #[allow(dead_code)]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Beam> {
        self.beams.get_mut(index)
    }
}
