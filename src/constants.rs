use std::ops::Range;

// Beam simulation tuning constants.
//
// Ranges are half-open and sampled uniformly. Distances are logical (CSS)
// pixels, speeds are per nominal frame tick.

// Population
pub const BEAM_COUNT: usize = 25;
pub const RECYCLE_COLUMNS: usize = 3;
pub const RECYCLE_MARGIN_PX: f64 = 100.0; // how far past the top edge before a beam is reused
pub const RECYCLE_JITTER: f64 = 0.5; // total jitter span as a fraction of a column (±25%)

// Spawn region: 1.5x the surface, centered on it
pub const SPAWN_OVERSAMPLE: f64 = 1.5;
pub const SPAWN_OFFSET: f64 = -0.25;
pub const LENGTH_PER_HEIGHT: f64 = 2.0;

// Initial spawn parameters
pub const SPAWN_WIDTH_PX: Range<f64> = 30.0..90.0;
pub const SPAWN_SPEED: Range<f64> = 0.6..1.8;
pub const SPAWN_OPACITY: Range<f64> = 0.12..0.28;
pub const ANGLE_DEG: Range<f64> = -30.0..-10.0;
pub const PULSE_SPEED: Range<f64> = 0.02..0.05; // radians per tick

// Recycle parameters
pub const RECYCLE_WIDTH_PX: Range<f64> = 100.0..200.0;
pub const RECYCLE_SPEED: Range<f64> = 0.5..0.9;
pub const RECYCLE_OPACITY: Range<f64> = 0.2..0.3;

// Hue spread around the configured base hue (degrees)
pub const HUE_SPREAD_DEG: f64 = 70.0;

// Timing
pub const NOMINAL_TICK_MS: f64 = 16.0;

// Pulse: factor = BASE + DEPTH * sin(phase)
pub const PULSE_BASE: f64 = 0.8;
pub const PULSE_DEPTH: f64 = 0.2;

// Colour (HSL percentages)
pub const BEAM_SATURATION: f64 = 85.0;
pub const BEAM_LIGHTNESS: f64 = 65.0;
pub const GRAYSCALE_SATURATION: f64 = 0.0;
pub const GRAYSCALE_LIGHTNESS: f64 = 75.0;

// (offset along the beam, fraction of the pulsing opacity)
pub const GRADIENT_STOPS: [(f64, f64); 6] = [
    (0.0, 0.0),
    (0.1, 0.5),
    (0.4, 1.0),
    (0.6, 1.0),
    (0.9, 0.5),
    (1.0, 0.0),
];

// Configuration defaults
pub const DEFAULT_BASE_HUE: f64 = 220.0; // neutral blue
pub const DEFAULT_BLUR_PX: f64 = 35.0;
pub const MAX_BLUR_PX: f64 = 200.0;

// Intensity presets (opacity multipliers)
pub const INTENSITY_SUBTLE: f64 = 0.7;
pub const INTENSITY_MEDIUM: f64 = 0.85;
pub const INTENSITY_STRONG: f64 = 1.0;
