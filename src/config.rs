use crate::constants::*;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("base hue must be a finite number of degrees, got {0:?}")]
    InvalidHue(String),
    #[error("expected a boolean for {name}, got {value:?}")]
    InvalidFlag { name: &'static str, value: String },
    #[error("unknown intensity {0:?} (expected subtle, medium or strong)")]
    UnknownIntensity(String),
    #[error("blur must be between 0 and {max}px, got {value:?}")]
    InvalidBlur { value: String, max: f64 },
}

/// Colour settings copied into each beam when it is (re)spawned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorMode {
    pub base_hue: f64,
    pub grayscale: bool,
}

impl Default for ColorMode {
    fn default() -> Self {
        Self {
            base_hue: DEFAULT_BASE_HUE,
            grayscale: false,
        }
    }
}

impl ColorMode {
    pub fn new(base_hue: f64, grayscale: bool) -> Result<Self, ConfigError> {
        Ok(Self {
            base_hue: normalize_hue(base_hue)?,
            grayscale,
        })
    }
}

/// Opacity preset applied on top of each beam's pulse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Intensity {
    Subtle,
    Medium,
    #[default]
    Strong,
}

impl Intensity {
    pub fn opacity_scale(self) -> f64 {
        match self {
            Intensity::Subtle => INTENSITY_SUBTLE,
            Intensity::Medium => INTENSITY_MEDIUM,
            Intensity::Strong => INTENSITY_STRONG,
        }
    }
}

impl FromStr for Intensity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "subtle" => Ok(Intensity::Subtle),
            "medium" => Ok(Intensity::Medium),
            "strong" => Ok(Intensity::Strong),
            _ => Err(ConfigError::UnknownIntensity(s.to_string())),
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Intensity::Subtle => "subtle",
            Intensity::Medium => "medium",
            Intensity::Strong => "strong",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeamsConfig {
    pub color: ColorMode,
    pub intensity: Intensity,
    pub blur_px: f64,
}

impl Default for BeamsConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            intensity: Intensity::default(),
            blur_px: DEFAULT_BLUR_PX,
        }
    }
}

// Attribute names read from the host element
pub const ATTR_BASE_HUE: &str = "data-base-hue";
pub const ATTR_GRAYSCALE: &str = "data-grayscale";
pub const ATTR_INTENSITY: &str = "data-intensity";
pub const ATTR_BLUR: &str = "data-blur";

// Keys read from a JS options object
pub const OPT_BASE_HUE: &str = "baseHue";
pub const OPT_GRAYSCALE: &str = "grayscale";
pub const OPT_INTENSITY: &str = "intensity";
pub const OPT_BLUR: &str = "blur";

/// A property of a JS options object, sorted by its JS type.
#[derive(Clone, Debug, PartialEq)]
pub enum OptionValue {
    Number(f64),
    Bool(bool),
    Text(String),
    /// Objects, arrays and the like, kept as their debug rendering.
    Other(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Number(n) => write!(f, "{}", n),
            OptionValue::Bool(b) => write!(f, "{}", b),
            OptionValue::Text(s) | OptionValue::Other(s) => f.write_str(s),
        }
    }
}

impl BeamsConfig {
    /// Apply optional overrides; an invalid hue is logged and ignored.
    pub fn with_color_overrides(mut self, base_hue: Option<f64>, grayscale: Option<bool>) -> Self {
        if let Some(h) = base_hue {
            match ColorMode::new(h, self.color.grayscale) {
                Ok(color) => self.color = color,
                Err(e) => log::warn!("[config] {}", e),
            }
        }
        if let Some(g) = grayscale {
            self.color.grayscale = g;
        }
        self
    }

    /// Build a config from `data-*` style attributes. Missing attributes keep
    /// their defaults; malformed ones are logged and keep their defaults.
    pub fn from_attributes<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(v) = lookup(ATTR_BASE_HUE) {
            match parse_hue(&v) {
                Ok(h) => cfg.color.base_hue = h,
                Err(e) => log::warn!("[config] {}", e),
            }
        }
        if let Some(v) = lookup(ATTR_GRAYSCALE) {
            match parse_flag(ATTR_GRAYSCALE, &v) {
                Ok(g) => cfg.color.grayscale = g,
                Err(e) => log::warn!("[config] {}", e),
            }
        }
        if let Some(v) = lookup(ATTR_INTENSITY) {
            match v.parse::<Intensity>() {
                Ok(i) => cfg.intensity = i,
                Err(e) => log::warn!("[config] {}", e),
            }
        }
        if let Some(v) = lookup(ATTR_BLUR) {
            match parse_blur(&v) {
                Ok(b) => cfg.blur_px = b,
                Err(e) => log::warn!("[config] {}", e),
            }
        }
        cfg
    }

    /// Build a config from a JS options object. Strings go through the same
    /// parsers as attributes; values of any other unexpected type are logged
    /// and keep their defaults.
    pub fn from_options<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OptionValue>,
    {
        let mut cfg = Self::default();
        if let Some(v) = lookup(OPT_BASE_HUE) {
            let hue = match &v {
                OptionValue::Number(n) => normalize_hue(*n),
                OptionValue::Text(s) => parse_hue(s),
                other => Err(ConfigError::InvalidHue(other.to_string())),
            };
            if let Some(h) = warn_invalid(hue) {
                cfg.color.base_hue = h;
            }
        }
        if let Some(v) = lookup(OPT_GRAYSCALE) {
            let flag = match &v {
                OptionValue::Bool(b) => Ok(*b),
                OptionValue::Text(s) => parse_flag(OPT_GRAYSCALE, s),
                other => Err(ConfigError::InvalidFlag {
                    name: OPT_GRAYSCALE,
                    value: other.to_string(),
                }),
            };
            if let Some(g) = warn_invalid(flag) {
                cfg.color.grayscale = g;
            }
        }
        if let Some(v) = lookup(OPT_INTENSITY) {
            let intensity = match &v {
                OptionValue::Text(s) => s.parse::<Intensity>(),
                other => Err(ConfigError::UnknownIntensity(other.to_string())),
            };
            if let Some(i) = warn_invalid(intensity) {
                cfg.intensity = i;
            }
        }
        if let Some(v) = lookup(OPT_BLUR) {
            let blur = match &v {
                OptionValue::Number(n) => validate_blur(*n).ok_or_else(|| ConfigError::InvalidBlur {
                    value: n.to_string(),
                    max: MAX_BLUR_PX,
                }),
                OptionValue::Text(s) => parse_blur(s),
                other => Err(ConfigError::InvalidBlur {
                    value: other.to_string(),
                    max: MAX_BLUR_PX,
                }),
            };
            if let Some(b) = warn_invalid(blur) {
                cfg.blur_px = b;
            }
        }
        cfg
    }
}

fn warn_invalid<T>(result: Result<T, ConfigError>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("[config] {}", e);
            None
        }
    }
}

pub fn normalize_hue(hue: f64) -> Result<f64, ConfigError> {
    if !hue.is_finite() {
        return Err(ConfigError::InvalidHue(hue.to_string()));
    }
    Ok(hue.rem_euclid(360.0))
}

pub fn parse_hue(s: &str) -> Result<f64, ConfigError> {
    let trimmed = s.trim().trim_end_matches("deg");
    let hue: f64 = trimmed
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidHue(s.to_string()))?;
    normalize_hue(hue).map_err(|_| ConfigError::InvalidHue(s.to_string()))
}

/// HTML-style boolean: a present but empty attribute counts as true.
pub fn parse_flag(name: &'static str, s: &str) -> Result<bool, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "" | "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: s.to_string(),
        }),
    }
}

pub fn parse_blur(s: &str) -> Result<f64, ConfigError> {
    let err = || ConfigError::InvalidBlur {
        value: s.to_string(),
        max: MAX_BLUR_PX,
    };
    let v: f64 = s
        .trim()
        .trim_end_matches("px")
        .trim()
        .parse()
        .map_err(|_| err())?;
    validate_blur(v).ok_or_else(err)
}

#[inline]
pub fn validate_blur(v: f64) -> Option<f64> {
    if v.is_finite() && (0.0..=MAX_BLUR_PX).contains(&v) {
        Some(v)
    } else {
        None
    }
}
