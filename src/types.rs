//! Strongly-typed numeric and colour primitives for interpath.
//!
//! - Lengths and angles are validated at the boundary (`try_new`)
//! - Colours are plain RGBA and tween per channel

use std::fmt;
use std::str::FromStr;

use glam::Vec4;
use thiserror::Error;

/// Error type for invalid numeric values
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    #[error("value is NaN")]
    NaN,
    /// Value is infinite
    #[error("value is infinite")]
    Infinite,
    /// Value is negative when positive required
    #[error("value is negative")]
    Negative,
    /// Value is below a required minimum
    #[error("value {value} is below the minimum of {min}")]
    BelowMinimum { value: f64, min: f64 },
    /// Value is above a required maximum
    #[error("value {value} is above the maximum of {max}")]
    AboveMaximum { value: f64, max: f64 },
}

/// Reject NaN and infinities.
#[inline]
pub fn finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// Reject NaN, infinities and negative values.
#[inline]
pub fn non_negative(val: f64) -> Result<f64, NumericError> {
    let val = finite(val)?;
    if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// Reject NaN, infinities and anything below `min`.
#[inline]
pub fn at_least(val: f64, min: f64) -> Result<f64, NumericError> {
    let val = finite(val)?;
    if val < min {
        Err(NumericError::BelowMinimum { value: val, min })
    } else {
        Ok(val)
    }
}

/// Length in inches (used for arrow heads)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Length(pub f64);

impl Length {
    /// Create a Length from inches (const-friendly, unchecked).
    #[inline]
    pub(crate) const fn inches(val: f64) -> Length {
        Length(val)
    }

    /// Create a non-negative Length with validation
    #[inline]
    pub fn try_new(val: f64) -> Result<Length, NumericError> {
        non_negative(val).map(Length)
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

/// Angle in degrees
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Angle(pub f64);

impl Angle {
    /// Create an angle strictly between 0 and 180 degrees.
    pub fn try_new(degrees: f64) -> Result<Angle, NumericError> {
        let degrees = finite(degrees)?;
        if degrees <= 0.0 {
            Err(NumericError::BelowMinimum { value: degrees, min: 0.0 })
        } else if degrees >= 180.0 {
            Err(NumericError::AboveMaximum { value: degrees, max: 180.0 })
        } else {
            Ok(Angle(degrees))
        }
    }
}

/// An sRGB colour with straight (non-premultiplied) alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Rgba { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba { r, g, b, a }
    }

    /// Replace the alpha channel with an opacity in `[0, 1]` (clamped).
    pub fn with_opacity(self, opacity: f64) -> Self {
        let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgba { a, ..self }
    }

    fn to_vec4(self) -> Vec4 {
        Vec4::new(self.r as f32, self.g as f32, self.b as f32, self.a as f32)
    }

    fn from_vec4(v: Vec4) -> Self {
        let v = v.round().clamp(Vec4::ZERO, Vec4::splat(255.0));
        Rgba::rgba(v.x as u8, v.y as u8, v.z as u8, v.w as u8)
    }

    /// Per-channel linear blend; `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(self, other: Rgba, t: f64) -> Rgba {
        Rgba::from_vec4(self.to_vec4().lerp(other.to_vec4(), t as f32))
    }

    fn named(name: &str) -> Option<Rgba> {
        let c = match name {
            "black" => Rgba::BLACK,
            "white" => Rgba::WHITE,
            "red" => Rgba::rgb(255, 0, 0),
            "green" => Rgba::rgb(0, 128, 0),
            "blue" => Rgba::rgb(0, 0, 255),
            "yellow" => Rgba::rgb(255, 255, 0),
            "cyan" => Rgba::rgb(0, 255, 255),
            "magenta" => Rgba::rgb(255, 0, 255),
            "orange" => Rgba::rgb(255, 165, 0),
            "purple" => Rgba::rgb(128, 0, 128),
            "brown" => Rgba::rgb(165, 42, 42),
            "pink" => Rgba::rgb(255, 192, 203),
            "gray" | "grey" => Rgba::rgb(128, 128, 128),
            "lightgray" | "lightgrey" => Rgba::rgb(211, 211, 211),
            "darkgray" | "darkgrey" => Rgba::rgb(169, 169, 169),
            "silver" => Rgba::rgb(192, 192, 192),
            "transparent" => Rgba::rgba(255, 255, 255, 0),
            _ => return None,
        };
        Some(c)
    }
}

/// Error from parsing a colour string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("not a colour: {0:?}")]
pub struct ColourParseError(pub String);

impl FromStr for Rgba {
    type Err = ColourParseError;

    /// Accepts a small set of names plus `#rgb`, `#rrggbb` and `#rrggbbaa`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if let Some(c) = Rgba::named(&lower) {
            return Ok(c);
        }
        let err = || ColourParseError(s.to_string());
        let hex = lower.strip_prefix('#').ok_or_else(err)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        match hex.len() {
            3 => {
                let nib = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| err())
                };
                Ok(Rgba::rgb(nib(0)?, nib(1)?, nib(2)?))
            }
            6 => Ok(Rgba::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Rgba::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(err()),
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}
