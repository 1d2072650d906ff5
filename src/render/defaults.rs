//! Default sizes and settings

use crate::types::{Angle, Length as Inches, Rgba};

/// Points per millimetre; linewidths are given in mm and drawn in pt.
pub const PT: f64 = 72.27 / 25.4;

pub const LINEWIDTH_MM: f64 = 0.5;
pub const COLOUR: Rgba = Rgba::BLACK;

pub const MITER_LIMIT: f64 = 10.0;

pub const ARROW_ANGLE: Angle = Angle(30.0);
pub const ARROW_LENGTH: Inches = Inches::inches(0.25);
