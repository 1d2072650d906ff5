//! Group identifiers, style column names and cell values.

use std::fmt;

use crate::types::Rgba;

/// Identifier shared by every point of one path.
///
/// Integers sort before names, integers numerically, names lexically.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GroupKey {
    Id(i64),
    Name(String),
}

impl From<i64> for GroupKey {
    fn from(id: i64) -> Self {
        GroupKey::Id(id)
    }
}

impl From<i32> for GroupKey {
    fn from(id: i32) -> Self {
        GroupKey::Id(id as i64)
    }
}

impl From<&str> for GroupKey {
    fn from(name: &str) -> Self {
        GroupKey::Name(name.to_string())
    }
}

impl From<String> for GroupKey {
    fn from(name: String) -> Self {
        GroupKey::Name(name)
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Id(id) => write!(f, "{id}"),
            GroupKey::Name(name) => write!(f, "{name}"),
        }
    }
}

/// Name of a style column.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Aesthetic {
    Colour,
    /// Opacity in `[0, 1]`
    Alpha,
    /// Stroke width in millimetres
    Linewidth,
    /// Stroke pattern
    Linetype,
    Other(String),
}

impl Aesthetic {
    pub fn name(&self) -> &str {
        match self {
            Aesthetic::Colour => "colour",
            Aesthetic::Alpha => "alpha",
            Aesthetic::Linewidth => "linewidth",
            Aesthetic::Linetype => "linetype",
            Aesthetic::Other(name) => name,
        }
    }
}

impl From<&str> for Aesthetic {
    fn from(name: &str) -> Self {
        match name {
            "colour" | "color" => Aesthetic::Colour,
            "alpha" => Aesthetic::Alpha,
            "linewidth" | "size" => Aesthetic::Linewidth,
            "linetype" => Aesthetic::Linetype,
            other => Aesthetic::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Aesthetic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One cell of a style column.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum AttrValue {
    #[default]
    Missing,
    Number(f64),
    Colour(Rgba),
    Label(String),
}

impl AttrValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, AttrValue::Missing)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttrValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Colour cells, or labels that parse as a colour.
    pub fn as_colour(&self) -> Option<Rgba> {
        match self {
            AttrValue::Colour(c) => Some(*c),
            AttrValue::Label(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Blend towards `other` at `t` in `[0, 1]`.
    ///
    /// Numbers and colours (including colour names) blend linearly.
    /// Anything else steps to the nearer end, with `t = 0.5` going to
    /// `other`.
    pub fn tween(&self, other: &AttrValue, t: f64) -> AttrValue {
        if self == other {
            return self.clone();
        }
        if let (AttrValue::Number(a), AttrValue::Number(b)) = (self, other) {
            return AttrValue::Number(a + (b - a) * t);
        }
        match (self.as_colour(), other.as_colour()) {
            (Some(a), Some(b)) => AttrValue::Colour(a.lerp(b, t)),
            _ if t < 0.5 => self.clone(),
            _ => other.clone(),
        }
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        AttrValue::Number(n)
    }
}

impl From<Rgba> for AttrValue {
    fn from(c: Rgba) -> Self {
        AttrValue::Colour(c)
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Label(s.to_string())
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(AttrValue::Missing, Into::into)
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Missing => f.write_str("NA"),
            AttrValue::Number(n) => write!(f, "{n}"),
            AttrValue::Colour(c) => write!(f, "{c}"),
            AttrValue::Label(s) => f.write_str(s),
        }
    }
}

/// Stroke pattern.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Linetype {
    Blank,
    #[default]
    Solid,
    Dashed,
    Dotted,
    DotDash,
    LongDash,
    TwoDash,
    /// Hex dash specification such as `"44"` or `"1343"`
    Custom(String),
}

impl Linetype {
    /// Interpret a resolved cell. Numbers follow the classic 0..=6 palette;
    /// a missing cell draws nothing.
    pub fn from_value(value: &AttrValue) -> Linetype {
        match value {
            AttrValue::Number(n) if n.is_finite() && n.fract() == 0.0 => match *n as i64 {
                0 => Linetype::Blank,
                1 => Linetype::Solid,
                2 => Linetype::Dashed,
                3 => Linetype::Dotted,
                4 => Linetype::DotDash,
                5 => Linetype::LongDash,
                6 => Linetype::TwoDash,
                other => Linetype::Custom(other.to_string()),
            },
            // between palette entries, or not finite
            AttrValue::Number(n) => Linetype::Custom(n.to_string()),
            AttrValue::Label(s) => match s.as_str() {
                "blank" => Linetype::Blank,
                "solid" => Linetype::Solid,
                "dashed" => Linetype::Dashed,
                "dotted" => Linetype::Dotted,
                "dotdash" => Linetype::DotDash,
                "longdash" => Linetype::LongDash,
                "twodash" => Linetype::TwoDash,
                other => Linetype::Custom(other.to_string()),
            },
            AttrValue::Missing | AttrValue::Colour(_) => Linetype::Blank,
        }
    }

    pub fn is_solid(&self) -> bool {
        matches!(self, Linetype::Solid)
    }

    pub fn name(&self) -> &str {
        match self {
            Linetype::Blank => "blank",
            Linetype::Solid => "solid",
            Linetype::Dashed => "dashed",
            Linetype::Dotted => "dotted",
            Linetype::DotDash => "dotdash",
            Linetype::LongDash => "longdash",
            Linetype::TwoDash => "twodash",
            Linetype::Custom(pattern) => pattern,
        }
    }
}

impl fmt::Display for Linetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
