//! Shared stroke geometry: caps, joins, miter limit and arrows.
//!
//! These are the only call-time settings; everything else comes from the
//! point table.

use std::fmt;

use crate::errors::PathError;
use crate::types::{Angle, Length as Inches, at_least};

use super::defaults;

/// Line cap style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnd {
    #[default]
    Butt,
    Round,
    Square,
}

/// Line join style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    #[default]
    Round,
    Mitre,
    Bevel,
}

/// Which ends of a path carry an arrow head
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArrowEnds {
    First,
    #[default]
    Last,
    Both,
}

impl ArrowEnds {
    /// Restrict to the ends that touch a path boundary.
    ///
    /// `at_first` is true for a segment starting a path, `at_last` for one
    /// ending it. Interior segments get no head.
    pub fn restrict(self, at_first: bool, at_last: bool) -> Option<ArrowEnds> {
        let first = at_first && matches!(self, ArrowEnds::First | ArrowEnds::Both);
        let last = at_last && matches!(self, ArrowEnds::Last | ArrowEnds::Both);
        match (first, last) {
            (true, true) => Some(ArrowEnds::Both),
            (true, false) => Some(ArrowEnds::First),
            (false, true) => Some(ArrowEnds::Last),
            (false, false) => None,
        }
    }
}

impl fmt::Display for ArrowEnds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ArrowEnds::First => "first",
            ArrowEnds::Last => "last",
            ArrowEnds::Both => "both",
        })
    }
}

/// Open (two strokes) or closed (filled triangle) head
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArrowKind {
    #[default]
    Open,
    Closed,
}

/// Arrow decoration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    /// Half-angle of the head
    pub angle: Angle,
    /// Length of the head's sides
    pub length: Inches,
    pub ends: ArrowEnds,
    pub kind: ArrowKind,
}

impl Default for Arrow {
    fn default() -> Self {
        Self {
            angle: defaults::ARROW_ANGLE,
            length: defaults::ARROW_LENGTH,
            ends: ArrowEnds::default(),
            kind: ArrowKind::default(),
        }
    }
}

/// Stroke parameters shared by every primitive of one call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeParams {
    pub line_end: LineEnd,
    pub line_join: LineJoin,
    pub miter_limit: f64,
    pub arrow: Option<Arrow>,
}

impl Default for StrokeParams {
    fn default() -> Self {
        Self {
            line_end: LineEnd::default(),
            line_join: LineJoin::default(),
            miter_limit: defaults::MITER_LIMIT,
            arrow: None,
        }
    }
}

impl StrokeParams {
    pub fn with_arrow(mut self, arrow: Arrow) -> Self {
        self.arrow = Some(arrow);
        self
    }

    /// Check values that come from the caller.
    pub fn validated(self) -> Result<Self, PathError> {
        at_least(self.miter_limit, 1.0).map_err(|source| PathError::InvalidStroke {
            param: "miter_limit",
            source,
        })?;
        if let Some(arrow) = self.arrow {
            Angle::try_new(arrow.angle.0).map_err(|source| PathError::InvalidStroke {
                param: "arrow.angle",
                source,
            })?;
            Inches::try_new(arrow.length.raw()).map_err(|source| PathError::InvalidStroke {
                param: "arrow.length",
                source,
            })?;
        }
        Ok(self)
    }
}
