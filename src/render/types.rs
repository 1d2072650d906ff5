//! Draw primitives handed to a rendering backend

use std::fmt;

use enum_dispatch::enum_dispatch;
use glam::DVec2;

use crate::aes::{GroupKey, Linetype};
use crate::types::Rgba;

use super::stroke::{ArrowEnds, StrokeParams};

/// Resolved style of one segment or one polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    /// `None` when the colour cell was missing; such strokes are invisible
    pub colour: Option<Rgba>,
    pub opacity: Option<f64>,
    /// Stroke width in points
    pub width: f64,
    pub linetype: Linetype,
}

impl StrokeStyle {
    /// Colour with its alpha replaced by `opacity` when one is set.
    pub fn composited(&self) -> Option<Rgba> {
        let colour = self.colour?;
        Some(match self.opacity {
            Some(opacity) => colour.with_opacity(opacity),
            None => colour,
        })
    }
}

impl fmt::Display for StrokeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.colour {
            Some(c) => write!(f, "colour={c}")?,
            None => f.write_str("colour=NA")?,
        }
        if let Some(opacity) = self.opacity {
            write!(f, " alpha={opacity}")?;
        }
        write!(f, " width={:.2} linetype={}", self.width, self.linetype)
    }
}

/// One independent line between two points.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub from: DVec2,
    pub to: DVec2,
    /// Style of the segment's start row
    pub style: StrokeStyle,
    /// Arrow heads this segment carries, if any
    pub arrow: Option<ArrowEnds>,
}

/// Segment-wise draw instruction.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentBatch {
    pub segments: Vec<Segment>,
    pub stroke: StrokeParams,
}

/// Polyline-wise draw instruction: parallel point/id arrays plus one style
/// per id.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineBatch {
    pub points: Vec<DVec2>,
    /// Per-point path id, `0..styles.len()`
    pub ids: Vec<usize>,
    /// Per-id style, from each group's first row
    pub styles: Vec<StrokeStyle>,
    /// Per-id group key
    pub groups: Vec<GroupKey>,
    pub stroke: StrokeParams,
}

impl PolylineBatch {
    /// Points of each path in id order. Points of one id are contiguous.
    pub fn paths(&self) -> impl Iterator<Item = (usize, &[DVec2])> + '_ {
        let mut start = 0;
        std::iter::from_fn(move || {
            if start >= self.points.len() {
                return None;
            }
            let id = self.ids[start];
            let len = self.ids[start..].iter().take_while(|&&i| i == id).count();
            let run = &self.points[start..start + len];
            start += len;
            Some((id, run))
        })
    }
}

/// Nothing to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmptyDraw;

/// Receiver of finished primitives.
pub trait DrawBackend {
    fn draw_segments(&mut self, batch: &SegmentBatch);
    fn draw_polylines(&mut self, batch: &PolylineBatch);
}

/// Common behaviour of every draw result
#[enum_dispatch]
pub trait Primitive {
    /// Number of vertices the backend will receive
    fn point_count(&self) -> usize;

    /// Shared stroke geometry, `None` for an empty draw
    fn stroke(&self) -> Option<&StrokeParams>;

    /// Hand this primitive to a backend
    fn submit(&self, backend: &mut dyn DrawBackend);
}

impl Primitive for EmptyDraw {
    fn point_count(&self) -> usize {
        0
    }

    fn stroke(&self) -> Option<&StrokeParams> {
        None
    }

    fn submit(&self, _backend: &mut dyn DrawBackend) {}
}

impl Primitive for SegmentBatch {
    fn point_count(&self) -> usize {
        self.segments.len() * 2
    }

    fn stroke(&self) -> Option<&StrokeParams> {
        Some(&self.stroke)
    }

    fn submit(&self, backend: &mut dyn DrawBackend) {
        backend.draw_segments(self);
    }
}

impl Primitive for PolylineBatch {
    fn point_count(&self) -> usize {
        self.points.len()
    }

    fn stroke(&self) -> Option<&StrokeParams> {
        Some(&self.stroke)
    }

    fn submit(&self, backend: &mut dyn DrawBackend) {
        backend.draw_polylines(self);
    }
}

/// Outcome of one render call: exactly one kind of primitive, or nothing.
#[enum_dispatch(Primitive)]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawResult {
    Empty(EmptyDraw),
    Segments(SegmentBatch),
    Polylines(PolylineBatch),
}

impl DrawResult {
    pub fn is_empty(&self) -> bool {
        matches!(self, DrawResult::Empty(_))
    }

    pub fn as_segments(&self) -> Option<&SegmentBatch> {
        match self {
            DrawResult::Segments(batch) => Some(batch),
            _ => None,
        }
    }

    pub fn as_polylines(&self) -> Option<&PolylineBatch> {
        match self {
            DrawResult::Polylines(batch) => Some(batch),
            _ => None,
        }
    }
}

fn fmt_point(p: DVec2) -> String {
    format!("({}, {})", p.x, p.y)
}

/// Plain-text dump, one line per segment or path.
impl fmt::Display for DrawResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawResult::Empty(_) => writeln!(f, "empty"),
            DrawResult::Segments(batch) => {
                writeln!(f, "segments ({})", batch.segments.len())?;
                for seg in &batch.segments {
                    write!(
                        f,
                        "  {} -> {} {}",
                        fmt_point(seg.from),
                        fmt_point(seg.to),
                        seg.style
                    )?;
                    if let Some(ends) = seg.arrow {
                        write!(f, " arrow={ends}")?;
                    }
                    writeln!(f)?;
                }
                Ok(())
            }
            DrawResult::Polylines(batch) => {
                writeln!(
                    f,
                    "polylines ({} paths, {} points)",
                    batch.styles.len(),
                    batch.points.len()
                )?;
                for (id, points) in batch.paths() {
                    let pts: Vec<String> = points.iter().map(|&p| fmt_point(p)).collect();
                    writeln!(
                        f,
                        "  path {id} group={} {}: {}",
                        batch.groups[id],
                        batch.styles[id],
                        pts.join(" ")
                    )?;
                }
                Ok(())
            }
        }
    }
}
