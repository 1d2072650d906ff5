//! Rendering of interpolated paths into draw primitives
//!
//! This module is organized into submodules:
//! - `defaults`: Default sizes and settings
//! - `stroke`: Shared stroke geometry (caps, joins, arrows)
//! - `types`: Draw primitives and the backend trait
//! - `validate`: Per-group solid/constant facts and the batch decision
//! - `partition`: Group boundaries, filtering, segment pairs, polyline ids

pub mod defaults;
pub mod partition;
pub mod stroke;
pub mod types;
pub mod validate;

// Re-export commonly used items
pub use stroke::*;
pub use types::*;
pub use validate::{BatchStyle, DrawStrategy, GroupFacts, GroupReport, check_styling, validate};

use crate::aes::{Aesthetic, AttrValue, Linetype};
use crate::errors::{GroupingAdvisory, PathError};
use crate::interpolate::interpolate;
use crate::log::{debug, info, warn};
use crate::table::{PathTable, ResolvedTable};

use partition::{
    boundaries, drop_short_groups, polyline_ids, segment_arrows, segment_pairs,
    trim_incomplete_ends,
};

/// Result of a render call: the primitive plus any notices raised on the way
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub result: DrawResult,
    pub notices: Vec<GroupingAdvisory>,
}

/// Interpolate, validate, partition and dispatch one batch of points.
///
/// Fails before producing anything if the table has no group column, a
/// group can't be interpolated, or the styling is inconsistent.
pub fn render_paths(table: &PathTable, stroke: &StrokeParams) -> Result<Rendered, PathError> {
    let stroke = stroke.validated()?;
    let resolved = interpolate(table)?;
    let report = validate(&resolved);
    let strategy = check_styling(&resolved, &report)?;

    let mut notices = Vec::new();
    if !resolved.is_empty() && report.groups().len() == resolved.len() {
        let notice = GroupingAdvisory {
            groups: report.groups().len(),
        };
        info!("{notice}");
        notices.push(notice);
    }

    let result = draw(&resolved, strategy, &stroke);
    Ok(Rendered { result, notices })
}

/// Filter a validated table and build the primitive for `strategy`.
pub fn draw(table: &ResolvedTable, strategy: DrawStrategy, stroke: &StrokeParams) -> DrawResult {
    let (table, trimmed) = trim_incomplete_ends(table);
    if trimmed > 0 {
        warn!(rows = trimmed, "removed rows with non-finite positions at path ends");
    }
    let (table, dropped) = drop_short_groups(&table);
    if dropped > 0 {
        debug!(rows = dropped, "dropped groups with fewer than two points");
    }
    debug!(rows = table.len(), ?strategy, "partitioned");

    if table.len() < 2 {
        return DrawResult::Empty(EmptyDraw);
    }
    match strategy {
        DrawStrategy::Segments => draw_segments(&table, stroke).into(),
        DrawStrategy::Polylines => draw_polylines(&table, stroke).into(),
    }
}

fn draw_segments(table: &ResolvedTable, stroke: &StrokeParams) -> SegmentBatch {
    let bounds = boundaries(table.groups());
    let pairs = segment_pairs(&bounds);
    let arrows = match stroke.arrow {
        Some(arrow) => segment_arrows(&pairs, &bounds, arrow.ends),
        None => vec![None; pairs.len()],
    };
    let positions = table.positions();
    let segments = pairs
        .iter()
        .zip(arrows)
        .map(|(&(start, end), arrow)| Segment {
            from: positions[start],
            to: positions[end],
            style: resolve_style(table, start),
            arrow,
        })
        .collect();
    SegmentBatch {
        segments,
        stroke: *stroke,
    }
}

fn draw_polylines(table: &ResolvedTable, stroke: &StrokeParams) -> PolylineBatch {
    let tags = polyline_ids(table.groups());
    PolylineBatch {
        points: table.positions().to_vec(),
        styles: tags
            .first_rows
            .iter()
            .map(|&row| resolve_style(table, row))
            .collect(),
        groups: tags
            .first_rows
            .iter()
            .map(|&row| table.groups()[row].clone())
            .collect(),
        ids: tags.ids,
        stroke: *stroke,
    }
}

/// Style of one row. Absent columns fall back to the defaults; missing
/// cells mean "nothing to draw" for colour and linetype.
pub fn resolve_style(table: &ResolvedTable, row: usize) -> StrokeStyle {
    let colour = match table.value(&Aesthetic::Colour, row) {
        Some(v) => v.as_colour(),
        None => Some(defaults::COLOUR),
    };
    let opacity = table
        .value(&Aesthetic::Alpha, row)
        .and_then(AttrValue::as_number);
    let width = table
        .value(&Aesthetic::Linewidth, row)
        .map_or(Some(defaults::LINEWIDTH_MM), AttrValue::as_number)
        .unwrap_or(0.0)
        * defaults::PT;
    let linetype = table
        .value(&Aesthetic::Linetype, row)
        .map_or(Linetype::Solid, Linetype::from_value);
    StrokeStyle {
        colour,
        opacity,
        width,
        linetype,
    }
}
