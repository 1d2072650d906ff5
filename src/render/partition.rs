//! Partition a resolved table into segment index pairs or polyline runs.
//!
//! Every function here assumes its input is sorted by group, so that the
//! rows of one group are contiguous. [`ResolvedTable`] guarantees this;
//! boundary detection is then a pure comparison of adjacent rows.

use std::collections::HashMap;
use std::hash::Hash;

use crate::table::ResolvedTable;

use super::stroke::ArrowEnds;

/// Where a row sits within its group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Boundary {
    /// First row overall, or group differs from the previous row
    pub is_start: bool,
    /// Last row overall, or group differs from the next row
    pub is_end: bool,
}

/// Group boundary markers for a sorted group column.
pub fn boundaries<G: PartialEq>(groups: &[G]) -> Vec<Boundary> {
    let n = groups.len();
    (0..n)
        .map(|i| Boundary {
            is_start: i == 0 || groups[i] != groups[i - 1],
            is_end: i + 1 == n || groups[i] != groups[i + 1],
        })
        .collect()
}

/// Keep only groups with at least two rows. Returns the filtered table and
/// the number of rows dropped.
pub fn drop_short_groups(table: &ResolvedTable) -> (ResolvedTable, usize) {
    let keep: Vec<usize> = table
        .group_runs()
        .into_iter()
        .filter(|(_, rows)| rows.len() >= 2)
        .flat_map(|(_, rows)| rows)
        .collect();
    let dropped = table.len() - keep.len();
    (table.select(&keep), dropped)
}

/// Drop leading and trailing rows of each group whose position is not
/// finite. Interior rows are kept. Returns the table and the number of rows
/// removed.
pub fn trim_incomplete_ends(table: &ResolvedTable) -> (ResolvedTable, usize) {
    let positions = table.positions();
    let complete = |i: usize| positions[i].is_finite();
    let mut keep = Vec::with_capacity(table.len());
    for (_, rows) in table.group_runs() {
        let Some(first) = rows.clone().find(|&i| complete(i)) else {
            continue;
        };
        let last = rows.clone().rev().find(|&i| complete(i)).unwrap_or(first);
        keep.extend(first..=last);
    }
    let removed = table.len() - keep.len();
    (table.select(&keep), removed)
}

/// `(start, end)` row pairs for segment-wise drawing: one per row that does
/// not end its group, so `N - 1` per group of `N`.
pub fn segment_pairs(bounds: &[Boundary]) -> Vec<(usize, usize)> {
    bounds
        .iter()
        .enumerate()
        .filter(|(_, b)| !b.is_end)
        .map(|(i, _)| (i, i + 1))
        .collect()
}

/// Per-segment arrow heads so that heads only land on path ends.
pub fn segment_arrows(
    pairs: &[(usize, usize)],
    bounds: &[Boundary],
    ends: ArrowEnds,
) -> Vec<Option<ArrowEnds>> {
    pairs
        .iter()
        .map(|&(start, end)| ends.restrict(bounds[start].is_start, bounds[end].is_end))
        .collect()
}

/// Polyline tagging of rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolylineIds {
    /// Per-row id, in first-occurrence order of groups
    pub ids: Vec<usize>,
    /// Per-id index of the group's first row
    pub first_rows: Vec<usize>,
}

/// Tag each row with the id of its group.
pub fn polyline_ids<G: Eq + Hash>(groups: &[G]) -> PolylineIds {
    let mut seen: HashMap<&G, usize> = HashMap::new();
    let mut first_rows = Vec::new();
    let ids = groups
        .iter()
        .enumerate()
        .map(|(row, g)| {
            *seen.entry(g).or_insert_with(|| {
                first_rows.push(row);
                first_rows.len() - 1
            })
        })
        .collect();
    PolylineIds { ids, first_rows }
}
