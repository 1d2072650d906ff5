//! Attribute interpolation.
//!
//! Placeholder cells are reconstructed per group from the observed cells of
//! the same column. Each column is classified once into a [`ColumnPolicy`]
//! before any group is visited.
//!
//! # Time axis
//!
//! A row's local time is its index within its group divided by the run
//! length (`i / (N - 1)`). Observed, non-missing cells are the anchors.
//! A placeholder between two anchors gets the tween of those anchors at its
//! relative time; one before the first anchor or after the last takes that
//! anchor's value. A single anchor is therefore broadcast to the whole group.

use crate::aes::{Aesthetic, AttrValue, GroupKey};
use crate::errors::PathError;
use crate::log::debug;
use crate::table::{PathTable, ResolvedTable, StyleColumn, group_runs, sort_order, take};

/// What to do with one style column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnPolicy {
    /// Every cell is missing
    Skip,
    /// No row is a placeholder
    NothingToFill,
    /// Placeholders already hold more than one distinct value
    Explicit,
    /// Every placeholder holds the same non-missing value
    Pinned,
    Interpolate,
}

impl ColumnPolicy {
    pub fn interpolates(self) -> bool {
        self == ColumnPolicy::Interpolate
    }
}

/// Classify a column from its values and the observed flags.
pub fn classify(values: &[AttrValue], observed: &[bool]) -> ColumnPolicy {
    if values.iter().all(AttrValue::is_missing) {
        return ColumnPolicy::Skip;
    }

    let mut distinct: Vec<&AttrValue> = Vec::new();
    let mut any_placeholder = false;
    let mut any_missing = false;
    for (value, _) in values.iter().zip(observed).filter(|(_, obs)| !**obs) {
        any_placeholder = true;
        if value.is_missing() {
            any_missing = true;
        } else if !distinct.contains(&value) {
            distinct.push(value);
        }
    }

    match (any_placeholder, distinct.len(), any_missing) {
        (false, _, _) => ColumnPolicy::NothingToFill,
        (true, n, _) if n > 1 => ColumnPolicy::Explicit,
        (true, 1, false) => ColumnPolicy::Pinned,
        _ => ColumnPolicy::Interpolate,
    }
}

/// Fill every placeholder and drop the observed flags.
///
/// Rows come back sorted by group, intra-group order preserved.
pub fn interpolate(table: &PathTable) -> Result<ResolvedTable, PathError> {
    let groups = table.groups().ok_or(PathError::MissingGroupColumn)?;

    let order = sort_order(groups);
    let groups = take(groups, &order);
    let positions = take(table.positions(), &order);
    let observed = take(table.observed(), &order);
    let runs = group_runs(&groups);

    let columns = table
        .columns()
        .iter()
        .map(|col| {
            let values = take(&col.values, &order);
            let policy = classify(&values, &observed);
            debug!(column = %col.aes, ?policy, "column policy");
            let values = if policy.interpolates() {
                fill_column(&col.aes, &values, &observed, &runs)?
            } else {
                values
            };
            Ok(StyleColumn {
                aes: col.aes.clone(),
                values,
            })
        })
        .collect::<Result<Vec<_>, PathError>>()?;

    Ok(ResolvedTable::from_sorted(groups, positions, columns))
}

fn fill_column(
    aes: &Aesthetic,
    values: &[AttrValue],
    observed: &[bool],
    runs: &[(GroupKey, std::ops::Range<usize>)],
) -> Result<Vec<AttrValue>, PathError> {
    let mut out = Vec::with_capacity(values.len());
    for (group, range) in runs {
        let filled = fill_group(&values[range.clone()], &observed[range.clone()]).ok_or_else(
            || PathError::UnresolvableGroup {
                group: group.clone(),
                column: aes.clone(),
            },
        )?;
        out.extend(filled);
    }
    Ok(out)
}

/// Fill the placeholders of one group. `None` if there are placeholders
/// but no anchor to fill them from.
pub fn fill_group(values: &[AttrValue], observed: &[bool]) -> Option<Vec<AttrValue>> {
    let n = values.len();
    let anchors: Vec<usize> = (0..n)
        .filter(|&i| observed[i] && !values[i].is_missing())
        .collect();

    if observed.iter().all(|&o| o) {
        return Some(values.to_vec());
    }
    let (&first, &last) = (anchors.first()?, anchors.last()?);

    let time = |i: usize| if n > 1 { i as f64 / (n - 1) as f64 } else { 0.0 };

    let mut out = Vec::with_capacity(n);
    // index into `anchors` of the first anchor at or after row i
    let mut next = 0;
    for i in 0..n {
        while next < anchors.len() && anchors[next] < i {
            next += 1;
        }
        let value = if observed[i] {
            values[i].clone()
        } else if i < first {
            values[first].clone()
        } else if i > last {
            values[last].clone()
        } else {
            let (a, b) = (anchors[next - 1], anchors[next]);
            let t = (time(i) - time(a)) / (time(b) - time(a));
            values[a].tween(&values[b], t)
        };
        out.push(value);
    }
    Some(out)
}
