//! Columnar point tables.
//!
//! A [`PathTable`] is what callers hand in: positions, observed flags and
//! style columns, possibly with placeholders. A [`ResolvedTable`] is what
//! interpolation hands out: the same columns with placeholders filled, the
//! observed flags dropped, and rows sorted by group.

use std::ops::Range;

use glam::{DVec2, dvec2};

use crate::aes::{Aesthetic, AttrValue, GroupKey};
use crate::errors::PathError;

/// One input row.
#[derive(Debug, Clone, PartialEq)]
pub struct PathRow {
    pub group: Option<GroupKey>,
    pub position: DVec2,
    /// `false` marks the style values as placeholders
    pub observed: bool,
    /// One value per declared aesthetic, in declaration order
    pub attrs: Vec<AttrValue>,
}

impl PathRow {
    /// An observed row with no style values yet.
    pub fn new(group: impl Into<GroupKey>, x: f64, y: f64) -> Self {
        Self {
            group: Some(group.into()),
            position: dvec2(x, y),
            observed: true,
            attrs: Vec::new(),
        }
    }

    /// A row without a group.
    pub fn ungrouped(x: f64, y: f64) -> Self {
        Self {
            group: None,
            position: dvec2(x, y),
            observed: true,
            attrs: Vec::new(),
        }
    }

    /// Mark this row's style values as placeholders.
    pub fn placeholder(mut self) -> Self {
        self.observed = false;
        self
    }

    /// Append the value for the next declared aesthetic.
    pub fn with(mut self, value: impl Into<AttrValue>) -> Self {
        self.attrs.push(value.into());
        self
    }
}

/// A named style column.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleColumn {
    pub aes: Aesthetic,
    pub values: Vec<AttrValue>,
}

/// Input table, in caller order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathTable {
    group: Option<Vec<GroupKey>>,
    positions: Vec<DVec2>,
    observed: Vec<bool>,
    columns: Vec<StyleColumn>,
}

impl PathTable {
    /// Build a table from rows.
    ///
    /// The group column exists only if every row carries a group. Each row
    /// must carry exactly one value per aesthetic.
    pub fn from_rows(
        aesthetics: impl IntoIterator<Item = Aesthetic>,
        rows: impl IntoIterator<Item = PathRow>,
    ) -> Result<Self, PathError> {
        let mut columns: Vec<StyleColumn> = aesthetics
            .into_iter()
            .map(|aes| StyleColumn {
                aes,
                values: Vec::new(),
            })
            .collect();
        let mut groups = Vec::new();
        let mut all_grouped = true;
        let mut positions = Vec::new();
        let mut observed = Vec::new();

        for (row_idx, row) in rows.into_iter().enumerate() {
            if row.attrs.len() != columns.len() {
                return Err(PathError::ColumnLength {
                    row: row_idx,
                    expected: columns.len(),
                    found: row.attrs.len(),
                });
            }
            match row.group {
                Some(g) => groups.push(g),
                None => all_grouped = false,
            }
            positions.push(row.position);
            observed.push(row.observed);
            for (col, value) in columns.iter_mut().zip(row.attrs) {
                col.values.push(value);
            }
        }

        Ok(Self {
            group: all_grouped.then_some(groups),
            positions,
            observed,
            columns,
        })
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The group column, if present.
    pub fn groups(&self) -> Option<&[GroupKey]> {
        self.group.as_deref()
    }

    pub fn positions(&self) -> &[DVec2] {
        &self.positions
    }

    pub fn observed(&self) -> &[bool] {
        &self.observed
    }

    pub fn columns(&self) -> &[StyleColumn] {
        &self.columns
    }

    pub fn column(&self, aes: &Aesthetic) -> Option<&StyleColumn> {
        self.columns.iter().find(|c| &c.aes == aes)
    }
}

/// Fully resolved table, sorted by group with intra-group order preserved.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedTable {
    groups: Vec<GroupKey>,
    positions: Vec<DVec2>,
    columns: Vec<StyleColumn>,
}

impl ResolvedTable {
    /// Build a resolved table from parallel columns, sorting rows by group.
    pub fn new(
        groups: Vec<GroupKey>,
        positions: Vec<DVec2>,
        columns: Vec<StyleColumn>,
    ) -> Result<Self, PathError> {
        let expected = groups.len();
        if positions.len() != expected {
            return Err(PathError::ColumnLength {
                row: positions.len().min(expected),
                expected,
                found: positions.len(),
            });
        }
        if let Some(col) = columns.iter().find(|c| c.values.len() != expected) {
            return Err(PathError::ColumnLength {
                row: col.values.len().min(expected),
                expected,
                found: col.values.len(),
            });
        }
        let order = sort_order(&groups);
        Ok(Self::from_sorted(
            take(&groups, &order),
            take(&positions, &order),
            columns
                .iter()
                .map(|c| StyleColumn {
                    aes: c.aes.clone(),
                    values: take(&c.values, &order),
                })
                .collect(),
        ))
    }

    /// Caller guarantees `groups` is sorted and all columns share its length.
    pub(crate) fn from_sorted(
        groups: Vec<GroupKey>,
        positions: Vec<DVec2>,
        columns: Vec<StyleColumn>,
    ) -> Self {
        debug_assert!(groups.is_sorted());
        Self {
            groups,
            positions,
            columns,
        }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn groups(&self) -> &[GroupKey] {
        &self.groups
    }

    pub fn positions(&self) -> &[DVec2] {
        &self.positions
    }

    pub fn columns(&self) -> &[StyleColumn] {
        &self.columns
    }

    pub fn column(&self, aes: &Aesthetic) -> Option<&StyleColumn> {
        self.columns.iter().find(|c| &c.aes == aes)
    }

    /// Value of `aes` at `row`, `None` if the column doesn't exist.
    pub fn value(&self, aes: &Aesthetic, row: usize) -> Option<&AttrValue> {
        self.column(aes).map(|c| &c.values[row])
    }

    /// Contiguous runs of rows sharing a group.
    pub fn group_runs(&self) -> Vec<(GroupKey, Range<usize>)> {
        group_runs(&self.groups)
    }

    /// A fresh table holding `rows` in the given order.
    pub fn select(&self, rows: &[usize]) -> ResolvedTable {
        ResolvedTable {
            groups: take(&self.groups, rows),
            positions: take(&self.positions, rows),
            columns: self
                .columns
                .iter()
                .map(|c| StyleColumn {
                    aes: c.aes.clone(),
                    values: take(&c.values, rows),
                })
                .collect(),
        }
    }
}

/// Row indices that stably sort `groups`.
pub(crate) fn sort_order(groups: &[GroupKey]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..groups.len()).collect();
    order.sort_by(|&a, &b| groups[a].cmp(&groups[b]));
    order
}

pub(crate) fn take<T: Clone>(values: &[T], rows: &[usize]) -> Vec<T> {
    rows.iter().map(|&i| values[i].clone()).collect()
}

/// Runs of equal adjacent keys. Only meaningful on sorted input.
pub(crate) fn group_runs(groups: &[GroupKey]) -> Vec<(GroupKey, Range<usize>)> {
    let mut runs: Vec<(GroupKey, Range<usize>)> = Vec::new();
    for (i, g) in groups.iter().enumerate() {
        match runs.last_mut() {
            Some((key, range)) if key == g => range.end = i + 1,
            _ => runs.push((g.clone(), i..i + 1)),
        }
    }
    runs
}
