//! Group validation: is each group solid, is its styling constant, and
//! which draw strategy does that leave for the whole batch.

use std::ops::Range;

use crate::aes::{Aesthetic, AttrValue, GroupKey, Linetype};
use crate::errors::PathError;
use crate::log::debug;
use crate::table::ResolvedTable;

/// Facts about one group
#[derive(Debug, Clone, PartialEq)]
pub struct GroupFacts {
    pub group: GroupKey,
    pub rows: Range<usize>,
    /// Linetype is solid on every row
    pub solid: bool,
    /// Every style column is identical on every row
    pub constant: bool,
}

/// Batch-level styling decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStyle {
    /// Every group has constant styling: one polyline per group
    UniformConstantGroups,
    /// Some group varies, but every group is solid: one segment per step
    UniformSolidSegments,
    /// A group varies and some group isn't solid. `offender` indexes the
    /// group to blame in [`GroupReport::groups`].
    Invalid { offender: usize },
}

/// How the batch will be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawStrategy {
    Segments,
    Polylines,
}

impl BatchStyle {
    pub fn strategy(self) -> Option<DrawStrategy> {
        match self {
            BatchStyle::UniformConstantGroups => Some(DrawStrategy::Polylines),
            BatchStyle::UniformSolidSegments => Some(DrawStrategy::Segments),
            BatchStyle::Invalid { .. } => None,
        }
    }
}

/// Per-group facts for a whole table
#[derive(Debug, Clone, PartialEq)]
pub struct GroupReport {
    groups: Vec<GroupFacts>,
}

impl GroupReport {
    pub fn groups(&self) -> &[GroupFacts] {
        &self.groups
    }

    pub fn all_solid(&self) -> bool {
        self.groups.iter().all(|g| g.solid)
    }

    pub fn all_constant(&self) -> bool {
        self.groups.iter().all(|g| g.constant)
    }

    /// Constant wins over solid. An invalid batch blames the first group
    /// that is neither solid nor constant, else the first non-constant one.
    pub fn batch_style(&self) -> BatchStyle {
        let Some(varying) = self.groups.iter().position(|g| !g.constant) else {
            return BatchStyle::UniformConstantGroups;
        };
        if self.all_solid() {
            return BatchStyle::UniformSolidSegments;
        }
        let offender = self
            .groups
            .iter()
            .position(|g| !g.solid && !g.constant)
            .unwrap_or(varying);
        BatchStyle::Invalid { offender }
    }

    /// Group to blame when the batch is invalid.
    pub fn first_offender(&self) -> Option<&GroupFacts> {
        match self.batch_style() {
            BatchStyle::Invalid { offender } => self.groups.get(offender),
            _ => None,
        }
    }
}

/// Compute `solid` and `constant` for every group.
pub fn validate(table: &ResolvedTable) -> GroupReport {
    let linetype = table.column(&Aesthetic::Linetype);
    let groups = table
        .group_runs()
        .into_iter()
        .map(|(group, rows)| {
            // no linetype column means the default solid stroke
            let solid = linetype.is_none_or(|col| {
                col.values[rows.clone()]
                    .iter()
                    .all(|v| Linetype::from_value(v).is_solid())
            });
            let constant = varying_aesthetics(table, rows.clone()).is_empty();
            GroupFacts {
                group,
                rows,
                solid,
                constant,
            }
        })
        .collect();
    GroupReport { groups }
}

/// Style columns whose value changes within `rows`.
pub fn varying_aesthetics(table: &ResolvedTable, rows: Range<usize>) -> Vec<Aesthetic> {
    table
        .columns()
        .iter()
        .filter(|col| !all_equal(&col.values[rows.clone()]))
        .map(|col| col.aes.clone())
        .collect()
}

fn all_equal(values: &[AttrValue]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}

/// Reject an invalid batch, naming the first offending group.
pub fn check_styling(
    table: &ResolvedTable,
    report: &GroupReport,
) -> Result<DrawStrategy, PathError> {
    let style = report.batch_style();
    debug!(
        ?style,
        all_solid = report.all_solid(),
        all_constant = report.all_constant(),
        "batch style"
    );
    match style {
        BatchStyle::UniformConstantGroups => Ok(DrawStrategy::Polylines),
        BatchStyle::UniformSolidSegments => Ok(DrawStrategy::Segments),
        BatchStyle::Invalid { offender } => {
            let facts = &report.groups[offender];
            Err(PathError::InconsistentStyling {
                group: facts.group.clone(),
                varying: varying_aesthetics(table, facts.rows.clone()),
            })
        }
    }
}
