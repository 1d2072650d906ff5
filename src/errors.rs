//! Error types with diagnostics using miette
//!
//! Every fatal condition is detected before a primitive is emitted, so a
//! caller either gets a complete `DrawResult` or one of these.

use miette::Diagnostic;
use thiserror::Error;

use crate::aes::{Aesthetic, GroupKey};
use crate::types::NumericError;

fn join(aes: &[Aesthetic]) -> String {
    aes.iter().map(Aesthetic::name).collect::<Vec<_>>().join(", ")
}

// ============================================================================
// Pipeline Errors
// ============================================================================

/// Errors that abort a render call
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum PathError {
    #[error("path data has no group column")]
    #[diagnostic(
        code(interpath::interpolate::missing_group),
        help("give every row a group so points can be joined into paths")
    )]
    MissingGroupColumn,

    #[error("group {group} has no observed `{column}` value to interpolate from")]
    #[diagnostic(
        code(interpath::interpolate::unresolvable_group),
        help("mark at least one point of the group as observed with a non-missing `{column}`")
    )]
    UnresolvableGroup { group: GroupKey, column: Aesthetic },

    #[error(
        "group {group} varies in {} along the path while its linetype isn't solid",
        join(.varying)
    )]
    #[diagnostic(
        code(interpath::render::inconsistent_styling),
        help("use a solid linetype, or keep colour, linewidth and alpha constant within each group")
    )]
    InconsistentStyling {
        group: GroupKey,
        varying: Vec<Aesthetic>,
    },

    #[error("row {row} has {found} style values but {expected} columns are declared")]
    #[diagnostic(code(interpath::table::column_length))]
    ColumnLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid stroke parameter `{param}`")]
    #[diagnostic(code(interpath::render::invalid_stroke))]
    InvalidStroke {
        param: &'static str,
        #[source]
        source: NumericError,
    },
}

// ============================================================================
// Notices
// ============================================================================

/// Every group holds a single point, so nothing joins up.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
#[error("each group consists of only one observation ({groups} groups)")]
#[diagnostic(
    code(interpath::render::singleton_groups),
    severity(Advice),
    help("points are joined per group; check how rows are assigned to groups")
)]
pub struct GroupingAdvisory {
    pub groups: usize,
}
