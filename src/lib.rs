//! Draw connected paths whose styling is only partially specified.
//!
//! Each path (a *group*) mixes observed points, whose colour, width and so
//! on are known, with placeholder points whose values get tweened from the
//! observed ones. The reconstructed table is then checked for a drawable
//! styling and turned into either independent segments or one polyline
//! per group.
//!
//! ```
//! use interpath::{Aesthetic, PathRow, PathTable, StrokeParams, render_paths};
//!
//! let table = PathTable::from_rows(
//!     [Aesthetic::Colour],
//!     [
//!         PathRow::new(1, 0.0, 0.0).with("red"),
//!         PathRow::new(1, 1.0, 1.0).with("red"),
//!     ],
//! )?;
//! let rendered = render_paths(&table, &StrokeParams::default())?;
//! assert!(rendered.result.as_polylines().is_some());
//! # Ok::<(), interpath::PathError>(())
//! ```

pub mod aes;
pub mod errors;
pub mod interpolate;
pub mod log;
pub mod render;
pub mod table;
pub mod types;

pub use aes::{Aesthetic, AttrValue, GroupKey, Linetype};
pub use errors::{GroupingAdvisory, PathError};
pub use interpolate::{ColumnPolicy, interpolate};
pub use render::{
    Arrow, ArrowEnds, ArrowKind, BatchStyle, DrawBackend, DrawResult, DrawStrategy, LineEnd,
    LineJoin, PolylineBatch, Primitive, Rendered, Segment, SegmentBatch, StrokeParams,
    StrokeStyle, render_paths,
};
pub use table::{PathRow, PathTable, ResolvedTable, StyleColumn};
pub use types::{NumericError, Rgba};
