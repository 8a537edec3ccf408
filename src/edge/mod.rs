//! Post-processing of a raw boundary trace.
//!
//! - [`RowMap`] collapses the ordered trace into one column per image row,
//!   keeping the first visit of each row.
//! - [`extract`] walks the row map bottom-up with a searching/tracking state
//!   machine and keeps the first run of consecutive rows that is long enough
//!   and free of large horizontal jumps.
//! - [`find_turn_center`] reports the filtered point that bulges furthest
//!   from the straight chord through the edge's end points.

mod extractor;
mod row_map;
mod turn;

pub use extractor::{extract, ExtractOptions, FilteredEdge};
pub use row_map::{to_row_map, RowMap, ROW_UNSET};
pub use turn::{find_turn_center, TurnCenter};
