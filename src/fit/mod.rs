//! Cubic Bézier fitting of filtered track edges.
//!
//! The end control points are pinned to the first and last data points; the
//! inner two are solved by linear least squares over a chord-length
//! parameterization. Degenerate inputs fall back to placing the inner points
//! on the chord at 1/3 and 2/3.

mod bezier;
mod least_squares;

pub use bezier::CubicBezier;
pub use least_squares::fit;
