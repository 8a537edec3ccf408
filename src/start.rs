//! Bottom-up search for the first left/right boundary pair.
//!
//! Rows are scanned from `height - 2` up to `1`. A row contributes a left
//! start on the first black,black,white,white window and a right start on the
//! first white,white,black,black window; the four-pixel pattern rejects single
//! pixel speckle. A lane touching the frame border is handled by the
//! edge-hugging check on columns 1,2 and `width - 2`,`width - 3`.
//!
//! The recorded column is the black pixel adjacent to the white run, which is
//! where the contour tracer needs to stand to see a black→white transition
//! among its neighbours.
use crate::image::ImageView;
use crate::types::Point;
use serde::{Deserialize, Serialize};

/// Thresholds for the start-point scan.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct StartOptions {
    /// Pixels at or above this value count as white (track).
    pub threshold: u8,
    /// A pair is accepted only if `right.x - left.x` exceeds this (pixels).
    pub min_track_width: u8,
}

impl Default for StartOptions {
    fn default() -> Self {
        Self {
            threshold: 128,
            min_track_width: 10,
        }
    }
}

/// Find the left and right start points of the track, or `None` if no row of
/// the padded frame yields a plausible pair.
pub fn find_start<I>(image: &I, options: &StartOptions) -> Option<(Point, Point)>
where
    I: ImageView<Pixel = u8>,
{
    let w = image.width();
    let h = image.height();
    if w < 6 || h < 3 {
        return None;
    }
    let white = |v: u8| v >= options.threshold;
    let min_width = options.min_track_width as i32;

    for y in (1..h - 1).rev() {
        let row = image.row(y);
        let mut left: Option<u8> = None;
        let mut right: Option<u8> = None;

        if white(row[1]) && white(row[2]) {
            left = Some(1);
        }
        if white(row[w - 2]) && white(row[w - 3]) {
            right = Some((w - 2) as u8);
        }

        for x in 1..w - 3 {
            let window = [
                white(row[x]),
                white(row[x + 1]),
                white(row[x + 2]),
                white(row[x + 3]),
            ];
            if left.is_none() && window == [false, false, true, true] {
                left = Some((x + 1) as u8);
            }
            if right.is_none() && window == [true, true, false, false] {
                right = Some((x + 2) as u8);
            }
            if let (Some(lx), Some(rx)) = (left, right) {
                if rx as i32 - lx as i32 > min_width {
                    let row_y = y as u8;
                    return Some((Point::new(lx, row_y), Point::new(rx, row_y)));
                }
                // Too narrow: most likely a speck between the real edges.
                right = None;
            }
        }
    }
    None
}
