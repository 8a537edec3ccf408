//! One-pixel zero border around a frame.
//!
//! Every later stage probes at most one pixel diagonally or four pixels along a
//! row from an interior position. With the outer frame forced to black those
//! probes stay in bounds, and a traced boundary can never settle on column 0,
//! which the row map reuses as its "unset" marker.
use crate::image::ImageViewMut;

/// Zero the first and last row and the first and last column of `image`.
pub fn pad<I>(image: &mut I)
where
    I: ImageViewMut<Pixel = u8>,
{
    let h = image.height();
    let w = image.width();
    if w == 0 || h == 0 {
        return;
    }
    for (y, row) in image.rows_mut().enumerate() {
        if y == 0 || y == h - 1 {
            row.fill(0);
        } else {
            row[0] = 0;
            row[w - 1] = 0;
        }
    }
}
