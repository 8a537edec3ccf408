/// Read-only 8-bit frame view in row-major layout.
#[derive(Clone, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }
}

/// Mutable 8-bit frame view. The pipeline borrows the camera buffer through
/// this type for the duration of one frame and writes the zero border into it.
#[derive(Debug)]
pub struct ImageU8Mut<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize,
    pub data: &'a mut [u8],
}

impl<'a> ImageU8Mut<'a> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: u8) {
        self.data[y * self.stride + x] = v;
    }

    /// Reborrow as a read-only view.
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.w,
            h: self.h,
            stride: self.stride,
            data: &self.data[..],
        }
    }
}

impl<'a> crate::image::traits::ImageView for ImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}

impl<'a> crate::image::traits::ImageView for ImageU8Mut<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}

impl<'a> crate::image::traits::ImageViewMut for ImageU8Mut<'a> {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{ImageView, ImageViewMut};

    #[test]
    fn strided_rows_skip_padding_bytes() {
        let mut data = vec![0u8; 4 * 3];
        let mut img = ImageU8Mut {
            w: 3,
            h: 3,
            stride: 4,
            data: &mut data,
        };
        for (y, row) in img.rows_mut().enumerate() {
            row.fill(y as u8 + 1);
        }
        assert_eq!(data, vec![1, 1, 1, 0, 2, 2, 2, 0, 3, 3, 3, 0]);

        let view = ImageU8 {
            w: 3,
            h: 3,
            stride: 4,
            data: &data,
        };
        assert!(view.as_slice().is_none());
        assert_eq!(view.row(2), &[3, 3, 3]);
        assert_eq!(view.pixel(1, 1), 2);
    }
}
