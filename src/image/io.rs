//! I/O helpers for grayscale frames and JSON.
//!
//! - `load_grayscale_image`: read a PNG/JPEG/etc. into an owned 8-bit gray buffer.
//! - `save_overlay_png`: write a gray frame as RGB with colored marks on top.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageU8, ImageU8Mut, ImageView};
use image::{Rgb, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned 8-bit grayscale buffer with stride and borrowed view conversion.
#[derive(Clone, Debug)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    stride: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Construct an owned grayscale buffer given raw bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        let stride = width;
        Self {
            width,
            height,
            stride,
            data,
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.width,
            h: self.height,
            stride: self.stride,
            data: &self.data,
        }
    }

    /// Borrow as a mutable view, e.g. to hand the frame to the tracker.
    pub fn as_view_mut(&mut self) -> ImageU8Mut<'_> {
        ImageU8Mut {
            w: self.width,
            h: self.height,
            stride: self.stride,
            data: &mut self.data,
        }
    }
}

/// Load an image from disk and convert to 8-bit grayscale.
pub fn load_grayscale_image(path: &Path) -> Result<GrayImageU8, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.into_raw();
    Ok(GrayImageU8::new(width, height, data))
}

/// Single colored pixel drawn by [`save_overlay_png`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayMark {
    pub x: f32,
    pub y: f32,
    pub color: [u8; 3],
}

/// Render `base` as RGB, paint `marks` (rounded, out-of-frame marks skipped)
/// and save to `path`.
pub fn save_overlay_png<I>(base: &I, marks: &[OverlayMark], path: &Path) -> Result<(), String>
where
    I: ImageView<Pixel = u8>,
{
    let rgb = overlay_image(base, marks);
    ensure_parent_dir(path)?;
    rgb.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

fn overlay_image<I>(base: &I, marks: &[OverlayMark]) -> RgbImage
where
    I: ImageView<Pixel = u8>,
{
    let (w, h) = (base.width(), base.height());
    let mut rgb = RgbImage::new(w as u32, h as u32);
    for (y, row) in base.rows().enumerate() {
        for (x, &v) in row.iter().take(w).enumerate() {
            rgb.put_pixel(x as u32, y as u32, Rgb([v, v, v]));
        }
    }
    for m in marks {
        let (x, y) = (m.x.round(), m.y.round());
        if x >= 0.0 && y >= 0.0 && (x as usize) < w && (y as usize) < h {
            rgb.put_pixel(x as u32, y as u32, Rgb(m.color));
        }
    }
    rgb
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

pub fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_paints_marks_in_frame_only() {
        let gray = GrayImageU8::new(4, 3, vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120]);
        let marks = [
            OverlayMark {
                x: 1.2,
                y: 0.6,
                color: [255, 0, 0],
            },
            OverlayMark {
                x: 9.0,
                y: 1.0,
                color: [0, 255, 0],
            },
        ];
        let rgb = overlay_image(&gray.as_view(), &marks);
        assert_eq!(rgb.get_pixel(1, 1), &Rgb([255, 0, 0]));
        assert_eq!(rgb.get_pixel(0, 0), &Rgb([10, 10, 10]));
        assert_eq!(rgb.get_pixel(3, 2), &Rgb([120, 120, 120]));
    }

    #[test]
    fn json_and_png_land_in_nested_dirs() {
        let dir = std::env::temp_dir().join(format!("track-vision-io-{}", std::process::id()));
        let json = dir.join("a/b/report.json");
        write_json_file(&json, &serde_json::json!({ "ok": true })).expect("json");
        assert!(fs::read_to_string(&json).expect("read").contains("\"ok\": true"));

        let png = dir.join("c/overlay.png");
        let gray = GrayImageU8::new(8, 8, vec![200; 64]);
        save_overlay_png(&gray.as_view(), &[], &png).expect("png");
        let back = load_grayscale_image(&png).expect("load");
        assert_eq!((back.width(), back.height()), (8, 8));
        assert_eq!(back.as_view().get(3, 3), 200);
        let _ = fs::remove_dir_all(&dir);
    }
}
