/// Black frame with a white vertical lane covering columns `x0..=x1` on rows
/// `top..height`.
pub fn lane_u8(width: usize, height: usize, x0: usize, x1: usize, top: usize) -> Vec<u8> {
    lane_with(width, height, top, |_| (x0, x1))
}

/// Black frame with a white lane whose column span on row `y` is `span(y)`
/// (inclusive), drawn on rows `top..height`.
pub fn lane_with<F>(width: usize, height: usize, top: usize, span: F) -> Vec<u8>
where
    F: Fn(usize) -> (usize, usize),
{
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = vec![0u8; width * height];
    for y in top..height {
        let (x0, x1) = span(y);
        assert!(x0 <= x1 && x1 < width, "lane span out of frame on row {y}");
        img[y * width + x0..=y * width + x1].fill(255);
    }
    img
}
