use serde::{Deserialize, Serialize};

/// Cubic Bézier curve in pixel coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CubicBezier {
    pub p0: [f32; 2],
    pub p1: [f32; 2],
    pub p2: [f32; 2],
    pub p3: [f32; 2],
}

impl CubicBezier {
    /// Curve with both inner control points on the straight segment `p0 -> p3`.
    pub fn chord(p0: [f32; 2], p3: [f32; 2]) -> Self {
        let lerp = |t: f32| [p0[0] + (p3[0] - p0[0]) * t, p0[1] + (p3[1] - p0[1]) * t];
        Self {
            p0,
            p1: lerp(1.0 / 3.0),
            p2: lerp(2.0 / 3.0),
            p3,
        }
    }

    /// Evaluate the curve at `t` in `[0, 1]`.
    pub fn eval(&self, t: f32) -> [f32; 2] {
        let [b0, b1, b2, b3] = basis(t);
        let mut out = [0.0f32; 2];
        for (k, v) in out.iter_mut().enumerate() {
            *v = b0 * self.p0[k] + b1 * self.p1[k] + b2 * self.p2[k] + b3 * self.p3[k];
        }
        out
    }

    /// `n` evenly spaced samples including both ends.
    pub fn sample(&self, n: usize) -> impl Iterator<Item = [f32; 2]> + '_ {
        let last = n.saturating_sub(1).max(1) as f32;
        (0..n).map(move |i| self.eval(i as f32 / last))
    }
}

/// Bernstein basis of degree three.
#[inline]
pub(crate) fn basis(t: f32) -> [f32; 4] {
    let u = 1.0 - t;
    [u * u * u, 3.0 * t * u * u, 3.0 * t * t * u, t * t * t]
}
