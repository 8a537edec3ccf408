use super::bezier::CubicBezier;
use crate::types::Point;
use log::trace;
use nalgebra::Matrix2;

const DET_EPS: f64 = 1e-6;

/// Fit a cubic Bézier to `points` with the ends pinned to the first and last
/// point.
///
/// The curve parameter of each point is its normalized cumulative chord
/// length. It is recomputed on the fly in a second pass, so fitting does not
/// allocate. Fewer than two points yield the all-zero curve.
pub fn fit(points: &[Point]) -> CubicBezier {
    if points.len() < 2 {
        return CubicBezier::default();
    }
    let first = to_f64(points[0]);
    let last = to_f64(points[points.len() - 1]);
    let fallback = || CubicBezier::chord(to_f32(first), to_f32(last));

    let total: f64 = points
        .windows(2)
        .map(|w| distance(to_f64(w[0]), to_f64(w[1])))
        .sum();
    if total <= 0.0 {
        return fallback();
    }

    let (mut a11, mut a12, mut a22) = (0.0f64, 0.0f64, 0.0f64);
    let mut rhs = Matrix2::<f64>::zeros();
    let mut run = 0.0f64;
    let mut prev = first;
    for &p in points {
        let q = to_f64(p);
        run += distance(prev, q);
        prev = q;
        let t = run / total;
        let u = 1.0 - t;
        let (b0, b1, b2, b3) = (u * u * u, 3.0 * t * u * u, 3.0 * t * t * u, t * t * t);
        a11 += b1 * b1;
        a12 += b1 * b2;
        a22 += b2 * b2;
        for k in 0..2 {
            let r = q[k] - b0 * first[k] - b3 * last[k];
            rhs[(0, k)] += b1 * r;
            rhs[(1, k)] += b2 * r;
        }
    }

    let normal = Matrix2::new(a11, a12, a12, a22);
    if normal.determinant().abs() < DET_EPS {
        trace!("fit: singular normal equations for {} points", points.len());
        return fallback();
    }
    let Some(inv) = normal.try_inverse() else {
        return fallback();
    };
    let sol = inv * rhs;
    CubicBezier {
        p0: to_f32(first),
        p1: [sol[(0, 0)] as f32, sol[(0, 1)] as f32],
        p2: [sol[(1, 0)] as f32, sol[(1, 1)] as f32],
        p3: to_f32(last),
    }
}

#[inline]
fn to_f64(p: Point) -> [f64; 2] {
    [p.x as f64, p.y as f64]
}

#[inline]
fn to_f32(p: [f64; 2]) -> [f32; 2] {
    [p[0] as f32, p[1] as f32]
}

#[inline]
fn distance(a: [f64; 2], b: [f64; 2]) -> f64 {
    ((b[0] - a[0]).powi(2) + (b[1] - a[1]).powi(2)).sqrt()
}
