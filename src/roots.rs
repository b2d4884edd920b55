use crate::errors::{EosError, EosResult};
use itertools::Itertools;
use num_complex::Complex64;
use std::f64::consts::PI;

/// Roots with an imaginary part below this threshold are considered real.
pub(crate) const IMAGINARY_TOLERANCE: f64 = 1e-9;

/// Solve $ax^3+bx^2+cx+d=0$ analytically.
///
/// Returns all three roots, which are complex in general. If the
/// discriminant of the depressed cubic is non-negative, the first root
/// is real and the other two form a complex conjugate pair; otherwise
/// all three roots are real and obtained from the trigonometric form.
pub fn solve_cubic(a: f64, b: f64, c: f64, d: f64) -> EosResult<[Complex64; 3]> {
    if a == 0.0 {
        return Err(EosError::NotCubic);
    }

    // normalize
    let b = b / a;
    let c = c / a;
    let d = d / a;

    // depressed cubic: y^3 + p y + q = 0
    let p = c - b * b / 3.0;
    let q = 2.0 * b.powi(3) / 27.0 - b * c / 3.0 + d;
    let delta = q * q / 4.0 + p.powi(3) / 27.0;
    let shift = b / 3.0;

    // p = 0 implies delta >= 0, the explicit check keeps the acos argument finite
    let roots = if delta >= 0.0 || p == 0.0 {
        let sqrt_delta = delta.max(0.0).sqrt();
        // u and v satisfy uv = -p/3, u takes the sign that avoids cancellation
        let u = (-0.5 * q - q.signum() * sqrt_delta).cbrt();
        let v = if u == 0.0 { 0.0 } else { -p / (3.0 * u) };
        let omega = Complex64::new(-0.5, 0.75f64.sqrt());
        let omega2 = omega.conj();
        [
            Complex64::from(u + v),
            omega * u + omega2 * v,
            omega2 * u + omega * v,
        ]
    } else {
        let r = (-p.powi(3) / 27.0).sqrt();
        let phi = (-q / (2.0 * r)).clamp(-1.0, 1.0).acos();
        let t = 2.0 * r.cbrt();
        [0.0, 2.0, 4.0].map(|k| Complex64::from(t * ((phi + k * PI) / 3.0).cos()))
    };
    Ok(roots.map(|y| y - shift))
}

/// Real parts of the (numerically) real roots, sorted in ascending order.
///
/// A double root can come out of [solve_cubic] as a conjugate pair with an
/// imaginary part above [IMAGINARY_TOLERANCE], in which case it is dropped.
pub fn real_roots(roots: &[Complex64; 3]) -> Vec<f64> {
    roots
        .iter()
        .filter(|z| z.im.abs() < IMAGINARY_TOLERANCE)
        .map(|z| z.re)
        .sorted_by(f64::total_cmp)
        .collect()
}
