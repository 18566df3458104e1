//! Piecewise-linear interpolation over tabulated points.
//!
//! The saturation table resolves every property through this one routine,
//! so its behavior at and beyond the table edges is pinned down here:
//! inside the tabulated range the bracketing segment is interpolated, and
//! outside it the nearest boundary segment's line is extended.

/// Evaluates a piecewise-linear curve defined by `points` at `x`.
///
/// `x_of` and `y_of` read the abscissa and ordinate from a point. The
/// abscissa sequence must be strictly increasing.
///
/// The curve passes through every node: evaluating at a tabulated abscissa
/// returns that point's ordinate (the final node goes through the last
/// segment at `t = 1`, so it matches to floating-point rounding). Outside
/// the tabulated range the value lies on the extension of the first or last
/// segment rather than being clamped to the edge.
///
/// # Panics
///
/// Panics if `points` has fewer than two entries.
pub fn piecewise_linear<P>(
    points: &[P],
    x_of: impl Fn(&P) -> f64,
    y_of: impl Fn(&P) -> f64,
    x: f64,
) -> f64 {
    assert!(
        points.len() >= 2,
        "piecewise_linear needs at least two points"
    );

    // Index of the first point past `x`, clamped so both extrapolation
    // directions reuse a boundary segment.
    let after = points.partition_point(|p| x_of(p) <= x);
    let hi = after.clamp(1, points.len() - 1);
    let lo = hi - 1;

    let (x0, y0) = (x_of(&points[lo]), y_of(&points[lo]));
    let (x1, y1) = (x_of(&points[hi]), y_of(&points[hi]));

    y0 + (y1 - y0) * ((x - x0) / (x1 - x0))
}
