use nalgebra as na;

/// A location in the board's integer coordinate space (nanometres).
pub type Point = na::Point2<i64>;

/// Floating-point location used while solving, before truncation to [`Point`].
pub type PointF = na::Point2<f64>;

pub mod line;
pub use line::*;

pub mod intersection;
pub use intersection::*;

/// Squared distance between two board points.
///
/// Differences are taken in `i128` and squared as `u128`, so a single axis
/// never overflows. The sum saturates at `u128::MAX` when both axes span
/// nearly the whole `i64` range.
pub fn dist_sq(p1: &Point, p2: &Point) -> u128 {
    let dx = (p2.x as i128 - p1.x as i128).unsigned_abs();
    let dy = (p2.y as i128 - p1.y as i128).unsigned_abs();
    (dx * dx).saturating_add(dy * dy)
}

/// Truncate toward zero back into board space.
///
/// Returns `None` when either coordinate is not finite or lies outside the
/// `i64` range, instead of saturating onto the board edge.
pub fn truncate(p: &PointF) -> Option<Point> {
    // i64::MIN and i64::MAX + 1 are both exact in f64
    const LOW: f64 = i64::MIN as f64;
    const HIGH: f64 = -(i64::MIN as f64);

    let in_range = |v: f64| v.is_finite() && v >= LOW && v < HIGH;
    if in_range(p.x) && in_range(p.y) {
        Some(Point::new(p.x as i64, p.y as i64))
    } else {
        None
    }
}
