//! Intersection of two classified lines.

use super::{classify, dist_sq, truncate, Line, Point, PointF};
use crate::track::Track;

/// Result of intersecting two infinite lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The lines meet at exactly one point (truncated to board space).
    Point(Point),
    /// Both tracks lie on the same infinite line.
    Colinear,
    /// Distinct parallel lines; they never meet.
    Parallel,
    /// The lines meet, but outside the `i64` board space (nearly parallel).
    OutOfRange,
}

fn same_line_or_parallel(same: bool) -> Outcome {
    if same {
        Outcome::Colinear
    } else {
        Outcome::Parallel
    }
}

/// Intersect two lines.
///
/// Every orientation pair has its own closed-form rule. All arithmetic is done
/// in `f64` and the result is truncated once, here, so no rounding error is
/// carried between formulas. A point that cannot be represented on the board
/// is reported as [`Outcome::OutOfRange`].
pub fn intersect(a: &Line, b: &Line) -> Outcome {
    let (x, y) = match (*a, *b) {
        (Line::Horizontal { y: y_a }, Line::Horizontal { y: y_b }) => {
            return same_line_or_parallel(y_a == y_b);
        }
        (Line::Horizontal { y }, Line::Vertical { x }) => (x as f64, y as f64),
        (Line::Horizontal { y }, Line::Slanted { slope, intercept }) => {
            let y = y as f64;
            ((y - intercept) / slope, y)
        }

        (Line::Vertical { x }, Line::Horizontal { y }) => (x as f64, y as f64),
        (Line::Vertical { x: x_a }, Line::Vertical { x: x_b }) => {
            return same_line_or_parallel(x_a == x_b);
        }
        (Line::Vertical { x }, Line::Slanted { slope, intercept }) => {
            let x = x as f64;
            (x, slope * x + intercept)
        }

        (Line::Slanted { slope, intercept }, Line::Horizontal { y }) => {
            let y = y as f64;
            ((y - intercept) / slope, y)
        }
        (Line::Slanted { slope, intercept }, Line::Vertical { x }) => {
            let x = x as f64;
            (x, slope * x + intercept)
        }
        (
            Line::Slanted { slope: m1, intercept: n1 },
            Line::Slanted { slope: m2, intercept: n2 },
        ) => {
            if m1 == m2 {
                return same_line_or_parallel(n1 == n2);
            }
            let x = (n2 - n1) / (m1 - m2);
            (x, m1 * x + n1)
        }
    };

    match truncate(&PointF::new(x, y)) {
        Some(point) => Outcome::Point(point),
        None => Outcome::OutOfRange,
    }
}

/// Classify both tracks and intersect their lines.
pub fn solve(track_a: &Track, track_b: &Track) -> Outcome {
    intersect(&classify(track_a), &classify(track_b))
}

/// Shared point for two tracks on the same line: whichever endpoint of
/// `track_a` is nearer to the start of `track_b` (ties pick `track_a.start`).
pub fn colinear_join_point(track_a: &Track, track_b: &Track) -> Point {
    let to_start = dist_sq(&track_a.start, &track_b.start);
    let to_end = dist_sq(&track_a.end, &track_b.start);
    if to_start <= to_end {
        track_a.start
    } else {
        track_a.end
    }
}
