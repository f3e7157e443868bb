//! Orientation classification of the infinite line through a track.

use super::Point;
use crate::track::Track;
use std::fmt;

/// The infinite line through two distinct points, in its most compact form.
///
/// A `Line` only lives for the duration of one intersection computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Line {
    /// `y = const`
    Horizontal { y: i64 },
    /// `x = const`
    Vertical { x: i64 },
    /// `y = slope * x + intercept`
    Slanted { slope: f64, intercept: f64 },
}

impl Line {
    /// Classify the line through `start` and `end`.
    ///
    /// `start` and `end` must differ. The discriminator is exact: only a zero
    /// `delta_x` is vertical and only a slope of exactly `0.0` is horizontal,
    /// so nearly-aligned tracks stay `Slanted`. Deltas are taken in `i128`
    /// because a track may span more than `i64::MAX`.
    pub fn through(start: &Point, end: &Point) -> Self {
        let delta_x = end.x as i128 - start.x as i128;
        let delta_y = end.y as i128 - start.y as i128;

        if delta_x == 0 {
            return Line::Vertical { x: start.x };
        }

        let slope = delta_y as f64 / delta_x as f64;
        if slope == 0.0 {
            return Line::Horizontal { y: start.y };
        }

        Line::Slanted {
            slope,
            intercept: start.y as f64 - slope * start.x as f64,
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Horizontal { y } => write!(f, "y = {}", y),
            Line::Vertical { x } => write!(f, "x = {}", x),
            Line::Slanted { slope, intercept } => write!(f, "y = {}x + {}", slope, intercept),
        }
    }
}

/// Classify the infinite line a track lies on.
pub fn classify(track: &Track) -> Line {
    Line::through(&track.start, &track.end)
}
