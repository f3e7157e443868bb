//! Joining two tracks at the point where their lines meet.
//!
//! This is the single entry point the host calls with the user's selection.
//! Everything that can go wrong is reported through [`ConnectError`] before
//! either track is modified.

use crate::geometry::{classify, colinear_join_point, intersect, Outcome, Point};
use crate::track::{extend, LayerId, Track};
use thiserror::Error;
use tracing::debug;

#[cfg(test)]
mod tests_connect;

/// Broad category of a [`ConnectError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The selection itself is unusable; the user must re-select.
    Precondition,
    /// The selection is valid but the lines never meet.
    NoIntersection,
}

/// Errors that can occur while connecting tracks.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConnectError {
    #[error("Wrong amount of tracks, must select 2 (got {0}).")]
    WrongCount(usize),

    #[error("Tracks are on different layers ({a} and {b}).")]
    LayerMismatch { a: LayerId, b: LayerId },

    #[error("Lines are parallel and won't connect.")]
    Parallel,

    #[error("Lines meet too far away to connect.")]
    OutOfRange,
}

impl ConnectError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConnectError::WrongCount(_) | ConnectError::LayerMismatch { .. } => {
                ErrorKind::Precondition
            }
            ConnectError::Parallel | ConnectError::OutOfRange => ErrorKind::NoIntersection,
        }
    }

    /// Stable code for hosts that map errors to their own messages.
    pub fn code(&self) -> &'static str {
        match self {
            ConnectError::WrongCount(_) => "WRONG_TRACK_COUNT",
            ConnectError::LayerMismatch { .. } => "LAYER_MISMATCH",
            ConnectError::Parallel => "PARALLEL_TRACKS",
            ConnectError::OutOfRange => "INTERSECTION_OUT_OF_RANGE",
        }
    }
}

/// Result type for connect operations.
pub type ConnectResult<T> = Result<T, ConnectError>;

/// Connect exactly two selected tracks.
///
/// Returns the point both tracks now share.
pub fn connect(tracks: &mut [&mut Track]) -> ConnectResult<Point> {
    match tracks {
        [a, b] => connect_pair(a, b),
        _ => Err(ConnectError::WrongCount(tracks.len())),
    }
}

/// Extend `a` and `b` so that they meet.
///
/// Both tracks are moved onto the same computed point, so they end up exactly
/// coincident at the joint. On error neither track is touched.
pub fn connect_pair(a: &mut Track, b: &mut Track) -> ConnectResult<Point> {
    if a.layer != b.layer {
        return Err(ConnectError::LayerMismatch { a: a.layer, b: b.layer });
    }

    let line_a = classify(a);
    let line_b = classify(b);

    let point = match intersect(&line_a, &line_b) {
        Outcome::Point(point) => point,
        Outcome::Colinear => {
            debug!("{} and {} share the line {}, merging", a.id, b.id, line_a);
            colinear_join_point(a, b)
        }
        Outcome::Parallel => {
            debug!("{} ({}) is parallel to {} ({})", a.id, line_a, b.id, line_b);
            return Err(ConnectError::Parallel);
        }
        Outcome::OutOfRange => {
            debug!("{} ({}) meets {} ({}) outside board space", a.id, line_a, b.id, line_b);
            return Err(ConnectError::OutOfRange);
        }
    };

    extend(a, point);
    extend(b, point);
    debug!("Connected {} and {} at ({}, {})", a.id, b.id, point.x, point.y);

    Ok(point)
}
