use crate::geometry::{dist_sq, Point};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Default copper width for new tracks (0.25 mm).
pub const DEFAULT_TRACK_WIDTH: i64 = 250_000;

/// Stable identifier of a track on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TrackId(pub Uuid);

impl TrackId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Deterministic id derived from a seed, for fixtures and reproducible boards.
    pub fn new_deterministic(seed: &str) -> Self {
        Self(Uuid::new_v5(&Uuid::NAMESPACE_OID, seed.as_bytes()))
    }
}

impl Default for TrackId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque copper layer number as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LayerId(pub u32);

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layer {}", self.0)
    }
}

fn default_width() -> i64 {
    DEFAULT_TRACK_WIDTH
}

/// A straight copper track owned by the board.
///
/// Connecting only ever rewrites `start` and `end`; `layer` is read for the
/// same-layer check and the remaining fields belong to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub id: TrackId,
    pub start: Point,
    pub end: Point,
    pub layer: LayerId,
    #[serde(default = "default_width")]
    pub width: i64,
    #[serde(default)]
    pub selected: bool,
}

impl Track {
    pub fn new(start: Point, end: Point, layer: LayerId) -> Self {
        Self {
            id: TrackId::new(),
            start,
            end,
            layer,
            width: DEFAULT_TRACK_WIDTH,
            selected: false,
        }
    }

    pub fn with_width(mut self, width: i64) -> Self {
        self.width = width;
        self
    }

    pub fn is_zero_length(&self) -> bool {
        self.start == self.end
    }
}

/// Move whichever endpoint of `track` is nearer to `point` onto it.
///
/// The far endpoint stays fixed, so the track grows or shrinks along its own
/// line instead of being translated. Ties move `start`.
pub fn extend(track: &mut Track, point: Point) {
    let dist_start = dist_sq(&point, &track.start);
    let dist_end = dist_sq(&point, &track.end);

    if dist_start <= dist_end {
        track.start = point;
    } else {
        track.end = point;
    }
}
