//! Connect two PCB tracks by extending them to where their lines meet.

pub mod board;
pub mod connect;
pub mod geometry;
pub mod track;

pub use board::{Board, BoardError};
pub use connect::{connect, connect_pair, ConnectError, ConnectResult, ErrorKind};
pub use geometry::{Line, Outcome, Point};
pub use track::{extend, LayerId, Track, TrackId};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
