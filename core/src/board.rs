//! In-memory board holding tracks and the user's current selection.

use crate::connect::{connect, ConnectResult};
use crate::geometry::Point;
use crate::track::{Track, TrackId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Track not found: {0}")]
    TrackNotFound(TrackId),

    #[error("Track start and end must differ")]
    ZeroLength,

    #[error("Duplicate track id: {0}")]
    DuplicateId(TrackId),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub tracks: Vec<Track>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a track. Zero-length tracks have no line and are rejected here.
    pub fn add_track(&mut self, track: Track) -> Result<TrackId, BoardError> {
        if track.is_zero_length() {
            return Err(BoardError::ZeroLength);
        }
        if self.track(track.id).is_some() {
            return Err(BoardError::DuplicateId(track.id));
        }
        let id = track.id;
        self.tracks.push(track);
        Ok(id)
    }

    pub fn remove_track(&mut self, id: TrackId) -> Option<Track> {
        let index = self.tracks.iter().position(|t| t.id == id)?;
        Some(self.tracks.remove(index))
    }

    pub fn track(&self, id: TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    fn track_mut(&mut self, id: TrackId) -> Result<&mut Track, BoardError> {
        self.tracks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(BoardError::TrackNotFound(id))
    }

    /// Select a track. Without `multi_select` the previous selection is replaced.
    pub fn select(&mut self, id: TrackId, multi_select: bool) -> Result<(), BoardError> {
        // Look up first so a bad id leaves the selection as it was
        self.track_mut(id)?;
        if !multi_select {
            self.clear_selection();
        }
        self.track_mut(id)?.selected = true;
        Ok(())
    }

    pub fn deselect(&mut self, id: TrackId) -> Result<(), BoardError> {
        self.track_mut(id)?.selected = false;
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        for track in &mut self.tracks {
            track.selected = false;
        }
    }

    /// Selected track ids in board order.
    pub fn selected_ids(&self) -> Vec<TrackId> {
        self.tracks.iter().filter(|t| t.selected).map(|t| t.id).collect()
    }

    /// Connect the currently selected tracks.
    pub fn connect_selected(&mut self) -> ConnectResult<Point> {
        let mut selected: Vec<&mut Track> = self.tracks.iter_mut().filter(|t| t.selected).collect();
        connect(&mut selected)
    }
}
