//! Text command protocol spoken over the websocket.
//!
//! Every command is handled synchronously against the board and produces the
//! frames to send back, so the socket loop never holds the board lock across
//! an await.

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};
use trace_connect_core::geometry::Point;
use trace_connect_core::{Board, LayerId, Track, TrackId};

/// Metadata the host shows for the connect action.
#[derive(Debug, Clone, Serialize)]
pub struct ActionInfo {
    pub name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
}

pub const CONNECT_ACTION: ActionInfo = ActionInfo {
    name: "Connect traces",
    category: "Modify PCB",
    description: "Connect two traces by extending them.",
};

/// Format an error as a JSON message for the frontend
pub fn format_error(code: &str, message: &str, severity: &str) -> String {
    format!("ERROR_UPDATE:{}", json!({
        "code": code,
        "message": message,
        "severity": severity
    }))
}

pub fn board_update(board: &Board) -> String {
    let json = serde_json::to_string(board).unwrap_or("{}".to_string());
    format!("BOARD_UPDATE:{}", json)
}

fn selection_update(board: &Board) -> String {
    let json = serde_json::to_string(&board.selected_ids()).unwrap_or("[]".into());
    format!("SELECTION_UPDATE:{}", json)
}

#[derive(Deserialize)]
struct AddTrackCmd {
    start: Point,
    end: Point,
    layer: LayerId,
    width: Option<i64>,
}

#[derive(Deserialize)]
struct SelectCmd {
    id: TrackId,
    modifier: Option<String>, // "add", "remove", "replace" (default)
}

/// Apply one command to the board and return the reply frames.
pub fn handle_command(board: &mut Board, text: &str) -> Vec<String> {
    if text == "BOARD" {
        vec![board_update(board)]
    } else if text == "ACTION_INFO" {
        let json = serde_json::to_string(&CONNECT_ACTION).unwrap_or("{}".into());
        vec![format!("ACTION_INFO:{}", json)]
    } else if let Some(json_str) = text.strip_prefix("ADD_TRACK:") {
        let cmd = match serde_json::from_str::<AddTrackCmd>(json_str) {
            Ok(cmd) => cmd,
            Err(e) => {
                warn!("Failed to parse ADD_TRACK command: {}", e);
                let message = format!("Invalid track: {}", e);
                return vec![format_error("BAD_COMMAND", &message, "error")];
            }
        };

        let mut track = Track::new(cmd.start, cmd.end, cmd.layer);
        if let Some(width) = cmd.width {
            track = track.with_width(width);
        }
        match board.add_track(track) {
            Ok(id) => {
                info!("Added track {} on {}", id, cmd.layer);
                vec![board_update(board)]
            }
            Err(e) => {
                warn!("Rejected track: {}", e);
                vec![format_error("BAD_COMMAND", &e.to_string(), "error")]
            }
        }
    } else if let Some(json_str) = text.strip_prefix("SELECT:") {
        let cmd = match serde_json::from_str::<SelectCmd>(json_str) {
            Ok(cmd) => cmd,
            Err(e) => {
                warn!("Failed to parse Selection command: {}", json_str);
                let message = format!("Invalid selection: {}", e);
                return vec![format_error("BAD_COMMAND", &message, "error")];
            }
        };

        let modifier = cmd.modifier.as_deref().unwrap_or("replace");
        let result = match modifier {
            "add" => board.select(cmd.id, true),
            "remove" => board.deselect(cmd.id),
            "replace" => board.select(cmd.id, false),
            other => {
                warn!("Unknown selection modifier: {}", other);
                let message = format!("Unknown selection modifier: {}", other);
                return vec![format_error("BAD_COMMAND", &message, "error")];
            }
        };
        match result {
            Ok(()) => {
                info!("Selected {} (mod: {})", cmd.id, modifier);
                vec![selection_update(board)]
            }
            Err(e) => {
                warn!("Selection failed: {}", e);
                vec![format_error("TRACK_NOT_FOUND", &e.to_string(), "warning")]
            }
        }
    } else if text == "CLEAR_SELECTION" {
        board.clear_selection();
        info!("Cleared all selections");
        vec!["SELECTION_UPDATE:[]".to_string()]
    } else if let Some(id_str) = text.strip_prefix("DELETE_TRACK:") {
        match uuid::Uuid::parse_str(id_str) {
            Ok(id) => {
                let id = TrackId::from_uuid(id);
                if board.remove_track(id).is_some() {
                    info!("Deleted track {}", id);
                    vec![board_update(board)]
                } else {
                    warn!("Track {} not found for deletion", id);
                    let message = format!("Track not found: {}", id);
                    vec![format_error("TRACK_NOT_FOUND", &message, "warning")]
                }
            }
            Err(_) => {
                warn!("Invalid UUID for DELETE_TRACK: {}", id_str);
                vec![format_error("BAD_COMMAND", &format!("Invalid track id: {}", id_str), "error")]
            }
        }
    } else if text == "CONNECT" {
        match board.connect_selected() {
            Ok(point) => {
                info!("Connected selected tracks at ({}, {})", point.x, point.y);
                vec![board_update(board)]
            }
            Err(e) => {
                warn!("Connect failed: {}", e);
                vec![format_error(e.code(), &e.to_string(), "error")]
            }
        }
    } else {
        vec![format!("Echo: {}", text)]
    }
}
