//! Recorded input scripts.
//!
//! A script is a JSON array of pointer samples and toolbar actions, replayed
//! in order against a [`DrawingSession`]. It stands in for a live host so
//! drawings can be produced headlessly:
//!
//! ```json
//! [
//!   {"event": "action", "action": "set-color-red"},
//!   {"event": "down", "pointer": 0, "x": 10, "y": 10},
//!   {"event": "move", "pointer": 0, "x": 40, "y": 30},
//!   {"event": "up", "pointer": 0, "x": 40, "y": 30}
//! ]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::export::{ExportError, ExportSnapshot};
use crate::input::{Action, DrawingSession, PointerEvent};

/// Errors raised while loading a script file.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid script {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
enum ActionStep {
    Action { action: Action },
}

/// One entry of a script.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScriptStep {
    Pointer(PointerEvent),
    #[serde(with = "action_step")]
    Action(Action),
}

mod action_step {
    use super::{Action, ActionStep};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Action, D::Error> {
        let ActionStep::Action { action } = ActionStep::deserialize(deserializer)?;
        Ok(action)
    }
}

/// Parses a script from JSON text.
pub fn parse(json: &str) -> Result<Vec<ScriptStep>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Reads and parses a script file.
pub fn load(path: &Path) -> Result<Vec<ScriptStep>, ScriptError> {
    let json = fs::read_to_string(path).map_err(|source| ScriptError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let steps = parse(&json).map_err(|source| ScriptError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("Loaded {} script step(s) from {}", steps.len(), path.display());
    Ok(steps)
}

/// Feeds every step to the session in order.
///
/// Each `save` step captures the drawing at that point, so later steps do not
/// leak into it. Captures are returned in script order; a save with nothing
/// drawn yields [`ExportError::NothingToSave`].
pub fn replay(
    session: &mut DrawingSession,
    steps: &[ScriptStep],
) -> Vec<Result<ExportSnapshot, ExportError>> {
    let mut saves = Vec::new();
    for step in steps {
        match *step {
            ScriptStep::Pointer(event) => session.handle_pointer(event),
            ScriptStep::Action(action) => session.handle_action(action),
        }
        if session.take_save_request() {
            saves.push(session.prepare_export());
        }
    }
    saves
}
