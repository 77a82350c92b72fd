//! JSONL replay scripts.
//!
//! One operation per line, tagged by `op`:
//!
//! ```text
//! {"op": "focus", "input_type": "textarea"}
//! {"op": "update_state", "text": "hello", "selection_start": 5, "selection_end": 5, "require_ack": true}
//! {"op": "set_composing_text", "text": "ka", "new_cursor_position": 1}
//! {"op": "key", "action": "up", "key_code": 67}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use imesync_core::editor::{ImeAction, TextInputType};
use imesync_session::{ContextMenuAction, FullTextSync, KeyEvent};

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScriptOp {
    /// Focus a new field, resetting the adapter.
    Focus {
        input_type: TextInputType,
        #[serde(default)]
        initial_selection: Option<(usize, usize)>,
    },
    UpdateState(FullTextSync),
    SetComposingText {
        text: String,
        #[serde(default = "default_cursor")]
        new_cursor_position: i32,
    },
    CommitText {
        text: String,
        #[serde(default = "default_cursor")]
        new_cursor_position: i32,
    },
    SetComposingRegion {
        start: i32,
        end: i32,
    },
    FinishComposingText,
    DeleteSurroundingText {
        before: i32,
        after: i32,
    },
    SetSelection {
        start: i32,
        end: i32,
    },
    BeginBatchEdit,
    EndBatchEdit,
    Key(KeyEvent),
    EditorAction {
        action: ImeAction,
    },
    ContextMenu {
        action: ContextMenuAction,
    },
    RestartInput,
}

fn default_cursor() -> i32 {
    1
}

pub fn parse_script(input: &str) -> Result<Vec<ScriptOp>, ScriptError> {
    let mut ops = Vec::new();
    for (i, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let op = serde_json::from_str(line).map_err(|source| ScriptError::Parse {
            line: i + 1,
            source,
        })?;
        ops.push(op);
    }
    Ok(ops)
}

pub fn read_script(path: &Path) -> Result<Vec<ScriptOp>, ScriptError> {
    let content = fs::read_to_string(path)?;
    parse_script(&content)
}
