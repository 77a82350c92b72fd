use serde::Serialize;

use imesync_core::editor::EditorAttributes;
use imesync_session::{AdapterConfig, AdapterInputConnection, ImeState};

use crate::recorder::{Recorded, Recorder};
use crate::script::ScriptOp;

/// One replayed operation and everything it caused.
#[derive(Debug, Serialize)]
pub struct Step {
    pub op: ScriptOp,
    /// What the adapter returned to the input method, for operations that
    /// return anything.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returned: Option<bool>,
    pub calls: Vec<Recorded>,
    pub state: ImeState,
}

#[derive(Debug, Serialize)]
pub struct Transcript {
    pub steps: Vec<Step>,
    pub final_state: ImeState,
    pub batch_depth: usize,
}

/// Run `ops` against a fresh adapter focused on a field described by
/// `attrs`.
pub fn replay(ops: &[ScriptOp], attrs: EditorAttributes, config: AdapterConfig) -> Transcript {
    let recorder = Recorder::default();
    let mut conn =
        AdapterInputConnection::with_config(recorder.clone(), recorder.clone(), attrs, config);

    let mut steps = Vec::with_capacity(ops.len());
    for op in ops {
        let returned = apply(&mut conn, op);
        steps.push(Step {
            op: op.clone(),
            returned,
            calls: recorder.take(),
            state: conn.ime_state(),
        });
    }

    Transcript {
        steps,
        final_state: conn.ime_state(),
        batch_depth: conn.batch_depth(),
    }
}

fn apply(conn: &mut AdapterInputConnection<Recorder, Recorder>, op: &ScriptOp) -> Option<bool> {
    let returned = match op {
        ScriptOp::Focus {
            input_type,
            initial_selection,
        } => {
            let mut attrs = EditorAttributes::for_input_type(*input_type);
            if let Some((start, end)) = initial_selection {
                attrs = attrs.with_initial_selection(*start, *end);
            }
            conn.reset_field(attrs);
            return None;
        }
        ScriptOp::UpdateState(sync) => {
            conn.update_state(sync);
            return None;
        }
        ScriptOp::RestartInput => {
            conn.restart_input();
            return None;
        }
        ScriptOp::SetComposingText {
            text,
            new_cursor_position,
        } => conn.set_composing_text(text, *new_cursor_position),
        ScriptOp::CommitText {
            text,
            new_cursor_position,
        } => conn.commit_text(text, *new_cursor_position),
        ScriptOp::SetComposingRegion { start, end } => conn.set_composing_region(*start, *end),
        ScriptOp::FinishComposingText => conn.finish_composing_text(),
        ScriptOp::DeleteSurroundingText { before, after } => {
            conn.delete_surrounding_text(*before, *after)
        }
        ScriptOp::SetSelection { start, end } => conn.set_selection(*start, *end),
        ScriptOp::BeginBatchEdit => conn.begin_batch_edit(),
        ScriptOp::EndBatchEdit => conn.end_batch_edit(),
        ScriptOp::Key(event) => conn.send_key_event(event),
        ScriptOp::EditorAction { action } => conn.perform_editor_action(*action),
        ScriptOp::ContextMenu { action } => conn.perform_context_menu_action(*action),
    };
    Some(returned)
}
