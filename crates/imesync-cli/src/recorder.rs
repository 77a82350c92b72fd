//! Collaborators that log every call the adapter makes to them.
//!
//! Both sides share one log so the interleaving between input-method
//! notifications and text-owner acknowledgements is preserved.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::Serialize;

use imesync_session::{
    ContextMenuAction, InputMethodSession, KeyAction, KeyEvent, NativeTextOwner, SelectionUpdate,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum Recorded {
    // Input method
    UpdateSelection(SelectionUpdate),
    RestartInput,

    // Text owner
    CheckCompositionQueue {
        text: String,
        new_cursor_position: i32,
        is_commit: bool,
    },
    DeleteSurroundingText {
        before: usize,
        after: usize,
    },
    SetSelection {
        start: usize,
        end: usize,
    },
    SetComposingRegion {
        start: usize,
        end: usize,
    },
    FinishComposingText,
    ForwardKeyEvent(KeyEvent),
    ContextMenu {
        action: ContextMenuAction,
    },
}

impl fmt::Display for Recorded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UpdateSelection(u) => write!(
                f,
                "ime   update_selection sel=({}, {}) comp=({}, {})",
                u.selection_start, u.selection_end, u.composition_start, u.composition_end
            ),
            Self::RestartInput => write!(f, "ime   restart_input"),
            Self::CheckCompositionQueue {
                text,
                new_cursor_position,
                is_commit,
            } => write!(
                f,
                "owner composition {text:?} cursor={new_cursor_position} commit={is_commit}"
            ),
            Self::DeleteSurroundingText { before, after } => {
                write!(f, "owner delete before={before} after={after}")
            }
            Self::SetSelection { start, end } => write!(f, "owner set_selection ({start}, {end})"),
            Self::SetComposingRegion { start, end } => {
                write!(f, "owner set_composing_region ({start}, {end})")
            }
            Self::FinishComposingText => write!(f, "owner finish_composing_text"),
            Self::ForwardKeyEvent(e) => {
                let action = match e.action {
                    KeyAction::Down => "down",
                    KeyAction::Up => "up",
                };
                write!(f, "owner key {action} code={}", e.key_code)?;
                if let Some(c) = e.unicode_char {
                    write!(f, " char={c:?}")?;
                }
                if e.flags != 0 {
                    write!(f, " flags={:#x}", e.flags)?;
                }
                Ok(())
            }
            Self::ContextMenu { action } => write!(f, "owner context_menu {action:?}"),
        }
    }
}

/// Plays both collaborator roles; clones share the same log.
///
/// The replayed input method is always active.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    log: Rc<RefCell<Vec<Recorded>>>,
}

impl Recorder {
    fn push(&self, call: Recorded) {
        self.log.borrow_mut().push(call);
    }

    /// Drain everything logged so far.
    pub fn take(&self) -> Vec<Recorded> {
        std::mem::take(&mut *self.log.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.log.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.borrow().is_empty()
    }
}

impl InputMethodSession for Recorder {
    fn update_selection(&mut self, update: SelectionUpdate) {
        self.push(Recorded::UpdateSelection(update));
    }

    fn restart_input(&mut self) {
        self.push(Recorded::RestartInput);
    }

    fn is_active(&self) -> bool {
        true
    }
}

impl NativeTextOwner for Recorder {
    fn check_composition_queue(
        &mut self,
        text: &str,
        new_cursor_position: i32,
        is_commit: bool,
    ) -> bool {
        self.push(Recorded::CheckCompositionQueue {
            text: text.to_string(),
            new_cursor_position,
            is_commit,
        });
        true
    }

    fn delete_surrounding_text(&mut self, before: usize, after: usize) -> bool {
        self.push(Recorded::DeleteSurroundingText { before, after });
        true
    }

    fn set_selection_offsets(&mut self, start: usize, end: usize) -> bool {
        self.push(Recorded::SetSelection { start, end });
        true
    }

    fn set_composing_region(&mut self, start: usize, end: usize) -> bool {
        self.push(Recorded::SetComposingRegion { start, end });
        true
    }

    fn finish_composing_text(&mut self) -> bool {
        self.push(Recorded::FinishComposingText);
        true
    }

    fn forward_key_event(&mut self, event: &KeyEvent) -> bool {
        self.push(Recorded::ForwardKeyEvent(event.clone()));
        true
    }

    fn select_all(&mut self) -> bool {
        self.push(Recorded::ContextMenu {
            action: ContextMenuAction::SelectAll,
        });
        true
    }

    fn cut(&mut self) -> bool {
        self.push(Recorded::ContextMenu {
            action: ContextMenuAction::Cut,
        });
        true
    }

    fn copy(&mut self) -> bool {
        self.push(Recorded::ContextMenu {
            action: ContextMenuAction::Copy,
        });
        true
    }

    fn paste(&mut self) -> bool {
        self.push(Recorded::ContextMenu {
            action: ContextMenuAction::Paste,
        });
        true
    }
}
