mod proptest_fsm;

use imesync_core::editor::{EditorAttributes, TextInputType};

use crate::traits::{InputMethodSession, NativeTextOwner};
use crate::types::{AdapterConfig, FullTextSync, KeyEvent, SelectionUpdate};
use crate::AdapterInputConnection;

/// Input method that remembers every update it was sent.
#[derive(Debug, Default)]
pub(super) struct RecordingSession {
    pub updates: Vec<SelectionUpdate>,
    pub restarts: usize,
    pub active: bool,
}

impl InputMethodSession for RecordingSession {
    fn update_selection(&mut self, update: SelectionUpdate) {
        self.updates.push(update);
    }

    fn restart_input(&mut self) {
        self.restarts += 1;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum OwnerCall {
    CompositionQueue {
        text: String,
        cursor: i32,
        is_commit: bool,
    },
    DeleteSurrounding(usize, usize),
    SelectionOffsets(usize, usize),
    ComposingRegion(usize, usize),
    FinishComposing,
    Key(KeyEvent),
    SelectAll,
    Paste,
}

/// Text owner that records calls and answers with `accept`.
#[derive(Debug)]
pub(super) struct RecordingOwner {
    pub calls: Vec<OwnerCall>,
    pub accept: bool,
}

impl Default for RecordingOwner {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            accept: true,
        }
    }
}

impl NativeTextOwner for RecordingOwner {
    fn check_composition_queue(
        &mut self,
        text: &str,
        new_cursor_position: i32,
        is_commit: bool,
    ) -> bool {
        self.calls.push(OwnerCall::CompositionQueue {
            text: text.to_string(),
            cursor: new_cursor_position,
            is_commit,
        });
        self.accept
    }

    fn delete_surrounding_text(&mut self, before: usize, after: usize) -> bool {
        self.calls.push(OwnerCall::DeleteSurrounding(before, after));
        self.accept
    }

    fn set_selection_offsets(&mut self, start: usize, end: usize) -> bool {
        self.calls.push(OwnerCall::SelectionOffsets(start, end));
        self.accept
    }

    fn set_composing_region(&mut self, start: usize, end: usize) -> bool {
        self.calls.push(OwnerCall::ComposingRegion(start, end));
        self.accept
    }

    fn finish_composing_text(&mut self) -> bool {
        self.calls.push(OwnerCall::FinishComposing);
        self.accept
    }

    fn forward_key_event(&mut self, event: &KeyEvent) -> bool {
        self.calls.push(OwnerCall::Key(event.clone()));
        self.accept
    }

    fn select_all(&mut self) -> bool {
        self.calls.push(OwnerCall::SelectAll);
        self.accept
    }

    fn paste(&mut self) -> bool {
        self.calls.push(OwnerCall::Paste);
        self.accept
    }
}

pub(super) type TestConnection = AdapterInputConnection<RecordingSession, RecordingOwner>;

pub(super) fn test_config() -> AdapterConfig {
    AdapterConfig {
        normalize_nbsp: true,
        dedup_notifications: true,
        depth_warning: 16,
        synthesize_tab_on_next: true,
        forward_printable_release: true,
    }
}

pub(super) fn connection() -> TestConnection {
    AdapterInputConnection::with_config(
        RecordingSession::default(),
        RecordingOwner::default(),
        EditorAttributes::for_input_type(TextInputType::Text),
        test_config(),
    )
}

pub(super) fn sync(text: &str, sel: (i32, i32), comp: (i32, i32)) -> FullTextSync {
    FullTextSync {
        text: text.to_string(),
        selection_start: sel.0,
        selection_end: sel.1,
        composition_start: comp.0,
        composition_end: comp.1,
        require_ack: true,
    }
}

/// A connection already holding `text` with the given selection, and with
/// the recorded calls from getting there cleared.
pub(super) fn connection_with(text: &str, sel_start: i32, sel_end: i32) -> TestConnection {
    let mut conn = connection();
    conn.update_state(&sync(text, (sel_start, sel_end), (-1, -1)));
    conn.ime_mut().updates.clear();
    conn.native_mut().calls.clear();
    conn
}

pub(super) fn update(sel: (i32, i32), comp: (i32, i32)) -> SelectionUpdate {
    SelectionUpdate {
        selection_start: sel.0,
        selection_end: sel.1,
        composition_start: comp.0,
        composition_end: comp.1,
    }
}
