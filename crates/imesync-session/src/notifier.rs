use tracing::trace;

use imesync_core::editor::EditorAttributes;

use super::traits::{InputMethodSession, NativeTextOwner};
use super::types::{to_wire, SelectionUpdate, INVALID_COMPOSITION};
use super::AdapterInputConnection;

/// Remembers the last update delivered to the input method so identical
/// ones can be dropped.
#[derive(Debug)]
pub(crate) struct ChangeNotifier {
    last: Option<SelectionUpdate>,
    dedup: bool,
}

impl ChangeNotifier {
    /// The input method already knows the initial selection from the
    /// editor attributes, so start from there.
    pub(crate) fn seeded(attrs: &EditorAttributes, dedup: bool) -> Self {
        Self {
            last: Some(SelectionUpdate {
                selection_start: to_wire(attrs.initial_selection_start),
                selection_end: to_wire(attrs.initial_selection_end),
                composition_start: INVALID_COMPOSITION,
                composition_end: INVALID_COMPOSITION,
            }),
            dedup,
        }
    }

    pub(crate) fn last(&self) -> Option<SelectionUpdate> {
        self.last
    }

    pub(crate) fn reset(&mut self) {
        self.last = None;
    }

    /// Record `current` and return it if it must be delivered.
    pub(crate) fn check(&mut self, current: SelectionUpdate) -> Option<SelectionUpdate> {
        if self.dedup && self.last == Some(current) {
            return None;
        }
        self.last = Some(current);
        Some(current)
    }
}

impl<M: InputMethodSession, N: NativeTextOwner> AdapterInputConnection<M, N> {
    /// Send the selection to the input method unless a batch edit is open
    /// or the exact same update was already sent.
    pub(crate) fn update_selection_if_required(&mut self) {
        if self.batch.is_open() {
            trace!(depth = self.batch.depth(), "selection update deferred");
            return;
        }
        let current = SelectionUpdate::of(&self.text);
        match self.notifier.check(current) {
            Some(update) => {
                trace!(?update, "update_selection");
                self.ime.update_selection(update);
            }
            None => trace!("selection update unchanged, skipped"),
        }
    }
}
