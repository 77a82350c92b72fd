//! Input-connection adapter between an input method and a text owner.
//!
//! `AdapterInputConnection` mirrors the focused field's text, selection and
//! composition, applies the edits the input method sends, acknowledges each
//! one to the text owner, and tells the input method where the selection
//! landed, once per batch and only when something changed.

mod batch;
mod edit;
mod key_handlers;
mod notifier;
pub mod traits;
pub mod types;

#[cfg(test)]
mod tests;

use imesync_core::editor::{EditorAttributes, ExtractedText};
use imesync_core::text::TextState;

pub use traits::{InputConnection, InputMethodSession, NativeTextOwner};
pub use types::{
    key, key_flags, AdapterConfig, ContextMenuAction, FullTextSync, ImeState, KeyAction,
    KeyEvent, SelectionUpdate, INVALID_COMPOSITION, INVALID_SELECTION,
};

use batch::BatchEdit;
use notifier::ChangeNotifier;

/// Adapter for one focused field.
///
/// The input-method session `M` and text owner `N` are injected at
/// construction and owned for the lifetime of the adapter.
pub struct AdapterInputConnection<M, N> {
    ime: M,
    native: N,

    text: TextState,
    batch: BatchEdit,
    notifier: ChangeNotifier,

    attrs: EditorAttributes,
    config: AdapterConfig,
}

impl<M: InputMethodSession, N: NativeTextOwner> AdapterInputConnection<M, N> {
    pub fn new(ime: M, native: N, attrs: EditorAttributes) -> Self {
        Self::with_config(ime, native, attrs, AdapterConfig::default())
    }

    pub fn with_config(ime: M, native: N, attrs: EditorAttributes, config: AdapterConfig) -> Self {
        let notifier = ChangeNotifier::seeded(&attrs, config.dedup_notifications);
        Self {
            ime,
            native,
            text: TextState::new(),
            batch: BatchEdit::default(),
            notifier,
            attrs,
            config,
        }
    }

    /// Focus moved to another field (or the field changed type): start over
    /// with empty text, no open batch, and a snapshot seeded from `attrs`.
    pub fn reset_field(&mut self, attrs: EditorAttributes) {
        tracing::debug!(input_type = ?attrs.input_type, "reset_field");
        self.text = TextState::new();
        self.batch.reset();
        self.notifier = ChangeNotifier::seeded(&attrs, self.config.dedup_notifications);
        self.attrs = attrs;
    }

    /// Tell the input method its view is stale. Open batches are abandoned
    /// and the next state is always delivered.
    pub fn restart_input(&mut self) {
        tracing::debug!(depth = self.batch.depth(), "restart_input");
        self.ime.restart_input();
        self.batch.reset();
        self.notifier.reset();
    }

    pub fn is_active(&self) -> bool {
        self.ime.is_active()
    }

    pub fn text_state(&self) -> &TextState {
        &self.text
    }

    pub fn ime_state(&self) -> ImeState {
        ImeState::of(&self.text)
    }

    pub fn extracted_text(&self) -> ExtractedText {
        let (selection_start, selection_end) = self.text.selection();
        ExtractedText {
            text: self.text.content().to_string(),
            partial_end_offset: self.text.len(),
            selection_start,
            selection_end,
            single_line: self.attrs.single_line,
        }
    }

    pub fn attributes(&self) -> &EditorAttributes {
        &self.attrs
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    pub fn batch_depth(&self) -> usize {
        self.batch.depth()
    }

    /// Last update delivered to the input method, if any.
    pub fn last_update(&self) -> Option<SelectionUpdate> {
        self.notifier.last()
    }

    pub fn ime(&self) -> &M {
        &self.ime
    }

    pub fn ime_mut(&mut self) -> &mut M {
        &mut self.ime
    }

    pub fn native(&self) -> &N {
        &self.native
    }

    pub fn native_mut(&mut self) -> &mut N {
        &mut self.native
    }

    /// Hand the collaborators back, dropping the field state.
    pub fn into_parts(self) -> (M, N) {
        (self.ime, self.native)
    }
}
