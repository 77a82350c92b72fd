//! Seams between the adapter and the world around it.
//!
//! - [`InputMethodSession`]: the input method that edits the field and
//!   must be told where the selection and composition are.
//! - [`NativeTextOwner`]: the authoritative document the adapter mirrors.
//!   Every edit the input method makes is acknowledged to it.
//! - [`InputConnection`]: the operation set the input method drives,
//!   implemented by [`AdapterInputConnection`].

use imesync_core::editor::{ExtractedText, ImeAction};

use crate::types::{ContextMenuAction, FullTextSync, KeyEvent, SelectionUpdate};
use crate::AdapterInputConnection;

/// The input-method side of the connection.
pub trait InputMethodSession {
    /// Tell the input method where the selection and composition are now.
    fn update_selection(&mut self, update: SelectionUpdate);

    /// Ask the input method to discard its view of the field and re-fetch it.
    fn restart_input(&mut self);

    /// Whether the input method is currently bound to the view.
    fn is_active(&self) -> bool;
}

/// The authoritative text owner. Each call returns whether the owner
/// accepted the request; the adapter passes that back to the input method.
pub trait NativeTextOwner {
    /// Composition text changed. `is_commit` is true when the text is final.
    fn check_composition_queue(
        &mut self,
        text: &str,
        new_cursor_position: i32,
        is_commit: bool,
    ) -> bool;

    /// Characters around the selection were removed (lengths already clamped).
    fn delete_surrounding_text(&mut self, before: usize, after: usize) -> bool;

    fn set_selection_offsets(&mut self, start: usize, end: usize) -> bool;

    /// The composition moved to `[start, end)`; `start == end` means cleared.
    fn set_composing_region(&mut self, start: usize, end: usize) -> bool;

    fn finish_composing_text(&mut self) -> bool;

    /// Dispatch a key event as if it came from a hardware keyboard.
    fn forward_key_event(&mut self, event: &KeyEvent) -> bool;

    fn select_all(&mut self) -> bool {
        false
    }

    fn cut(&mut self) -> bool {
        false
    }

    fn copy(&mut self) -> bool {
        false
    }

    fn paste(&mut self) -> bool {
        false
    }
}

/// Operations an input method performs on a connected field.
///
/// Offsets are signed because input methods send them that way; every
/// implementation must tolerate negative and out-of-range values.
pub trait InputConnection {
    // =========================================================================
    // Text owner → connection
    // =========================================================================

    /// Replace the mirrored state with the owner's (full-text sync).
    fn update_state(&mut self, sync: &FullTextSync);

    // =========================================================================
    // Composition and commit
    // =========================================================================

    fn set_composing_text(&mut self, text: &str, new_cursor_position: i32) -> bool;

    fn commit_text(&mut self, text: &str, new_cursor_position: i32) -> bool;

    fn set_composing_region(&mut self, start: i32, end: i32) -> bool;

    fn finish_composing_text(&mut self) -> bool;

    // =========================================================================
    // Deletion and selection
    // =========================================================================

    fn delete_surrounding_text(&mut self, before: i32, after: i32) -> bool;

    fn set_selection(&mut self, start: i32, end: i32) -> bool;

    // =========================================================================
    // Batch edits
    // =========================================================================

    fn begin_batch_edit(&mut self) -> bool;

    /// Returns false on an unbalanced end, otherwise whether a batch is
    /// still open.
    fn end_batch_edit(&mut self) -> bool;

    // =========================================================================
    // Keys and actions
    // =========================================================================

    fn send_key_event(&mut self, event: &KeyEvent) -> bool;

    fn perform_editor_action(&mut self, action: ImeAction) -> bool;

    fn perform_context_menu_action(&mut self, action: ContextMenuAction) -> bool;

    // =========================================================================
    // Read-only
    // =========================================================================

    fn extracted_text(&self) -> ExtractedText;
}

// =============================================================================
// Implementation for AdapterInputConnection
// =============================================================================

impl<M: InputMethodSession, N: NativeTextOwner> InputConnection for AdapterInputConnection<M, N> {
    #[inline]
    fn update_state(&mut self, sync: &FullTextSync) {
        AdapterInputConnection::update_state(self, sync)
    }

    #[inline]
    fn set_composing_text(&mut self, text: &str, new_cursor_position: i32) -> bool {
        AdapterInputConnection::set_composing_text(self, text, new_cursor_position)
    }

    #[inline]
    fn commit_text(&mut self, text: &str, new_cursor_position: i32) -> bool {
        AdapterInputConnection::commit_text(self, text, new_cursor_position)
    }

    #[inline]
    fn set_composing_region(&mut self, start: i32, end: i32) -> bool {
        AdapterInputConnection::set_composing_region(self, start, end)
    }

    #[inline]
    fn finish_composing_text(&mut self) -> bool {
        AdapterInputConnection::finish_composing_text(self)
    }

    #[inline]
    fn delete_surrounding_text(&mut self, before: i32, after: i32) -> bool {
        AdapterInputConnection::delete_surrounding_text(self, before, after)
    }

    #[inline]
    fn set_selection(&mut self, start: i32, end: i32) -> bool {
        AdapterInputConnection::set_selection(self, start, end)
    }

    #[inline]
    fn begin_batch_edit(&mut self) -> bool {
        AdapterInputConnection::begin_batch_edit(self)
    }

    #[inline]
    fn end_batch_edit(&mut self) -> bool {
        AdapterInputConnection::end_batch_edit(self)
    }

    #[inline]
    fn send_key_event(&mut self, event: &KeyEvent) -> bool {
        AdapterInputConnection::send_key_event(self, event)
    }

    #[inline]
    fn perform_editor_action(&mut self, action: ImeAction) -> bool {
        AdapterInputConnection::perform_editor_action(self, action)
    }

    #[inline]
    fn perform_context_menu_action(&mut self, action: ContextMenuAction) -> bool {
        AdapterInputConnection::perform_context_menu_action(self, action)
    }

    #[inline]
    fn extracted_text(&self) -> ExtractedText {
        AdapterInputConnection::extracted_text(self)
    }
}
