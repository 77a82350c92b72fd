use tracing::{debug, debug_span, trace};

use imesync_core::text::{CompositionEdit, TextRange};
use imesync_core::unicode::{clamp_offset, normalize_nbsp};

use super::traits::{InputMethodSession, NativeTextOwner};
use super::types::FullTextSync;
use super::AdapterInputConnection;

/// Caret position after inserting text at `inserted`.
///
/// Positive positions count forward from the end of the inserted text
/// (`1` is right after it); zero and negative positions count backward
/// from its start.
pub(crate) fn cursor_after_insert(
    inserted: TextRange,
    new_cursor_position: i32,
    len: usize,
) -> usize {
    let n = i64::from(new_cursor_position);
    let pos = if n > 0 {
        inserted.end as i64 + n - 1
    } else {
        inserted.start as i64 + n
    };
    clamp_offset(pos, len)
}

impl<M: InputMethodSession, N: NativeTextOwner> AdapterInputConnection<M, N> {
    /// Adopt the text owner's state wholesale.
    ///
    /// Updates with `require_ack == false` echo an edit the input method
    /// made itself and are ignored.
    pub fn update_state(&mut self, sync: &FullTextSync) {
        let _span = debug_span!(
            "update_state",
            text = %sync.text,
            sel = ?(sync.selection_start, sync.selection_end),
            comp = ?(sync.composition_start, sync.composition_end),
            require_ack = sync.require_ack
        )
        .entered();
        if !sync.require_ack {
            return;
        }

        let text = if self.config.normalize_nbsp {
            normalize_nbsp(&sync.text)
        } else {
            sync.text.clone()
        };
        let len = imesync_core::unicode::char_len(&text);
        let clamp = |o: i32| clamp_offset(i64::from(o), len);
        let selection = (clamp(sync.selection_start), clamp(sync.selection_end));
        let (comp_start, comp_end) = (clamp(sync.composition_start), clamp(sync.composition_end));
        let composition = if comp_start == comp_end {
            CompositionEdit::Clear
        } else {
            CompositionEdit::Set(comp_start, comp_end)
        };

        if self.text.content() != text {
            let old_len = self.text.len();
            self.text.replace_with(0, old_len, &text, Some(selection), composition);
        } else {
            self.text.set_selection(selection.0, selection.1);
            match composition {
                CompositionEdit::Set(start, end) => self.text.set_composition(start, end),
                _ => self.text.clear_composition(),
            }
        }
        self.update_selection_if_required();
    }

    pub fn set_composing_text(&mut self, text: &str, new_cursor_position: i32) -> bool {
        let _span = debug_span!("set_composing_text", text, new_cursor_position).entered();
        self.replace_composition(text, new_cursor_position, true);
        self.update_selection_if_required();
        self.native.check_composition_queue(text, new_cursor_position, false)
    }

    pub fn commit_text(&mut self, text: &str, new_cursor_position: i32) -> bool {
        let _span = debug_span!("commit_text", text, new_cursor_position).entered();
        self.replace_composition(text, new_cursor_position, false);
        self.update_selection_if_required();
        self.native.check_composition_queue(text, new_cursor_position, !text.is_empty())
    }

    /// Put `text` where the composition is (or over the selection when there
    /// is none) and move the caret relative to it.
    fn replace_composition(&mut self, text: &str, new_cursor_position: i32, composing: bool) {
        let target = self
            .text
            .composition()
            .unwrap_or_else(|| self.text.selection_range());
        let inserted =
            self.text.replace_with(target.start, target.end, text, None, CompositionEdit::Clear);
        if composing {
            self.text.set_composition(inserted.start, inserted.end);
        }
        let caret = cursor_after_insert(inserted, new_cursor_position, self.text.len());
        self.text.set_selection(caret, caret);
        trace!(?inserted, caret, "composition replaced");
    }

    /// Remove up to `before` characters ahead of the selection and up to
    /// `after` behind it. Requests beyond what exists are clamped, and the
    /// clamped lengths are what the text owner hears about.
    pub fn delete_surrounding_text(&mut self, before: i32, after: i32) -> bool {
        let _span = debug_span!("delete_surrounding_text", before, after).entered();
        let selection = self.text.selection_range();
        let before = clamp_offset(i64::from(before), selection.start);
        let after = clamp_offset(i64::from(after), self.text.len() - selection.end);

        // Trailing side first so the leading offsets stay valid.
        if after > 0 {
            self.text.replace(selection.end, selection.end + after, "");
        }
        if before > 0 {
            self.text.replace(selection.start - before, selection.start, "");
        }
        debug!(before, after, "deleted around selection");

        self.update_selection_if_required();
        self.native.delete_surrounding_text(before, after)
    }

    /// Out-of-range selections are ignored but still reported as handled.
    pub fn set_selection(&mut self, start: i32, end: i32) -> bool {
        let _span = debug_span!("set_selection", start, end).entered();
        let len = self.text.len() as i64;
        let (s, e) = (i64::from(start), i64::from(end));
        if s < 0 || e < 0 || s > len || e > len {
            debug!(len, "selection out of range, ignored");
            return true;
        }
        let (start, end) = (s as usize, e as usize);
        self.text.set_selection(start, end);
        self.update_selection_if_required();
        self.native.set_selection_offsets(start, end)
    }

    pub fn set_composing_region(&mut self, start: i32, end: i32) -> bool {
        let _span = debug_span!("set_composing_region", start, end).entered();
        let len = self.text.len();
        let a = clamp_offset(i64::from(start.min(end)), len);
        let b = clamp_offset(i64::from(start.max(end)), len);
        if a == b {
            self.text.clear_composition();
        } else {
            self.text.set_composition(a, b);
        }
        self.update_selection_if_required();
        self.native.set_composing_region(a, b)
    }

    pub fn finish_composing_text(&mut self) -> bool {
        let _span = debug_span!("finish_composing_text").entered();
        if !self.text.has_composition() {
            return true;
        }
        self.text.clear_composition();
        self.update_selection_if_required();
        self.native.finish_composing_text()
    }
}
