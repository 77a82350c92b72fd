//! The text model the adapter keeps in step with the input method.
//!
//! `TextState` owns the field content plus the selection and composition
//! ranges. Every offset handed to it is clamped to `[0, len]`, so no
//! caller can push it out of range.


use tracing::trace;

use crate::unicode::{byte_index, char_len};

/// A half-open character range with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    /// Build a range from two offsets in either order.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }
}

/// What a `replace_with` call does to the composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositionEdit {
    /// Follow the edit: shift with it, or clear if removed characters overlap it.
    Follow,
    /// Drop the composition.
    Clear,
    /// Set the composition to this range (empty collapses to none).
    Set(usize, usize),
}

/// Content, selection and composition of one focused field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextState {
    content: String,
    /// Cached `char_len(&content)`.
    len: usize,
    selection_start: usize,
    selection_end: usize,
    composition: Option<TextRange>,
}

impl TextState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A field holding `text` with the caret at `(start, end)`, clamped.
    pub fn with_text(
        text: impl Into<String>,
        selection_start: usize,
        selection_end: usize,
    ) -> Self {
        let content = text.into();
        let len = char_len(&content);
        let mut state = Self {
            content,
            len,
            ..Self::default()
        };
        state.set_selection(selection_start, selection_end);
        state
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Selection as stored, `start` may exceed `end`.
    pub fn selection(&self) -> (usize, usize) {
        (self.selection_start, self.selection_end)
    }

    /// Selection with its bounds ordered.
    pub fn selection_range(&self) -> TextRange {
        TextRange::new(self.selection_start, self.selection_end)
    }

    pub fn composition(&self) -> Option<TextRange> {
        self.composition
    }

    pub fn has_composition(&self) -> bool {
        self.composition.is_some()
    }

    #[inline]
    pub fn clamp(&self, offset: usize) -> usize {
        offset.min(self.len)
    }

    /// Text covered by `range`, clamped to the content.
    pub fn slice(&self, range: TextRange) -> &str {
        let start = byte_index(&self.content, self.clamp(range.start));
        let end = byte_index(&self.content, self.clamp(range.end));
        &self.content[start..end]
    }

    /// Replace `[a, b)` with `text`. Returns the range the new text occupies.
    pub fn replace(&mut self, a: usize, b: usize, text: &str) -> TextRange {
        self.replace_with(a, b, text, None, CompositionEdit::Follow)
    }

    /// Replace `[a, b)` with `text`, then optionally set the selection and
    /// the composition.
    ///
    /// Selection offsets not re-specified follow the edit: before `a` they
    /// stay, after `b` they shift, inside `[a, b]` they land at the end of
    /// the inserted text.
    pub fn replace_with(
        &mut self,
        a: usize,
        b: usize,
        text: &str,
        selection: Option<(usize, usize)>,
        composition: CompositionEdit,
    ) -> TextRange {
        let range = TextRange::new(self.clamp(a), self.clamp(b));
        let start_byte = byte_index(&self.content, range.start);
        let end_byte = byte_index(&self.content, range.end);
        self.content.replace_range(start_byte..end_byte, text);

        let inserted = char_len(text);
        let removed = range.len();
        self.len = self.len - removed + inserted;

        let follow = |o: usize| {
            if o < range.start {
                o
            } else if o > range.end {
                o - removed + inserted
            } else {
                range.start + inserted
            }
        };
        self.selection_start = follow(self.selection_start);
        self.selection_end = follow(self.selection_end);

        if let Some(c) = self.composition {
            self.composition = shift_composition(c, range, inserted);
            if self.composition.is_none() {
                trace!(composition = ?c, removed = ?range, "removal overlapped composition");
            }
        }

        if let Some((start, end)) = selection {
            self.set_selection(start, end);
        }
        match composition {
            CompositionEdit::Follow => {}
            CompositionEdit::Clear => self.composition = None,
            CompositionEdit::Set(start, end) => self.set_composition(start, end),
        }

        TextRange {
            start: range.start,
            end: range.start + inserted,
        }
    }

    /// Replace the whole content, keeping the caret in range.
    pub fn set_content(&mut self, text: &str) {
        let len = self.len;
        self.replace(0, len, text);
    }

    /// Set the selection, clamped, preserving the given order.
    pub fn set_selection(&mut self, start: usize, end: usize) {
        self.selection_start = self.clamp(start);
        self.selection_end = self.clamp(end);
    }

    /// Mark `[start, end)` as composing; offsets are ordered and clamped,
    /// and an empty range clears the composition.
    pub fn set_composition(&mut self, start: usize, end: usize) {
        let range = TextRange::new(self.clamp(start), self.clamp(end));
        self.composition = if range.is_empty() {
            trace!(start, end, "empty composition collapsed");
            None
        } else {
            Some(range)
        };
    }

    pub fn clear_composition(&mut self) {
        self.composition = None;
    }
}

fn shift_composition(c: TextRange, edit: TextRange, inserted: usize) -> Option<TextRange> {
    let removed = edit.len();
    if removed > 0 && c.start < edit.end && edit.start < c.end {
        return None;
    }
    let start = if c.start >= edit.end {
        c.start - removed + inserted
    } else {
        c.start
    };
    let end = if c.end > edit.start {
        c.end - removed + inserted
    } else {
        c.end
    };
    Some(TextRange { start, end })
}
