use serde::{Deserialize, Serialize};

use imesync_core::text::TextState;

/// Selection value reported when the position is unknown.
pub const INVALID_SELECTION: i32 = -1;
/// Composition bound reported when there is no composition.
pub const INVALID_COMPOSITION: i32 = -1;

// Platform key codes
pub mod key {
    pub const TAB: u16 = 61;
    pub const ENTER: u16 = 66;
    pub const DEL: u16 = 67;
    pub const FORWARD_DEL: u16 = 112;
}

// Flag bits carried by KeyEvent
pub mod key_flags {
    pub const SOFT_KEYBOARD: u32 = 0x2;
    pub const KEEP_TOUCH_MODE: u32 = 0x4;
    pub const EDITOR_ACTION: u32 = 0x10;
    /// Set on events the adapter made up rather than received.
    pub const SYNTHETIC: u32 = 0x8000_0000;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyAction {
    Down,
    Up,
}

/// A discrete key press or release delivered by the input method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub action: KeyAction,
    pub key_code: u16,
    /// Character the key produces, if any.
    #[serde(default)]
    pub unicode_char: Option<char>,
    #[serde(default)]
    pub flags: u32,
}

impl KeyEvent {
    pub fn down(key_code: u16) -> Self {
        Self {
            action: KeyAction::Down,
            key_code,
            unicode_char: None,
            flags: 0,
        }
    }

    pub fn up(key_code: u16) -> Self {
        Self {
            action: KeyAction::Up,
            ..Self::down(key_code)
        }
    }

    pub fn with_char(mut self, c: char) -> Self {
        self.unicode_char = Some(c);
        self
    }

    pub fn with_flags(mut self, flags: u32) -> Self {
        self.flags |= flags;
        self
    }

    pub fn is_synthetic(&self) -> bool {
        self.flags & key_flags::SYNTHETIC != 0
    }
}

/// Context-menu command the input method asks the field to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextMenuAction {
    SelectAll,
    Cut,
    Copy,
    Paste,
    Other(u32),
}

/// Full-text sync pushed by the text owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullTextSync {
    pub text: String,
    pub selection_start: i32,
    pub selection_end: i32,
    #[serde(default = "invalid_composition")]
    pub composition_start: i32,
    #[serde(default = "invalid_composition")]
    pub composition_end: i32,
    /// False when the update merely echoes an edit the input method made.
    pub require_ack: bool,
}

fn invalid_composition() -> i32 {
    INVALID_COMPOSITION
}

/// Selection and composition as reported to the input method, with `-1`
/// standing for "no composition".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SelectionUpdate {
    pub selection_start: i32,
    pub selection_end: i32,
    pub composition_start: i32,
    pub composition_end: i32,
}

impl SelectionUpdate {
    pub fn of(state: &TextState) -> Self {
        let (selection_start, selection_end) = state.selection();
        let (composition_start, composition_end) = match state.composition() {
            Some(c) => (to_wire(c.start), to_wire(c.end)),
            None => (INVALID_COMPOSITION, INVALID_COMPOSITION),
        };
        Self {
            selection_start: to_wire(selection_start),
            selection_end: to_wire(selection_end),
            composition_start,
            composition_end,
        }
    }

    pub fn has_composition(&self) -> bool {
        self.composition_start != INVALID_COMPOSITION
    }
}

/// Complete field state in wire form, for inspection and tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImeState {
    pub text: String,
    pub selection_start: i32,
    pub selection_end: i32,
    pub composition_start: i32,
    pub composition_end: i32,
}

impl ImeState {
    pub fn of(state: &TextState) -> Self {
        let update = SelectionUpdate::of(state);
        Self {
            text: state.content().to_string(),
            selection_start: update.selection_start,
            selection_end: update.selection_end,
            composition_start: update.composition_start,
            composition_end: update.composition_end,
        }
    }
}

/// Adapter tunables, copied from the global settings at construction.
#[derive(Debug, Clone)]
pub struct AdapterConfig {
    pub normalize_nbsp: bool,
    pub dedup_notifications: bool,
    pub depth_warning: usize,
    pub synthesize_tab_on_next: bool,
    pub forward_printable_release: bool,
}

impl AdapterConfig {
    pub fn from_settings(s: &imesync_core::settings::Settings) -> Self {
        Self {
            normalize_nbsp: s.sync.normalize_nbsp,
            dedup_notifications: s.sync.dedup_notifications,
            depth_warning: s.batch.depth_warning,
            synthesize_tab_on_next: s.keys.synthesize_tab_on_next,
            forward_printable_release: s.keys.forward_printable_release,
        }
    }
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self::from_settings(imesync_core::settings::settings())
    }
}

#[inline]
pub(crate) fn to_wire(offset: usize) -> i32 {
    i32::try_from(offset).unwrap_or(i32::MAX)
}
