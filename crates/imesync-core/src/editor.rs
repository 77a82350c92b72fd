//! How a focused field is described to the input method.
//!
//! The attributes are derived once per field from its `TextInputType` and
//! handed to the input method when a connection is created. `bits()`
//! helpers produce the numeric encodings platform IME APIs expect.

use serde::{Deserialize, Serialize};

/// Kind of editable element that has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextInputType {
    None,
    Text,
    TextArea,
    ContentEditable,
    Password,
    Search,
    Url,
    Email,
    Tel,
    Number,
}

impl TextInputType {
    pub const ALL: [TextInputType; 10] = [
        Self::None,
        Self::Text,
        Self::TextArea,
        Self::ContentEditable,
        Self::Password,
        Self::Search,
        Self::Url,
        Self::Email,
        Self::Tel,
        Self::Number,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Text => "text",
            Self::TextArea => "textarea",
            Self::ContentEditable => "contenteditable",
            Self::Password => "password",
            Self::Search => "search",
            Self::Url => "url",
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Number => "number",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(name))
    }
}

/// Keyboard family requested from the input method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputClass {
    Text,
    Number,
    Phone,
}

/// Variation within the input class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputVariation {
    Normal,
    WebEditText,
    WebPassword,
    WebEmailAddress,
}

/// Action key the input method shows, and the action it reports back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImeAction {
    Unspecified,
    None,
    Go,
    Search,
    Send,
    Next,
    Done,
}

impl ImeAction {
    pub fn code(&self) -> u32 {
        match self {
            Self::Unspecified => 0,
            Self::None => 1,
            Self::Go => 2,
            Self::Search => 3,
            Self::Send => 4,
            Self::Next => 5,
            Self::Done => 6,
        }
    }

    /// Inverse of `code()`; unknown codes map to `Unspecified`.
    pub fn from_code(code: u32) -> Self {
        match code {
            1 => Self::None,
            2 => Self::Go,
            3 => Self::Search,
            4 => Self::Send,
            5 => Self::Next,
            6 => Self::Done,
            _ => Self::Unspecified,
        }
    }
}

// Platform encodings for `EditorAttributes::input_type_bits` / `ime_options_bits`.
pub mod bits {
    pub const CLASS_TEXT: u32 = 0x1;
    pub const CLASS_NUMBER: u32 = 0x2;
    pub const CLASS_PHONE: u32 = 0x3;

    pub const VARIATION_NORMAL: u32 = 0x0;
    pub const VARIATION_WEB_EDIT_TEXT: u32 = 0xa0;
    pub const VARIATION_WEB_EMAIL_ADDRESS: u32 = 0xd0;
    pub const VARIATION_WEB_PASSWORD: u32 = 0xe0;

    pub const FLAG_CAP_SENTENCES: u32 = 0x4000;
    pub const FLAG_AUTO_CORRECT: u32 = 0x8000;
    pub const FLAG_MULTI_LINE: u32 = 0x20000;

    pub const IME_FLAG_NO_FULLSCREEN: u32 = 0x0200_0000;
    pub const IME_FLAG_NO_EXTRACT_UI: u32 = 0x1000_0000;
}

/// Everything the input method is told about the focused field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorAttributes {
    pub input_type: TextInputType,
    pub input_class: InputClass,
    pub variation: InputVariation,
    pub auto_correct: bool,
    pub multi_line: bool,
    pub cap_sentences: bool,
    pub ime_action: ImeAction,
    pub no_fullscreen: bool,
    pub no_extract_ui: bool,
    pub single_line: bool,
    pub initial_selection_start: usize,
    pub initial_selection_end: usize,
}

impl EditorAttributes {
    pub fn for_input_type(input_type: TextInputType) -> Self {
        let mut attrs = Self {
            input_type,
            input_class: InputClass::Text,
            variation: InputVariation::WebEditText,
            auto_correct: false,
            multi_line: false,
            cap_sentences: false,
            ime_action: ImeAction::Unspecified,
            no_fullscreen: true,
            no_extract_ui: true,
            single_line: true,
            initial_selection_start: 0,
            initial_selection_end: 0,
        };

        match input_type {
            TextInputType::None => {}
            TextInputType::Text => {
                attrs.auto_correct = true;
                attrs.ime_action = ImeAction::Go;
            }
            TextInputType::TextArea | TextInputType::ContentEditable => {
                attrs.multi_line = true;
                attrs.cap_sentences = true;
                attrs.auto_correct = true;
                attrs.ime_action = ImeAction::None;
                attrs.single_line = false;
            }
            TextInputType::Password => {
                attrs.variation = InputVariation::WebPassword;
                attrs.ime_action = ImeAction::Go;
            }
            TextInputType::Search => attrs.ime_action = ImeAction::Search,
            // A URI variation would hide the tab key, so keep web edit text.
            TextInputType::Url => attrs.ime_action = ImeAction::Go,
            TextInputType::Email => {
                attrs.variation = InputVariation::WebEmailAddress;
                attrs.ime_action = ImeAction::Go;
            }
            // Phone and number keyboards have no tab key; NEXT stands in for it.
            TextInputType::Tel => {
                attrs.input_class = InputClass::Phone;
                attrs.variation = InputVariation::Normal;
                attrs.ime_action = ImeAction::Next;
            }
            TextInputType::Number => {
                attrs.input_class = InputClass::Number;
                attrs.variation = InputVariation::Normal;
                attrs.ime_action = ImeAction::Next;
            }
        }
        attrs
    }

    pub fn with_initial_selection(mut self, start: usize, end: usize) -> Self {
        self.initial_selection_start = start;
        self.initial_selection_end = end;
        self
    }

    pub fn input_type_bits(&self) -> u32 {
        let class = match self.input_class {
            InputClass::Text => bits::CLASS_TEXT,
            InputClass::Number => bits::CLASS_NUMBER,
            InputClass::Phone => bits::CLASS_PHONE,
        };
        let variation = match self.variation {
            InputVariation::Normal => bits::VARIATION_NORMAL,
            InputVariation::WebEditText => bits::VARIATION_WEB_EDIT_TEXT,
            InputVariation::WebPassword => bits::VARIATION_WEB_PASSWORD,
            InputVariation::WebEmailAddress => bits::VARIATION_WEB_EMAIL_ADDRESS,
        };
        let mut v = class | variation;
        if self.auto_correct {
            v |= bits::FLAG_AUTO_CORRECT;
        }
        if self.multi_line {
            v |= bits::FLAG_MULTI_LINE;
        }
        if self.cap_sentences {
            v |= bits::FLAG_CAP_SENTENCES;
        }
        v
    }

    pub fn ime_options_bits(&self) -> u32 {
        let mut v = self.ime_action.code();
        if self.no_fullscreen {
            v |= bits::IME_FLAG_NO_FULLSCREEN;
        }
        if self.no_extract_ui {
            v |= bits::IME_FLAG_NO_EXTRACT_UI;
        }
        v
    }
}

/// Snapshot of the field handed to an input method that asks for the
/// whole text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedText {
    pub text: String,
    pub partial_end_offset: usize,
    pub selection_start: usize,
    pub selection_end: usize,
    pub single_line: bool,
}
