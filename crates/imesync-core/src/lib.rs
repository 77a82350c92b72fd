//! Shared building blocks for the imesync input-connection adapter.
//!
//! `text` holds the authoritative field state the adapter mirrors,
//! `editor` describes the field to the input method, and `settings`
//! carries the tunables loaded from TOML.

pub mod editor;
pub mod settings;
pub mod text;
pub mod unicode;

pub use editor::{EditorAttributes, ExtractedText, ImeAction, TextInputType};
pub use text::{TextRange, TextState};
