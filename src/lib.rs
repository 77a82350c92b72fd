//! imesync engine: keeps an input method's view of a text field in step
//! with the field's owner.
//!
//! The work happens in two member crates:
//! - `imesync-core`: text state, editor attributes, settings.
//! - `imesync-session`: the `AdapterInputConnection` state machine.
//!
//! This crate adds the host-facing [`api::SharedConnection`] and the
//! optional trace subscriber.

pub mod api;
pub mod trace_init;

pub use imesync_core::{editor, settings, text, unicode};
pub use imesync_session::{
    key, key_flags, AdapterConfig, AdapterInputConnection, ContextMenuAction, FullTextSync,
    ImeState, InputConnection, InputMethodSession, KeyAction, KeyEvent, NativeTextOwner,
    SelectionUpdate,
};

pub use api::{ConnectionError, SharedConnection};
pub use trace_init::init_tracing;
