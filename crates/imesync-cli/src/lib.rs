//! Replay and inspection tooling for the imesync adapter.
//!
//! A script is a JSONL file with one adapter operation per line. Replaying
//! it drives an `AdapterInputConnection` wired to recording collaborators,
//! so the full conversation with the input method and the text owner can
//! be read back afterwards.

pub mod commands;
pub mod recorder;
pub mod replay;
pub mod script;
