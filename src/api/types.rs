// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    #[error("connection lock poisoned")]
    Poisoned,
    #[error("no field has focus")]
    NoFocusedField,
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid settings: {msg}")]
    InvalidSettings { msg: String },
}
