//! Host-facing layer: one shared adapter for whichever field has focus.

mod connection;
mod types;

pub use connection::SharedConnection;
pub use types::ConnectionError;

use std::path::Path;

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

pub fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Install a custom settings file. Must run before the first adapter is
/// created.
pub fn settings_load_config(path: &Path) -> Result<(), ConnectionError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConnectionError::Io {
        msg: format!("{}: {e}", path.display()),
    })?;
    imesync_core::settings::init_custom(content)
        .map_err(|e| ConnectionError::InvalidSettings { msg: e.to_string() })
}
