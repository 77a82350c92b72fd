use std::sync::Mutex;

use tracing::debug;

use imesync_core::editor::{EditorAttributes, TextInputType};
use imesync_session::{AdapterConfig, AdapterInputConnection, InputMethodSession, NativeTextOwner};

use super::ConnectionError;

struct Inner<M, N> {
    adapter: AdapterInputConnection<M, N>,
    focused: bool,
}

/// The adapter for the focused field, shareable across threads.
///
/// The collaborators live as long as the `SharedConnection`; focusing a
/// field starts the adapter over with fresh text state, and blurring it
/// makes every operation fail with `NoFocusedField` until the next focus.
pub struct SharedConnection<M, N> {
    inner: Mutex<Inner<M, N>>,
}

impl<M: InputMethodSession, N: NativeTextOwner> SharedConnection<M, N> {
    pub fn new(ime: M, native: N) -> Self {
        Self::with_config(ime, native, AdapterConfig::default())
    }

    pub fn with_config(ime: M, native: N, config: AdapterConfig) -> Self {
        let attrs = EditorAttributes::for_input_type(TextInputType::None);
        let adapter = AdapterInputConnection::with_config(ime, native, attrs, config);
        Self {
            inner: Mutex::new(Inner {
                adapter,
                focused: false,
            }),
        }
    }

    /// A field gained focus.
    pub fn focus(&self, attrs: EditorAttributes) -> Result<(), ConnectionError> {
        let mut inner = self.inner.lock().map_err(|_| ConnectionError::Poisoned)?;
        debug!(input_type = ?attrs.input_type, "focus");
        inner.adapter.reset_field(attrs);
        inner.focused = true;
        Ok(())
    }

    /// The focused field lost focus.
    pub fn blur(&self) -> Result<(), ConnectionError> {
        let mut inner = self.inner.lock().map_err(|_| ConnectionError::Poisoned)?;
        debug!(was_focused = inner.focused, "blur");
        inner.focused = false;
        Ok(())
    }

    pub fn is_focused(&self) -> Result<bool, ConnectionError> {
        let inner = self.inner.lock().map_err(|_| ConnectionError::Poisoned)?;
        Ok(inner.focused)
    }

    /// Run `f` against the focused field's adapter while holding the lock.
    pub fn with_connection<R>(
        &self,
        f: impl FnOnce(&mut AdapterInputConnection<M, N>) -> R,
    ) -> Result<R, ConnectionError> {
        let mut inner = self.inner.lock().map_err(|_| ConnectionError::Poisoned)?;
        if !inner.focused {
            return Err(ConnectionError::NoFocusedField);
        }
        Ok(f(&mut inner.adapter))
    }

    /// Hand the collaborators back.
    pub fn into_parts(self) -> Result<(M, N), ConnectionError> {
        let inner = self
            .inner
            .into_inner()
            .map_err(|_| ConnectionError::Poisoned)?;
        Ok(inner.adapter.into_parts())
    }
}
