use tracing::{debug, warn};

use super::traits::{InputMethodSession, NativeTextOwner};
use super::AdapterInputConnection;

/// Nesting depth of batch-edit scopes. Zero means edits notify immediately.
#[derive(Debug, Default)]
pub(crate) struct BatchEdit {
    depth: usize,
}

impl BatchEdit {
    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    pub(crate) fn is_open(&self) -> bool {
        self.depth > 0
    }

    pub(crate) fn begin(&mut self) -> usize {
        self.depth += 1;
        self.depth
    }

    /// Close one scope. `None` when no scope was open.
    pub(crate) fn end(&mut self) -> Option<usize> {
        if self.depth == 0 {
            return None;
        }
        self.depth -= 1;
        Some(self.depth)
    }

    pub(crate) fn reset(&mut self) {
        self.depth = 0;
    }
}

impl<M: InputMethodSession, N: NativeTextOwner> AdapterInputConnection<M, N> {
    pub fn begin_batch_edit(&mut self) -> bool {
        let depth = self.batch.begin();
        debug!(depth, "begin_batch_edit");
        if depth > self.config.depth_warning {
            warn!(
                depth,
                limit = self.config.depth_warning,
                "batch edits nested unusually deep"
            );
        }
        true
    }

    pub fn end_batch_edit(&mut self) -> bool {
        let Some(depth) = self.batch.end() else {
            warn!("end_batch_edit without a matching begin_batch_edit");
            return false;
        };
        debug!(depth, "end_batch_edit");
        if depth == 0 {
            self.update_selection_if_required();
        }
        depth != 0
    }
}
