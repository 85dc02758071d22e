use crate::OperationResult;
use tracing::trace;

/// Maximum number of operations kept in a calculator's history.
pub const MAX_HISTORY_SIZE: usize = 1000;

/// Snapshot type returned by [`crate::Calculator::history`].
pub type HistoryList = Vec<OperationResult>;

/// Insertion-ordered log capped at [`MAX_HISTORY_SIZE`].
///
/// Pushing into a full history is a no-op, not an error.
#[derive(Debug, Clone, Default)]
pub struct History {
    items: HistoryList,
}

impl History {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: OperationResult) {
        if self.items.len() < MAX_HISTORY_SIZE {
            self.items.push(item);
        } else {
            trace!(capacity = MAX_HISTORY_SIZE, "history full, dropping entry");
        }
    }

    pub fn snapshot(&self) -> HistoryList {
        self.items.clone()
    }

    pub fn items(&self) -> &[OperationResult] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
