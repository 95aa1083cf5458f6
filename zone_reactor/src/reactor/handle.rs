//! Hot-swappable handle to the active rule table.

use std::sync::{Arc, PoisonError, RwLock};
use zone_rules::RuleTable;

/// Holds the one active [`RuleTable`].
///
/// Readers take an `Arc` snapshot and work on it lock-free; a reload swaps the
/// whole table. An event always sees either the old table or the new one.
#[derive(Debug, Default)]
pub struct RuleTableHandle {
    current: RwLock<Arc<RuleTable>>,
}

impl RuleTableHandle {
    pub fn new(table: RuleTable) -> Self {
        Self {
            current: RwLock::new(Arc::new(table)),
        }
    }

    /// Snapshot of the active table.
    pub fn current(&self) -> Arc<RuleTable> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Install `table` and return the one it replaced.
    pub fn replace(&self, table: RuleTable) -> Arc<RuleTable> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(table))
    }
}
