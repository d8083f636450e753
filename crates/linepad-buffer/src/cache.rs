//! Snapshot of line order used for index arithmetic.

use std::collections::HashMap;

use crate::{BufferError, BufferResult, LineId, LineStore};

/// Ordered snapshot of a `LineStore` with an id → index map.
///
/// Only valid for the store generation it was taken at; refresh after
/// every insert or remove.
#[derive(Debug, Clone, Default)]
pub struct LineCache {
    order: Vec<LineId>,
    positions: HashMap<LineId, usize>,
    generation: u64,
}

impl LineCache {
    /// Takes a fresh snapshot of the store's current order.
    pub fn snapshot(store: &LineStore) -> Self {
        let order: Vec<LineId> = store.ids().collect();
        let positions = order
            .iter()
            .enumerate()
            .map(|(idx, &id)| (id, idx))
            .collect();
        Self {
            order,
            positions,
            generation: store.generation(),
        }
    }

    /// Errors if the store changed shape since this snapshot was taken.
    pub fn ensure_fresh(&self, store: &LineStore) -> BufferResult<()> {
        if self.generation == store.generation() {
            Ok(())
        } else {
            Err(BufferError::StaleCache {
                cached: self.generation,
                current: store.generation(),
            })
        }
    }

    pub fn get(&self, index: usize) -> Option<LineId> {
        self.order.get(index).copied()
    }

    pub fn index_of(&self, id: LineId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    pub fn last_index(&self) -> Option<usize> {
        self.order.len().checked_sub(1)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
