//! Ordered line storage.
//!
//! ## Design
//!
//! Lines live in a `HashMap` keyed by `LineId`; document order is a
//! separate `Vec<LineId>`. Structural mutations bump `generation`, which
//! lets a `LineCache` tell whether it was taken before or after them.

use std::collections::HashMap;

use crate::{BufferError, BufferResult, Line, LineId};

/// Owns all lines and their document order.
#[derive(Debug, Clone, Default)]
pub struct LineStore {
    lines: HashMap<LineId, Line>,
    order: Vec<LineId>,
    generation: u64,
}

impl LineStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with `count` empty lines.
    pub fn with_lines(count: usize) -> Self {
        let mut store = Self::new();
        for _ in 0..count {
            store.insert_after(None);
        }
        store
    }

    /// Inserts a new empty line.
    ///
    /// With `Some(after)` the line lands immediately after `after`;
    /// with `None`, or when `after` is not in the store, it is appended.
    pub fn insert_after(&mut self, after: Option<LineId>) -> LineId {
        let line = Line::new();
        let id = line.id();

        let position = after
            .and_then(|after| self.order.iter().position(|&other| other == after))
            .map(|idx| idx + 1)
            .unwrap_or(self.order.len());

        self.order.insert(position, id);
        self.lines.insert(id, line);
        self.generation += 1;
        id
    }

    /// Removes a line, returning it.
    pub fn remove(&mut self, id: LineId) -> BufferResult<Line> {
        let line = self.lines.remove(&id).ok_or(BufferError::LineNotFound(id))?;
        self.order.retain(|&other| other != id);
        self.generation += 1;
        Ok(line)
    }

    pub fn get(&self, id: LineId) -> Option<&Line> {
        self.lines.get(&id)
    }

    pub fn get_mut(&mut self, id: LineId) -> Option<&mut Line> {
        self.lines.get_mut(&id)
    }

    pub fn contains(&self, id: LineId) -> bool {
        self.lines.contains_key(&id)
    }

    /// Returns the line at `index` in document order.
    pub fn at(&self, index: usize) -> Option<&Line> {
        self.order.get(index).and_then(|id| self.lines.get(id))
    }

    /// Line ids in document order.
    pub fn ids(&self) -> impl Iterator<Item = LineId> + '_ {
        self.order.iter().copied()
    }

    /// Lines in document order.
    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.order.iter().filter_map(|id| self.lines.get(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of structural mutations applied so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_with_lines() {
        let store = LineStore::with_lines(25);
        assert_eq!(store.len(), 25);
        assert!(store.iter().all(|line| line.content().is_empty()));
    }

    #[test]
    fn test_insert_after_unknown_appends() {
        let mut store = LineStore::with_lines(2);
        let stray = LineId::new();
        let id = store.insert_after(Some(stray));
        assert_eq!(store.ids().last(), Some(id));
    }

    #[test]
    fn test_remove_missing_line() {
        let mut store = LineStore::with_lines(1);
        let err = store.remove(LineId::new()).unwrap_err();
        assert!(matches!(err, BufferError::LineNotFound(_)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_generation_bumps_on_structural_change() {
        let mut store = LineStore::new();
        let start = store.generation();
        let id = store.insert_after(None);
        assert_eq!(store.generation(), start + 1);

        store.get_mut(id).unwrap().set_content("edit");
        assert_eq!(store.generation(), start + 1);

        store.remove(id).unwrap();
        assert_eq!(store.generation(), start + 2);
    }

    proptest! {
        #[test]
        fn prop_order_and_map_agree(inserts in prop::collection::vec(any::<Option<prop::sample::Index>>(), 1..64)) {
            let mut store = LineStore::new();
            for after in inserts {
                let anchor = after.and_then(|idx| {
                    let ids: Vec<_> = store.ids().collect();
                    (!ids.is_empty()).then(|| ids[idx.index(ids.len())])
                });
                store.insert_after(anchor);
            }
            prop_assert_eq!(store.iter().count(), store.len());
            prop_assert!(store.ids().all(|id| store.contains(id)));
        }
    }
}
