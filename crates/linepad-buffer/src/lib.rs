//! # Linepad Buffer
//!
//! Ordered line storage with stable line identities.
//!
//! ## Key Concepts
//!
//! ### Identity vs. Position
//! - Every `Line` gets a `LineId` when it is created and keeps it until removed
//! - A line's index is derived from the store's ordering, never stored on the line
//! - `LineCache` is a snapshot of that ordering, stamped with the store generation
//!
//! ### Ownership
//! - `LineStore` owns every `Line`
//! - Lookups hand out `&Line` / `&mut Line` borrows keyed by `LineId`

mod cache;
mod line;
mod selection;
mod store;

pub use cache::LineCache;
pub use line::{Line, LineId};
pub use selection::LineRange;
pub use store::LineStore;

/// Result type for buffer operations
pub type BufferResult<T> = Result<T, BufferError>;

/// Errors that can occur during buffer operations
#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    #[error("Line not found: {0}")]
    LineNotFound(LineId),

    #[error("Line index {index} is out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Line cache is stale: taken at generation {cached}, store is at {current}")]
    StaleCache { cached: u64, current: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_creation() {
        let store = LineStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_insert_and_remove() {
        let mut store = LineStore::new();
        let a = store.insert_after(None);
        let b = store.insert_after(None);
        let c = store.insert_after(Some(a));

        assert_eq!(store.ids().collect::<Vec<_>>(), vec![a, c, b]);

        store.remove(c).unwrap();
        assert_eq!(store.ids().collect::<Vec<_>>(), vec![a, b]);
    }

    #[test]
    fn test_cache_follows_store() {
        let mut store = LineStore::new();
        let a = store.insert_after(None);
        let cache = LineCache::snapshot(&store);
        assert_eq!(cache.index_of(a), Some(0));

        store.insert_after(None);
        assert!(cache.ensure_fresh(&store).is_err());

        let cache = LineCache::snapshot(&store);
        assert!(cache.ensure_fresh(&store).is_ok());
        assert_eq!(cache.len(), 2);
    }
}
