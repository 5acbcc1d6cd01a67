//! # Data State
//!
//! Wraps the `Store` for use in commands.
//!
//! ## Thread Safety
//! `Store` keeps its tables behind `RwLock`s, so commands can browse the
//! catalog concurrently without extra locking here.

use meow_data::Store;

/// Wrapper around `Store` for state management.
#[derive(Debug, Clone)]
pub struct DataState {
    store: Store,
}

impl DataState {
    pub fn new(store: Store) -> Self {
        DataState { store }
    }

    /// Returns a reference to the inner Store.
    pub fn inner(&self) -> &Store {
        &self.store
    }
}
