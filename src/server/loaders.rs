use std::collections::HashMap;
use std::sync::Arc;

use async_graphql::Context;
use tracing::debug;

use crate::store::SharedStore;

use super::dataloader::{BatchLoader, DataLoader};

pub trait Loaders {
    fn load_book_count(&self, author: String) -> impl Future<Output = usize> + Send;
    /// Forgets cached counts after a write to the books.
    fn forget_book_counts(&self);
}

impl Loaders for Context<'_> {
    fn load_book_count(&self, author: String) -> impl Future<Output = usize> + Send {
        self.data_unchecked::<DataLoader<LoadBookCounts>>()
            .load(author)
    }

    fn forget_book_counts(&self) {
        self.data_unchecked::<DataLoader<LoadBookCounts>>().clear();
    }
}

pub struct LoadBookCounts {
    store: SharedStore,
}

impl LoadBookCounts {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

impl BatchLoader for LoadBookCounts {
    type K = String;
    type V = usize;

    fn load_batch(
        &mut self,
        keys: Vec<Self::K>,
    ) -> impl Future<Output = HashMap<Self::K, Self::V>> + Send + 'static {
        let store = Arc::clone(&self.store);
        async move {
            let debug_keys = keys.join("`, `");
            debug!("counting books by `{debug_keys}`");

            let counts = store.read().await.book_counts_by_author(keys);

            debug!("finished counting books by `{debug_keys}`");
            counts
        }
    }
}
