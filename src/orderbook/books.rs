//! Registry of per-instrument order books.

use super::book::OrderBook;
use dashmap::DashMap;
use std::sync::{Arc, Mutex};
use tracing::trace;

/// Concurrent map from symbol to its order book.
///
/// Each book stays single-writer behind its mutex while different
/// instruments' streams are processed concurrently. Lookups and creation are
/// lock-free on the registry itself.
#[derive(Debug, Default)]
pub struct OrderBooks {
    books: DashMap<String, Arc<Mutex<OrderBook>>>,
}

impl OrderBooks {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the book for `symbol`, creating an empty one on first use.
    pub fn get_or_create(&self, symbol: &str) -> Arc<Mutex<OrderBook>> {
        self.books
            .entry(symbol.to_string())
            .or_insert_with(|| {
                trace!("Creating order book for {}", symbol);
                Arc::new(Mutex::new(OrderBook::new(symbol)))
            })
            .clone()
    }

    /// Fetch the book for `symbol` if it exists.
    pub fn get(&self, symbol: &str) -> Option<Arc<Mutex<OrderBook>>> {
        self.books.get(symbol).map(|entry| entry.clone())
    }

    /// Drop the book for `symbol`, returning it if it existed.
    pub fn remove(&self, symbol: &str) -> Option<Arc<Mutex<OrderBook>>> {
        self.books.remove(symbol).map(|(_, book)| book)
    }

    /// Number of registered instruments.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Symbols of every registered book.
    pub fn symbols(&self) -> Vec<String> {
        self.books.iter().map(|entry| entry.key().clone()).collect()
    }
}
