//! One side of the book: price levels kept in strict price order with a
//! tracked best price.

use super::level::PriceLevel;
use super::order::Side;
use std::collections::BTreeMap;

/// Price-ordered collection of the levels on one side of one instrument.
///
/// Levels live in a `BTreeMap` keyed by price, so whole-level insertion and
/// removal are O(log L) and ordered iteration is free. The best price is
/// tracked explicitly rather than re-derived, which keeps `best_price` O(1)
/// on the read path.
#[derive(Debug)]
pub(crate) struct BookSide {
    side: Side,
    levels: BTreeMap<u64, PriceLevel>,
    best: Option<u64>,
}

impl BookSide {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            levels: BTreeMap::new(),
            best: None,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Best price on this side: highest bid or lowest ask. O(1).
    pub fn best_price(&self) -> Option<u64> {
        self.best
    }

    /// Number of distinct price levels.
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn level(&self, price: u64) -> Option<&PriceLevel> {
        self.levels.get(&price)
    }

    pub fn level_mut(&mut self, price: u64) -> Option<&mut PriceLevel> {
        self.levels.get_mut(&price)
    }

    /// Fetch the level at `price`, creating it if this is the first order to
    /// arrive there. Returns whether the level was created.
    pub fn get_or_insert_level(&mut self, price: u64) -> (&mut PriceLevel, bool) {
        let created = !self.levels.contains_key(&price);
        if created {
            self.best = Some(match (self.best, self.side) {
                (None, _) => price,
                (Some(best), Side::Buy) => best.max(price),
                (Some(best), Side::Sell) => best.min(price),
            });
        }
        let level = self
            .levels
            .entry(price)
            .or_insert_with(|| PriceLevel::new(price));
        (level, created)
    }

    /// Drop the level at `price` once its last order departed.
    pub fn remove_level(&mut self, price: u64) -> Option<PriceLevel> {
        let removed = self.levels.remove(&price);
        if removed.is_some() && self.best == Some(price) {
            self.best = match self.side {
                Side::Buy => self.levels.keys().next_back().copied(),
                Side::Sell => self.levels.keys().next().copied(),
            };
        }
        removed
    }

    /// Whether an incoming order at `incoming_price` on the opposite side can
    /// trade against this side's best level.
    pub fn is_crossable(&self, incoming_price: u64) -> bool {
        match (self.best, self.side) {
            // Incoming buy crosses when the best ask is at or below its limit
            (Some(best_ask), Side::Sell) => best_ask <= incoming_price,
            // Incoming sell crosses when the best bid is at or above its limit
            (Some(best_bid), Side::Buy) => best_bid >= incoming_price,
            (None, _) => false,
        }
    }

    /// Iterate the levels best price first.
    pub fn iter_best_first(&self) -> Box<dyn Iterator<Item = &PriceLevel> + '_> {
        match self.side {
            Side::Buy => Box::new(self.levels.values().rev()),
            Side::Sell => Box::new(self.levels.values()),
        }
    }

    /// Total open quantity across every level on this side.
    pub fn total_quantity(&self) -> u64 {
        self.levels.values().map(PriceLevel::total_quantity).sum()
    }
}
