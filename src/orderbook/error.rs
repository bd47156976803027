//! Order book error types

use super::order::OrderId;
use std::fmt;

/// Errors that can occur within the OrderBook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderBookError {
    /// Admission with a non-positive price
    InvalidPrice(u64),

    /// Admission with a non-positive quantity
    InvalidQuantity(u64),

    /// Admission reusing the id of a live order
    DuplicateOrderId(OrderId),

    /// Cancel or modify referencing an id with no live order (never existed,
    /// already cancelled, or already fully filled)
    OrderNotFound(OrderId),

    /// The no-crossed-state invariant was violated: the best bid reached or
    /// passed the best ask while both rested. This is a defect signal, not an
    /// operational error; the book halts when it is raised.
    CrossedBook {
        /// Best bid at the moment of detection
        best_bid: u64,
        /// Best ask at the moment of detection
        best_ask: u64,
    },

    /// The book halted after a crossed-book violation and refuses further
    /// mutation pending external intervention
    Halted,
}

impl OrderBookError {
    /// True for the defect-signal errors that leave the book untrustworthy.
    /// Caller-input errors (`false` here) never affect other orders.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            OrderBookError::CrossedBook { .. } | OrderBookError::Halted
        )
    }
}

impl fmt::Display for OrderBookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderBookError::InvalidPrice(price) => {
                write!(f, "Invalid price: {}", price)
            }
            OrderBookError::InvalidQuantity(quantity) => {
                write!(f, "Invalid quantity: {}", quantity)
            }
            OrderBookError::DuplicateOrderId(id) => {
                write!(f, "Duplicate order id: {}", id)
            }
            OrderBookError::OrderNotFound(id) => {
                write!(f, "Order not found: {}", id)
            }
            OrderBookError::CrossedBook { best_bid, best_ask } => {
                write!(
                    f,
                    "Crossed book invariant violated: best bid {} >= best ask {}",
                    best_bid, best_ask
                )
            }
            OrderBookError::Halted => {
                write!(f, "Order book is halted after an invariant violation")
            }
        }
    }
}

impl std::error::Error for OrderBookError {}
