//! Order identity and the order record held by the book.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Namespace for deriving deterministic order ids from integers (v5).
const ORDER_ID_NAMESPACE: Uuid = Uuid::from_u128(0x6ba7_b810_9dad_11d1_80b4_00c0_4fd4_30c9);

/// Unique identifier of an order. Callers may bring their own ids or ask the
/// book-keeping layer to mint one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct OrderId(pub Uuid);

impl OrderId {
    /// Generate a fresh random order id.
    pub fn new_uuid() -> Self {
        OrderId(Uuid::new_v4())
    }

    /// Derive a deterministic order id from an integer. Handy for tests and
    /// for intake layers that number orders sequentially.
    pub fn from_u64(value: u64) -> Self {
        OrderId(Uuid::new_v5(&ORDER_ID_NAMESPACE, &value.to_be_bytes()))
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for OrderId {
    fn from(uuid: Uuid) -> Self {
        OrderId(uuid)
    }
}

/// Which side of the book an order belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Buy side (bids)
    Buy,
    /// Sell side (asks)
    Sell,
}

impl Side {
    /// Get the opposite side, i.e. the side an incoming order matches against.
    pub fn opposite(&self) -> Side {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// A resting or in-flight order. Prices and quantities are integer tick
/// counts; the book never compares floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier of this order
    pub id: OrderId,

    /// Buy or Sell
    pub side: Side,

    /// Limit price in ticks, strictly positive
    pub price: u64,

    /// Quantity the order was admitted with
    pub original_quantity: u64,

    /// Quantity still open. `0 < remaining <= original` while resting; an
    /// order that reaches zero is removed from every structure.
    pub remaining_quantity: u64,

    /// Arrival sequence number, the FIFO tie-break within a price level
    pub sequence: u64,

    /// Wall-clock admission time in milliseconds since epoch, for audit only
    pub timestamp: u64,
}

impl Order {
    /// Quantity already executed against this order.
    pub fn filled_quantity(&self) -> u64 {
        self.original_quantity - self.remaining_quantity
    }

    /// True once the order has no open quantity left.
    pub fn is_filled(&self) -> bool {
        self.remaining_quantity == 0
    }
}
