//! Order service — placement and the status state machine.
//!
//! DESIGN
//! ======
//! Placing an order drains the cart and snapshots each line's name and unit
//! price, so later catalog edits never rewrite order history. Status moves
//! along `Pending → Processing → Shipped → Delivered`; cancellation is only
//! reachable from `Pending` (the storefront only ever offers cancel on
//! pending orders). `Delivered` and `Cancelled` are terminal.

#[cfg(test)]
#[path = "order_test.rs"]
mod order_test;

use catalog::ProductId;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::state::AppState;

// =============================================================================
// TYPES
// =============================================================================

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Placed, not yet picked up by fulfillment. The only cancellable state.
    Pending,
    /// Being prepared.
    Processing,
    /// Handed to the carrier.
    Shipped,
    /// Terminal: received by the customer.
    Delivered,
    /// Terminal: cancelled while still pending.
    Cancelled,
}

impl OrderStatus {
    /// Whether this status may move directly to `next`.
    #[must_use]
    pub fn can_become(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Processing | Self::Cancelled)
                | (Self::Processing, Self::Shipped)
                | (Self::Shipped, Self::Delivered)
        )
    }

    /// Whether no further transitions are possible.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    /// Display label, as the storefront shows it.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// One line of a placed order, with name and price snapshotted at placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product: ProductId,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
}

/// A placed order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub lines: Vec<OrderLine>,
    pub total: f64,
    pub status: OrderStatus,
    pub placed_at: OffsetDateTime,
}

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("cannot place an order from an empty cart")]
    EmptyCart,
    #[error("order not found: {0}")]
    NotFound(Uuid),
    #[error("order cannot move from {} to {}", from.label(), to.label())]
    InvalidTransition {
        from: OrderStatus,
        to: OrderStatus,
    },
}

// =============================================================================
// PLACEMENT
// =============================================================================

/// Drain the cart into a new pending order and return its id.
///
/// # Errors
///
/// Returns [`OrderError::EmptyCart`] if there is nothing to order.
pub fn place_order(state: &mut AppState) -> Result<Uuid, OrderError> {
    if state.cart.lines.is_empty() {
        return Err(OrderError::EmptyCart);
    }
    let drained: Vec<_> = state.cart.lines.drain(..).collect();
    let lines: Vec<OrderLine> = drained
        .iter()
        .filter_map(|line| {
            state.catalog.get(line.product).map(|entry| OrderLine {
                product: line.product,
                name: entry.name.clone(),
                unit_price: entry.price,
                quantity: line.quantity,
            })
        })
        .collect();
    let total = lines.iter().map(|line| line.unit_price * f64::from(line.quantity)).sum();

    let order = Order {
        id: Uuid::new_v4(),
        lines,
        total,
        status: OrderStatus::Pending,
        placed_at: OffsetDateTime::now_utc(),
    };
    let id = order.id;
    tracing::info!(%id, total, "order placed");
    state.orders.orders.push(order);
    Ok(id)
}

// =============================================================================
// STATUS TRANSITIONS
// =============================================================================

/// Move an order to `next`, validating the transition.
///
/// # Errors
///
/// Returns [`OrderError::NotFound`] for an unknown id, or
/// [`OrderError::InvalidTransition`] when the move is not allowed.
pub fn update_status(state: &mut AppState, id: Uuid, next: OrderStatus) -> Result<(), OrderError> {
    let order = state
        .orders
        .orders
        .iter_mut()
        .find(|order| order.id == id)
        .ok_or(OrderError::NotFound(id))?;
    if !order.status.can_become(next) {
        return Err(OrderError::InvalidTransition { from: order.status, to: next });
    }
    tracing::info!(%id, from = order.status.label(), to = next.label(), "order status updated");
    order.status = next;
    Ok(())
}

/// Cancel a pending order.
///
/// # Errors
///
/// Same as [`update_status`]: unknown id, or the order is past `Pending`.
pub fn cancel_order(state: &mut AppState, id: Uuid) -> Result<(), OrderError> {
    update_status(state, id, OrderStatus::Cancelled)
}

// =============================================================================
// QUERIES
// =============================================================================

/// Look up an order by id.
#[must_use]
pub fn get_order(state: &AppState, id: Uuid) -> Option<&Order> {
    state.orders.orders.iter().find(|order| order.id == id)
}

/// All orders in placement order.
#[must_use]
pub fn orders(state: &AppState) -> &[Order] {
    &state.orders.orders
}
