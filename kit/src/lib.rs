//! AgroMarket facade crate.
//!
//! Re-exports the core data model, the screen logic and the async runtime
//! behind a single entry point.

pub use agromarket_core as core;
pub use agromarket_flow as flow;
pub use agromarket_runtime as runtime;

pub use agromarket_core::{Bus, Catalog, MarketItem, Order, OrderStatus};
pub use agromarket_flow::{FilterState, PriceBreakdown, PublishForm, Tracker};
pub use agromarket_runtime::Session;

pub mod prelude {
    pub use agromarket_core::prelude::*;
    pub use agromarket_flow::prelude::*;
    pub use agromarket_runtime::prelude::*;
}
