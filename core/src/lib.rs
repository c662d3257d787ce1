//! AgroMarket core: the data every screen shares.
//!
//! - listings, orders and chat messages
//! - closed taxonomies (types, categories, locations, breed groups)
//! - seed data, currency display, the resource [`Bus`]
//! - configuration, telemetry and the mock auth provider

pub mod auth;
pub mod bus;
pub mod config;
pub mod currency;
pub mod error;
pub mod listing;
pub mod order;
pub mod seed;
pub mod taxonomy;
pub mod telemetry;

pub use bus::{Bus, ColorScheme};
pub use error::{CoreError, CoreResult};
pub use listing::{Catalog, MarketItem};
pub use order::{ChatMessage, Order, OrderKind, OrderStatus};
pub use taxonomy::BreedGroup;

pub mod prelude {
    pub use crate::auth::{AuthProvider, AuthSnapshot, Role, User};
    pub use crate::bus::{Bus, ColorScheme};
    pub use crate::config::{AppConfig, Preference, Preferences};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::listing::{Catalog, MarketItem};
    pub use crate::order::{ChatMessage, Order, OrderKind, OrderStatus};
    pub use crate::taxonomy::{ALL_TYPES, BreedGroup, Field};
}
