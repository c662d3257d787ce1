//! AgroMarket Flow - Screen Logic Layer
//!
//! State machines and derived values behind every screen:
//! - `FilterState`: browse filters, search commit rule and list epoch
//! - `PublishForm`: five-section listing wizard and its price breakdown
//! - `TransactionsScreen`: orders, progress tracker and per-order chat
//!
//! **IMPORTANT**: This layer is Pure Rust - no IO, no Async. Timing (the
//! search debounce) lives in `agromarket-runtime`.

pub mod auth_form;
pub mod chat;
pub mod faq;
pub mod filter;
pub mod normalize;
pub mod pricing;
pub mod profile;
pub mod publish;
pub mod sanitize;
pub mod tracker;
pub mod transactions;

pub use chat::ChatPanel;
pub use filter::FilterState;
pub use pricing::{PriceBreakdown, PriceSummary};
pub use publish::{ListingDraft, PublishError, PublishForm};
pub use sanitize::{NumericMode, sanitize};
pub use tracker::Tracker;
pub use transactions::TransactionsScreen;

pub mod prelude {
    pub use crate::auth_form::{AuthTab, SignInForm, SubmitOutcome};
    pub use crate::chat::ChatPanel;
    pub use crate::faq::HelpScreen;
    pub use crate::filter::FilterState;
    pub use crate::normalize::clean_type;
    pub use crate::pricing::{PriceBreakdown, PriceSummary};
    pub use crate::profile::{Star, UserProfile};
    pub use crate::publish::{Currency, ListingDraft, PublishError, PublishForm, Section};
    pub use crate::sanitize::{NumericMode, parse_number, sanitize};
    pub use crate::tracker::Tracker;
    pub use crate::transactions::{MainTab, SubTab, TransactionsScreen};
}
