use crate::currency;
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::sync::Arc;

/// A published lot of livestock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketItem {
    pub id: u32,
    pub title: String,
    /// USD per kg.
    pub price: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    pub breed: String,
    pub location: String,
    pub weight: String,
    pub age: String,
    pub condition: String,
    pub verified: bool,
    pub img: String,
}

impl MarketItem {
    /// Price per kg converted to bolívares, formatted for the card.
    pub fn price_in_bs(&self) -> String {
        format!("{:.2}", currency::to_bolivares(self.price))
    }
}

/// Immutable, cheaply clonable collection of listings.
///
/// Built once at start-up and shared by every screen that needs it.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Arc<[MarketItem]>,
}

impl Catalog {
    pub fn new(items: Vec<MarketItem>) -> Self {
        Self {
            items: items.into(),
        }
    }

    pub fn items(&self) -> &[MarketItem] {
        &self.items
    }

    pub fn get(&self, id: u32) -> Option<&MarketItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

impl Deref for Catalog {
    type Target = [MarketItem];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl From<Vec<MarketItem>> for Catalog {
    fn from(items: Vec<MarketItem>) -> Self {
        Self::new(items)
    }
}
