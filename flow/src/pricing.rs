//! Derived figures for the price section of the publish wizard.
//!
//! Everything is recomputed from the raw field text on every change. Stored
//! values are never rounded; rounding happens only in [`PriceSummary`].

use crate::sanitize::parse_number;
use agromarket_core::currency::{COMMISSION_RATE, format_es_ve};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceBreakdown {
    pub price: f64,
    pub company_fee: f64,
    pub net_income: f64,
    /// Present only when the head count is positive.
    pub per_head: Option<f64>,
    /// Present only when `per_head` is and a weight was entered.
    pub per_kg: Option<f64>,
}

impl PriceBreakdown {
    /// `price`, `heads` and `weight` are the field texts as typed (after
    /// sanitizing). Unparsable text counts as zero.
    pub fn compute(price: &str, heads: &str, weight: &str) -> Self {
        let price_num = parse_number(price);
        let company_fee = price_num * COMMISSION_RATE;
        let head_count = parse_number(heads).trunc();

        let per_head = (head_count > 0.0).then(|| price_num / head_count);
        let per_kg = per_head
            .filter(|_| !weight.is_empty())
            .map(|_| price_num / (head_count * parse_number(weight)))
            .filter(|v| v.is_finite());

        Self {
            price: price_num,
            company_fee,
            net_income: price_num - company_fee,
            per_head,
            per_kg,
        }
    }

    /// The per-unit rows are shown only for a positive price.
    pub fn shows_unit_rows(&self) -> bool {
        self.price > 0.0 && self.per_head.is_some()
    }

    pub fn summary(&self, currency: &str) -> PriceSummary {
        let unit_rows = self.shows_unit_rows();
        PriceSummary {
            company_fee: format!("-{currency} {}", format_es_ve(self.company_fee, 2)),
            net_income: format!("{currency} {}", format_es_ve(self.net_income, 2)),
            per_head: self
                .per_head
                .filter(|_| unit_rows)
                .map(|v| format!("{currency} {v:.0}")),
            per_kg: self
                .per_kg
                .filter(|_| unit_rows)
                .map(|v| format!("{currency} {v:.2}")),
        }
    }
}

/// Display strings for the price section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceSummary {
    pub company_fee: String,
    pub net_income: String,
    pub per_head: Option<String>,
    pub per_kg: Option<String>,
}
