//! Publish-listing wizard.
//!
//! Five sections filled in order. Numeric fields go through the sanitizer on
//! every keystroke and the price breakdown is recomputed from the raw text.
//! Submission is gated only on a non-empty title and price.

use crate::pricing::{PriceBreakdown, PriceSummary};
use crate::sanitize::{NumericMode, parse_number, sanitize};
use agromarket_core::CoreError;
use agromarket_core::taxonomy::{BreedGroup, CATEGORIES, Field, LOCATIONS, TYPES};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PublishError {
    #[error("title is required")]
    MissingTitle,
    #[error("price is required")]
    MissingPrice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Section {
    Multimedia,
    Info,
    Breed,
    Location,
    Price,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Multimedia,
        Section::Info,
        Section::Breed,
        Section::Location,
        Section::Price,
    ];

    /// One-based number shown in the step indicator.
    pub fn number(&self) -> usize {
        *self as usize + 1
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Multimedia => "Multimedia",
            Section::Info => "Información",
            Section::Breed => "Raza",
            Section::Location => "Ubicación",
            Section::Price => "Precio",
        }
    }

    fn next(&self) -> Option<Section> {
        Self::ALL.get(*self as usize + 1).copied()
    }

    fn prev(&self) -> Option<Section> {
        (*self as usize).checked_sub(1).map(|i| Self::ALL[i])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StepMark {
    Done,
    Active,
    Pending,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "VES")]
    Ves,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Ves => "VES",
        }
    }
}

/// Accepted submission, ready to be sent for validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingDraft {
    pub draft_id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    pub breed_group: BreedGroup,
    pub breed: String,
    pub heads: u32,
    pub weight: f64,
    pub location: String,
    pub currency: Currency,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PublishForm {
    section: Section,
    title: String,
    description: String,
    kind: &'static str,
    category: &'static str,
    breed_group: BreedGroup,
    breed: &'static str,
    heads: String,
    weight: String,
    location: &'static str,
    currency: Currency,
    price: String,
}

impl Default for PublishForm {
    fn default() -> Self {
        let breed_group = BreedGroup::Cebu;
        Self {
            section: Section::Multimedia,
            title: String::new(),
            description: String::new(),
            kind: TYPES[1],
            category: CATEGORIES[0],
            breed_group,
            breed: breed_group.default_breed(),
            heads: String::new(),
            weight: String::new(),
            location: LOCATIONS[0],
            currency: Currency::default(),
            price: String::new(),
        }
    }
}

impl PublishForm {
    pub fn new() -> Self {
        Self::default()
    }

    // --- navigation ---

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn go_to(&mut self, section: Section) {
        self.section = section;
    }

    /// Moves forward; returns `false` on the last section.
    pub fn advance(&mut self) -> bool {
        match self.section.next() {
            Some(next) => {
                self.section = next;
                true
            }
            None => false,
        }
    }

    pub fn back(&mut self) -> bool {
        match self.section.prev() {
            Some(prev) => {
                self.section = prev;
                true
            }
            None => false,
        }
    }

    pub fn step_marks(&self) -> [(Section, StepMark); 5] {
        Section::ALL.map(|s| {
            let mark = match s.cmp(&self.section) {
                std::cmp::Ordering::Less => StepMark::Done,
                std::cmp::Ordering::Equal => StepMark::Active,
                std::cmp::Ordering::Greater => StepMark::Pending,
            };
            (s, mark)
        })
    }

    // --- free text ---

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.title = value.into();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
    }

    // --- pickers ---

    pub fn kind(&self) -> &str {
        self.kind
    }

    pub fn category(&self) -> &str {
        self.category
    }

    pub fn location(&self) -> &str {
        self.location
    }

    /// Picker selection for a closed-list field.
    pub fn select(&mut self, field: Field, value: &str) -> Result<(), CoreError> {
        let value = field.resolve(value)?;
        match field {
            Field::Type => self.kind = value,
            Field::Category => self.category = value,
            Field::Location => self.location = value,
        }
        Ok(())
    }

    pub fn breed_group(&self) -> BreedGroup {
        self.breed_group
    }

    pub fn breed(&self) -> &str {
        self.breed
    }

    /// Changing the group resets the breed to the group's first breed.
    pub fn set_breed_group(&mut self, group: BreedGroup) {
        self.breed_group = group;
        self.breed = group.default_breed();
    }

    /// Breed picker; only breeds of the current group are offered.
    pub fn select_breed(&mut self, breed: &str) -> Result<(), CoreError> {
        let found = self
            .breed_group
            .breeds()
            .iter()
            .copied()
            .find(|b| *b == breed)
            .ok_or_else(|| CoreError::UnknownValue {
                kind: "breed",
                value: breed.to_string(),
            })?;
        self.breed = found;
        Ok(())
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn set_currency(&mut self, currency: Currency) {
        self.currency = currency;
    }

    // --- numeric fields ---

    pub fn heads(&self) -> &str {
        &self.heads
    }

    pub fn weight(&self) -> &str {
        &self.weight
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn set_heads(&mut self, raw: &str) {
        self.heads = sanitize(raw, NumericMode::Integer);
    }

    pub fn set_weight(&mut self, raw: &str) {
        self.weight = sanitize(raw, NumericMode::Decimal);
    }

    pub fn set_price(&mut self, raw: &str) {
        self.price = sanitize(raw, NumericMode::Decimal);
    }

    fn head_count(&self) -> u64 {
        self.heads.parse().unwrap_or(0)
    }

    pub fn increment_heads(&mut self) {
        let next = self.head_count().saturating_add(1);
        self.set_heads(&next.to_string());
    }

    /// Never goes below zero.
    pub fn decrement_heads(&mut self) {
        let next = self.head_count().saturating_sub(1);
        self.set_heads(&next.to_string());
    }

    // --- derived ---

    pub fn breakdown(&self) -> PriceBreakdown {
        PriceBreakdown::compute(&self.price, &self.heads, &self.weight)
    }

    pub fn price_summary(&self) -> PriceSummary {
        self.breakdown().summary(self.currency.code())
    }

    /// Title line of the live preview card.
    pub fn preview_title(&self) -> &str {
        if self.title.is_empty() {
            "Título de tu lote"
        } else {
            &self.title
        }
    }

    /// "12 cabezas · 350 Kg · Zulia"
    pub fn preview_details(&self) -> String {
        let or_zero = |s: &str| if s.is_empty() { "0".to_string() } else { s.to_string() };
        format!(
            "{} cabezas · {} Kg · {}",
            or_zero(&self.heads),
            or_zero(&self.weight),
            self.location
        )
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    fn validate(&self) -> Result<(), PublishError> {
        if self.title.is_empty() {
            return Err(PublishError::MissingTitle);
        }
        if self.price.is_empty() {
            return Err(PublishError::MissingPrice);
        }
        Ok(())
    }

    /// Runs the submission gate and builds the draft.
    pub fn submit(&self) -> Result<ListingDraft, PublishError> {
        if let Err(e) = self.validate() {
            warn!(error = %e, "publish blocked");
            return Err(e);
        }
        let draft = ListingDraft {
            draft_id: Uuid::new_v4(),
            title: self.title.clone(),
            description: self.description.clone(),
            kind: self.kind.to_string(),
            category: self.category.to_string(),
            breed_group: self.breed_group,
            breed: self.breed.to_string(),
            heads: u32::try_from(self.head_count()).unwrap_or(u32::MAX),
            weight: parse_number(&self.weight),
            location: self.location.to_string(),
            currency: self.currency,
            price: parse_number(&self.price),
        };
        info!(draft_id = %draft.draft_id, title = %draft.title, "listing submitted for validation");
        Ok(draft)
    }
}
