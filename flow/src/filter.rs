//! Listing filter engine for the browse screen.
//!
//! [`FilterState`] holds every predicate and the epoch counter. It is pure:
//! the search debounce timer lives in the runtime crate, which calls
//! [`FilterState::set_search_text`] on each keystroke and
//! [`FilterState::commit_search`] when the timer fires.
//!
//! Two filter modes never combine. Choosing a type clears the advanced
//! filters (category, location, breed) and the search text. Choosing an
//! advanced filter resets the type to [`ALL_TYPES`] and clears the search text.

use crate::normalize::clean_type;
use agromarket_core::MarketItem;
use agromarket_core::taxonomy::{ALL_TYPES, BreedGroup};
use tracing::debug;

/// Committed search texts of this many chars or fewer (but non-empty) update
/// the predicate without re-animating the list.
const SILENT_COMMIT_MAX_CHARS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    search_text: String,
    debounced_search: String,
    selected_type: String,
    category: Option<String>,
    location: Option<String>,
    breed_group: Option<BreedGroup>,
    breed: Option<String>,
    epoch: u64,
    first_commit_seen: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            debounced_search: String::new(),
            selected_type: ALL_TYPES.to_string(),
            category: None,
            location: None,
            breed_group: None,
            breed: None,
            epoch: 0,
            first_commit_seen: false,
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// The search text currently used as a predicate.
    pub fn debounced_search(&self) -> &str {
        &self.debounced_search
    }

    pub fn selected_type(&self) -> &str {
        &self.selected_type
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn breed_group(&self) -> Option<BreedGroup> {
        self.breed_group
    }

    pub fn breed(&self) -> Option<&str> {
        self.breed.as_deref()
    }

    /// Opaque counter bumped whenever the visible set should re-animate.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// True when the search box holds text the predicate has not caught up with.
    pub fn has_pending_search(&self) -> bool {
        self.search_text != self.debounced_search
    }

    /// Whether the mount-time commit has happened.
    pub fn initial_commit_done(&self) -> bool {
        self.first_commit_seen
    }

    /// Category, location or breed is set. Type and search do not count.
    pub fn has_active_filters(&self) -> bool {
        self.category.is_some() || self.location.is_some() || self.breed.is_some()
    }

    /// Raw keystroke. Only the search box changes; the predicate waits for
    /// [`FilterState::commit_search`].
    pub fn set_search_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.search_text {
            return false;
        }
        self.search_text = text;
        true
    }

    /// Empties the search box. The empty text is committed by the debounce
    /// like any other keystroke.
    pub fn clear_search_text(&mut self) -> bool {
        self.set_search_text(String::new())
    }

    /// Debounce fired with `text`. Returns whether the epoch was bumped.
    ///
    /// The first commit after mount never bumps. Later commits bump only for
    /// an empty text or one longer than two chars.
    pub fn commit_search(&mut self, text: impl Into<String>) -> bool {
        self.debounced_search = text.into();
        if !self.first_commit_seen {
            self.first_commit_seen = true;
            debug!(search = %self.debounced_search, "initial search commit");
            return false;
        }
        let len = self.debounced_search.chars().count();
        if len == 0 || len > SILENT_COMMIT_MAX_CHARS {
            self.bump("search");
            true
        } else {
            debug!(search = %self.debounced_search, "short search committed without re-animation");
            false
        }
    }

    /// Selects a type chip. Re-selecting the active type is a no-op.
    pub fn select_type(&mut self, value: &str) -> bool {
        if value == self.selected_type {
            return false;
        }
        self.selected_type = value.to_string();
        if value != ALL_TYPES {
            self.clear_search_predicate();
            self.clear_advanced();
        }
        self.bump("type");
        true
    }

    /// `None` clears the category. Re-selecting the active value is a no-op.
    pub fn select_category(&mut self, value: Option<&str>) -> bool {
        if value == self.category.as_deref() {
            return false;
        }
        self.enter_advanced_mode();
        self.category = value.map(str::to_string);
        self.bump("category");
        true
    }

    /// `None` clears the location. Re-selecting the active value is a no-op.
    pub fn select_location(&mut self, value: Option<&str>) -> bool {
        if value == self.location.as_deref() {
            return false;
        }
        self.enter_advanced_mode();
        self.location = value.map(str::to_string);
        self.bump("location");
        true
    }

    /// `None` clears the breed. A known breed also selects its group, so the
    /// breed always belongs to the selected group's list.
    pub fn select_breed(&mut self, value: Option<&str>) -> bool {
        if value == self.breed.as_deref() {
            return false;
        }
        self.enter_advanced_mode();
        if let Some(group) = value.and_then(BreedGroup::of_breed) {
            self.breed_group = Some(group);
        }
        self.breed = value.map(str::to_string);
        self.bump("breed");
        true
    }

    /// Opens `group`, or closes it if already open. Always drops the breed.
    pub fn toggle_breed_group(&mut self, group: BreedGroup) {
        self.breed_group = if self.breed_group == Some(group) {
            None
        } else {
            Some(group)
        };
        if self.breed.take().is_some() {
            self.bump("breed group");
        }
    }

    /// Focusing the search box leaves advanced mode but keeps the text.
    pub fn focus_search(&mut self) -> bool {
        let changed = self.selected_type != ALL_TYPES || self.has_active_filters();
        self.selected_type = ALL_TYPES.to_string();
        self.clear_advanced();
        if changed {
            self.bump("search focus");
        }
        changed
    }

    /// Clears every predicate except the search text.
    pub fn reset(&mut self) -> bool {
        let changed = self.selected_type != ALL_TYPES
            || self.has_active_filters()
            || self.breed_group.is_some();
        self.selected_type = ALL_TYPES.to_string();
        self.clear_advanced();
        if changed {
            self.bump("reset");
        }
        changed
    }

    /// True when `item` satisfies every active predicate.
    pub fn matches(&self, item: &MarketItem) -> bool {
        let search = self.debounced_search.trim().to_lowercase();
        self.matches_with(item, &search, &clean_type(&self.selected_type))
    }

    /// Visible subset of `items`, in collection order.
    pub fn apply<'a>(&self, items: &'a [MarketItem]) -> Vec<&'a MarketItem> {
        let search = self.debounced_search.trim().to_lowercase();
        let wanted_type = clean_type(&self.selected_type);
        items
            .iter()
            .filter(|item| self.matches_with(item, &search, &wanted_type))
            .collect()
    }

    fn matches_with(&self, item: &MarketItem, search: &str, wanted_type: &str) -> bool {
        if !search.is_empty() && !item.title.to_lowercase().contains(search) {
            return false;
        }
        if self.selected_type != ALL_TYPES && clean_type(&item.kind) != wanted_type {
            return false;
        }
        if self.category.as_ref().is_some_and(|c| *c != item.category) {
            return false;
        }
        if self.breed.as_ref().is_some_and(|b| *b != item.breed) {
            return false;
        }
        if self.location.as_ref().is_some_and(|l| *l != item.location) {
            return false;
        }
        true
    }

    fn enter_advanced_mode(&mut self) {
        self.selected_type = ALL_TYPES.to_string();
        self.clear_search_predicate();
    }

    /// Clears the box and the predicate together so a stale search never
    /// combines with the new filter mode.
    fn clear_search_predicate(&mut self) {
        self.search_text.clear();
        self.debounced_search.clear();
    }

    fn clear_advanced(&mut self) {
        self.category = None;
        self.location = None;
        self.breed_group = None;
        self.breed = None;
    }

    fn bump(&mut self, cause: &'static str) {
        self.epoch = self.epoch.wrapping_add(1);
        debug!(cause, epoch = self.epoch, "filters changed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agromarket_core::seed;

    fn mounted() -> FilterState {
        let mut state = FilterState::new();
        state.commit_search("");
        state
    }

    fn ids(items: &[&MarketItem]) -> Vec<u32> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_no_predicates_returns_everything() {
        let catalog = seed::catalog();
        let state = FilterState::new();
        assert_eq!(state.apply(&catalog).len(), catalog.len());
    }

    #[test]
    fn test_result_is_ordered_subset() {
        let catalog = seed::catalog();
        let mut state = mounted();
        state.select_type("Hembras");
        let visible = state.apply(&catalog);
        let visible_ids = ids(&visible);

        let mut sorted = visible_ids.clone();
        sorted.sort_unstable();
        assert_eq!(visible_ids, sorted);
        assert!(visible.iter().all(|i| catalog.contains(i)));
    }

    #[test]
    fn test_type_filter_normalizes() {
        let catalog = seed::catalog();
        let mut state = mounted();

        state.select_type("Machos");
        let visible = state.apply(&catalog);
        // "Macho" (singular) in the seed data matches the plural chip
        assert!(visible.iter().any(|i| i.kind == "Macho"));
        assert!(visible.iter().all(|i| clean_type(&i.kind) == "macho"));

        state.select_type("Cría");
        let visible = state.apply(&catalog);
        assert!(visible.iter().any(|i| i.kind == "Crías"));
        assert!(visible.iter().any(|i| i.kind == "Cría"));
    }

    #[test]
    fn test_search_is_case_insensitive_on_title() {
        let catalog = seed::catalog();
        let mut state = mounted();
        state.set_search_text("TORO");
        state.commit_search("TORO");
        let visible = state.apply(&catalog);
        assert!(!visible.is_empty());
        assert!(visible.iter().all(|i| i.title.to_lowercase().contains("toro")));
    }

    #[test]
    fn test_empty_result() {
        let catalog = seed::catalog();
        let mut state = mounted();
        state.set_search_text("zzzzz");
        state.commit_search("zzzzz");
        assert!(state.apply(&catalog).is_empty());
    }

    #[test]
    fn test_reselecting_is_a_no_op() {
        let mut state = mounted();
        assert!(state.select_category(Some("Becerros")));
        let before = state.clone();

        assert!(!state.select_category(Some("Becerros")));
        assert!(!state.select_type(ALL_TYPES));
        assert_eq!(state, before);

        assert!(state.select_type("Machos"));
        let before = state.clone();
        assert!(!state.select_type("Machos"));
        assert_eq!(state, before);
    }

    #[test]
    fn test_advanced_filter_resets_type_and_search() {
        let mut state = mounted();
        state.select_type("Hembras");
        state.set_search_text("vaca");
        state.commit_search("vaca");

        state.select_location(Some("Lara"));
        assert_eq!(state.selected_type(), ALL_TYPES);
        assert_eq!(state.search_text(), "");
        assert_eq!(state.debounced_search(), "");
        assert_eq!(state.location(), Some("Lara"));
    }

    #[test]
    fn test_type_clears_advanced_and_search() {
        let mut state = mounted();
        state.select_category(Some("Vacas"));
        state.select_breed(Some("Holstein"));
        state.select_location(Some("Lara"));
        state.set_search_text("lote");

        state.select_type("Hembras");
        assert!(!state.has_active_filters());
        assert_eq!(state.breed_group(), None);
        assert_eq!(state.search_text(), "");
    }

    #[test]
    fn test_selecting_all_types_only_changes_type() {
        let mut state = mounted();
        state.select_type("Machos");
        state.set_search_text("ceba");

        assert!(state.select_type(ALL_TYPES));
        assert_eq!(state.selected_type(), ALL_TYPES);
        assert_eq!(state.search_text(), "ceba");
    }

    #[test]
    fn test_epoch_counts_real_changes() {
        let mut state = mounted();
        let e0 = state.epoch();
        state.select_category(Some("Vacas"));
        state.select_category(Some("Vacas"));
        state.select_category(None);
        state.select_category(None);
        assert_eq!(state.epoch(), e0 + 2);
    }

    #[test]
    fn test_first_commit_does_not_bump() {
        let mut state = FilterState::new();
        assert!(!state.commit_search(""));
        assert_eq!(state.epoch(), 0);
        assert!(state.commit_search("toro"));
        assert_eq!(state.epoch(), 1);
    }

    #[test]
    fn test_short_commits_do_not_bump() {
        let mut state = mounted();
        assert!(!state.commit_search("to"));
        assert_eq!(state.debounced_search(), "to");
        assert!(state.commit_search("tor"));
        assert!(state.commit_search(""));
        assert_eq!(state.epoch(), 2);
    }

    #[test]
    fn test_reset_keeps_search() {
        let mut state = mounted();
        state.select_category(Some("Becerros"));
        state.set_search_text("toro");

        assert!(state.reset());
        assert_eq!(state.category(), None);
        assert_eq!(state.search_text(), "toro");
        assert!(!state.reset());
    }

    #[test]
    fn test_breed_group_toggle_clears_breed() {
        let mut state = mounted();
        state.select_breed(Some("Nelore"));
        assert_eq!(state.breed_group(), Some(BreedGroup::Cebu));

        let epoch = state.epoch();
        state.toggle_breed_group(BreedGroup::Lecheras);
        assert_eq!(state.breed_group(), Some(BreedGroup::Lecheras));
        assert_eq!(state.breed(), None);
        assert_eq!(state.epoch(), epoch + 1);

        state.toggle_breed_group(BreedGroup::Lecheras);
        assert_eq!(state.breed_group(), None);
        assert_eq!(state.epoch(), epoch + 1);
    }

    #[test]
    fn test_focus_search_leaves_advanced_mode() {
        let mut state = mounted();
        state.select_category(Some("Vacas"));
        state.set_search_text("hol");
        assert!(state.focus_search());
        assert!(!state.has_active_filters());
        assert_eq!(state.search_text(), "hol");
        assert!(!state.focus_search());
    }

    #[test]
    fn test_has_active_filters_ignores_type() {
        let mut state = mounted();
        state.select_type("Machos");
        assert!(!state.has_active_filters());
        state.select_breed(Some("Brahman"));
        assert!(state.has_active_filters());
    }

    #[test]
    fn test_combined_advanced_predicates() {
        let catalog = seed::catalog();
        let mut state = mounted();
        state.select_category(Some("Becerros"));
        state.select_location(Some("Zulia"));
        let visible = state.apply(&catalog);
        assert_eq!(ids(&visible), vec![1]);
        assert!(state.matches(visible[0]));
    }
}
