use super::view_model::ColumnKey;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Page size choices offered by the rows-per-page selector
pub const PAGE_SIZES: [usize; 4] = [10, 20, 50, 100];

/// At most this many columns can be pinned to the left edge
pub const MAX_FROZEN_COLUMNS: usize = 3;

/// Mutually exclusive one-click preset narrowing the order list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuickFilter {
    /// Orders placed within the last 24 hours
    New,
    Unpaid,
    /// Delivery still pending
    Pending,
    Paid,
}

/// Active ordering of the grid.
///
/// `Newest` is the default (order date descending) so freshly created
/// orders surface first; an explicit column sort replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Newest,
    By { key: ColumnKey, ascending: bool },
}

impl SortOrder {
    /// The explicitly sorted column, if any
    pub fn active(&self) -> Option<(ColumnKey, bool)> {
        match *self {
            SortOrder::Newest => None,
            SortOrder::By { key, ascending } => Some((key, ascending)),
        }
    }
}

/// Everything the orders grid derives its visible page from.
///
/// Owned by the presentation layer as a single signal; every mutation goes
/// through the methods below, which encode the pagination-reset and cap
/// rules. The struct is serializable so a session's view can be persisted
/// or inspected as plain data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdersViewState {
    /// Per-column substring filters; a missing key means no filter
    pub filters: BTreeMap<ColumnKey, String>,
    pub global_search: String,
    pub quick_filter: Option<QuickFilter>,
    /// Payment-date range bounds as YYYY-MM-DD input values; applied only
    /// when both parse
    pub date_from: String,
    pub date_to: String,
    pub sort: SortOrder,
    /// Pinned columns in the order they were frozen
    pub frozen: Vec<ColumnKey>,
    /// 0-based page index
    pub page: usize,
    pub page_size: usize,
}

impl Default for OrdersViewState {
    fn default() -> Self {
        Self {
            filters: BTreeMap::new(),
            global_search: String::new(),
            quick_filter: None,
            date_from: String::new(),
            date_to: String::new(),
            sort: SortOrder::Newest,
            frozen: vec![ColumnKey::OrderNo],
            page: 0,
            page_size: PAGE_SIZES[0],
        }
    }
}

impl OrdersViewState {
    /// Sets (or clears, when the value is empty) the substring filter for a
    /// column and returns to the first page.
    pub fn set_filter(&mut self, key: ColumnKey, value: String) {
        if value.trim().is_empty() {
            self.filters.remove(&key);
        } else {
            self.filters.insert(key, value);
        }
        self.page = 0;
    }

    pub fn clear_filter(&mut self, key: ColumnKey) {
        self.filters.remove(&key);
        self.page = 0;
    }

    pub fn set_global_search(&mut self, text: String) {
        self.global_search = text;
        self.page = 0;
    }

    /// Replaces any prior preset; the presets never combine.
    pub fn set_quick_filter(&mut self, quick: Option<QuickFilter>) {
        self.quick_filter = quick;
        self.page = 0;
    }

    pub fn set_date_range(&mut self, from: String, to: String) {
        self.date_from = from;
        self.date_to = to;
        self.page = 0;
    }

    /// Clicking the sorted column again flips direction; clicking another
    /// sortable column starts ascending. Non-sortable columns are ignored.
    pub fn toggle_sort(&mut self, key: ColumnKey) {
        if !key.is_sortable() {
            return;
        }
        self.sort = match self.sort {
            SortOrder::By { key: current, ascending } if current == key => SortOrder::By {
                key,
                ascending: !ascending,
            },
            _ => SortOrder::By {
                key,
                ascending: true,
            },
        };
    }

    /// Unpins a frozen column, or pins an unfrozen one unless the cap is
    /// already reached (then a no-op).
    pub fn toggle_frozen(&mut self, key: ColumnKey) {
        if let Some(pos) = self.frozen.iter().position(|k| *k == key) {
            self.frozen.remove(pos);
        } else if self.frozen.len() < MAX_FROZEN_COLUMNS {
            self.frozen.push(key);
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Only the fixed page-size choices are accepted.
    pub fn set_page_size(&mut self, size: usize) {
        if PAGE_SIZES.contains(&size) {
            self.page_size = size;
            self.page = 0;
        }
    }
}

/// Create state signal
pub fn create_state() -> RwSignal<OrdersViewState> {
    RwSignal::new(OrdersViewState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_changes_reset_pagination() {
        let mut state = OrdersViewState::default();
        state.page = 4;
        state.set_filter(ColumnKey::Category, "Art".to_string());
        assert_eq!(state.page, 0);
        assert_eq!(state.filters.get(&ColumnKey::Category).map(String::as_str), Some("Art"));

        state.page = 2;
        state.clear_filter(ColumnKey::Category);
        assert_eq!(state.page, 0);
        assert!(state.filters.is_empty());
    }

    #[test]
    fn empty_filter_value_clears_the_column() {
        let mut state = OrdersViewState::default();
        state.set_filter(ColumnKey::Source, "Instagram".to_string());
        state.set_filter(ColumnKey::Source, "  ".to_string());
        assert!(state.filters.is_empty());
    }

    #[test]
    fn quick_filter_replaces_prior_preset() {
        let mut state = OrdersViewState::default();
        state.set_quick_filter(Some(QuickFilter::Unpaid));
        state.set_quick_filter(Some(QuickFilter::Paid));
        assert_eq!(state.quick_filter, Some(QuickFilter::Paid));

        state.page = 3;
        state.set_quick_filter(None);
        assert_eq!(state.quick_filter, None);
        assert_eq!(state.page, 0);
    }

    #[test]
    fn sort_toggles_direction_on_repeated_clicks() {
        let mut state = OrdersViewState::default();
        state.toggle_sort(ColumnKey::Amount);
        assert_eq!(
            state.sort,
            SortOrder::By { key: ColumnKey::Amount, ascending: true }
        );
        state.toggle_sort(ColumnKey::Amount);
        assert_eq!(
            state.sort,
            SortOrder::By { key: ColumnKey::Amount, ascending: false }
        );
        // A different column restarts ascending
        state.toggle_sort(ColumnKey::CustomerName);
        assert_eq!(
            state.sort,
            SortOrder::By { key: ColumnKey::CustomerName, ascending: true }
        );
    }

    #[test]
    fn non_sortable_columns_ignore_sort_clicks() {
        let mut state = OrdersViewState::default();
        state.toggle_sort(ColumnKey::Actions);
        assert_eq!(state.sort, SortOrder::Newest);
        state.toggle_sort(ColumnKey::DeliveryStatus);
        assert_eq!(state.sort, SortOrder::Newest);
    }

    #[test]
    fn frozen_columns_cap_at_three() {
        let mut state = OrdersViewState::default();
        assert_eq!(state.frozen, vec![ColumnKey::OrderNo]);

        state.toggle_frozen(ColumnKey::CustomerName);
        state.toggle_frozen(ColumnKey::Amount);
        assert_eq!(
            state.frozen,
            vec![ColumnKey::OrderNo, ColumnKey::CustomerName, ColumnKey::Amount]
        );

        // Cap reached: freezing a fourth column is a no-op
        state.toggle_frozen(ColumnKey::Product);
        assert_eq!(state.frozen.len(), 3);

        // Unfreezing an already frozen column always works
        state.toggle_frozen(ColumnKey::CustomerName);
        assert_eq!(state.frozen, vec![ColumnKey::OrderNo, ColumnKey::Amount]);
    }

    #[test]
    fn page_size_accepts_only_fixed_choices() {
        let mut state = OrdersViewState::default();
        state.page = 2;
        state.set_page_size(50);
        assert_eq!(state.page_size, 50);
        assert_eq!(state.page, 0);

        state.set_page(1);
        state.set_page_size(33);
        assert_eq!(state.page_size, 50);
        assert_eq!(state.page, 1);
    }
}
