use super::state::{OrdersViewState, QuickFilter, SortOrder};
use crate::shared::list_utils::{sort_list, Sortable};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use contracts::domain::orders::Order;
use contracts::enums::{DeliveryStatus, PaymentStatus};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Closed set of grid columns, in canonical declared order.
///
/// `Actions` is synthetic (row buttons); it has no underlying order field,
/// never sorts and never takes part in search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ColumnKey {
    OrderNo,
    TrackingId,
    CustomerName,
    CustomerContact,
    Category,
    Product,
    Amount,
    PaymentMethod,
    PaymentStatus,
    PaymentDate,
    ProcessStatus,
    DeliveryStatus,
    Source,
    Note,
    Rating,
    Actions,
}

impl ColumnKey {
    pub const ALL: [ColumnKey; 16] = [
        ColumnKey::OrderNo,
        ColumnKey::TrackingId,
        ColumnKey::CustomerName,
        ColumnKey::CustomerContact,
        ColumnKey::Category,
        ColumnKey::Product,
        ColumnKey::Amount,
        ColumnKey::PaymentMethod,
        ColumnKey::PaymentStatus,
        ColumnKey::PaymentDate,
        ColumnKey::ProcessStatus,
        ColumnKey::DeliveryStatus,
        ColumnKey::Source,
        ColumnKey::Note,
        ColumnKey::Rating,
        ColumnKey::Actions,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ColumnKey::OrderNo => "Order ID",
            ColumnKey::TrackingId => "Tracking #",
            ColumnKey::CustomerName => "Customer",
            ColumnKey::CustomerContact => "Contact",
            ColumnKey::Category => "Category",
            ColumnKey::Product => "Product",
            ColumnKey::Amount => "Amount",
            ColumnKey::PaymentMethod => "Pay Method",
            ColumnKey::PaymentStatus => "Pay Status",
            ColumnKey::PaymentDate => "Pay Date",
            ColumnKey::ProcessStatus => "Process",
            ColumnKey::DeliveryStatus => "Delivery",
            ColumnKey::Source => "Source",
            ColumnKey::Note => "Note",
            ColumnKey::Rating => "Rating",
            ColumnKey::Actions => "Actions",
        }
    }

    /// Fixed column width in pixels; sticky offsets of frozen columns are
    /// computed from these.
    pub fn width(&self) -> u32 {
        match self {
            ColumnKey::OrderNo => 120,
            ColumnKey::TrackingId => 180,
            ColumnKey::CustomerName => 150,
            ColumnKey::CustomerContact => 120,
            ColumnKey::Category => 120,
            ColumnKey::Product => 200,
            ColumnKey::Amount => 100,
            ColumnKey::PaymentMethod => 120,
            ColumnKey::PaymentStatus => 120,
            ColumnKey::PaymentDate => 120,
            ColumnKey::ProcessStatus => 120,
            ColumnKey::DeliveryStatus => 120,
            ColumnKey::Source => 120,
            ColumnKey::Note => 200,
            ColumnKey::Rating => 100,
            ColumnKey::Actions => 150,
        }
    }

    pub fn is_sortable(&self) -> bool {
        matches!(
            self,
            ColumnKey::OrderNo
                | ColumnKey::CustomerName
                | ColumnKey::CustomerContact
                | ColumnKey::TrackingId
                | ColumnKey::Product
                | ColumnKey::Amount
                | ColumnKey::PaymentDate
        )
    }

    /// Columns the global search looks at — every real column; the
    /// synthetic Actions column carries no data.
    pub fn is_searchable(&self) -> bool {
        !matches!(self, ColumnKey::Actions)
    }

    /// Dropdown options for columns filtered from a fixed vocabulary
    pub fn filter_options(&self) -> Option<&'static [&'static str]> {
        match self {
            ColumnKey::DeliveryStatus => Some(&["Pending", "Shipped", "Delivered", "Cancelled"]),
            ColumnKey::PaymentMethod => Some(&["Credit Card", "PayPal", "COD"]),
            ColumnKey::PaymentStatus => Some(&["Paid", "Unpaid"]),
            ColumnKey::ProcessStatus => Some(&["production", "in_transit", "delay"]),
            ColumnKey::Source => Some(&["Instagram", "Facebook", "WhatsApp", "Website"]),
            ColumnKey::Category => Some(&["Home Decor", "Art", "Furniture", "Textiles"]),
            ColumnKey::Rating => Some(&["1", "2", "3", "4", "5"]),
            _ => None,
        }
    }

    /// Stringified field value used by substring filters and the global
    /// search. `None` means the order has no value in this column, which
    /// never matches an active filter.
    pub fn field_text(&self, order: &Order) -> Option<String> {
        match self {
            ColumnKey::OrderNo => Some(order.order_no.clone()),
            ColumnKey::TrackingId => order.tracking_id.clone(),
            ColumnKey::CustomerName => Some(order.customer_name.clone()),
            ColumnKey::CustomerContact => Some(order.customer_contact.clone()),
            ColumnKey::Category => Some(order.category.clone()),
            ColumnKey::Product => Some(order.product.clone()),
            ColumnKey::Amount => Some(format!("{:.2}", order.amount)),
            ColumnKey::PaymentMethod => Some(order.payment_method.clone()),
            ColumnKey::PaymentStatus => Some(order.payment_status.code().to_string()),
            ColumnKey::PaymentDate => order.payment_date.map(|d| d.to_rfc3339()),
            ColumnKey::ProcessStatus => Some(order.process_status.code().to_string()),
            ColumnKey::DeliveryStatus => Some(order.delivery_status.code().to_string()),
            ColumnKey::Source => Some(order.source.code().to_string()),
            ColumnKey::Note => order.note.clone(),
            ColumnKey::Rating => order.rating.map(|r| r.to_string()),
            ColumnKey::Actions => None,
        }
    }
}

fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn cmp_opt_text(a: &Option<String>, b: &Option<String>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp_text(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl Sortable<ColumnKey> for Order {
    fn compare_by(&self, other: &Self, key: ColumnKey) -> Ordering {
        match key {
            ColumnKey::OrderNo => cmp_text(&self.order_no, &other.order_no),
            ColumnKey::CustomerName => cmp_text(&self.customer_name, &other.customer_name),
            ColumnKey::CustomerContact => {
                cmp_text(&self.customer_contact, &other.customer_contact)
            }
            ColumnKey::TrackingId => cmp_opt_text(&self.tracking_id, &other.tracking_id),
            ColumnKey::Product => cmp_text(&self.product, &other.product),
            ColumnKey::Amount => self
                .amount
                .partial_cmp(&other.amount)
                .unwrap_or(Ordering::Equal),
            ColumnKey::PaymentDate => match (&self.payment_date, &other.payment_date) {
                (Some(a), Some(b)) => a.cmp(b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            _ => Ordering::Equal,
        }
    }
}

/// One derived page of the grid plus its layout metadata
#[derive(Debug, Clone, PartialEq)]
pub struct OrderTableView {
    /// Visible rows, already filtered, sorted and sliced to the page
    pub rows: Vec<Order>,
    /// Orders surviving all filter stages
    pub total_count: usize,
    pub total_pages: usize,
    /// Effective page after clamping to the valid range
    pub page: usize,
    /// Header order: frozen columns first, then the rest canonically
    pub columns: Vec<ColumnKey>,
}

/// Headline numbers over the unfiltered order list
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrderStats {
    pub total: usize,
    pub unpaid: usize,
    pub pending_delivery: usize,
    pub new_orders: usize,
    /// Sum of amounts over paid orders
    pub total_revenue: f64,
}

/// An order counts as new while it is less than 24 hours old.
/// Orders dated in the future are not "new" — the clock, not the data,
/// decides.
pub fn is_new(order: &Order, now: DateTime<Utc>) -> bool {
    let age = now.signed_duration_since(order.order_date);
    age >= Duration::zero() && age < Duration::hours(24)
}

pub fn order_stats(orders: &[Order], now: DateTime<Utc>) -> OrderStats {
    OrderStats {
        total: orders.len(),
        unpaid: orders
            .iter()
            .filter(|o| o.payment_status == PaymentStatus::Unpaid)
            .count(),
        pending_delivery: orders
            .iter()
            .filter(|o| o.delivery_status == DeliveryStatus::Pending)
            .count(),
        new_orders: orders.iter().filter(|o| is_new(o, now)).count(),
        total_revenue: orders
            .iter()
            .filter(|o| o.payment_status == PaymentStatus::Paid)
            .map(|o| o.amount)
            .sum(),
    }
}

/// Header order with frozen columns leading in the order they were frozen
pub fn column_order(frozen: &[ColumnKey]) -> Vec<ColumnKey> {
    let mut columns: Vec<ColumnKey> = frozen.to_vec();
    columns.extend(ColumnKey::ALL.iter().copied().filter(|k| !frozen.contains(k)));
    columns
}

/// Pixel offset of a frozen column's sticky left edge: the summed widths
/// of the frozen columns before it. Zero for unfrozen columns.
pub fn sticky_left_offset(frozen: &[ColumnKey], key: ColumnKey) -> u32 {
    match frozen.iter().position(|k| *k == key) {
        Some(index) => frozen[..index].iter().map(|k| k.width()).sum(),
        None => 0,
    }
}

/// Derives the visible grid from the full order list and the view state.
///
/// Pure and synchronous: the same inputs always produce the same view, and
/// `now` is an explicit argument so the 24-hour quick filter is
/// deterministic under test. Stages run in a fixed order — quick filter,
/// payment-date range, per-column filters, global search, sort, paginate —
/// each narrowing the candidate set.
pub fn derive_view(orders: &[Order], state: &OrdersViewState, now: DateTime<Utc>) -> OrderTableView {
    let mut result: Vec<Order> = orders.to_vec();

    if let Some(quick) = state.quick_filter {
        result.retain(|o| match quick {
            QuickFilter::New => is_new(o, now),
            QuickFilter::Unpaid => o.payment_status == PaymentStatus::Unpaid,
            QuickFilter::Pending => o.delivery_status == DeliveryStatus::Pending,
            QuickFilter::Paid => o.payment_status == PaymentStatus::Paid,
        });
    }

    // Both bounds must parse before the range applies; a half-filled pair
    // of date inputs filters nothing.
    if let (Ok(from), Ok(to)) = (
        NaiveDate::parse_from_str(&state.date_from, "%Y-%m-%d"),
        NaiveDate::parse_from_str(&state.date_to, "%Y-%m-%d"),
    ) {
        result.retain(|o| match o.payment_date {
            Some(paid_at) => {
                let day = paid_at.date_naive();
                from <= day && day <= to
            }
            // Unpaid orders have no payment date and fall outside any range
            None => false,
        });
    }

    for (key, value) in &state.filters {
        if value.is_empty() {
            continue;
        }
        let needle = value.to_lowercase();
        result.retain(|o| {
            key.field_text(o)
                .map(|text| text.to_lowercase().contains(&needle))
                .unwrap_or(false)
        });
    }

    let search = state.global_search.trim().to_lowercase();
    if !search.is_empty() {
        result.retain(|o| {
            ColumnKey::ALL
                .iter()
                .filter(|k| k.is_searchable())
                .any(|k| {
                    k.field_text(o)
                        .map(|text| text.to_lowercase().contains(&search))
                        .unwrap_or(false)
                })
        });
    }

    match state.sort {
        SortOrder::Newest => result.sort_by(|a, b| b.order_date.cmp(&a.order_date)),
        SortOrder::By { key, ascending } => sort_list(&mut result, key, ascending),
    }

    let total_count = result.len();
    let total_pages = if total_count == 0 {
        0
    } else {
        (total_count + state.page_size - 1) / state.page_size
    };
    let page = state.page.min(total_pages.saturating_sub(1));
    let rows: Vec<Order> = result
        .into_iter()
        .skip(page * state.page_size)
        .take(state.page_size)
        .collect();

    OrderTableView {
        rows,
        total_count,
        total_pages,
        page,
        columns: column_order(&state.frozen),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use contracts::enums::{ProcessStatus, SourceChannel};

    fn test_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    /// Baseline order; tests adjust individual fields per case
    fn order(id: i64) -> Order {
        Order {
            id,
            order_no: format!("ORD-{:03}", id),
            order_date: test_now() - Duration::days(id),
            customer_name: format!("Customer {}", id),
            customer_contact: format!("+1-555-{:04}", id),
            tracking_id: Some(format!("TRK-{:05}", id)),
            category: "Home Decor".to_string(),
            product: "Minimalist Wall Clock".to_string(),
            amount: 85.0,
            payment_method: "PayPal".to_string(),
            payment_status: PaymentStatus::Unpaid,
            payment_date: None,
            delivery_status: DeliveryStatus::Pending,
            process_status: ProcessStatus::Production,
            source: SourceChannel::Instagram,
            note: None,
            rating: None,
        }
    }

    fn paid(mut o: Order, on: DateTime<Utc>) -> Order {
        o.payment_status = PaymentStatus::Paid;
        o.payment_date = Some(on);
        o
    }

    #[test]
    fn derive_never_invents_rows() {
        let orders: Vec<Order> = (1..=8).map(order).collect();
        let mut state = OrdersViewState::default();
        state.set_global_search("customer".to_string());
        let view = derive_view(&orders, &state, test_now());
        assert!(view.total_count <= orders.len());
        for row in &view.rows {
            assert!(orders.iter().any(|o| o.id == row.id));
        }
    }

    #[test]
    fn derive_view_is_idempotent() {
        let orders: Vec<Order> = (1..=12).map(order).collect();
        let mut state = OrdersViewState::default();
        state.set_filter(ColumnKey::Category, "decor".to_string());
        state.toggle_sort(ColumnKey::Amount);
        let first = derive_view(&orders, &state, test_now());
        let second = derive_view(&orders, &state, test_now());
        assert_eq!(first, second);
    }

    #[test]
    fn quick_filter_unpaid_keeps_only_unpaid() {
        let mut orders: Vec<Order> = (1..=6).map(order).collect();
        orders[0] = paid(orders[0].clone(), test_now() - Duration::days(1));
        orders[3] = paid(orders[3].clone(), test_now() - Duration::days(2));

        let mut state = OrdersViewState::default();
        state.set_quick_filter(Some(QuickFilter::Unpaid));
        let view = derive_view(&orders, &state, test_now());
        assert_eq!(view.total_count, 4);
        assert!(view
            .rows
            .iter()
            .all(|o| o.payment_status == PaymentStatus::Unpaid));
    }

    #[test]
    fn quick_filter_new_uses_24_hour_window() {
        let mut fresh = order(1);
        fresh.order_date = test_now() - Duration::hours(23);
        let mut stale = order(2);
        stale.order_date = test_now() - Duration::hours(25);
        let mut future = order(3);
        future.order_date = test_now() + Duration::hours(1);

        let orders = vec![fresh.clone(), stale, future];
        let mut state = OrdersViewState::default();
        state.set_quick_filter(Some(QuickFilter::New));
        let view = derive_view(&orders, &state, test_now());
        assert_eq!(view.total_count, 1);
        assert_eq!(view.rows[0].id, fresh.id);
    }

    #[test]
    fn date_range_is_inclusive_and_excludes_missing_payment_dates() {
        let in_range = paid(order(1), Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap());
        // Payment late on the last day of the range still counts
        let boundary = paid(order(2), Utc.with_ymd_and_hms(2024, 1, 31, 23, 30, 0).unwrap());
        let outside = paid(order(3), Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap());
        let never_paid = order(4);

        let orders = vec![in_range, boundary, outside, never_paid];
        let mut state = OrdersViewState::default();
        state.set_date_range("2024-01-01".to_string(), "2024-01-31".to_string());
        let view = derive_view(&orders, &state, test_now());
        let ids: Vec<i64> = view.rows.iter().map(|o| o.id).collect();
        assert_eq!(view.total_count, 2);
        assert!(ids.contains(&1) && ids.contains(&2));
    }

    #[test]
    fn half_filled_date_range_filters_nothing() {
        let orders = vec![order(1), order(2)];
        let mut state = OrdersViewState::default();
        state.set_date_range("2024-01-01".to_string(), String::new());
        let view = derive_view(&orders, &state, test_now());
        assert_eq!(view.total_count, 2);
    }

    #[test]
    fn column_filters_combine_with_and() {
        let mut a = order(1);
        a.category = "Art".to_string();
        a.source = SourceChannel::Facebook;
        let mut b = order(2);
        b.category = "Art".to_string();
        let mut c = order(3);
        c.source = SourceChannel::Facebook;

        let orders = vec![a, b, c];
        let mut state = OrdersViewState::default();
        state.set_filter(ColumnKey::Category, "Art".to_string());
        state.set_filter(ColumnKey::Source, "Facebook".to_string());
        let view = derive_view(&orders, &state, test_now());
        assert_eq!(view.total_count, 1);
        assert_eq!(view.rows[0].id, 1);
    }

    #[test]
    fn contradictory_quick_and_column_filters_yield_empty() {
        let mut orders: Vec<Order> = (1..=5).map(order).collect();
        orders[2] = paid(orders[2].clone(), test_now() - Duration::days(1));

        let mut state = OrdersViewState::default();
        state.set_filter(ColumnKey::PaymentStatus, "Unpaid".to_string());
        state.set_quick_filter(Some(QuickFilter::Paid));
        let view = derive_view(&orders, &state, test_now());
        assert_eq!(view.total_count, 0);
        assert_eq!(view.total_pages, 0);
        assert!(view.rows.is_empty());
    }

    #[test]
    fn global_search_is_case_insensitive_across_fields() {
        let mut by_name = order(1);
        by_name.customer_name = "Alice Johnson".to_string();
        let mut by_note = order(2);
        by_note.note = Some("Gift wrap for Alice's sister".to_string());
        let unrelated = order(3);

        let orders = vec![by_name, by_note, unrelated];
        let mut state = OrdersViewState::default();
        state.set_global_search("alice".to_string());
        let view = derive_view(&orders, &state, test_now());
        let ids: Vec<i64> = view.rows.iter().map(|o| o.id).collect();
        assert_eq!(view.total_count, 2);
        assert!(ids.contains(&1) && ids.contains(&2));
    }

    #[test]
    fn search_never_matches_missing_fields() {
        let mut with_tracking = order(1);
        with_tracking.tracking_id = Some("TRK-XYZ".to_string());
        let mut without = order(2);
        without.tracking_id = None;

        let orders = vec![with_tracking, without];
        let mut state = OrdersViewState::default();
        state.set_filter(ColumnKey::TrackingId, "trk".to_string());
        let view = derive_view(&orders, &state, test_now());
        assert_eq!(view.total_count, 1);
        assert_eq!(view.rows[0].id, 1);
    }

    #[test]
    fn default_sort_is_newest_first_and_stable() {
        let shared_date = test_now() - Duration::days(3);
        let mut first = order(10);
        first.order_date = shared_date;
        let mut second = order(11);
        second.order_date = shared_date;
        let mut newest = order(12);
        newest.order_date = test_now() - Duration::hours(1);

        let orders = vec![first, second, newest];
        let state = OrdersViewState::default();
        let view = derive_view(&orders, &state, test_now());
        let ids: Vec<i64> = view.rows.iter().map(|o| o.id).collect();
        // Ties keep their input order behind the newer order
        assert_eq!(ids, vec![12, 10, 11]);
    }

    #[test]
    fn explicit_amount_sort_is_numeric() {
        let mut cheap = order(1);
        cheap.amount = 9.5;
        let mut pricey = order(2);
        pricey.amount = 10.0;
        let mut mid = order(3);
        mid.amount = 9.75;

        let orders = vec![pricey, cheap, mid];
        let mut state = OrdersViewState::default();
        state.toggle_sort(ColumnKey::Amount);
        let view = derive_view(&orders, &state, test_now());
        let amounts: Vec<f64> = view.rows.iter().map(|o| o.amount).collect();
        assert_eq!(amounts, vec![9.5, 9.75, 10.0]);

        state.toggle_sort(ColumnKey::Amount);
        let view = derive_view(&orders, &state, test_now());
        let amounts: Vec<f64> = view.rows.iter().map(|o| o.amount).collect();
        assert_eq!(amounts, vec![10.0, 9.75, 9.5]);
    }

    #[test]
    fn pagination_covers_the_filtered_list_exactly_once() {
        let orders: Vec<Order> = (1..=25).map(order).collect();
        let mut state = OrdersViewState::default();
        assert_eq!(state.page_size, 10);

        let first = derive_view(&orders, &state, test_now());
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.rows.len(), 10);
        // Default sort: the newest orders (smallest age) come first
        assert_eq!(first.rows[0].id, 1);

        let mut seen: Vec<i64> = Vec::new();
        for page in 0..first.total_pages {
            state.set_page(page);
            let view = derive_view(&orders, &state, test_now());
            seen.extend(view.rows.iter().map(|o| o.id));
        }
        assert_eq!(seen.len(), 25);
        let expected: Vec<i64> = (1..=25).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn out_of_range_page_requests_clamp() {
        let orders: Vec<Order> = (1..=25).map(order).collect();
        let mut state = OrdersViewState::default();
        state.set_page(5);
        let view = derive_view(&orders, &state, test_now());
        assert_eq!(view.page, 2);
        assert_eq!(view.rows.len(), 5);
    }

    #[test]
    fn empty_result_reports_zero_pages() {
        let state = OrdersViewState::default();
        let view = derive_view(&[], &state, test_now());
        assert_eq!(view.total_pages, 0);
        assert_eq!(view.page, 0);
        assert!(view.rows.is_empty());
    }

    #[test]
    fn frozen_columns_lead_in_freeze_order() {
        let mut state = OrdersViewState::default();
        state.toggle_frozen(ColumnKey::Amount);
        state.toggle_frozen(ColumnKey::CustomerName);

        let view = derive_view(&[], &state, test_now());
        assert_eq!(
            &view.columns[..3],
            &[ColumnKey::OrderNo, ColumnKey::Amount, ColumnKey::CustomerName]
        );
        // The remainder keeps canonical order with no duplicates
        assert_eq!(view.columns.len(), ColumnKey::ALL.len());
        assert_eq!(view.columns[3], ColumnKey::TrackingId);
    }

    #[test]
    fn sticky_offsets_accumulate_frozen_widths() {
        let frozen = [ColumnKey::OrderNo, ColumnKey::Amount, ColumnKey::CustomerName];
        assert_eq!(sticky_left_offset(&frozen, ColumnKey::OrderNo), 0);
        assert_eq!(sticky_left_offset(&frozen, ColumnKey::Amount), 120);
        assert_eq!(sticky_left_offset(&frozen, ColumnKey::CustomerName), 220);
        assert_eq!(sticky_left_offset(&frozen, ColumnKey::Note), 0);
    }

    #[test]
    fn stats_count_the_unfiltered_list() {
        let mut orders: Vec<Order> = (1..=6).map(order).collect();
        orders[0] = paid(orders[0].clone(), test_now() - Duration::days(1));
        orders[0].amount = 100.0;
        orders[1] = paid(orders[1].clone(), test_now() - Duration::days(2));
        orders[1].amount = 50.5;
        orders[2].delivery_status = DeliveryStatus::Shipped;
        orders[3].order_date = test_now() - Duration::hours(2);

        let stats = order_stats(&orders, test_now());
        assert_eq!(stats.total, 6);
        assert_eq!(stats.unpaid, 4);
        assert_eq!(stats.pending_delivery, 5);
        assert_eq!(stats.new_orders, 1);
        assert!((stats.total_revenue - 150.5).abs() < f64::EPSILON);
    }
}
