use crate::enums::{DeliveryStatus, PaymentStatus, ProcessStatus, SourceChannel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Deserializes both a missing key and an explicit `null` as the default.
///
/// The orders API leaves nullable columns as `null` for rows created before
/// the column existed, so plain `#[serde(default)]` is not enough.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A sales order as returned by the orders API.
///
/// Orders are owned by the remote store; the frontend treats them as
/// read-mostly snapshots and re-fetches the list after any mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Storage key, used to address the order in mutation endpoints
    pub id: i64,
    /// Display identifier shown to the shop owner, e.g. "ORD-001"
    #[serde(rename = "order_id")]
    pub order_no: String,
    pub order_date: DateTime<Utc>,
    pub customer_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub customer_contact: String,
    pub tracking_id: Option<String>,
    pub category: String,
    /// Line items joined with " | "
    pub product: String,
    pub amount: f64,
    /// Credit Card, PayPal or COD
    pub payment_method: String,
    pub payment_status: PaymentStatus,
    pub payment_date: Option<DateTime<Utc>>,
    pub delivery_status: DeliveryStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub process_status: ProcessStatus,
    pub source: SourceChannel,
    pub note: Option<String>,
    /// Customer rating, 1-5 stars
    pub rating: Option<u8>,
}

/// Partial update payload for PUT /orders/{id}.
///
/// Only the fields that are set are sent; the backend leaves the rest
/// untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_status: Option<DeliveryStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_status: Option<ProcessStatus>,
}

impl OrderUpdate {
    pub fn mark_paid(at: DateTime<Utc>) -> Self {
        Self {
            payment_status: Some(PaymentStatus::Paid),
            payment_date: Some(at),
            ..Default::default()
        }
    }

    pub fn set_delivery(status: DeliveryStatus) -> Self {
        Self {
            delivery_status: Some(status),
            ..Default::default()
        }
    }

    pub fn set_process(status: ProcessStatus) -> Self {
        Self {
            process_status: Some(status),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_deserializes_from_api_shape() {
        let json = r#"{
            "id": 7,
            "order_id": "ORD-007",
            "order_date": "2024-03-15T10:30:00Z",
            "customer_name": "Alice Johnson",
            "customer_contact": null,
            "tracking_id": null,
            "category": "Home Decor",
            "product": "Minimalist Wall Clock",
            "amount": 85.0,
            "payment_method": "PayPal",
            "payment_status": "Unpaid",
            "payment_date": null,
            "delivery_status": "Pending",
            "process_status": null,
            "source": "Instagram",
            "note": null,
            "rating": null
        }"#;

        let order: Order = serde_json::from_str(json).expect("valid order json");
        assert_eq!(order.id, 7);
        assert_eq!(order.order_no, "ORD-007");
        assert_eq!(order.customer_contact, "");
        assert_eq!(order.payment_status, PaymentStatus::Unpaid);
        assert_eq!(order.delivery_status, DeliveryStatus::Pending);
        assert_eq!(order.process_status, ProcessStatus::Production);
        assert_eq!(order.source, SourceChannel::Instagram);
        assert!(order.payment_date.is_none());
    }

    #[test]
    fn update_serializes_only_set_fields() {
        let update = OrderUpdate::set_delivery(DeliveryStatus::Shipped);
        let json = serde_json::to_value(&update).expect("serializable");
        assert_eq!(json, serde_json::json!({ "delivery_status": "Shipped" }));
    }

    #[test]
    fn process_status_uses_snake_case_wire_spelling() {
        let update = OrderUpdate::set_process(ProcessStatus::InTransit);
        let json = serde_json::to_value(&update).expect("serializable");
        assert_eq!(json, serde_json::json!({ "process_status": "in_transit" }));
    }
}
