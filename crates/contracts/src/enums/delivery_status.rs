use serde::{Deserialize, Serialize};

/// Customer-facing delivery state of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryStatus {
    Pending,
    Shipped,
    Delivered,
    Cancelled,
}

impl DeliveryStatus {
    /// Wire spelling used by the orders API
    pub fn code(&self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "Pending",
            DeliveryStatus::Shipped => "Shipped",
            DeliveryStatus::Delivered => "Delivered",
            DeliveryStatus::Cancelled => "Cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        self.code()
    }

    pub fn all() -> Vec<DeliveryStatus> {
        vec![
            DeliveryStatus::Pending,
            DeliveryStatus::Shipped,
            DeliveryStatus::Delivered,
            DeliveryStatus::Cancelled,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Pending" => Some(DeliveryStatus::Pending),
            "Shipped" => Some(DeliveryStatus::Shipped),
            "Delivered" => Some(DeliveryStatus::Delivered),
            "Cancelled" => Some(DeliveryStatus::Cancelled),
            _ => None,
        }
    }
}
