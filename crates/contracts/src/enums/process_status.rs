use serde::{Deserialize, Serialize};

/// Internal fulfillment stage of an order.
///
/// Distinct from [`DeliveryStatus`](super::DeliveryStatus): delivery status
/// is what the customer sees, process status is where the order sits in the
/// shop's own pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessStatus {
    Production,
    InTransit,
    Delay,
}

impl ProcessStatus {
    /// Wire spelling used by the orders API
    pub fn code(&self) -> &'static str {
        match self {
            ProcessStatus::Production => "production",
            ProcessStatus::InTransit => "in_transit",
            ProcessStatus::Delay => "delay",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProcessStatus::Production => "Production",
            ProcessStatus::InTransit => "In Transit",
            ProcessStatus::Delay => "Delay",
        }
    }

    pub fn all() -> Vec<ProcessStatus> {
        vec![
            ProcessStatus::Production,
            ProcessStatus::InTransit,
            ProcessStatus::Delay,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "production" => Some(ProcessStatus::Production),
            "in_transit" => Some(ProcessStatus::InTransit),
            "delay" => Some(ProcessStatus::Delay),
            _ => None,
        }
    }
}

impl Default for ProcessStatus {
    // New orders start in production until the shop moves them along
    fn default() -> Self {
        ProcessStatus::Production
    }
}
