use serde::{Deserialize, Serialize};

/// Payment state of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Paid,
    Unpaid,
}

impl PaymentStatus {
    /// Wire spelling used by the orders API
    pub fn code(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Unpaid => "Unpaid",
        }
    }

    pub fn display_name(&self) -> &'static str {
        self.code()
    }

    pub fn all() -> Vec<PaymentStatus> {
        vec![PaymentStatus::Paid, PaymentStatus::Unpaid]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Paid" => Some(PaymentStatus::Paid),
            "Unpaid" => Some(PaymentStatus::Unpaid),
            _ => None,
        }
    }
}
