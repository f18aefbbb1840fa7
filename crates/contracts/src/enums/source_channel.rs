use serde::{Deserialize, Serialize};

/// Messaging or web channel an order originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceChannel {
    Instagram,
    Facebook,
    WhatsApp,
    Website,
}

impl SourceChannel {
    /// Wire spelling used by the orders API
    pub fn code(&self) -> &'static str {
        match self {
            SourceChannel::Instagram => "Instagram",
            SourceChannel::Facebook => "Facebook",
            SourceChannel::WhatsApp => "WhatsApp",
            SourceChannel::Website => "Website",
        }
    }

    pub fn display_name(&self) -> &'static str {
        self.code()
    }

    pub fn all() -> Vec<SourceChannel> {
        vec![
            SourceChannel::Instagram,
            SourceChannel::Facebook,
            SourceChannel::WhatsApp,
            SourceChannel::Website,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Instagram" => Some(SourceChannel::Instagram),
            "Facebook" => Some(SourceChannel::Facebook),
            "WhatsApp" => Some(SourceChannel::WhatsApp),
            "Website" => Some(SourceChannel::Website),
            _ => None,
        }
    }
}
