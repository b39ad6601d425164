use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Quote as returned by the finance API
///
/// Quotes are owned by the finance API; this service only reads them and
/// flips their status on conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    pub client_id: String,
    pub job_title: String,
    pub total_amount: Decimal,
    pub status: QuoteStatus,
}

/// Quote lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStatus {
    /// Sent to the client, no answer yet
    Pending,
    /// Client agreed to the price
    Accepted,
    /// Client turned the quote down
    Declined,
    /// Split into revenue records (terminal)
    Converted,
}

impl QuoteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Declined => "declined",
            Self::Converted => "converted",
        }
    }

    /// Pending and Accepted quotes are expected to be converted
    pub fn is_convertible(&self) -> bool {
        matches!(self, Self::Pending | Self::Accepted)
    }

    pub fn is_terminal(&self) -> bool {
        *self == Self::Converted
    }
}

impl std::fmt::Display for QuoteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for QuoteStatus {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "declined" => Ok(Self::Declined),
            "converted" => Ok(Self::Converted),
            _ => Err(format!("Invalid quote status: {}", value)),
        }
    }
}

/// Body of the quote status update request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteStatusUpdate {
    pub status: QuoteStatus,
}
