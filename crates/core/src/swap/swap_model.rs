use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::amount_input::format_derived_amount;
use crate::tokens::Token;

/// Which amount field the operator is editing.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Focus {
    #[default]
    None,
    Source,
    Destination,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", tag = "state", content = "message")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

/// Everything the swap form shows, as a plain value.
///
/// Amounts are kept as the text in the fields so in-progress input such as
/// `"12."` survives round trips.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SwapFormState {
    pub source_token: Option<Token>,
    pub destination_token: Option<Token>,
    pub source_amount: String,
    pub destination_amount: String,
    pub focus: Focus,
    pub status: SubmissionStatus,
    pub error: Option<String>,
}

/// Operator actions the form reacts to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", tag = "type", content = "value")]
pub enum SwapEvent {
    SelectSource(Token),
    SelectDestination(Token),
    Focus(Focus),
    EditSource(String),
    EditDestination(String),
    SwapDirection,
    ClearError,
}

/// A validated swap, ready for execution.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SwapOrder {
    pub id: Uuid,
    pub source_token: Token,
    pub destination_token: Token,
    pub source_amount: Decimal,
    pub destination_amount: Decimal,
    pub rate: Decimal,
}

/// Outcome of an executed swap.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SwapReceipt {
    pub order: SwapOrder,
    pub completed_at: DateTime<Utc>,
}

impl SwapReceipt {
    pub fn message(&self) -> String {
        format!(
            "Successfully swapped {} {} for {} {}",
            format_derived_amount(self.order.source_amount),
            self.order.source_token.symbol,
            format_derived_amount(self.order.destination_amount),
            self.order.destination_token.symbol
        )
    }
}
