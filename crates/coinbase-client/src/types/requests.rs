/*
[INPUT]:  Caller-supplied operation parameters
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - request body definitions
[UPDATE]: When API schema changes or new operations are added
*/

use rust_decimal::Decimal;
use serde::Serialize;

use super::enums::{ButtonRepeat, ButtonStyle, ButtonType};
use super::money::Money;

/// Body for creating or renaming an account. Serialized under the
/// `"account"` wrapper key by the endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountRequest {
    pub name: String,
}

/// Body for sending or requesting money. The wire takes the amount as a
/// numeral string plus a separate currency code.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct TransactionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_currency_iso: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TransactionRequest {
    /// A send-money body addressed to an email or bitcoin address.
    pub fn send_to(recipient: impl Into<String>, amount: &Money) -> Self {
        Self {
            to: Some(recipient.into()),
            amount_string: Some(amount.amount().to_string()),
            amount_currency_iso: Some(amount.currency().to_string()),
            ..Self::default()
        }
    }

    /// A request-money body addressed to an email.
    pub fn request_from(payer: impl Into<String>, amount: &Money) -> Self {
        Self {
            from: Some(payer.into()),
            amount_string: Some(amount.amount().to_string()),
            amount_currency_iso: Some(amount.currency().to_string()),
            ..Self::default()
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Body for creating a payment button. Serialized under the `"button"`
/// wrapper key by the endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ButtonRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_currency_iso: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub button_type: Option<ButtonType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ButtonStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat: Option<ButtonRepeat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
}

impl ButtonRequest {
    pub fn new(name: impl Into<String>, price: &Money) -> Self {
        Self {
            name: name.into(),
            price_string: Some(price.amount().to_string()),
            price_currency_iso: Some(price.currency().to_string()),
            ..Self::default()
        }
    }
}

/// Body for generating a receive address. Serialized under the `"address"`
/// wrapper key by the endpoint; unset options are omitted, not sent as null.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct AddressRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Body for buys and sells: a bare bitcoin quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransferQuantity {
    #[serde(with = "rust_decimal::serde::str")]
    pub qty: Decimal,
}
