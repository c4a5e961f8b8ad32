/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed domain entities decoded from wire JSON
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new entities are added
*/

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::enums::{
    ButtonRepeat, ButtonStyle, ButtonType, OrderStatus, TransactionStatus, TransferStatus,
    TransferType,
};
use super::money::{Money, fee_map};
use super::timestamp::Timestamp;

/// A wallet account. Every field is optional: fields the payload omits stay
/// absent rather than taking a default business value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: Option<String>,
    pub name: Option<String>,
    pub balance: Option<Money>,
    pub native_balance: Option<Money>,
    pub created_at: Option<Timestamp>,
    pub primary: Option<bool>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub time_zone: Option<String>,
    pub native_currency: Option<String>,
    pub balance: Option<Money>,
    pub buy_level: Option<u32>,
    pub sell_level: Option<u32>,
    pub buy_limit: Option<Money>,
    pub sell_limit: Option<Money>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Option<String>,
    pub created_at: Option<Timestamp>,
    // The v1 wire calls the transaction hash "hsh".
    #[serde(rename = "hsh")]
    pub hash: Option<String>,
    pub amount: Option<Money>,
    pub request: Option<bool>,
    pub status: Option<TransactionStatus>,
    pub confirmations: Option<u32>,
    pub sender: Option<User>,
    pub recipient: Option<User>,
    pub recipient_address: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    #[serde(rename = "type")]
    pub transfer_type: Option<TransferType>,
    pub code: Option<String>,
    pub created_at: Option<Timestamp>,
    /// Fee category ("coinbase", "bank", ...) to fee amount. Absent on the
    /// wire decodes to an empty map, never null.
    #[serde(default, with = "fee_map")]
    pub fees: HashMap<String, Money>,
    pub status: Option<TransferStatus>,
    pub payout_date: Option<Timestamp>,
    pub transaction_id: Option<String>,
    pub btc: Option<Money>,
    pub subtotal: Option<Money>,
    pub total: Option<Money>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub address: Option<String>,
    pub callback_url: Option<String>,
    pub label: Option<String>,
    pub created_at: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    pub id: Option<String>,
    pub code: Option<String>,
    #[serde(rename = "type")]
    pub button_type: Option<ButtonType>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub text: Option<String>,
    pub custom: Option<String>,
    pub callback_url: Option<String>,
    pub price: Option<Money>,
    pub style: Option<ButtonStyle>,
    pub repeat: Option<ButtonRepeat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Option<String>,
    pub created_at: Option<Timestamp>,
    pub status: Option<OrderStatus>,
    pub total_btc: Option<Money>,
    pub total_native: Option<Money>,
    pub custom: Option<String>,
    pub receive_address: Option<String>,
    pub button: Option<Button>,
    pub transaction: Option<Transaction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub subtotal: Option<Money>,
    #[serde(default, with = "fee_map")]
    pub fees: HashMap<String, Money>,
    pub total: Option<Money>,
}

// List payloads arrive as single-key wrapper objects naming their entity
// type: [{"transaction": {...}}, ...]. The wrappers stay crate-private; the
// envelope accessors unwrap them into flat entity vectors.

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct UserNode {
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct TransactionNode {
    pub transaction: Transaction,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct TransferNode {
    pub transfer: Transfer,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct AddressNode {
    pub address: Address,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct OrderNode {
    pub order: Order,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct ContactNode {
    pub contact: Contact,
}
