/*
[INPUT]:  Wire money values ({amount, currency} or {cents, currency_iso}) and "CUR amount" text
[OUTPUT]: Exact-decimal Money values with lossless round-tripping
[POS]:    Data layer - monetary value codec
[UPDATE]: When the API adds new money wire shapes or currencies with odd minor units
*/

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::{self, Deserializer};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

use crate::http::{CoinbaseError, Result};

/// An exact monetary value: decimal amount plus a currency code.
///
/// Amounts are `rust_decimal::Decimal` end to end; no binary float is ever
/// involved, so parse/format round trips never lose precision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Money {
    amount: Decimal,
    currency: String,
}

impl Money {
    /// Create a money value; the currency code is uppercased.
    pub fn new(amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into().to_ascii_uppercase(),
        }
    }

    /// Parse the `"USD 0.14"` text form. Equivalent to `str::parse`.
    pub fn parse(raw: &str) -> Result<Self> {
        raw.parse()
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}

impl FromStr for Money {
    type Err = CoinbaseError;

    fn from_str(raw: &str) -> Result<Self> {
        let malformed = || CoinbaseError::MalformedAmount {
            raw: raw.to_string(),
        };

        let (currency, amount) = raw.trim().split_once(' ').ok_or_else(malformed)?;
        if currency.is_empty() || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(malformed());
        }
        let amount = Decimal::from_str(amount.trim()).map_err(|_| malformed())?;

        Ok(Money::new(amount, currency))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency, self.amount)
    }
}

/// Number of minor units per major unit when the API sends `cents`.
///
/// Fiat currencies on this API all use two decimal places; BTC cents carry
/// eight.
fn cents_scale(currency_iso: &str) -> u32 {
    if currency_iso.eq_ignore_ascii_case("BTC") {
        8
    } else {
        2
    }
}

/// Decode an amount sent as either a JSON string or a bare number. Numbers
/// go through `serde_json::Number::to_string`, which with the
/// `arbitrary_precision` feature reproduces the source digits exactly, so
/// no binary float stands between the wire and the `Decimal`.
fn decimal_from_wire(value: &serde_json::Value) -> Option<Decimal> {
    let text = match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        _ => return None,
    };
    Decimal::from_str(text.trim()).ok()
}

#[derive(Deserialize)]
struct WireMoney {
    #[serde(default)]
    amount: Option<serde_json::Value>,
    #[serde(default)]
    currency: Option<String>,
    #[serde(default)]
    cents: Option<i64>,
    #[serde(default)]
    currency_iso: Option<String>,
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = WireMoney::deserialize(deserializer)?;

        if let (Some(raw), Some(currency)) = (&wire.amount, &wire.currency) {
            if currency.is_empty() {
                return Err(de::Error::custom("malformed money value: empty currency"));
            }
            let amount = decimal_from_wire(raw)
                .ok_or_else(|| de::Error::custom("malformed money value: invalid amount"))?;
            return Ok(Money::new(amount, currency.clone()));
        }

        if let (Some(cents), Some(currency_iso)) = (wire.cents, &wire.currency_iso) {
            if currency_iso.is_empty() {
                return Err(de::Error::custom("malformed money value: empty currency"));
            }
            let amount = Decimal::new(cents, cents_scale(currency_iso));
            return Ok(Money::new(amount, currency_iso.clone()));
        }

        Err(de::Error::custom(
            "malformed money value: expected amount/currency or cents/currency_iso",
        ))
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Money", 2)?;
        state.serialize_field("amount", &self.amount.to_string())?;
        state.serialize_field("currency", &self.currency)?;
        state.end()
    }
}

/// Fee maps arrive as a list of single-key objects, one per fee category:
/// `[{"coinbase": {...}}, {"bank": {...}}]`. Decoded flat; absent decodes to
/// an empty map via `#[serde(default)]` on the field.
pub(crate) mod fee_map {
    use super::*;

    pub fn deserialize<'de, D>(
        deserializer: D,
    ) -> std::result::Result<HashMap<String, Money>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries: Vec<HashMap<String, Money>> = Vec::deserialize(deserializer)?;
        let mut fees = HashMap::new();
        for entry in entries {
            for (category, money) in entry {
                fees.insert(category, money);
            }
        }
        Ok(fees)
    }

    pub fn serialize<S>(
        fees: &HashMap<String, Money>,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let entries: Vec<HashMap<&String, &Money>> = fees
            .iter()
            .map(|(category, money)| HashMap::from([(category, money)]))
            .collect();
        entries.serialize(serializer)
    }
}
