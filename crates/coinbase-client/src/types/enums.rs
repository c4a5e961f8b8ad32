/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Closed wire-string enums that reject unrecognized values
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new codes are added
*/

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::http::CoinbaseError;

/// Defines a closed enum over wire string codes. Decoding an unlisted
/// string fails with `UnknownEnumValue`; there is no fallback variant.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal, { $($variant:ident => $code:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $code,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = CoinbaseError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($code => Ok($name::$variant),)+
                    _ => Err(CoinbaseError::UnknownEnumValue {
                        kind: $kind,
                        value: value.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let value = String::deserialize(deserializer)?;
                value.parse().map_err(de::Error::custom)
            }
        }
    };
}

wire_enum!(
    /// Transaction lifecycle status
    TransactionStatus, "transaction status", {
        Pending => "pending",
        Complete => "complete",
    }
);

wire_enum!(
    /// Whether a transfer is a purchase or a sale
    TransferType, "transfer type", {
        Buy => "Buy",
        Sell => "Sell",
    }
);

wire_enum!(
    /// Transfer lifecycle status
    TransferStatus, "transfer status", {
        Created => "Created",
        Pending => "Pending",
        Complete => "Complete",
        Canceled => "Canceled",
        Reversed => "Reversed",
    }
);

wire_enum!(
    /// Merchant order lifecycle status
    OrderStatus, "order status", {
        New => "new",
        Completed => "completed",
        Canceled => "canceled",
        Expired => "expired",
        Mispaid => "mispaid",
    }
);

wire_enum!(
    /// Payment button kind
    ButtonType, "button type", {
        BuyNow => "buy_now",
        Donation => "donation",
        Subscription => "subscription",
    }
);

wire_enum!(
    /// Rendering style for a payment button
    ButtonStyle, "button style", {
        BuyNowLarge => "buy_now_large",
        BuyNowSmall => "buy_now_small",
        DonationLarge => "donation_large",
        DonationSmall => "donation_small",
        SubscriptionLarge => "subscription_large",
        SubscriptionSmall => "subscription_small",
        CustomLarge => "custom_large",
        CustomSmall => "custom_small",
        None => "none",
    }
);

wire_enum!(
    /// Billing period for subscription buttons
    ButtonRepeat, "button repeat", {
        Never => "never",
        Daily => "daily",
        Weekly => "weekly",
        EveryTwoWeeks => "every_two_weeks",
        Monthly => "monthly",
        Quarterly => "quarterly",
        Yearly => "yearly",
    }
);
