/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Coinbase client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{
    Credentials,
    HmacSigner,
};

// Re-export commonly used types from http
pub use http::{
    AccountsPage,
    AddressesPage,
    ClientConfig,
    CoinbaseClient,
    CoinbaseError,
    ContactsPage,
    OrdersPage,
    ReceiveAddress,
    Result,
    TransactionsPage,
    TransfersPage,
};

// Re-export all types
pub use types::*;
