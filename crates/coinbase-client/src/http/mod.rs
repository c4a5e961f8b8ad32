/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod accounts;
pub mod addresses;
pub mod client;
pub mod error;
pub mod orders;
pub mod transactions;
pub mod transfers;
pub mod users;

pub use accounts::AccountsPage;
pub use addresses::{AddressesPage, ReceiveAddress};
pub use client::{ClientConfig, CoinbaseClient};
pub use error::{CoinbaseError, Result};
pub use orders::OrdersPage;
pub use transactions::TransactionsPage;
pub use transfers::TransfersPage;
pub use users::ContactsPage;

/// Append the optional page query parameter to a listing endpoint.
pub(crate) fn paged(endpoint: &str, page: Option<u32>) -> String {
    match page {
        Some(page) => format!("{endpoint}?page={page}"),
        None => endpoint.to_string(),
    }
}
