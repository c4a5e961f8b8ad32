/*
[INPUT]:  Address listing parameters and receive-address options
[OUTPUT]: Typed receive addresses for the current account
[POS]:    HTTP layer - address endpoints
[UPDATE]: When adding new address endpoints or changing generation options
*/

use serde_json::json;

use crate::http::{CoinbaseClient, Result, paged};
use crate::types::{Address, AddressRequest, Pagination};

/// One page of the address listing.
#[derive(Debug, Clone)]
pub struct AddressesPage {
    pub addresses: Vec<Address>,
    pub pagination: Option<Pagination>,
}

/// A freshly generated receive address.
#[derive(Debug, Clone)]
pub struct ReceiveAddress {
    pub address: String,
    pub callback_url: Option<String>,
}

impl CoinbaseClient {
    /// List receive addresses for the current account
    ///
    /// GET /api/v1/addresses?page={page}
    pub async fn get_addresses(&self, page: Option<u32>) -> Result<AddressesPage> {
        let endpoint = paged("/api/v1/addresses", page);
        let envelope = self.get_envelope(&endpoint).await?;
        Ok(AddressesPage {
            addresses: envelope.addresses()?,
            pagination: envelope.pagination(),
        })
    }

    /// Generate a new receive address, optionally with a payment callback
    ///
    /// POST /api/v1/account/generate_receive_address
    pub async fn generate_receive_address(
        &self,
        callback_url: Option<&str>,
        label: Option<&str>,
    ) -> Result<ReceiveAddress> {
        let request = AddressRequest {
            callback_url: callback_url.map(str::to_string),
            label: label.map(str::to_string),
        };
        let body = json!({ "address": request });
        let envelope = self
            .post_envelope("/api/v1/account/generate_receive_address", &body)
            .await?;
        Ok(ReceiveAddress {
            address: envelope.receive_address()?,
            callback_url: envelope.callback_url().map(str::to_string),
        })
    }
}
