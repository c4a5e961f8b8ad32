/*
[INPUT]:  Bitcoin quantities and transfer listing parameters
[OUTPUT]: Typed transfers and buy/sell price quotes
[POS]:    HTTP layer - transfer (buy/sell) endpoints
[UPDATE]: When adding new transfer endpoints or changing the quote shape
*/

use rust_decimal::Decimal;

use crate::http::{CoinbaseClient, Result, paged};
use crate::types::{Pagination, Quote, Transfer, TransferQuantity};

/// One page of the transfer listing.
#[derive(Debug, Clone)]
pub struct TransfersPage {
    pub transfers: Vec<Transfer>,
    pub pagination: Option<Pagination>,
}

impl CoinbaseClient {
    /// List buys and sells for the current account
    ///
    /// GET /api/v1/transfers?page={page}
    pub async fn get_transfers(&self, page: Option<u32>) -> Result<TransfersPage> {
        let endpoint = paged("/api/v1/transfers", page);
        let envelope = self.get_envelope(&endpoint).await?;
        Ok(TransfersPage {
            transfers: envelope.transfers()?,
            pagination: envelope.pagination(),
        })
    }

    /// Buy bitcoin with the linked payment method
    ///
    /// POST /api/v1/buys
    pub async fn buy(&self, qty: Decimal) -> Result<Transfer> {
        let envelope = self
            .post_envelope("/api/v1/buys", &TransferQuantity { qty })
            .await?;
        envelope.transfer()
    }

    /// Sell bitcoin to the linked payment method
    ///
    /// POST /api/v1/sells
    pub async fn sell(&self, qty: Decimal) -> Result<Transfer> {
        let envelope = self
            .post_envelope("/api/v1/sells", &TransferQuantity { qty })
            .await?;
        envelope.transfer()
    }

    /// Quote the price of buying a bitcoin quantity; decodes a bare quote,
    /// not the envelope
    ///
    /// GET /api/v1/prices/buy?qty={qty}
    pub async fn get_buy_quote(&self, qty: Decimal) -> Result<Quote> {
        let endpoint = format!("/api/v1/prices/buy?qty={qty}");
        self.get_entity(&endpoint).await
    }

    /// Quote the proceeds of selling a bitcoin quantity
    ///
    /// GET /api/v1/prices/sell?qty={qty}
    pub async fn get_sell_quote(&self, qty: Decimal) -> Result<Quote> {
        let endpoint = format!("/api/v1/prices/sell?qty={qty}");
        self.get_entity(&endpoint).await
    }
}
