/*
[INPUT]:  Account identifiers and account request bodies
[OUTPUT]: Typed account data decoded from the response envelope
[POS]:    HTTP layer - account endpoints
[UPDATE]: When adding new account endpoints or changing request bodies
*/

use serde_json::json;

use crate::http::{CoinbaseClient, Result, paged};
use crate::types::{Account, AccountRequest, Money, Pagination};

/// One page of the account listing.
#[derive(Debug, Clone)]
pub struct AccountsPage {
    pub accounts: Vec<Account>,
    pub pagination: Option<Pagination>,
}

impl CoinbaseClient {
    /// List wallet accounts for the current user
    ///
    /// GET /api/v1/accounts?page={page}
    pub async fn get_accounts(&self, page: Option<u32>) -> Result<AccountsPage> {
        let endpoint = paged("/api/v1/accounts", page);
        let envelope = self.get_envelope(&endpoint).await?;
        Ok(AccountsPage {
            accounts: envelope.accounts()?,
            pagination: envelope.pagination(),
        })
    }

    /// Create a new wallet account
    ///
    /// POST /api/v1/accounts
    pub async fn create_account(&self, request: &AccountRequest) -> Result<Account> {
        let body = json!({ "account": request });
        let envelope = self.post_envelope("/api/v1/accounts", &body).await?;
        envelope.account()
    }

    /// Rename an account
    ///
    /// PUT /api/v1/accounts/{id}
    pub async fn update_account(&self, id: &str, request: &AccountRequest) -> Result<Account> {
        let body = json!({ "account": request });
        let endpoint = format!("/api/v1/accounts/{id}");
        let envelope = self.put_envelope(&endpoint, &body).await?;
        envelope.account()
    }

    /// Make an account the primary account
    ///
    /// POST /api/v1/accounts/{id}/primary
    pub async fn set_primary_account(&self, id: &str) -> Result<()> {
        let endpoint = format!("/api/v1/accounts/{id}/primary");
        self.post_envelope_empty(&endpoint).await?;
        Ok(())
    }

    /// Delete an account; only works on empty, non-primary accounts
    ///
    /// DELETE /api/v1/accounts/{id}
    pub async fn delete_account(&self, id: &str) -> Result<()> {
        let endpoint = format!("/api/v1/accounts/{id}");
        self.delete_envelope(&endpoint).await?;
        Ok(())
    }

    /// Fetch one account's balance as a bare money value
    ///
    /// GET /api/v1/accounts/{id}/balance
    pub async fn get_account_balance(&self, id: &str) -> Result<Money> {
        let endpoint = format!("/api/v1/accounts/{id}/balance");
        self.get_entity(&endpoint).await
    }
}
