/*
[INPUT]:  Authenticated client state
[OUTPUT]: Current user details and contact listings
[POS]:    HTTP layer - user and contact endpoints
[UPDATE]: When adding new user endpoints or changing query parameters
*/

use crate::http::{CoinbaseClient, Result, paged};
use crate::types::{Contact, Pagination, User};

/// One page of the contact listing.
#[derive(Debug, Clone)]
pub struct ContactsPage {
    pub contacts: Vec<Contact>,
    pub pagination: Option<Pagination>,
}

impl CoinbaseClient {
    /// Fetch the authenticated user
    ///
    /// GET /api/v1/users
    pub async fn get_user(&self) -> Result<User> {
        let envelope = self.get_envelope("/api/v1/users").await?;
        envelope.user()
    }

    /// List previous transaction counterparties
    ///
    /// GET /api/v1/contacts?page={page}
    pub async fn get_contacts(&self, page: Option<u32>) -> Result<ContactsPage> {
        let endpoint = paged("/api/v1/contacts", page);
        let envelope = self.get_envelope(&endpoint).await?;
        Ok(ContactsPage {
            contacts: envelope.contacts()?,
            pagination: envelope.pagination(),
        })
    }
}
