/*
[INPUT]:  Raw response bodies from any endpoint
[OUTPUT]: One polymorphic envelope with shape-checked typed accessors
[POS]:    Data layer - response envelope and error normalization
[UPDATE]: When endpoints add payload slots or the error shape changes
*/

use serde::Deserialize;

use super::entities::{
    Account, Address, AddressNode, Button, Contact, ContactNode, Order, OrderNode, Transaction,
    TransactionNode, Transfer, TransferNode, User, UserNode,
};
use super::money::Money;
use crate::http::{CoinbaseError, Result};

/// Listing metadata attached to paginated responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    pub total_count: u32,
    pub num_pages: u32,
    pub current_page: u32,
}

/// The envelope every endpoint's body decodes into, regardless of which
/// endpoint was called. The shape is determined structurally: payload slots
/// the body does not carry stay `None`, and callers reach the payload only
/// through the shape-checked accessors below.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiResponse {
    success: Option<bool>,
    error: Option<String>,
    errors: Option<Vec<String>>,

    total_count: Option<u32>,
    num_pages: Option<u32>,
    current_page: Option<u32>,

    account: Option<Account>,
    transaction: Option<Transaction>,
    transfer: Option<Transfer>,
    button: Option<Button>,
    order: Option<Order>,
    address: Option<String>,
    callback_url: Option<String>,

    current_user: Option<User>,
    balance: Option<Money>,
    native_balance: Option<Money>,

    accounts: Option<Vec<Account>>,
    users: Option<Vec<UserNode>>,
    transactions: Option<Vec<TransactionNode>>,
    transfers: Option<Vec<TransferNode>>,
    addresses: Option<Vec<AddressNode>>,
    orders: Option<Vec<OrderNode>>,
    contacts: Option<Vec<ContactNode>>,
}

impl ApiResponse {
    /// The tri-state success indicator. `None` means the endpoint did not
    /// specify one; inspect `error_messages` instead.
    pub fn success(&self) -> Option<bool> {
        self.success
    }

    /// Normalize the `error` (single string) and `errors` (list) shapes
    /// into one ordered message list.
    pub fn error_messages(&self) -> Vec<String> {
        let mut messages = Vec::new();
        if let Some(error) = &self.error {
            messages.push(error.clone());
        }
        if let Some(errors) = &self.errors {
            messages.extend(errors.iter().cloned());
        }
        messages
    }

    /// Whether this envelope encodes a business failure. An explicit
    /// `success: false` is decisive; otherwise any error message counts.
    pub fn has_error(&self) -> bool {
        self.success == Some(false) || !self.error_messages().is_empty()
    }

    pub fn pagination(&self) -> Option<Pagination> {
        Some(Pagination {
            total_count: self.total_count?,
            num_pages: self.num_pages?,
            current_page: self.current_page?,
        })
    }

    /// The current user and balances some listings attach alongside the
    /// list payload.
    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn balance(&self) -> Option<&Money> {
        self.balance.as_ref()
    }

    pub fn native_balance(&self) -> Option<&Money> {
        self.native_balance.as_ref()
    }

    fn expect<T: Clone>(slot: &Option<T>, expected: &'static str) -> Result<T> {
        slot.clone()
            .ok_or(CoinbaseError::WrongEnvelopeShape { expected })
    }

    pub fn account(&self) -> Result<Account> {
        Self::expect(&self.account, "an account")
    }

    /// The single user. Some endpoints wrap it in a one-element node list.
    pub fn user(&self) -> Result<User> {
        if let Some(nodes) = &self.users
            && let Some(node) = nodes.first()
        {
            return Ok(node.user.clone());
        }
        Err(CoinbaseError::WrongEnvelopeShape { expected: "a user" })
    }

    pub fn transaction(&self) -> Result<Transaction> {
        Self::expect(&self.transaction, "a transaction")
    }

    pub fn transfer(&self) -> Result<Transfer> {
        Self::expect(&self.transfer, "a transfer")
    }

    pub fn button(&self) -> Result<Button> {
        Self::expect(&self.button, "a button")
    }

    pub fn order(&self) -> Result<Order> {
        Self::expect(&self.order, "an order")
    }

    /// The freshly generated receive address.
    pub fn receive_address(&self) -> Result<String> {
        Self::expect(&self.address, "a receive address")
    }

    /// The callback URL attached to a freshly generated receive address.
    pub fn callback_url(&self) -> Option<&str> {
        self.callback_url.as_deref()
    }

    pub fn accounts(&self) -> Result<Vec<Account>> {
        Self::expect(&self.accounts, "an account list")
    }

    pub fn transactions(&self) -> Result<Vec<Transaction>> {
        let nodes = Self::expect(&self.transactions, "a transaction list")?;
        Ok(nodes.into_iter().map(|n| n.transaction).collect())
    }

    pub fn transfers(&self) -> Result<Vec<Transfer>> {
        let nodes = Self::expect(&self.transfers, "a transfer list")?;
        Ok(nodes.into_iter().map(|n| n.transfer).collect())
    }

    pub fn addresses(&self) -> Result<Vec<Address>> {
        let nodes = Self::expect(&self.addresses, "an address list")?;
        Ok(nodes.into_iter().map(|n| n.address).collect())
    }

    pub fn orders(&self) -> Result<Vec<Order>> {
        let nodes = Self::expect(&self.orders, "an order list")?;
        Ok(nodes.into_iter().map(|n| n.order).collect())
    }

    pub fn contacts(&self) -> Result<Vec<Contact>> {
        let nodes = Self::expect(&self.contacts, "a contact list")?;
        Ok(nodes.into_iter().map(|n| n.contact).collect())
    }
}
