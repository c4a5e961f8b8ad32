/*
[INPUT]:  Transaction identifiers and send/request bodies
[OUTPUT]: Typed transactions and the transaction listing with its sidecar data
[POS]:    HTTP layer - transaction endpoints
[UPDATE]: When adding new transaction endpoints or changing request bodies
*/

use serde_json::json;

use crate::http::{CoinbaseClient, Result, paged};
use crate::types::{Money, Pagination, Transaction, TransactionRequest, User};

/// One page of the transaction listing. The API attaches the current user
/// and wallet balances alongside the list itself.
#[derive(Debug, Clone)]
pub struct TransactionsPage {
    pub current_user: Option<User>,
    pub balance: Option<Money>,
    pub native_balance: Option<Money>,
    pub transactions: Vec<Transaction>,
    pub pagination: Option<Pagination>,
}

impl CoinbaseClient {
    /// List transactions for the current account
    ///
    /// GET /api/v1/transactions?page={page}
    pub async fn get_transactions(&self, page: Option<u32>) -> Result<TransactionsPage> {
        let endpoint = paged("/api/v1/transactions", page);
        let envelope = self.get_envelope(&endpoint).await?;
        Ok(TransactionsPage {
            current_user: envelope.current_user().cloned(),
            balance: envelope.balance().cloned(),
            native_balance: envelope.native_balance().cloned(),
            transactions: envelope.transactions()?,
            pagination: envelope.pagination(),
        })
    }

    /// Fetch a single transaction
    ///
    /// GET /api/v1/transactions/{id}
    pub async fn get_transaction(&self, id: &str) -> Result<Transaction> {
        let endpoint = format!("/api/v1/transactions/{id}");
        let envelope = self.get_envelope(&endpoint).await?;
        envelope.transaction()
    }

    /// Send money to an email or bitcoin address
    ///
    /// POST /api/v1/transactions/send_money
    pub async fn send_money(&self, request: &TransactionRequest) -> Result<Transaction> {
        let body = json!({ "transaction": request });
        let envelope = self
            .post_envelope("/api/v1/transactions/send_money", &body)
            .await?;
        envelope.transaction()
    }

    /// Request money from an email address
    ///
    /// POST /api/v1/transactions/request_money
    pub async fn request_money(&self, request: &TransactionRequest) -> Result<Transaction> {
        let body = json!({ "transaction": request });
        let envelope = self
            .post_envelope("/api/v1/transactions/request_money", &body)
            .await?;
        envelope.transaction()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Credentials;
    use crate::http::ClientConfig;
    use crate::types::{Timestamp, TransactionStatus};
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> CoinbaseClient {
        let mut client =
            CoinbaseClient::with_config_and_base_url(ClientConfig::default(), base_url)
                .expect("client init");
        client.set_credentials(Credentials::api_key("test-key", "test-secret"));
        client
    }

    #[tokio::test]
    async fn test_get_transactions_preserves_wire_order() {
        let server = MockServer::start().await;
        let mock_response = serde_json::json!({
            "current_user": {
                "id": "5011f33df8182b142400000e",
                "name": "User Two",
                "email": "user2@example.com"
            },
            "balance": {"amount": "50.00000000", "currency": "BTC"},
            "native_balance": {"amount": "500.00", "currency": "USD"},
            "total_count": 2,
            "num_pages": 1,
            "current_page": 1,
            "transactions": [
                {"transaction": {"id": "5018f833f8182b129c00002f"}},
                {"transaction": {"id": "5018f833f8182b129c00002e"}}
            ]
        });

        Mock::given(method("GET"))
            .and(path("/api/v1/transactions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(mock_response))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let page = client.get_transactions(None).await.expect("list");

        let current_user = page.current_user.expect("current user");
        assert_eq!(current_user.name.as_deref(), Some("User Two"));
        assert_eq!(page.balance, Some(Money::parse("BTC 50").unwrap()));
        assert_eq!(page.native_balance, Some(Money::parse("USD 500").unwrap()));
        assert_eq!(
            page.pagination,
            Some(Pagination {
                total_count: 2,
                num_pages: 1,
                current_page: 1
            })
        );

        let ids: Vec<_> = page
            .transactions
            .iter()
            .map(|t| t.id.as_deref().unwrap())
            .collect();
        assert_eq!(
            ids,
            vec!["5018f833f8182b129c00002f", "5018f833f8182b129c00002e"]
        );
    }

    #[tokio::test]
    async fn test_get_transactions_requests_page() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/transactions"))
            .and(query_param("page", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "transactions": [],
                "total_count": 50,
                "num_pages": 3,
                "current_page": 3
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let page = client.get_transactions(Some(3)).await.expect("list");
        assert!(page.transactions.is_empty());
        assert_eq!(page.pagination.unwrap().current_page, 3);
    }

    #[tokio::test]
    async fn test_get_transaction() {
        let server = MockServer::start().await;
        let mock_response = serde_json::json!({
            "transaction": {
                "id": "5018f833f8182b129c00002f",
                "created_at": "2012-08-01T02:34:43-07:00",
                "amount": {"amount": "-1.10000000", "currency": "BTC"},
                "request": true,
                "status": "pending",
                "sender": {
                    "id": "5011f33df8182b142400000e",
                    "name": "User Two",
                    "email": "user2@example.com"
                },
                "recipient": {
                    "id": "5011f33df8182b142400000a",
                    "name": "User One",
                    "email": "user1@example.com"
                }
            }
        });

        Mock::given(method("GET"))
            .and(path("/api/v1/transactions/5018f833f8182b129c00002f"))
            .respond_with(ResponseTemplate::new(200).set_body_json(mock_response))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let tx = client
            .get_transaction("5018f833f8182b129c00002f")
            .await
            .expect("get_transaction");

        assert_eq!(tx.id.as_deref(), Some("5018f833f8182b129c00002f"));
        assert_eq!(
            tx.created_at,
            Some(Timestamp::parse("2012-08-01T02:34:43-07:00").unwrap())
        );
        assert_eq!(tx.amount, Some(Money::parse("BTC -1.1").unwrap()));
        assert_eq!(tx.request, Some(true));
        assert_eq!(tx.status, Some(TransactionStatus::Pending));

        let sender = tx.sender.expect("sender");
        assert_eq!(sender.id.as_deref(), Some("5011f33df8182b142400000e"));
        assert_eq!(sender.email.as_deref(), Some("user2@example.com"));

        let recipient = tx.recipient.expect("recipient");
        assert_eq!(recipient.name.as_deref(), Some("User One"));
    }

    #[tokio::test]
    async fn test_send_money() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/transactions/send_money"))
            .and(body_json(serde_json::json!({
                "transaction": {
                    "to": "user1@example.com",
                    "amount_string": "1.23",
                    "amount_currency_iso": "BTC"
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "transaction": {
                    "id": "501a1791f8182b2071000087",
                    "amount": {"amount": "-1.23000000", "currency": "BTC"},
                    "status": "pending",
                    "recipient_address": "user1@example.com"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let amount = Money::parse("BTC 1.23").unwrap();
        let tx = client
            .send_money(&TransactionRequest::send_to("user1@example.com", &amount))
            .await
            .expect("send_money");

        assert_eq!(tx.id.as_deref(), Some("501a1791f8182b2071000087"));
        assert_eq!(tx.amount, Some(Money::parse("BTC -1.23").unwrap()));
    }

    #[tokio::test]
    async fn test_send_money_rejection_is_an_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/transactions/send_money"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": false,
                "errors": ["You don't have that much."]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let amount = Money::parse("BTC 1000").unwrap();
        let err = client
            .send_money(&TransactionRequest::send_to("user1@example.com", &amount))
            .await
            .expect_err("insufficient funds");

        assert_eq!(
            err.api_messages(),
            Some(&["You don't have that much.".to_string()][..])
        );
    }
}
