/*
[INPUT]:  Button definitions and order identifiers
[OUTPUT]: Typed payment buttons and merchant orders
[POS]:    HTTP layer - button and order endpoints
[UPDATE]: When adding new merchant endpoints or changing the button schema
*/

use serde_json::json;

use crate::http::{CoinbaseClient, Result, paged};
use crate::types::{Button, ButtonRequest, Order, Pagination};

/// One page of the merchant order listing.
#[derive(Debug, Clone)]
pub struct OrdersPage {
    pub orders: Vec<Order>,
    pub pagination: Option<Pagination>,
}

impl CoinbaseClient {
    /// Create a payment button
    ///
    /// POST /api/v1/buttons
    pub async fn create_button(&self, request: &ButtonRequest) -> Result<Button> {
        let body = json!({ "button": request });
        let envelope = self.post_envelope("/api/v1/buttons", &body).await?;
        envelope.button()
    }

    /// List merchant orders
    ///
    /// GET /api/v1/orders?page={page}
    pub async fn get_orders(&self, page: Option<u32>) -> Result<OrdersPage> {
        let endpoint = paged("/api/v1/orders", page);
        let envelope = self.get_envelope(&endpoint).await?;
        Ok(OrdersPage {
            orders: envelope.orders()?,
            pagination: envelope.pagination(),
        })
    }

    /// Fetch a single order by id or custom value
    ///
    /// GET /api/v1/orders/{id}
    pub async fn get_order(&self, id: &str) -> Result<Order> {
        let endpoint = format!("/api/v1/orders/{id}");
        let envelope = self.get_envelope(&endpoint).await?;
        envelope.order()
    }

    /// Create an order for an existing button
    ///
    /// POST /api/v1/buttons/{code}/create_order
    pub async fn create_order_for_button(&self, code: &str) -> Result<Order> {
        let endpoint = format!("/api/v1/buttons/{code}/create_order");
        let envelope = self.post_envelope_empty(&endpoint).await?;
        envelope.order()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Credentials;
    use crate::http::ClientConfig;
    use crate::types::{ButtonStyle, ButtonType, Money, OrderStatus, Timestamp};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> CoinbaseClient {
        let mut client =
            CoinbaseClient::with_config_and_base_url(ClientConfig::default(), base_url)
                .expect("client init");
        client.set_credentials(Credentials::api_key("test-key", "test-secret"));
        client
    }

    #[tokio::test]
    async fn test_create_button() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/buttons"))
            .and(body_json(serde_json::json!({
                "button": {
                    "name": "test",
                    "price_string": "2",
                    "price_currency_iso": "USD"
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "button": {
                    "code": "93865b9cae83706ae59220c013bc0afd",
                    "type": "buy_now",
                    "style": "custom_large",
                    "text": "Pay With Bitcoin",
                    "name": "test",
                    "description": "Sample description",
                    "custom": "Order123",
                    "callback_url": "http://www.example.com/my_custom_button_callback",
                    "price": {"cents": 123, "currency_iso": "USD"}
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let price = Money::parse("USD 2").unwrap();
        let button = client
            .create_button(&ButtonRequest::new("test", &price))
            .await
            .expect("create_button");

        assert_eq!(button.price, Some(Money::parse("USD 1.23").unwrap()));
        assert_eq!(
            button.callback_url.as_deref(),
            Some("http://www.example.com/my_custom_button_callback")
        );
        assert_eq!(button.custom.as_deref(), Some("Order123"));
        assert_eq!(button.description.as_deref(), Some("Sample description"));
        assert_eq!(button.name.as_deref(), Some("test"));
        assert_eq!(button.text.as_deref(), Some("Pay With Bitcoin"));
        assert_eq!(button.style, Some(ButtonStyle::CustomLarge));
        assert_eq!(button.button_type, Some(ButtonType::BuyNow));
        assert_eq!(
            button.code.as_deref(),
            Some("93865b9cae83706ae59220c013bc0afd")
        );
    }

    #[tokio::test]
    async fn test_get_orders() {
        let server = MockServer::start().await;
        let mock_response = serde_json::json!({
            "orders": [
                {
                    "order": {
                        "id": "A7C52JQT",
                        "created_at": "2013-03-11T22:04:37-07:00",
                        "status": "completed",
                        "total_btc": {"cents": 100000000, "currency_iso": "BTC"},
                        "total_native": {"cents": 3000, "currency_iso": "USD"},
                        "custom": "custom_123",
                        "receive_address": "mgrmKftH5CeuFBU3THLWuTNKaZoCGJU5jQ",
                        "button": {
                            "type": "buy_now",
                            "name": "Order #1234",
                            "description": "order description",
                            "id": "eec6d08e9e215195a471eae432a49fc7"
                        },
                        "transaction": {
                            "id": "513eb768f12a9cf27400000b",
                            "hsh": "4cc5eec20cd692f3cdb7fc264a0e1d78b9a7e3d7b862dec1e39cf7e37ababc14",
                            "confirmations": 1
                        }
                    }
                }
            ],
            "total_count": 1,
            "num_pages": 1,
            "current_page": 1
        });

        Mock::given(method("GET"))
            .and(path("/api/v1/orders"))
            .respond_with(ResponseTemplate::new(200).set_body_json(mock_response))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let page = client.get_orders(None).await.expect("get_orders");

        assert_eq!(page.orders.len(), 1);
        let order = &page.orders[0];
        assert_eq!(order.id.as_deref(), Some("A7C52JQT"));
        assert_eq!(order.status, Some(OrderStatus::Completed));
        assert_eq!(order.total_btc, Some(Money::parse("BTC 1").unwrap()));
        assert_eq!(order.total_native, Some(Money::parse("USD 30").unwrap()));
        assert_eq!(order.custom.as_deref(), Some("custom_123"));
        assert_eq!(
            order.receive_address.as_deref(),
            Some("mgrmKftH5CeuFBU3THLWuTNKaZoCGJU5jQ")
        );
        assert_eq!(
            order.created_at,
            Some(Timestamp::parse("2013-03-11T22:04:37-07:00").unwrap())
        );

        let button = order.button.as_ref().expect("button");
        assert_eq!(button.button_type, Some(ButtonType::BuyNow));
        assert_eq!(button.name.as_deref(), Some("Order #1234"));
        assert_eq!(button.id.as_deref(), Some("eec6d08e9e215195a471eae432a49fc7"));

        let tx = order.transaction.as_ref().expect("transaction");
        assert_eq!(tx.id.as_deref(), Some("513eb768f12a9cf27400000b"));
        assert_eq!(tx.confirmations, Some(1));
    }

    #[tokio::test]
    async fn test_create_order_for_button() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/buttons/93865b9cae83706ae59220c013bc0afd/create_order"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "order": {
                    "id": "8QNULQFE",
                    "status": "new",
                    "receive_address": "mnskjZs57dBAmeU2n4csiRKoQcGRF4tpxH"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let order = client
            .create_order_for_button("93865b9cae83706ae59220c013bc0afd")
            .await
            .expect("create_order");

        assert_eq!(order.id.as_deref(), Some("8QNULQFE"));
        assert_eq!(order.status, Some(OrderStatus::New));
    }
}
