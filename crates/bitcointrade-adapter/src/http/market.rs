/*
[INPUT]:  Currency identifiers, order parameters and the ApiToken header
[OUTPUT]: Authenticated market views and order placement results as raw JSON
[POS]:    HTTP layer - market endpoints (require ApiToken auth)
[UPDATE]: When adding new market endpoints or changing order fields
*/

use reqwest::Method;
use rust_decimal::Decimal;
use serde_json::{Value, json};

use crate::http::{BitcoinTradeClient, Result};
use crate::types::{CreateOrderRequest, OrderSide};

impl BitcoinTradeClient {
    /// Authenticated order book view
    ///
    /// GET /market?currency={currency}
    pub async fn orderbook(&self, currency: &str) -> Result<Value> {
        let endpoint = format!("/market?currency={}", currency);
        let builder = self.authenticated_request(Method::GET, &endpoint)?;
        self.send_json(builder, &json!({})).await
    }

    /// 24h summary statistics
    ///
    /// GET /market/summary?currency={currency}
    pub async fn summary(&self, currency: &str) -> Result<Value> {
        let endpoint = format!("/market/summary?currency={}", currency);
        let builder = self.authenticated_request(Method::GET, &endpoint)?;
        self.send_json(builder, &json!({})).await
    }

    /// Estimated execution price for a hypothetical order
    ///
    /// GET /market/estimated_price?amount={amount}&currency={currency}&type={type}
    pub async fn estimated_price(
        &self,
        currency: &str,
        amount: Decimal,
        side: OrderSide,
    ) -> Result<Value> {
        let endpoint = format!(
            "/market/estimated_price?amount={}&currency={}&type={}",
            amount, currency, side
        );
        let builder = self.authenticated_request(Method::GET, &endpoint)?;
        self.send_json(builder, &json!({})).await
    }

    /// Place a new order
    ///
    /// POST /market/create_order
    pub async fn create_order(&self, req: CreateOrderRequest) -> Result<Value> {
        let builder = self.authenticated_request(Method::POST, "/market/create_order")?;
        self.send_json(builder, &req).await
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::http::{BitcoinTradeClient, ClientConfig};
    use crate::types::{CreateOrderRequest, OrderSide, OrderSubtype};

    fn test_client(server: &MockServer) -> BitcoinTradeClient {
        BitcoinTradeClient::with_config_and_base_url(
            "secret-token",
            ClientConfig::default(),
            &server.uri(),
        )
        .expect("client init")
    }

    #[tokio::test]
    async fn test_orderbook_sends_api_token() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/market"))
            .and(query_param("currency", "BTC"))
            .and(header("authorization", "ApiToken secret-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": { "buying": [], "selling": [] }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = test_client(&server)
            .orderbook("BTC")
            .await
            .expect("orderbook failed");
        assert!(response["data"]["buying"].is_array());
    }

    #[tokio::test]
    async fn test_summary_path_and_auth() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/market/summary"))
            .and(query_param("currency", "ETH"))
            .and(header("authorization", "ApiToken secret-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": { "volume": "12.5" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = test_client(&server)
            .summary("ETH")
            .await
            .expect("summary failed");
        assert_eq!(response["data"]["volume"], "12.5");
    }

    #[tokio::test]
    async fn test_estimated_price_query_params() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/market/estimated_price"))
            .and(query_param("amount", "0.5"))
            .and(query_param("currency", "BTC"))
            .and(query_param("type", "sell"))
            .and(header("authorization", "ApiToken secret-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": { "price": "119000.00" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        test_client(&server)
            .estimated_price("BTC", "0.5".parse().unwrap(), OrderSide::Sell)
            .await
            .expect("estimated_price failed");
    }

    #[tokio::test]
    async fn test_create_order_posts_json_body() {
        let server = MockServer::start().await;
        let expected_body = serde_json::json!({
            "currency": "BTC",
            "amount": 0.01,
            "type": "buy",
            "subtype": "limited",
            "unit_price": 50000.0,
        });
        let _mock = Mock::given(method("POST"))
            .and(path("/market/create_order"))
            .and(header("authorization", "ApiToken secret-token"))
            .and(body_json(&expected_body))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": { "id": "order-1" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let req = CreateOrderRequest {
            currency: "BTC".to_string(),
            amount: "0.01".parse().unwrap(),
            side: OrderSide::Buy,
            subtype: OrderSubtype::Limited,
            unit_price: "50000".parse().unwrap(),
        };
        let response = test_client(&server)
            .create_order(req)
            .await
            .expect("create_order failed");
        assert_eq!(response["data"]["id"], "order-1");
    }

    #[tokio::test]
    async fn test_error_envelope_passes_through() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/market/summary"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "message": "invalid_api_key",
                "errors": ["Invalid ApiToken"]
            })))
            .expect(1)
            .mount(&server)
            .await;

        // Non-2xx bodies decode exactly like 2xx ones; the caller reads the
        // exchange's own envelope.
        let response = test_client(&server)
            .summary("BTC")
            .await
            .expect("summary should still decode the error envelope");
        assert_eq!(response["message"], "invalid_api_key");
    }
}
