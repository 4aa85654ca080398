/*
[INPUT]:  Order filters, order ids and the ApiToken header
[OUTPUT]: User account data (own orders, cancellations, balances) as raw JSON
[POS]:    HTTP layer - user data endpoints (require ApiToken auth)
[UPDATE]: When adding new user endpoints or changing query parameters
*/

use reqwest::Method;
use serde_json::{Value, json};

use crate::http::{BitcoinTradeClient, Result, TimeWindow};
use crate::types::{CancelOrderRequest, UserOrdersQuery};

impl BitcoinTradeClient {
    /// List the user's own orders, filtered by status/side over a window
    /// ending now in exchange-local time
    ///
    /// GET /market/user_orders/list?status={}&start_date={}&end_date={}&currency={}&type={}&page_size={}&current_page={}
    pub async fn user_orders(&self, currency: &str, query: UserOrdersQuery) -> Result<Value> {
        let window = TimeWindow::last_hours(query.hours);
        let endpoint = format!(
            "/market/user_orders/list?status={}&start_date={}&end_date={}&currency={}&type={}&page_size={}&current_page={}",
            query.status,
            window.start,
            window.end,
            currency,
            query.side,
            query.page_size,
            query.current_page
        );
        let builder = self.authenticated_request(Method::GET, &endpoint)?;
        self.send_json(builder, &json!({})).await
    }

    /// Cancel an order by id
    ///
    /// DELETE /market/user_orders/ with the id in the JSON body; the
    /// upstream API reads it from there rather than from the path.
    pub async fn cancel_order(&self, id: impl Into<String>) -> Result<Value> {
        let req = CancelOrderRequest { id: id.into() };
        let builder = self.authenticated_request(Method::DELETE, "/market/user_orders/")?;
        self.send_json(builder, &req).await
    }

    /// Wallet balances for the account
    ///
    /// GET /wallets/balance
    pub async fn balance(&self) -> Result<Value> {
        let builder = self.authenticated_request(Method::GET, "/wallets/balance")?;
        self.send_json(builder, &json!({})).await
    }
}
