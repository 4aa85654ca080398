/*
[INPUT]:  Currency identifiers and paging/window parameters
[OUTPUT]: Market data (ticker, order book, trade history) as raw JSON
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing query parameters
*/

use reqwest::Method;
use serde_json::{Value, json};

use crate::http::{BitcoinTradeClient, Result, TimeWindow};
use crate::types::TradesQuery;

impl BitcoinTradeClient {
    /// Current best bid/ask/last snapshot
    ///
    /// GET /public/{currency}/ticker
    pub async fn ticker(&self, currency: &str) -> Result<Value> {
        let endpoint = format!("/public/{}/ticker", currency);
        let builder = self.request(Method::GET, &endpoint)?;
        self.send_json(builder, &json!({})).await
    }

    /// Public order book snapshot
    ///
    /// GET /public/{currency}/orders
    pub async fn orders(&self, currency: &str) -> Result<Value> {
        let endpoint = format!("/public/{}/orders", currency);
        let builder = self.request(Method::GET, &endpoint)?;
        self.send_json(builder, &json!({})).await
    }

    /// Trade history for the window ending now, in exchange-local time
    ///
    /// GET /public/{currency}/trades?start_time={}&end_time={}&page_size={}&current_page={}
    pub async fn trades(&self, currency: &str, query: TradesQuery) -> Result<Value> {
        let window = TimeWindow::last_hours(query.hours);
        let endpoint = format!(
            "/public/{}/trades?start_time={}&end_time={}&page_size={}&current_page={}",
            currency, window.start, window.end, query.page_size, query.current_page
        );
        let builder = self.request(Method::GET, &endpoint)?;
        self.send_json(builder, &json!({})).await
    }
}
