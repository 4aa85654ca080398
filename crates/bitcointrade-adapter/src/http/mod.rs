/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses as raw JSON values
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod market;
pub mod public;
pub mod user;
pub mod window;

pub use error::{BitcoinTradeError, Result};
pub use window::TimeWindow;

pub use client::{BitcoinTradeClient, ClientConfig};
