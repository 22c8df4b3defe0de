//! REST API client for the Bittrex cryptocurrency exchange
//!
//! This crate provides a typed client for the Bittrex v1.1 REST API,
//! covering public market data, order management and account operations.
//!
//! # Features
//!
//! - **Market Data**: Markets, currencies, tickers, summaries, order book, trade history
//! - **Trading**: Limit and market orders, cancel, open orders
//! - **Account**: Balances, deposit addresses, withdrawals, order/deposit/withdrawal history
//!
//! # Authentication
//!
//! Private endpoints require API credentials. Requests are signed with
//! HMAC-SHA512 over the full URL and sent with the `apisign` header.
//!
//! # Example
//!
//! ```no_run
//! use bittrex_rest::{BittrexClient, Credentials};
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = BittrexClient::new()?;
//!     let book = client.get_order_book("btc-ltc", "both", 20).await?;
//!     println!("Spread: {:?}", book.spread());
//!
//!     // Private endpoints (auth required)
//!     let creds = Credentials::from_env()?;
//!     let auth_client = BittrexClient::with_credentials(creds)?;
//!     let uuid = auth_client
//!         .buy_limit("BTC-LTC", Decimal::new(15, 1), Decimal::new(1, 2))
//!         .await?;
//!     println!("Placed order {}", uuid);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Failure semantics
//!
//! Each method is a single request/response round trip. Nothing is retried;
//! transport, decode and exchange-reported failures are returned as
//! [`RestError`] and leave the client usable.

pub mod client;
pub mod endpoints;
pub mod envelope;
pub mod error;
pub mod request;
pub mod transport;

// Re-export main types
pub use bittrex_auth::Credentials;
pub use client::{BittrexClient, ClientConfig};
pub use envelope::Envelope;
pub use error::{RestError, RestResult};
pub use request::{Method, SignedRequest, SignedRequestBuilder};
pub use transport::{ReqwestTransport, Transport};

// Re-export payload types
pub use bittrex_types as types;
pub use bittrex_types::{
    // Market data
    BookType, Currency, Market, MarketSummary, OrderBook, OrderEntry, Ticker, Trade,
    // Account
    Address, Balance, Deposit, MarketSelector, Order, OrderUuid, Withdrawal,
};
