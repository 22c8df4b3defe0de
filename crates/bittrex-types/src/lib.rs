//! Payload types for the Bittrex v1.1 REST API
//!
//! Every record here is decoded from the `result` field of an exchange
//! response. The types carry no references to each other and no behaviour
//! beyond small read-only helpers, so they can be used independently of the
//! HTTP client.
//!
//! # Key Types
//!
//! - [`Market`], [`Currency`], [`Ticker`], [`MarketSummary`] - Market metadata
//! - [`OrderBook`], [`OrderEntry`], [`BookType`] - Order book snapshots
//! - [`Trade`] - Public trade history
//! - [`Order`], [`OrderUuid`] - Account orders and placement receipts
//! - [`Balance`], [`Address`], [`Withdrawal`], [`Deposit`] - Account funds
//! - [`MarketSelector`] - `"all"` or a specific market/currency filter

pub mod account;
pub mod market;
pub mod selector;
pub mod serde_util;

// Re-export commonly used types
pub use account::*;
pub use market::*;
pub use selector::*;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;
