//! Public market data endpoints
//!
//! These endpoints don't require authentication.

use bittrex_types::{
    canonical, BookType, Currency, Market, MarketSummary, OrderBook, OrderEntry, Ticker, Trade,
};
use tracing::{debug, instrument};

use super::clamp_rows;
use crate::client::BittrexClient;
use crate::error::RestResult;

/// Public market data endpoints
pub struct PublicEndpoints<'a> {
    client: &'a BittrexClient,
}

impl<'a> PublicEndpoints<'a> {
    pub fn new(client: &'a BittrexClient) -> Self {
        Self { client }
    }

    /// Get open and available trading markets
    #[instrument(skip(self))]
    pub async fn get_markets(&self) -> RestResult<Vec<Market>> {
        self.client.call("public/getmarkets", &[], false).await
    }

    /// Get supported currencies
    #[instrument(skip(self))]
    pub async fn get_currencies(&self) -> RestResult<Vec<Currency>> {
        self.client.call("public/getcurrencies", &[], false).await
    }

    /// Get current ticker values
    ///
    /// # Arguments
    /// * `market` - Market name (e.g., "BTC-LTC")
    #[instrument(skip(self))]
    pub async fn get_ticker(&self, market: &str) -> RestResult<Ticker> {
        let params = [("market", canonical(market))];
        self.client.call("public/getticker", &params, false).await
    }

    /// Get the last 24 hour summary of all active markets
    #[instrument(skip(self))]
    pub async fn get_market_summaries(&self) -> RestResult<Vec<MarketSummary>> {
        self.client
            .call("public/getmarketsummaries", &[], false)
            .await
    }

    /// Get the last 24 hour summary of one market
    ///
    /// The exchange answers with a one-element list.
    #[instrument(skip(self))]
    pub async fn get_market_summary(&self, market: &str) -> RestResult<Vec<MarketSummary>> {
        let params = [("market", canonical(market))];
        self.client
            .call("public/getmarketsummary", &params, false)
            .await
    }

    /// Get the order book
    ///
    /// # Arguments
    /// * `market` - Market name (e.g., "BTC-LTC")
    /// * `book_type` - Side(s) to fetch
    /// * `depth` - Levels per side (1-100, clamped)
    #[instrument(skip(self))]
    pub async fn get_order_book(
        &self,
        market: &str,
        book_type: BookType,
        depth: u32,
    ) -> RestResult<OrderBook> {
        let depth = clamp_rows(depth);
        let params = [
            ("market", canonical(market)),
            ("type", book_type.to_string()),
            ("depth", depth.to_string()),
        ];

        debug!("Fetching {} order book for {} (depth {})", book_type, market, depth);

        // Single-sided books come back as a bare list of levels
        match book_type {
            BookType::Both => self.client.call("public/getorderbook", &params, false).await,
            BookType::Buy => {
                let buy: Vec<OrderEntry> =
                    self.client.call("public/getorderbook", &params, false).await?;
                Ok(OrderBook { buy, sell: Vec::new() })
            }
            BookType::Sell => {
                let sell: Vec<OrderEntry> =
                    self.client.call("public/getorderbook", &params, false).await?;
                Ok(OrderBook { buy: Vec::new(), sell })
            }
        }
    }

    /// Get the latest trades
    ///
    /// # Arguments
    /// * `market` - Market name
    /// * `count` - Number of entries (1-100, clamped)
    #[instrument(skip(self))]
    pub async fn get_market_history(&self, market: &str, count: u32) -> RestResult<Vec<Trade>> {
        let params = [
            ("market", canonical(market)),
            ("count", clamp_rows(count).to_string()),
        ];
        self.client
            .call("public/getmarkethistory", &params, false)
            .await
    }
}
