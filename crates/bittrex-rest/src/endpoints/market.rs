//! Order placement and management endpoints
//!
//! These endpoints require authentication.

use bittrex_types::{canonical, MarketSelector, Order, OrderUuid};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

use super::format_amount;
use crate::client::BittrexClient;
use crate::error::RestResult;

/// Order management endpoints
pub struct MarketEndpoints<'a> {
    client: &'a BittrexClient,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(client: &'a BittrexClient) -> Self {
        Self { client }
    }

    /// Submit an order and unwrap the returned uuid
    async fn place(
        &self,
        path: &str,
        market: &str,
        quantity: Decimal,
        rate: Option<Decimal>,
    ) -> RestResult<String> {
        let mut params = vec![
            ("market", canonical(market)),
            ("quantity", format_amount(quantity)),
        ];
        if let Some(rate) = rate {
            params.push(("rate", format_amount(rate)));
        }

        let receipt: OrderUuid = self.client.call(path, &params, true).await?;
        debug!("Order accepted: {}", receipt.uuid);
        Ok(receipt.into())
    }

    /// Place a limit buy order
    ///
    /// # Returns
    /// The uuid of the new order
    #[instrument(skip(self))]
    pub async fn buy_limit(&self, market: &str, quantity: Decimal, rate: Decimal) -> RestResult<String> {
        self.place("market/buylimit", market, quantity, Some(rate)).await
    }

    /// Place a market buy order
    #[instrument(skip(self))]
    pub async fn buy_market(&self, market: &str, quantity: Decimal) -> RestResult<String> {
        self.place("market/buymarket", market, quantity, None).await
    }

    /// Place a limit sell order
    #[instrument(skip(self))]
    pub async fn sell_limit(&self, market: &str, quantity: Decimal, rate: Decimal) -> RestResult<String> {
        self.place("market/selllimit", market, quantity, Some(rate)).await
    }

    /// Place a market sell order
    #[instrument(skip(self))]
    pub async fn sell_market(&self, market: &str, quantity: Decimal) -> RestResult<String> {
        self.place("market/sellmarket", market, quantity, None).await
    }

    /// Cancel a buy or sell order
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, uuid: &str) -> RestResult<()> {
        let params = [("uuid", uuid.to_string())];
        self.client.call("market/cancel", &params, true).await
    }

    /// Get open orders
    ///
    /// # Arguments
    /// * `selector` - A market, or [`MarketSelector::All`]
    #[instrument(skip(self))]
    pub async fn get_open_orders(&self, selector: &MarketSelector) -> RestResult<Vec<Order>> {
        let params: Vec<(&str, String)> = selector
            .as_filter()
            .map(|market| ("market", market.to_string()))
            .into_iter()
            .collect();

        self.client
            .call("market/getopenorders", &params, true)
            .await
    }
}
