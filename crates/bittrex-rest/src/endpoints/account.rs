//! Private account endpoints
//!
//! These endpoints require authentication.

use bittrex_types::{canonical, Address, Balance, Deposit, MarketSelector, Order, OrderUuid, Withdrawal};
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::{debug, instrument};

use super::{format_amount, history_params};
use crate::client::BittrexClient;
use crate::error::RestResult;

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    client: &'a BittrexClient,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(client: &'a BittrexClient) -> Self {
        Self { client }
    }

    /// Get all balances, keyed by currency code
    #[instrument(skip(self))]
    pub async fn get_balances(&self) -> RestResult<HashMap<String, Balance>> {
        self.client.call("account/getbalances", &[], true).await
    }

    /// Get the balance of one currency
    ///
    /// # Arguments
    /// * `currency` - Currency code (e.g., "LTC")
    #[instrument(skip(self))]
    pub async fn get_balance(&self, currency: &str) -> RestResult<Balance> {
        let params = [("currency", canonical(currency))];
        self.client.call("account/getbalance", &params, true).await
    }

    /// Generate or retrieve a deposit address
    ///
    /// # Arguments
    /// * `currency` - Currency code (e.g., "BTC")
    #[instrument(skip(self))]
    pub async fn get_deposit_address(&self, currency: &str) -> RestResult<Address> {
        let params = [("currency", canonical(currency))];
        self.client
            .call("account/getdepositaddress", &params, true)
            .await
    }

    /// Withdraw funds
    ///
    /// # Arguments
    /// * `address` - Destination address
    /// * `currency` - Currency code
    /// * `quantity` - Amount to withdraw
    ///
    /// # Returns
    /// The uuid of the withdrawal
    #[instrument(skip(self))]
    pub async fn withdraw(&self, address: &str, currency: &str, quantity: Decimal) -> RestResult<String> {
        let params = [
            ("currency", canonical(currency)),
            ("quantity", format_amount(quantity)),
            ("address", address.to_string()),
        ];

        let receipt: OrderUuid = self.client.call("account/withdraw", &params, true).await?;
        debug!("Withdrawal accepted: {}", receipt.uuid);
        Ok(receipt.into())
    }

    /// Look up a single order
    #[instrument(skip(self))]
    pub async fn get_order(&self, uuid: &str) -> RestResult<Order> {
        let params = [("uuid", uuid.to_string())];
        self.client.call("account/getorder", &params, true).await
    }

    /// Get order history
    ///
    /// # Arguments
    /// * `selector` - A market, or [`MarketSelector::All`]
    /// * `count` - Number of records (1-100, clamped), `None` for the maximum
    #[instrument(skip(self))]
    pub async fn get_order_history(
        &self,
        selector: &MarketSelector,
        count: Option<u32>,
    ) -> RestResult<Vec<Order>> {
        let params = history_params("market", selector, count);
        self.client
            .call("account/getorderhistory", &params, true)
            .await
    }

    /// Get withdrawal history
    ///
    /// # Arguments
    /// * `selector` - A currency, or [`MarketSelector::All`]
    /// * `count` - Number of records (1-100, clamped), `None` for the maximum
    #[instrument(skip(self))]
    pub async fn get_withdrawal_history(
        &self,
        selector: &MarketSelector,
        count: Option<u32>,
    ) -> RestResult<Vec<Withdrawal>> {
        let params = history_params("currency", selector, count);
        self.client
            .call("account/getwithdrawalhistory", &params, true)
            .await
    }

    /// Get deposit history
    ///
    /// # Arguments
    /// * `selector` - A currency, or [`MarketSelector::All`]
    /// * `count` - Number of records (1-100, clamped), `None` for the maximum
    #[instrument(skip(self))]
    pub async fn get_deposit_history(
        &self,
        selector: &MarketSelector,
        count: Option<u32>,
    ) -> RestResult<Vec<Deposit>> {
        let params = history_params("currency", selector, count);
        self.client
            .call("account/getdeposithistory", &params, true)
            .await
    }
}
