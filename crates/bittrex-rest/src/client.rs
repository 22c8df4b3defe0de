//! Main REST client implementation

use bittrex_auth::Credentials;
use bittrex_types::{
    Address, Balance, BookType, Currency, Deposit, Market, MarketSelector, MarketSummary, Order,
    OrderBook, Ticker, Trade, Withdrawal,
};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::endpoints::{AccountEndpoints, MarketEndpoints, PublicEndpoints};
use crate::envelope;
use crate::error::{RestError, RestResult};
use crate::request::{Method, SignedRequestBuilder, DEFAULT_BASE_URL};
use crate::transport::{ReqwestTransport, Transport};

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default user agent
const DEFAULT_USER_AGENT: &str = concat!("bittrex-rest/", env!("CARGO_PKG_VERSION"));

/// Bittrex REST API client
///
/// Provides access to both public and private endpoints. The client holds
/// only its configuration and a transport handle, so it can be cloned and
/// shared across tasks freely.
///
/// # Example
///
/// ```no_run
/// use bittrex_rest::{BittrexClient, Credentials};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = BittrexClient::new()?;
///     let ticker = client.get_ticker("btc-ltc").await?;
///
///     // With authentication for private endpoints
///     let creds = Credentials::from_env()?;
///     let auth_client = BittrexClient::with_credentials(creds)?;
///     let balances = auth_client.get_balances().await?;
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BittrexClient {
    transport: Arc<dyn Transport>,
    requests: SignedRequestBuilder,
}

impl BittrexClient {
    /// Create a new client without authentication
    ///
    /// Only public endpoints will be available.
    pub fn new() -> RestResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    ///
    /// All endpoints (public and private) will be available.
    pub fn with_credentials(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(ClientConfig::default().with_credentials(credentials))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let transport = ReqwestTransport::new(
            Duration::from_secs(config.timeout_secs),
            config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT),
        )?;

        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client on top of a custom transport
    ///
    /// `timeout_secs` and `user_agent` are the transport's business and are
    /// ignored here.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        info!(
            base_url = %config.base_url,
            authenticated = config.credentials.is_some(),
            "Created Bittrex REST client"
        );

        Self {
            transport,
            requests: SignedRequestBuilder::new(config.base_url, config.credentials),
        }
    }

    /// Check if the client has credentials for private endpoints
    pub fn has_credentials(&self) -> bool {
        self.requests.has_credentials()
    }

    /// Perform one request/response round trip
    ///
    /// Builds the (optionally signed) request, hands it to the transport and
    /// decodes the envelope's payload as `T`. No retries.
    pub async fn call<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
        requires_auth: bool,
    ) -> RestResult<T> {
        let request = self
            .requests
            .build(Method::Get, path, params, requires_auth)?;

        debug!(path, signed = request.is_signed(), "Dispatching request");

        let body = self.transport.execute(&request).await?;
        envelope::decode(&body)
    }

    // ========================================================================
    // Public Endpoints
    // ========================================================================

    /// Get public market data endpoints
    pub fn public(&self) -> PublicEndpoints<'_> {
        PublicEndpoints::new(self)
    }

    /// List open and available trading markets
    pub async fn get_markets(&self) -> RestResult<Vec<Market>> {
        self.public().get_markets().await
    }

    /// List supported currencies
    pub async fn get_currencies(&self) -> RestResult<Vec<Currency>> {
        self.public().get_currencies().await
    }

    /// Get current ticker values for a market
    ///
    /// # Arguments
    /// * `market` - Market name (e.g., "BTC-LTC"), any case
    pub async fn get_ticker(&self, market: &str) -> RestResult<Ticker> {
        self.public().get_ticker(market).await
    }

    /// Get the 24 hour summary of every active market
    pub async fn get_market_summaries(&self) -> RestResult<Vec<MarketSummary>> {
        self.public().get_market_summaries().await
    }

    /// Get the 24 hour summary of one market
    pub async fn get_market_summary(&self, market: &str) -> RestResult<Vec<MarketSummary>> {
        self.public().get_market_summary(market).await
    }

    /// Get the order book for a market
    ///
    /// # Arguments
    /// * `market` - Market name (e.g., "BTC-LTC")
    /// * `book_type` - "buy", "sell" or "both"; anything else means both
    /// * `depth` - Levels per side, clamped to 1-100
    pub async fn get_order_book(
        &self,
        market: &str,
        book_type: impl Into<BookType>,
        depth: u32,
    ) -> RestResult<OrderBook> {
        self.public()
            .get_order_book(market, book_type.into(), depth)
            .await
    }

    /// Get the latest trades for a market
    ///
    /// # Arguments
    /// * `market` - Market name
    /// * `count` - Number of trades, clamped to 1-100
    pub async fn get_market_history(&self, market: &str, count: u32) -> RestResult<Vec<Trade>> {
        self.public().get_market_history(market, count).await
    }

    // ========================================================================
    // Private Market Endpoints
    // ========================================================================

    /// Get order management endpoints (requires credentials)
    pub fn market(&self) -> RestResult<MarketEndpoints<'_>> {
        if !self.has_credentials() {
            return Err(RestError::AuthRequired);
        }
        Ok(MarketEndpoints::new(self))
    }

    /// Place a limit buy order, returning its uuid
    pub async fn buy_limit(&self, market: &str, quantity: Decimal, rate: Decimal) -> RestResult<String> {
        self.market()?.buy_limit(market, quantity, rate).await
    }

    /// Place a market buy order, returning its uuid
    pub async fn buy_market(&self, market: &str, quantity: Decimal) -> RestResult<String> {
        self.market()?.buy_market(market, quantity).await
    }

    /// Place a limit sell order, returning its uuid
    pub async fn sell_limit(&self, market: &str, quantity: Decimal, rate: Decimal) -> RestResult<String> {
        self.market()?.sell_limit(market, quantity, rate).await
    }

    /// Place a market sell order, returning its uuid
    pub async fn sell_market(&self, market: &str, quantity: Decimal) -> RestResult<String> {
        self.market()?.sell_market(market, quantity).await
    }

    /// Cancel an order by uuid
    pub async fn cancel_order(&self, uuid: &str) -> RestResult<()> {
        self.market()?.cancel_order(uuid).await
    }

    /// Get open orders
    ///
    /// # Arguments
    /// * `market` - Market name, or "all" for every market
    pub async fn get_open_orders(&self, market: impl Into<MarketSelector>) -> RestResult<Vec<Order>> {
        self.market()?.get_open_orders(&market.into()).await
    }

    // ========================================================================
    // Private Account Endpoints
    // ========================================================================

    /// Get account endpoints (requires credentials)
    pub fn account(&self) -> RestResult<AccountEndpoints<'_>> {
        if !self.has_credentials() {
            return Err(RestError::AuthRequired);
        }
        Ok(AccountEndpoints::new(self))
    }

    /// Get all balances, keyed by currency
    pub async fn get_balances(&self) -> RestResult<HashMap<String, Balance>> {
        self.account()?.get_balances().await
    }

    /// Get the balance of one currency
    pub async fn get_balance(&self, currency: &str) -> RestResult<Balance> {
        self.account()?.get_balance(currency).await
    }

    /// Get or generate the deposit address for a currency
    pub async fn get_deposit_address(&self, currency: &str) -> RestResult<Address> {
        self.account()?.get_deposit_address(currency).await
    }

    /// Withdraw funds, returning the withdrawal uuid
    pub async fn withdraw(&self, address: &str, currency: &str, quantity: Decimal) -> RestResult<String> {
        self.account()?.withdraw(address, currency, quantity).await
    }

    /// Look up a single order by uuid
    pub async fn get_order(&self, uuid: &str) -> RestResult<Order> {
        self.account()?.get_order(uuid).await
    }

    /// Get order history
    ///
    /// # Arguments
    /// * `market` - Market name, or "all" for every market
    /// * `count` - Number of records (clamped to 1-100), `None` for the maximum
    pub async fn get_order_history(
        &self,
        market: impl Into<MarketSelector>,
        count: Option<u32>,
    ) -> RestResult<Vec<Order>> {
        self.account()?.get_order_history(&market.into(), count).await
    }

    /// Get withdrawal history
    ///
    /// # Arguments
    /// * `currency` - Currency code, or "all" for every currency
    /// * `count` - Number of records (clamped to 1-100), `None` for the maximum
    pub async fn get_withdrawal_history(
        &self,
        currency: impl Into<MarketSelector>,
        count: Option<u32>,
    ) -> RestResult<Vec<Withdrawal>> {
        self.account()?
            .get_withdrawal_history(&currency.into(), count)
            .await
    }

    /// Get deposit history
    ///
    /// # Arguments
    /// * `currency` - Currency code, or "all" for every currency
    /// * `count` - Number of records (clamped to 1-100), `None` for the maximum
    pub async fn get_deposit_history(
        &self,
        currency: impl Into<MarketSelector>,
        count: Option<u32>,
    ) -> RestResult<Vec<Deposit>> {
        self.account()?
            .get_deposit_history(&currency.into(), count)
            .await
    }
}

impl std::fmt::Debug for BittrexClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BittrexClient")
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// API root, without the version segment
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the API root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_without_credentials() {
        let client = BittrexClient::new().unwrap();
        assert!(!client.has_credentials());
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new()
            .with_timeout(60)
            .with_base_url("http://localhost:9000/api/")
            .with_user_agent("test-agent");

        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.base_url, "http://localhost:9000/api/");
        assert_eq!(config.user_agent, Some("test-agent".to_string()));
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.base_url, "https://bittrex.com/api/");
        assert!(config.credentials.is_none());
    }

    #[test]
    fn test_auth_required_error() {
        let client = BittrexClient::new().unwrap();
        assert!(matches!(client.market(), Err(RestError::AuthRequired)));
        assert!(matches!(client.account(), Err(RestError::AuthRequired)));
    }

    #[test]
    fn test_debug_hides_credentials() {
        let creds = Credentials::new("key-0123456789", "secret-value").unwrap();
        let client = BittrexClient::with_credentials(creds).unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("has_credentials: true"));
        assert!(!debug.contains("secret-value"));
    }
}
