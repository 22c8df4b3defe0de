//! Public market data records

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::serde_util::{timestamp, timestamp_opt};

// ============================================================================
// Markets and Currencies
// ============================================================================

/// An open trading market, as listed by `public/getmarkets`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Market {
    /// Currency being traded (e.g., "LTC")
    pub market_currency: String,
    /// Currency prices are quoted in (e.g., "BTC")
    pub base_currency: String,
    /// Full name of the traded currency
    pub market_currency_long: String,
    /// Full name of the base currency
    pub base_currency_long: String,
    /// Minimum order quantity
    pub min_trade_size: Decimal,
    /// Market name in BASE-MARKET form (e.g., "BTC-LTC")
    pub market_name: String,
    /// Whether the market accepts orders
    pub is_active: bool,
    /// Listing time
    #[serde(with = "timestamp")]
    pub created: NaiveDateTime,
    /// Operator notice, if any
    #[serde(default)]
    pub notice: Option<String>,
    #[serde(default)]
    pub is_sponsored: Option<bool>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// A supported currency, as listed by `public/getcurrencies`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Currency {
    /// Ticker code (e.g., "BTC")
    pub currency: String,
    /// Full name (e.g., "Bitcoin")
    pub currency_long: String,
    /// Confirmations required before a deposit is credited
    pub min_confirmation: u32,
    /// Withdrawal fee, in this currency
    pub tx_fee: Decimal,
    pub is_active: bool,
    /// Wallet family (e.g., "BITCOIN", "ETH_CONTRACT")
    pub coin_type: String,
    /// Shared deposit address for memo-based currencies
    #[serde(default)]
    pub base_address: Option<String>,
    #[serde(default)]
    pub notice: Option<String>,
}

// ============================================================================
// Tickers and Summaries
// ============================================================================

/// Current ticker values for a market
///
/// Inactive markets report `null` prices, hence the options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ticker {
    pub bid: Option<Decimal>,
    pub ask: Option<Decimal>,
    pub last: Option<Decimal>,
}

impl Ticker {
    /// Get the mid price (average of bid and ask)
    pub fn mid_price(&self) -> Option<Decimal> {
        Some((self.ask? + self.bid?) / Decimal::TWO)
    }

    /// Get the spread (ask - bid)
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.ask? - self.bid?)
    }
}

/// 24 hour summary of a market
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MarketSummary {
    pub market_name: String,
    pub high: Option<Decimal>,
    pub low: Option<Decimal>,
    /// Volume in the market currency
    pub volume: Option<Decimal>,
    pub last: Option<Decimal>,
    /// Volume in the base currency
    pub base_volume: Option<Decimal>,
    #[serde(with = "timestamp")]
    pub time_stamp: NaiveDateTime,
    pub bid: Option<Decimal>,
    pub ask: Option<Decimal>,
    #[serde(default)]
    pub open_buy_orders: Option<u64>,
    #[serde(default)]
    pub open_sell_orders: Option<u64>,
    /// Last price 24 hours ago
    #[serde(default)]
    pub prev_day: Option<Decimal>,
    #[serde(default, with = "timestamp_opt")]
    pub created: Option<NaiveDateTime>,
}

// ============================================================================
// Order Book
// ============================================================================

/// Which side(s) of the book to request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookType {
    /// Bids only
    Buy,
    /// Asks only
    Sell,
    /// Both sides
    #[default]
    Both,
}

impl BookType {
    /// Wire value for the `type` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
            Self::Both => "both",
        }
    }
}

impl fmt::Display for BookType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown values fall back to [`BookType::Both`].
impl From<&str> for BookType {
    fn from(s: &str) -> Self {
        match s {
            "buy" => Self::Buy,
            "sell" => Self::Sell,
            _ => Self::Both,
        }
    }
}

/// A single price level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderEntry {
    pub quantity: Decimal,
    pub rate: Decimal,
}

/// Order book snapshot
///
/// Levels are kept in the order the exchange sent them: best price first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderBook {
    /// Bid levels
    #[serde(default)]
    pub buy: Vec<OrderEntry>,
    /// Ask levels
    #[serde(default)]
    pub sell: Vec<OrderEntry>,
}

impl OrderBook {
    /// Get the best bid price
    pub fn best_bid(&self) -> Option<Decimal> {
        self.buy.first().map(|level| level.rate)
    }

    /// Get the best ask price
    pub fn best_ask(&self) -> Option<Decimal> {
        self.sell.first().map(|level| level.rate)
    }

    /// Get the spread
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.best_ask()? - self.best_bid()?)
    }
}

// ============================================================================
// Trades
// ============================================================================

/// A public trade from `public/getmarkethistory`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Trade {
    pub id: u64,
    #[serde(with = "timestamp")]
    pub time_stamp: NaiveDateTime,
    pub quantity: Decimal,
    pub price: Decimal,
    pub total: Decimal,
    /// "FILL" or "PARTIAL_FILL"
    pub fill_type: String,
    /// "BUY" or "SELL"
    pub order_type: String,
}

impl Trade {
    /// Whether the taker was buying
    pub fn is_buy(&self) -> bool {
        self.order_type.eq_ignore_ascii_case("BUY")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_decode_market() {
        let json = r#"{
            "MarketCurrency": "LTC",
            "BaseCurrency": "BTC",
            "MarketCurrencyLong": "Litecoin",
            "BaseCurrencyLong": "Bitcoin",
            "MinTradeSize": 0.01,
            "MarketName": "BTC-LTC",
            "IsActive": true,
            "Created": "2014-02-13T00:00:00"
        }"#;

        let market: Market = serde_json::from_str(json).unwrap();
        assert_eq!(market.market_name, "BTC-LTC");
        assert_eq!(market.min_trade_size, dec!(0.01));
        assert!(market.is_active);
        assert_eq!(market.notice, None);
    }

    #[test]
    fn test_ticker_helpers() {
        let ticker: Ticker =
            serde_json::from_str(r#"{"Bid": 2.05, "Ask": 3.35, "Last": 3.35}"#).unwrap();
        assert_eq!(ticker.spread(), Some(dec!(1.30)));
        assert_eq!(ticker.mid_price(), Some(dec!(2.70)));
    }

    #[test]
    fn test_ticker_with_null_prices() {
        let ticker: Ticker =
            serde_json::from_str(r#"{"Bid": null, "Ask": null, "Last": null}"#).unwrap();
        assert_eq!(ticker.spread(), None);
        assert_eq!(ticker.mid_price(), None);
    }

    #[test]
    fn test_book_type_fallback() {
        assert_eq!(BookType::from("buy"), BookType::Buy);
        assert_eq!(BookType::from("sell"), BookType::Sell);
        assert_eq!(BookType::from("both"), BookType::Both);
        assert_eq!(BookType::from("BUY"), BookType::Both);
        assert_eq!(BookType::from("whatever"), BookType::Both);
        assert_eq!(BookType::Sell.to_string(), "sell");
    }

    #[test]
    fn test_order_book_keeps_level_order() {
        let json = r#"{
            "buy": [{"Quantity": 12.37, "Rate": 0.02525}, {"Quantity": 5.0, "Rate": 0.02520}],
            "sell": [{"Quantity": 32.55412402, "Rate": 0.02540000}]
        }"#;

        let book: OrderBook = serde_json::from_str(json).unwrap();
        assert_eq!(book.buy.len(), 2);
        assert_eq!(book.buy[0].rate, dec!(0.02525));
        assert_eq!(book.buy[1].rate, dec!(0.02520));
        assert_eq!(book.best_ask(), Some(dec!(0.0254)));
        assert_eq!(book.spread(), Some(dec!(0.00015)));
    }

    #[test]
    fn test_order_book_missing_side_is_empty() {
        let book: OrderBook = serde_json::from_str(r#"{"buy": []}"#).unwrap();
        assert!(book.sell.is_empty());
        assert_eq!(book.spread(), None);
    }

    #[test]
    fn test_trade_side() {
        let json = r#"{
            "Id": 319435,
            "TimeStamp": "2014-07-09T03:21:20.08",
            "Quantity": 0.30802438,
            "Price": 0.012634,
            "Total": 0.00389158,
            "FillType": "FILL",
            "OrderType": "BUY"
        }"#;

        let trade: Trade = serde_json::from_str(json).unwrap();
        assert!(trade.is_buy());
        assert_eq!(trade.quantity, dec!(0.30802438));
    }
}
