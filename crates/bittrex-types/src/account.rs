//! Account, order and funding records

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::serde_util::{timestamp, timestamp_opt};

// ============================================================================
// Orders
// ============================================================================

/// Identifier returned by order placement and withdrawal requests
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderUuid {
    pub uuid: String,
}

impl From<OrderUuid> for String {
    fn from(value: OrderUuid) -> Self {
        value.uuid
    }
}

/// An order, open or closed
///
/// Open orders report `Opened`/`CommissionPaid` where history reports
/// `TimeStamp`/`Commission`; both spellings decode into the same fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Order {
    /// Internal identifier, only present on open orders
    #[serde(default)]
    pub uuid: Option<String>,
    /// Order identifier used for cancel and lookup
    pub order_uuid: String,
    /// Market name (e.g., "BTC-LTC")
    pub exchange: String,
    /// "LIMIT_BUY" or "LIMIT_SELL"
    #[serde(alias = "Type")]
    pub order_type: String,
    pub quantity: Decimal,
    pub quantity_remaining: Decimal,
    /// Limit price
    pub limit: Decimal,
    #[serde(alias = "CommissionPaid")]
    pub commission: Decimal,
    /// Total cost of filled quantity
    pub price: Decimal,
    #[serde(default)]
    pub price_per_unit: Option<Decimal>,
    #[serde(alias = "Opened", with = "timestamp")]
    pub time_stamp: NaiveDateTime,
    #[serde(default, with = "timestamp_opt")]
    pub closed: Option<NaiveDateTime>,
    #[serde(default)]
    pub cancel_initiated: Option<bool>,
    #[serde(default)]
    pub immediate_or_cancel: Option<bool>,
    #[serde(default)]
    pub is_conditional: Option<bool>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub condition_target: Option<Decimal>,
}

impl Order {
    /// Quantity already executed
    pub fn filled(&self) -> Decimal {
        self.quantity - self.quantity_remaining
    }

    /// Whether the order is still resting on the book
    pub fn is_open(&self) -> bool {
        self.closed.is_none() && !self.quantity_remaining.is_zero()
    }
}

// ============================================================================
// Balances
// ============================================================================

/// Balance of a single currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Balance {
    pub currency: String,
    /// Total balance
    pub balance: Decimal,
    /// Balance not reserved by open orders
    pub available: Decimal,
    /// Unconfirmed deposits
    pub pending: Decimal,
    #[serde(default)]
    pub crypto_address: Option<String>,
    #[serde(default)]
    pub requested: Option<bool>,
    #[serde(default)]
    pub uuid: Option<String>,
}

impl Balance {
    /// Amount reserved by open orders
    pub fn reserved(&self) -> Decimal {
        self.balance - self.available
    }
}

// ============================================================================
// Funding
// ============================================================================

/// Deposit address for a currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    pub currency: String,
    pub address: String,
}

/// Entry of the withdrawal history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Withdrawal {
    pub payment_uuid: String,
    pub currency: String,
    pub amount: Decimal,
    /// Destination address
    pub address: String,
    #[serde(with = "timestamp")]
    pub opened: NaiveDateTime,
    pub authorized: bool,
    pub pending_payment: bool,
    /// Network fee charged
    pub tx_cost: Decimal,
    /// Blockchain transaction id, once broadcast
    #[serde(default)]
    pub tx_id: Option<String>,
    pub canceled: bool,
    pub invalid_address: bool,
}

/// Entry of the deposit history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Deposit {
    pub id: u64,
    pub amount: Decimal,
    pub currency: String,
    pub confirmations: u32,
    #[serde(with = "timestamp")]
    pub last_updated: NaiveDateTime,
    pub tx_id: String,
    pub crypto_address: String,
}
