//! API endpoint implementations

pub mod account;
pub mod market;
pub mod public;

pub use account::AccountEndpoints;
pub use market::MarketEndpoints;
pub use public::PublicEndpoints;

use bittrex_types::MarketSelector;
use rust_decimal::Decimal;

/// Upper bound for order book depth and history counts
pub const MAX_ROWS: u32 = 100;

/// Clamp an order book depth or history count to 1..=100
pub fn clamp_rows(rows: u32) -> u32 {
    rows.clamp(1, MAX_ROWS)
}

/// Quantities and rates are sent with eight fractional digits
pub(crate) fn format_amount(value: Decimal) -> String {
    let mut value = value.round_dp(8);
    value.rescale(8);
    value.to_string()
}

/// Parameters shared by the history endpoints
///
/// `None` leaves the count out so the exchange returns its maximum.
pub(crate) fn history_params(
    filter_key: &'static str,
    selector: &MarketSelector,
    count: Option<u32>,
) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(count) = count {
        params.push(("count", clamp_rows(count).to_string()));
    }
    if let Some(id) = selector.as_filter() {
        params.push((filter_key, id.to_string()));
    }
    params
}
