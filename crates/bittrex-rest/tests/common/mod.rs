//! Common test utilities and fixtures for integration tests
//!
//! Contains a scripted transport and sample payloads in the shape the
//! Bittrex v1.1 API returns them.

#![allow(dead_code)]

use async_trait::async_trait;
use bittrex_rest::{
    BittrexClient, ClientConfig, Credentials, RestError, RestResult, SignedRequest, Transport,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub const API_KEY: &str = "3f1b8e0c5a2d4c7e9b6a1d0f2e4c8a7b";
pub const API_SECRET: &str = "9c2e7a4b1d8f0e3c6a5b2d9f7e1c4a8b";

/// A scripted response
pub enum Reply {
    Body(String),
    Fail(&'static str),
}

/// Transport that replays scripted responses and records every request
#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<SignedRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue a response body
    pub fn reply(&self, body: impl Into<String>) -> &Self {
        self.replies.lock().unwrap().push_back(Reply::Body(body.into()));
        self
    }

    /// Queue a transport failure
    pub fn fail(&self, reason: &'static str) -> &Self {
        self.replies.lock().unwrap().push_back(Reply::Fail(reason));
        self
    }

    /// Requests seen so far
    pub fn requests(&self) -> Vec<SignedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The most recent request
    pub fn last(&self) -> SignedRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: &SignedRequest) -> RestResult<Vec<u8>> {
        self.requests.lock().unwrap().push(request.clone());

        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Body(body)) => Ok(body.into_bytes()),
            Some(Reply::Fail(reason)) => Err(RestError::transport(reason)),
            None => panic!("unexpected request to {}", request.url),
        }
    }
}

pub fn credentials() -> Credentials {
    Credentials::new(API_KEY, API_SECRET).unwrap()
}

/// Client with credentials on top of `transport`
pub fn private_client(transport: &Arc<MockTransport>) -> BittrexClient {
    BittrexClient::with_transport(
        ClientConfig::new().with_credentials(credentials()),
        transport.clone(),
    )
}

/// Client without credentials on top of `transport`
pub fn public_client(transport: &Arc<MockTransport>) -> BittrexClient {
    BittrexClient::with_transport(ClientConfig::new(), transport.clone())
}

/// Wrap a payload in a successful envelope
pub fn ok(result: &str) -> String {
    format!(r#"{{"success":true,"message":"","result":{}}}"#, result)
}

/// A failed envelope
pub fn err(message: &str) -> String {
    format!(r#"{{"success":false,"message":"{}","result":null}}"#, message)
}

/// Query parameters of a URL, in order
pub fn query(url: &str) -> Vec<(String, String)> {
    let query = url.split_once('?').map(|(_, q)| q).unwrap_or("");
    serde_urlencoded::from_str(query).unwrap()
}

pub const MARKETS: &str = r#"[
    {
        "MarketCurrency": "LTC",
        "BaseCurrency": "BTC",
        "MarketCurrencyLong": "Litecoin",
        "BaseCurrencyLong": "Bitcoin",
        "MinTradeSize": 0.01000000,
        "MarketName": "BTC-LTC",
        "IsActive": true,
        "Created": "2014-02-13T00:00:00"
    },
    {
        "MarketCurrency": "DOGE",
        "BaseCurrency": "BTC",
        "MarketCurrencyLong": "Dogecoin",
        "BaseCurrencyLong": "Bitcoin",
        "MinTradeSize": 100.00000000,
        "MarketName": "BTC-DOGE",
        "IsActive": true,
        "Created": "2014-02-13T00:00:00",
        "Notice": null,
        "IsSponsored": null,
        "LogoUrl": "https://bittrexblobstorage.blob.core.windows.net/public/doge.png"
    }
]"#;

pub const CURRENCIES: &str = r#"[
    {
        "Currency": "BTC",
        "CurrencyLong": "Bitcoin",
        "MinConfirmation": 2,
        "TxFee": 0.00020000,
        "IsActive": true,
        "CoinType": "BITCOIN",
        "BaseAddress": null
    }
]"#;

pub const SUMMARIES: &str = r#"[
    {
        "MarketName": "BTC-888",
        "High": 0.00000919,
        "Low": 0.00000820,
        "Volume": 74339.61396015,
        "Last": 0.00000820,
        "BaseVolume": 0.64966963,
        "TimeStamp": "2014-07-09T07:19:30.15",
        "Bid": 0.00000820,
        "Ask": 0.00000831,
        "OpenBuyOrders": 15,
        "OpenSellOrders": 15,
        "PrevDay": 0.00000821,
        "Created": "2014-03-20T06:00:00",
        "DisplayMarketName": null
    }
]"#;

pub const ORDER_BOOK: &str = r#"{
    "buy": [
        {"Quantity": 12.37000000, "Rate": 0.02525000},
        {"Quantity": 3.10000000, "Rate": 0.02520000}
    ],
    "sell": [
        {"Quantity": 32.55412402, "Rate": 0.02540000},
        {"Quantity": 60.00000000, "Rate": 0.02550000},
        {"Quantity": 60.00000000, "Rate": 0.02575000}
    ]
}"#;

pub const TRADES: &str = r#"[
    {
        "Id": 319435,
        "TimeStamp": "2014-07-09T03:21:20.08",
        "Quantity": 0.30802438,
        "Price": 0.01263400,
        "Total": 0.00389158,
        "FillType": "FILL",
        "OrderType": "BUY"
    },
    {
        "Id": 319433,
        "TimeStamp": "2014-07-09T03:21:20.08",
        "Quantity": 0.31820814,
        "Price": 0.01262800,
        "Total": 0.00401833,
        "FillType": "PARTIAL_FILL",
        "OrderType": "SELL"
    }
]"#;

pub const OPEN_ORDERS: &str = r#"[
    {
        "Uuid": null,
        "OrderUuid": "09aa5bb6-8232-41aa-9b78-a5a1093e0211",
        "Exchange": "BTC-LTC",
        "OrderType": "LIMIT_SELL",
        "Quantity": 5.00000000,
        "QuantityRemaining": 5.00000000,
        "Limit": 2.00000000,
        "CommissionPaid": 0.00000000,
        "Price": 0.00000000,
        "PricePerUnit": null,
        "Opened": "2014-07-09T03:55:48.77",
        "Closed": null,
        "CancelInitiated": false,
        "ImmediateOrCancel": false,
        "IsConditional": false,
        "Condition": null,
        "ConditionTarget": null
    }
]"#;

pub const ORDER: &str = r#"{
    "AccountId": null,
    "OrderUuid": "0cb4c4e4-bdc7-4e13-8c13-430e587d2cc1",
    "Exchange": "BTC-SHLD",
    "Type": "LIMIT_BUY",
    "Quantity": 1000.00000000,
    "QuantityRemaining": 1000.00000000,
    "Limit": 0.00000001,
    "Reserved": 0.00001000,
    "ReserveRemaining": 0.00001000,
    "CommissionReserved": 0.00000002,
    "CommissionReserveRemaining": 0.00000002,
    "CommissionPaid": 0.00000000,
    "Price": 0.00000000,
    "PricePerUnit": null,
    "Opened": "2014-07-13T07:45:46.27",
    "Closed": null,
    "IsOpen": true,
    "Sentinel": "6c454604-22e2-4fb4-892e-179eede20972",
    "CancelInitiated": false,
    "ImmediateOrCancel": false,
    "IsConditional": false,
    "Condition": "NONE",
    "ConditionTarget": null
}"#;

pub const BALANCES: &str = r#"{
    "BTC": {
        "Currency": "BTC",
        "Balance": 14.21549076,
        "Available": 14.21549076,
        "Pending": 0.00000000,
        "CryptoAddress": "1Mrcdr6715hjda34pdXuLqXcju6qgwHA31",
        "Requested": false,
        "Uuid": null
    },
    "DOGE": {
        "Currency": "DOGE",
        "Balance": 4.21549076,
        "Available": 2.00000000,
        "Pending": 0.00000000,
        "CryptoAddress": "DLxcEt3AatMyr2NTatzjsfHNoB9NT62HiF",
        "Requested": false,
        "Uuid": null
    }
}"#;

pub const WITHDRAWALS: &str = r#"[
    {
        "PaymentUuid": "b52c7a5c-90c6-4c6e-835c-e16df12708b1",
        "Currency": "BTC",
        "Amount": 17.00000000,
        "Address": "1DeaaFBdbB5nrHj87x3NHS4onvw1GPNyAu",
        "Opened": "2014-07-09T04:24:47.217",
        "Authorized": true,
        "PendingPayment": false,
        "TxCost": 0.00020000,
        "TxId": null,
        "Canceled": true,
        "InvalidAddress": false
    }
]"#;

pub const DEPOSITS: &str = r#"[
    {
        "Id": 2045339,
        "Amount": 0.31074716,
        "Currency": "BTC",
        "Confirmations": 2,
        "LastUpdated": "2014-07-09T04:24:47.217",
        "TxId": "d7a6c1ac5ff9b3b19c9c3f4b3b0a3e1b8c2a1f0e9d8c7b6a5f4e3d2c1b0a9f8e",
        "CryptoAddress": "1DeaaFBdbB5nrHj87x3NHS4onvw1GPNyAu"
    }
]"#;
