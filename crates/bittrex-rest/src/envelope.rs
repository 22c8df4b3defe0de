//! Response envelope decoding
//!
//! Every response, successful or not, is wrapped as
//! `{"success": bool, "message": string, "result": <payload>}`. The outer
//! layer is parsed first and the payload is kept as raw JSON until the caller
//! names the type it expects.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::value::RawValue;
use tracing::warn;

use crate::error::{RestError, RestResult};

/// Outer response wrapper with a deferred payload
#[derive(Debug, Deserialize)]
pub struct Envelope {
    /// Whether the exchange accepted the call
    pub success: bool,
    /// Error message (empty if successful)
    #[serde(default)]
    pub message: Option<String>,
    /// Undecoded payload; not valid to inspect when `success` is false
    #[serde(default)]
    pub result: Option<Box<RawValue>>,
}

impl Envelope {
    /// Parse the outer layer only
    pub fn parse(raw: &[u8]) -> RestResult<Self> {
        serde_json::from_slice(raw).map_err(|source| RestError::Decode {
            context: "envelope",
            source,
        })
    }

    /// Decode the payload as `T`, or return the exchange's error
    ///
    /// An absent `result` decodes as JSON `null`.
    pub fn into_result<T: DeserializeOwned>(self) -> RestResult<T> {
        if !self.success {
            let message = self.message.unwrap_or_default();
            warn!(message = %message, "Exchange rejected request");
            return Err(RestError::Api { message });
        }

        let payload = self.result.as_deref().map(RawValue::get).unwrap_or("null");
        serde_json::from_str(payload).map_err(|source| RestError::Decode {
            context: "result",
            source,
        })
    }
}

/// Decode raw response bytes into the expected payload type
///
/// All-or-nothing: either a complete `T` or an error, never a partial value.
pub fn decode<T: DeserializeOwned>(raw: &[u8]) -> RestResult<T> {
    Envelope::parse(raw)?.into_result()
}
