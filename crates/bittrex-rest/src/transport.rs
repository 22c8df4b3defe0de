//! HTTP transport seam
//!
//! The client hands a [`SignedRequest`] to a [`Transport`] and gets the raw
//! response body back. [`ReqwestTransport`] is the production implementation;
//! tests substitute their own.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::error::RestResult;
use crate::request::{Method, SignedRequest};

/// Executes a request and returns the response body
///
/// Implementations must not retry and must not interpret the body; a
/// non-2xx status with a body is still a successful transport round trip,
/// since the exchange reports failures inside the envelope.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: &SignedRequest) -> RestResult<Vec<u8>>;
}

/// reqwest-backed transport with a fixed client-wide timeout
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport applying `timeout` to every request
    pub fn new(timeout: Duration, user_agent: &str) -> RestResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self::with_client(client))
    }

    /// Wrap an existing reqwest client
    ///
    /// Proxy, TLS and pool settings come from `client` as is.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: &SignedRequest) -> RestResult<Vec<u8>> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        debug!(status = status.as_u16(), bytes = body.len(), "Received response");

        Ok(body.to_vec())
    }
}
