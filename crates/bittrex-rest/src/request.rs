//! Request construction and signing
//!
//! Every call, public or private, goes through [`SignedRequestBuilder`]. It is
//! the only code that knows how URLs are laid out and how the `apisign`
//! header is computed, so moving to a different method or a signed body only
//! touches this module.

use bittrex_auth::Credentials;
use std::fmt;

use crate::error::{RestError, RestResult};

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://bittrex.com/api/";

/// API version segment appended to the root
pub const API_VERSION: &str = "v1.1";

/// Header carrying the hex HMAC-SHA512 signature
pub const SIGNATURE_HEADER: &str = "apisign";

/// HTTP method
///
/// The exchange takes every call, including order placement and
/// withdrawals, as a GET with parameters in the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully formed request, ready for a [`Transport`](crate::transport::Transport)
#[derive(Clone, PartialEq, Eq)]
pub struct SignedRequest {
    pub method: Method,
    /// Complete URL including the query string
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
}

impl SignedRequest {
    /// Look up a header value by name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Whether the request carries a signature
    pub fn is_signed(&self) -> bool {
        self.header(SIGNATURE_HEADER).is_some()
    }

    /// Path and query relative to the versioned API root
    pub fn resource(&self) -> &str {
        self.url
            .split_once(API_VERSION)
            .map(|(_, rest)| rest.trim_start_matches('/'))
            .unwrap_or(&self.url)
    }
}

impl fmt::Debug for SignedRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(name, value)| {
                if name.eq_ignore_ascii_case(SIGNATURE_HEADER) {
                    (*name, "[REDACTED]")
                } else {
                    (*name, value.as_str())
                }
            })
            .collect();

        f.debug_struct("SignedRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &headers)
            .finish()
    }
}

/// Builds canonical, optionally signed, request URLs
#[derive(Debug, Clone)]
pub struct SignedRequestBuilder {
    base_url: String,
    credentials: Option<Credentials>,
}

impl SignedRequestBuilder {
    /// Create a builder rooted at `base_url`
    pub fn new(base_url: impl Into<String>, credentials: Option<Credentials>) -> Self {
        Self {
            base_url: base_url.into(),
            credentials,
        }
    }

    /// Check if the builder can sign requests
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// URL of `path` without any query string
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            API_VERSION,
            path.trim_start_matches('/')
        )
    }

    /// Build a request, drawing a fresh nonce when authentication is required
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - Endpoint relative to the versioned root (e.g., "public/getmarkets")
    /// * `params` - Query parameters, in the order they should appear
    /// * `requires_auth` - Add `apikey`, `nonce` and the `apisign` header
    pub fn build(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, String)],
        requires_auth: bool,
    ) -> RestResult<SignedRequest> {
        if !requires_auth {
            return self.assemble(method, path, params.to_vec(), None);
        }

        let credentials = self.credentials.as_ref().ok_or(RestError::AuthRequired)?;
        self.build_with_nonce(method, path, params, requires_auth, credentials.next_nonce())
    }

    /// Build a request with a caller-supplied nonce
    ///
    /// Output is a pure function of the inputs and the credentials. The nonce
    /// is ignored for public requests.
    pub fn build_with_nonce(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, String)],
        requires_auth: bool,
        nonce: u64,
    ) -> RestResult<SignedRequest> {
        if !requires_auth {
            return self.assemble(method, path, params.to_vec(), None);
        }

        let credentials = self.credentials.as_ref().ok_or(RestError::AuthRequired)?;

        let mut pairs = params.to_vec();
        pairs.push(("apikey", credentials.api_key().to_string()));
        pairs.push(("nonce", nonce.to_string()));
        // Signed queries are canonicalised by key; ties keep caller order
        pairs.sort_by(|a, b| a.0.cmp(b.0));

        self.assemble(method, path, pairs, Some(credentials))
    }

    fn assemble(
        &self,
        method: Method,
        path: &str,
        pairs: Vec<(&str, String)>,
        signer: Option<&Credentials>,
    ) -> RestResult<SignedRequest> {
        let query = serde_urlencoded::to_string(&pairs)
            .map_err(|e| RestError::InvalidParameter(e.to_string()))?;

        let mut url = self.endpoint(path);
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }

        let mut headers = Vec::new();
        if let Some(credentials) = signer {
            headers.push((SIGNATURE_HEADER, credentials.sign(&url)));
        }

        Ok(SignedRequest {
            method,
            url,
            headers,
        })
    }
}
