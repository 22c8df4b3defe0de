//! Credentials and request signing for the Bittrex v1.1 API
//!
//! Private endpoints are authenticated by adding `apikey` and `nonce` to the
//! query string and sending the hex HMAC-SHA512 of the full URL, keyed with
//! the API secret, in the `apisign` header.
//!
//! # Example
//!
//! ```no_run
//! use bittrex_auth::Credentials;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load credentials from environment
//!     let creds = Credentials::from_env()?;
//!
//!     let nonce = creds.next_nonce();
//!     let url = format!(
//!         "https://bittrex.com/api/v1.1/account/getbalances?apikey={}&nonce={}",
//!         creds.api_key(),
//!         nonce
//!     );
//!     println!("apisign: {}", creds.sign(&url));
//!
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;

pub use credentials::{Credentials, API_KEY_ENV, API_SECRET_ENV};
pub use error::{AuthError, AuthResult};
