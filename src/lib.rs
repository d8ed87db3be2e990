//! # Mollie API Client
//!
//! Rust client for the [Mollie](https://www.mollie.com) payments REST API.
//!
//! ## Features
//!
//! - Typed service per resource: payments, orders, refunds, chargebacks,
//!   customers, mandates, subscriptions, settlements, invoices, methods,
//!   profiles, webhooks, balances, terminals, partner clients, onboarding
//!   and wallets
//! - Bearer authentication with API keys, organization tokens and OAuth
//!   access tokens, held as `SecretString`
//! - Pluggable HTTP transport (pre-authorized transports supported)
//! - Automatic `Idempotency-Key` injection on mutating requests
//! - HAL pagination helpers and deterministic query-string encoding
//! - The full response attached to every outcome: success payloads deref to
//!   the DTO and keep the response alongside, errors carry it too
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mollie_rs::{Client, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(Config::live("live_yourApiKey"))?;
//!
//!     let payment = client.payments.get("tr_WDqYK6vllg", None).await?;
//!     println!("{:?}", payment.status);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - `client` - Client construction and the shared request primitives
//! - `config` - Live/test context and credential source selection
//! - `auth` - Credential classification (API key, org token, access token)
//! - `transport` - HTTP transport trait and reqwest implementation
//! - `errors` - Error taxonomy and the upstream error envelope
//! - `query` - Deterministic query-string encoding for list options
//! - `pagination` - HAL links and cursor extraction
//! - `idempotency` - Idempotency key generators
//! - `types` - Shared value types (`Amount`, `ShortDate`, …)
//! - `services` - One module per upstream resource

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod idempotency;
pub mod pagination;
pub mod query;
pub mod services;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod mocks;

// Re-exports for convenience
pub use auth::Credential;
pub use client::{Client, ClientBuilder};
pub use config::{Config, API_TOKEN_ENV, ORG_TOKEN_ENV};
pub use errors::{ApiError, MollieError, MollieResult};
pub use idempotency::{FixedKeyGenerator, IdempotencyKeyGenerator, UuidKeyGenerator};
pub use pagination::{cursor_from_url, Link, ListLinks};
pub use transport::{ApiResponse, HttpResponse, HttpTransport, ReqwestTransport};
pub use types::{Address, Amount, Mode, SequenceType, ShortDate};

/// The default Mollie API base URL. The trailing slash is load-bearing:
/// relative joins are rejected without it.
pub const BASE_URL: &str = "https://api.mollie.com/";

/// The API version prefix joined under the base URL.
pub const API_VERSION: &str = "v2";
