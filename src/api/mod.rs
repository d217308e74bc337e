//! GraphQL API client module for Buycoins.
//!
//! This module provides a typed client for the Buycoins pro orderbook
//! GraphQL API: trading pairs, pro orders, fee quotes, deposit links,
//! balances and on-chain sends.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use buycoins_orderbook::api::{BuycoinsClient, OrderSide, TimeInForce};
//! use buycoins_orderbook::network::Environment;
//! use rust_decimal_macros::dec;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BuycoinsClient::new("public_key", "secret_key", Environment::Production)?;
//!
//!     let fee = client
//!         .get_order_fees("market_order", "btc_usdt", OrderSide::Sell, dec!(0.001))
//!         .await?;
//!     println!("Fee: {}", fee.fee);
//!
//!     let order = client.post_market_order("btc_usdt", dec!(5.00), OrderSide::Buy).await?;
//!     println!("Order {} is {}", order.id, order.status);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Client Configuration
//!
//! ```rust,ignore
//! use std::time::Duration;
//!
//! let client = BuycoinsClient::builder("public_key", "secret_key")
//!     .environment(Environment::Staging)
//!     .timeout(Duration::from_secs(20))
//!     .build()?;
//! ```
//!
//! # Error Handling
//!
//! Every method returns `ApiResult<T>`, an alias for `Result<T, ApiError>`.
//! The library never aborts the process; callers wanting the zero value
//! use `unwrap_or_default()`:
//!
//! ```rust,ignore
//! match client.cancel_order("UHJvT3JkZXIt...").await {
//!     Ok(order) => println!("Cancelled: {}", order.status),
//!     Err(ApiError::GraphQl(errors)) => println!("Rejected: {}", errors[0].message),
//!     Err(e) if e.is_transport() => println!("Network problem: {}", e),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

pub mod client;
pub mod documents;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use client::{BuycoinsClient, BuycoinsClientBuilder};
pub use error::{ApiError, ApiResult, GraphQlError, GraphQlLocation};
pub use types::*;
