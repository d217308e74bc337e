//! # Buycoins Orderbook Rust SDK
//!
//! A Rust SDK for the Buycoins pro orderbook GraphQL API.
//!
//! ## Modules
//!
//! - [`api`]: GraphQL client for pairs, pro orders, fees, deposits and balances
//! - [`auth`]: Basic auth credentials derived from an API key pair
//! - [`network`]: Endpoint URLs and the [`network::Environment`] selector
//! - [`shared`]: Serde helpers shared by the response types
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use buycoins_orderbook::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BuycoinsClient::new("public_key", "secret_key", Environment::Production)?;
//!
//!     let pairs = client.get_pairs().await?;
//!     println!("Pairs: {:?}", pairs);
//!
//!     let order = client
//!         .post_limit_order(
//!             "btc_ngnt",
//!             dec!(0.005),
//!             dec!(2000000),
//!             OrderSide::Buy,
//!             TimeInForce::GoodTilCancelled,
//!         )
//!         .await?;
//!     println!("Placed {} ({})", order.id, order.status);
//!
//!     Ok(())
//! }
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Shared serde helpers.
pub mod shared;

/// Endpoint URL constants and environment selection.
pub mod network;

/// Basic auth credentials.
pub mod auth;

/// GraphQL API client, documents, errors and types.
#[cfg(feature = "http")]
pub mod api;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use buycoins_orderbook::prelude::*;
/// ```
pub mod prelude {
    pub use crate::auth::Credentials;
    pub use crate::network::{Environment, PRODUCTION_ENDPOINT, STAGING_ENDPOINT};

    #[cfg(feature = "http")]
    pub use crate::api::{
        ApiError, ApiResult, Balance, BuycoinsClient, BuycoinsClientBuilder, DepositLink,
        GraphQlError, OnChainTransfer, Order, OrderEdge, OrderFeeQuote, OrderKind, OrderPage,
        OrderSide, OrderStatus, TimeInForce,
    };
}
