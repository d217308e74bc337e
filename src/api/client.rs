//! Buycoins GraphQL client implementation.
//!
//! The [`BuycoinsClient`] maps each exchange operation onto one fixed GraphQL
//! document, binds the caller's arguments as variables, attaches the Basic
//! auth header and decodes the operation's root field.
//!
//! # Example
//!
//! ```rust,ignore
//! use buycoins_orderbook::api::{BuycoinsClient, OrderSide, OrderStatus};
//! use buycoins_orderbook::network::Environment;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BuycoinsClient::new("public_key", "secret_key", Environment::Staging)?;
//!
//!     let page = client.get_orders("btc_ngnt", OrderStatus::Pending, OrderSide::Buy).await?;
//!     for order in page.orders() {
//!         println!("{} {} @ {}", order.side, order.initial_base_quantity, order.price);
//!     }
//!
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::api::documents::{self, Document};
use crate::api::error::{ApiError, ApiResult, GraphQlError};
use crate::api::types::*;
use crate::auth::Credentials;
use crate::network::Environment;

/// Builder for configuring [`BuycoinsClient`].
#[derive(Debug, Clone)]
pub struct BuycoinsClientBuilder {
    credentials: Credentials,
    environment: Environment,
    endpoint: Option<String>,
    timeout: Option<Duration>,
    default_headers: Vec<(String, String)>,
}

impl BuycoinsClientBuilder {
    /// Create a new builder for the given API key pair.
    pub fn new(public_key: &str, secret_key: &str) -> Self {
        Self {
            credentials: Credentials::new(public_key, secret_key),
            environment: Environment::Unset,
            endpoint: None,
            timeout: None,
            default_headers: Vec::new(),
        }
    }

    /// Select one of the fixed endpoints.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Target an explicit GraphQL URL. Takes precedence over the environment.
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = Some(url.into());
        self
    }

    /// Set a total request timeout. Unset by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Add a default header to all requests.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Build the client.
    pub fn build(self) -> ApiResult<BuycoinsClient> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        for (name, value) in self.default_headers {
            let header_name = HeaderName::try_from(name.as_str()).map_err(|e| {
                ApiError::InvalidParameter(format!("Invalid header name '{}': {}", name, e))
            })?;
            let header_value = HeaderValue::from_str(&value).map_err(|e| {
                ApiError::InvalidParameter(format!("Invalid header value for '{}': {}", name, e))
            })?;
            headers.insert(header_name, header_value);
        }

        let mut auth_header = HeaderValue::from_str(self.credentials.header_value())
            .map_err(|e| ApiError::InvalidParameter(format!("Invalid credentials: {}", e)))?;
        auth_header.set_sensitive(true);

        let mut builder = Client::builder()
            .default_headers(headers)
            .pool_max_idle_per_host(10);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        let endpoint = self
            .endpoint
            .or_else(|| self.environment.endpoint().map(str::to_string));

        tracing::debug!(
            environment = %self.environment,
            endpoint = endpoint.as_deref().unwrap_or("<none>"),
            "Built Buycoins client"
        );

        Ok(BuycoinsClient {
            http_client,
            endpoint,
            environment: self.environment,
            auth_header,
        })
    }
}

/// Buycoins pro orderbook GraphQL client.
///
/// Immutable after construction; clones share the connection pool and are
/// safe to use from concurrent tasks. Each method issues exactly one request.
#[derive(Debug, Clone)]
pub struct BuycoinsClient {
    http_client: Client,
    endpoint: Option<String>,
    environment: Environment,
    auth_header: HeaderValue,
}

/// Request body for a GraphQL POST.
#[derive(Debug, Serialize)]
struct GraphQlRequest<V> {
    query: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<V>,
}

/// Response envelope for a GraphQL POST.
#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<serde_json::Value>,
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
}

impl BuycoinsClient {
    /// Create a client for a fixed environment with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(public_key: &str, secret_key: &str, environment: Environment) -> ApiResult<Self> {
        BuycoinsClientBuilder::new(public_key, secret_key)
            .environment(environment)
            .build()
    }

    /// Create a new client builder for custom configuration.
    pub fn builder(public_key: &str, secret_key: &str) -> BuycoinsClientBuilder {
        BuycoinsClientBuilder::new(public_key, secret_key)
    }

    /// The GraphQL URL requests are sent to, if one is configured.
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    // =========================================================================
    // Market endpoints
    // =========================================================================

    /// List the tradeable pairs, e.g. `btc_ngnt`.
    pub async fn get_pairs(&self) -> ApiResult<Vec<String>> {
        self.execute(&documents::GET_PAIRS, None::<()>).await
    }

    // =========================================================================
    // Order endpoints
    // =========================================================================

    /// Get one page of the account's pro orders matching a filter.
    pub async fn get_orders(
        &self,
        pair: impl AsRef<str>,
        status: impl AsRef<str>,
        side: impl AsRef<str>,
    ) -> ApiResult<OrderPage> {
        let variables = GetOrdersVariables {
            pair: pair.as_ref(),
            status: status.as_ref(),
            side: side.as_ref(),
        };
        self.execute(&documents::GET_PRO_ORDERS, Some(variables)).await
    }

    /// Cancel a pro order by id. Returns the order's post-cancel state.
    pub async fn cancel_order(&self, id: impl AsRef<str>) -> ApiResult<Order> {
        let variables = CancelOrderVariables { id: id.as_ref() };
        self.execute(&documents::CANCEL_ORDER, Some(variables)).await
    }

    /// Quote the fee for a prospective order.
    pub async fn get_order_fees(
        &self,
        order_type: impl AsRef<str>,
        pair: impl AsRef<str>,
        side: impl AsRef<str>,
        amount: Decimal,
    ) -> ApiResult<OrderFeeQuote> {
        let variables = OrderFeesVariables {
            order_type: order_type.as_ref(),
            pair: pair.as_ref(),
            side: side.as_ref(),
            amount,
        };
        self.execute(&documents::GET_PRO_ORDER_FEES, Some(variables))
            .await
    }

    /// Place a market order.
    pub async fn post_market_order(
        &self,
        pair: impl AsRef<str>,
        quantity: Decimal,
        side: impl AsRef<str>,
    ) -> ApiResult<Order> {
        let variables = MarketOrderVariables {
            pair: pair.as_ref(),
            quantity,
            side: side.as_ref(),
        };
        self.execute(&documents::POST_PRO_MARKET_ORDER, Some(variables))
            .await
    }

    /// Place a limit order.
    pub async fn post_limit_order(
        &self,
        pair: impl AsRef<str>,
        quantity: Decimal,
        price: Decimal,
        side: impl AsRef<str>,
        time_in_force: impl AsRef<str>,
    ) -> ApiResult<Order> {
        let variables = LimitOrderVariables {
            pair: pair.as_ref(),
            quantity,
            price,
            side: side.as_ref(),
            time_in_force: time_in_force.as_ref(),
        };
        self.execute(&documents::POST_PRO_LIMIT_ORDER, Some(variables))
            .await
    }

    // =========================================================================
    // Funding endpoints
    // =========================================================================

    /// Create a SendCash Pay deposit link for a naira amount.
    pub async fn create_deposit_link(&self, amount: Decimal) -> ApiResult<DepositLink> {
        let variables = DepositLinkVariables { amount };
        self.execute(&documents::CREATE_DEPOSIT_LINK, Some(variables))
            .await
    }

    /// Get the balance for one cryptocurrency.
    ///
    /// # Errors
    ///
    /// [`ApiError::EmptyResult`] if the remote returns no balance entries.
    pub async fn get_balance(&self, cryptocurrency: impl AsRef<str>) -> ApiResult<Balance> {
        let cryptocurrency = cryptocurrency.as_ref();
        self.get_balances(Some(cryptocurrency))
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                ApiError::EmptyResult(format!("no balance returned for {}", cryptocurrency))
            })
    }

    /// Get balances, for one cryptocurrency or (with `None`) all of them.
    pub async fn get_balances(&self, cryptocurrency: Option<&str>) -> ApiResult<Vec<Balance>> {
        let variables = BalancesVariables {
            crypto: cryptocurrency,
        };
        self.execute(&documents::GET_BALANCES, Some(variables)).await
    }

    /// Send cryptocurrency to an external on-chain address.
    pub async fn send_on_chain(
        &self,
        cryptocurrency: impl AsRef<str>,
        amount: Decimal,
        address: impl AsRef<str>,
    ) -> ApiResult<OnChainTransfer> {
        let variables = SendOnChainVariables {
            cryptocurrency: cryptocurrency.as_ref(),
            amount,
            address: address.as_ref(),
        };
        self.execute(&documents::SEND_ON_CHAIN, Some(variables)).await
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    /// POST one document and decode its root field.
    async fn execute<V: Serialize, T: DeserializeOwned>(
        &self,
        document: &Document,
        variables: Option<V>,
    ) -> ApiResult<T> {
        let endpoint = self.endpoint.as_deref().ok_or(ApiError::NoEndpoint)?;

        tracing::debug!(operation = document.root, endpoint, "Sending GraphQL request");

        let body = GraphQlRequest {
            query: document.query,
            variables,
        };
        let response = self
            .http_client
            .post(endpoint)
            .header(AUTHORIZATION, self.auth_header.clone())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        decode_response(document.root, status, &text)
    }
}

/// Decode a GraphQL response body into the value at `data.<root>`.
///
/// GraphQL errors win over HTTP status: many servers report validation
/// failures with a 4xx and a well-formed `errors` array.
fn decode_response<T: DeserializeOwned>(
    root: &str,
    status: StatusCode,
    body: &str,
) -> ApiResult<T> {
    let envelope = match serde_json::from_str::<GraphQlResponse>(body) {
        Ok(envelope) => envelope,
        Err(e) if status.is_success() => {
            return Err(ApiError::Deserialize(format!(
                "Failed to deserialize response: {}",
                e
            )));
        }
        Err(_) => return Err(map_status_error(status, body)),
    };

    let errors = envelope.errors.unwrap_or_default();
    if !errors.is_empty() {
        tracing::warn!(
            operation = root,
            status = %status,
            count = errors.len(),
            first = %errors[0].message,
            "GraphQL request returned errors"
        );
        return Err(ApiError::GraphQl(errors));
    }

    if !status.is_success() {
        return Err(map_status_error(status, body));
    }

    let field = envelope
        .data
        .and_then(|mut data| data.as_object_mut().and_then(|map| map.remove(root)))
        .ok_or_else(|| ApiError::Deserialize(format!("response data has no `{}` field", root)))?;

    serde_json::from_value(field)
        .map_err(|e| ApiError::Deserialize(format!("Failed to deserialize `{}`: {}", root, e)))
}

/// Map a non-GraphQL HTTP failure to an ApiError.
fn map_status_error(status: StatusCode, body: &str) -> ApiError {
    tracing::warn!(status = %status, "GraphQL endpoint returned non-success status");
    let body = body.to_string();
    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized(body),
        _ if status.is_server_error() => ApiError::ServerError(status.as_u16(), body),
        _ => ApiError::UnexpectedStatus(status.as_u16(), body),
    }
}
