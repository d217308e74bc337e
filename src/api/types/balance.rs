//! Account balance types for the Buycoins GraphQL API.

use serde::{Deserialize, Serialize};

use crate::shared::serde_util::null_default;

/// Confirmed balance for one cryptocurrency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub id: String,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub cryptocurrency: String,
    /// Decimal string
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub confirmed_balance: String,
}

/// `crypto` is nullable in the schema; `None` asks for every balance.
#[derive(Debug, Serialize)]
pub(crate) struct BalancesVariables<'a> {
    pub crypto: Option<&'a str>,
}
