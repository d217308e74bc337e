//! Deposit link types for the Buycoins GraphQL API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::shared::serde_util::null_default;

/// A SendCash Pay deposit link created by `createSendCashPayDeposit`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositLink {
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub amount: String,
    /// Unix timestamp (seconds)
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub created_at: i64,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub fee: String,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub id: String,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub link: String,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub reference: String,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub status: String,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub total_amount: String,
    #[serde(rename = "type", default, deserialize_with = "null_default::deserialize")]
    pub kind: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct DepositLinkVariables {
    pub amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deposit_link_deserialize() {
        let json = r#"{
            "amount": "5000.0",
            "createdAt": 1625097600,
            "fee": "50.0",
            "id": "U2VuZGNhc2hQYXlEZXBvc2l0LTE=",
            "link": "https://pay.sendcash.africa/abc",
            "reference": "SCP-123",
            "status": "pending",
            "totalAmount": "5050.0",
            "type": "deposit"
        }"#;
        let link: DepositLink = serde_json::from_str(json).unwrap();
        assert_eq!(link.created_at, 1625097600);
        assert_eq!(link.kind, "deposit");
        assert_eq!(link.total_amount, "5050.0");
    }

    #[test]
    fn test_deposit_link_null_timestamp() {
        let link: DepositLink = serde_json::from_str(r#"{"createdAt": null, "id": "x"}"#).unwrap();
        assert_eq!(link.created_at, 0);
        assert_eq!(link.id, "x");
    }
}
