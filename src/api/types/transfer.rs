//! On-chain transfer types for the Buycoins GraphQL API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::shared::serde_util::null_default;

/// An on-chain send request, as returned by the `send` mutation.
///
/// The remote nests the broadcast transaction as `transaction { hash id }`,
/// which stays `null` until the send is broadcast. It is flattened here;
/// both fields are empty before broadcast. Serializing restores the nested
/// shape, so a transfer reads back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "wire::OnChainTransferResponse", into = "wire::OnChainTransferResponse")]
pub struct OnChainTransfer {
    pub id: String,
    pub address: String,
    pub amount: String,
    pub cryptocurrency: String,
    pub fee: String,
    pub status: String,
    pub transaction_hash: String,
    pub transaction_id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct SendOnChainVariables<'a> {
    pub cryptocurrency: &'a str,
    pub amount: Decimal,
    pub address: &'a str,
}

mod wire {
    use super::*;

    #[derive(Serialize, Deserialize)]
    pub struct OnChainTransferResponse {
        #[serde(default, deserialize_with = "null_default::deserialize")]
        pub id: String,
        #[serde(default, deserialize_with = "null_default::deserialize")]
        pub address: String,
        #[serde(default, deserialize_with = "null_default::deserialize")]
        pub amount: String,
        #[serde(default, deserialize_with = "null_default::deserialize")]
        pub cryptocurrency: String,
        #[serde(default, deserialize_with = "null_default::deserialize")]
        pub fee: String,
        #[serde(default, deserialize_with = "null_default::deserialize")]
        pub status: String,
        #[serde(default)]
        pub transaction: Option<Transaction>,
    }

    #[derive(Serialize, Deserialize, Default)]
    pub struct Transaction {
        #[serde(default, deserialize_with = "null_default::deserialize")]
        pub hash: String,
        #[serde(default, deserialize_with = "null_default::deserialize")]
        pub id: String,
    }

    impl From<OnChainTransferResponse> for OnChainTransfer {
        fn from(resp: OnChainTransferResponse) -> Self {
            let tx = resp.transaction.unwrap_or_default();
            OnChainTransfer {
                id: resp.id,
                address: resp.address,
                amount: resp.amount,
                cryptocurrency: resp.cryptocurrency,
                fee: resp.fee,
                status: resp.status,
                transaction_hash: tx.hash,
                transaction_id: tx.id,
            }
        }
    }

    impl From<OnChainTransfer> for OnChainTransferResponse {
        fn from(transfer: OnChainTransfer) -> Self {
            let broadcast =
                !transfer.transaction_hash.is_empty() || !transfer.transaction_id.is_empty();
            OnChainTransferResponse {
                id: transfer.id,
                address: transfer.address,
                amount: transfer.amount,
                cryptocurrency: transfer.cryptocurrency,
                fee: transfer.fee,
                status: transfer.status,
                transaction: broadcast.then(|| Transaction {
                    hash: transfer.transaction_hash,
                    id: transfer.transaction_id,
                }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_flattens_transaction() {
        let json = r#"{
            "id": "T25jaGFpblRyYW5zZmVy",
            "address": "bc1qexample",
            "amount": "0.01",
            "cryptocurrency": "bitcoin",
            "fee": "0.0001",
            "status": "processing",
            "transaction": {"hash": "abc123", "id": "VHJhbnNhY3Rpb24tMQ=="}
        }"#;
        let transfer: OnChainTransfer = serde_json::from_str(json).unwrap();
        assert_eq!(transfer.transaction_hash, "abc123");
        assert_eq!(transfer.transaction_id, "VHJhbnNhY3Rpb24tMQ==");
        assert_eq!(transfer.status, "processing");
    }

    #[test]
    fn test_transfer_without_transaction() {
        let json = r#"{"id": "x", "status": "pending", "transaction": null}"#;
        let transfer: OnChainTransfer = serde_json::from_str(json).unwrap();
        assert_eq!(transfer.transaction_hash, "");
        assert_eq!(transfer.transaction_id, "");
    }

    #[test]
    fn test_transfer_serializes_back_to_nested_shape() {
        let transfer = OnChainTransfer {
            id: "t1".to_string(),
            address: "bc1qexample".to_string(),
            amount: "0.01".to_string(),
            cryptocurrency: "bitcoin".to_string(),
            fee: "0.0001".to_string(),
            status: "processing".to_string(),
            transaction_hash: "abc".to_string(),
            transaction_id: "tx1".to_string(),
        };

        let value = serde_json::to_value(&transfer).unwrap();
        assert_eq!(value["transaction"], serde_json::json!({ "hash": "abc", "id": "tx1" }));
        assert!(value.get("transaction_hash").is_none());

        let back: OnChainTransfer = serde_json::from_value(value).unwrap();
        assert_eq!(back, transfer);
    }

    #[test]
    fn test_unbroadcast_transfer_serializes_null_transaction() {
        let transfer = OnChainTransfer {
            id: "t2".to_string(),
            status: "pending".to_string(),
            ..Default::default()
        };

        let value = serde_json::to_value(&transfer).unwrap();
        assert!(value["transaction"].is_null());

        let back: OnChainTransfer = serde_json::from_value(value).unwrap();
        assert_eq!(back, transfer);
    }
}
