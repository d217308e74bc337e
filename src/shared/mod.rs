//! Shared utilities used by the API response types.

pub mod serde_util;
