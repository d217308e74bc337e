//! Request and response types for the Buycoins GraphQL API.
//!
//! Response entities are plain values decoded from one server response.
//! Decimal and enumeration fields stay as the text the remote sent.

pub mod balance;
pub mod deposit;
pub mod order;
pub mod transfer;

// Re-export all types for convenience
pub use balance::*;
pub use deposit::*;
pub use order::*;
pub use transfer::*;
