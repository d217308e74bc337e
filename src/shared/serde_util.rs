//! Custom serde helpers for the GraphQL wire format.

/// Deserializes `null` as the type's default value.
///
/// GraphQL marks most order fields nullable (e.g. `meanExecutionPrice` on an
/// unfilled order). Entities expose plain `String`s, so `null` becomes `""`.
/// Pair with `#[serde(default)]` to also cover absent fields.
pub mod null_default {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Default,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }
}
