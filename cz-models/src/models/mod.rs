//! Entity model definitions.

pub mod collection;
pub mod document;
pub mod media;
pub mod webhook;

use serde::{Deserialize, Deserializer};

/// Deserialize a JSON `null` as the type's default value.
///
/// The service sends `null` for empty strings, lists and payloads in some
/// responses; absent fields are covered by `#[serde(default)]`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
