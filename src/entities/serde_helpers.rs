//! Field decoders shared by the dataset records.

use serde::{Deserialize, Deserializer};

/// Deserialize a field that may be `null`, treating null as the type's default
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
