//! serde helpers for keys that may hold `null`.
//!
//! A plain `Option<T>` field treats a missing key as `None`. These helpers
//! keep the two cases apart:
//!
//! * [`required`]: the key must be present, `null` is allowed. Use without
//!   `#[serde(default)]` so a missing key is a decode error.
//! * [`double_option`]: the key may be absent (`None`), `null`
//!   (`Some(None)`) or a value. Pair with `default` and
//!   `skip_serializing_if = "Option::is_none"` so absent keys stay absent.

use serde::{Deserialize, Deserializer};

pub fn required<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(d)
}

pub fn double_option<'de, D, T>(d: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(d).map(Some)
}
