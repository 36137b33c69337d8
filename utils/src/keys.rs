//! Map key normalization.

use std::collections::HashMap;

/// Re-key a map (or any pair iterator) by the string form of its keys.
///
/// Keys that stringify identically collapse; the last one wins.
pub fn stringify_keys<K, V, I>(entries: I) -> HashMap<String, V>
where
    I: IntoIterator<Item = (K, V)>,
    K: ToString,
{
    entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}
