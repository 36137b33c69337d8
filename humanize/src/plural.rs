//! English pluralization for unit nouns.

/// Append `s` to `noun` unless `count` is exactly one.
///
/// Zero is plural: `pluralize(0, "day")` is `"days"`.
pub fn pluralize(count: u128, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{noun}s")
    }
}
