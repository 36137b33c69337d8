//! Thousands grouping for large counts.

/// Write `n` in decimal with `delimiter` between groups of three digits.
///
/// `group_thousands(1447489, ",")` is `"1,447,489"`. Any delimiter string is
/// allowed, including an empty one.
pub fn group_thousands(n: u128, delimiter: &str) -> String {
    let digits = n.to_string();
    let lead = digits.len() % 3;
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * delimiter.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && i % 3 == lead {
            out.push_str(delimiter);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_numbers_are_untouched() {
        assert_eq!(group_thousands(0, ","), "0");
        assert_eq!(group_thousands(7, ","), "7");
        assert_eq!(group_thousands(999, ","), "999");
    }

    #[test]
    fn groups_from_the_right() {
        assert_eq!(group_thousands(1_000, ","), "1,000");
        assert_eq!(group_thousands(12_345, ","), "12,345");
        assert_eq!(group_thousands(123_456, ","), "123,456");
        assert_eq!(group_thousands(1_447_489, ","), "1,447,489");
    }

    #[test]
    fn custom_delimiters() {
        assert_eq!(group_thousands(1_447_489, "-"), "1-447-489");
        assert_eq!(group_thousands(1_447_489, " "), "1 447 489");
        assert_eq!(group_thousands(1_447_489, ""), "1447489");
        assert_eq!(group_thousands(1_000_000, "::"), "1::000::000");
    }

    #[test]
    fn largest_value() {
        assert_eq!(
            group_thousands(u128::MAX, ","),
            "340,282,366,920,938,463,463,374,607,431,768,211,455"
        );
    }
}
