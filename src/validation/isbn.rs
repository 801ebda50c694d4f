//! ISBN check-digit validation

use crate::config::IsbnFormat;

/// Strips the separators allowed inside an ISBN (hyphens and spaces).
pub fn normalize_isbn(raw: &str) -> String {
    raw.chars().filter(|c| *c != '-' && *c != ' ').collect()
}

/// Checks an ISBN-10: nine digits followed by a digit or `X`, with a
/// weighted sum divisible by 11.
pub fn is_valid_isbn10(raw: &str) -> bool {
    let canonical = normalize_isbn(raw);
    if canonical.chars().count() != 10 {
        return false;
    }

    let mut sum = 0u32;
    for (i, c) in canonical.chars().enumerate() {
        let digit = match c {
            '0'..='9' => c as u32 - '0' as u32,
            'X' | 'x' if i == 9 => 10,
            _ => return false,
        };
        sum += digit * (10 - i as u32);
    }

    sum % 11 == 0
}

/// Checks an ISBN-13: thirteen digits weighted 1 and 3 alternately, sum
/// divisible by 10.
pub fn is_valid_isbn13(raw: &str) -> bool {
    let canonical = normalize_isbn(raw);
    if canonical.len() != 13 || !canonical.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let sum: u32 = canonical
        .bytes()
        .enumerate()
        .map(|(i, b)| {
            let digit = (b - b'0') as u32;
            if i % 2 == 0 {
                digit
            } else {
                digit * 3
            }
        })
        .sum();

    sum % 10 == 0
}

/// Checks an ISBN against the configured accepted format.
pub fn is_valid_isbn(raw: &str, format: IsbnFormat) -> bool {
    match format {
        IsbnFormat::Isbn10 => is_valid_isbn10(raw),
        IsbnFormat::Any => is_valid_isbn10(raw) || is_valid_isbn13(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_isbn() {
        assert_eq!(normalize_isbn("0-261-10238-9"), "0261102389");
        assert_eq!(normalize_isbn("0 261 10238 9"), "0261102389");
    }

    #[test]
    fn test_isbn10() {
        assert!(is_valid_isbn10("0261102389"));
        assert!(is_valid_isbn10("0-261-10238-9"));
        assert!(is_valid_isbn10("080442957X"));
        assert!(is_valid_isbn10("080442957x"));
        // Wrong check digit
        assert!(!is_valid_isbn10("0261102388"));
        // X only allowed in last position
        assert!(!is_valid_isbn10("X261102389"));
        assert!(!is_valid_isbn10("026110238"));
        assert!(!is_valid_isbn10("02611023899"));
        assert!(!is_valid_isbn10("abcdefghij"));
        assert!(!is_valid_isbn10(""));
    }

    #[test]
    fn test_isbn13() {
        assert!(is_valid_isbn13("9780261102385"));
        assert!(is_valid_isbn13("978-3-16-148410-0"));
        assert!(is_valid_isbn13("978-0261103566"));
        assert!(!is_valid_isbn13("9780261102384"));
        assert!(!is_valid_isbn13("0261102389"));
    }

    #[test]
    fn test_format_policy() {
        assert!(is_valid_isbn("0261102389", IsbnFormat::Isbn10));
        assert!(!is_valid_isbn("9780261102385", IsbnFormat::Isbn10));
        assert!(is_valid_isbn("9780261102385", IsbnFormat::Any));
        assert!(is_valid_isbn("0261102389", IsbnFormat::Any));
        assert!(!is_valid_isbn("1234567890123", IsbnFormat::Any));
    }
}
