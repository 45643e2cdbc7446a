// Token overlap utilities for address equivalence
use crate::patterns::{TOKEN_DELIMITER_PATTERN, TOKEN_OVERLAP_THRESHOLD};

/// Split on commas and whitespace, dropping empty pieces
pub fn tokenize(text: &str) -> Vec<&str> {
    TOKEN_DELIMITER_PATTERN
        .split(text)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Number of tokens in `from` that occur verbatim somewhere in `within`
fn count_found(from: &[&str], within: &[&str]) -> usize {
    from.iter().filter(|token| within.contains(token)).count()
}

/// Fraction of the smaller side's tokens found in the other side,
/// divided by the larger token count.
///
/// Duplicates count individually. When both sides have the same number of
/// tokens the lower of the two directions is used, so the ratio does not
/// depend on argument order.
pub fn overlap_ratio(first: &str, second: &str) -> f64 {
    let tokens1 = tokenize(first);
    let tokens2 = tokenize(second);
    let total = tokens1.len().max(tokens2.len());
    if total == 0 {
        return 0.0;
    }

    let matches = match tokens1.len().cmp(&tokens2.len()) {
        std::cmp::Ordering::Less => count_found(&tokens1, &tokens2),
        std::cmp::Ordering::Greater => count_found(&tokens2, &tokens1),
        std::cmp::Ordering::Equal => {
            count_found(&tokens1, &tokens2).min(count_found(&tokens2, &tokens1))
        }
    };

    matches as f64 / total as f64
}

/// Overlap strictly above [`TOKEN_OVERLAP_THRESHOLD`]
pub fn has_token_overlap(first: &str, second: &str) -> bool {
    overlap_ratio(first, second) > TOKEN_OVERLAP_THRESHOLD
}

/// Same ASCII letters and digits in the same order, ignoring case
pub fn is_format_difference(first: &str, second: &str) -> bool {
    fn stripped(text: &str) -> impl Iterator<Item = char> + '_ {
        text.chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
    }

    stripped(first).eq(stripped(second))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize("12 main st, city"),
            vec!["12", "main", "st", "city"]
        );
        assert_eq!(tokenize(", a,,b "), vec!["a", "b"]);
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_overlap_ratio_full_and_none() {
        assert_eq!(overlap_ratio("12 main st, city", "12 main st city"), 1.0);
        assert_eq!(overlap_ratio("a b c", "d e f"), 0.0);
        assert_eq!(overlap_ratio("", ""), 0.0);
    }

    #[test]
    fn test_overlap_ratio_divides_by_larger_side() {
        // 2 of the 2 smaller-side tokens found, divided by 4
        assert_eq!(overlap_ratio("main st", "12 main st city"), 0.5);
    }

    #[test]
    fn test_overlap_ratio_counts_duplicates() {
        // smaller side: [a, a, x] -> a, a found -> 2 / 4
        assert_eq!(overlap_ratio("a a x", "a b c d"), 0.5);
    }

    #[test]
    fn test_overlap_ratio_is_symmetric_for_equal_lengths() {
        let forward = overlap_ratio("a a a b", "a c d e");
        let backward = overlap_ratio("a c d e", "a a a b");
        assert_eq!(forward, backward);
        assert_eq!(forward, 0.25);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // 7 of 10 tokens shared: exactly 0.70
        let first = "t1 t2 t3 t4 t5 t6 t7 a8 a9 a10";
        let second = "t1 t2 t3 t4 t5 t6 t7 b8 b9 b10";
        assert_eq!(overlap_ratio(first, second), 0.7);
        assert!(!has_token_overlap(first, second));

        // 8 of 10: 0.80
        let second = "t1 t2 t3 t4 t5 t6 t7 a8 b9 b10";
        assert!(has_token_overlap(first, second));
    }

    #[test]
    fn test_is_format_difference() {
        assert!(is_format_difference("12 Main St, City", "12 main st\ncity"));
        assert!(is_format_difference("Place Vendôme", "place-vendme"));
        assert!(!is_format_difference("12 Main St", "12 Main Street"));
    }
}
