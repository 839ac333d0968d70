//! Address formatting helpers.
//!
//! Pure functions that compress an opaque address string into a short
//! display form with a fixed `...` separator. No validation is performed;
//! addresses are passed through without semantic interpretation.

/// Number of leading characters kept when shortening an address.
const HEAD_LEN: usize = 6;

/// Number of trailing characters kept when shortening an address.
const TAIL_LEN: usize = 4;

/// Separator inserted between the head and tail slices.
const SEPARATOR: &str = "...";

/// Address length (in chars) above which [`truncate_address`] shortens.
const TRUNCATE_THRESHOLD: usize = 13;

// ============================================================================
// Formatting Functions
// ============================================================================

/// Shorten an address to its first 6 and last 4 characters.
///
/// Applies unconditionally: inputs shorter than 10 characters yield
/// overlapping head/tail slices (e.g. `"short"` becomes `"short...hort"`).
/// Callers wanting a length guard should use [`truncate_address`].
///
/// # Examples
///
/// ```
/// use gelatui::format::format_address;
///
/// let formatted = format_address("0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb7");
/// assert_eq!(formatted, "0x742d...bEb7");
/// assert_eq!(format_address(""), "");
/// ```
#[must_use]
pub fn format_address(address: &str) -> String {
    if address.is_empty() {
        return String::new();
    }

    let head: String = address.chars().take(HEAD_LEN).collect();
    let char_count = address.chars().count();
    let tail: String = address
        .chars()
        .skip(char_count.saturating_sub(TAIL_LEN))
        .collect();

    format!("{head}{SEPARATOR}{tail}")
}

/// Shorten an address for display, leaving short addresses untouched.
///
/// Addresses of 13 characters or fewer fit inline and are returned
/// unchanged; longer ones get the same 6-head/4-tail form as
/// [`format_address`].
///
/// # Examples
///
/// ```
/// use gelatui::format::truncate_address;
///
/// assert_eq!(truncate_address("short"), "short");
/// assert_eq!(
///     truncate_address("0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb7"),
///     "0x742d...bEb7",
/// );
/// ```
#[must_use]
pub fn truncate_address(address: &str) -> String {
    if address.is_empty() {
        return String::new();
    }

    if address.chars().count() > TRUNCATE_THRESHOLD {
        return format_address(address);
    }

    address.to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use rstest::rstest;

    #[test]
    fn test_format_address_example() {
        assert_snapshot!(
            format_address("0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb7"),
            @"0x742d...bEb7"
        );
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(format_address(""), "");
        assert_eq!(truncate_address(""), "");
    }

    /// Table-driven tests for formatting behavior across input lengths.
    #[test]
    fn test_format_address_lengths() {
        let cases = [
            // (input, expected)
            ("ABCDEFGHIJ", "ABCDEF...GHIJ"),     // exactly 10: head and tail disjoint
            ("ABCDEFGHIJK", "ABCDEF...HIJK"),    // 11 chars
            ("short", "short...hort"),           // overlapping slices, accepted behavior
            ("AB", "AB...AB"),                   // tail wraps the whole input
            ("ALGORANDADDRESSAAAAAAAAA", "ALGORA...AAAA"),
        ];

        for (input, expected) in cases {
            assert_eq!(format_address(input), expected, "input={input}");
        }
    }

    #[rstest]
    #[case::under_threshold("ABCDEFGHIJ")]
    #[case::at_threshold("ABCDEFGHIJKLM")]
    #[case::single_char("A")]
    fn test_truncate_address_identity_below_threshold(#[case] input: &str) {
        assert_eq!(truncate_address(input), input);
    }

    #[rstest]
    #[case::one_over_threshold("ABCDEFGHIJKLMN")]
    #[case::eth_address("0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb7")]
    #[case::long_base32("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA")]
    fn test_truncate_address_matches_format_above_threshold(#[case] input: &str) {
        assert_eq!(truncate_address(input), format_address(input));
        assert!(truncate_address(input).contains("..."));
    }

    #[test]
    fn test_multibyte_addresses_do_not_panic() {
        // Slicing is char-based, so multibyte input must not split a scalar.
        let addr = "ドメイン名例テストアドレス漢字かな";
        let formatted = format_address(addr);
        assert!(formatted.contains("..."));
        assert_eq!(truncate_address("ドメイン"), "ドメイン");
    }
}
