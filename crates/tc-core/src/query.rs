//! Search-input classification.
//!
//! The classifier is meant to run on every keystroke, so it is pure and
//! allocation-light: one normalization pass, then length/prefix checks. All
//! call sites (search, composer prefill, redirect targets) go through
//! [`classify`]; there is no second place where a raw string is interpreted.

use crate::enums::QueryKind;

/// Polish mobile numbers are nine digits after the country code.
const PHONE_DIGITS: usize = 9;
/// NIP is a ten-digit business identifier.
const NIP_DIGITS: usize = 10;
/// Country code accepted in front of a phone number.
const COUNTRY_PREFIX: &str = "48";

/// A classified search input: the cleaned value plus its detected kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    /// Input with every non-alphanumeric character stripped.
    pub cleaned: String,
    pub kind: QueryKind,
}

/// Strip separators, whitespace, and punctuation from a raw search input.
///
/// This is the single normalization point between user input and the wire:
/// `"525-252-52-52"` becomes `"5252525252"`, `"+48 600 700 800"` becomes
/// `"48600700800"`.
#[must_use]
pub fn normalize_query(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Classify a raw search input.
///
/// Check order is fixed: exactly ten digits is a tax ID, nine digits (or
/// `48` plus nine digits) is a phone number, anything else is unclassified.
/// Ten digits that were meant as a prefix-less phone number therefore
/// resolve to [`QueryKind::TaxId`].
#[must_use]
pub fn classify(raw: &str) -> Classified {
    let cleaned = normalize_query(raw);
    let kind = if is_tax_id(&cleaned) {
        QueryKind::TaxId
    } else if is_phone(&cleaned) {
        QueryKind::Phone
    } else {
        QueryKind::Unclassified
    };
    Classified { cleaned, kind }
}

fn is_tax_id(cleaned: &str) -> bool {
    cleaned.len() == NIP_DIGITS && all_digits(cleaned)
}

fn is_phone(cleaned: &str) -> bool {
    if !all_digits(cleaned) {
        return false;
    }
    cleaned.len() == PHONE_DIGITS
        || (cleaned.len() == PHONE_DIGITS + COUNTRY_PREFIX.len()
            && cleaned.starts_with(COUNTRY_PREFIX))
}

fn all_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Normalize a phone number for the admin link-phone call.
///
/// The backend expects a leading `+`; trims whitespace and prepends one if
/// absent.
#[must_use]
pub fn normalize_link_phone(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with('+') {
        trimmed.to_string()
    } else {
        format!("+{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("5252525252")]
    #[case("525-252-52-52")]
    #[case("525 252 52 52")]
    #[case("525.252.52.52")]
    fn ten_digits_classify_as_tax_id(#[case] input: &str) {
        let classified = classify(input);
        assert_eq!(classified.kind, QueryKind::TaxId);
        assert_eq!(classified.cleaned, "5252525252");
    }

    #[rstest]
    #[case("600700800", "600700800")]
    #[case("600 700 800", "600700800")]
    #[case("+48600700800", "48600700800")]
    #[case("48 600 700 800", "48600700800")]
    #[case("+48 600-700-800", "48600700800")]
    fn nine_digits_or_prefixed_classify_as_phone(#[case] input: &str, #[case] cleaned: &str) {
        let classified = classify(input);
        assert_eq!(classified.kind, QueryKind::Phone);
        assert_eq!(classified.cleaned, cleaned);
    }

    #[rstest]
    #[case("")]
    #[case("jan kowalski")]
    #[case("12345678")]
    #[case("123456789012")]
    #[case("52525252ab")]
    #[case("PL61109010140000071219812874")]
    fn everything_else_is_unclassified(#[case] input: &str) {
        assert_eq!(classify(input).kind, QueryKind::Unclassified);
    }

    #[test]
    fn ten_digit_phone_without_prefix_resolves_to_tax_id() {
        // Fixed check order: tax ID wins the ambiguity.
        assert_eq!(classify("6007008001").kind, QueryKind::TaxId);
    }

    #[test]
    fn prefix_without_full_length_is_unclassified() {
        assert_eq!(classify("4860070080").kind, QueryKind::TaxId); // ten digits
        assert_eq!(classify("486007").kind, QueryKind::Unclassified);
    }

    #[test]
    fn link_phone_gains_leading_plus() {
        assert_eq!(normalize_link_phone("48600700800"), "+48600700800");
        assert_eq!(normalize_link_phone("  +48600700800  "), "+48600700800");
    }
}
