//! Admissibility rules for short codes.
//!
//! A code is admissible when it is well-formed and not block-listed. The same
//! check gates caller-supplied custom codes and filters randomly generated
//! ones, so both kinds obey one policy.

use crate::domain::entities::CodeBlockList;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Shortest admissible code.
pub const MIN_CODE_LENGTH: usize = 3;

/// Longest admissible code.
pub const MAX_CODE_LENGTH: usize = 10;

/// Compiled regex for the code format rule.
static CODE_FORMAT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9_-]{3,10}$").expect("code format regex is valid")
});

/// Decides whether a candidate short code is admissible.
///
/// # Rules
///
/// - Characters: ASCII letters, digits, `_` and `-`
/// - Length: 3-10 characters
/// - Lower-cased code must not be block-listed
/// - Lower-cased code with every `-` and `_` removed must not be block-listed
///
/// The format rule is checked first; a malformed code is rejected without
/// consulting the block-list.
///
/// # Examples
///
/// ```
/// use flipr::domain::entities::CodeBlockList;
/// use flipr::domain::validator::CodeValidator;
///
/// let validator = CodeValidator::new(&CodeBlockList::parse("admin", "", ""));
///
/// assert!(validator.is_admissible("my-link"));
/// assert!(!validator.is_admissible("ad_min"));   // Stripped form is blocked
/// assert!(!validator.is_admissible("ab"));       // Too short
/// assert!(!validator.is_admissible("no/slash")); // Bad character
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeValidator {
    blocked: HashSet<String>,
}

impl CodeValidator {
    /// Builds a validator over the union of the three block-lists.
    pub fn new(block_list: &CodeBlockList) -> Self {
        Self {
            blocked: block_list.union(),
        }
    }

    /// Returns `true` if `code` is well-formed and not block-listed.
    pub fn is_admissible(&self, code: &str) -> bool {
        if !CODE_FORMAT_REGEX.is_match(code) {
            return false;
        }

        let lower = code.to_lowercase();
        if self.blocked.contains(&lower) {
            return false;
        }

        let stripped: String = lower.chars().filter(|c| *c != '-' && *c != '_').collect();
        !self.blocked.contains(&stripped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator_with_reserved(reserved: &str) -> CodeValidator {
        CodeValidator::new(&CodeBlockList::parse(reserved, "", ""))
    }

    #[test]
    fn test_valid_codes_with_empty_block_list() {
        let validator = CodeValidator::default();

        assert!(validator.is_admissible("abc"));
        assert!(validator.is_admissible("ABC123xyz_"));
        assert!(validator.is_admissible("my-link"));
        assert!(validator.is_admissible("___"));
    }

    #[test]
    fn test_too_short() {
        let validator = CodeValidator::default();

        assert!(!validator.is_admissible(""));
        assert!(!validator.is_admissible("a"));
        assert!(!validator.is_admissible("ab"));
    }

    #[test]
    fn test_length_bounds() {
        let validator = CodeValidator::default();

        assert!(validator.is_admissible(&"a".repeat(MIN_CODE_LENGTH)));
        assert!(validator.is_admissible(&"a".repeat(MAX_CODE_LENGTH)));
        assert!(!validator.is_admissible(&"a".repeat(MAX_CODE_LENGTH + 1)));
    }

    #[test]
    fn test_invalid_characters() {
        let validator = CodeValidator::default();

        for code in ["my code", "my/code", "my.code", "code!", "émoji", "abc\n", "ab%20"] {
            assert!(!validator.is_admissible(code), "'{}' should be rejected", code);
        }
    }

    #[test]
    fn test_block_list_exact_and_case_insensitive() {
        let validator = validator_with_reserved("admin");

        assert!(!validator.is_admissible("admin"));
        assert!(!validator.is_admissible("Admin"));
        assert!(!validator.is_admissible("ADMIN"));
    }

    #[test]
    fn test_block_list_defeats_separator_obfuscation() {
        let validator = validator_with_reserved("admin");

        assert!(!validator.is_admissible("ad-min"));
        assert!(!validator.is_admissible("ad_min"));
        assert!(!validator.is_admissible("-a_d-m_i-n"));
        assert!(!validator.is_admissible("Ad-Min"));
    }

    #[test]
    fn test_block_list_is_not_a_substring_match() {
        let validator = validator_with_reserved("admin");

        assert!(validator.is_admissible("administr"));
        assert!(validator.is_admissible("myadmin"));
    }

    #[test]
    fn test_block_list_entry_longer_than_format_allows() {
        // Blocked words beyond the format length are still rejected by format
        let validator = validator_with_reserved("administrator");

        assert!(!validator.is_admissible("administrator"));
    }

    #[test]
    fn test_all_three_lists_are_consulted() {
        let validator = CodeValidator::new(&CodeBlockList::parse("api", "rude", "brand"));

        assert!(!validator.is_admissible("api"));
        assert!(!validator.is_admissible("RUDE"));
        assert!(!validator.is_admissible("br-and"));
        assert!(validator.is_admissible("other"));
    }

    #[test]
    fn test_block_listed_entry_with_separator() {
        // Entries keep their separators; the literal form still matches
        let validator = validator_with_reserved("my-brand");

        assert!(!validator.is_admissible("my-brand"));
        assert!(validator.is_admissible("my_brand"));
    }
}
