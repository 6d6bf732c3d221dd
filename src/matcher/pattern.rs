//! Pattern matching implementation.

use std::str::FromStr;

use crate::crypto::strkey::ALPHABET;

/// Leading symbol of every encoded public key.
const LEAD: char = 'G';

/// Symbols that can follow the leading `G`: the low three bits of the
/// public-key version byte are zero, so the second symbol only carries two
/// payload bits.
const AFTER_LEAD: [char; 4] = ['A', 'B', 'C', 'D'];

/// The type of pattern matching to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatternType {
    /// Match at the beginning of the encoded public key
    #[default]
    Prefix,
    /// Match at the end of the encoded public key
    Suffix,
    /// Match anywhere in the encoded public key
    Contains,
}

impl FromStr for PatternType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "prefix" | "start" | "begin" => Ok(PatternType::Prefix),
            "suffix" | "end" => Ok(PatternType::Suffix),
            "contains" | "anywhere" | "any" => Ok(PatternType::Contains),
            _ => Err(format!("Unknown pattern type: {}", s)),
        }
    }
}

impl std::fmt::Display for PatternType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternType::Prefix => write!(f, "prefix"),
            PatternType::Suffix => write!(f, "suffix"),
            PatternType::Contains => write!(f, "contains"),
        }
    }
}

/// Result of a pattern match operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    /// Full match found
    Match,
    /// No match
    NoMatch,
}

impl MatchResult {
    #[inline]
    pub fn is_match(self) -> bool {
        matches!(self, MatchResult::Match)
    }
}

/// Error compiling a search term into a [`Pattern`].
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("search term cannot be empty")]
    Empty,
    #[error(
        "\"{0}\" is not allowed; the search term must be scoped to: ABCDEFGHIJKLMNOPQRSTUVWXYZ234567"
    )]
    InvalidCharacter(char),
    #[error(
        "no public key starts with \"G{0}\"; the second symbol is always one of A, B, C or D"
    )]
    ImpossiblePrefix(char),
}

/// A compiled pattern for efficient matching.
#[derive(Debug, Clone)]
pub struct Pattern {
    /// The search term (normalized to uppercase)
    term: String,
    /// The pattern type
    pattern_type: PatternType,
    /// Whether a leading `G` was prepended to a prefix term
    adjusted: bool,
}

impl Pattern {
    /// Compiles a raw search term into a pattern.
    ///
    /// The term is uppercased and checked against the base32 alphabet. A
    /// prefix term not starting with `G` gets one prepended (reported via
    /// [`Pattern::was_adjusted`]); a prefix that can never occur in an
    /// encoded public key is refused.
    pub fn compile(term: &str, pattern_type: PatternType) -> Result<Self, PatternError> {
        let mut term = term.to_uppercase();

        if term.is_empty() {
            return Err(PatternError::Empty);
        }

        let mut adjusted = false;
        if pattern_type == PatternType::Prefix && !term.starts_with(LEAD) {
            term.insert(0, LEAD);
            adjusted = true;
        }

        if let Some(c) = term.chars().find(|c| !ALPHABET.contains(*c)) {
            return Err(PatternError::InvalidCharacter(c));
        }

        if pattern_type == PatternType::Prefix {
            if let Some(second) = term.chars().nth(1) {
                if !AFTER_LEAD.contains(&second) {
                    return Err(PatternError::ImpossiblePrefix(second));
                }
            }
        }

        Ok(Self {
            term,
            pattern_type,
            adjusted,
        })
    }

    /// Returns the normalized search term.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Returns the pattern type.
    pub fn pattern_type(&self) -> PatternType {
        self.pattern_type
    }

    /// Returns true if a leading `G` was prepended to the user's term.
    pub fn was_adjusted(&self) -> bool {
        self.adjusted
    }

    /// Matches an encoded public key against this pattern.
    #[inline]
    pub fn matches(&self, encoded: &str) -> MatchResult {
        let matched = match self.pattern_type {
            PatternType::Prefix => encoded.starts_with(&self.term),
            PatternType::Suffix => encoded.ends_with(&self.term),
            PatternType::Contains => encoded.contains(&self.term),
        };

        if matched {
            MatchResult::Match
        } else {
            MatchResult::NoMatch
        }
    }

    /// Returns the estimated difficulty (number of attempts to find a match).
    ///
    /// Each base32 symbol has 32 possible values; the fixed leading `G` of a
    /// prefix term costs nothing.
    pub fn estimated_difficulty(&self) -> u64 {
        let chargeable = match self.pattern_type {
            PatternType::Prefix => self.term.len().saturating_sub(1),
            PatternType::Suffix | PatternType::Contains => self.term.len(),
        };
        32u64.saturating_pow(chargeable as u32)
    }

    /// Returns a human-readable difficulty estimate.
    pub fn difficulty_description(&self) -> String {
        let diff = self.estimated_difficulty();
        match diff {
            0..=1_000 => "Very Easy (< 1 second)".into(),
            1_001..=100_000 => "Easy (seconds)".into(),
            100_001..=10_000_000 => "Medium (minutes)".into(),
            10_000_001..=1_000_000_000 => "Hard (hours)".into(),
            _ => "Very Hard (days or more)".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "GEXAMPLE234567ABCDEFGHIJKLMNOPQR";

    fn predicate(term: &str, pattern_type: PatternType) -> Pattern {
        // Raw predicate without the prefix feasibility policy
        Pattern {
            term: term.into(),
            pattern_type,
            adjusted: false,
        }
    }

    #[test]
    fn test_prefix_match() {
        assert!(predicate("GEX", PatternType::Prefix).matches(TEXT).is_match());
        assert!(!predicate("H", PatternType::Prefix).matches(TEXT).is_match());
    }

    #[test]
    fn test_suffix_match() {
        assert!(predicate("PQR", PatternType::Suffix).matches(TEXT).is_match());
        assert!(!predicate("GEX", PatternType::Suffix).matches(TEXT).is_match());
    }

    #[test]
    fn test_contains_match() {
        assert!(predicate("234567", PatternType::Contains).matches(TEXT).is_match());
        assert!(!predicate("876", PatternType::Contains).matches(TEXT).is_match());
    }

    #[test]
    fn test_prefix_auto_correction() {
        let pattern = Pattern::compile("ABC", PatternType::Prefix).unwrap();
        assert_eq!(pattern.term(), "GABC");
        assert!(pattern.was_adjusted());

        let pattern = Pattern::compile("GABC", PatternType::Prefix).unwrap();
        assert_eq!(pattern.term(), "GABC");
        assert!(!pattern.was_adjusted());

        assert!(matches!(
            Pattern::compile("HABC", PatternType::Prefix),
            Err(PatternError::ImpossiblePrefix('H'))
        ));
    }

    #[test]
    fn test_lowercase_normalization() {
        let pattern = Pattern::compile("taco", PatternType::Suffix).unwrap();
        assert_eq!(pattern.term(), "TACO");
    }

    #[test]
    fn test_invalid_character() {
        let err = Pattern::compile("G1BC", PatternType::Suffix).unwrap_err();
        assert!(matches!(err, PatternError::InvalidCharacter('1')));
        assert!(err.to_string().contains('1'));
        assert!(err.to_string().contains(ALPHABET));
    }

    #[test]
    fn test_empty_term() {
        assert!(matches!(
            Pattern::compile("", PatternType::Contains),
            Err(PatternError::Empty)
        ));
    }

    #[test]
    fn test_pattern_type_parsing() {
        assert_eq!("prefix".parse::<PatternType>().unwrap(), PatternType::Prefix);
        assert_eq!("end".parse::<PatternType>().unwrap(), PatternType::Suffix);
        assert_eq!("anywhere".parse::<PatternType>().unwrap(), PatternType::Contains);
        assert!("middle".parse::<PatternType>().is_err());
    }

    #[test]
    fn test_difficulty() {
        let pattern = Pattern::compile("GABC", PatternType::Prefix).unwrap();
        assert_eq!(pattern.estimated_difficulty(), 32_768); // 32^3

        let pattern = Pattern::compile("TACO", PatternType::Suffix).unwrap();
        assert_eq!(pattern.estimated_difficulty(), 1_048_576); // 32^4
    }
}
