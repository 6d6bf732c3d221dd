//! Pattern matching for encoded public keys.
//!
//! Supports multiple matching strategies:
//! - Prefix: Match at the start of the encoded key
//! - Suffix: Match at the end of the encoded key
//! - Contains: Match anywhere in the encoded key

mod pattern;

pub use pattern::{MatchResult, Pattern, PatternError, PatternType};
