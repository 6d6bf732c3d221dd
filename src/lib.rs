//! # stellar_vanity
//!
//! High-performance Stellar vanity address generator.
//!
//! ## Architecture
//!
//! - `crypto`: Ed25519 key generation and StrKey encoding
//! - `matcher`: Pattern matching strategies
//! - `worker`: Parallel execution and worker pool management
//! - `config`: Runtime configuration

pub mod config;
pub mod crypto;
pub mod matcher;
pub mod worker;

pub use config::Config;
pub use crypto::{Keypair, VersionByte};
pub use matcher::{MatchResult, Pattern, PatternType};
pub use worker::{SearchState, VanityMatch, WorkerPool};
