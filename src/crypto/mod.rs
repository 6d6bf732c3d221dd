//! Cryptographic operations for Stellar key generation and encoding.
//!
//! This module provides:
//! - Secure random Ed25519 keypair generation
//! - StrKey encoding (version byte + CRC-16 checksum + base32)
//! - A one-time health check of the system random number generator

mod keypair;
pub mod strkey;

pub use keypair::Keypair;
pub use strkey::VersionByte;

use rand::rngs::OsRng;
use rand::RngCore;

/// Error initializing the cryptographic backend.
#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    #[error("system random number generator unavailable: {0}")]
    Rng(#[from] rand::Error),
}

/// Verifies that the system random number generator yields bytes.
///
/// Must be called once before any worker starts; failure is fatal.
pub fn init() -> Result<(), CryptoError> {
    let mut probe = [0u8; 32];
    OsRng.try_fill_bytes(&mut probe)?;
    Ok(())
}
