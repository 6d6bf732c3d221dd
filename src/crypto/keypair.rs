//! Stellar keypair generation.

use ed25519_dalek::SigningKey;
use rand::rngs::OsRng;

/// Represents a Stellar keypair (Ed25519 secret key + public key).
#[derive(Clone)]
pub struct Keypair {
    /// The secret key bytes (64 bytes): seed followed by public key
    secret: [u8; 64],
    /// The public key bytes (32 bytes)
    public: [u8; 32],
}

impl Keypair {
    /// Generates a new random keypair.
    ///
    /// Uses the operating system's cryptographically secure random number
    /// generator.
    #[inline]
    pub fn generate() -> Self {
        Self::from_signing_key(SigningKey::generate(&mut OsRng))
    }

    /// Reconstructs a keypair from a 32-byte secret seed.
    ///
    /// Deterministic: the same seed always yields the same keypair.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self::from_signing_key(SigningKey::from_bytes(&seed))
    }

    fn from_signing_key(signing_key: SigningKey) -> Self {
        Self {
            secret: signing_key.to_keypair_bytes(),
            public: signing_key.verifying_key().to_bytes(),
        }
    }

    /// Returns the public key bytes.
    #[inline]
    pub fn public_key(&self) -> &[u8; 32] {
        &self.public
    }

    /// Returns the secret key bytes.
    pub fn secret_key(&self) -> &[u8; 64] {
        &self.secret
    }

    /// Extracts the 32-byte secret seed from the secret key.
    #[inline]
    pub fn seed(&self) -> [u8; 32] {
        let mut seed = [0u8; 32];
        seed.copy_from_slice(&self.secret[..32]);
        seed
    }
}
