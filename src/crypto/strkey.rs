//! StrKey encoding for Stellar keys.
//!
//! A StrKey is `[version byte] || payload || CRC-16 checksum` encoded in
//! base32, giving a human-typable, error-detecting representation of a raw
//! key. A 32-byte payload always encodes to 56 uppercase characters.

use crc::{Crc, CRC_16_XMODEM};
use data_encoding::BASE32_NOPAD;

/// The 32-symbol alphabet encoded text is drawn from (RFC 4648 base32).
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Version byte prefixed to a payload before checksumming.
///
/// The top five bits select the leading symbol of the encoded text:
/// `6` encodes to `G` (public keys), `18` to `S` (seeds).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum VersionByte {
    /// Ed25519 public key (`G...`)
    PublicKey = 6 << 3,
    /// Ed25519 secret seed (`S...`)
    Seed = 18 << 3,
}

const CRC16: Crc<u16> = Crc::<u16>::new(&CRC_16_XMODEM);

/// Encodes a 32-byte key payload as StrKey text.
///
/// The checksum is CRC-16/XMODEM (polynomial 0x1021, initial value 0) over
/// the version byte and payload, appended low byte first. The result is
/// base32-encoded without padding.
#[inline]
pub fn encode(version: VersionByte, payload: &[u8; 32]) -> String {
    let mut bytes = Vec::with_capacity(35);
    bytes.push(version as u8);
    bytes.extend_from_slice(payload);

    let checksum = CRC16.checksum(&bytes);
    bytes.extend_from_slice(&checksum.to_le_bytes());

    BASE32_NOPAD.encode(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payloads() -> Vec<[u8; 32]> {
        let mut incrementing = [0u8; 32];
        for (i, byte) in incrementing.iter_mut().enumerate() {
            *byte = i as u8;
        }
        vec![[0u8; 32], [0xff; 32], incrementing]
    }

    #[test]
    fn test_checksum_is_crc16_over_version_and_payload() {
        for payload in payloads() {
            for version in [VersionByte::PublicKey, VersionByte::Seed] {
                let encoded = encode(version, &payload);
                let decoded = BASE32_NOPAD.decode(encoded.as_bytes()).unwrap();

                assert_eq!(decoded.len(), 35);
                assert_eq!(decoded[0], version as u8);
                assert_eq!(&decoded[1..33], &payload);

                let expected = CRC16.checksum(&decoded[..33]).to_le_bytes();
                assert_eq!(&decoded[33..], &expected);
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let payload = [0x42; 32];
        assert_eq!(
            encode(VersionByte::PublicKey, &payload),
            encode(VersionByte::PublicKey, &payload)
        );
    }

    #[test]
    fn test_alphabet_closure() {
        for payload in payloads() {
            let encoded = encode(VersionByte::PublicKey, &payload);
            assert!(encoded.chars().all(|c| ALPHABET.contains(c)), "{}", encoded);
        }
    }

    #[test]
    fn test_leading_symbols() {
        for payload in payloads() {
            let public = encode(VersionByte::PublicKey, &payload);
            assert_eq!(public.len(), 56);
            assert!(public.starts_with('G'));
            // The low three bits of the version byte are zero, so the
            // second symbol only carries two payload bits.
            assert!(matches!(public.as_bytes()[1], b'A'..=b'D'));

            let seed = encode(VersionByte::Seed, &payload);
            assert_eq!(seed.len(), 56);
            assert!(seed.starts_with('S'));
        }
    }
}
