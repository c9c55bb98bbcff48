//! Codec between 32-character hex strings and 16-byte arrays.
//!
//! Pure functions, no state. Strict pattern validation (version nibble,
//! variant bits) is the caller's job; the codec checks only that the input
//! is hex and the right length.

use crate::{UuidError, UuidResult};

static HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

/// Decodes 32 hex digits (either case) into 16 bytes.
///
/// # Errors
///
/// Returns [`UuidError::Format`] if the input is not exactly 32 bytes long or
/// contains a non-hex character.
pub(crate) fn decode(input: &str) -> UuidResult<[u8; 16]> {
    let raw = input.as_bytes();
    if raw.len() != 32 {
        return Err(UuidError::Format(format!(
            "expected 32 hex characters, got {}",
            raw.len()
        )));
    }

    let mut bytes = [0u8; 16];
    for (i, pair) in raw.chunks_exact(2).enumerate() {
        let hi = nibble(pair[0])?;
        let lo = nibble(pair[1])?;
        bytes[i] = hi << 4 | lo;
    }
    Ok(bytes)
}

/// Encodes 16 bytes as 32 lowercase hex characters, no separators.
pub(crate) fn encode(bytes: &[u8; 16]) -> String {
    let mut out = String::with_capacity(32);
    for &byte in bytes {
        out.push(HEX_CHARS[(byte >> 4) as usize] as char);
        out.push(HEX_CHARS[(byte & 0x0f) as usize] as char);
    }
    out
}

fn nibble(digit: u8) -> UuidResult<u8> {
    match digit {
        b'0'..=b'9' => Ok(digit - b'0'),
        b'a'..=b'f' => Ok(digit - b'a' + 10),
        b'A'..=b'F' => Ok(digit - b'A' + 10),
        other => Err(UuidError::Format(format!(
            "invalid hex character '{}'",
            other as char
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_hex() {
        let bytes = decode("550e8400e29b41d4a716446655440000").unwrap();
        assert_eq!(bytes[0], 0x55);
        assert_eq!(bytes[1], 0x0e);
        assert_eq!(bytes[15], 0x00);
    }

    #[test]
    fn test_decode_accepts_uppercase() {
        let lower = decode("550e8400e29b41d4a716446655440000").unwrap();
        let upper = decode("550E8400E29B41D4A716446655440000").unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_decode_rejects_wrong_length() {
        assert!(decode("").is_err());
        assert!(decode("550e8400").is_err());
        assert!(decode("550e8400e29b41d4a7164466554400001").is_err());
    }

    #[test]
    fn test_decode_rejects_non_hex() {
        let result = decode("550e8400e29b41d4a71644665544zzzz");
        match result {
            Err(UuidError::Format(msg)) => assert!(msg.contains("invalid hex character")),
            _ => panic!("Expected Format error"),
        }
    }

    #[test]
    fn test_encode_is_lowercase() {
        let encoded = encode(&[0xAB; 16]);
        assert_eq!(encoded, "abababababababababababababababab");
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let bytes = [
            0x9e, 0x47, 0x20, 0x52, 0xa6, 0x54, 0x46, 0x93, 0x9a, 0x8b, 0x3c, 0xe5, 0x7a, 0xda,
            0x3d, 0x6c,
        ];
        assert_eq!(decode(&encode(&bytes)).unwrap(), bytes);
    }
}
