//! Internal implementation of the UUID value type.
//!
//! This module contains the canonical 16-byte value, the strict string
//! parsers, the validation predicates, and the batch equality/ordering
//! operations.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::{fmt, str::FromStr};

use once_cell::sync::OnceCell;

use crate::hex;
use crate::{UuidError, UuidResult};

/// A 128-bit UUID, stored as its canonical 16 bytes.
///
/// The bytes are immutable once constructed and are the sole source of
/// truth; the hyphenated and compact hex string forms are computed lazily
/// and memoized for the lifetime of the value. Equality, hashing and
/// ordering consider only the bytes, never the caches.
///
/// # Construction
/// - [`Uuid::from_rfc4122`] / [`Uuid::from_hex`] parse strings strictly
///   (version 1–5, RFC 4122 variant bits required).
/// - [`Uuid::from_bytes`] / [`Uuid::from_slice`] accept *any* 16 bytes,
///   valid UUID or not. This is the deliberate escape hatch described in
///   the crate docs.
/// - [`Uuid::parse`] dispatches on the input shape and applies whichever
///   of the above fits.
/// - [`Uuid::new_v4`] generates a fresh random UUID and routes it through
///   the strict parser like any external input.
///
/// # Display format
/// `Display` and `to_string` produce the canonical hyphenated form,
/// 36 characters, lowercase.
pub struct Uuid {
    bytes: [u8; 16],
    hex: OnceCell<String>,
    hyphenated: OnceCell<String>,
}

/// An input shape accepted by the parsing and batch operations.
///
/// Borrowed union over the three supported external forms plus an existing
/// value. Obtained via `From`/`Into` from `&str`, `&String`, `&[u8]`,
/// `&[u8; 16]`, `&Vec<u8>`, or `&Uuid`.
#[derive(Debug, Clone, Copy)]
pub enum UuidInput<'a> {
    /// A hyphenated (36-char) or compact hex (32-char) string.
    Str(&'a str),
    /// A raw byte slice, which must be exactly 16 bytes.
    Bytes(&'a [u8]),
    /// An existing value, copied byte-for-byte.
    Value(&'a Uuid),
}

impl<'a> From<&'a str> for UuidInput<'a> {
    fn from(s: &'a str) -> Self {
        Self::Str(s)
    }
}

impl<'a> From<&'a String> for UuidInput<'a> {
    fn from(s: &'a String) -> Self {
        Self::Str(s.as_str())
    }
}

impl<'a> From<&'a [u8]> for UuidInput<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a> From<&'a [u8; 16]> for UuidInput<'a> {
    fn from(bytes: &'a [u8; 16]) -> Self {
        Self::Bytes(&bytes[..])
    }
}

impl<'a> From<&'a Vec<u8>> for UuidInput<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Self::Bytes(bytes.as_slice())
    }
}

impl<'a> From<&'a Uuid> for UuidInput<'a> {
    fn from(uuid: &'a Uuid) -> Self {
        Self::Value(uuid)
    }
}

impl Uuid {
    /// Wraps 16 owned bytes without any semantic validation.
    ///
    /// Any byte pattern is accepted, including ones that
    /// [`Uuid::is_valid_bytes`] rejects. See the crate docs for why this
    /// asymmetry with string parsing is intentional.
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self {
            bytes,
            hex: OnceCell::new(),
            hyphenated: OnceCell::new(),
        }
    }

    /// Copies a byte slice into a new value.
    ///
    /// The slice is copied, never aliased. Like [`Uuid::from_bytes`], no
    /// version/variant check is performed.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::Format`] if the slice is not exactly 16 bytes.
    pub fn from_slice(bytes: &[u8]) -> UuidResult<Self> {
        let bytes: [u8; 16] = bytes.try_into().map_err(|_| {
            UuidError::Format(format!("invalid byte length {}, expected 16", bytes.len()))
        })?;
        Ok(Self::from_bytes(bytes))
    }

    /// Parses a canonical hyphenated RFC 4122 string.
    ///
    /// The input must be exactly 36 characters: hex digits (either case)
    /// with hyphens at positions 8, 13, 18 and 23, a version nibble in
    /// `1..=5`, and variant bits `10`.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::Format`] if the input does not match.
    pub fn from_rfc4122(input: &str) -> UuidResult<Self> {
        if !Self::is_valid_rfc4122(input) {
            return Err(UuidError::Format(format!(
                "invalid RFC-4122 string: '{}'",
                input
            )));
        }
        Ok(Self::from_bytes(hex::decode(&input.replace('-', ""))?))
    }

    /// Parses a compact 32-character hex string.
    ///
    /// Same version/variant constraints as [`Uuid::from_rfc4122`], without
    /// the hyphens.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::Format`] if the input does not match.
    pub fn from_hex(input: &str) -> UuidResult<Self> {
        if !Self::is_valid_hex(input) {
            return Err(UuidError::Format(format!(
                "invalid hex UUID string: '{}'",
                input
            )));
        }
        Ok(Self::from_bytes(hex::decode(input)?))
    }

    /// Parses a string, dispatching on its length.
    ///
    /// 36 characters are handled by [`Uuid::from_rfc4122`], 32 by
    /// [`Uuid::from_hex`]; anything else is rejected without further
    /// inspection.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::Format`] on any mismatch.
    pub fn parse_str(input: &str) -> UuidResult<Self> {
        match input.len() {
            36 => Self::from_rfc4122(input),
            32 => Self::from_hex(input),
            other => Err(UuidError::Format(format!(
                "invalid length {}, expected 36 or 32",
                other
            ))),
        }
    }

    /// Parses any supported input shape.
    ///
    /// Strings go through [`Uuid::parse_str`], byte slices through
    /// [`Uuid::from_slice`], and existing values are copied byte-for-byte.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::Format`] if the input fails the checks of the
    /// constructor it dispatches to.
    pub fn parse<'a>(input: impl Into<UuidInput<'a>>) -> UuidResult<Self> {
        match input.into() {
            UuidInput::Str(s) => Self::parse_str(s),
            UuidInput::Bytes(b) => Self::from_slice(b),
            UuidInput::Value(u) => Ok(Self::from_bytes(u.bytes)),
        }
    }

    /// Parses an optional input, treating absence as an error.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidInput`] for `None`, otherwise whatever
    /// [`Uuid::parse`] returns.
    pub fn parse_opt(input: Option<UuidInput<'_>>) -> UuidResult<Self> {
        match input {
            Some(input) => Self::parse(input),
            None => Err(UuidError::InvalidInput(
                "no value provided where a UUID was expected".to_owned(),
            )),
        }
    }

    /// Returns true if `input` is a strict canonical hyphenated string.
    ///
    /// Checks length 36, hyphens at positions 8, 13, 18 and 23, hex digits
    /// (either case) everywhere else, version nibble `1..=5` and variant
    /// bits `10`. Never fails.
    pub fn is_valid_rfc4122(input: &str) -> bool {
        let raw = input.as_bytes();
        if raw.len() != 36 {
            return false;
        }
        for (i, &c) in raw.iter().enumerate() {
            let ok = match i {
                8 | 13 | 18 | 23 => c == b'-',
                14 => matches!(c, b'1'..=b'5'),
                19 => matches!(c, b'8' | b'9' | b'a' | b'b' | b'A' | b'B'),
                _ => c.is_ascii_hexdigit(),
            };
            if !ok {
                return false;
            }
        }
        true
    }

    /// Returns true if `input` is a strict compact hex string.
    ///
    /// Same constraints as [`Uuid::is_valid_rfc4122`] without the hyphens:
    /// length 32, version nibble at index 12, variant at index 16. Never
    /// fails.
    pub fn is_valid_hex(input: &str) -> bool {
        let raw = input.as_bytes();
        raw.len() == 32
            && raw.iter().all(|c| c.is_ascii_hexdigit())
            && matches!(raw[12], b'1'..=b'5')
            && matches!(raw[16], b'8' | b'9' | b'a' | b'b' | b'A' | b'B')
    }

    /// Returns true if `bytes` is a semantically valid UUID.
    ///
    /// Requires length 16, a version nibble in `1..=5` (high nibble of byte
    /// 6) and variant bits `10` (top two bits of byte 8). This is the opt-in
    /// semantic check that the raw-byte constructors skip.
    pub fn is_valid_bytes(bytes: &[u8]) -> bool {
        bytes.len() == 16 && (1..=5).contains(&(bytes[6] >> 4)) && bytes[8] >> 6 == 0b10
    }

    /// Returns true if `input` is present and valid in whatever shape it has.
    ///
    /// Strings must match the strict 36- or 32-character pattern; byte
    /// slices and existing values must pass [`Uuid::is_valid_bytes`].
    /// `None` and wrong-length strings are simply `false`; this predicate
    /// never fails.
    pub fn is_valid(input: Option<UuidInput<'_>>) -> bool {
        match input {
            Some(UuidInput::Str(s)) => match s.len() {
                36 => Self::is_valid_rfc4122(s),
                32 => Self::is_valid_hex(s),
                _ => false,
            },
            Some(UuidInput::Bytes(b)) => Self::is_valid_bytes(b),
            Some(UuidInput::Value(u)) => Self::is_valid_bytes(&u.bytes),
            None => false,
        }
    }

    /// Returns the compact hex form, computing and memoizing it on first use.
    ///
    /// Repeated calls return the same cached string.
    pub fn to_hex(&self) -> &str {
        self.hex.get_or_init(|| hex::encode(&self.bytes))
    }

    /// Returns the canonical hyphenated form, memoized like [`Uuid::to_hex`].
    ///
    /// Hyphens sit after hex characters 8, 12, 16 and 20 (byte offsets 4, 6,
    /// 8 and 10).
    pub fn as_hyphenated(&self) -> &str {
        self.hyphenated.get_or_init(|| {
            let h = hex::encode(&self.bytes);
            format!(
                "{}-{}-{}-{}-{}",
                &h[0..8],
                &h[8..12],
                &h[12..16],
                &h[16..20],
                &h[20..32]
            )
        })
    }

    /// Returns a fresh copy of the 16 bytes.
    pub fn to_bytes(&self) -> [u8; 16] {
        self.bytes
    }

    /// Borrows the 16 bytes directly.
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.bytes
    }

    /// Returns the raw version nibble (high 4 bits of byte 6), `0..=15`.
    ///
    /// This is a raw read with no range restriction, distinct from the
    /// validation predicates.
    pub fn version(&self) -> u8 {
        self.bytes[6] >> 4
    }

    /// Reads the version nibble from any supported input shape.
    ///
    /// Byte slices are read directly (length 16 required, no version-range
    /// restriction); strings are parsed strictly first.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::Format`] for wrong-length byte slices or
    /// malformed strings.
    pub fn version_of<'a>(input: impl Into<UuidInput<'a>>) -> UuidResult<u8> {
        match input.into() {
            UuidInput::Bytes(b) => {
                if b.len() != 16 {
                    return Err(UuidError::Format(format!(
                        "invalid byte length {}, expected 16",
                        b.len()
                    )));
                }
                Ok(b[6] >> 4)
            }
            UuidInput::Value(u) => Ok(u.version()),
            UuidInput::Str(s) => Ok(Self::parse_str(s)?.version()),
        }
    }

    /// Multi-way equality over an ordered sequence of optional inputs.
    ///
    /// The first input is parsed as the reference; every later input must
    /// match it byte-for-byte. An absent (`None`) input anywhere makes the
    /// result `Ok(false)` immediately, without an error. Malformed present
    /// inputs fail with the ordinary parse errors.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidArgument`] if fewer than two inputs are
    /// supplied, or a parse error for any malformed present input reached
    /// before a short-circuit.
    pub fn equals<'a, I>(inputs: I) -> UuidResult<bool>
    where
        I: IntoIterator<Item = Option<UuidInput<'a>>>,
    {
        let mut inputs = inputs.into_iter();
        let (first, second) = match (inputs.next(), inputs.next()) {
            (Some(first), Some(second)) => (first, second),
            _ => return Err(UuidError::InvalidArgument("at least two required")),
        };

        let reference = match first {
            Some(input) => Self::parse(input)?,
            None => return Ok(false),
        };

        for candidate in std::iter::once(second).chain(inputs) {
            let candidate = match candidate {
                Some(input) => Self::parse(input)?,
                None => return Ok(false),
            };
            if candidate.bytes != reference.bytes {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Compares two inputs by unsigned byte order.
    ///
    /// Lexicographic over the 16 positions in index order; decided at the
    /// first differing byte. `Ordering::Equal` only when all bytes match.
    /// This agrees with lexicographic order of the hyphenated string form,
    /// since the hyphens sit at fixed positions.
    ///
    /// # Errors
    ///
    /// Returns the ordinary parse errors if either input is malformed.
    pub fn compare<'a, 'b>(
        a: impl Into<UuidInput<'a>>,
        b: impl Into<UuidInput<'b>>,
    ) -> UuidResult<Ordering> {
        let a = Self::parse(a)?;
        let b = Self::parse(b)?;
        Ok(a.bytes.cmp(&b.bytes))
    }

    /// The nil UUID: 16 zero bytes.
    pub fn nil() -> Self {
        Self::from_bytes([0u8; 16])
    }

    /// The max UUID: 16 `0xFF` bytes.
    pub fn max() -> Self {
        Self::from_bytes([0xFF; 16])
    }

    /// Generates a new random (version 4) UUID.
    ///
    /// Generation is delegated to the `uuid` crate's cryptographically
    /// secure generator, and the result is routed through the strict
    /// RFC 4122 parser exactly like externally supplied input.
    pub fn new_v4() -> Self {
        let generated = ::uuid::Uuid::new_v4().hyphenated().to_string();
        // A strict-parse failure here means the generator broke its contract
        Self::from_rfc4122(&generated).expect("v4 generator produced an invalid UUID")
    }
}

impl Default for Uuid {
    /// The nil UUID. Generation is an explicit effect; see [`Uuid::new_v4`].
    fn default() -> Self {
        Self::nil()
    }
}

impl Clone for Uuid {
    /// Clones by byte value with fresh (empty) string caches.
    fn clone(&self) -> Self {
        Self::from_bytes(self.bytes)
    }
}

impl PartialEq for Uuid {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for Uuid {}

impl Hash for Uuid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

impl PartialOrd for Uuid {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Uuid {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bytes.cmp(&other.bytes)
    }
}

impl fmt::Display for Uuid {
    /// Formats as the canonical hyphenated form, lowercase.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_hyphenated())
    }
}

impl fmt::Debug for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Uuid").field(&self.as_hyphenated()).finish()
    }
}

impl FromStr for Uuid {
    type Err = UuidError;

    /// Parses a 36- or 32-character string; equivalent to [`Uuid::parse_str`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Uuid {
    /// Serializes as the canonical hyphenated string.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_hyphenated())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Uuid {
    /// Deserializes from any string the strict parser accepts (36 or 32
    /// characters).
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Uuid::parse_str(&s).map_err(serde::de::Error::custom)
    }
}
