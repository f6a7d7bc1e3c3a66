//! Base62 codec between row identities and public short codes.
//!
//! A short code is the canonical positional representation of an identity in
//! base 62 over [`ALPHABET`], most significant symbol first. There is no
//! padding, no offset and no salt: identity `0` is `"a"`, identity `1` is
//! `"b"`, identity `62` is `"ba"`.
//!
//! # Stability
//!
//! The alphabet order is part of the public contract. Every short link ever
//! issued decodes through this exact table, so it must never change.
//!
//! # Enumerability
//!
//! Identities are allocated sequentially by the store, therefore codes are
//! sequential too and anyone can walk the whole keyspace (`b`, `c`, `d`, ...).
//! Links must not be treated as secret.

/// The frozen 62-symbol alphabet: lowercase, uppercase, digits.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Encoding base, equal to the alphabet size.
pub const BASE: u64 = ALPHABET.len() as u64;

/// Longest code `encode` can produce (`u64::MAX` needs 11 base62 digits).
pub const MAX_CODE_LEN: usize = 11;

const INVALID: u8 = u8::MAX;

/// ASCII lookup table: symbol byte -> digit value, [`INVALID`] elsewhere.
const DECODE_TABLE: [u8; 128] = build_decode_table();

const fn build_decode_table() -> [u8; 128] {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Errors produced when a string cannot be turned back into an identity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("Short code is empty")]
    Empty,

    #[error("Invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("Short code exceeds the maximum representable value")]
    Overflow,

    #[error("Short code has redundant leading symbols")]
    NonCanonical,

    #[error("Short code decodes to {0}, which is not a valid identity")]
    OutOfRange(u64),
}

/// Encodes a non-negative integer as a base62 code.
///
/// ```
/// use seqlink::domain::codec::encode;
///
/// assert_eq!(encode(0), "a");
/// assert_eq!(encode(1), "b");
/// assert_eq!(encode(62), "ba");
/// ```
pub fn encode(mut n: u64) -> String {
    if n == 0 {
        return char::from(ALPHABET[0]).to_string();
    }

    let mut digits = Vec::with_capacity(MAX_CODE_LEN);
    while n > 0 {
        digits.push(ALPHABET[(n % BASE) as usize]);
        n /= BASE;
    }

    digits.into_iter().rev().map(char::from).collect()
}

/// Encodes a row identity.
///
/// Identities handed out by the store are always positive; a negative value
/// is clamped to zero rather than wrapped.
pub fn encode_id(id: i64) -> String {
    encode(u64::try_from(id).unwrap_or(0))
}

/// Decodes a base62 code with Horner's method.
///
/// Leading zero symbols are accepted here (`"ab"` decodes to `1`); use
/// [`decode_id`] when the code comes from a request.
///
/// # Errors
///
/// - [`CodecError::Empty`] for an empty string
/// - [`CodecError::InvalidCharacter`] for the first symbol outside the alphabet
/// - [`CodecError::Overflow`] when the value does not fit in `u64`
pub fn decode(code: &str) -> Result<u64, CodecError> {
    if code.is_empty() {
        return Err(CodecError::Empty);
    }

    code.chars()
        .enumerate()
        .try_fold(0u64, |acc, (position, character)| {
            let digit = digit_value(character)
                .ok_or(CodecError::InvalidCharacter { character, position })?;

            acc.checked_mul(BASE)
                .and_then(|shifted| shifted.checked_add(digit))
                .ok_or(CodecError::Overflow)
        })
}

/// Decodes a public short code into a row identity.
///
/// Stricter than [`decode`]: the code must be in canonical form, so each
/// identity is reachable through exactly one code, and the value must be a
/// valid positive identity.
///
/// # Errors
///
/// Everything [`decode`] rejects, plus [`CodecError::NonCanonical`] and
/// [`CodecError::OutOfRange`].
pub fn decode_id(code: &str) -> Result<i64, CodecError> {
    let value = decode(code)?;

    if code.len() > 1 && code.as_bytes()[0] == ALPHABET[0] {
        return Err(CodecError::NonCanonical);
    }

    i64::try_from(value)
        .ok()
        .filter(|id| *id > 0)
        .ok_or(CodecError::OutOfRange(value))
}

fn digit_value(character: char) -> Option<u64> {
    if !character.is_ascii() {
        return None;
    }

    match DECODE_TABLE[character as usize] {
        INVALID => None,
        digit => Some(u64::from(digit)),
    }
}
