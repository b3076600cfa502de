//! Affine cipher: x -> (a*x + b) mod N
//!
//! All operations are pure functions of the text, the key `(a, b)` and the
//! alphabet. Output is grouped in blocks of [`BLOCK_WIDTH`] symbols.

use tracing::{debug, trace};

use crate::alphabet::{alphabet_for, normalize, Language};
use crate::arithmetic::{gcd, mod_inverse, totient};
use crate::cipher::TextCipher;
use crate::error::{CipherError, Result};
use crate::utils::{block_format, take_chars, BLOCK_WIDTH};

/// Number of characters of each decryption kept in a brute-force candidate
pub const PREVIEW_LENGTH: usize = 100;

/// Encrypts `text` with `(a*x + b) mod N`.
///
/// The key is not checked for invertibility; any `a` is accepted.
pub fn encrypt(text: &str, a: i64, b: i64, language: Language) -> String {
    let alphabet = alphabet_for(language);
    let n = alphabet.modulus();
    let (a, b) = (a.rem_euclid(n), b.rem_euclid(n));

    let encrypted: String = alphabet
        .to_indices(&normalize(text, language))
        .into_iter()
        .map(|x| alphabet.symbol_at((a * x + b).rem_euclid(n)))
        .collect();

    block_format(&encrypted, BLOCK_WIDTH)
}

/// Decrypts `text` with `a⁻¹ * (x - b) mod N`.
///
/// The input is renormalized, so block separators and any other
/// non-letters are ignored. Fails with [`CipherError::InvalidKey`] when
/// `a` is not invertible mod N.
pub fn decrypt(text: &str, a: i64, b: i64, language: Language) -> Result<String> {
    let alphabet = alphabet_for(language);
    let n = alphabet.modulus();

    let a_inv = mod_inverse(a, n).ok_or(CipherError::InvalidKey { a, modulus: n })?;
    let b = b.rem_euclid(n);

    let decrypted: String = alphabet
        .to_indices(&normalize(text, language))
        .into_iter()
        .map(|x| alphabet.symbol_at((a_inv * (x - b)).rem_euclid(n)))
        .collect();

    Ok(block_format(&decrypted, BLOCK_WIDTH))
}

/// One key tried by [`brute_force`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BruteForceCandidate {
    pub a: i64,
    pub b: i64,
    /// First [`PREVIEW_LENGTH`] characters of the blocked decryption
    pub preview: String,
}

/// Tries every key `(a, b)` with `gcd(a, N) = 1` and `0 <= b < N`.
///
/// Candidates are ordered by ascending `a`, then ascending `b`, and there
/// are exactly `φ(N) * N` of them.
pub fn brute_force(ciphertext: &str, language: Language) -> Vec<BruteForceCandidate> {
    let n = alphabet_for(language).modulus();
    let mut candidates = Vec::with_capacity(totient(n) * n as usize);

    for a in (1..n).filter(|&a| gcd(a, n) == 1) {
        for b in 0..n {
            match decrypt(ciphertext, a, b, language) {
                Ok(plaintext) => candidates.push(BruteForceCandidate {
                    a,
                    b,
                    preview: take_chars(&plaintext, PREVIEW_LENGTH),
                }),
                Err(err) => {
                    trace!(target: "classical_ciphers::affine", a, b, %err, "skipping key");
                }
            }
        }
    }

    debug!(
        target: "classical_ciphers::affine",
        modulus = n,
        candidates = candidates.len(),
        "brute force finished"
    );

    candidates
}

/// Formats every brute-force candidate as `"a = {a}, b = {b}\n{preview}\n"`.
pub fn brute_force_report(ciphertext: &str, language: Language) -> String {
    brute_force(ciphertext, language)
        .iter()
        .map(|c| format!("a = {}, b = {}\n{}\n", c.a, c.b, c.preview))
        .collect()
}

/// Affine key bound to an alphabet, for use through [`TextCipher`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffineCipher {
    a: i64,
    b: i64,
    language: Language,
}

impl AffineCipher {
    pub fn new(a: i64, b: i64, language: Language) -> Self {
        Self { a, b, language }
    }

    /// Whether `a` is invertible for the chosen alphabet
    pub fn is_invertible(&self) -> bool {
        gcd(self.a, alphabet_for(self.language).modulus()) == 1
    }
}

impl TextCipher for AffineCipher {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        Ok(encrypt(plaintext, self.a, self.b, self.language))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        decrypt(ciphertext, self.a, self.b, self.language)
    }

    fn name(&self) -> &'static str {
        "affine"
    }
}
