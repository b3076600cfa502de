//! Vigenère cipher and coincidence-index statistics

use rand::seq::{IteratorRandom, SliceRandom};
use rand::Rng;
use tracing::debug;

use crate::alphabet::{alphabet_for, normalize, Language};
use crate::cipher::TextCipher;
use crate::error::{CipherError, Result};
use crate::utils::{block_format, BLOCK_WIDTH};

/// Vigenère cipher with a key normalized under the same alphabet as the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VigenereCipher {
    shifts: Vec<i64>,
    language: Language,
}

impl VigenereCipher {
    /// Creates a cipher for `key`; fails with `EmptyKey` if no letter survives normalization.
    pub fn new(key: &str, language: Language) -> Result<Self> {
        let shifts = alphabet_for(language).to_indices(&normalize(key, language));

        if shifts.is_empty() {
            return Err(CipherError::EmptyKey);
        }

        Ok(Self { shifts, language })
    }

    /// Key as normalized symbols
    pub fn key(&self) -> String {
        alphabet_for(self.language).from_indices(&self.shifts)
    }

    fn apply(&self, text: &str, sign: i64) -> String {
        let alphabet = alphabet_for(self.language);
        let n = alphabet.modulus();

        alphabet
            .to_indices(&normalize(text, self.language))
            .iter()
            .zip(self.shifts.iter().cycle())
            .map(|(x, k)| alphabet.symbol_at((x + sign * k).rem_euclid(n)))
            .collect()
    }

    /// Encrypts `(x + k) mod N`; the result is a contiguous string.
    pub fn encrypt(&self, plaintext: &str) -> String {
        self.apply(plaintext, 1)
    }

    /// Decrypts `(y - k) mod N`; the result is split into blocks of ten.
    pub fn decrypt(&self, ciphertext: &str) -> String {
        block_format(&self.apply(ciphertext, -1), BLOCK_WIDTH)
    }
}

impl TextCipher for VigenereCipher {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        Ok(VigenereCipher::encrypt(self, plaintext))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        Ok(VigenereCipher::decrypt(self, ciphertext))
    }

    fn name(&self) -> &'static str {
        "vigenere"
    }
}

/// Index of coincidence of the normalized text, rounded to 5 decimals.
///
/// Returns 0 for texts with fewer than two letters.
pub fn index_of_coincidence(text: &str, language: Language) -> f64 {
    let alphabet = alphabet_for(language);
    let mut frequencies = vec![0u64; alphabet.len()];

    for index in alphabet.to_indices(&normalize(text, language)) {
        frequencies[index as usize] += 1;
    }

    let total: u64 = frequencies.iter().sum();
    if total < 2 {
        return 0.0;
    }

    let numerator: u64 = frequencies.iter().map(|&f| f * f.saturating_sub(1)).sum();
    let ic = numerator as f64 / (total * (total - 1)) as f64;

    (ic * 100_000.0).round() / 100_000.0
}

/// Random key of `length` letters drawn from `distinct` different letters of A–Z.
pub fn random_key<R: Rng + ?Sized>(length: usize, distinct: usize, rng: &mut R) -> Result<String> {
    let alphabet = alphabet_for(Language::English);

    if distinct > alphabet.len() {
        return Err(CipherError::InvalidParameter(format!(
            "cannot pick {} distinct letters from {}",
            distinct,
            alphabet.len()
        )));
    }
    if distinct == 0 && length > 0 {
        return Err(CipherError::InvalidParameter(
            "at least one distinct letter is required".to_string(),
        ));
    }

    let letters: Vec<char> = alphabet.symbols().iter().copied().choose_multiple(rng, distinct);

    Ok((0..length)
        .filter_map(|_| letters.choose(rng).copied())
        .collect())
}

/// Table of coincidence indices of random keys.
///
/// For each key length `l` in `lengths` and letter count `r` in
/// `distincts`, a key `random_key(l, r)` is generated and its index of
/// coincidence under `language` goes in cell `(l, r)`.
pub fn coincidence_table<R: Rng + ?Sized>(
    lengths: &[usize],
    distincts: &[usize],
    language: Language,
    rng: &mut R,
) -> Result<String> {
    let mut table: Vec<Vec<f64>> = Vec::with_capacity(lengths.len());

    for &length in lengths {
        let mut row = Vec::with_capacity(distincts.len());
        for &distinct in distincts {
            let key = random_key(length, distinct, rng)?;
            row.push(index_of_coincidence(&key, language));
        }
        table.push(row);
    }

    debug!(
        target: "classical_ciphers::vigenere",
        rows = lengths.len(),
        columns = distincts.len(),
        %language,
        "built coincidence table"
    );

    Ok(format_table(&table, lengths, distincts))
}

fn format_table(table: &[Vec<f64>], lengths: &[usize], distincts: &[usize]) -> String {
    let header = format!(
        "| l \\ r | {} |",
        distincts
            .iter()
            .map(usize::to_string)
            .collect::<Vec<String>>()
            .join(" | ")
    );
    let separator = "-".repeat(header.chars().count());

    let mut lines = vec![header, separator.clone()];

    for (length, row) in lengths.iter().zip(table) {
        let cells: Vec<String> = row.iter().map(|ic| format!("{:.5}", ic)).collect();
        lines.push(format!("|  {}  | {} |", length, cells.join(" | ")));
        lines.push(separator.clone());
    }

    lines.join("\n")
}
