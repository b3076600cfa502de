//! Random monoalphabetic substitution over A–Z

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::alphabet::{alphabet_for, normalize, Language};
use crate::cipher::TextCipher;
use crate::error::{CipherError, Result};
use crate::utils::{block_format, BLOCK_WIDTH};

/// Random permutation of A–Z, usable as a substitution key
pub fn generate_key<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut letters: Vec<char> = alphabet_for(Language::English).symbols().to_vec();
    letters.shuffle(rng);
    letters.into_iter().collect()
}

/// Substitution cipher: the i-th plain letter maps to the i-th key letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonoalphabeticCipher {
    forward: HashMap<char, char>,
    backward: HashMap<char, char>,
}

impl MonoalphabeticCipher {
    /// Fails with `InvalidPermutation` unless `key` is a permutation of A–Z
    /// (case-insensitive).
    pub fn new(key: &str) -> Result<Self> {
        let alphabet = alphabet_for(Language::English);
        let key: Vec<char> = key.trim().chars().flat_map(char::to_uppercase).collect();

        if key.len() != alphabet.len() {
            return Err(CipherError::InvalidPermutation(format!(
                "expected {} letters, got {}",
                alphabet.len(),
                key.len()
            )));
        }

        let mut forward = HashMap::with_capacity(alphabet.len());
        let mut backward = HashMap::with_capacity(alphabet.len());

        for (&plain, &cipher) in alphabet.symbols().iter().zip(&key) {
            if !alphabet.contains(cipher) {
                return Err(CipherError::InvalidPermutation(format!(
                    "'{}' is not a letter of A-Z",
                    cipher
                )));
            }
            if backward.insert(cipher, plain).is_some() {
                return Err(CipherError::InvalidPermutation(format!(
                    "'{}' appears more than once",
                    cipher
                )));
            }
            forward.insert(plain, cipher);
        }

        Ok(Self { forward, backward })
    }

    fn substitute(text: &str, mapping: &HashMap<char, char>) -> String {
        let substituted: String = normalize(text, Language::English)
            .chars()
            .map(|c| mapping.get(&c).copied().unwrap_or('_'))
            .collect();

        block_format(&substituted, BLOCK_WIDTH)
    }

    pub fn encrypt(&self, plaintext: &str) -> String {
        Self::substitute(plaintext, &self.forward)
    }

    pub fn decrypt(&self, ciphertext: &str) -> String {
        Self::substitute(ciphertext, &self.backward)
    }
}

/// Decrypts with a partial cipher→plain mapping; unmapped letters become `_`.
///
/// Mapping keys are matched after normalization, so they should be
/// uppercase letters.
pub fn decrypt_with_partial_mapping(ciphertext: &str, mapping: &HashMap<char, char>) -> String {
    MonoalphabeticCipher::substitute(ciphertext, mapping)
}

impl TextCipher for MonoalphabeticCipher {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        Ok(MonoalphabeticCipher::encrypt(self, plaintext))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        Ok(MonoalphabeticCipher::decrypt(self, ciphertext))
    }

    fn name(&self) -> &'static str {
        "monoalphabetic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const KEY: &str = "QWERTYUIOPASDFGHJKLZXCVBNM";

    #[test]
    fn test_encrypt_decrypt() {
        let cipher = MonoalphabeticCipher::new(KEY).unwrap();
        assert_eq!(cipher.encrypt("Hello"), "ITSSG");
        assert_eq!(cipher.decrypt("ITSSG"), "HELLO");
    }

    #[test]
    fn test_output_is_blocked() {
        let cipher = MonoalphabeticCipher::new(KEY).unwrap();
        let encrypted = cipher.encrypt("the quick brown fox jumps over");
        assert_eq!(encrypted.split(' ').count(), 3);
        assert_eq!(cipher.decrypt(&encrypted), "THEQUICKBR OWNFOXJUMP SOVER");
    }

    #[test]
    fn test_lowercase_key_accepted() {
        let cipher = MonoalphabeticCipher::new(&KEY.to_lowercase()).unwrap();
        assert_eq!(cipher.encrypt("A"), "Q");
    }

    #[test]
    fn test_invalid_keys() {
        assert!(matches!(
            MonoalphabeticCipher::new("ABC"),
            Err(CipherError::InvalidPermutation(_))
        ));
        assert!(matches!(
            MonoalphabeticCipher::new("AACDEFGHIJKLMNOPQRSTUVWXYZ"),
            Err(CipherError::InvalidPermutation(_))
        ));
        assert!(matches!(
            MonoalphabeticCipher::new("1BCDEFGHIJKLMNOPQRSTUVWXYZ"),
            Err(CipherError::InvalidPermutation(_))
        ));
    }

    #[test]
    fn test_generated_key_is_permutation() {
        let mut rng = StdRng::seed_from_u64(2024);
        let key = generate_key(&mut rng);
        let mut sorted: Vec<char> = key.chars().collect();
        sorted.sort_unstable();
        assert_eq!(sorted.into_iter().collect::<String>(), "ABCDEFGHIJKLMNOPQRSTUVWXYZ");

        let cipher = MonoalphabeticCipher::new(&key).unwrap();
        assert_eq!(cipher.decrypt(&cipher.encrypt("Substitution")), "SUBSTITUTI ON");
    }

    #[test]
    fn test_partial_mapping() {
        let mapping: HashMap<char, char> = [('I', 'H'), ('T', 'E')].into_iter().collect();
        assert_eq!(decrypt_with_partial_mapping("ITSSG", &mapping), "HE___");
    }
}
