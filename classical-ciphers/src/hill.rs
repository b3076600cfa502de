//! Hill cipher: block-wise multiplication by a key matrix mod N
//!
//! Two codecs are supported:
//!
//! - English: A=0..Z=25, modulus 26, any n×n key, padding with `A` (0).
//! - Spanish: Ñ at 14 shifting O..Z to 15..26, modulus 27, 2×2 key only,
//!   padding with `X` (24).
//!
//! Output is a contiguous string; unlike the affine cipher it is not split
//! into blocks of ten.

use tracing::debug;

use crate::alphabet::{alphabet_for, normalize, Alphabet, Language};
use crate::cipher::TextCipher;
use crate::error::{CipherError, Result};
use crate::matrix::KeyMatrix;
use crate::utils::pad_to_multiple;

/// Hill cipher bound to one key matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HillCipher {
    key: KeyMatrix,
    language: Language,
}

impl HillCipher {
    /// General English variant: any square key, modulus 26.
    pub fn new(rows: Vec<Vec<i64>>) -> Result<Self> {
        Self::with_language(rows, Language::English)
    }

    /// Spanish variant: 2×2 key, modulus 27.
    pub fn spanish(rows: Vec<Vec<i64>>) -> Result<Self> {
        Self::with_language(rows, Language::Spanish)
    }

    /// Builds the cipher, validating only the key shape.
    ///
    /// Invertibility of the key is checked by [`HillCipher::decrypt`].
    pub fn with_language(rows: Vec<Vec<i64>>, language: Language) -> Result<Self> {
        let key = KeyMatrix::new(rows)?;
        Self::from_matrix(key, language)
    }

    pub fn from_matrix(key: KeyMatrix, language: Language) -> Result<Self> {
        if language == Language::Spanish && key.size() != 2 {
            return Err(CipherError::InvalidKeyShape {
                expected: "a 2x2 matrix".to_string(),
                rows: key.size(),
                columns: key.size(),
            });
        }

        Ok(Self { key, language })
    }

    pub fn key(&self) -> &KeyMatrix {
        &self.key
    }

    pub fn block_size(&self) -> usize {
        self.key.size()
    }

    pub fn modulus(&self) -> i64 {
        self.alphabet().modulus()
    }

    fn alphabet(&self) -> Alphabet {
        alphabet_for(self.language)
    }

    /// Index used to fill the last block
    pub fn pad_index(&self) -> i64 {
        match self.language {
            Language::English => 0,
            Language::Spanish => 24,
        }
    }

    fn encode(&self, text: &str) -> Vec<i64> {
        self.alphabet().to_indices(&normalize(text, self.language))
    }

    fn transform(&self, matrix: &KeyMatrix, indices: &[i64]) -> String {
        let modulus = self.modulus();
        let output: Vec<i64> = indices
            .chunks(self.block_size())
            .flat_map(|block| matrix.mul_vector_mod(block, modulus))
            .collect();

        self.alphabet().from_indices(&output)
    }

    pub fn encrypt(&self, plaintext: &str) -> String {
        let indices = pad_to_multiple(&self.encode(plaintext), self.block_size(), self.pad_index());
        self.transform(&self.key, &indices)
    }

    /// Fails with `SingularMatrix` when the key has no inverse mod N, and
    /// with `InvalidBlockLength` when the text does not fill whole blocks.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String> {
        let inverse = self.key.inverse_mod(self.modulus())?;
        debug!(
            target: "classical_ciphers::hill",
            key = %self.key,
            inverse = %inverse,
            "computed inverse key"
        );

        let indices = self.encode(ciphertext);
        if indices.len() % self.block_size() != 0 {
            return Err(CipherError::InvalidBlockLength {
                length: indices.len(),
                block_size: self.block_size(),
            });
        }

        Ok(self.transform(&inverse, &indices))
    }
}

impl TextCipher for HillCipher {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        Ok(HillCipher::encrypt(self, plaintext))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        HillCipher::decrypt(self, ciphertext)
    }

    fn name(&self) -> &'static str {
        "hill"
    }
}
