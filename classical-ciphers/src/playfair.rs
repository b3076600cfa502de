//! Playfair digraph cipher over a 5×5 square (W folded into X)

use crate::alphabet::{normalize, Language};
use crate::cipher::TextCipher;
use crate::error::{CipherError, Result};

const SIZE: usize = 5;
const FILLER: char = 'X';

const DEFAULT_SQUARE: [[char; SIZE]; SIZE] = [
    ['E', 'A', 'J', 'S', 'Z'],
    ['L', 'C', 'K', 'T', 'I'],
    ['D', 'M', 'U', 'B', 'F'],
    ['N', 'V', 'R', 'G', 'P'],
    ['X', 'O', 'H', 'Q', 'Y'],
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayfairCipher {
    square: [[char; SIZE]; SIZE],
}

impl Default for PlayfairCipher {
    fn default() -> Self {
        Self { square: DEFAULT_SQUARE }
    }
}

impl PlayfairCipher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a custom square; its 25 letters must be distinct.
    pub fn from_square(square: [[char; SIZE]; SIZE]) -> Result<Self> {
        let mut seen: Vec<char> = square.iter().flatten().copied().collect();
        seen.sort_unstable();
        seen.dedup();

        if seen.len() != SIZE * SIZE {
            return Err(CipherError::InvalidPermutation(
                "playfair square letters must be distinct".to_string(),
            ));
        }

        Ok(Self { square })
    }

    fn position(&self, letter: char) -> Result<(usize, usize)> {
        self.square
            .iter()
            .enumerate()
            .find_map(|(row, letters)| letters.iter().position(|&c| c == letter).map(|col| (row, col)))
            .ok_or(CipherError::UnknownSymbol(letter))
    }

    fn fold(text: &str) -> Vec<char> {
        normalize(text, Language::English)
            .chars()
            .map(|c| if c == 'W' { FILLER } else { c })
            .collect()
    }

    /// Normalizes plaintext and splits doubled letters with `X`.
    ///
    /// An `X` goes between every two consecutive identical letters, and one
    /// more at the end if the length is odd.
    pub fn prepare_plaintext(text: &str) -> String {
        let letters = Self::fold(text);
        let mut prepared = Vec::with_capacity(letters.len() * 2);

        for (i, &c) in letters.iter().enumerate() {
            prepared.push(c);
            if letters.get(i + 1) == Some(&c) {
                prepared.push(FILLER);
            }
        }

        if prepared.len() % 2 != 0 {
            prepared.push(FILLER);
        }

        prepared.into_iter().collect()
    }

    fn transform(&self, letters: &[char], step: usize) -> Result<String> {
        let mut output = String::with_capacity(letters.len());

        for pair in letters.chunks(2) {
            let (r1, c1) = self.position(pair[0])?;
            let (r2, c2) = self.position(pair[1])?;

            let (first, second) = if r1 == r2 {
                (self.square[r1][(c1 + step) % SIZE], self.square[r2][(c2 + step) % SIZE])
            } else if c1 == c2 {
                (self.square[(r1 + step) % SIZE][c1], self.square[(r2 + step) % SIZE][c2])
            } else {
                (self.square[r1][c2], self.square[r2][c1])
            };

            output.push(first);
            output.push(second);
        }

        Ok(output)
    }

    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        let prepared: Vec<char> = Self::prepare_plaintext(plaintext).chars().collect();
        self.transform(&prepared, 1)
    }

    /// Decrypts digraph by digraph; fails with `InvalidBlockLength` on an odd
    /// number of letters.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String> {
        let letters = Self::fold(ciphertext);

        if letters.len() % 2 != 0 {
            return Err(CipherError::InvalidBlockLength {
                length: letters.len(),
                block_size: 2,
            });
        }

        // shifting by SIZE - 1 is a shift of -1 mod SIZE
        self.transform(&letters, SIZE - 1)
    }
}

impl TextCipher for PlayfairCipher {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        PlayfairCipher::encrypt(self, plaintext)
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        PlayfairCipher::decrypt(self, ciphertext)
    }

    fn name(&self) -> &'static str {
        "playfair"
    }
}
