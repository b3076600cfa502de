//! # Classical Ciphers Library
//!
//! This library implements classical (pre-modern) symmetric ciphers over a
//! configurable alphabet: the 26-letter English alphabet or the 27-letter
//! Spanish alphabet with Ñ.
//!
//! ## Supported Ciphers
//!
//! - **Affine** - `(a*x + b) mod N`, with brute-force key search
//! - **Hill** - block cipher multiplying index vectors by a key matrix mod N
//! - **Vigenère** - polyalphabetic shift, plus coincidence-index statistics
//! - **Monoalphabetic** - random substitution of A–Z
//! - **Playfair** - digraph cipher over a fixed 5×5 square
//!
//! None of these are secure; they exist for teaching and for breaking.
//!
//! ## Usage
//!
//! ```rust
//! use classical_ciphers::{affine, HillCipher, Language};
//!
//! let encrypted = affine::encrypt("Hello", 1, 2, Language::English);
//! assert_eq!(encrypted, "JGNNQ");
//! assert_eq!(affine::decrypt(&encrypted, 1, 2, Language::English)?, "HELLO");
//!
//! let hill = HillCipher::new(vec![vec![3, 3], vec![2, 5]])?;
//! assert_eq!(hill.encrypt("HELP"), "HIAT");
//! assert_eq!(hill.decrypt("HIAT")?, "HELP");
//! # Ok::<(), classical_ciphers::CipherError>(())
//! ```

// Public modules
pub mod affine;
pub mod alphabet;
pub mod arithmetic;
pub mod cipher;
pub mod error;
pub mod frequency;
pub mod hill;
pub mod io;
pub mod matrix;
pub mod monoalphabetic;
pub mod playfair;
pub mod utils;
pub mod vigenere;

// Re-exports for easy access
pub use affine::{AffineCipher, BruteForceCandidate};
pub use alphabet::{alphabet_for, normalize, Alphabet, Language};
pub use cipher::TextCipher;
pub use error::{CipherError, Result};
pub use hill::HillCipher;
pub use matrix::KeyMatrix;
pub use monoalphabetic::MonoalphabeticCipher;
pub use playfair::PlayfairCipher;
pub use vigenere::VigenereCipher;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Names of every cipher implemented by this crate
pub fn supported_ciphers() -> Vec<&'static str> {
    vec!["affine", "hill", "vigenere", "monoalphabetic", "playfair"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata() {
        assert_eq!(supported_ciphers().len(), 5);
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_all_ciphers_through_trait() {
        let ciphers: Vec<Box<dyn TextCipher>> = vec![
            Box::new(AffineCipher::new(5, 8, Language::English)),
            Box::new(HillCipher::new(vec![vec![3, 3], vec![2, 5]]).unwrap()),
            Box::new(VigenereCipher::new("CLAVE", Language::Spanish).unwrap()),
            Box::new(MonoalphabeticCipher::new("QWERTYUIOPASDFGHJKLZXCVBNM").unwrap()),
            Box::new(PlayfairCipher::new()),
        ];

        let names: Vec<&str> = ciphers.iter().map(|c| c.name()).collect();
        assert_eq!(names, supported_ciphers());

        for cipher in &ciphers {
            let encrypted = cipher.encrypt("Integration test").unwrap();
            let decrypted = cipher.decrypt(&encrypted).unwrap().replace(' ', "");
            assert!(
                decrypted.starts_with("INTEGRATIONTEST"),
                "{} returned {}",
                cipher.name(),
                decrypted
            );
        }
    }
}
