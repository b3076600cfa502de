//! Generic text cipher trait

use crate::error::Result;

/// Trait for a keyed cipher over text
///
/// Implementors own their key; `encrypt` and `decrypt` take raw text and
/// normalize it themselves.
pub trait TextCipher {
    /// Encrypts a text
    fn encrypt(&self, plaintext: &str) -> Result<String>;

    /// Decrypts a text
    fn decrypt(&self, ciphertext: &str) -> Result<String>;

    /// Returns a short human readable name for the cipher
    fn name(&self) -> &'static str;
}
