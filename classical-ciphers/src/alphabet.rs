//! Alphabets and text normalization
//!
//! Every cipher in this crate works on indices into an [`Alphabet`]. Raw
//! text is first passed through [`normalize`], which guarantees that every
//! remaining symbol is a member of the alphabet selected by the
//! [`Language`].

use std::fmt;
use std::str::FromStr;

use unicode_normalization::char::{decompose_canonical, is_combining_mark};

use crate::error::CipherError;

const ENGLISH_SYMBOLS: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

const SPANISH_SYMBOLS: [char; 27] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N',
    'Ñ', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Alphabet selection flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// 26 letters, Ñ folded into N
    English,
    /// 27 letters, Ñ between N and O
    Spanish,
}

impl Language {
    /// Maps a language flag to a language: `"es"` is Spanish, anything else English.
    pub fn from_flag(flag: &str) -> Self {
        if flag.eq_ignore_ascii_case("es") {
            Language::Spanish
        } else {
            Language::English
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
        }
    }

    pub fn alphabet(&self) -> Alphabet {
        alphabet_for(*self)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.flag())
    }
}

/// Strict parse of `"es"` / `"en"` (any case), for command-line flags.
impl FromStr for Language {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "es" => Ok(Language::Spanish),
            "en" => Ok(Language::English),
            other => Err(CipherError::InvalidParameter(format!(
                "unknown alphabet '{}', expected es or en",
                other
            ))),
        }
    }
}

/// Ordered, duplicate-free symbol set used as the arithmetic domain mod N.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    symbols: &'static [char],
}

impl Alphabet {
    /// Number of symbols (the modulus N).
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Modulus as a signed integer, for arithmetic.
    pub fn modulus(&self) -> i64 {
        self.symbols.len() as i64
    }

    pub fn symbols(&self) -> &'static [char] {
        self.symbols
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.index_of(symbol).is_some()
    }

    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.symbols.iter().position(|&s| s == symbol)
    }

    /// Symbol at `index` reduced mod N, so any integer is accepted.
    pub fn symbol_at(&self, index: i64) -> char {
        self.symbols[index.rem_euclid(self.modulus()) as usize]
    }

    /// Indices of every member symbol of `text`; non-members are skipped.
    pub fn to_indices(&self, text: &str) -> Vec<i64> {
        text.chars()
            .filter_map(|c| self.index_of(c))
            .map(|i| i as i64)
            .collect()
    }

    pub fn from_indices(&self, indices: &[i64]) -> String {
        indices.iter().map(|&i| self.symbol_at(i)).collect()
    }
}

pub fn alphabet_for(language: Language) -> Alphabet {
    match language {
        Language::English => Alphabet { symbols: &ENGLISH_SYMBOLS },
        Language::Spanish => Alphabet { symbols: &SPANISH_SYMBOLS },
    }
}

/// Removes diacritics by canonical decomposition, dropping combining marks.
///
/// With `Language::Spanish`, `Ñ` and `ñ` are kept as-is instead of being
/// decomposed into `N` + combining tilde.
pub fn strip_accents(text: &str, language: Language) -> String {
    let mut stripped = String::with_capacity(text.len());

    for c in text.chars() {
        if language == Language::Spanish && (c == 'Ñ' || c == 'ñ') {
            stripped.push(c);
            continue;
        }
        decompose_canonical(c, |d| {
            if !is_combining_mark(d) {
                stripped.push(d);
            }
        });
    }

    stripped
}

/// Normalizes raw text into symbols of `alphabet_for(language)`.
///
/// Steps: strip accents, drop non-letters, uppercase, and for English fold
/// `Ñ` into `N`. Letters that still fall outside the alphabet (e.g. `Ø`)
/// are dropped. The result is idempotent under a second call.
pub fn normalize(text: &str, language: Language) -> String {
    let alphabet = alphabet_for(language);

    strip_accents(text, language)
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_uppercase)
        .map(|c| match (language, c) {
            (Language::English, 'Ñ') => 'N',
            _ => c,
        })
        .filter(|&c| alphabet.contains(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_sizes() {
        assert_eq!(alphabet_for(Language::English).len(), 26);
        assert_eq!(alphabet_for(Language::Spanish).len(), 27);
    }

    #[test]
    fn test_index_roundtrip() {
        for language in [Language::English, Language::Spanish] {
            let alphabet = alphabet_for(language);
            for (i, &symbol) in alphabet.symbols().iter().enumerate() {
                assert_eq!(alphabet.index_of(symbol), Some(i));
                assert_eq!(alphabet.symbol_at(i as i64), symbol);
            }
        }
    }

    #[test]
    fn test_spanish_ene_position() {
        let alphabet = alphabet_for(Language::Spanish);
        assert_eq!(alphabet.index_of('N'), Some(13));
        assert_eq!(alphabet.index_of('Ñ'), Some(14));
        assert_eq!(alphabet.index_of('O'), Some(15));
        assert_eq!(alphabet.index_of('X'), Some(24));
        assert_eq!(alphabet.index_of('Z'), Some(26));
    }

    #[test]
    fn test_symbol_at_wraps() {
        let alphabet = alphabet_for(Language::English);
        assert_eq!(alphabet.symbol_at(26), 'A');
        assert_eq!(alphabet.symbol_at(-1), 'Z');
    }

    #[test]
    fn test_from_flag() {
        assert_eq!(Language::from_flag("es"), Language::Spanish);
        assert_eq!(Language::from_flag("en"), Language::English);
        assert_eq!(Language::from_flag("fr"), Language::English);
    }

    #[test]
    fn test_parse_language() {
        assert_eq!("es".parse::<Language>().unwrap(), Language::Spanish);
        assert_eq!("EN".parse::<Language>().unwrap(), Language::English);
        assert!(matches!("fr".parse::<Language>(), Err(CipherError::InvalidParameter(_))));
        for language in [Language::English, Language::Spanish] {
            assert_eq!(language.to_string().parse::<Language>().unwrap(), language);
        }
    }

    #[test]
    fn test_normalize_spanish_keeps_ene() {
        assert_eq!(normalize("Ñandú", Language::Spanish), "ÑANDU");
        assert_eq!(normalize("niño", Language::Spanish), "NIÑO");
    }

    #[test]
    fn test_normalize_english_folds_ene() {
        assert_eq!(normalize("Ñandú", Language::English), "NANDU");
        assert_eq!(normalize("niño", Language::English), "NINO");
    }

    #[test]
    fn test_normalize_strips_punctuation_and_accents() {
        let text = "Éste es un texto con signos de puntuación, acentos y espacios.";
        assert_eq!(
            normalize(text, Language::Spanish),
            "ESTEESUNTEXTOCONSIGNOSDEPUNTUACIONACENTOSYESPACIOS"
        );
    }

    #[test]
    fn test_normalize_drops_letters_outside_alphabet() {
        assert_eq!(normalize("Øre 42 ωmega", Language::English), "REMEGA");
    }

    #[test]
    fn test_normalize_idempotent() {
        let samples = ["Ñandú, pingüino & cigüeña!", "Hello, World", "ÀÉÎÕÜ ñ ß"];
        for language in [Language::English, Language::Spanish] {
            for text in samples {
                let once = normalize(text, language);
                assert_eq!(normalize(&once, language), once);
            }
        }
    }

    #[test]
    fn test_to_indices_skips_non_members() {
        let alphabet = alphabet_for(Language::English);
        assert_eq!(alphabet.to_indices("AB CZ"), vec![0, 1, 2, 25]);
        assert_eq!(alphabet.from_indices(&[7, 4, 11, 11, 14]), "HELLO");
    }
}
