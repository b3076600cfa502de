//! Letter frequency analysis

use crate::alphabet::{normalize, Language};

/// Absolute and relative frequency of one letter
#[derive(Debug, Clone, PartialEq)]
pub struct LetterFrequency {
    pub letter: char,
    pub count: usize,
    pub relative: f64,
}

/// Counts the letters of the normalized text.
///
/// Sorted by descending count; letters with the same count keep the order
/// in which they first appear in the text.
pub fn letter_frequencies(text: &str, language: Language) -> Vec<LetterFrequency> {
    let normalized = normalize(text, language);
    let mut counts: Vec<(char, usize)> = Vec::new();

    for c in normalized.chars() {
        match counts.iter_mut().find(|(letter, _)| *letter == c) {
            Some((_, count)) => *count += 1,
            None => counts.push((c, 1)),
        }
    }

    // stable sort keeps first-appearance order on ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let total = normalized.chars().count();
    counts
        .into_iter()
        .map(|(letter, count)| LetterFrequency {
            letter,
            count,
            relative: count as f64 / total as f64,
        })
        .collect()
}

/// Formats [`letter_frequencies`] as a text table.
pub fn frequency_table(text: &str, language: Language) -> String {
    let mut table = String::from("Letter | Frequency | Relative Frequency\n");
    table.push_str(&"-".repeat(40));
    table.push('\n');

    for entry in letter_frequencies(text, language) {
        table.push_str(&format!(
            "{:^5} | {:^10} | {:^18.4}\n",
            entry.letter, entry.count, entry.relative
        ));
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_order() {
        let frequencies = letter_frequencies("Banana bread", Language::English);
        let letters: Vec<(char, usize)> = frequencies.iter().map(|f| (f.letter, f.count)).collect();
        assert_eq!(
            letters,
            vec![('A', 4), ('B', 2), ('N', 2), ('R', 1), ('E', 1), ('D', 1)]
        );
    }

    #[test]
    fn test_relative_sums_to_one() {
        let frequencies = letter_frequencies("Frequency analysis works", Language::English);
        let sum: f64 = frequencies.iter().map(|f| f.relative).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_spanish_counts_ene() {
        let spanish = letter_frequencies("ñandú", Language::Spanish);
        assert!(spanish.iter().any(|f| f.letter == 'Ñ'));

        let english = letter_frequencies("ñandú", Language::English);
        assert_eq!(english[0].letter, 'N');
        assert_eq!(english[0].count, 2);
    }

    #[test]
    fn test_empty_text() {
        assert!(letter_frequencies("123 ...", Language::English).is_empty());
    }

    #[test]
    fn test_table_format() {
        let table = frequency_table("aab", Language::English);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "Letter | Frequency | Relative Frequency");
        assert_eq!(lines[1], "-".repeat(40));
        assert_eq!(lines[2], "  A   |     2      |       0.6667      ");
        assert_eq!(lines[3], "  B   |     1      |       0.3333      ");
    }
}
