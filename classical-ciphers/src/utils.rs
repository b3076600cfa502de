//! Utility functions for text formatting and padding

/// Width of the space-separated groups in blocked cipher output
pub const BLOCK_WIDTH: usize = 10;

/// Join symbols into space-separated chunks of `width` characters.
///
/// The last chunk may be shorter. A width of 0 returns the symbols unchanged.
pub fn block_format(symbols: &str, width: usize) -> String {
    if width == 0 {
        return symbols.to_string();
    }

    let chars: Vec<char> = symbols.chars().collect();
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<String>>()
        .join(" ")
}

/// Right-pad an index sequence with `pad` until its length is a multiple of `block_size`
pub fn pad_to_multiple(data: &[i64], block_size: usize, pad: i64) -> Vec<i64> {
    let mut padded = data.to_vec();
    let remainder = data.len() % block_size;

    if remainder != 0 {
        let padding_needed = block_size - remainder;
        padded.extend(std::iter::repeat(pad).take(padding_needed));
    }

    padded
}

/// First `count` characters of `text` (characters, not bytes)
pub fn take_chars(text: &str, count: usize) -> String {
    text.chars().take(count).collect()
}
