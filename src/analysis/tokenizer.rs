/// Splits text on runs of the ASCII space byte.
///
/// Tokens are maximal non-space substrings in left-to-right order. No
/// validation happens here; see [`is_valid_word`].
pub fn split_into_words(text: &str) -> Vec<&str> {
    text.split(' ').filter(|word| !word.is_empty()).collect()
}

/// A valid word contains no control bytes in `[0x00, 0x1F]`.
pub fn is_valid_word(word: &str) -> bool {
    word.bytes().all(|b| b >= 0x20)
}
