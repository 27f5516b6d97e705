use unicode_segmentation::UnicodeSegmentation;

/// Every ASCII punctuation character.
pub const PUNCTUATION: &str = r###"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"###;

/// Whether the char is ASCII punctuation.
pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(c)
}

/// Remove all punctuation outright, without leaving a gap.
pub fn strip_punctuation(txt: &str) -> String {
    txt.chars().filter(|c| !is_punctuation(*c)).collect()
}

/// Split the text into word tokens in order of appearance.
///
/// Punctuation is removed first, so `"don't"` becomes the single token
/// `"dont"`. The remaining text is split on unicode word boundaries.
pub fn tokenize(txt: &str) -> Vec<String> {
    strip_punctuation(txt)
        .unicode_words()
        .map(str::to_string)
        .collect()
}
