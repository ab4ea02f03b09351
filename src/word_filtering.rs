use std::io::{self, BufRead};

/// Lazily yields normalized words from `reader`, one line at a time.
///
/// A read failure (including invalid UTF8) is yielded as an `Err` item
/// at the point where it happened.
pub fn reader_to_words(reader: impl BufRead) -> impl Iterator<Item = io::Result<String>> {
    reader.lines()
        .flat_map(|line| -> Box<dyn Iterator<Item = io::Result<String>>> {
            match line {
                Ok(line) => Box::new(scan_for_words(&line).into_iter().map(Ok)),
                Err(err) => Box::new(std::iter::once(Err(err))),
            }
        })
}

/// Splits a single line into normalized words.
///
/// Every character that is not an ASCII letter or an apostrophe acts as a separator.
/// Letters are lowercased, and apostrophes are stripped from both ends of each word,
/// so `'Tis` becomes `tis` while `don't` is kept as is.
/// Words made only of apostrophes vanish.
pub fn scan_for_words(line: &str) -> Vec<String> {
    normalize_line(line)
        .split_whitespace()
        .map(strip_apostrophes)
        .filter(|w| !w.is_empty())
        .map(|w| w.to_owned())
        .collect()
}

/// Replaces every non-word character with a single space and lowercases the rest.
fn normalize_line(line: &str) -> String {
    line.chars()
        .map(|c| match is_word_char(c) {
            true => c.to_ascii_lowercase(),
            false => ' ',
        })
        .collect()
}

fn strip_apostrophes(word: &str) -> &str {
    word.trim_matches('\'')
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '\''
}
