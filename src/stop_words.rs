use std::{collections::BTreeSet, io::{self, BufRead}};

use log::debug;

/// Words excluded from tag counting.
///
/// Entries are stored trimmed and lowercased. A `BTreeSet` keeps them sorted,
/// so debug output and iteration order are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWordSet {
    words: BTreeSet<String>,
}

impl StopWordSet {
    pub fn new() -> Self {
        Self { words: BTreeSet::new() }
    }

    /// Reads one stop word per line. Blank lines are skipped.
    pub fn from_reader(reader: impl BufRead) -> io::Result<Self> {
        let mut set = Self::new();
        set.reload(reader)?;
        Ok(set)
    }

    /// Replaces the whole set with the words read from `reader`.
    ///
    /// Nothing from the previous contents survives, even if reading fails midway.
    pub fn reload(&mut self, reader: impl BufRead) -> io::Result<()> {
        self.words.clear();
        for line in reader.lines() {
            let word = line?.trim().to_lowercase();
            if !word.is_empty() {
                self.words.insert(word);
            }
        }
        debug!("stop word set reloaded with {} entries", self.words.len());
        Ok(())
    }

    /// Exact match; `word` is expected to be normalized already.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|s| s.as_str())
    }
}

impl<S: AsRef<str>> FromIterator<S> for StopWordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let words = iter.into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }
}

#[cfg(test)]
mod tests {
    use std::io::BufReader;

    use stringreader::StringReader;

    use super::*;

    #[test]
    fn test_from_reader() {
        struct FromReaderTestCase<'a> {
            content: &'a str,
            words: Vec<&'a str>,
        }

        let test_cases = vec![
            FromReaderTestCase {
                content: "the\nA\n  On  \n",
                words: vec!["a", "on", "the"],
            },
            FromReaderTestCase {
                content: "\n   \n\t\nand\n\n",
                words: vec!["and"],
            },
            FromReaderTestCase {
                content: "The\nTHE\nthe\r\n",
                words: vec!["the"],
            },
            FromReaderTestCase {
                content: "",
                words: vec![],
            },
        ];

        for case in test_cases {
            let set = StopWordSet::from_reader(BufReader::new(StringReader::new(case.content)));
            assert!(set.is_ok(), "Result is not OK; case: {:?}", case.content);
            let set = set.unwrap();
            let words: Vec<&str> = set.iter().collect();
            assert_eq!(words, case.words, "case {:?}", case.content);
            assert_eq!(set.len(), case.words.len());
        }
    }

    #[test]
    fn test_contains_is_exact() {
        let set: StopWordSet = vec!["Of", "the"].into_iter().collect();

        assert!(set.contains("of"));
        assert!(set.contains("the"));
        assert!(!set.contains("The"));
        assert!(!set.contains("them"));
    }

    #[test]
    fn test_reload_replaces_previous_words() {
        let mut set = StopWordSet::from_reader(
            BufReader::new(StringReader::new("alpha\nbeta\n"))).unwrap();
        assert_eq!(set.len(), 2);

        set.reload(BufReader::new(StringReader::new("gamma\n"))).unwrap();

        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["gamma"]);
        assert!(!set.contains("alpha"));
        assert!(!set.contains("beta"));
    }

    #[test]
    fn test_reload_with_empty_source_clears() {
        let mut set: StopWordSet = vec!["a", "b"].into_iter().collect();
        set.reload(BufReader::new(StringReader::new(""))).unwrap();
        assert!(set.is_empty());
    }
}
