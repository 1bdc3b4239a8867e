//! Word source
//!
//! The host hands over a newline-delimited text blob; only words within the
//! configured length band are kept.

use rand::Rng;

use crate::error::GameError;

/// Candidate words after length filtering
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Split `text` on newlines, trim each line, keep `min..=max` character words
    pub fn parse(text: &str, min: usize, max: usize) -> Self {
        Self::from_words(text.lines(), min, max)
    }

    pub fn from_words<I, S>(words: I, min: usize, max: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| (min..=max).contains(&w.chars().count()))
            .collect();
        Self { words }
    }

    /// Check that a round can start with this list
    pub fn require_non_empty(&self, min: usize, max: usize) -> Result<(), GameError> {
        if self.words.is_empty() {
            return Err(GameError::EmptyWordSource { min, max });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    /// Uniformly pick a word, `None` when empty
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        if self.words.is_empty() {
            return None;
        }
        let idx = rng.random_range(0..self.words.len());
        Some(self.words[idx].as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_parse_filters_by_length() {
        let list = WordList::parse("a\nat\ncat\nlantern\nextraordinary\nhorizon\n", 3, 10);
        assert_eq!(list.as_slice(), ["cat", "lantern", "horizon"]);
    }

    #[test]
    fn test_parse_trims_carriage_returns() {
        let list = WordList::parse("cat\r\ndog\r\n  \r\n", 3, 10);
        assert_eq!(list.as_slice(), ["cat", "dog"]);
    }

    #[test]
    fn test_empty_list_refuses_start() {
        let list = WordList::parse("x\nyy\n", 3, 10);
        assert!(list.is_empty());
        let err = list.require_non_empty(3, 10).unwrap_err();
        assert!(matches!(err, GameError::EmptyWordSource { min: 3, max: 10 }));
    }

    #[test]
    fn test_choose_stays_in_list() {
        let list = WordList::from_words(["cat", "dog", "fish"], 3, 10);
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..50 {
            let word = list.choose(&mut rng).unwrap();
            assert!(list.as_slice().iter().any(|w| w == word));
        }
        assert!(WordList::default().choose(&mut rng).is_none());
    }
}
