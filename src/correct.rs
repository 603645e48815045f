//! Spell-correction capability consumed by the word finalizer. Defined as a
//! seam so any locale-aware suggestion engine can be substituted.

/// `None` means "keep the word as typed". Implementations must swallow their
/// own failures; anything that goes wrong is a `None`, never a panic into the
/// core.
pub trait SpellCorrector {
    fn correct(&self, word: &str, locale: &str) -> Option<String>;
}

/// Never corrects anything.
#[derive(Debug, Default, Clone)]
pub struct NullCorrector;

impl SpellCorrector for NullCorrector {
    fn correct(&self, _word: &str, _locale: &str) -> Option<String> {
        None
    }
}

/// Case-insensitive match against a fixed word list, returning the canonical
/// casing. Enough to exercise the seam; real engines plug in via the trait.
#[derive(Debug, Default, Clone)]
pub struct WordListCorrector {
    words: Vec<String>,
}

impl WordListCorrector {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

impl SpellCorrector for WordListCorrector {
    fn correct(&self, word: &str, _locale: &str) -> Option<String> {
        let lower = word.to_lowercase();
        self.words
            .iter()
            .find(|w| w.to_lowercase() == lower && w.as_str() != word)
            .cloned()
    }
}
