use crate::config::Settings;
use crate::correct::SpellCorrector;
use crate::grid::Symbol;
use tracing::{debug, info};

/// Session-scoped text state: the word being formed and the sentence
/// assembled so far. Outlives individual gestures; only the dispatcher and
/// the finalizer mutate it, both synchronously from the sample/end handlers.
#[derive(Debug, Default)]
pub struct Session {
    formed: String,
    sentence: String,
}

impl Session {
    pub fn formed_word(&self) -> &str {
        &self.formed
    }

    pub fn sentence(&self) -> &str {
        &self.sentence
    }

    /// Routes one selected symbol. `Space` finalizes the formed word; `Blank`
    /// is suppressed entirely; content is echoed live into the sentence.
    /// Returns the committed word when a finalize happened.
    pub fn dispatch(
        &mut self,
        symbol: &Symbol,
        corrector: &dyn SpellCorrector,
        settings: &Settings,
    ) -> Option<String> {
        match symbol {
            Symbol::Space => self.finalize(corrector, settings),
            Symbol::Blank => None,
            Symbol::Text(s) => {
                debug!(symbol = %s, "symbol selected");
                self.formed.push_str(s);
                self.sentence.push_str(s);
                None
            }
        }
    }

    /// Commits the formed word: strips its live echo from the sentence,
    /// applies the corrector (when enabled), and re-appends the committed
    /// form plus one delimiter. An empty trimmed word commits nothing, which
    /// is what makes a second gesture-end a no-op.
    pub fn finalize(
        &mut self,
        corrector: &dyn SpellCorrector,
        settings: &Settings,
    ) -> Option<String> {
        let echoed_len = self.formed.len();
        let word = self.formed.trim().to_string();
        self.formed.clear();
        self.sentence.truncate(self.sentence.len() - echoed_len);

        if word.is_empty() {
            return None;
        }

        let committed = if settings.autocorrect_enabled {
            corrector.correct(&word, &settings.locale).unwrap_or(word)
        } else {
            word
        };
        self.sentence.push_str(&committed);
        self.sentence.push_str(settings.delimiter());
        info!(word = %committed, "word finalized");
        Some(committed)
    }

    pub fn clear_sentence(&mut self) {
        self.sentence.clear();
        self.formed.clear();
    }

    /// Drops the last formed character from the word and its sentence echo.
    /// No-op once the word has been committed.
    pub fn delete_last_char(&mut self) {
        if let Some(c) = self.formed.pop() {
            self.sentence.truncate(self.sentence.len() - c.len_utf8());
        }
    }
}
