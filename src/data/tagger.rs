// ============================================================
// Capitalization Tagger
// ============================================================
// The default PosTagger. The cleaner only asks the tagger one
// question: which tokens of the first text line look like a
// name? A capitalised, purely alphabetic word is tagged as a
// proper noun; everything else is `Other`. Surrounding
// punctuation is dropped, except the period of an initial.
//
//   "John A. Smith, PhD"  →  John/PROPN A./PROPN Smith/PROPN PhD/PROPN
//   "resume 2021"         →  resume/OTHER 2021/OTHER
//
// Callers with a statistical tagger plug it in through the
// PosTagger trait instead.

use crate::domain::traits::{PosTag, PosTagger, TaggedToken};

#[derive(Debug, Clone, Copy, Default)]
pub struct CapitalizationTagger;

impl CapitalizationTagger {
    pub fn new() -> Self {
        Self
    }

    fn classify(word: &str) -> PosTag {
        let letters = word.strip_suffix('.').unwrap_or(word);
        match letters.chars().next() {
            Some(first) if first.is_uppercase() && letters.chars().all(char::is_alphabetic) => {
                PosTag::ProperNoun
            }
            _ => PosTag::Other,
        }
    }

    /// Strip punctuation around `raw`, keeping the period of a
    /// single-letter initial ("A." stays "A.").
    fn word_of(raw: &str) -> &str {
        let not_alnum = |c: char| !c.is_alphanumeric();
        let lead = raw.trim_start_matches(not_alnum);
        let word = lead.trim_end_matches(not_alnum);

        let mut chars = word.chars();
        let is_letter = matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic());
        if is_letter && lead[word.len()..].starts_with('.') {
            &lead[..word.len() + 1]
        } else {
            word
        }
    }
}

impl PosTagger for CapitalizationTagger {
    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        text.split_whitespace()
            .map(Self::word_of)
            .filter(|word| !word.is_empty())
            .map(|word| TaggedToken::new(word, Self::classify(word)))
            .collect()
    }
}
