// ============================================================
// Line Cleaner
// ============================================================
// Turns the raw text of one résumé into the ordered list of
// Bags the classifiers consume.
//
// Steps (applied in order):
//   1. Strip noise: e-mail addresses, phone numbers, and the
//      name-like tokens the PosTagger finds on the first line.
//      Every occurrence anywhere in the text is removed.
//   2. Split on line breaks and drop lines that became empty.
//   3. Split each line again on runs of 5+ whitespace
//      characters (column layouts from PDF extraction).
//   4. Keep pieces that contain at least one ASCII letter/digit.
//   5. Skip the first `skip_leading_lines` pieces (name/contact
//      boilerplate, 2 by default).
//   6. Glue a piece that starts with a lower-case letter onto
//      the previous piece, as a wrapped continuation.
//   7. Cut the first date interval out of each line and emit it
//      as a separate DateTag right after the remainder.
//
// Example:
//   "Acme Corp (2015 - 2018)"  →  Line("Acme Corp "), DateTag("2015 - 2018")

use regex::Regex;
use std::sync::LazyLock;

use crate::data::dates::first_date;
use crate::domain::bag::Bag;
use crate::domain::traits::PosTagger;

/// E-mail addresses and dotted/dashed US phone numbers
static CONTACT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\w.-]+@[\w.-]+|\d{3}[.-]\d{3}[.-]\d{4}").expect("contact pattern is a valid regex")
});

/// Wide gaps separating columns on the same visual line
static COLUMN_GAP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{5,}").expect("column gap pattern is a valid regex"));

pub const DEFAULT_SKIP_LEADING_LINES: usize = 2;

pub struct LineCleaner<'a> {
    tagger:             &'a dyn PosTagger,
    skip_leading_lines: usize,
}

impl<'a> LineCleaner<'a> {
    pub fn new(tagger: &'a dyn PosTagger) -> Self {
        Self {
            tagger,
            skip_leading_lines: DEFAULT_SKIP_LEADING_LINES,
        }
    }

    /// Override how many leading lines are treated as boilerplate
    pub fn with_skip_leading_lines(mut self, skip: usize) -> Self {
        self.skip_leading_lines = skip;
        self
    }

    /// Substrings to strip from the text: contact details found
    /// anywhere, then nouns and proper nouns of the first line.
    pub fn noise_tokens(&self, text: &str) -> Vec<String> {
        let mut tokens: Vec<String> = CONTACT_RE
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect();

        let first_line = text.split('\n').next().unwrap_or_default();
        tokens.extend(
            self.tagger
                .tag(first_line)
                .into_iter()
                .filter(|token| token.is_noun())
                .map(|token| token.text),
        );

        tokens
    }

    /// Remove every occurrence of every noise token.
    /// Single characters are never removed, they would erase that
    /// letter from the whole résumé.
    pub fn remove_noise(&self, text: &str) -> String {
        let mut cleaned = text.to_string();
        for token in self.noise_tokens(text) {
            if token.chars().nth(1).is_none() {
                continue;
            }
            cleaned = cleaned.replace(&token, "");
        }
        cleaned
    }

    /// Steps 1–3: noise removal, line split, column split.
    pub fn extract_lines(&self, text: &str) -> Vec<String> {
        let denoised = self.remove_noise(text);

        denoised
            .split('\n')
            .filter(|line| !line.is_empty())
            .flat_map(|line| COLUMN_GAP_RE.split(line))
            .filter(|piece| !piece.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// The full cleaning pass, producing date-tagged Bags in document order.
    pub fn clean_resume(&self, text: &str) -> Vec<Bag> {
        let lines: Vec<String> = self
            .extract_lines(text)
            .into_iter()
            .filter(|line| line.chars().any(|c| c.is_ascii_alphanumeric()))
            .skip(self.skip_leading_lines)
            .collect();

        let merged = merge_continuations(lines);
        tracing::debug!("Cleaned résumé into {} lines", merged.len());

        tag_dates(merged.into_iter().map(Bag::Line))
    }
}

/// Append lines starting with a lower-case letter to the line before.
/// A continuation with nothing before it is dropped.
pub fn merge_continuations(lines: Vec<String>) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(lines.len());

    for line in lines {
        let continues = line.chars().next().is_some_and(char::is_lowercase);
        match merged.last_mut() {
            Some(previous) if continues => previous.push_str(&line),
            _ if continues => {
                tracing::debug!("Dropping leading continuation line '{}'", line);
            }
            _ => merged.push(line),
        }
    }

    merged
}

/// Split the first date interval out of every plain line.
///
/// The remainder (with `()` / `( )` left behind by the cut removed)
/// is kept when non-empty and is followed by the DateTag. Existing
/// DateTags pass through untouched, so they are never tagged twice.
pub fn tag_dates(bags: impl IntoIterator<Item = Bag>) -> Vec<Bag> {
    let mut tagged = Vec::new();

    for bag in bags {
        let line = match bag {
            Bag::Line(line) => line,
            date @ Bag::DateTag(_) => {
                tagged.push(date);
                continue;
            }
        };

        match first_date(&line) {
            Some(date) => {
                let remainder = format!("{}{}", &line[..date.span.start], &line[date.span.end..])
                    .replace("()", "")
                    .replace("( )", "");
                if !remainder.is_empty() {
                    tagged.push(Bag::Line(remainder));
                }
                tagged.push(Bag::DateTag(date.text));
            }
            None if line.is_empty() => {}
            None => tagged.push(Bag::Line(line)),
        }
    }

    tagged
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::tagger::CapitalizationTagger;

    const RESUME: &str = "Jane Doe\n\
                          jane.doe@example.com     555-123-4567\n\
                          12 Main Street, Springfield\n\
                          Objective: build things\n\
                          EXPERIENCE\n\
                          Acme Corp     (2015 - 2018)\n\
                          Software Engineer\n\
                          Built the billing\n\
                          pipeline end to end\n\
                          EDUCATION\n\
                          State University 2011\n";

    fn cleaner(tagger: &CapitalizationTagger) -> LineCleaner<'_> {
        LineCleaner::new(tagger)
    }

    #[test]
    fn test_noise_tokens_include_contacts_and_first_line_names() {
        let tagger = CapitalizationTagger::new();
        let tokens = cleaner(&tagger).noise_tokens(RESUME);
        assert!(tokens.contains(&"jane.doe@example.com".to_string()));
        assert!(tokens.contains(&"555-123-4567".to_string()));
        assert!(tokens.contains(&"Jane".to_string()));
        assert!(tokens.contains(&"Doe".to_string()));
        assert!(!tokens.contains(&"EXPERIENCE".to_string()));
    }

    #[test]
    fn test_middle_initial_only_removes_the_initial() {
        let tagger = CapitalizationTagger::new();
        let bags = cleaner(&tagger).clean_resume(
            "John A. Smith\nline two\nline three\nEXPERIENCE\nAcme Analytics\nData Analyst",
        );
        assert_eq!(
            bags,
            vec![Bag::line("EXPERIENCE"), Bag::line("Acme Analytics"), Bag::line("Data Analyst")]
        );
    }

    #[test]
    fn test_single_letter_names_are_kept() {
        let tagger = CapitalizationTagger::new();
        let text = "John A Smith\nAcme Analytics";
        assert!(cleaner(&tagger).noise_tokens(text).contains(&"A".to_string()));
        assert_eq!(cleaner(&tagger).remove_noise(text), " A \nAcme Analytics");
    }

    #[test]
    fn test_extract_lines_splits_columns_and_drops_empty_lines() {
        let tagger = CapitalizationTagger::new();
        let lines = cleaner(&tagger).extract_lines("Title\n\nLeft side       Right side\n");
        assert_eq!(lines, vec!["Left side", "Right side"]);
    }

    #[test]
    fn test_clean_resume_skips_boilerplate_merges_and_tags_dates() {
        let tagger = CapitalizationTagger::new();
        let bags = cleaner(&tagger).clean_resume(RESUME);
        assert_eq!(
            bags,
            vec![
                Bag::line("EXPERIENCE"),
                Bag::line("Acme Corp"),
                Bag::date("2015 - 2018"),
                Bag::line("Software Engineer"),
                Bag::line("Built the billingpipeline end to end"),
                Bag::line("EDUCATION"),
                Bag::line("State University "),
                Bag::date("2011"),
            ]
        );
    }

    #[test]
    fn test_skip_count_is_configurable() {
        let tagger = CapitalizationTagger::new();
        let text   = "1 alpha\n2 beta\n3 gamma";
        let all    = LineCleaner::new(&tagger).with_skip_leading_lines(0).clean_resume(text);
        assert_eq!(all.len(), 3);
        let default = LineCleaner::new(&tagger).clean_resume(text);
        assert_eq!(default, vec![Bag::line("3 gamma")]);
    }

    #[test]
    fn test_leading_continuation_is_dropped() {
        let merged = merge_continuations(vec!["continued".into(), "Start".into(), "more".into()]);
        assert_eq!(merged, vec!["Startmore"]);
    }

    #[test]
    fn test_empty_remainder_emits_only_the_tag() {
        let bags = tag_dates(vec![Bag::line("(2019 - 2021)")]);
        assert_eq!(bags, vec![Bag::date("2019 - 2021")]);
    }

    #[test]
    fn test_only_first_date_is_cut() {
        let bags = tag_dates(vec![Bag::line("Intern 2009 then 2012")]);
        assert_eq!(bags, vec![Bag::line("Intern  then 2012"), Bag::date("2009")]);
    }

    #[test]
    fn test_date_tags_are_never_retagged() {
        let once  = tag_dates(vec![Bag::line("Analyst 2012 - 2016")]);
        let twice = tag_dates(once.clone());
        assert_eq!(once, twice);
        assert_eq!(once[1], Bag::date("2012 - 2016"));
    }
}
