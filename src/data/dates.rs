// ============================================================
// Date Matcher
// ============================================================
// Finds date intervals inside a single line of résumé text.
//
// One case-insensitive regex, alternatives in priority order:
//
//   (a) Month YYYY ... Month YYYY      "Jan 2015 - Mar. 2018"
//   (b) Month YYYY ... current|present "Sept 2019 - Present"
//   (c) YYYY ... YYYY                  "2012 – 2016"
//   (d) MM/YYYY ... MM/YYYY            "03/2014 - 11/16"
//   (e) MM/YYYY|YYYY ... present|current
//   (f) a lone 19xx / 20xx year        "2017"
//
// The regex engine reports leftmost-first matches, so results
// come back ordered by start offset. Spans are byte offsets and
// can be used to slice the input directly.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::sync::LazyLock;

/// Month spellings accepted in front of a year. The `.` after an
/// abbreviation is a wildcard, so "Jan-" and "Jan " count as well.
const MONTHS: &str = concat!(
    r"(?:Jan|Jan.|January|Feb|Feb.|February|Mar|Mar.|March|Apr|Apr.|April|",
    r"May|June|Jun|Jun.|Jul|Jul.|July|Aug|Aug.|August|Sept|Sept.|Sep|Sep.|September|",
    r"Oct|Oct.|October|Nov|Nov.|November|Dec|Dec.|December)",
);

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let month_interval = format!(r"{m}(?:.{{0,2}}|\s{{0,2}})\d{{4}}.{{0,5}}{m}(?:.{{0,2}}|\s{{0,2}})\d{{4}}", m = MONTHS);
    let month_to_now   = format!(r"{m}.{{0,2}}\d{{4}}.{{0,5}}(?:current|present)", m = MONTHS);
    let year_interval  = r"\d{4}.{0,5}\d{4}";
    let slash_interval = r"\d{2}/(?:\d{4}|\d{2}).{0,5}\d{2}/(?:\d{4}|\d{2})";
    let slash_to_now   = r"(?:\d{2}/\d{4}|\d{4}).{0,5}(?:present|current)";
    let single_year    = r"(?:19|20)\d{2}";

    let pattern = format!(
        "(?i)(?:{})|(?:{})|(?:{})|(?:{})|(?:{})|(?:{})",
        month_interval, month_to_now, year_interval, slash_interval, slash_to_now, single_year
    );
    Regex::new(&pattern).expect("date pattern is a valid regex")
});

/// One date interval found in a line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateMatch {
    /// Byte offsets `[start, end)` into the searched text
    pub span: Range<usize>,
    /// The matched text, equal to `&text[span]`
    pub text: String,
}

impl DateMatch {
    /// The same span counted in characters instead of bytes
    pub fn char_span(&self, haystack: &str) -> Range<usize> {
        let start = haystack[..self.span.start].chars().count();
        let len   = self.text.chars().count();
        start..start + len
    }
}

/// All date intervals in `text`, ordered by start offset.
pub fn find_date(text: &str) -> Vec<DateMatch> {
    DATE_RE
        .find_iter(text)
        .map(|m| DateMatch {
            span: m.range(),
            text: m.as_str().to_string(),
        })
        .collect()
}

/// The first date interval in `text`, the only one the cleaner consumes.
pub fn first_date(text: &str) -> Option<DateMatch> {
    DATE_RE.find(text).map(|m| DateMatch {
        span: m.range(),
        text: m.as_str().to_string(),
    })
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn first_text(s: &str) -> Option<String> {
        first_date(s).map(|m| m.text)
    }

    #[test]
    fn test_month_year_interval() {
        assert_eq!(
            first_text("Acme Corp January 2015 - March 2018 Boston").as_deref(),
            Some("January 2015 - March 2018")
        );
        assert_eq!(
            first_text("Jan. 2015 – Feb. 2016").as_deref(),
            Some("Jan. 2015 – Feb. 2016")
        );
    }

    #[test]
    fn test_month_wildcard_reaches_spaced_intervals() {
        assert_eq!(
            first_text("Acme Jan - 2015 to Mar - 2016").as_deref(),
            Some("Jan - 2015 to Mar - 2016")
        );
        assert_eq!(
            first_text("Sept- 2019 - present").as_deref(),
            Some("Sept- 2019 - present")
        );
    }

    #[test]
    fn test_month_year_to_present_is_case_insensitive() {
        assert_eq!(
            first_text("Engineer (SEPT 2019 - PRESENT)").as_deref(),
            Some("SEPT 2019 - PRESENT")
        );
        assert_eq!(first_text("june 2020 to current").as_deref(), Some("june 2020 to current"));
    }

    #[test]
    fn test_bare_year_interval() {
        assert_eq!(first_text("Analyst 2012 - 2016").as_deref(), Some("2012 - 2016"));
    }

    #[test]
    fn test_slash_intervals() {
        assert_eq!(first_text("03/2014 - 11/2016").as_deref(), Some("03/2014 - 11/2016"));
        assert_eq!(first_text("from 03/14 - 11/16").as_deref(), Some("03/14 - 11/16"));
        assert_eq!(first_text("04/2018 - present").as_deref(), Some("04/2018 - present"));
    }

    #[test]
    fn test_single_year() {
        assert_eq!(first_text("Graduated 1998").as_deref(), Some("1998"));
        // Not a 19xx/20xx year and no interval around it
        assert!(first_date("Room 1234").is_none());
    }

    #[test]
    fn test_no_date() {
        assert!(find_date("Senior Software Engineer").is_empty());
        assert!(find_date("").is_empty());
    }

    #[test]
    fn test_matches_are_ordered_and_valid_slices() {
        let text = "Intern 2009, Analyst 2012 - 2016 and again in 2019";
        let matches = find_date(text);
        assert_eq!(matches.len(), 3);

        let mut last_start = 0;
        for m in &matches {
            assert!(m.span.start <= m.span.end && m.span.end <= text.len());
            assert!(m.span.start >= last_start);
            assert_eq!(&text[m.span.clone()], m.text);
            assert!(DATE_RE.is_match(&m.text));
            last_start = m.span.start;
        }
        assert_eq!(matches[0].text, "2009");
        assert_eq!(matches[1].text, "2012 - 2016");
    }

    #[test]
    fn test_char_span_counts_characters() {
        let text = "Café Été 2012 – 2016";
        let m = first_date(text).unwrap();
        assert_eq!(m.text, "2012 – 2016");
        let chars = m.char_span(text);
        assert_eq!(chars, 9..20);
        assert_ne!(chars, m.span);
    }
}
