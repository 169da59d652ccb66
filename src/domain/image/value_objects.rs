use super::entity::LabelAnnotation;
use lazy_static::lazy_static;
use regex::Regex;
use std::cmp::Ordering;

lazy_static! {
    // \w is Unicode-aware here, so letters of any script survive; the explicit
    // Turkish set mirrors the historical contract for locales where it matters.
    static ref DISALLOWED: Regex = Regex::new(r"[^\w\s\-çğıöşü]").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref HYPHEN_RUNS: Regex = Regex::new(r"-{2,}").unwrap();
}

const FALLBACK_MARKER: &str = "Optimized image for";

/// Human-readable alt text summarizing an image.
///
/// Derived from label annotations when any are usable, otherwise a fallback
/// phrase referencing the original file name. Derivation is total: there is no
/// failure mode.
#[derive(Debug, Clone, PartialEq)]
pub struct AltText {
    pub value: String,
}

impl AltText {
    /// Summarize the top-ranked labels into a short descriptive phrase.
    ///
    /// Labels are stable-sorted by descending score (ties keep their original
    /// relative order), the top three non-empty descriptions are joined with
    /// `", "` and suffixed with `" image"`. When nothing usable remains the
    /// canonical fallback phrase wins.
    pub fn from_labels(labels: Vec<LabelAnnotation>, fallback_name: &str) -> Self {
        let mut ranked = labels;
        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        let descriptions: Vec<String> = ranked
            .into_iter()
            .take(3)
            .map(|label| label.description)
            .filter(|description| !description.is_empty())
            .collect();

        if descriptions.is_empty() {
            return Self::fallback(fallback_name);
        }

        let value = format!("{} image", descriptions.join(", "));

        // The fallback phrasing is authoritative: a label set that smuggles the
        // marker text in is treated as unusable.
        if value.contains(FALLBACK_MARKER) {
            return Self::fallback(fallback_name);
        }

        Self { value }
    }

    pub fn fallback(fallback_name: &str) -> Self {
        Self {
            value: format!("{} {}", FALLBACK_MARKER, fallback_name),
        }
    }
}

/// Filesystem-safe download name derived from alt text, always `.webp`-suffixed.
#[derive(Debug, Clone, PartialEq)]
pub struct WebpFileName {
    pub value: String,
}

impl WebpFileName {
    const EXTENSION: &'static str = ".webp";

    /// Sanitize alt text into a hyphenated, lowercase file name.
    ///
    /// Re-applying to its own output yields the same name.
    pub fn from_alt_text(alt_text: &str) -> Self {
        let lowered = alt_text.to_lowercase();
        let stem = lowered.strip_suffix(Self::EXTENSION).unwrap_or(&lowered);

        let cleaned = DISALLOWED.replace_all(stem, "");
        let hyphenated = WHITESPACE.replace_all(&cleaned, "-");
        let collapsed = HYPHEN_RUNS.replace_all(&hyphenated, "-");
        let trimmed = collapsed.trim_matches(|c: char| c.is_whitespace() || c == '-');

        Self {
            value: format!("{}{}", trimmed, Self::EXTENSION),
        }
    }
}
