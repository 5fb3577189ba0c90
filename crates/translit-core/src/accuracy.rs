//! Accuracy corpus: literal input → expected output cases kept in TOML.
//!
//! ```toml
//! [[cases]]
//! input = "कमल"
//! expected = "kamal"
//! category = "schwa"
//!
//! [[cases]]
//! input = "सोऽहम्"
//! expected = "so'ham"
//! skip = true
//! note = "avagraha rendering undecided"
//! ```
//!
//! Inputs and outputs are compared after [`normalize_text`], so fixtures may
//! carry incidental indentation and trailing whitespace.

use serde::{Deserialize, Serialize};

use crate::Transliterator;

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("corpus has no cases")]
    Empty,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccuracyCorpus {
    pub cases: Vec<AccuracyCase>,
}

impl AccuracyCorpus {
    pub fn parse(toml_str: &str) -> Result<Self, CorpusError> {
        let corpus: AccuracyCorpus =
            toml::from_str(toml_str).map_err(|e| CorpusError::Parse(e.to_string()))?;
        if corpus.cases.is_empty() {
            return Err(CorpusError::Empty);
        }
        Ok(corpus)
    }

    /// Cases in `category`, or all of them when `category` is `None`.
    pub fn filter<'a>(&'a self, category: Option<&'a str>) -> impl Iterator<Item = &'a AccuracyCase> {
        self.cases
            .iter()
            .filter(move |c| category.map_or(true, |cat| c.category == cat))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccuracyCase {
    pub input: String,
    pub expected: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub skip: bool,
    #[serde(default)]
    pub note: Option<String>,
}

fn default_category() -> String {
    "general".to_string()
}

#[derive(Debug, Clone, Serialize)]
pub struct AccuracyResult {
    pub input: String,
    pub expected: String,
    pub actual: String,
    pub status: AccuracyStatus,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccuracyStatus {
    Pass,
    Fail,
    Skip,
}

#[derive(Debug, Clone, Serialize)]
pub struct AccuracySummary {
    pub total: usize,
    pub pass: usize,
    pub fail: usize,
    pub skip: usize,
    pub pass_rate: String,
}

impl AccuracySummary {
    /// Cases actually run.
    pub fn tested(&self) -> usize {
        self.total - self.skip
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AccuracyReport {
    pub results: Vec<AccuracyResult>,
    pub summary: AccuracySummary,
}

/// Trim every line and drop leading/trailing blank lines. Interior blank
/// lines and intra-line whitespace are kept.
pub fn normalize_text(text: &str) -> String {
    text.trim()
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Run every case through `transliterator`.
pub fn evaluate<'a, I>(transliterator: &Transliterator, cases: I) -> AccuracyReport
where
    I: IntoIterator<Item = &'a AccuracyCase>,
{
    let results: Vec<AccuracyResult> = cases
        .into_iter()
        .map(|case| {
            let (actual, status) = if case.skip {
                (String::new(), AccuracyStatus::Skip)
            } else {
                let actual =
                    normalize_text(&transliterator.transliterate(&normalize_text(&case.input)));
                let status = if actual == normalize_text(&case.expected) {
                    AccuracyStatus::Pass
                } else {
                    AccuracyStatus::Fail
                };
                (actual, status)
            };
            AccuracyResult {
                input: case.input.clone(),
                expected: case.expected.clone(),
                actual,
                status,
                category: case.category.clone(),
                note: case.note.clone(),
            }
        })
        .collect();

    let count = |status: AccuracyStatus| results.iter().filter(|r| r.status == status).count();
    let (pass, fail, skip) = (
        count(AccuracyStatus::Pass),
        count(AccuracyStatus::Fail),
        count(AccuracyStatus::Skip),
    );
    let total = results.len();
    let tested = total - skip;
    let rate = if tested > 0 {
        pass as f64 / tested as f64 * 100.0
    } else {
        0.0
    };
    let summary = AccuracySummary {
        total,
        pass,
        fail,
        skip,
        pass_rate: format!("{:.1}%", rate),
    };
    AccuracyReport { results, summary }
}
