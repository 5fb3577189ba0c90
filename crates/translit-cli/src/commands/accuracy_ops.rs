use std::collections::BTreeMap;
use std::fs;
use std::process;

use hindi_translit::accuracy::{evaluate, AccuracyCorpus, AccuracyReport, AccuracyResult, AccuracyStatus};
use hindi_translit::Transliterator;
use unicode_width::UnicodeWidthStr;

const INPUT_COLUMN: usize = 16;

/// Pad `s` to `width` terminal columns.
fn pad(s: &str, width: usize) -> String {
    let display_width = UnicodeWidthStr::width(s);
    if display_width < width {
        format!("{}{}", s, " ".repeat(width - display_width))
    } else {
        s.to_string()
    }
}

/// Report text grouped by category. Passing cases are listed only with
/// `verbose`.
pub fn format_report(report: &AccuracyReport, verbose: bool) -> String {
    let mut grouped: BTreeMap<&str, Vec<&AccuracyResult>> = BTreeMap::new();
    for r in &report.results {
        grouped.entry(&r.category).or_default().push(r);
    }

    let mut out = String::new();
    for (category, group) in &grouped {
        out.push_str(&format!("\n=== {} ({} cases) ===\n", category, group.len()));
        for r in group {
            let input = pad(&r.input.replace('\n', "⏎"), INPUT_COLUMN);
            match r.status {
                AccuracyStatus::Pass => {
                    if verbose {
                        out.push_str(&format!("  \u{2713} {} \u{2192} {}\n", input, r.expected));
                    }
                }
                AccuracyStatus::Fail => {
                    out.push_str(&format!(
                        "  \u{2717} {} \u{2192} {} (got: {})\n",
                        input, r.expected, r.actual
                    ));
                }
                AccuracyStatus::Skip => {
                    let reason = r.note.as_deref().unwrap_or("known failure");
                    out.push_str(&format!("  - {} [skip: {}]\n", input, reason));
                }
            }
        }
    }

    let summary = &report.summary;
    out.push('\n');
    out.push_str("=== Summary ===\n");
    out.push_str(&format!("  Total:     {}\n", summary.total));
    out.push_str(&format!("  Pass:      {:>3}\n", summary.pass));
    out.push_str(&format!("  Fail:      {:>3}\n", summary.fail));
    out.push_str(&format!("  Skip:      {:>3}\n", summary.skip));
    out.push_str(&format!(
        "  Pass rate: {} ({}/{})\n",
        summary.pass_rate,
        summary.pass,
        summary.tested()
    ));
    out
}

pub fn accuracy_cmd(
    t: &Transliterator,
    corpus_file: &str,
    category: Option<&str>,
    verbose: bool,
    json: bool,
) {
    let content = die!(
        fs::read_to_string(corpus_file),
        "Failed to read corpus file {corpus_file}: {}"
    );
    let corpus = die!(AccuracyCorpus::parse(&content), "Failed to parse corpus: {}");

    let cases: Vec<_> = corpus.filter(category).collect();
    if cases.is_empty() {
        eprintln!("No cases match the given filters");
        process::exit(1);
    }

    let report = evaluate(t, cases);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("JSON serialization failed")
        );
    } else {
        print!("{}", format_report(&report, verbose));
    }

    if report.summary.fail > 0 {
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORPUS: &str = r#"
[[cases]]
input = "कमल"
expected = "kamal"
category = "schwa"

[[cases]]
input = "भारत"
expected = "bharat"
category = "schwa"

[[cases]]
input = "प्रकाश"
expected = "prakaash"
category = "cluster"
skip = true
note = "cluster vowel"
"#;

    fn report() -> AccuracyReport {
        let corpus = AccuracyCorpus::parse(CORPUS).unwrap();
        evaluate(&Transliterator::new(), &corpus.cases)
    }

    #[test]
    fn test_pad_uses_display_width() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("abcdef", 4), "abcdef");
        assert_eq!(UnicodeWidthStr::width(pad("कमल", 8).as_str()), 8);
    }

    #[test]
    fn test_format_report_failures_and_skips() {
        let text = format_report(&report(), false);
        assert!(text.contains("=== cluster (1 cases) ==="));
        assert!(text.contains("=== schwa (2 cases) ==="));
        assert!(text.contains("(got: bhaarat)"));
        assert!(text.contains("[skip: cluster vowel]"));
        assert!(!text.contains("\u{2713}"));
        assert!(text.contains("Pass rate: 50.0% (1/2)"));
        // Categories print in sorted order.
        assert!(text.find("cluster").unwrap() < text.find("schwa").unwrap());
    }

    #[test]
    fn test_format_report_verbose_lists_passes() {
        let text = format_report(&report(), true);
        assert!(text.contains("\u{2713}"));
        assert!(text.contains("kamal"));
    }
}
