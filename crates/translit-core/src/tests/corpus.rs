use crate::accuracy::{evaluate, AccuracyCorpus, AccuracyStatus};
use crate::Transliterator;

const CORPUS: &str = include_str!("corpus.toml");

#[test]
fn test_corpus_passes() {
    let corpus = AccuracyCorpus::parse(CORPUS).expect("corpus.toml must parse");
    let report = evaluate(&Transliterator::new(), &corpus.cases);

    let failures: Vec<String> = report
        .results
        .iter()
        .filter(|r| r.status == AccuracyStatus::Fail)
        .map(|r| format!("{:?} → {:?} (got: {:?})", r.input, r.expected, r.actual))
        .collect();
    assert!(failures.is_empty(), "corpus failures:\n{}", failures.join("\n"));
    assert!(report.summary.pass > 20, "got {} passing cases", report.summary.pass);
}

#[test]
fn test_corpus_categories() {
    let corpus = AccuracyCorpus::parse(CORPUS).unwrap();
    for category in ["cluster", "conjunct", "schwa", "nasal", "nukta", "digits", "mixed"] {
        assert!(
            corpus.filter(Some(category)).next().is_some(),
            "no cases in category {category:?}"
        );
    }
}
