use std::borrow::Cow;
use std::io::{self, BufRead, BufWriter, Write};

use hindi_translit::script::contains_devanagari;
use hindi_translit::{Stages, Transliterator};

/// Lines without any Devanagari are returned untouched.
pub fn convert_line<'a>(t: &Transliterator, line: &'a str) -> Cow<'a, str> {
    if contains_devanagari(line) {
        Cow::Owned(t.transliterate(line))
    } else {
        Cow::Borrowed(line)
    }
}

/// Convert `text`, or every line of stdin when no text is given.
pub fn convert_cmd(t: &Transliterator, text: Option<&str>) {
    if let Some(text) = text {
        println!("{}", convert_line(t, text));
        return;
    }

    let stdin = io::stdin();
    let mut out = BufWriter::new(io::stdout().lock());
    for line in stdin.lock().lines() {
        let line = die!(line, "Error reading stdin: {}");
        die!(
            writeln!(out, "{}", convert_line(t, &line)),
            "Error writing output: {}"
        );
    }
    die!(out.flush(), "Error writing output: {}");
}

pub fn format_stages(stages: &Stages) -> String {
    let rows = [
        ("normalized", &stages.normalized),
        ("expanded", &stages.expanded),
        ("mapped", &stages.mapped),
        ("output", &stages.output),
    ];
    let mut out = String::new();
    for (label, value) in rows {
        out.push_str(&format!("{:<11} {}\n", format!("{label}:"), value));
    }
    out
}

pub fn stages_cmd(t: &Transliterator, text: &str, json: bool) {
    let stages = t.stages(text);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&stages).expect("JSON serialization failed")
        );
    } else {
        print!("{}", format_stages(&stages));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_line() {
        let t = Transliterator::new();
        assert_eq!(convert_line(&t, "नमस्ते दुनिया"), "namaste duniya");
        assert!(matches!(convert_line(&t, "plain ascii"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_format_stages() {
        let t = Transliterator::new();
        let text = format_stages(&t.stages("कमल"));
        assert_eq!(
            text,
            "normalized: कमल\nexpanded:   कaमaल\nmapped:     kamal\noutput:     kamal\n"
        );
    }

    #[test]
    fn test_stages_json_fields() {
        let t = Transliterator::new();
        let json = serde_json::to_value(t.stages("१")).unwrap();
        assert_eq!(json["normalized"], "१");
        assert_eq!(json["expanded"], "1");
        assert_eq!(json["output"], "1");
    }
}
