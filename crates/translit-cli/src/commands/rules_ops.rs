use std::fs;

use hindi_translit::rules::{parse_rules_toml, RawRules, RuleSet, TableKind, DEFAULT_TOML};

pub fn rules_export() {
    print!("{}", DEFAULT_TOML);
}

/// One line per table the file overrides.
pub fn describe_overrides(raw: &RawRules) -> Vec<String> {
    TableKind::ALL
        .iter()
        .filter_map(|&kind| {
            raw.table(kind)
                .map(|table| format!("[{kind}] {} entries", table.len()))
        })
        .collect()
}

pub fn rules_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let raw = die!(parse_rules_toml(&content), "Error: {}");
    die!(RuleSet::from_toml(&content), "Error: {}");

    let lines = describe_overrides(&raw);
    if lines.is_empty() {
        println!("OK: no tables overridden");
    } else {
        println!("OK: {} tables overridden", lines.len());
        for line in lines {
            println!("  {line}");
        }
    }
}
