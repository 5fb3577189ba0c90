fn main() {
    // Validate the embedded rule tables at compile time.
    validate_toml(
        "src/rules/default_rules.toml",
        include_str!("src/rules/default_rules.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
