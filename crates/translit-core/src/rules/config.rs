use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

/// A raw mapping table as written in TOML: grapheme → Roman.
pub type RawTable = BTreeMap<String, String>;

/// The eight mapping tables, one per grapheme class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    IndependentVowels,
    DependentVowels,
    Consonants,
    NuktaConsonants,
    Conjuncts,
    Diacritics,
    Digits,
    Symbols,
}

impl TableKind {
    pub const ALL: [TableKind; 8] = [
        TableKind::IndependentVowels,
        TableKind::DependentVowels,
        TableKind::Consonants,
        TableKind::NuktaConsonants,
        TableKind::Conjuncts,
        TableKind::Diacritics,
        TableKind::Digits,
        TableKind::Symbols,
    ];

    /// TOML table name.
    pub fn name(self) -> &'static str {
        match self {
            TableKind::IndependentVowels => "independent_vowels",
            TableKind::DependentVowels => "dependent_vowels",
            TableKind::Consonants => "consonants",
            TableKind::NuktaConsonants => "nukta_consonants",
            TableKind::Conjuncts => "conjuncts",
            TableKind::Diacritics => "diacritics",
            TableKind::Digits => "digits",
            TableKind::Symbols => "symbols",
        }
    }

    /// Diacritics and symbols may map to nothing; every other table must
    /// produce some Roman text.
    pub fn allows_empty_values(self) -> bool {
        matches!(self, TableKind::Diacritics | TableKind::Symbols)
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{table}] is missing required entry {key:?}")]
    MissingEntry { table: TableKind, key: char },
    #[error("[{table}] has an empty key")]
    EmptyKey { table: TableKind },
    #[error("[{table}] key {key:?} must be a single codepoint")]
    NotSingleCodepoint { table: TableKind, key: String },
    #[error("[conjuncts] key {0:?} must be consonant + virama + consonant")]
    MalformedConjunct(String),
    #[error("empty value for [{table}] key {key:?}")]
    EmptyValue { table: TableKind, key: String },
    #[error("{key:?} is listed in both [{first}] and [{second}]")]
    DuplicateGrapheme {
        key: char,
        first: TableKind,
        second: TableKind,
    },
    #[error("rule set already initialized")]
    AlreadyInitialized,
}

/// Rule tables as parsed from TOML. A missing table is `None` and falls back
/// to the canonical table when overlaid.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawRules {
    pub independent_vowels: Option<RawTable>,
    pub dependent_vowels: Option<RawTable>,
    pub consonants: Option<RawTable>,
    pub nukta_consonants: Option<RawTable>,
    pub conjuncts: Option<RawTable>,
    pub diacritics: Option<RawTable>,
    pub digits: Option<RawTable>,
    pub symbols: Option<RawTable>,
}

impl RawRules {
    pub fn table(&self, kind: TableKind) -> Option<&RawTable> {
        match kind {
            TableKind::IndependentVowels => self.independent_vowels.as_ref(),
            TableKind::DependentVowels => self.dependent_vowels.as_ref(),
            TableKind::Consonants => self.consonants.as_ref(),
            TableKind::NuktaConsonants => self.nukta_consonants.as_ref(),
            TableKind::Conjuncts => self.conjuncts.as_ref(),
            TableKind::Diacritics => self.diacritics.as_ref(),
            TableKind::Digits => self.digits.as_ref(),
            TableKind::Symbols => self.symbols.as_ref(),
        }
    }

    pub fn set_table(&mut self, kind: TableKind, table: RawTable) {
        let slot = match kind {
            TableKind::IndependentVowels => &mut self.independent_vowels,
            TableKind::DependentVowels => &mut self.dependent_vowels,
            TableKind::Consonants => &mut self.consonants,
            TableKind::NuktaConsonants => &mut self.nukta_consonants,
            TableKind::Conjuncts => &mut self.conjuncts,
            TableKind::Diacritics => &mut self.diacritics,
            TableKind::Digits => &mut self.digits,
            TableKind::Symbols => &mut self.symbols,
        };
        *slot = Some(table);
    }

    /// Tables present in `self` win; the rest are taken from `base`.
    pub fn overlay(&self, base: &RawRules) -> RawRules {
        let mut merged = RawRules::default();
        for kind in TableKind::ALL {
            if let Some(table) = self.table(kind).or_else(|| base.table(kind)) {
                merged.set_table(kind, table.clone());
            }
        }
        merged
    }
}

/// Parse TOML text into raw (unvalidated) rule tables.
pub fn parse_rules_toml(toml_str: &str) -> Result<RawRules, RulesError> {
    toml::from_str(toml_str).map_err(|e| RulesError::Parse(e.to_string()))
}
