use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

use super::config::{parse_rules_toml, RawRules, RawTable, RulesError, TableKind};
use super::table::DEFAULT_TOML;
use crate::classify::{Class, Classifier};
use crate::pipeline::canonical_grapheme;
use crate::script::{SIGN_AA, SIGN_II, VIRAMA};

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static GLOBAL: OnceLock<RuleSet> = OnceLock::new();

/// Entries the scan and the mapper rely on unconditionally.
const REQUIRED_DEPENDENT_VOWELS: [char; 2] = [SIGN_AA, SIGN_II];

fn default_raw() -> &'static RawRules {
    static RAW: OnceLock<RawRules> = OnceLock::new();
    RAW.get_or_init(|| parse_rules_toml(DEFAULT_TOML).expect("default rules TOML must be valid"))
}

/// Compiled, validated rule tables plus the derived classifier.
///
/// Immutable once built; share it freely across threads.
#[derive(Debug, Clone)]
pub struct RuleSet {
    independent_vowels: HashMap<char, String>,
    dependent_vowels: HashMap<char, String>,
    consonants: HashMap<char, String>,
    nukta_consonants: HashMap<char, String>,
    conjuncts: HashMap<[char; 3], String>,
    diacritics: HashMap<char, String>,
    digits: HashMap<char, String>,
    /// Sorted longest key first.
    symbols: Vec<(String, String)>,
    classifier: Classifier,
}

impl RuleSet {
    /// The built-in canonical rule set.
    pub fn canonical() -> &'static RuleSet {
        static INSTANCE: OnceLock<RuleSet> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            RuleSet::compile(default_raw()).expect("default rules must pass validation")
        })
    }

    /// Set a custom TOML rule set before the first `global()` call. Tables
    /// the TOML omits keep their canonical contents.
    pub fn init_custom(toml_content: String) -> Result<(), RulesError> {
        if GLOBAL.get().is_some() {
            return Err(RulesError::AlreadyInitialized);
        }
        // Validate eagerly
        RuleSet::from_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| RulesError::AlreadyInitialized)
    }

    /// Get or initialize the process-wide rule set.
    pub fn global() -> &'static RuleSet {
        GLOBAL.get_or_init(|| match CUSTOM_TOML.get() {
            Some(toml_str) => {
                RuleSet::from_toml(toml_str).expect("custom rules were validated in init_custom")
            }
            None => RuleSet::canonical().clone(),
        })
    }

    /// Build from a (possibly partial) TOML document.
    pub fn from_toml(toml_str: &str) -> Result<RuleSet, RulesError> {
        let custom = parse_rules_toml(toml_str)?;
        RuleSet::compile(&custom.overlay(default_raw()))
    }

    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::default()
    }

    fn compile(raw: &RawRules) -> Result<RuleSet, RulesError> {
        let mut classifier = Classifier::default();
        let mut origin: HashMap<char, TableKind> = HashMap::new();

        let mut single = |kind: TableKind, class: Class| -> Result<HashMap<char, String>, RulesError> {
            let mut compiled = HashMap::new();
            for (key, value) in raw.table(kind).into_iter().flatten() {
                let c = single_codepoint(kind, key)?;
                check_value(kind, key, value)?;
                if classifier.insert(c, class).is_some() {
                    return Err(RulesError::DuplicateGrapheme {
                        key: c,
                        first: origin[&c],
                        second: kind,
                    });
                }
                origin.insert(c, kind);
                compiled.insert(c, value.clone());
            }
            Ok(compiled)
        };

        let independent_vowels = single(TableKind::IndependentVowels, Class::IndependentVowel)?;
        let dependent_vowels = single(TableKind::DependentVowels, Class::VowelSign)?;
        let consonants = single(TableKind::Consonants, Class::Consonant)?;
        let nukta_consonants = single(TableKind::NuktaConsonants, Class::NuktaConsonant)?;
        let diacritics = single(TableKind::Diacritics, Class::Diacritic)?;
        let digits = single(TableKind::Digits, Class::Digit)?;

        for key in REQUIRED_DEPENDENT_VOWELS {
            if !dependent_vowels.contains_key(&key) {
                return Err(RulesError::MissingEntry {
                    table: TableKind::DependentVowels,
                    key,
                });
            }
        }

        let conjuncts = compile_conjuncts(raw.table(TableKind::Conjuncts), &classifier)?;

        let mut symbols = Vec::new();
        for (key, value) in raw.table(TableKind::Symbols).into_iter().flatten() {
            let key = canonical_grapheme(key);
            if key.is_empty() {
                return Err(RulesError::EmptyKey {
                    table: TableKind::Symbols,
                });
            }
            let mut chars = key.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                classifier.insert(c, Class::Symbol);
            }
            symbols.push((key, value.clone()));
        }
        symbols.sort_by(|(a, _), (b, _)| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });

        debug!(
            consonants = consonants.len(),
            conjuncts = conjuncts.len(),
            symbols = symbols.len(),
            "compiled rule set"
        );

        Ok(RuleSet {
            independent_vowels,
            dependent_vowels,
            consonants,
            nukta_consonants,
            conjuncts,
            diacritics,
            digits,
            symbols,
            classifier,
        })
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Look a grapheme up in the class tables, in mapper order:
    /// independent vowel, vowel sign, consonant, nukta consonant, diacritic.
    pub fn map_grapheme(&self, c: char) -> Option<&str> {
        self.independent_vowels
            .get(&c)
            .or_else(|| self.dependent_vowels.get(&c))
            .or_else(|| self.consonants.get(&c))
            .or_else(|| self.nukta_consonants.get(&c))
            .or_else(|| self.diacritics.get(&c))
            .map(String::as_str)
    }

    pub fn conjunct(&self, cluster: [char; 3]) -> Option<&str> {
        self.conjuncts.get(&cluster).map(String::as_str)
    }

    pub fn digit(&self, c: char) -> Option<&str> {
        self.digits.get(&c).map(String::as_str)
    }

    pub fn symbols(&self) -> &[(String, String)] {
        &self.symbols
    }
}

fn single_codepoint(kind: TableKind, key: &str) -> Result<char, RulesError> {
    let key = canonical_grapheme(key);
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Err(RulesError::EmptyKey { table: kind }),
        (Some(c), None) => Ok(c),
        (Some(_), Some(_)) => Err(RulesError::NotSingleCodepoint { table: kind, key }),
    }
}

fn check_value(kind: TableKind, key: &str, value: &str) -> Result<(), RulesError> {
    if value.is_empty() && !kind.allows_empty_values() {
        return Err(RulesError::EmptyValue {
            table: kind,
            key: key.to_string(),
        });
    }
    Ok(())
}

fn compile_conjuncts(
    table: Option<&RawTable>,
    classifier: &Classifier,
) -> Result<HashMap<[char; 3], String>, RulesError> {
    let mut compiled = HashMap::new();
    for (key, value) in table.into_iter().flatten() {
        let canonical = canonical_grapheme(key);
        let chars: Vec<char> = canonical.chars().collect();
        let cluster: [char; 3] = match chars[..] {
            [first, VIRAMA, second]
                if classifier.class_of(first).is_consonant()
                    && classifier.class_of(second).is_consonant() =>
            {
                [first, VIRAMA, second]
            }
            [] => {
                return Err(RulesError::EmptyKey {
                    table: TableKind::Conjuncts,
                })
            }
            _ => return Err(RulesError::MalformedConjunct(canonical)),
        };
        check_value(TableKind::Conjuncts, key, value)?;
        compiled.insert(cluster, value.clone());
    }
    Ok(compiled)
}

/// Builder for a rule set with selected tables replaced.
///
/// ```
/// use translit_core::rules::RuleSet;
///
/// let rules = RuleSet::builder()
///     .dependent_vowels([("ा", "aa"), ("ी", "ee")])
///     .build()
///     .unwrap();
/// assert_eq!(rules.map_grapheme('ी'), Some("ee"));
/// assert_eq!(rules.map_grapheme('क'), Some("k"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleSetBuilder {
    overrides: RawRules,
}

macro_rules! table_setter {
    ($($(#[$meta:meta])* $name:ident => $kind:ident,)*) => {
        $(
            $(#[$meta])*
            pub fn $name<I, K, V>(self, table: I) -> Self
            where
                I: IntoIterator<Item = (K, V)>,
                K: Into<String>,
                V: Into<String>,
            {
                self.table(TableKind::$kind, table)
            }
        )*
    };
}

impl RuleSetBuilder {
    table_setter! {
        /// Replace the independent vowel table.
        independent_vowels => IndependentVowels,
        /// Replace the dependent vowel sign table. Must contain `ा` and `ी`.
        dependent_vowels => DependentVowels,
        consonants => Consonants,
        nukta_consonants => NuktaConsonants,
        /// Replace the conjunct table. Keys are consonant + virama + consonant.
        conjuncts => Conjuncts,
        diacritics => Diacritics,
        digits => Digits,
        symbols => Symbols,
    }

    /// Replace the table of the given kind.
    pub fn table<I, K, V>(mut self, kind: TableKind, table: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let table: RawTable = table
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.overrides.set_table(kind, table);
        self
    }

    pub fn build(self) -> Result<RuleSet, RulesError> {
        RuleSet::compile(&self.overrides.overlay(default_raw()))
    }
}
