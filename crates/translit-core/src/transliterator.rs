use std::sync::OnceLock;

use serde::Serialize;
use tracing::debug_span;

use crate::pipeline;
use crate::rules::{RuleSet, RulesError};

/// Devanagari → Roman transliterator over an immutable rule set.
///
/// Cheap to share: every method takes `&self` and the type is
/// `Send + Sync`.
#[derive(Debug, Clone)]
pub struct Transliterator {
    rules: RuleSet,
}

/// Output of each pipeline stage for one input, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stages {
    pub normalized: String,
    pub expanded: String,
    pub mapped: String,
    pub output: String,
}

impl Transliterator {
    /// Transliterator over the canonical built-in tables.
    pub fn new() -> Self {
        Self {
            rules: RuleSet::canonical().clone(),
        }
    }

    /// Process-wide instance over [`RuleSet::global`], built on first use.
    pub fn global() -> &'static Transliterator {
        static INSTANCE: OnceLock<Transliterator> = OnceLock::new();
        INSTANCE.get_or_init(|| Transliterator {
            rules: RuleSet::global().clone(),
        })
    }

    /// A [`RuleSet`] is validated when it is built, so this cannot fail.
    pub fn with_rules(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Build from a (possibly partial) TOML rule document.
    pub fn from_toml(toml_str: &str) -> Result<Self, RulesError> {
        RuleSet::from_toml(toml_str).map(Self::with_rules)
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn normalize(&self, text: &str) -> String {
        pipeline::normalize(text, self.rules.symbols())
    }

    pub fn insert_schwa(&self, normalized: &str) -> String {
        pipeline::insert_schwa(normalized, &self.rules)
    }

    pub fn map(&self, expanded: &str) -> String {
        pipeline::map(expanded, &self.rules)
    }

    pub fn finalize(&self, mapped: &str) -> String {
        pipeline::finalize(mapped)
    }

    /// Run all four stages. Total: every input produces some output.
    pub fn transliterate(&self, text: &str) -> String {
        let _span = debug_span!("transliterate", char_count = text.chars().count()).entered();
        let normalized = self.normalize(text);
        let expanded = self.insert_schwa(&normalized);
        let mapped = self.map(&expanded);
        self.finalize(&mapped)
    }

    pub fn stages(&self, text: &str) -> Stages {
        let normalized = self.normalize(text);
        let expanded = self.insert_schwa(&normalized);
        let mapped = self.map(&expanded);
        let output = self.finalize(&mapped);
        Stages {
            normalized,
            expanded,
            mapped,
            output,
        }
    }
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::new()
    }
}

/// Transliterate with the process-wide instance.
///
/// ```
/// assert_eq!(translit_core::transliterate("नमस्ते"), "namaste");
/// ```
pub fn transliterate(text: &str) -> String {
    Transliterator::global().transliterate(text)
}
