//! Grapheme → Roman rule tables.
//!
//! The canonical tables are embedded as TOML and compiled once into a
//! [`RuleSet`]. Callers may override any subset of the tables, either from
//! TOML or through [`RuleSetBuilder`]; overrides are validated before use.

mod config;
mod ruleset;
mod table;

pub use config::{parse_rules_toml, RawRules, RulesError, TableKind};
pub use ruleset::{RuleSet, RuleSetBuilder};
pub use table::DEFAULT_TOML;
