//! Devanagari → Roman phonetic transliteration.
//!
//! Text flows through four pure stages, strictly left to right:
//!
//! 1. [`pipeline::normalize`]: NFC, nukta merging, symbol substitution.
//! 2. [`pipeline::insert_schwa`]: one forward scan that makes the surviving
//!    inherent vowels explicit and resolves fixed conjuncts.
//! 3. [`pipeline::map`]: grapheme → Roman lookup.
//! 4. [`pipeline::finalize`]: virama removal, danda → period, NFC.
//!
//! ```
//! use translit_core::Transliterator;
//!
//! let t = Transliterator::new();
//! assert_eq!(t.transliterate("भारत"), "bhaarat");
//! assert_eq!(t.transliterate("topic (विषय)"), "topic (vishay)");
//! ```

pub mod accuracy;
pub mod classify;
pub mod pipeline;
pub mod rules;
pub mod script;
mod transliterator;

#[cfg(test)]
mod tests;

pub use rules::{RuleSet, RuleSetBuilder, RulesError};
pub use transliterator::{transliterate, Stages, Transliterator};
