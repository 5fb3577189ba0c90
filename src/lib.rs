//! Devanagari → Roman transliteration.
//!
//! Re-exports the `translit-core` pipeline and adds opt-in trace logging
//! (`--features trace`).
//!
//! ```
//! assert_eq!(hindi_translit::transliterate("क्षमा"), "kshama");
//! ```

pub mod trace_init;

pub use trace_init::{init_tracing, TraceGuard};
pub use translit_core::accuracy;
pub use translit_core::classify;
pub use translit_core::pipeline;
pub use translit_core::rules;
pub use translit_core::script;
pub use translit_core::{transliterate, RuleSet, RuleSetBuilder, RulesError, Stages, Transliterator};
