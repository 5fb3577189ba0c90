use std::fs;

use hindi_translit::{RulesError, Transliterator};

/// Unwrap a Result or print the error and exit.
macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod accuracy_ops;
pub mod convert_ops;
pub mod rules_ops;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("{path}: {source}")]
    Rules { path: String, source: RulesError },
}

/// Transliterator over the rule file at `rules`, or the canonical tables.
pub fn load_transliterator(rules: Option<&str>) -> Result<Transliterator, LoadError> {
    let Some(path) = rules else {
        return Ok(Transliterator::new());
    };
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_string(),
        source,
    })?;
    Transliterator::from_toml(&content).map_err(|source| LoadError::Rules {
        path: path.to_string(),
        source,
    })
}
