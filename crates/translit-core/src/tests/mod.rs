mod corpus;
mod literal;
mod rules;

use crate::Transliterator;

pub(super) fn translit(text: &str) -> String {
    Transliterator::new().transliterate(text)
}
