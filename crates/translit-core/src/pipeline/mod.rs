//! The four transliteration stages, applied strictly left to right:
//! normalize → insert_schwa → map → finalize.
//!
//! Every stage is a pure function of its input and the rule set.

mod conjunct;
mod context;
mod finalize;
mod mapper;
mod normalize;
mod schwa;

pub use context::Context;
pub use finalize::finalize;
pub use mapper::map;
pub use normalize::normalize;
pub use schwa::insert_schwa;

pub(crate) use normalize::canonical_grapheme;
