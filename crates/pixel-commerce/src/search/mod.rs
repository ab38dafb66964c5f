//! Catalog search: classification, relevance scoring, related products.

mod lexicon;
mod query;
mod ranker;

pub use query::{SearchKind, SearchQuery};
pub use ranker::{SearchOutcome, SearchRanker, RELATED_LIMIT};
