//! Relevance scoring and related-product derivation.

use crate::catalog::{Catalog, Product};
use crate::search::{SearchKind, SearchQuery};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashSet;
use tracing::debug;

/// Maximum size of the related-products set.
pub const RELATED_LIMIT: usize = 8;

/// Related products draw from the categories of this many top results.
const TOP_CATEGORY_COUNT: usize = 3;

// Scoring weights. Name matches dominate, categories outrank
// descriptions, and expansion terms outweigh raw query terms.
const NAME_MATCH: i64 = 10;
const NAME_PREFIX_GENERAL: i64 = 15;
const NAME_PREFIX_CLASSIFIED: i64 = 5;
const DESCRIPTION_MATCH: i64 = 5;
const CATEGORY_GENERAL: i64 = 8;
const CATEGORY_CLASSIFIED: i64 = 7;
const EXPANSION_NAME: i64 = 15;
const EXPANSION_DESCRIPTION: i64 = 10;
const EXPANSION_CATEGORY: i64 = 8;
const GENRE_WORD: i64 = 12;
const DEVELOPER_NAME_BONUS: i64 = 15;

/// Ranked search output.
///
/// `results` holds every product with positive relevance, best first.
/// `related` suggests alternatives: category neighbours of the top
/// results, or a random catalog sample when nothing matched directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SearchOutcome {
    /// Direct results in descending relevance order.
    pub results: Vec<Product>,
    /// Secondary suggestions, at most [`RELATED_LIMIT`].
    pub related: Vec<Product>,
}

/// A product with its relevance score, internal to ranking.
struct ScoredProduct<'a> {
    product: &'a Product,
    score: i64,
}

/// Scores the catalog against a query.
///
/// Scoring is pure; ties keep catalog order. The random source only
/// feeds the related-product fallback, so a seeded generator makes the
/// whole search reproducible.
pub struct SearchRanker<'a> {
    catalog: &'a Catalog,
}

impl<'a> SearchRanker<'a> {
    /// Create a ranker over a catalog snapshot.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Rank the catalog for a query.
    pub fn search<R: Rng + ?Sized>(&self, query: &SearchQuery, rng: &mut R) -> SearchOutcome {
        if self.catalog.is_empty() {
            return SearchOutcome::default();
        }
        if query.text().trim().is_empty() {
            return SearchOutcome {
                results: Vec::new(),
                related: self.random_related(rng),
            };
        }

        let terms = query.terms();
        let mut scored: Vec<ScoredProduct<'_>> = self
            .catalog
            .iter()
            .map(|product| ScoredProduct {
                product,
                score: score_product(product, query, &terms),
            })
            .filter(|s| s.score > 0)
            .collect();
        // Stable sort keeps catalog order between equal scores.
        scored.sort_by_key(|s| Reverse(s.score));

        let related = if scored.is_empty() {
            self.random_related(rng)
        } else {
            self.related_by_category(&scored)
        };

        debug!(
            query = query.text(),
            kind = query.kind().as_str(),
            results = scored.len(),
            related = related.len(),
            "search ranked"
        );

        SearchOutcome {
            results: scored.into_iter().map(|s| s.product.clone()).collect(),
            related,
        }
    }

    /// Catalog products sharing a category with the top results, minus
    /// the results themselves.
    fn related_by_category(&self, direct: &[ScoredProduct<'_>]) -> Vec<Product> {
        let mut categories: Vec<&str> = Vec::new();
        for s in direct.iter().take(TOP_CATEGORY_COUNT) {
            if let Some(category) = s.product.category.as_deref() {
                if !categories.contains(&category) {
                    categories.push(category);
                }
            }
        }

        let direct_ids: HashSet<_> = direct.iter().map(|s| s.product.id).collect();
        self.catalog
            .iter()
            .filter(|p| p.category.as_deref().map_or(false, |c| categories.contains(&c)))
            .filter(|p| !direct_ids.contains(&p.id))
            .take(RELATED_LIMIT)
            .cloned()
            .collect()
    }

    fn random_related<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Product> {
        let mut pool: Vec<&Product> = self.catalog.iter().collect();
        pool.shuffle(rng);
        pool.into_iter().take(RELATED_LIMIT).cloned().collect()
    }
}

fn score_product(product: &Product, query: &SearchQuery, terms: &[String]) -> i64 {
    let name = product.name.to_lowercase();
    let description = product.description.as_deref().unwrap_or("").to_lowercase();
    let category = product.category.as_deref().unwrap_or("").to_lowercase();
    let classified = query.is_classified();

    let mut score = 0;
    for term in terms {
        if name.contains(term.as_str()) {
            score += NAME_MATCH;
            if name == *term || name.starts_with(&format!("{} ", term)) {
                score += if classified {
                    NAME_PREFIX_CLASSIFIED
                } else {
                    NAME_PREFIX_GENERAL
                };
            }
        }
        if !description.is_empty() && description.contains(term.as_str()) {
            score += DESCRIPTION_MATCH;
        }
        if !category.is_empty() && category.contains(term.as_str()) {
            score += if classified {
                CATEGORY_CLASSIFIED
            } else {
                CATEGORY_GENERAL
            };
        }
    }

    if classified && !query.expansion_terms().is_empty() {
        let description_words: HashSet<&str> = description.split_whitespace().collect();
        for term in query.expansion_terms() {
            let term = term.as_str();
            if name.contains(term) {
                score += EXPANSION_NAME;
                // Developer identity usually lives in the product name.
                if query.kind() == SearchKind::Developer {
                    score += DEVELOPER_NAME_BONUS;
                }
            }
            if !description.is_empty() && description.contains(term) {
                score += EXPANSION_DESCRIPTION;
                // Whole-word check cuts false positives from partial
                // word overlaps.
                if query.kind() == SearchKind::Genre && description_words.contains(term) {
                    score += GENRE_WORD;
                }
            }
            if !category.is_empty() && category.contains(term) {
                score += EXPANSION_CATEGORY;
            }
        }
    }

    score
}
