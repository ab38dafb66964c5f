//! Search query classification and term extraction.

use crate::search::lexicon;
use serde::{Deserialize, Serialize};

/// How a query was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    /// Free text with no recognized intent.
    #[default]
    General,
    /// A concrete product lookup.
    Product,
    /// A video game genre.
    Genre,
    /// A developer or publisher.
    Developer,
    /// A console or platform.
    Platform,
}

impl SearchKind {
    /// Stable lowercase name, as carried in search URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchKind::General => "general",
            SearchKind::Product => "product",
            SearchKind::Genre => "genre",
            SearchKind::Developer => "developer",
            SearchKind::Platform => "platform",
        }
    }
}

/// A free-text query, optionally narrowed to a genre, developer or
/// platform.
///
/// Classification widens the scored term set with the label's synonym
/// list and switches the ranker to its classified weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    text: String,
    kind: SearchKind,
    label: Option<String>,
    expansion: Vec<String>,
}

impl SearchQuery {
    /// A plain free-text query.
    pub fn general(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: SearchKind::General,
            label: None,
            expansion: Vec::new(),
        }
    }

    /// A query pre-classified by the caller.
    ///
    /// The label is looked up in the synonym table for the kind; an
    /// unknown label leaves the expansion empty and scoring falls back to
    /// the raw query terms.
    pub fn classified(text: impl Into<String>, kind: SearchKind, label: impl Into<String>) -> Self {
        let label = label.into();
        let table = match kind {
            SearchKind::Genre => Some(lexicon::GENRES),
            SearchKind::Developer => Some(lexicon::DEVELOPERS),
            SearchKind::Platform => Some(lexicon::PLATFORMS),
            SearchKind::General | SearchKind::Product => None,
        };
        let expansion = table
            .and_then(|t| lexicon::table_terms(t, &label))
            .map(|terms| terms.iter().map(|t| t.to_string()).collect())
            .unwrap_or_default();
        Self {
            text: text.into(),
            kind,
            label: Some(label),
            expansion,
        }
    }

    /// Classify a raw query against the synonym tables.
    ///
    /// Developers are checked first, then genres, then platforms; the
    /// first label with any keyword appearing in the lowercased query
    /// wins ("nintendo" therefore classifies as a developer). A query
    /// matching nothing stays general.
    pub fn classify(text: impl Into<String>) -> Self {
        let text = text.into();
        let lowered = text.to_lowercase();

        let tables = [
            (SearchKind::Developer, lexicon::DEVELOPERS),
            (SearchKind::Genre, lexicon::GENRES),
            (SearchKind::Platform, lexicon::PLATFORMS),
        ];
        for (kind, table) in tables {
            for (label, keywords) in table {
                if keywords.iter().any(|k| lowered.contains(k)) {
                    return Self {
                        text,
                        kind,
                        label: Some((*label).to_string()),
                        expansion: keywords.iter().map(|k| k.to_string()).collect(),
                    };
                }
            }
        }
        Self::general(text)
    }

    /// The raw query text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The classification kind.
    pub fn kind(&self) -> SearchKind {
        self.kind
    }

    /// The classified label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Synonym expansion terms for the classified label.
    pub fn expansion_terms(&self) -> &[String] {
        &self.expansion
    }

    /// Whether classified scoring weights apply.
    pub fn is_classified(&self) -> bool {
        self.kind != SearchKind::General
    }

    /// Lowercased query terms for scoring.
    ///
    /// General queries keep terms longer than one character; classified
    /// queries require more than two, since the expansion terms carry the
    /// intent.
    pub fn terms(&self) -> Vec<String> {
        let min_len = if self.is_classified() { 2 } else { 1 };
        self.text
            .to_lowercase()
            .split_whitespace()
            .filter(|t| t.len() > min_len)
            .map(|t| t.to_string())
            .collect()
    }
}
