use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::error::{Error, Result};
use crate::models::{CatalogEntry, ResolvedLanguage};

const MAX_SUGGESTIONS: usize = 3;

/// Template stems in catalog order. Non-template files are skipped, duplicates kept.
pub fn stems(catalog: &[CatalogEntry]) -> impl Iterator<Item = &str> {
    catalog.iter().filter_map(CatalogEntry::stem)
}

/// Matches user input against the catalog, ignoring case and surrounding whitespace.
///
/// Returns the first matching stem with upstream's casing, since the content
/// endpoint is case-sensitive.
pub fn resolve(input: &str, catalog: &[CatalogEntry]) -> Result<ResolvedLanguage> {
    let wanted = input.trim();
    if wanted.is_empty() {
        return Err(Error::Validation { field: "language" });
    }

    let wanted_lower = wanted.to_lowercase();
    if let Some(stem) = stems(catalog).find(|stem| stem.to_lowercase() == wanted_lower) {
        tracing::info!(input = wanted, stem, "resolved language");
        return Ok(ResolvedLanguage::from_entry_stem(stem));
    }

    Err(Error::NotFound {
        language: wanted.to_string(),
        suggestions: suggest(wanted, catalog),
    })
}

/// Closest stems by fuzzy score, best first. Only used to build error hints.
fn suggest(input: &str, catalog: &[CatalogEntry]) -> Vec<String> {
    let matcher = SkimMatcherV2::default().ignore_case();
    let mut matches: Vec<(i64, &str)> = stems(catalog)
        .filter_map(|stem| matcher.fuzzy_match(stem, input).map(|score| (score, stem)))
        .collect();

    matches.sort_by(|a, b| b.0.cmp(&a.0));
    let mut suggestions: Vec<String> = Vec::new();
    for (_, stem) in matches {
        if !suggestions.iter().any(|s| s == stem) {
            suggestions.push(stem.to_string());
        }
        if suggestions.len() == MAX_SUGGESTIONS {
            break;
        }
    }
    suggestions
}
