//! Catalog indexing
//!
//! Turns the submitted article list into a lookup keyed by article id.

use super::models::Article;
use crate::error::PricingError;
use std::collections::HashMap;

/// Attributes of an article once it is indexed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub price: i64,
}

/// Article id to `{name, price}` lookup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, CatalogEntry>,
}

impl Catalog {
    /// Indexes `articles`. A repeated id replaces the earlier entry.
    pub fn index(articles: impl IntoIterator<Item = Article>) -> Self {
        let entries = articles
            .into_iter()
            .map(|a| {
                (
                    a.id,
                    CatalogEntry {
                        name: a.name,
                        price: a.price,
                    },
                )
            })
            .collect();

        Self { entries }
    }

    pub fn get(&self, article_id: &str) -> Option<&CatalogEntry> {
        self.entries.get(article_id)
    }

    /// Like `get`, but a missing id is an `UnknownArticle` error.
    pub fn lookup(&self, article_id: &str) -> Result<&CatalogEntry, PricingError> {
        self.get(article_id)
            .ok_or_else(|| PricingError::UnknownArticle {
                article_id: article_id.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: &str, name: &str, price: i64) -> Article {
        Article {
            id: id.into(),
            name: name.into(),
            price,
        }
    }

    #[test]
    fn indexes_by_id() {
        let catalog = Catalog::index(vec![
            article("1", "water", 100),
            article("2", "honey", 200),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("2").unwrap().name, "honey");
        assert_eq!(catalog.get("1").unwrap().price, 100);
    }

    #[test]
    fn later_duplicate_wins() {
        let catalog = Catalog::index(vec![
            article("1", "water", 100),
            article("1", "sparkling water", 150),
        ]);

        assert_eq!(catalog.len(), 1);
        let entry = catalog.get("1").unwrap();
        assert_eq!(entry.name, "sparkling water");
        assert_eq!(entry.price, 150);
    }

    #[test]
    fn lookup_reports_missing_article() {
        let catalog = Catalog::index(Vec::new());
        assert!(catalog.is_empty());
        assert_eq!(
            catalog.lookup("42"),
            Err(PricingError::UnknownArticle {
                article_id: "42".into()
            })
        );
    }
}
