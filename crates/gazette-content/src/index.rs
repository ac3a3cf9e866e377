//! Identifier-keyed article lookup.

use std::collections::HashMap;

use crate::model::{Article, ArticleId};

/// Lookup table from [`ArticleId`] to [`Article`], built once per build.
///
/// The index covers every loaded article, published or not. When two articles share an
/// identifier the later one wins.
#[derive(Debug, Clone, Default)]
pub struct ArticleIndex<'a> {
    by_id: HashMap<&'a ArticleId, &'a Article>,
}

impl<'a> ArticleIndex<'a> {
    /// Build the index over a loaded article sequence.
    pub fn new(articles: &'a [Article]) -> Self {
        let by_id = articles.iter().map(|a| (&a.id, a)).collect();
        Self { by_id }
    }

    /// Resolve an identifier.
    pub fn get(&self, id: &ArticleId) -> Option<&'a Article> {
        self.by_id.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: &str, slug: &str, published: bool) -> Article {
        Article {
            id: ArticleId::from(id),
            slug: slug.to_string(),
            title: slug.to_uppercase(),
            description: String::new(),
            category: String::new(),
            published,
            content: vec![],
            related: vec![],
        }
    }

    #[test]
    fn resolves_by_id_not_slug() {
        let articles = vec![article("1", "first", true), article("2", "second", true)];
        let index = ArticleIndex::new(&articles);

        assert_eq!(index.get(&ArticleId::from("2")).unwrap().slug, "second");
        assert!(index.get(&ArticleId::from("second")).is_none());
    }

    #[test]
    fn includes_unpublished_articles() {
        let articles = vec![article("1", "draft", false)];
        let index = ArticleIndex::new(&articles);

        assert_eq!(index.len(), 1);
        assert!(index.get(&ArticleId::from(1)).is_some());
    }

    #[test]
    fn later_duplicate_wins() {
        let articles = vec![article("1", "old", true), article("1", "new", true)];
        let index = ArticleIndex::new(&articles);

        assert_eq!(index.len(), 1);
        assert_eq!(index.get(&ArticleId::from("1")).unwrap().slug, "new");
    }
}
