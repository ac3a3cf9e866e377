//! Dataset types.

use std::fmt;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Site-wide metadata.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    /// Site name shown in the header and footer
    pub name: String,

    /// Absolute base URL, without trailing slash
    pub base_url: String,

    /// Language of the listing page (`lang` attribute and built-in copy)
    #[serde(default = "default_lang")]
    pub lang: String,
}

fn default_lang() -> String {
    "en".to_string()
}

impl Site {
    /// URL of the site root, as advertised in the sitemap.
    pub fn root_url(&self) -> String {
        format!("{}/", self.base_url)
    }

    /// Canonical absolute URL of an article page.
    pub fn article_url(&self, article: &Article) -> String {
        format!("{}{}", self.base_url, article.href())
    }
}

/// Stable article identifier.
///
/// Identifiers may be written as JSON numbers or strings; both forms are compared by their
/// textual value, so `1` and `"1"` name the same article.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "RawId")]
pub struct ArticleId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(serde_json::Number),
    Text(String),
}

impl From<RawId> for ArticleId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Number(n) => Self(number_key(&n)),
            RawId::Text(s) => Self(s),
        }
    }
}

/// Largest float that still holds every smaller integer exactly.
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

/// Integral floats collapse to their integer form, so `1.0` and `1` are one key.
fn number_key(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < MAX_EXACT_FLOAT => {
            (f as i64).to_string()
        }
        _ => n.to_string(),
    }
}

impl ArticleId {
    /// Textual form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ArticleId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<u64> for ArticleId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One unit of an article body.
///
/// Blocks that are not a well-formed paragraph or link, including blocks with no `type` at all,
/// load as [`ContentBlock::Unknown`] instead of failing the dataset.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(from = "RawBlock")]
pub enum ContentBlock {
    /// Plain text paragraph
    Paragraph { text: String },

    /// Cross-reference to another article, resolved by identifier
    Link { text: String, target: ArticleId },

    /// Anything this version does not know how to render
    Unknown,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum TaggedBlock {
    Paragraph { text: String },
    Link { text: String, target: ArticleId },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBlock {
    Tagged(TaggedBlock),
    Other(IgnoredAny),
}

impl From<RawBlock> for ContentBlock {
    fn from(raw: RawBlock) -> Self {
        match raw {
            RawBlock::Tagged(TaggedBlock::Paragraph { text }) => Self::Paragraph { text },
            RawBlock::Tagged(TaggedBlock::Link { text, target }) => Self::Link { text, target },
            RawBlock::Other(_) => Self::Unknown,
        }
    }
}

/// Accept `null` wherever a missing list would be accepted.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single article.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Article {
    /// Stable identifier used for all cross-references
    pub id: ArticleId,

    /// Output file stem; may change between builds
    pub slug: String,

    /// Article title
    pub title: String,

    /// Short summary for the index page and meta tags
    #[serde(default)]
    pub description: String,

    /// Editorial category
    #[serde(default)]
    pub category: String,

    /// Only published articles are rendered
    #[serde(default)]
    pub published: bool,

    /// Ordered body blocks
    #[serde(default)]
    pub content: Vec<ContentBlock>,

    /// Curated related articles, in display order
    #[serde(default, deserialize_with = "null_as_empty")]
    pub related: Vec<ArticleId>,
}

impl Article {
    /// Site-relative URL of the article page.
    pub fn href(&self) -> String {
        format!("/articles/{}.html", self.slug)
    }
}

/// The whole input document.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Dataset {
    pub site: Site,

    #[serde(default)]
    pub articles: Vec<Article>,
}

impl Dataset {
    /// Published articles, in input order.
    pub fn published(&self) -> impl Iterator<Item = &Article> {
        self.articles.iter().filter(|a| a.published)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn numeric_and_string_ids_compare_equal() {
        let a: ArticleId = serde_json::from_str("1").unwrap();
        let b: ArticleId = serde_json::from_str("\"1\"").unwrap();

        assert_eq!(a, b);
        assert_eq!(a.as_str(), "1");
    }

    #[test]
    fn parses_known_blocks() {
        let blocks: Vec<ContentBlock> = serde_json::from_str(
            r#"[
                {"type": "paragraph", "text": "Hello"},
                {"type": "link", "text": "See also", "target": 7}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            blocks,
            vec![
                ContentBlock::Paragraph {
                    text: "Hello".to_string()
                },
                ContentBlock::Link {
                    text: "See also".to_string(),
                    target: ArticleId::from(7),
                },
            ]
        );
    }

    #[test]
    fn unknown_block_kinds_are_kept_as_unknown() {
        let block: ContentBlock =
            serde_json::from_str(r#"{"type": "video", "src": "clip.mp4", "autoplay": true}"#)
                .unwrap();

        assert_eq!(block, ContentBlock::Unknown);
    }

    #[test]
    fn integral_float_ids_match_integer_ids() {
        let a: ArticleId = serde_json::from_str("1.0").unwrap();
        let b: ArticleId = serde_json::from_str("1").unwrap();
        let c: ArticleId = serde_json::from_str("1.5").unwrap();

        assert_eq!(a, b);
        assert_eq!(c.as_str(), "1.5");
    }

    #[test]
    fn untyped_and_malformed_blocks_are_unknown() {
        let blocks: Vec<ContentBlock> = serde_json::from_str(
            r#"[
                {"text": "no type"},
                {"type": "link", "text": "no target"},
                {"type": "paragraph"},
                "just a string",
                {"type": "paragraph", "text": "kept"}
            ]"#,
        )
        .unwrap();

        assert_eq!(blocks.len(), 5);
        assert!(blocks[..4].iter().all(|b| *b == ContentBlock::Unknown));
        assert_eq!(
            blocks[4],
            ContentBlock::Paragraph {
                text: "kept".to_string()
            }
        );
    }

    #[test]
    fn null_related_is_empty() {
        let article: Article = serde_json::from_str(
            r#"{"id": 1, "slug": "a", "title": "A", "related": null}"#,
        )
        .unwrap();

        assert!(article.related.is_empty());
    }

    #[test]
    fn site_language_defaults_to_english() {
        let site: Site =
            serde_json::from_str(r#"{"name": "Demo", "baseUrl": "https://x.test"}"#).unwrap();

        assert_eq!(site.lang, "en");
    }

    #[test]
    fn optional_article_fields_default() {
        let article: Article =
            serde_json::from_str(r#"{"id": "x", "slug": "x", "title": "X"}"#).unwrap();

        assert!(!article.published);
        assert!(article.content.is_empty());
        assert!(article.related.is_empty());
        assert_eq!(article.description, "");
    }

    #[test]
    fn builds_urls_from_slug() {
        let site = Site {
            name: "Demo".to_string(),
            base_url: "https://x.test".to_string(),
            lang: "en".to_string(),
        };
        let article: Article =
            serde_json::from_str(r#"{"id": 1, "slug": "a", "title": "A"}"#).unwrap();

        assert_eq!(article.href(), "/articles/a.html");
        assert_eq!(site.article_url(&article), "https://x.test/articles/a.html");
        assert_eq!(site.root_url(), "https://x.test/");
    }
}
