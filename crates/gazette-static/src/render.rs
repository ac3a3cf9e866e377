//! Content block and related-link rendering.
//!
//! Cross-references are resolved through the [`ArticleIndex`] by identifier. A reference that
//! does not resolve renders to nothing, as does any block kind this version does not know.

use gazette_content::{Article, ArticleId, ArticleIndex, ContentBlock};

use crate::escape::escape_html;

/// Something that renders to an HTML fragment.
pub trait Render {
    /// Render to HTML, resolving cross-references against `index`.
    ///
    /// Never fails: anything that cannot be rendered yields an empty string.
    fn render(&self, index: &ArticleIndex<'_>) -> String;
}

impl Render for ContentBlock {
    fn render(&self, index: &ArticleIndex<'_>) -> String {
        match self {
            ContentBlock::Paragraph { text } => format!("<p>{}</p>", escape_html(text)),
            ContentBlock::Link { text, target } => match index.get(target) {
                Some(article) => format!(
                    r#"<p><a href="{}">{}</a></p>"#,
                    article.href(),
                    escape_html(text)
                ),
                None => String::new(),
            },
            ContentBlock::Unknown => String::new(),
        }
    }
}

/// Render an article body, one fragment per block, newline separated.
pub fn render_content(blocks: &[ContentBlock], index: &ArticleIndex<'_>) -> String {
    blocks
        .iter()
        .map(|block| block.render(index))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the list items for an article's related links, in the given order.
pub fn render_related(ids: &[ArticleId], index: &ArticleIndex<'_>) -> String {
    ids.iter()
        .filter_map(|id| index.get(id))
        .map(related_item)
        .collect::<Vec<_>>()
        .join("\n")
}

fn related_item(article: &Article) -> String {
    format!(
        r#"<li><a href="{}">{}</a></li>"#,
        article.href(),
        escape_html(&article.title)
    )
}
