//! Article and listing page rendering.

use gazette_content::{Article, ArticleIndex, Dataset, Site};

use crate::merge::{merge, TemplateValues, Token};
use crate::render::{render_content, render_related};
use crate::templates::{ArticleCard, IndexContext, TemplateEngine};

/// Render the full page for one article by merging it into the site template.
///
/// Title, description and category go in unescaped.
pub fn render_article_page(
    site: &Site,
    article: &Article,
    index: &ArticleIndex<'_>,
    template: &str,
    year: i32,
) -> String {
    let values = TemplateValues::new()
        .with(Token::Title, article.title.as_str())
        .with(Token::Description, article.description.as_str())
        .with(Token::Category, article.category.as_str())
        .with(Token::Content, render_content(&article.content, index))
        .with(Token::RelatedLinks, render_related(&article.related, index))
        .with(Token::CanonicalUrl, site.article_url(article))
        .with(Token::Year, year.to_string());

    merge(template, &values)
}

/// Render the listing page for every published article.
pub fn render_index_page(
    engine: &TemplateEngine,
    dataset: &Dataset,
    year: i32,
) -> Result<String, minijinja::Error> {
    let context = IndexContext {
        site_name: dataset.site.name.clone(),
        lang: dataset.site.lang.clone(),
        year,
        articles: dataset.published().map(ArticleCard::from).collect(),
    };

    engine.render_index(&context)
}
