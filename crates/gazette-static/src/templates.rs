//! Built-in listing page template.

use minijinja::{context, AutoEscape, Environment};

use gazette_content::Article;

use crate::escape::escape_html;

/// A summary card on the listing page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ArticleCard {
    /// Article title, unescaped
    pub title: String,
    /// Short summary, unescaped
    pub description: String,
    /// Site-relative link to the article page
    pub href: String,
}

impl From<&Article> for ArticleCard {
    fn from(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            description: article.description.clone(),
            href: article.href(),
        }
    }
}

/// Context for rendering the listing page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct IndexContext {
    /// Site name
    pub site_name: String,
    /// Page language, e.g. `en` or `fr`
    pub lang: String,
    /// Build year shown in the footer
    pub year: i32,
    /// Cards in display order
    pub articles: Vec<ArticleCard>,
}

/// Template engine using minijinja.
///
/// Auto-escaping is off; text is escaped explicitly with the `text` filter, which only touches
/// `&`, `<` and `>` so the listing matches the article pages.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_filter("text", |value: String| escape_html(&value));

        env.add_template_owned("index.html".to_string(), INDEX_TEMPLATE.to_string())
            .expect("Failed to add index template");

        Self { env }
    }

    /// Render the listing page.
    pub fn render_index(&self, context: &IndexContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("index.html")?;

        tmpl.render(context! {
            site_name => &context.site_name,
            lang => &context.lang,
            heading => index_heading(&context.lang),
            year => context.year,
            articles => &context.articles,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Listing page heading for a language; English when the language has no translation.
fn index_heading(lang: &str) -> &'static str {
    let primary = lang.split(['-', '_']).next().unwrap_or(lang);

    match primary.to_ascii_lowercase().as_str() {
        "fr" => "Articles récents",
        "de" => "Neueste Artikel",
        "es" => "Artículos recientes",
        _ => "Recent articles",
    }
}

const INDEX_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="{{ lang }}">
<head>
  <meta charset="UTF-8" />
  <title>{{ site_name }}</title>
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <link rel="stylesheet" href="/public/style.css" />
</head>
<body>

<header class="site-header">
  <div class="container">
    <a href="/" class="logo">{{ site_name }}</a>
  </div>
</header>

<main class="container">
  <h1>{{ heading }}</h1>
{% for article in articles %}
  <article class="index-article">
    <h2>
      <a href="{{ article.href }}">{{ article.title | text }}</a>
    </h2>
    <p>{{ article.description | text }}</p>
  </article>
{% endfor %}
</main>

<footer class="site-footer">
  <div class="container">
    <p>&copy; {{ year }} {{ site_name }}</p>
  </div>
</footer>

</body>
</html>
"##;
