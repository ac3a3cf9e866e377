//! XML sitemap generation.

use gazette_content::Dataset;

use crate::escape::escape_html;

/// XML namespace for sitemaps.
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Sitemap URL list: the site root, then every published article in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Sitemap {
    urls: Vec<String>,
}

impl Sitemap {
    /// Collect sitemap URLs from a dataset.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let site = &dataset.site;

        let urls = std::iter::once(site.root_url())
            .chain(dataset.published().map(|a| site.article_url(a)))
            .collect();

        Self { urls }
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    /// Generate sitemap XML.
    pub fn to_xml(&self) -> String {
        let entries: Vec<String> = self
            .urls
            .iter()
            .map(|url| format!("  <url>\n    <loc>{}</loc>\n  </url>", escape_html(url)))
            .collect();

        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"{}\">\n{}\n</urlset>\n",
            SITEMAP_NS,
            entries.join("\n")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gazette_content::parse_dataset;

    fn dataset() -> Dataset {
        parse_dataset(
            r#"{
  "site": { "name": "Demo", "baseUrl": "https://x.test" },
  "articles": [
    { "id": 1, "slug": "b", "title": "B", "published": true },
    { "id": 2, "slug": "hidden", "title": "H", "published": false },
    { "id": 3, "slug": "a", "title": "A", "published": true }
  ]
}"#,
        )
        .unwrap()
    }

    #[test]
    fn lists_root_then_published_articles_in_order() {
        let sitemap = Sitemap::from_dataset(&dataset());

        assert_eq!(
            sitemap.urls(),
            [
                "https://x.test/",
                "https://x.test/articles/b.html",
                "https://x.test/articles/a.html",
            ]
        );
    }

    #[test]
    fn generates_urlset_document() {
        let xml = Sitemap::from_dataset(&dataset()).to_xml();

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#));
        assert!(xml.contains("<loc>https://x.test/articles/b.html</loc>"));
        assert!(!xml.contains("hidden"));
        assert!(!xml.contains("lastmod"));
        assert_eq!(xml.matches("<url>").count(), 3);
    }

    #[test]
    fn escapes_ampersands_in_locations() {
        let dataset = parse_dataset(
            r#"{ "site": { "name": "D", "baseUrl": "https://x.test/?a=1&b=2" }, "articles": [] }"#,
        )
        .unwrap();

        let xml = Sitemap::from_dataset(&dataset).to_xml();

        assert!(xml.contains("<loc>https://x.test/?a=1&amp;b=2/</loc>"));
    }
}
