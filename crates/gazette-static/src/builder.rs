//! Static site builder.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::Datelike;

use gazette_content::{load_dataset, ArticleIndex, Dataset, LoadError};

use crate::assets::AssetPipeline;
use crate::pages::{render_article_page, render_index_page};
use crate::sitemap::Sitemap;
use crate::templates::TemplateEngine;

/// Configuration for building a static site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Article dataset (JSON)
    pub data_path: PathBuf,

    /// Article page template
    pub template_path: PathBuf,

    /// Static assets directory, mirrored to `<output>/public`
    pub public_dir: Option<PathBuf>,

    /// Output directory
    pub output_dir: PathBuf,

    /// Minify copied stylesheets
    pub minify: bool,

    /// Year substituted into every page of this build
    pub year: i32,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("src/articles.json"),
            template_path: PathBuf::from("src/template.html"),
            public_dir: Some(PathBuf::from("public")),
            output_dir: PathBuf::from("dist"),
            minify: false,
            year: chrono::Local::now().year(),
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of article pages generated
    pub pages: usize,

    /// Number of unpublished articles skipped
    pub skipped: usize,

    /// Number of static asset files copied
    pub assets: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to load articles: {0}")]
    LoadError(#[from] LoadError),

    #[error("Failed to read input: {0}")]
    ReadError(String),

    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Static site builder.
pub struct StaticBuilder {
    config: BuildConfig,
    templates: TemplateEngine,
}

impl StaticBuilder {
    /// Create a new static builder.
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            templates: TemplateEngine::new(),
        }
    }

    /// Load the template and dataset, then build the site.
    ///
    /// Nothing is written if either input fails to load.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let template = fs::read_to_string(&self.config.template_path).map_err(|e| {
            BuildError::ReadError(format!("{}: {}", self.config.template_path.display(), e))
        })?;

        let dataset = load_dataset(&self.config.data_path)?;

        tracing::info!(
            "Loaded {} articles from {}",
            dataset.articles.len(),
            self.config.data_path.display()
        );

        self.build_with(&dataset, &template)
    }

    /// Build the site from an already loaded dataset and template.
    pub fn build_with(&self, dataset: &Dataset, template: &str) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        fs::create_dir_all(self.articles_dir())
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let index = ArticleIndex::new(&dataset.articles);

        let pages = self.generate_articles(dataset, &index, template)?;

        self.generate_index(dataset)?;

        let assets = self.copy_assets()?;

        self.generate_sitemap(dataset)?;

        let duration = start.elapsed();

        Ok(BuildResult {
            pages,
            skipped: dataset.articles.len() - pages,
            assets,
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    fn articles_dir(&self) -> PathBuf {
        self.config.output_dir.join("articles")
    }

    /// Write one page per published article.
    fn generate_articles(
        &self,
        dataset: &Dataset,
        index: &ArticleIndex<'_>,
        template: &str,
    ) -> Result<usize, BuildError> {
        let articles_dir = self.articles_dir();
        let mut pages = 0;

        for article in dataset.published() {
            let html =
                render_article_page(&dataset.site, article, index, template, self.config.year);

            let output_path = articles_dir.join(format!("{}.html", article.slug));
            write_file(&output_path, html)?;
            pages += 1;
        }

        Ok(pages)
    }

    /// Write the listing page.
    fn generate_index(&self, dataset: &Dataset) -> Result<(), BuildError> {
        let html = render_index_page(&self.templates, dataset, self.config.year)
            .map_err(|e| BuildError::TemplateError(e.to_string()))?;

        write_file(&self.config.output_dir.join("index.html"), html)
    }

    /// Mirror the static assets directory.
    fn copy_assets(&self) -> Result<usize, BuildError> {
        let Some(public_dir) = &self.config.public_dir else {
            return Ok(0);
        };

        let copied = AssetPipeline::copy_dir(
            public_dir,
            &self.config.output_dir.join("public"),
            self.config.minify,
        )?;

        if copied > 0 {
            tracing::info!("Copied {} assets from {}", copied, public_dir.display());
        }

        Ok(copied)
    }

    /// Write the sitemap.
    fn generate_sitemap(&self, dataset: &Dataset) -> Result<(), BuildError> {
        let sitemap = Sitemap::from_dataset(dataset);

        write_file(&self.config.output_dir.join("sitemap.xml"), sitemap.to_xml())
    }
}

fn write_file(path: &Path, contents: String) -> Result<(), BuildError> {
    fs::write(path, contents)
        .map_err(|e| BuildError::WriteError(format!("{}: {}", path.display(), e)))?;
    tracing::debug!("Wrote {}", path.display());
    Ok(())
}
