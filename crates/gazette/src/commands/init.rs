//! Scaffold a new site.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use gazette_static::assets::AssetPipeline;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite existing files
    #[arg(short, long)]
    pub yes: bool,
}

/// Run the init command.
pub fn run(config_path: &Path, args: InitArgs) -> Result<()> {
    tracing::info!("Initializing gazette site...");

    let written = scaffold(Path::new("."), config_path, args.yes)?;

    tracing::info!("Initialization complete! ({} files written)", written);
    tracing::info!("Run 'gazette build' to generate the site.");

    Ok(())
}

/// Write the starter files under `root`, keeping existing files unless `overwrite` is set.
fn scaffold(root: &Path, config_path: &Path, overwrite: bool) -> Result<usize> {
    let files = [
        (root.join(config_path), DEFAULT_CONFIG),
        (root.join("src/articles.json"), DEFAULT_ARTICLES),
        (root.join("src/template.html"), DEFAULT_TEMPLATE),
        (root.join("public/style.css"), AssetPipeline::default_css()),
    ];

    let mut written = 0;

    for (path, content) in files {
        if path.exists() && !overwrite {
            tracing::warn!("{} already exists. Use --yes to overwrite.", path.display());
            continue;
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("Created {}", path.display());
        written += 1;
    }

    Ok(written)
}

const DEFAULT_CONFIG: &str = r#"# Gazette Configuration

[source]
# Article dataset
data = "src/articles.json"

# Article page template
template = "src/template.html"

# Static assets, copied to <output>/public
public = "public"

[build]
# Output directory for built site
output = "dist"

# Minify copied stylesheets
minify = false
"#;

const DEFAULT_ARTICLES: &str = r#"{
  "site": {
    "name": "My Gazette",
    "baseUrl": "https://example.com"
  },
  "articles": [
    {
      "id": 1,
      "slug": "getting-started",
      "title": "Getting started",
      "description": "How this site is put together.",
      "category": "Guides",
      "published": true,
      "content": [
        { "type": "paragraph", "text": "Articles live in src/articles.json." },
        { "type": "link", "text": "Next: linking articles", "target": 2 }
      ],
      "related": [2]
    },
    {
      "id": 2,
      "slug": "linking-articles",
      "title": "Linking articles",
      "description": "Links go through ids, so slugs can change.",
      "category": "Guides",
      "published": true,
      "content": [
        { "type": "paragraph", "text": "Link blocks and related lists name the target id, never its slug." }
      ],
      "related": [1]
    },
    {
      "id": 3,
      "slug": "work-in-progress",
      "title": "Work in progress",
      "description": "Unpublished articles are not built.",
      "category": "Drafts",
      "published": false,
      "content": []
    }
  ]
}
"#;

const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <title>{{title}}</title>
  <meta name="description" content="{{description}}" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <link rel="canonical" href="{{canonicalUrl}}" />
  <link rel="stylesheet" href="/public/style.css" />
</head>
<body>

<header class="site-header">
  <div class="container">
    <a href="/" class="logo">Home</a>
  </div>
</header>

<main class="container">
  <article class="article">
    <p class="category">{{category}}</p>
    <h1>{{title}}</h1>
    {{content}}
  </article>

  <section class="related-articles">
    <h2>Read next</h2>
    <ul>
      {{relatedLinks}}
    </ul>
  </section>
</main>

<footer class="site-footer">
  <div class="container">
    <p>&copy; {{year}}</p>
  </div>
</footer>

</body>
</html>
"#;
