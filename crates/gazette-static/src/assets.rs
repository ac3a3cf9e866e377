//! Static asset copying with optional CSS minification.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::builder::BuildError;

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Stylesheet written by `gazette init`.
    pub fn default_css() -> &'static str {
        DEFAULT_CSS
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }

    /// Mirror `src` into `dest`, returning the number of files written.
    ///
    /// A missing `src` copies nothing. With `minify`, `.css` files are minified; a stylesheet
    /// that fails to minify is copied unchanged.
    pub fn copy_dir(src: &Path, dest: &Path, minify: bool) -> Result<usize, BuildError> {
        if !src.exists() {
            tracing::debug!("No assets directory at {}", src.display());
            return Ok(0);
        }

        let mut copied = 0;

        for entry in WalkDir::new(src).follow_links(true) {
            let entry = entry.map_err(|e| BuildError::ReadError(e.to_string()))?;
            let path = entry.path();
            let relative = path.strip_prefix(src).unwrap_or(path);
            let target = dest.join(relative);

            if entry.file_type().is_dir() {
                fs::create_dir_all(&target).map_err(|e| BuildError::WriteError(e.to_string()))?;
                continue;
            }

            let is_css = path.extension().and_then(|e| e.to_str()) == Some("css");

            if minify && is_css {
                let css = fs::read_to_string(path)
                    .map_err(|e| BuildError::ReadError(format!("{}: {}", path.display(), e)))?;
                let css = Self::minify_css(&css).unwrap_or_else(|e| {
                    tracing::warn!("Copying {} unminified: {}", path.display(), e);
                    css
                });
                fs::write(&target, css).map_err(|e| BuildError::WriteError(e.to_string()))?;
            } else {
                fs::copy(path, &target).map_err(|e| BuildError::WriteError(e.to_string()))?;
            }

            copied += 1;
        }

        Ok(copied)
    }
}

const DEFAULT_CSS: &str = r#"* {
  box-sizing: border-box;
}

body {
  margin: 0;
  font-family: system-ui, -apple-system, sans-serif;
  line-height: 1.6;
  color: #1f2937;
  background: #ffffff;
}

.container {
  max-width: 760px;
  margin: 0 auto;
  padding: 0 1.25rem;
}

.site-header,
.site-footer {
  padding: 1rem 0;
  background: #f3f4f6;
}

.logo {
  font-weight: 700;
  color: #111827;
  text-decoration: none;
}

.index-article {
  padding: 1rem 0;
  border-bottom: 1px solid #e5e7eb;
}

.index-article h2 {
  margin: 0 0 0.25rem;
  font-size: 1.25rem;
}

.article a,
.index-article a {
  color: #2563eb;
}

.related-articles {
  margin-top: 2rem;
}

.related-articles a {
  text-decoration: none;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn minifies_css() {
        let css = r#"
.button {
    background-color: blue;
    padding: 10px;
}
        "#;

        let minified = AssetPipeline::minify_css(css).unwrap();

        assert!(!minified.contains('\n'));
        assert!(minified.contains(".button"));
    }

    #[test]
    fn default_css_minifies() {
        assert!(AssetPipeline::minify_css(AssetPipeline::default_css()).is_ok());
    }

    #[test]
    fn copies_nested_tree() {
        let temp = tempdir().unwrap();
        let src = temp.path().join("public");
        let dest = temp.path().join("dist/public");

        fs::create_dir_all(src.join("img")).unwrap();
        fs::write(src.join("script.js"), "console.log(1);").unwrap();
        fs::write(src.join("img/logo.svg"), "<svg/>").unwrap();

        let copied = AssetPipeline::copy_dir(&src, &dest, false).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(
            fs::read_to_string(dest.join("img/logo.svg")).unwrap(),
            "<svg/>"
        );
        assert!(dest.join("script.js").exists());
    }

    #[test]
    fn minifies_stylesheets_when_enabled() {
        let temp = tempdir().unwrap();
        let src = temp.path().join("public");
        let dest = temp.path().join("out");

        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("style.css"), ".a {\n  color: red;\n}\n").unwrap();

        AssetPipeline::copy_dir(&src, &dest, true).unwrap();

        let css = fs::read_to_string(dest.join("style.css")).unwrap();
        assert!(!css.contains('\n'));
        assert!(css.contains(".a"));
    }

    #[test]
    fn missing_source_copies_nothing() {
        let temp = tempdir().unwrap();

        let copied =
            AssetPipeline::copy_dir(&temp.path().join("nope"), &temp.path().join("out"), true)
                .unwrap();

        assert_eq!(copied, 0);
        assert!(!temp.path().join("out").exists());
    }
}
