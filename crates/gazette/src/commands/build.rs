//! Static site build command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Datelike;
use clap::Args;
use gazette_static::{BuildConfig, StaticBuilder};

use crate::config::{load_config, ConfigFile};

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Output directory (defaults to config or "dist")
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Minify copied stylesheets
    #[arg(long)]
    pub minify: bool,
}

/// Run the build command.
pub fn run(config_path: &Path, args: BuildArgs) -> Result<()> {
    tracing::info!("Building static site...");

    let file_config = load_config(config_path)?;
    let config = build_config(file_config, args, chrono::Local::now().year());

    let result = StaticBuilder::new(config).build()?;

    tracing::info!(
        "Built {} pages ({} unpublished skipped, {} assets) in {}ms",
        result.pages,
        result.skipped,
        result.assets,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}

/// Command-line flags take precedence over `gazette.toml`.
fn build_config(file_config: ConfigFile, args: BuildArgs, year: i32) -> BuildConfig {
    let ConfigFile { source, build } = file_config;

    BuildConfig {
        data_path: PathBuf::from(source.data),
        template_path: PathBuf::from(source.template),
        public_dir: Some(PathBuf::from(source.public)),
        output_dir: args.output.unwrap_or_else(|| PathBuf::from(build.output)),
        minify: args.minify || build.minify,
        year,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_config_file_when_no_flags() {
        let mut file_config = ConfigFile::default();
        file_config.build.output = "public_html".to_string();
        file_config.build.minify = true;

        let config = build_config(
            file_config,
            BuildArgs {
                output: None,
                minify: false,
            },
            2026,
        );

        assert_eq!(config.output_dir, PathBuf::from("public_html"));
        assert_eq!(config.data_path, PathBuf::from("src/articles.json"));
        assert!(config.minify);
        assert_eq!(config.year, 2026);
    }

    #[test]
    fn flags_override_config_file() {
        let config = build_config(
            ConfigFile::default(),
            BuildArgs {
                output: Some(PathBuf::from("out")),
                minify: true,
            },
            2026,
        );

        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert!(config.minify);
    }
}
