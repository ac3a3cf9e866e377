//! Static site generator for gazette article datasets.
//!
//! Renders one page per published article from a shared HTML template, a listing page and a
//! sitemap, and mirrors the static assets directory into the output.

pub mod assets;
pub mod builder;
pub mod escape;
pub mod merge;
pub mod pages;
pub mod render;
pub mod sitemap;
pub mod templates;

pub use builder::{BuildConfig, BuildError, BuildResult, StaticBuilder};
pub use escape::escape_html;
pub use merge::{merge, TemplateValues, Token};
pub use render::{render_content, render_related, Render};
pub use sitemap::Sitemap;
