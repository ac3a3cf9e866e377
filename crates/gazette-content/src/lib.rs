//! Article dataset model for gazette.
//!
//! This crate provides the typed article dataset (site metadata, articles and their
//! content blocks), the identifier-keyed [`ArticleIndex`] used to resolve cross-references,
//! and the loader that reads the dataset from a JSON document.

pub mod index;
pub mod loader;
pub mod model;

pub use index::ArticleIndex;
pub use loader::{load_dataset, parse_dataset, LoadError};
pub use model::{Article, ArticleId, ContentBlock, Dataset, Site};
