//! YAML documents, position extraction, and declaration classifiers.
//!
//! This crate provides:
//! - [`YamlDocument`] - A parsed YAML file with line/column markers
//! - [`locate`] - The position extractor for declaration blocks
//! - [`classify`] - One classifier per top-level block kind
//! - [`extract_source`] - All typed declarations found in one file
//! - [`discover`] - Recursive discovery of `.yml`/`.yaml` files

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod classify;
pub mod discover;
pub mod document;
pub mod extract;
pub mod locate;


pub use discover::{DEFAULT_IGNORE, discover, is_yaml_path};
pub use document::YamlDocument;
pub use extract::{FileDeclarations, FileRole, extract_document, extract_file, extract_source};
pub use locate::{Located, locate, locate_scalar};
