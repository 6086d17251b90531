//! # pincite
//!
//! Citation resolution for extracted document fields.
//!
//! Given a short text snippet asserted to appear in a named source
//! document, pincite locates that snippet precisely enough to render a
//! visual highlight: a bounding box on a PDF page, a cell or row in a
//! markdown table, or a plain text anchor.
//!
//! PDF sources are matched against the block tree produced by an
//! external document parser (pincite never reads PDF binaries itself).
//! Markdown sources go through a multi-stage fallback pipeline: table
//! cells and rows first, then verbatim and case-insensitive substring
//! search, then fuzzy similarity.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pincite::{resolver, SourceKind, SourceStore};
//!
//! fn main() -> pincite::Result<()> {
//!     let store = SourceStore::new("data");
//!
//!     match resolver::resolve(&store, "policy-2023", "$1,200", SourceKind::Pdf)? {
//!         Some(citation) => println!("{citation:?}"),
//!         None => println!("no match found"),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Guarantees
//!
//! - A substring hit always outranks any fuzzy match
//! - Absence of a match is `Ok(None)`, never an error
//! - Resolution is deterministic and side-effect free, so calls are
//!   safe to run concurrently and to retry

pub mod error;
pub mod markdown;
pub mod model;
pub mod resolver;
pub mod score;
pub mod store;

// Re-export commonly used types
pub use error::{Error, Result};
pub use markdown::{paragraphs, parse_tables, Paragraph};
pub use model::{
    BoundingBox, Citation, ContentBlock, MdCitation, PdfCitation, Table, TableCitation,
    TextCitation,
};
pub use resolver::{resolve_batch, ResolveRequest, SourceKind};
pub use score::score;
pub use store::SourceStore;

use std::path::Path;

/// Resolve a snippet against a source stored under `data_dir`.
///
/// Convenience wrapper over [`resolver::resolve`] for one-shot calls.
///
/// # Example
///
/// ```no_run
/// use pincite::SourceKind;
///
/// let citation = pincite::resolve("data", "claim-104", "A-991", SourceKind::Markdown).unwrap();
/// ```
pub fn resolve<P: AsRef<Path>>(
    data_dir: P,
    source_id: &str,
    snippet: &str,
    kind: SourceKind,
) -> Result<Option<Citation>> {
    let store = SourceStore::new(data_dir.as_ref());
    resolver::resolve(&store, source_id, snippet, kind)
}

/// Resolve a snippet against a parsed PDF source under `data_dir`.
pub fn resolve_pdf<P: AsRef<Path>>(
    data_dir: P,
    source_id: &str,
    snippet: &str,
) -> Result<Option<PdfCitation>> {
    let store = SourceStore::new(data_dir.as_ref());
    resolver::resolve_pdf(&store, source_id, snippet)
}

/// Resolve a snippet against a markdown source under `data_dir`.
pub fn resolve_markdown<P: AsRef<Path>>(
    data_dir: P,
    source_id: &str,
    snippet: &str,
) -> Result<Option<MdCitation>> {
    let store = SourceStore::new(data_dir.as_ref());
    resolver::resolve_markdown(&store, source_id, snippet)
}
