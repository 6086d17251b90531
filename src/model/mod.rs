//! Data model for citation resolution.
//!
//! These types bridge the upstream parser's output and the citation
//! records consumed by rendering and persistence. The model is
//! source-format agnostic: a [`Citation`] is a plain value with no
//! reference back to the content it was resolved against.

mod bbox;
mod block;
mod citation;
mod table;

pub use bbox::BoundingBox;
pub use block::ContentBlock;
pub use citation::{Citation, MdCitation, PdfCitation, TableCitation, TextCitation};
pub use table::Table;
