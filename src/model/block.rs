//! Content blocks delivered by the upstream document parser.

use super::BoundingBox;

/// One content unit of a parsed source, after loader filtering.
///
/// The loader guarantees non-empty text and a present bounding box;
/// navigational block types (page numbers, footers) are already removed.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentBlock {
    /// Block text as produced by the parser. May contain inline HTML,
    /// e.g. for table content.
    pub text: String,

    /// Normalized page geometry of the block.
    pub bbox: BoundingBox,
}
