//! Citation output types.

use serde::{Deserialize, Serialize};

use super::BoundingBox;

/// The resolved location of a snippet within a source document.
///
/// Serialized as a tagged union with a `type` discriminant of `"pdf"` or
/// `"md"`. A citation is a value: constructed fresh per resolution
/// request, never mutated, and carries no back-reference to the source
/// content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Citation {
    /// A bounding-box reference into a parsed PDF source.
    #[serde(rename = "pdf")]
    Pdf(PdfCitation),

    /// A reference into a markdown source.
    #[serde(rename = "md")]
    Md(MdCitation),
}

/// A visual highlight region on a PDF page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfCitation {
    /// Identifier of the source document.
    pub source_id: String,

    /// 1-indexed page number of the winning block.
    pub page: u32,

    /// Block geometry, rounded to 6 decimal digits.
    pub bbox: BoundingBox,
}

/// A markdown citation: either a table region or a raw text anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MdCitation {
    /// The snippet matched a table cell or table row.
    Table(TableCitation),

    /// The snippet matched body text outside any table.
    Text(TextCitation),
}

/// A cell or row region inside a markdown table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCitation {
    /// Identifier of the source document.
    pub source_id: String,

    /// Zero-based index of the table within the document.
    pub table_index: usize,

    /// Zero-based row index within the table (0 = header row).
    pub start_row: usize,

    /// Zero-based column index. Present only for single-cell matches;
    /// absent when the match spans a full row.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_col: Option<usize>,

    /// The matched source text: the cell text for cell hits, the joined
    /// row text for row hits.
    pub snippet: String,
}

/// A plain text anchor into a markdown source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextCitation {
    /// Identifier of the source document.
    pub source_id: String,

    /// The matched text, with the casing it has in the source.
    pub snippet: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_citation_tag() {
        let citation = Citation::Pdf(PdfCitation {
            source_id: "policy-2023".to_string(),
            page: 2,
            bbox: BoundingBox {
                page: 2,
                left: 0.1,
                top: 0.2,
                width: 0.3,
                height: 0.05,
            },
        });

        let json: serde_json::Value = serde_json::to_value(&citation).unwrap();
        assert_eq!(json["type"], "pdf");
        assert_eq!(json["sourceId"], "policy-2023");
        assert_eq!(json["page"], 2);
        assert_eq!(json["bbox"]["left"], 0.1);
    }

    #[test]
    fn test_table_citation_omits_absent_start_col() {
        let citation = Citation::Md(MdCitation::Table(TableCitation {
            source_id: "claim-7".to_string(),
            table_index: 1,
            start_row: 3,
            start_col: None,
            snippet: "Collision | $500 deductible".to_string(),
        }));

        let json: serde_json::Value = serde_json::to_value(&citation).unwrap();
        assert_eq!(json["type"], "md");
        assert_eq!(json["tableIndex"], 1);
        assert_eq!(json["startRow"], 3);
        assert!(json.get("startCol").is_none());
    }

    #[test]
    fn test_md_citation_round_trip() {
        let table = Citation::Md(MdCitation::Table(TableCitation {
            source_id: "claim-7".to_string(),
            table_index: 0,
            start_row: 1,
            start_col: Some(2),
            snippet: "A-991".to_string(),
        }));
        let text = Citation::Md(MdCitation::Text(TextCitation {
            source_id: "claim-7".to_string(),
            snippet: "The Policyholder".to_string(),
        }));

        for citation in [table, text] {
            let json = serde_json::to_string(&citation).unwrap();
            let parsed: Citation = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, citation);
        }
    }
}
