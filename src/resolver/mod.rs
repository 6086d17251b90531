//! Citation resolution pipelines and dispatch.
//!
//! Two independent pipelines compose under a single dispatch point,
//! selected by source type. Every call is a pure, synchronous
//! computation over data loaded fresh at entry, so dispatches share no
//! state and are safe to run concurrently and to retry.

mod markdown;
mod pdf;

pub use markdown::resolve_markdown;
pub use pdf::resolve_pdf;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::Citation;
use crate::store::SourceStore;

/// Which resolution pipeline handles a source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// A PDF source with upstream parse output.
    #[default]
    Pdf,
    /// A markdown source.
    #[serde(rename = "md")]
    Markdown,
}

/// One resolution request, for batch processing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveRequest {
    /// Identifier of the source to search.
    pub source_id: String,

    /// Snippet text to locate.
    pub snippet: String,

    /// Source type selector.
    #[serde(default, rename = "sourceType")]
    pub kind: SourceKind,
}

/// Route a resolution request to the matching pipeline.
///
/// Deterministic for fixed inputs: repeated calls with identical
/// arguments against unchanged source data yield identical citations.
pub fn resolve(
    store: &SourceStore,
    source_id: &str,
    snippet: &str,
    kind: SourceKind,
) -> Result<Option<Citation>> {
    match kind {
        SourceKind::Pdf => Ok(resolve_pdf(store, source_id, snippet)?.map(Citation::Pdf)),
        SourceKind::Markdown => {
            Ok(resolve_markdown(store, source_id, snippet)?.map(Citation::Md))
        }
    }
}

/// Resolve a batch of independent requests in parallel.
///
/// Requests are embarrassingly parallel: each one loads its own blocks
/// or tables and returns a fresh citation value. Output order matches
/// input order.
pub fn resolve_batch(
    store: &SourceStore,
    requests: &[ResolveRequest],
) -> Vec<Result<Option<Citation>>> {
    requests
        .par_iter()
        .map(|req| resolve(store, &req.source_id, &req.snippet, req.kind))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_kind_serde_names() {
        assert_eq!(serde_json::to_string(&SourceKind::Pdf).unwrap(), "\"pdf\"");
        assert_eq!(serde_json::to_string(&SourceKind::Markdown).unwrap(), "\"md\"");
        let parsed: SourceKind = serde_json::from_str("\"md\"").unwrap();
        assert_eq!(parsed, SourceKind::Markdown);
    }

    #[test]
    fn test_request_kind_defaults_to_pdf() {
        let req: ResolveRequest =
            serde_json::from_str(r#"{"sourceId":"a","snippet":"b"}"#).unwrap();
        assert_eq!(req.kind, SourceKind::Pdf);
    }
}
