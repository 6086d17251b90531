//! PDF citation resolution: the best-scoring content block wins.

use crate::error::Result;
use crate::model::{ContentBlock, PdfCitation};
use crate::score::score;
use crate::store::SourceStore;

/// Minimum block score for a citation to be emitted.
const MIN_BLOCK_SCORE: f64 = 0.1;

/// Resolve a snippet against the parsed blocks of a PDF source.
///
/// Every block is scored; the maximum wins. On exact score ties the
/// block with the shorter text is preferred, since it yields the tighter
/// highlight region. Returns `None` when the source has no blocks or the
/// best score falls below the acceptance threshold.
pub fn resolve_pdf(
    store: &SourceStore,
    source_id: &str,
    snippet: &str,
) -> Result<Option<PdfCitation>> {
    let blocks = store.load_blocks(source_id)?;

    let mut best_score = 0.0_f64;
    let mut best: Option<&ContentBlock> = None;

    for block in &blocks {
        let s = score(&block.text, snippet);
        if s > best_score {
            best_score = s;
            best = Some(block);
        } else if s == best_score {
            if let Some(current) = best {
                if block.text.len() < current.text.len() {
                    best = Some(block);
                }
            }
        }
    }

    let Some(block) = best else {
        return Ok(None);
    };
    if best_score < MIN_BLOCK_SCORE {
        log::debug!(
            "best block for '{source_id}' scored {best_score:.3}, below threshold"
        );
        return Ok(None);
    }

    Ok(Some(PdfCitation {
        source_id: source_id.to_string(),
        page: block.bbox.page,
        bbox: block.bbox.rounded(),
    }))
}
