//! Markdown citation resolution: a staged fallback pipeline.
//!
//! Stages run in strict priority order. Each stage is evaluated to
//! completion (the best match within that stage is found first); once a
//! stage accepts, lower stages never run:
//!
//! 1. table cell / row scan across all tables
//! 2. verbatim substring in the raw text
//! 3. case-insensitive substring, preserving the source's casing
//! 4. fuzzy match over table rows and non-table paragraphs

use crate::error::Result;
use crate::markdown::{paragraphs, parse_tables, Paragraph};
use crate::model::{MdCitation, Table, TableCitation, TextCitation};
use crate::score::{normalize_stripped, score, similarity_ratio};
use crate::store::SourceStore;

/// Minimum table score for stage 1 to accept.
const MIN_TABLE_SCORE: f64 = 0.4;
/// Minimum fuzzy ratio for a cell to be considered at all in stage 1.
const MIN_CELL_RATIO: f64 = 0.4;
/// Minimum score for the stage-4 fuzzy fallback to accept.
const MIN_FUZZY_SCORE: f64 = 0.2;

/// Separator used when scoring a table row as a single string.
const ROW_JOIN: &str = " | ";

/// Resolve a snippet against a markdown source.
///
/// Returns `None` when the source does not exist, the snippet is blank,
/// or no stage accepts.
pub fn resolve_markdown(
    store: &SourceStore,
    source_id: &str,
    snippet: &str,
) -> Result<Option<MdCitation>> {
    if snippet.trim().is_empty() {
        return Ok(None);
    }
    let Some(text) = store.load_markdown(source_id)? else {
        return Ok(None);
    };

    let tables = parse_tables(&text);
    log::debug!("source '{source_id}': {} tables parsed", tables.len());

    // Stage 1: best table cell or row across all tables.
    if let Some(hit) = best_table_match(&tables, snippet) {
        if hit.score >= MIN_TABLE_SCORE {
            log::debug!("stage 1 accepted at {:.3}", hit.score);
            return Ok(Some(MdCitation::Table(TableCitation {
                source_id: source_id.to_string(),
                table_index: hit.table_index,
                start_row: hit.row,
                start_col: hit.col,
                snippet: hit.snippet,
            })));
        }
    }

    // Stage 2: verbatim substring, echoing the query unchanged.
    if text.contains(snippet) {
        log::debug!("stage 2 accepted (verbatim)");
        return Ok(Some(MdCitation::Text(TextCitation {
            source_id: source_id.to_string(),
            snippet: snippet.to_string(),
        })));
    }

    // Stage 3: case-insensitive substring, carrying the source's casing.
    if let Some(found) = find_case_insensitive(&text, snippet) {
        log::debug!("stage 3 accepted (case-insensitive)");
        return Ok(Some(MdCitation::Text(TextCitation {
            source_id: source_id.to_string(),
            snippet: found.to_string(),
        })));
    }

    // Stage 4: fuzzy fallback over table rows and paragraphs.
    let paras = paragraphs(&text, &tables);
    Ok(fuzzy_fallback(&tables, &paras, snippet).map(|winner| match winner {
        FuzzyWinner::Row {
            table_index,
            row,
            text,
        } => MdCitation::Table(TableCitation {
            source_id: source_id.to_string(),
            table_index,
            start_row: row,
            start_col: None,
            snippet: text,
        }),
        FuzzyWinner::Paragraph(text) => MdCitation::Text(TextCitation {
            source_id: source_id.to_string(),
            snippet: text,
        }),
    }))
}

struct TableHit {
    score: f64,
    table_index: usize,
    row: usize,
    col: Option<usize>,
    snippet: String,
}

/// Find the single best-scoring cell or row across all tables.
///
/// Ties resolve to the first-found maximum: later candidates replace the
/// leader only with a strictly greater score.
fn best_table_match(tables: &[Table], snippet: &str) -> Option<TableHit> {
    let snip = normalize_stripped(snippet);
    if snip.is_empty() {
        return None;
    }
    let snip_len = snip.chars().count() as f64;

    let mut best: Option<TableHit> = None;

    for (table_index, table) in tables.iter().enumerate() {
        for (row_index, row) in table.rows.iter().enumerate() {
            for (col_index, cell) in row.iter().enumerate() {
                let cell_n = normalize_stripped(cell);
                if cell_n.is_empty() {
                    continue;
                }
                let cell_len = cell_n.chars().count() as f64;

                let cell_score = if cell_n.contains(&snip) || snip.contains(&cell_n) {
                    let coverage = snip_len.min(cell_len) / snip_len.max(cell_len);
                    0.5 + coverage * 0.5
                } else {
                    let ratio = similarity_ratio(&cell_n, &snip);
                    if ratio < MIN_CELL_RATIO {
                        continue;
                    }
                    // Kept below the substring floor.
                    ratio * 0.49
                };

                if best.as_ref().map_or(true, |b| cell_score > b.score) {
                    best = Some(TableHit {
                        score: cell_score,
                        table_index,
                        row: row_index,
                        col: Some(col_index),
                        snippet: cell.trim().to_string(),
                    });
                }
            }

            // Row-spanning match: cells joined and scored as one string.
            let joined = row.join(ROW_JOIN);
            let row_n = normalize_stripped(&joined);
            if !row_n.is_empty() && row_n.contains(&snip) {
                let row_len = row_n.chars().count() as f64;
                let row_score = 0.6 + (snip_len / row_len) * 0.3;
                if best.as_ref().map_or(true, |b| row_score > b.score) {
                    best = Some(TableHit {
                        score: row_score,
                        table_index,
                        row: row_index,
                        col: None,
                        snippet: joined,
                    });
                }
            }
        }
    }

    best
}

/// Locate `needle` in `haystack` ignoring case, returning the matched
/// slice of the original text. Works on chars, so casing differences
/// that change byte lengths are handled.
fn find_case_insensitive<'a>(haystack: &'a str, needle: &str) -> Option<&'a str> {
    let needle_lc: Vec<char> = needle.chars().flat_map(char::to_lowercase).collect();
    if needle_lc.is_empty() {
        return None;
    }

    for (start, _) in haystack.char_indices() {
        let mut matched = 0usize;
        for (offset, ch) in haystack[start..].char_indices() {
            let mut ok = true;
            for lc in ch.to_lowercase() {
                if matched >= needle_lc.len() || needle_lc[matched] != lc {
                    ok = false;
                    break;
                }
                matched += 1;
            }
            if !ok {
                break;
            }
            if matched == needle_lc.len() {
                let end = start + offset + ch.len_utf8();
                return Some(&haystack[start..end]);
            }
        }
    }

    None
}

enum FuzzyWinner {
    Row {
        table_index: usize,
        row: usize,
        text: String,
    },
    Paragraph(String),
}

/// Stage 4: score the snippet against every table row and every
/// non-table paragraph; keep the single best across both pools.
fn fuzzy_fallback(tables: &[Table], paras: &[Paragraph], snippet: &str) -> Option<FuzzyWinner> {
    let mut best_score = 0.0_f64;
    let mut winner: Option<FuzzyWinner> = None;

    for (table_index, table) in tables.iter().enumerate() {
        for (row_index, row) in table.rows.iter().enumerate() {
            let joined = row.join(ROW_JOIN);
            let s = score(&joined, snippet);
            if s > best_score {
                best_score = s;
                winner = Some(FuzzyWinner::Row {
                    table_index,
                    row: row_index,
                    text: joined,
                });
            }
        }
    }

    for para in paras {
        let s = score(&para.text, snippet);
        if s > best_score {
            best_score = s;
            winner = Some(FuzzyWinner::Paragraph(para.text.clone()));
        }
    }

    if best_score < MIN_FUZZY_SCORE {
        log::debug!("stage 4 best {best_score:.3}, below threshold");
        return None;
    }
    winner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::parse_tables;

    #[test]
    fn test_find_case_insensitive_basic() {
        assert_eq!(
            find_case_insensitive("The Policyholder agrees", "the policyholder"),
            Some("The Policyholder")
        );
        assert_eq!(find_case_insensitive("abc", "xyz"), None);
        assert_eq!(find_case_insensitive("abc", ""), None);
    }

    #[test]
    fn test_find_case_insensitive_preserves_source_casing() {
        let found = find_case_insensitive("see EXHIBIT A for details", "Exhibit a").unwrap();
        assert_eq!(found, "EXHIBIT A");
    }

    #[test]
    fn test_find_case_insensitive_non_ascii() {
        // 'İ' lowercases to two chars; a partial match must not panic or
        // yield a bogus slice.
        assert_eq!(find_case_insensitive("İstanbul", "i\u{307}stanbul"), Some("İstanbul"));
        assert_eq!(find_case_insensitive("straße", "STRASSE"), None);
    }

    #[test]
    fn test_best_table_match_prefers_first_found_maximum() {
        // Two identical cells in different tables; the earlier table wins.
        let tables = parse_tables(
            "| A |\n|---|\n| same-value |\n\n| B |\n|---|\n| same-value |",
        );
        let hit = best_table_match(&tables, "same-value").unwrap();
        assert_eq!(hit.table_index, 0);
        assert_eq!(hit.row, 1);
        assert_eq!(hit.col, Some(0));
    }

    #[test]
    fn test_best_table_match_row_span() {
        let tables = parse_tables("| Coverage | Limit |\n|---|---|\n| Collision | $500 |");
        // The query spans both cells of the data row.
        let hit = best_table_match(&tables, "Collision | $500").unwrap();
        assert_eq!(hit.row, 1);
        assert_eq!(hit.col, None);
        assert!(hit.score >= 0.6);
    }
}
