//! Access to parsed sources on disk.
//!
//! The store is the adapter between the upstream parser's output schema
//! and the resolution pipelines: it flattens the chunk/block tree into
//! filtered content blocks and hides the on-disk layout from everything
//! downstream.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::model::{BoundingBox, ContentBlock};

/// Block types excluded from citation matching. Navigational, not content.
const SKIP_TYPES: &[&str] = &["Page Number", "Footer"];

/// Reads parse outputs and markdown sources from one data directory.
///
/// Sources are addressed by a stable slug: `<id>.parsed.json` holds the
/// upstream parse output for a PDF source, `<id>.md` holds a markdown
/// source. The store holds no per-source state, so a single instance is
/// safe to share across threads.
#[derive(Debug, Clone)]
pub struct SourceStore {
    data_dir: PathBuf,
}

/// Upstream parse output. The chunk tree appears either under a `result`
/// key or at the top level; both shapes must be accepted.
#[derive(Deserialize)]
struct ParseOutput {
    result: Option<ChunkList>,
    #[serde(default)]
    chunks: Vec<RawChunk>,
}

#[derive(Deserialize)]
struct ChunkList {
    #[serde(default)]
    chunks: Vec<RawChunk>,
}

#[derive(Deserialize)]
struct RawChunk {
    #[serde(default)]
    blocks: Vec<RawBlock>,
}

#[derive(Deserialize)]
struct RawBlock {
    #[serde(rename = "type", default)]
    block_type: String,
    #[serde(default)]
    content: String,
    bbox: Option<BoundingBox>,
}

impl SourceStore {
    /// Create a store over the given data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Get the directory this store reads from.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load the filtered content blocks for a source.
    ///
    /// Blocks with a skipped type, empty text, or no bounding box are
    /// dropped. A missing parse output is not an error: it yields an
    /// empty list, which resolvers treat as "no match possible".
    pub fn load_blocks(&self, source_id: &str) -> Result<Vec<ContentBlock>> {
        let path = self.parse_output_path(source_id);
        if !path.exists() {
            log::debug!("no parse output for source '{source_id}'");
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&path)?;
        let output: ParseOutput =
            serde_json::from_str(&raw).map_err(|e| Error::MalformedParseOutput {
                source_id: source_id.to_string(),
                message: e.to_string(),
            })?;

        let chunks = match output.result {
            Some(result) => result.chunks,
            None => output.chunks,
        };

        let mut blocks = Vec::new();
        for chunk in chunks {
            for block in chunk.blocks {
                if SKIP_TYPES.contains(&block.block_type.as_str()) {
                    continue;
                }
                if block.content.trim().is_empty() {
                    continue;
                }
                let Some(bbox) = block.bbox else {
                    continue;
                };
                blocks.push(ContentBlock {
                    text: block.content,
                    bbox,
                });
            }
        }

        log::debug!("loaded {} content blocks for source '{source_id}'", blocks.len());
        Ok(blocks)
    }

    /// Load the raw markdown text for a source, if present.
    pub fn load_markdown(&self, source_id: &str) -> Result<Option<String>> {
        let path = self.markdown_path(source_id);
        if !path.exists() {
            log::debug!("no markdown source '{source_id}'");
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    fn parse_output_path(&self, source_id: &str) -> PathBuf {
        self.data_dir.join(format!("{source_id}.parsed.json"))
    }

    fn markdown_path(&self, source_id: &str) -> PathBuf {
        self.data_dir.join(format!("{source_id}.md"))
    }
}
