//! Directory scanning: the collector.
//!
//! Lists one directory (no recursion) and sorts the regular files in it into
//! PDFs, audio clips and images by extension. Everything else is dropped
//! without comment.
//!
//! ## Extension Matching
//!
//! By default the extension is the text between the first and the second dot
//! of the name, compared case-sensitively:
//!
//! ```text
//! report.pdf        → "pdf"   → PDF
//! song.mp3          → "mp3"   → audio
//! photo.JPG         → "JPG"   → dropped
//! a.b.pdf           → "b"     → dropped
//! .pdf              → "pdf"   → PDF
//! README            → (none)  → dropped
//! ```
//!
//! `a.b.pdf` not being a PDF is long-standing behavior that existing boards
//! rely on. [`ExtensionRule::LastSegment`] switches to the conventional
//! last-dot rule.
//!
//! ## Ordering
//!
//! Entries keep the order `read_dir` yields them in. Nothing is sorted, so the
//! order can differ between platforms and filesystems.

use crate::config::{BoardConfig, ExtensionRule};
use crate::types::MediaSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("cannot list {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Collect the media files directly inside `root`.
///
/// Fails if `root` does not exist or is not a directory.
pub fn scan(root: &Path, config: &BoardConfig) -> Result<MediaSet, ScanError> {
    let lookup = config.extensions.lookup();
    let mut media = MediaSet::default();

    let entries = fs::read_dir(root).map_err(|source| ScanError::ReadDir {
        path: root.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry?;
        let path = entry.path();

        // Follows symlinks, so a link to a regular file counts.
        if !path.is_file() {
            continue;
        }

        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            debug!(path = %path.display(), "skipping non UTF-8 file name");
            continue;
        };

        let kind = extension_of(name, config.scan.rule).and_then(|ext| lookup.get(ext).copied());
        let Some(kind) = kind else {
            debug!(name, "no media category");
            continue;
        };

        let reported = if config.scan.prefix_source {
            root.join(name).to_string_lossy().into_owned()
        } else {
            name.to_string()
        };
        debug!(name, kind = kind.key(), "collected");
        media.push(kind, reported);
    }

    info!(
        root = %root.display(),
        pdfs = media.pdfs.len(),
        audios = media.audios.len(),
        images = media.images.len(),
        "scan complete"
    );
    Ok(media)
}

/// Extract the extension segment of `name` under `rule`.
///
/// Returns `None` when the name has no dot.
pub fn extension_of(name: &str, rule: ExtensionRule) -> Option<&str> {
    match rule {
        ExtensionRule::FirstSegment => name.split('.').nth(1),
        ExtensionRule::LastSegment => name.rsplit_once('.').map(|(_, ext)| ext),
    }
}
