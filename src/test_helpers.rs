//! Shared test utilities for the media-board test suite.
//!
//! Fixture builders create throwaway source folders; the HTML helpers count
//! tags in rendered output without pulling in a parser.
//!
//! ```text
//! use crate::config::BoardConfig;
//! use crate::scan::scan;
//! use crate::test_helpers::*;
//!
//! let tmp = media_dir(&["a.pdf", "b.mp3"]);
//! let media = scan(tmp.path(), &BoardConfig::default()).unwrap();
//! assert!(contains_anywhere(&media, "a.pdf"));
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::types::{MediaKind, MediaSet};

// =========================================================================
// Fixture setup
// =========================================================================

/// Create a temp directory holding one small file per name.
pub fn media_dir(names: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for name in names {
        touch(tmp.path(), name);
    }
    tmp
}

/// Write a placeholder file. Contents are never inspected.
pub fn touch(dir: &Path, name: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, b"placeholder").unwrap();
    path.to_string_lossy().into_owned()
}

// =========================================================================
// MediaSet lookups
// =========================================================================

/// Names in a list, sorted, for order-insensitive comparison.
pub fn sorted(entries: &[String]) -> Vec<&str> {
    let mut names: Vec<&str> = entries.iter().map(String::as_str).collect();
    names.sort_unstable();
    names
}

/// Whether `entry` landed in any category.
pub fn contains_anywhere(media: &MediaSet, entry: &str) -> bool {
    MediaKind::ALL
        .iter()
        .any(|&kind| media.get(kind).iter().any(|e| e == entry))
}

// =========================================================================
// HTML assertions
// =========================================================================

/// Count opening tags `<tag` followed by a space or `>`.
pub fn count_tags(html: &str, tag: &str) -> usize {
    let open = format!("<{tag}");
    html.match_indices(&open)
        .filter(|(idx, _)| {
            matches!(
                html[idx + open.len()..].chars().next(),
                Some(' ') | Some('>')
            )
        })
        .count()
}

/// Count elements carrying `class="container"`.
pub fn count_containers(html: &str) -> usize {
    html.matches(r#"class="container""#).count()
}
