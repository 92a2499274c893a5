//! # media-board
//!
//! Turns a folder of PDFs, audio clips and images into a single HTML page
//! where every file sits in its own draggable, resizable box.
//!
//! # Pipeline
//!
//! ```text
//! 1. Scan    folder/   →  MediaSet       (directory listing → three lists)
//! 2. Render  MediaSet  →  <name>.html    (typed fragments → maud markup)
//! ```
//!
//! Both stages are plain functions: [`scan::scan`] and
//! [`render::render_page`]. [`build`] runs them back to back, which is what
//! the `media-board build` command does after asking for the name and folder.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Lists the source folder and sorts files into categories by extension |
//! | [`render`] | Builds the fragment list, renders it with Maud and writes the page |
//! | [`config`] | Extension-to-category mapping and scan switches, with stock defaults |
//! | [`types`] | `MediaKind` and `MediaSet`, shared by both stages |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Self-Contained Pages
//!
//! The stylesheet and the drag/resize script are compiled into the binary and
//! inlined into every page. A board is one file plus the media it points at;
//! there is nothing else to copy around.
//!
//! ## Paths Are Not Rewritten
//!
//! Entries are written into `src` attributes as collected. With the stock
//! config that is the bare file name, which the browser resolves next to the
//! HTML file, so boards are meant to be built from inside the media folder
//! (or with `scan.prefix_source = true`).
//!
//! ## Missing Files Are Not Fatal
//!
//! A file that disappears between the scan and the render is left off the
//! board with a warning. Every other failure (unreadable folder, unwritable
//! output, bad config) stops the run.

pub mod config;
pub mod output;
pub mod render;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;

use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    Scan(#[from] scan::ScanError),
    #[error(transparent)]
    Render(#[from] render::RenderError),
}

/// Scan `source` and write the board `<out_dir>/<name>.html`.
pub fn build(
    name: &str,
    source: &Path,
    out_dir: &Path,
    config: &config::BoardConfig,
) -> Result<render::RenderOutcome, BuildError> {
    let media = scan::scan(source, config)?;
    Ok(render::render_page(name, &media, out_dir)?)
}
