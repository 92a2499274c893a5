//! Console output for the CLI commands.
//!
//! Each command has a `format_*` function returning lines (pure, tested) and
//! a `print_*` wrapper writing them to stdout.
//!
//! ## Scan
//!
//! ```text
//! Scanned docs/
//! PDFs (1)
//!     001 a.pdf
//! Audio (0)
//! Images (2)
//!     001 c.png
//!     002 d.jpg
//! ```
//!
//! ## Build
//!
//! One warning per entry that disappeared before rendering, then the
//! confirmation line:
//!
//! ```text
//! Warning: File not found - gone.pdf
//! HTML file generated: notes.html
//! ```

use crate::render::RenderOutcome;
use crate::types::{MediaKind, MediaSet};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn section_title(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Pdf => "PDFs",
        MediaKind::Audio => "Audio",
        MediaKind::Image => "Images",
    }
}

/// Format the collected media set as one section per category.
pub fn format_scan_output(media: &MediaSet, source: &Path) -> Vec<String> {
    let mut lines = vec![format!("Scanned {}/", source.display())];
    for kind in MediaKind::ALL {
        let entries = media.get(kind);
        lines.push(format!("{} ({})", section_title(kind), entries.len()));
        for (i, entry) in entries.iter().enumerate() {
            lines.push(format!("    {} {}", format_index(i + 1), entry));
        }
    }
    lines
}

pub fn print_scan_output(media: &MediaSet, source: &Path) {
    for line in format_scan_output(media, source) {
        println!("{}", line);
    }
}

/// Format the result of writing a board.
pub fn format_render_output(outcome: &RenderOutcome) -> Vec<String> {
    let mut lines: Vec<String> = outcome
        .skipped
        .iter()
        .map(|entry| format!("Warning: File not found - {}", entry))
        .collect();
    lines.push(format!("HTML file generated: {}", outcome.file_name));
    lines
}

pub fn print_render_output(outcome: &RenderOutcome) {
    for line in format_render_output(outcome) {
        println!("{}", line);
    }
}
