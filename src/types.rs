//! Types shared by the collector and the renderer.

use serde::{Deserialize, Serialize};

/// The three categories a collected file can fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Pdf,
    Audio,
    Image,
}

impl MediaKind {
    /// Emission order on the board: PDFs, then audio, then images.
    pub const ALL: [MediaKind; 3] = [MediaKind::Pdf, MediaKind::Audio, MediaKind::Image];

    /// Key used in config files and console output.
    pub fn key(self) -> &'static str {
        match self {
            MediaKind::Pdf => "pdf",
            MediaKind::Audio => "audio",
            MediaKind::Image => "image",
        }
    }
}

/// Files found in one directory, split by category.
///
/// Each list keeps the order the directory listing produced. Entries are the
/// strings that end up in the page's `src` attributes: bare file names by
/// default, `<source>/<name>` when the collector is asked to prefix them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaSet {
    pub pdfs: Vec<String>,
    pub audios: Vec<String>,
    pub images: Vec<String>,
}

impl MediaSet {
    pub fn new(pdfs: Vec<String>, audios: Vec<String>, images: Vec<String>) -> Self {
        Self {
            pdfs,
            audios,
            images,
        }
    }

    pub fn get(&self, kind: MediaKind) -> &[String] {
        match kind {
            MediaKind::Pdf => &self.pdfs,
            MediaKind::Audio => &self.audios,
            MediaKind::Image => &self.images,
        }
    }

    pub(crate) fn push(&mut self, kind: MediaKind, entry: String) {
        match kind {
            MediaKind::Pdf => self.pdfs.push(entry),
            MediaKind::Audio => self.audios.push(entry),
            MediaKind::Image => self.images.push(entry),
        }
    }

    pub fn len(&self) -> usize {
        self.pdfs.len() + self.audios.len() + self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
