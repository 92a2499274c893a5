//! HTML board rendering: the renderer.
//!
//! Turns a [`MediaSet`] into one self-contained HTML page and writes it to
//! `<name>.html`.
//!
//! ## Page Layout
//!
//! ```text
//! <head>   title, inline stylesheet, inline drag/resize script
//! <body>
//!   <h1>   board name
//!   .container × PDFs     <iframe src=…>
//!   .container × audios   <p>name</p> <audio id=name src=… controls>
//!   .container × images   <img src=… alt=name>
//! ```
//!
//! Every `.container` starts at the top-left corner; the embedded script lets
//! the viewer drag boxes around and resize them from the bottom-right corner.
//! The stylesheet and script are static assets compiled into the binary and
//! identical on every board.
//!
//! ## Two Steps
//!
//! [`assemble`] checks each entry still exists and turns the survivors into
//! typed [`Fragment`]s. [`render_document`] turns those fragments into markup.
//! Entries that vanished since the scan are reported back, not rendered.
//!
//! ## Escaping
//!
//! All names and paths go through maud's escaping, in attributes and text
//! alike. Only the two static assets are inserted pre-escaped.

use crate::types::{MediaKind, MediaSet};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const CSS: &str = include_str!("../static/board.css");
const JS: &str = include_str!("../static/board.js");

/// One embedded file on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// A PDF shown in an inline frame.
    Frame { src: String },
    /// An audio clip with a label and a player. `name` is the base name.
    Audio { src: String, name: String },
    /// An image. `name` is the base name, used as alt text.
    Image { src: String, name: String },
}

impl Fragment {
    fn new(kind: MediaKind, src: &str) -> Self {
        let src = src.to_string();
        match kind {
            MediaKind::Pdf => Fragment::Frame { src },
            MediaKind::Audio => Fragment::Audio {
                name: base_name(&src),
                src,
            },
            MediaKind::Image => Fragment::Image {
                name: base_name(&src),
                src,
            },
        }
    }

    pub fn kind(&self) -> MediaKind {
        match self {
            Fragment::Frame { .. } => MediaKind::Pdf,
            Fragment::Audio { .. } => MediaKind::Audio,
            Fragment::Image { .. } => MediaKind::Image,
        }
    }
}

/// A board ready to render: its title and fragments in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub fragments: Vec<Fragment>,
}

impl Document {
    pub fn count(&self, kind: MediaKind) -> usize {
        self.fragments.iter().filter(|f| f.kind() == kind).count()
    }
}

/// Result of writing a board to disk.
#[derive(Debug, Clone)]
pub struct RenderOutcome {
    /// Full path of the written page.
    pub output: PathBuf,
    /// `<name>.html`, as reported to the user.
    pub file_name: String,
    pub pdfs: usize,
    pub audios: usize,
    pub images: usize,
    /// Entries missing at render time, in the order they were met.
    pub skipped: Vec<String>,
}

/// Build the fragment list for `media`, dropping entries that no longer exist.
///
/// Existence is checked on each entry exactly as given, so bare file names
/// resolve against the current working directory. Returns the document and
/// the skipped entries.
pub fn assemble(name: &str, media: &MediaSet) -> (Document, Vec<String>) {
    let mut fragments = Vec::with_capacity(media.len());
    let mut skipped = Vec::new();

    for kind in MediaKind::ALL {
        for entry in media.get(kind) {
            if Path::new(entry).exists() {
                fragments.push(Fragment::new(kind, entry));
            } else {
                debug!(entry = %entry, kind = kind.key(), "file not found, skipping");
                skipped.push(entry.clone());
            }
        }
    }

    let document = Document {
        title: name.to_string(),
        fragments,
    };
    (document, skipped)
}

/// Render a document to a complete HTML page.
pub fn render_document(document: &Document) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (document.title) }
                style { (PreEscaped(CSS)) }
                script { (PreEscaped(JS)) }
            }
            body {
                h1 style="width: 100%; text-align: center;" { (document.title) }
                @for fragment in &document.fragments {
                    (render_fragment(fragment))
                }
            }
        }
    }
}

/// Renders one draggable container
fn render_fragment(fragment: &Fragment) -> Markup {
    html! {
        div.container style="left: 0; top: 0;" {
            @match fragment {
                Fragment::Frame { src } => {
                    iframe src=(src) frameborder="0" {}
                }
                Fragment::Audio { src, name } => {
                    p style="padding: 0px; margin: 0px;" { (name) }
                    audio id=(name) src=(src) controls {}
                }
                Fragment::Image { src, name } => {
                    img src=(src) alt=(name);
                }
            }
        }
    }
}

/// Assemble, render and write the board for `media` to `<out_dir>/<name>.html`.
///
/// An existing file of that name is overwritten. The page is written in one
/// go after rendering, so a failure never leaves a partial file behind.
pub fn render_page(
    name: &str,
    media: &MediaSet,
    out_dir: &Path,
) -> Result<RenderOutcome, RenderError> {
    let (document, skipped) = assemble(name, media);
    let page = render_document(&document).into_string();

    let file_name = format!("{name}.html");
    let output = out_dir.join(&file_name);
    fs::write(&output, page)?;
    info!(
        output = %output.display(),
        fragments = document.fragments.len(),
        skipped = skipped.len(),
        "board written"
    );

    Ok(RenderOutcome {
        output,
        file_name,
        pdfs: document.count(MediaKind::Pdf),
        audios: document.count(MediaKind::Audio),
        images: document.count(MediaKind::Image),
        skipped,
    })
}

fn base_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    fn render(name: &str, media: &MediaSet) -> String {
        let (document, _) = assemble(name, media);
        render_document(&document).into_string()
    }

    #[test]
    fn single_pdf_renders_one_iframe() {
        let tmp = TempDir::new().unwrap();
        let pdf = touch(tmp.path(), "p.pdf");
        let media = MediaSet::new(vec![pdf.clone()], vec![], vec![]);

        let html = render("Board", &media);
        assert_eq!(count_tags(&html, "iframe"), 1);
        assert!(html.contains(&format!(r#"<iframe src="{pdf}""#)));
        assert_eq!(count_tags(&html, "audio"), 0);
        assert_eq!(count_tags(&html, "img"), 0);
        assert_eq!(count_containers(&html), 1);
    }

    #[test]
    fn missing_pdf_is_skipped_and_reported() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("gone.pdf").to_string_lossy().into_owned();
        let media = MediaSet::new(vec![missing.clone()], vec![], vec![]);

        let (document, skipped) = assemble("Board", &media);
        assert!(document.fragments.is_empty());
        assert_eq!(skipped, vec![missing]);

        let html = render_document(&document).into_string();
        assert_eq!(count_tags(&html, "iframe"), 0);
    }

    #[test]
    fn skipped_entries_keep_encounter_order() {
        let tmp = TempDir::new().unwrap();
        let gone = |n: &str| tmp.path().join(n).to_string_lossy().into_owned();
        let media = MediaSet::new(
            vec![gone("a.pdf")],
            vec![gone("b.mp3")],
            vec![gone("c.png")],
        );

        let (_, skipped) = assemble("Board", &media);
        assert_eq!(skipped, vec![gone("a.pdf"), gone("b.mp3"), gone("c.png")]);
    }

    #[test]
    fn audio_has_label_id_and_controls() {
        let tmp = TempDir::new().unwrap();
        let clip = touch(tmp.path(), "song.mp3");
        let media = MediaSet::new(vec![], vec![clip.clone()], vec![]);

        let html = render("Board", &media);
        assert_eq!(count_tags(&html, "audio"), 1);
        assert!(html.contains(&format!(r#"<audio id="song.mp3" src="{clip}" controls>"#)));
        assert!(html.contains(">song.mp3</p>"));
    }

    #[test]
    fn image_alt_is_base_name() {
        let tmp = TempDir::new().unwrap();
        let image = touch(tmp.path(), "photo.webp");
        let media = MediaSet::new(vec![], vec![], vec![image.clone()]);

        let html = render("Board", &media);
        assert_eq!(count_tags(&html, "img"), 1);
        assert!(html.contains(&format!(r#"<img src="{image}" alt="photo.webp">"#)));
    }

    #[test]
    fn categories_emitted_pdf_audio_image() {
        let tmp = TempDir::new().unwrap();
        let image = touch(tmp.path(), "z.png");
        let clip = touch(tmp.path(), "y.mp3");
        let pdf = touch(tmp.path(), "x.pdf");
        let media = MediaSet::new(vec![pdf], vec![clip], vec![image]);

        let html = render("Board", &media);
        let iframe = html.find("<iframe").unwrap();
        let audio = html.find("<audio").unwrap();
        let img = html.find("<img").unwrap();
        assert!(iframe < audio && audio < img);
    }

    #[test]
    fn input_order_preserved_within_category() {
        let tmp = TempDir::new().unwrap();
        let second = touch(tmp.path(), "b.png");
        let first = touch(tmp.path(), "a.png");
        let media = MediaSet::new(vec![], vec![], vec![second.clone(), first.clone()]);

        let (document, _) = assemble("Board", &media);
        let srcs: Vec<&str> = document
            .fragments
            .iter()
            .map(|f| match f {
                Fragment::Image { src, .. } => src.as_str(),
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(srcs, vec![second.as_str(), first.as_str()]);
    }

    #[test]
    fn title_and_heading_present_once_when_empty() {
        let html = render("Empty Board", &MediaSet::default());
        assert_eq!(count_tags(&html, "title"), 1);
        assert_eq!(count_tags(&html, "h1"), 1);
        assert!(html.contains("<title>Empty Board</title>"));
        assert!(html.contains(">Empty Board</h1>"));
        assert_eq!(count_containers(&html), 0);
    }

    #[test]
    fn title_and_heading_present_once_with_many_entries() {
        let tmp = media_dir(&["a.pdf", "b.pdf", "c.mp3", "d.jpg"]);
        let p = |n: &str| tmp.path().join(n).to_string_lossy().into_owned();
        let media = MediaSet::new(vec![p("a.pdf"), p("b.pdf")], vec![p("c.mp3")], vec![p("d.jpg")]);

        let html = render("Notes", &media);
        assert_eq!(count_tags(&html, "title"), 1);
        assert_eq!(count_tags(&html, "h1"), 1);
        assert_eq!(count_containers(&html), 4);
    }

    #[test]
    fn document_includes_doctype_and_assets() {
        let html = render("Board", &MediaSet::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("resize: both;"));
        assert!(html.contains("querySelectorAll(\".container\")"));
        assert!(html.contains(r#"name="viewport""#));
    }

    #[test]
    fn static_script_is_not_escaped() {
        let html = render("Board", &MediaSet::default());
        assert!(html.contains("() => {"));
        assert!(!html.contains("=&gt;"));
    }

    #[test]
    fn names_and_paths_are_escaped() {
        let tmp = TempDir::new().unwrap();
        let image = touch(tmp.path(), "a\"b<c>.png");
        let media = MediaSet::new(vec![], vec![], vec![image]);

        let html = render("<script>alert('x')</script>", &media);
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a&quot;b&lt;c&gt;.png"));
    }

    #[test]
    fn base_name_strips_directories() {
        assert_eq!(base_name("dir/sub/song.mp3"), "song.mp3");
        assert_eq!(base_name("song.mp3"), "song.mp3");
    }

    // =========================================================================
    // render_page
    // =========================================================================

    #[test]
    fn render_page_writes_name_html() {
        let src = media_dir(&["p.pdf"]);
        let out = TempDir::new().unwrap();
        let pdf = src.path().join("p.pdf").to_string_lossy().into_owned();
        let media = MediaSet::new(vec![pdf], vec![], vec![]);

        let outcome = render_page("report", &media, out.path()).unwrap();
        assert_eq!(outcome.file_name, "report.html");
        assert_eq!(outcome.output, out.path().join("report.html"));
        assert_eq!(outcome.pdfs, 1);
        assert_eq!(outcome.audios, 0);
        assert!(outcome.skipped.is_empty());

        let html = fs::read_to_string(&outcome.output).unwrap();
        assert_eq!(count_tags(&html, "iframe"), 1);
    }

    #[test]
    fn render_page_still_writes_when_everything_is_missing() {
        let out = TempDir::new().unwrap();
        let missing = out.path().join("nope.pdf").to_string_lossy().into_owned();
        let media = MediaSet::new(vec![missing.clone()], vec![], vec![]);

        let outcome = render_page("board", &media, out.path()).unwrap();
        assert_eq!(outcome.skipped, vec![missing]);
        assert_eq!(outcome.pdfs, 0);

        let html = fs::read_to_string(&outcome.output).unwrap();
        assert_eq!(count_tags(&html, "iframe"), 0);
        assert!(html.contains("<title>board</title>"));
    }

    #[test]
    fn render_page_overwrites_previous_board() {
        let src = media_dir(&["first.png", "second.mp3"]);
        let out = TempDir::new().unwrap();
        let p = |n: &str| src.path().join(n).to_string_lossy().into_owned();

        let first = MediaSet::new(vec![], vec![], vec![p("first.png")]);
        render_page("board", &first, out.path()).unwrap();

        let second = MediaSet::new(vec![], vec![p("second.mp3")], vec![]);
        let outcome = render_page("board", &second, out.path()).unwrap();

        let html = fs::read_to_string(&outcome.output).unwrap();
        assert!(!html.contains("first.png"));
        assert_eq!(count_tags(&html, "img"), 0);
        assert_eq!(count_tags(&html, "audio"), 1);
    }

    #[test]
    fn render_page_unwritable_output_is_error() {
        let tmp = TempDir::new().unwrap();
        let result = render_page("board", &MediaSet::default(), &tmp.path().join("missing-dir"));
        assert!(matches!(result, Err(RenderError::Io(_))));
    }
}
