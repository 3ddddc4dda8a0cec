//! Domain types for extracted slide content.

/// Byte range of one balanced container element inside a section.
///
/// `end` is exclusive and points just past the container's closing tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerSpan {
    pub start: usize,
    pub end: usize,
}

impl ContainerSpan {
    /// Create a span from its start and exclusive end offsets.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// One extracted slide container, opening tag through matching closing tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideFragment {
    /// Entity-decoded, trimmed markup of the container element.
    pub html: String,
}

impl SlideFragment {
    /// Create a new fragment from its markup.
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

/// Style text collected from a whole document, ready for re-emission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedStyles {
    /// Every `@font-face{...}` rule, in document order, duplicates kept.
    pub font_faces: Vec<String>,

    /// Distinct, non-trivial style block contents, in first-seen order.
    pub styles: Vec<String>,
}

impl ExtractedStyles {
    /// Font-face rules joined for injection into the output stylesheet.
    pub fn font_face_css(&self) -> String {
        self.font_faces.join("\n")
    }

    /// Style blocks joined for injection into the output stylesheet.
    pub fn style_css(&self) -> String {
        self.styles.join("\n")
    }
}

/// Outcome of one export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Number of slides written to the output document.
    pub slide_count: usize,

    /// Number of distinct style blocks kept.
    pub style_count: usize,

    /// Number of font-face rules carried over.
    pub font_face_count: usize,
}
