//! End-to-end export: read the raw document, extract slides and styles,
//! assemble the print-ready page and write it out.

use crate::assemble::DocumentAssembler;
use crate::error::{Error, Result};
use crate::extract::ContainerExtractor;
use crate::split::SectionSplitter;
use crate::styles::StyleDeduplicator;
use crate::types::ExportSummary;
use std::fs;
use std::path::Path;

/// An assembled output document and what went into it.
#[derive(Debug, Clone)]
pub struct RenderedDeck {
    pub html: String,
    pub summary: ExportSummary,
}

/// Runs the split, extract, deduplicate and assemble pipeline.
#[derive(Debug, Clone, Default)]
pub struct SlideExporter {
    splitter: SectionSplitter,
    extractor: ContainerExtractor,
    styles: StyleDeduplicator,
    assembler: DocumentAssembler,
}

impl SlideExporter {
    /// Create an exporter with every component at its defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the whole input document.
    ///
    /// A missing file is reported as [`Error::InputNotFound`].
    pub fn read_input(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(Error::InputNotFound(path.to_path_buf()));
        }
        Ok(fs::read_to_string(path)?)
    }

    /// Turn a raw export into the print-ready document.
    pub fn render(&self, document: &str) -> RenderedDeck {
        let sections = self.splitter.split(document);
        let slides = self.extractor.extract_all(sections.iter().copied());
        let styles = self.styles.collect(document);

        log::info!(
            "{} candidate sections, {} slides, {} styles, {} font faces",
            sections.len(),
            slides.len(),
            styles.styles.len(),
            styles.font_faces.len()
        );

        let html = self.assembler.assemble(&styles, &slides);

        RenderedDeck {
            html,
            summary: ExportSummary {
                slide_count: slides.len(),
                style_count: styles.styles.len(),
                font_face_count: styles.font_faces.len(),
            },
        }
    }

    /// Write the output document, replacing any existing file.
    pub fn write_output(&self, path: &Path, html: &str) -> Result<()> {
        fs::write(path, html)?;
        log::debug!("Wrote {} bytes to {}", html.len(), path.display());
        Ok(())
    }

    /// Read `input`, render it and write the result to `output`.
    ///
    /// Nothing is written if the input is missing.
    pub fn export(&self, input: &Path, output: &Path) -> Result<ExportSummary> {
        let document = self.read_input(input)?;
        let deck = self.render(&document);
        self.write_output(output, &deck.html)?;
        Ok(deck.summary)
    }
}
