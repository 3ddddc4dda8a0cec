//! Balanced container extraction.
//!
//! Finds the slide container's opening tag and walks forward tag by tag,
//! counting nested elements of the same name, until the closing tag that
//! brings the nesting depth back to zero.

use crate::config::{CLOSE_TAG, CONTAINER_MARKER, OPEN_TAG};
use crate::entities::decode_entities;
use crate::types::{ContainerSpan, SlideFragment};

/// Extracts one balanced `<div class="slide-container...">` element per section.
#[derive(Debug, Clone, Default)]
pub struct ContainerExtractor;

impl ContainerExtractor {
    /// Create a new container extractor.
    pub fn new() -> Self {
        Self
    }

    /// Locate the first container element in `text`.
    ///
    /// Returns `None` if the marker is absent or the container never closes.
    /// The span runs from the start of the marker through the end of the
    /// matching closing tag.
    pub fn find_span(&self, text: &str) -> Option<ContainerSpan> {
        let start = text.find(CONTAINER_MARKER)?;
        let mut cursor = start + CONTAINER_MARKER.len();
        let mut depth = 0usize;

        loop {
            let Some(close) = find_from(text, CLOSE_TAG, cursor) else {
                log::warn!(
                    "Container opened at offset {} is never closed, skipping section",
                    start
                );
                return None;
            };

            // A missing opening tag sorts after any closing tag.
            match find_from(text, OPEN_TAG, cursor) {
                Some(open) if open < close => {
                    depth += 1;
                    cursor = open + OPEN_TAG.len();
                }
                _ => {
                    let close_end = close + CLOSE_TAG.len();
                    if depth == 0 {
                        return Some(ContainerSpan::new(start, close_end));
                    }
                    depth -= 1;
                    cursor = close_end;
                }
            }
        }
    }

    /// Decode one section and return its container markup, trimmed.
    pub fn extract(&self, section: &str) -> Option<String> {
        let decoded = decode_entities(section);
        let span = self.find_span(&decoded)?;
        Some(decoded[span.start..span.end].trim().to_string())
    }

    /// Extract containers from every section, in order.
    ///
    /// Sections without a usable container contribute nothing.
    pub fn extract_all<'a, I>(&self, sections: I) -> Vec<SlideFragment>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut fragments = Vec::new();

        for (idx, section) in sections.into_iter().enumerate() {
            match self.extract(section) {
                Some(html) => {
                    log::debug!(
                        "Section {} -> slide {} ({} bytes)",
                        idx + 1,
                        fragments.len() + 1,
                        html.len()
                    );
                    fragments.push(SlideFragment::new(html));
                }
                None => log::debug!("Section {} yielded no slide", idx + 1),
            }
        }

        fragments
    }
}

/// Byte offset of the next `needle` at or after `from`.
fn find_from(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    haystack
        .get(from..)
        .and_then(|rest| rest.find(needle))
        .map(|i| from + i)
}
