//! Splitting a raw export into its repeated body sections.

use crate::config::{SECTION_DELIMITER, SECTION_MARKER};

/// Splits a document on `<body>` and keeps slide-bearing sections.
#[derive(Debug, Clone, Default)]
pub struct SectionSplitter;

impl SectionSplitter {
    /// Create a new section splitter.
    pub fn new() -> Self {
        Self
    }

    /// Split `document` into sections that contain the slide marker.
    ///
    /// The text before the first delimiter is preamble and is always
    /// discarded, so a document without the delimiter yields no sections.
    pub fn split<'a>(&self, document: &'a str) -> Vec<&'a str> {
        document
            .split(SECTION_DELIMITER)
            .skip(1)
            .enumerate()
            .filter_map(|(idx, section)| {
                if section.contains(SECTION_MARKER) {
                    Some(section)
                } else {
                    log::debug!("Section {} has no slide marker, skipping", idx + 1);
                    None
                }
            })
            .collect()
    }
}
