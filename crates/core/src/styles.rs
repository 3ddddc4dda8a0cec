//! Style block and font-face collection.
//!
//! Exports repeat the same large stylesheet in every section; only the first
//! copy of each block is kept. Font-face rules are carried over as found.

use crate::config::MIN_STYLE_LEN;
use crate::types::ExtractedStyles;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Inner text of every `<style>` element, across newlines.
static STYLE_BLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<style[^>]*>(.*?)</style>").unwrap());

/// A single-level `@font-face{...}` rule.
static FONT_FACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@font-face\{[^}]+\}").unwrap());

/// Collects unique style blocks and all font-face rules from a document.
#[derive(Debug, Clone, Default)]
pub struct StyleDeduplicator;

impl StyleDeduplicator {
    /// Create a new style deduplicator.
    pub fn new() -> Self {
        Self
    }

    /// Scan the whole document for style blocks and font-face rules.
    pub fn collect(&self, document: &str) -> ExtractedStyles {
        let font_faces: Vec<String> = FONT_FACE_REGEX
            .find_iter(document)
            .map(|m| m.as_str().to_string())
            .collect();

        let mut seen: HashSet<&str> = HashSet::new();
        let mut styles = Vec::new();
        let mut total = 0usize;

        for caps in STYLE_BLOCK_REGEX.captures_iter(document) {
            total += 1;
            let Some(block) = caps.get(1).map(|m| m.as_str()) else {
                continue;
            };

            if block.chars().count() <= MIN_STYLE_LEN {
                continue;
            }
            if seen.insert(block) {
                styles.push(block.to_string());
            }
        }

        log::debug!(
            "Kept {} of {} style blocks, {} font-face rules",
            styles.len(),
            total,
            font_faces.len()
        );

        ExtractedStyles { font_faces, styles }
    }
}
