//! Build-time settings for the one export shape this tool targets.

/// Export file produced by the slide-authoring tool, relative to the working directory.
pub const INPUT_PATH: &str = "Genspark (03.12.2025 07：41：35).html";

/// Print-ready document written by the exporter. Always overwritten.
pub const OUTPUT_PATH: &str = "slides-export-plagiat.html";

/// Separates the repeated top-level sections of the export.
pub const SECTION_DELIMITER: &str = "<body>";

/// A section holding a slide contains this text somewhere.
pub const SECTION_MARKER: &str = "slide-container";

/// Literal start of the slide container's opening tag.
pub const CONTAINER_MARKER: &str = r#"<div class="slide-container"#;

/// Any opening tag of the container's element type.
pub const OPEN_TAG: &str = "<div";

/// Closing tag of the container's element type.
pub const CLOSE_TAG: &str = "</div>";

/// Style blocks must be strictly longer than this (in characters) to be kept.
pub const MIN_STYLE_LEN: usize = 100;

/// `lang` attribute of the output document.
pub const DOCUMENT_LANG: &str = "uk";

/// `<title>` of the output document.
pub const DOCUMENT_TITLE: &str = "Академічний плагіат - Експорт слайдів";

/// Label of the floating print button.
pub const PRINT_BUTTON_LABEL: &str = "🖨️ Печать в PDF";

/// Slide page width in CSS pixels.
pub const PAGE_WIDTH_PX: u32 = 1280;

/// Slide page height in CSS pixels.
pub const PAGE_HEIGHT_PX: u32 = 720;
