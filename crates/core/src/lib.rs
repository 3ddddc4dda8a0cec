//! Core extraction and assembly for turning an exported slide-deck HTML
//! document into a standalone, print-ready HTML file.

pub mod assemble;
pub mod config;
pub mod entities;
pub mod error;
pub mod export;
pub mod extract;
pub mod split;
pub mod styles;
pub mod types;

pub use assemble::DocumentAssembler;
pub use error::{Error, Result};
pub use export::{RenderedDeck, SlideExporter};
pub use extract::ContainerExtractor;
pub use split::SectionSplitter;
pub use styles::StyleDeduplicator;
pub use types::{ContainerSpan, ExportSummary, ExtractedStyles, SlideFragment};
