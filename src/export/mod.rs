//! Export Module for folio
//!
//! Everything downstream of the canonical export snapshot lives here: both
//! renderers, the rich-text normalizer, the DOCX packer, and the clipboard
//! integration backing the copy button.
//!
//! # Architecture
//!
//! - `html.rs` - HTML preview fragment generation with escaping
//! - `text.rs` - rich-text to plain-text normalization for field descriptions
//! - `document.rs` - document block model and renderer
//! - `docx.rs` - DOCX packing (docx-rs) and file saving behind traits
//! - `clipboard.rs` - platform clipboard operations

pub mod clipboard;
pub mod document;
pub mod docx;
pub mod html;
pub mod text;

pub use clipboard::copy_export_to_clipboard;
pub use document::{render_document, DocBlock, HeadingLevel, TextRun};
pub use docx::{DiskSaver, DocumentPacker, DocxPacker, FileSaver, DEFAULT_EXPORT_FILENAME};
pub use html::render_html;
pub use text::html_to_text;
