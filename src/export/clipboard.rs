//! Clipboard Operations for the Export Preview
//!
//! Backs the select-all/copy button: copies the rendered preview to the
//! system clipboard using the arboard crate, as HTML with a plain-text
//! fallback so both rich and plain paste targets work.

use arboard::Clipboard;

use crate::error::Result;
use crate::export::html::render_html;
use crate::export::text::html_to_text;
use crate::model::ExportObject;

// ─────────────────────────────────────────────────────────────────────────────
// Clipboard Operations
// ─────────────────────────────────────────────────────────────────────────────

/// Copy the export preview to the clipboard.
///
/// Renders the snapshot to its HTML fragment and derives the plain-text
/// fallback from it. Word processors and mail clients paste the formatted
/// content; plain-text targets get the normalized text.
pub fn copy_export_to_clipboard(export: &ExportObject) -> Result<()> {
    let html = render_html(export);
    let plain = html_to_text(&html);
    copy_html_with_fallback(&html, &plain)
}

/// Copy HTML with a plain text fallback to the clipboard.
pub fn copy_html_with_fallback(html: &str, plain_text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_html(html, Some(plain_text))?;
    Ok(())
}

/// Copy plain text to the clipboard.
pub fn copy_text_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
