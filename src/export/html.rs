//! HTML Preview Generation
//!
//! Renders the canonical [`ExportObject`] as a single HTML fragment for
//! on-screen preview and text selection. Field descriptions and section
//! titles are host-authored and may legitimately carry markup, so they are
//! inserted as-is; everything typed by the end user (field values, goal
//! texts) is escaped.

use crate::model::{ExportObject, ExportedPage, GoalCategory};
use std::fmt::Write;

// ─────────────────────────────────────────────────────────────────────────────
// Fragment Assembly
// ─────────────────────────────────────────────────────────────────────────────

/// Render the export snapshot as an HTML fragment.
///
/// The fields block comes first, followed by the goals block. The goals
/// block is omitted entirely when there are no categories (including the
/// absent-collection case).
pub fn render_html(export: &ExportObject) -> String {
    let mut fragment = render_fields_block(&export.input_pages);
    fragment.push_str(&render_goals_block(
        &export.goals_title,
        &export.goal_categories,
    ));
    fragment
}

/// Render the input-fields section: a heading per titled page, one paragraph
/// per field with the description in bold and the value as escaped text.
fn render_fields_block(pages: &[ExportedPage]) -> String {
    let mut out = String::new();

    for page in pages {
        if !page.title.is_empty() {
            let _ = write!(out, "<h2>{}</h2>", page.title);
        }

        for field in &page.fields {
            out.push_str("<p>");
            if !field.description.is_empty() {
                let _ = write!(out, "<strong>{}</strong>", field.description);
            }
            // Escaped: this comes from end-user input
            let _ = write!(out, "<span>{}</span>", html_escape(&field.value));
            out.push_str("</p>");
        }
    }

    out
}

/// Render the goals section: optional section heading, then per category a
/// labeled paragraph and a bulleted list of goal texts.
fn render_goals_block(goals_title: &str, categories: &[GoalCategory]) -> String {
    if categories.is_empty() {
        return String::new();
    }

    let mut out = String::new();

    if !goals_title.is_empty() {
        let _ = write!(out, "<h2>{}</h2>", goals_title);
    }

    for category in categories {
        if !category.label.is_empty() {
            let _ = write!(
                out,
                "<p class=\"category\"><strong>{}:</strong></p>",
                category.label
            );
        }

        out.push_str("<ul>");
        for goal in &category.goals {
            // Escaped: this comes from end-user input
            let _ = write!(out, "<li>{}</li>", html_escape(goal));
        }
        out.push_str("</ul>");
    }

    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Utility Functions
// ─────────────────────────────────────────────────────────────────────────────

/// HTML-escape a string.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
