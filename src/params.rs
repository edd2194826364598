//! Host-supplied page parameters for folio
//!
//! The embedding host hands the page a JSON parameter object with display
//! labels and message templates. This module defines the `PageParams` struct
//! with serde support, where every field has a default so a partial blob from
//! the host deserializes into a fully-populated struct.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Fallback page title when neither the host parameters nor the content
/// metadata carry one.
pub const DEFAULT_PAGE_TITLE: &str = "Document Export";

/// Placeholder token in `requires_input_error_message` that is replaced with
/// the list of pages missing required input.
pub const PAGES_TOKEN: &str = "@pages";

// ─────────────────────────────────────────────────────────────────────────────
// Page Parameters
// ─────────────────────────────────────────────────────────────────────────────

/// Display labels and message templates for the export page.
///
/// All fields are optional on the wire; missing ones fall back to the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageParams {
    /// Page title shown in the header.
    pub title: String,
    /// Introductory text shown under the title.
    pub description: String,
    /// Label of the button that opens the export page.
    pub create_document_label: String,
    /// Label of the submit button.
    pub submit_text_label: String,
    /// Message shown after a successful submit.
    pub submit_success_text_label: String,
    /// Label of the select-all/copy button.
    pub select_all_text_label: String,
    /// Label of the export/download button.
    pub export_text_label: String,
    /// Template for the required-input error message. Must contain the
    /// literal `@pages` token.
    pub requires_input_error_message: String,
    /// Accessible label of the help button.
    pub help_text_label: String,
    /// Body of the help dialog. An empty string disables the help button.
    pub help_text: String,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            create_document_label: "Proceed".to_string(),
            submit_text_label: "Submit".to_string(),
            submit_success_text_label: "Your report was submitted successfully!".to_string(),
            select_all_text_label: "Select".to_string(),
            export_text_label: "Export".to_string(),
            requires_input_error_message:
                "The following pages contain required input fields that need to be filled: @pages"
                    .to_string(),
            help_text_label: "Read more".to_string(),
            help_text: "Help text".to_string(),
        }
    }
}

impl PageParams {
    /// Parse a (possibly partial) host parameter blob.
    ///
    /// Unknown fields are ignored; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let params = serde_json::from_str(json)?;
        Ok(params)
    }

    /// Resolve the effective page title.
    ///
    /// Order of precedence: explicit `title` parameter, then the content
    /// metadata title, then [`DEFAULT_PAGE_TITLE`].
    pub fn resolve_title(&self, metadata_title: Option<&str>) -> String {
        if !self.title.is_empty() {
            return self.title.clone();
        }
        match metadata_title {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => DEFAULT_PAGE_TITLE.to_string(),
        }
    }

    /// Whether the help button should be shown at all.
    pub fn has_help_text(&self) -> bool {
        !self.help_text.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
