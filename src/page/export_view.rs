//! Export View
//!
//! The export page the user lands on after choosing to create a document: it
//! holds the preview HTML and the copy/export/submit/close actions. Rendering
//! of actual widgets is the host's job; this component owns the state those
//! widgets display and the effects their clicks trigger.

use log::warn;
use serde_json::Value;

use crate::events::{EventListeners, PageEvent};
use crate::export::clipboard::copy_export_to_clipboard;
use crate::export::docx::{DocumentPacker, FileSaver, DEFAULT_EXPORT_FILENAME};
use crate::export::document::render_document;
use crate::export::html::render_html;
use crate::model::ExportObject;
use crate::page::FocusTarget;
use crate::params::PageParams;

// ─────────────────────────────────────────────────────────────────────────────
// View Labels
// ─────────────────────────────────────────────────────────────────────────────

/// Button labels and messages shown on the export page.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewLabels {
    pub select_all: String,
    pub export: String,
    pub submit: String,
    pub submit_success: String,
}

impl From<&PageParams> for ViewLabels {
    fn from(params: &PageParams) -> Self {
        Self {
            select_all: params.select_all_text_label.clone(),
            export: params.export_text_label.clone(),
            submit: params.submit_text_label.clone(),
            submit_success: params.submit_success_text_label.clone(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Export View
// ─────────────────────────────────────────────────────────────────────────────

/// State and actions of an open export page.
pub struct ExportView {
    header: String,
    export: ExportObject,
    html_body: String,
    labels: ViewLabels,
    submit_enabled: bool,
    submit_used: bool,
    success_visible: bool,
    export_in_progress: bool,
    closed: bool,
    listeners: EventListeners,
}

impl ExportView {
    /// Build the view around a fresh export snapshot. The preview body is
    /// rendered once, up front.
    pub fn new(
        header: impl Into<String>,
        export: ExportObject,
        submit_enabled: bool,
        params: &PageParams,
    ) -> Self {
        let html_body = replace_line_breaks(&render_html(&export));

        Self {
            header: header.into(),
            export,
            html_body,
            labels: ViewLabels::from(params),
            submit_enabled,
            submit_used: false,
            success_visible: false,
            export_in_progress: false,
            closed: false,
            listeners: EventListeners::new(),
        }
    }

    /// Register a listener for this view's events.
    pub fn on(&mut self, callback: impl FnMut(&PageEvent) + 'static) {
        self.listeners.on(callback);
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    /// The preview fragment shown in the exportable area.
    pub fn html_body(&self) -> &str {
        &self.html_body
    }

    pub fn export_object(&self) -> &ExportObject {
        &self.export
    }

    pub fn labels(&self) -> &ViewLabels {
        &self.labels
    }

    /// Which control receives focus when the view opens.
    pub fn focus(&self) -> FocusTarget {
        if self.submit_enabled && !self.submit_used {
            FocusTarget::SubmitButton
        } else {
            FocusTarget::ExportButton
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Actions
    // ─────────────────────────────────────────────────────────────────────────

    /// Copy the preview to the system clipboard. Best-effort: a clipboard
    /// failure is logged and the view stays usable.
    pub fn select_all_text(&self) {
        if let Err(err) = copy_export_to_clipboard(&self.export) {
            warn!("Copy to clipboard failed: {}", err);
        }
    }

    /// Pack the document and save it under [`DEFAULT_EXPORT_FILENAME`].
    ///
    /// Best-effort: a packing or save failure is logged and the export action
    /// is re-enabled, never left in a stuck "exporting" state.
    pub fn save_document(&mut self, packer: &dyn DocumentPacker, saver: &dyn FileSaver) {
        if self.export_in_progress {
            return;
        }
        self.export_in_progress = true;

        let blocks = render_document(&self.export);
        let outcome = packer
            .pack(&blocks)
            .and_then(|bytes| saver.save(DEFAULT_EXPORT_FILENAME, &bytes));

        if let Err(err) = outcome {
            warn!("Document export failed: {}", err);
        }

        self.export_in_progress = false;
    }

    pub fn is_export_in_progress(&self) -> bool {
        self.export_in_progress
    }

    /// Submit the report with an opaque host payload.
    ///
    /// The submit action disables itself synchronously on the first call, so
    /// a second click cannot emit a duplicate event while the host is still
    /// processing the first.
    pub fn submit(&mut self, payload: Value) {
        if !self.submit_enabled || self.submit_used {
            return;
        }
        self.submit_used = true;

        self.listeners.emit(&PageEvent::Submitted(payload));
        self.success_visible = true;
    }

    pub fn is_submit_disabled(&self) -> bool {
        !self.submit_enabled || self.submit_used
    }

    /// The success message to display, once a submit went through.
    pub fn success_message(&self) -> Option<&str> {
        self.success_visible
            .then(|| self.labels.submit_success.as_str())
    }

    /// Close the view. Emits [`PageEvent::Closed`] once; later action calls
    /// complete harmlessly against the closed view.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.listeners.emit(&PageEvent::Closed);
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

/// Convert captured line breaks to markup breaks for the preview area.
fn replace_line_breaks(html: &str) -> String {
    html.replace("\r\n", "<br />")
        .replace('\r', "<br />")
        .replace('\n', "<br />")
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::export::document::DocBlock;
    use crate::model::{ExportedField, ExportedPage};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn sample_export() -> ExportObject {
        ExportObject {
            title: "Report".to_string(),
            input_pages: vec![ExportedPage {
                title: "Page 1".to_string(),
                fields: vec![ExportedField {
                    description: "Name".to_string(),
                    value: "first\nsecond".to_string(),
                }],
            }],
            ..ExportObject::default()
        }
    }

    struct RecordingSaver {
        saved: RefCell<Vec<(String, usize)>>,
    }

    impl RecordingSaver {
        fn new() -> Self {
            Self {
                saved: RefCell::new(Vec::new()),
            }
        }
    }

    impl FileSaver for RecordingSaver {
        fn save(&self, filename: &str, bytes: &[u8]) -> Result<()> {
            self.saved
                .borrow_mut()
                .push((filename.to_string(), bytes.len()));
            Ok(())
        }
    }

    struct FailingPacker;

    impl DocumentPacker for FailingPacker {
        fn pack(&self, _blocks: &[DocBlock]) -> Result<Vec<u8>> {
            Err(Error::Pack {
                message: "simulated".to_string(),
            })
        }
    }

    struct CountingPacker {
        packed: RefCell<usize>,
    }

    impl DocumentPacker for CountingPacker {
        fn pack(&self, blocks: &[DocBlock]) -> Result<Vec<u8>> {
            *self.packed.borrow_mut() = blocks.len();
            Ok(vec![1, 2, 3])
        }
    }

    #[test]
    fn test_body_line_breaks_become_markup() {
        let view = ExportView::new("Report", sample_export(), false, &PageParams::default());
        assert!(view.html_body().contains("first<br />second"));
        assert!(!view.html_body().contains('\n'));
    }

    #[test]
    fn test_save_document_uses_default_filename() {
        let mut view = ExportView::new("Report", sample_export(), false, &PageParams::default());
        let packer = CountingPacker {
            packed: RefCell::new(0),
        };
        let saver = RecordingSaver::new();

        view.save_document(&packer, &saver);

        let saved = saver.saved.borrow();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].0, DEFAULT_EXPORT_FILENAME);
        assert_eq!(saved[0].1, 3);
        // [title heading, page heading, field paragraph]
        assert_eq!(*packer.packed.borrow(), 3);
        assert!(!view.is_export_in_progress());
    }

    #[test]
    fn test_failed_export_leaves_view_usable() {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut view = ExportView::new("Report", sample_export(), false, &PageParams::default());
        let saver = RecordingSaver::new();

        view.save_document(&FailingPacker, &saver);

        assert!(saver.saved.borrow().is_empty());
        // Re-enabled, not stuck in an "exporting" state
        assert!(!view.is_export_in_progress());
    }

    #[test]
    fn test_submit_emits_once() {
        let mut view = ExportView::new("Report", sample_export(), true, &PageParams::default());
        let submissions = Rc::new(RefCell::new(0));
        {
            let submissions = Rc::clone(&submissions);
            view.on(move |event| {
                if matches!(event, PageEvent::Submitted(_)) {
                    *submissions.borrow_mut() += 1;
                }
            });
        }

        assert!(!view.is_submit_disabled());
        view.submit(serde_json::json!({"attempt": 1}));
        view.submit(serde_json::json!({"attempt": 2}));

        assert_eq!(*submissions.borrow(), 1);
        assert!(view.is_submit_disabled());
        assert_eq!(
            view.success_message(),
            Some("Your report was submitted successfully!")
        );
    }

    #[test]
    fn test_submit_disabled_when_not_enabled() {
        let mut view = ExportView::new("Report", sample_export(), false, &PageParams::default());
        let submissions = Rc::new(RefCell::new(0));
        {
            let submissions = Rc::clone(&submissions);
            view.on(move |event| {
                if matches!(event, PageEvent::Submitted(_)) {
                    *submissions.borrow_mut() += 1;
                }
            });
        }

        view.submit(Value::Null);
        assert_eq!(*submissions.borrow(), 0);
        assert!(view.success_message().is_none());
    }

    #[test]
    fn test_focus_target() {
        let view = ExportView::new("Report", sample_export(), true, &PageParams::default());
        assert_eq!(view.focus(), FocusTarget::SubmitButton);

        let view = ExportView::new("Report", sample_export(), false, &PageParams::default());
        assert_eq!(view.focus(), FocusTarget::ExportButton);
    }

    #[test]
    fn test_close_emits_once() {
        let mut view = ExportView::new("Report", sample_export(), false, &PageParams::default());
        let closes = Rc::new(RefCell::new(0));
        {
            let closes = Rc::clone(&closes);
            view.on(move |event| {
                if matches!(event, PageEvent::Closed) {
                    *closes.borrow_mut() += 1;
                }
            });
        }

        view.close();
        view.close();

        assert_eq!(*closes.borrow(), 1);
        assert!(view.is_closed());
    }

    #[test]
    fn test_labels_from_params() {
        let params = PageParams {
            export_text_label: "Download".to_string(),
            ..PageParams::default()
        };
        let view = ExportView::new("Report", sample_export(), false, &params);
        assert_eq!(view.labels().export, "Download");
        assert_eq!(view.labels().select_all, "Select");
    }
}
