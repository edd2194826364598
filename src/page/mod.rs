//! Document Export Page
//!
//! The host-facing component: it accumulates the activity's collected input
//! pages and goals, tracks the host-computed required-input validation
//! result, and opens an [`ExportView`] over a fresh snapshot when the user
//! asks to create the document.
//!
//! - `export_view.rs` - the export page itself (copy/export/submit/close)

pub mod export_view;

pub use export_view::{ExportView, ViewLabels};

use log::info;
use std::cell::RefCell;
use std::rc::Rc;

use crate::events::{EventListeners, PageEvent};
use crate::model::{GoalCollection, InputPage};
use crate::params::{PageParams, PAGES_TOKEN};
use crate::transform::build_export_object;

// ─────────────────────────────────────────────────────────────────────────────
// Focus
// ─────────────────────────────────────────────────────────────────────────────

/// Which control should receive keyboard focus. The host maps these onto its
/// actual widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    PageTitle,
    SubmitButton,
    ExportButton,
}

// ─────────────────────────────────────────────────────────────────────────────
// Document Export Page
// ─────────────────────────────────────────────────────────────────────────────

/// The page component the host attaches into the activity.
///
/// The host pushes collected content through `update_output_fields` and
/// `update_exportable_goals` as the session progresses, and reports its
/// required-fields validation result through `update_required_inputs_filled`;
/// this component performs no validation of its own.
pub struct DocumentExportPage {
    params: PageParams,
    content_id: u32,
    title: String,
    export_title: String,
    submit_enabled: bool,
    input_pages: Vec<InputPage>,
    goals: Option<GoalCollection>,
    required_inputs_filled: bool,
    error_message: String,
    listeners: Rc<RefCell<EventListeners>>,
}

impl DocumentExportPage {
    /// Create the page from host parameters, the content id, and the optional
    /// content metadata title.
    pub fn new(params: PageParams, content_id: u32, metadata_title: Option<&str>) -> Self {
        let title = params.resolve_title(metadata_title);

        Self {
            params,
            content_id,
            title,
            export_title: String::new(),
            submit_enabled: false,
            input_pages: Vec::new(),
            goals: None,
            required_inputs_filled: true,
            error_message: String::new(),
            listeners: Rc::new(RefCell::new(EventListeners::new())),
        }
    }

    /// Register a listener for the page's events.
    pub fn on(&self, callback: impl FnMut(&PageEvent) + 'static) {
        self.listeners.borrow_mut().on(callback);
    }

    pub fn params(&self) -> &PageParams {
        &self.params
    }

    pub fn content_id(&self) -> u32 {
        self.content_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn focus(&self) -> FocusTarget {
        FocusTarget::PageTitle
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Host Updates
    // ─────────────────────────────────────────────────────────────────────────

    /// Title used for the generated document and the export page header.
    pub fn set_export_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.export_title = title.into();
        self
    }

    pub fn set_submit_enabled(&mut self, submit_enabled: bool) -> &mut Self {
        self.submit_enabled = submit_enabled;
        self
    }

    /// Replace the collected input pages with the host's current state.
    pub fn update_output_fields(&mut self, inputs: Vec<InputPage>) -> &mut Self {
        self.input_pages = inputs;
        self
    }

    /// Replace the collected goals with the host's current state. `None`
    /// means the activity has no goals section.
    pub fn update_exportable_goals(&mut self, goals: Option<GoalCollection>) -> &mut Self {
        self.goals = goals;
        self
    }

    /// Record the host's required-fields validation result and render the
    /// error message from its template.
    pub fn update_required_inputs_filled(&mut self, missing_page_titles: &[String]) -> &mut Self {
        self.required_inputs_filled = missing_page_titles.is_empty();
        self.error_message =
            required_inputs_message(&self.params.requires_input_error_message, missing_page_titles);
        self
    }

    pub fn is_required_inputs_filled(&self) -> bool {
        self.required_inputs_filled
    }

    /// The currently rendered required-input message.
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Actions
    // ─────────────────────────────────────────────────────────────────────────

    /// Open the help dialog, if the parameters carry help text.
    pub fn open_help(&self) {
        if !self.params.has_help_text() {
            return;
        }
        self.listeners.borrow_mut().emit(&PageEvent::HelpRequested {
            title: self.title.clone(),
            help_text: self.params.help_text.clone(),
        });
    }

    /// Create the export page over a fresh snapshot of the collected content.
    ///
    /// Refused (returns `None`) while the host reports unfilled required
    /// inputs; the rendered [`Self::error_message`] tells the user which
    /// pages to complete. Otherwise emits [`PageEvent::Opened`] and returns
    /// the view; its `Closed` and `Submitted` events are forwarded to this
    /// page's listeners.
    pub fn create_document(&mut self) -> Option<ExportView> {
        if !self.required_inputs_filled {
            info!("Create document refused: required input fields are unfilled");
            return None;
        }

        let goals_title = self
            .goals
            .as_ref()
            .map(|collection| collection.title.as_str())
            .unwrap_or("");
        let export = build_export_object(
            &self.export_title,
            goals_title,
            &self.input_pages,
            self.goals.as_ref(),
        );

        let mut view = ExportView::new(
            self.export_title.clone(),
            export,
            self.submit_enabled,
            &self.params,
        );

        let listeners = Rc::clone(&self.listeners);
        view.on(move |event| match event {
            PageEvent::Closed | PageEvent::Submitted(_) => {
                listeners.borrow_mut().emit(event);
            }
            _ => {}
        });

        self.listeners.borrow_mut().emit(&PageEvent::Opened);
        Some(view)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Message Templating
// ─────────────────────────────────────────────────────────────────────────────

/// Fill the `@pages` token: a dash when nothing is missing, otherwise a
/// bulleted list of the offending page titles.
fn required_inputs_message(template: &str, missing_page_titles: &[String]) -> String {
    if missing_page_titles.is_empty() {
        return template.replace(PAGES_TOKEN, "-");
    }

    let mut list = String::from("<ul>");
    for title in missing_page_titles {
        list.push_str("<li>");
        list.push_str(title);
        list.push_str("</li>");
    }
    list.push_str("</ul>");

    template.replace(PAGES_TOKEN, &list)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
