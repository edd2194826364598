//! folio - Activity Content Export
//!
//! Collects free-text answers and self-assessment goals entered across the
//! pages of an interactive activity and lets the end user review, copy, and
//! export that content as a formatted document: an HTML preview fragment and
//! a generated DOCX file.
//!
//! The embedding host owns the live per-page records and pushes snapshots
//! into a [`DocumentExportPage`]; a create-document action flattens them into
//! one canonical [`ExportObject`] that the HTML preview renderer and the
//! document renderer consume independently.
//!
//! ```no_run
//! use folio::{DocumentExportPage, DiskSaver, DocxPacker, PageParams};
//! use folio::model::{InputFieldRecord, InputPage};
//!
//! let mut page = DocumentExportPage::new(PageParams::default(), 1, Some("My Activity"));
//! page.set_export_title("My Report")
//!     .update_output_fields(vec![InputPage::new(
//!         "Page 1",
//!         vec![InputFieldRecord::new("Name", "Alice")],
//!     )]);
//!
//! if let Some(mut view) = page.create_document() {
//!     println!("{}", view.html_body());
//!     view.save_document(&DocxPacker::new(), &DiskSaver::new("."));
//! }
//! ```

pub mod error;
pub mod events;
pub mod export;
pub mod model;
pub mod page;
pub mod params;
pub mod transform;

pub use error::{Error, Result};
pub use events::{EventListeners, PageEvent};
pub use export::{
    render_document, render_html, DiskSaver, DocumentPacker, DocxPacker, FileSaver,
    DEFAULT_EXPORT_FILENAME,
};
pub use model::{ExportObject, GoalCollection, InputPage};
pub use page::{DocumentExportPage, ExportView, FocusTarget};
pub use params::PageParams;
pub use transform::build_export_object;
