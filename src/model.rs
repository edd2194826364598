//! Data model for collected activity content
//!
//! Two families of types live here:
//!
//! - **Source records**: per-page input fields and self-assessment goals as
//!   the host captured them (`InputPage`, `GoalRecord`, `GoalCollection`).
//!   These are snapshots; once handed to this crate they are never mutated.
//! - **Derived export structures**: the flat, export-ready shape produced by
//!   the transformer (`ExportObject` and friends) and consumed identically by
//!   the HTML preview renderer and the document renderer.

use serde::Serialize;
use std::rc::{Rc, Weak};

/// Answer code of a goal that has not been assessed yet.
pub const UNANSWERED: i32 = -1;

// ─────────────────────────────────────────────────────────────────────────────
// Source Records
// ─────────────────────────────────────────────────────────────────────────────

/// A single captured input field: a description (may contain host-authored
/// rich text) and the end-user's answer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputFieldRecord {
    pub description: String,
    pub value: String,
}

impl InputFieldRecord {
    pub fn new(description: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            value: value.into(),
        }
    }
}

/// One activity page worth of input fields, in capture order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputPage {
    pub title: String,
    pub fields: Vec<InputFieldRecord>,
}

impl InputPage {
    pub fn new(title: impl Into<String>, fields: Vec<InputFieldRecord>) -> Self {
        Self {
            title: title.into(),
            fields,
        }
    }
}

/// A self-assessment goal statement.
///
/// Immutable once captured. `answer_code` classifies the response the user
/// picked ([`UNANSWERED`] when none yet); `textual_answer` is the label of
/// that response (empty when unanswered). A goal derived from another goal
/// keeps a lookup-only weak link to its parent; the parent is never owned
/// through this link.
#[derive(Debug)]
pub struct GoalRecord {
    text: String,
    answer_code: i32,
    textual_answer: String,
    parent: Option<Weak<GoalRecord>>,
}

impl GoalRecord {
    /// Create an unanswered goal.
    pub fn new(text: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            text: text.into(),
            answer_code: UNANSWERED,
            textual_answer: String::new(),
            parent: None,
        })
    }

    /// Create a goal that has been assessed with the given answer.
    pub fn answered(
        text: impl Into<String>,
        answer_code: i32,
        textual_answer: impl Into<String>,
    ) -> Rc<Self> {
        Rc::new(Self {
            text: text.into(),
            answer_code,
            textual_answer: textual_answer.into(),
            parent: None,
        })
    }

    /// Create a goal derived from an existing one (a sub-goal). The link is
    /// weak and only usable for lookups.
    pub fn derived_from(parent: &Rc<GoalRecord>, text: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            text: text.into(),
            answer_code: UNANSWERED,
            textual_answer: String::new(),
            parent: Some(Rc::downgrade(parent)),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn answer_code(&self) -> i32 {
        self.answer_code
    }

    pub fn textual_answer(&self) -> &str {
        &self.textual_answer
    }

    pub fn is_answered(&self) -> bool {
        self.answer_code != UNANSWERED
    }

    /// The goal this one was derived from, if it is still alive.
    pub fn parent(&self) -> Option<Rc<GoalRecord>> {
        self.parent.as_ref().and_then(Weak::upgrade)
    }
}

/// One activity page worth of goals, in capture order.
pub type GoalPage = Vec<Rc<GoalRecord>>;

/// All goal pages of the activity plus the section title.
#[derive(Debug, Default)]
pub struct GoalCollection {
    pub title: String,
    pub pages: Vec<GoalPage>,
}

impl GoalCollection {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            pages: Vec::new(),
        }
    }

    pub fn add_page(&mut self, page: GoalPage) -> &mut Self {
        self.pages.push(page);
        self
    }

    /// True when at least one goal anywhere in the collection has been
    /// assessed.
    pub fn has_assessed_goals(&self) -> bool {
        self.pages
            .iter()
            .any(|page| page.iter().any(|goal| goal.is_answered()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Derived Export Structures
// ─────────────────────────────────────────────────────────────────────────────

/// An input field copied out of a source record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExportedField {
    pub description: String,
    pub value: String,
}

/// A page of exported fields. Pages without any field are never emitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExportedPage {
    pub title: String,
    pub fields: Vec<ExportedField>,
}

/// A group of goal texts sharing an answer code, labeled by that code's
/// textual representation. The label stays empty in unassessed mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GoalCategory {
    pub label: String,
    pub answer_code: i32,
    pub goals: Vec<String>,
}

/// The canonical export snapshot.
///
/// Constructed fresh per export action; owns deep copies of everything and
/// never aliases the host's live arrays. Both renderers consume this same
/// structure independently.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExportObject {
    pub title: String,
    pub goals_title: String,
    pub input_pages: Vec<ExportedPage>,
    pub goal_categories: Vec<GoalCategory>,
}

impl ExportObject {
    /// Whether a goals section will appear in any rendering.
    pub fn has_goals(&self) -> bool {
        !self.goal_categories.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
