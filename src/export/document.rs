//! Document Block Generation
//!
//! Renders the canonical [`ExportObject`] into a flat sequence of
//! [`DocBlock`]s: headings, styled-run paragraphs, and bulleted paragraphs.
//! The blocks are a neutral document object model, ready for packing into a
//! binary file by [`super::docx`] without further interpretation.

use crate::export::text::html_to_text;
use crate::model::ExportObject;

/// Run font size in half-points (14pt).
pub const RUN_SIZE: usize = 28;

// ─────────────────────────────────────────────────────────────────────────────
// Block Model
// ─────────────────────────────────────────────────────────────────────────────

/// Heading levels used in the exported document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
}

/// A styled piece of text within a paragraph.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub bold: bool,
    /// Emit a line break before the run's text.
    pub break_before: bool,
}

impl TextRun {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            break_before: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn with_break(mut self) -> Self {
        self.break_before = true;
        self
    }
}

/// One paragraph-level unit of the exported document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocBlock {
    pub heading: Option<HeadingLevel>,
    pub runs: Vec<TextRun>,
    pub bullet: bool,
}

impl DocBlock {
    /// A top-level heading holding the given text.
    pub fn heading(text: impl Into<String>) -> Self {
        Self {
            heading: Some(HeadingLevel::H1),
            runs: vec![TextRun::new(text)],
            bullet: false,
        }
    }

    /// A plain paragraph from prepared runs.
    pub fn paragraph(runs: Vec<TextRun>) -> Self {
        Self {
            heading: None,
            runs,
            bullet: false,
        }
    }

    /// A bulleted list entry holding a single run.
    pub fn bulleted(run: TextRun) -> Self {
        Self {
            heading: None,
            runs: vec![run],
            bullet: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rendering
// ─────────────────────────────────────────────────────────────────────────────

/// Render the export snapshot as a sequence of document blocks.
///
/// Layout: document title heading; per input page a heading followed by one
/// paragraph per field (bold description runs, then plain value runs); the
/// goals section heading when the title is non-empty; per non-empty category
/// a bold "label:" paragraph (when labeled) followed by one bulleted
/// paragraph per goal. Pages and categories without content emit nothing.
pub fn render_document(export: &ExportObject) -> Vec<DocBlock> {
    let mut blocks = vec![DocBlock::heading(&export.title)];

    for page in &export.input_pages {
        if page.fields.is_empty() {
            continue;
        }

        blocks.push(DocBlock::heading(&page.title));
        for field in &page.fields {
            // The description may carry rich text; the value is already plain
            let mut runs = styled_runs(&html_to_text(&field.description), true);
            runs.extend(styled_runs(&field.value, false));
            blocks.push(DocBlock::paragraph(runs));
        }
    }

    if !export.goals_title.is_empty() {
        blocks.push(DocBlock::heading(&export.goals_title));
    }

    for category in &export.goal_categories {
        if category.goals.is_empty() {
            continue;
        }

        if !category.label.is_empty() {
            blocks.push(DocBlock::paragraph(vec![
                TextRun::new(format!("{}:", category.label)).bold().with_break(),
            ]));
        }

        for goal in &category.goals {
            blocks.push(DocBlock::bulleted(TextRun::new(goal.clone())));
        }
    }

    blocks
}

/// Split text on line breaks into one run per line, stripping stray tabs and
/// carriage returns. Every run starts on its own line.
fn styled_runs(text: &str, bold: bool) -> Vec<TextRun> {
    text.split('\n')
        .map(|line| TextRun {
            text: line.chars().filter(|c| *c != '\t' && *c != '\r').collect(),
            bold,
            break_before: true,
        })
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExportedField, ExportedPage, GoalCategory};

    fn one_field_export() -> ExportObject {
        ExportObject {
            title: "Report".to_string(),
            goals_title: String::new(),
            input_pages: vec![ExportedPage {
                title: "Page 1".to_string(),
                fields: vec![ExportedField {
                    description: "Name".to_string(),
                    value: "Alice".to_string(),
                }],
            }],
            goal_categories: vec![],
        }
    }

    #[test]
    fn test_title_is_first_heading() {
        let blocks = render_document(&one_field_export());
        assert_eq!(blocks[0].heading, Some(HeadingLevel::H1));
        assert_eq!(blocks[0].runs[0].text, "Report");
    }

    #[test]
    fn test_field_paragraph_run_layout() {
        let blocks = render_document(&one_field_export());

        // [title heading, page heading, one field paragraph]
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[1].runs[0].text, "Page 1");

        let paragraph = &blocks[2];
        assert_eq!(paragraph.heading, None);
        assert_eq!(paragraph.runs.len(), 2);
        assert!(paragraph.runs[0].bold);
        assert_eq!(paragraph.runs[0].text, "Name");
        assert!(!paragraph.runs[1].bold);
        assert_eq!(paragraph.runs[1].text, "Alice");
    }

    #[test]
    fn test_multiline_value_splits_into_runs() {
        let mut export = one_field_export();
        export.input_pages[0].fields[0].value = "line one\nline two".to_string();

        let blocks = render_document(&export);
        let paragraph = &blocks[2];
        assert_eq!(paragraph.runs.len(), 3);
        assert_eq!(paragraph.runs[1].text, "line one");
        assert_eq!(paragraph.runs[2].text, "line two");
        assert!(paragraph.runs.iter().all(|run| run.break_before));
    }

    #[test]
    fn test_rich_description_normalized() {
        let mut export = one_field_export();
        export.input_pages[0].fields[0].description =
            "<p>First</p><p>Second</p>".to_string();

        let blocks = render_document(&export);
        let bold_runs: Vec<_> = blocks[2].runs.iter().filter(|run| run.bold).collect();
        assert_eq!(bold_runs.len(), 3);
        assert_eq!(bold_runs[0].text, "First");
        assert_eq!(bold_runs[1].text, "");
        assert_eq!(bold_runs[2].text, "Second");
    }

    #[test]
    fn test_tabs_and_carriage_returns_stripped() {
        let mut export = one_field_export();
        export.input_pages[0].fields[0].value = "a\tb\rc".to_string();

        let blocks = render_document(&export);
        assert_eq!(blocks[2].runs[1].text, "abc");
    }

    #[test]
    fn test_goals_title_heading_when_set() {
        let mut export = one_field_export();
        export.goals_title = "My goals".to_string();

        let blocks = render_document(&export);
        let last = blocks.last().unwrap();
        assert_eq!(last.heading, Some(HeadingLevel::H1));
        assert_eq!(last.runs[0].text, "My goals");
    }

    #[test]
    fn test_category_blocks() {
        let export = ExportObject {
            title: "Report".to_string(),
            goals_title: "Goals".to_string(),
            input_pages: vec![],
            goal_categories: vec![GoalCategory {
                label: "Yes".to_string(),
                answer_code: 1,
                goals: vec!["G1".to_string(), "G2".to_string()],
            }],
        };

        let blocks = render_document(&export);
        // [title, goals title, label paragraph, two bullets]
        assert_eq!(blocks.len(), 5);

        let label = &blocks[2];
        assert_eq!(label.runs[0].text, "Yes:");
        assert!(label.runs[0].bold);
        assert!(label.runs[0].break_before);
        assert!(!label.bullet);

        assert!(blocks[3].bullet);
        assert_eq!(blocks[3].runs[0].text, "G1");
        assert!(!blocks[3].runs[0].bold);
        assert!(blocks[4].bullet);
        assert_eq!(blocks[4].runs[0].text, "G2");
    }

    #[test]
    fn test_unlabeled_category_skips_label_paragraph() {
        let export = ExportObject {
            title: "Report".to_string(),
            goal_categories: vec![GoalCategory {
                label: String::new(),
                answer_code: -1,
                goals: vec!["A".to_string()],
            }],
            ..ExportObject::default()
        };

        let blocks = render_document(&export);
        // [title, one bullet]
        assert_eq!(blocks.len(), 2);
        assert!(blocks[1].bullet);
    }

    #[test]
    fn test_empty_category_emits_nothing() {
        let export = ExportObject {
            title: "Report".to_string(),
            goal_categories: vec![GoalCategory {
                label: "Orphan".to_string(),
                answer_code: 5,
                goals: vec![],
            }],
            ..ExportObject::default()
        };

        let blocks = render_document(&export);
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn test_plain_text_round_trip() {
        let mut export = one_field_export();
        export.input_pages[0].fields[0].description = "Plain description".to_string();

        let blocks = render_document(&export);
        assert_eq!(blocks[2].runs[0].text, "Plain description");
        assert_eq!(blocks[2].runs[1].text, "Alice");
    }
}
