//! Export Transformer
//!
//! Flattens the raw per-page records into the canonical [`ExportObject`]
//! consumed by both renderers. The transform is pure: it copies everything it
//! needs out of the source snapshot and has no side effects, so calling it
//! twice on an unmodified snapshot yields structurally equal results.

use crate::model::{
    ExportObject, ExportedField, ExportedPage, GoalCategory, GoalCollection, InputPage,
};

/// Build the canonical export snapshot from the collected records.
///
/// Goal grouping runs in one of two modes:
///
/// - **Assessed** (at least one goal anywhere has been answered): unanswered
///   goals are excluded; answered goals are grouped into one category per
///   distinct answer code, in order of first encounter while scanning pages
///   top to bottom. A category's label is set once, from the first goal whose
///   textual answer is non-empty, and never overwritten.
/// - **Unassessed** (no goal answered anywhere): every goal lands in a single
///   unlabeled category, original order, answer codes ignored entirely.
///
/// A missing goal collection is a recognized absent-input state, not an
/// error: the result simply carries no categories. Categories and pages that
/// end up without content are dropped here so no renderer ever sees an empty
/// shell.
pub fn build_export_object(
    title: &str,
    goals_title: &str,
    input_pages: &[InputPage],
    goals: Option<&GoalCollection>,
) -> ExportObject {
    ExportObject {
        title: title.to_string(),
        goals_title: goals_title.to_string(),
        input_pages: flatten_input_pages(input_pages),
        goal_categories: goals.map(categorize_goals).unwrap_or_default(),
    }
}

/// Copy pages and fields in order, dropping pages without any field.
fn flatten_input_pages(input_pages: &[InputPage]) -> Vec<ExportedPage> {
    input_pages
        .iter()
        .filter(|page| !page.fields.is_empty())
        .map(|page| ExportedPage {
            title: page.title.clone(),
            fields: page
                .fields
                .iter()
                .map(|field| ExportedField {
                    description: field.description.clone(),
                    value: field.value.clone(),
                })
                .collect(),
        })
        .collect()
}

/// Group goals into exportable categories.
fn categorize_goals(collection: &GoalCollection) -> Vec<GoalCategory> {
    if collection.pages.is_empty() {
        return Vec::new();
    }

    let mut categories: Vec<GoalCategory> = Vec::new();

    if collection.has_assessed_goals() {
        for page in &collection.pages {
            for goal in page {
                // Unassessed goals are excluded in assessed mode
                if !goal.is_answered() {
                    continue;
                }

                let index = match categories
                    .iter()
                    .position(|category| category.answer_code == goal.answer_code())
                {
                    Some(index) => index,
                    None => {
                        categories.push(GoalCategory {
                            label: goal.textual_answer().to_string(),
                            answer_code: goal.answer_code(),
                            goals: Vec::new(),
                        });
                        categories.len() - 1
                    }
                };

                if !goal.text().is_empty() && !goal.textual_answer().is_empty() {
                    categories[index].goals.push(goal.text().to_string());
                }
            }
        }
    } else {
        let goals: Vec<String> = collection
            .pages
            .iter()
            .flat_map(|page| page.iter().map(|goal| goal.text().to_string()))
            .collect();

        categories.push(GoalCategory {
            label: String::new(),
            answer_code: crate::model::UNANSWERED,
            goals,
        });
    }

    // Never hand an empty shell to the renderers
    categories.retain(|category| !category.goals.is_empty());
    categories
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
