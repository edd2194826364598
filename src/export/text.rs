//! Rich Text to Plain Text Normalization
//!
//! Field descriptions may be stored as rich text (HTML authored in the host),
//! but document runs need plain lines with explicit breaks. This module
//! converts markup to text in three steps: a fixed substitution table turns
//! block boundaries into newlines and tabs, a structural walk strips the
//! remaining tags, and basic character entities are decoded before trimming.

use regex::Regex;
use std::sync::OnceLock;

// ─────────────────────────────────────────────────────────────────────────────
// Boundary Substitutions
// ─────────────────────────────────────────────────────────────────────────────

/// Fixed table of block boundaries and their text equivalents.
///
/// Order matters: the paragraph-to-paragraph seam must be handled before the
/// individual paragraph tags.
const BLOCK_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("</td>", "\t"),
    ("</table>", "\n"),
    ("</tr>", "\n"),
    ("</p><p>", "\n\n"),
    ("</p>", "\n\n"),
    ("<p>", "\n"),
    ("</div>", "\n"),
    ("<ol>", "\n"),
    ("<ul>", "\n"),
    ("</li>", "\n"),
    ("<br>", "\n"),
    ("<br/>", "\n"),
    ("<br />", "\n"),
];

/// Closing heading tags (`</h1>`..`</h6>`) end a block like a paragraph does.
fn heading_close_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"</h[1-6]>").expect("valid literal pattern"))
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversion
// ─────────────────────────────────────────────────────────────────────────────

/// Convert a rich-text fragment to plain text.
///
/// Table cell/row, paragraph, div, heading, and list boundaries become
/// newlines or tabs; every other tag is stripped structurally (quoted
/// attribute values are respected, so a `>` inside an attribute does not end
/// the tag); basic entities are decoded; leading and trailing whitespace is
/// trimmed.
pub fn html_to_text(html: &str) -> String {
    let mut text = html.to_string();

    for (needle, replacement) in BLOCK_SUBSTITUTIONS {
        text = text.replace(needle, replacement);
    }
    text = heading_close_pattern().replace_all(&text, "\n\n").into_owned();

    let text = strip_tags(&text);
    let text = decode_entities(&text);
    text.trim().to_string()
}

/// Remove markup tags from the input, keeping the text content.
///
/// A `<` only opens a tag when followed by a letter, `/`, or `!`; anything
/// else (a lone `<`, `< 5`) stays literal text.
fn strip_tags(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '<' {
            output.push(ch);
            continue;
        }

        match chars.peek() {
            Some(&next) if next.is_ascii_alphabetic() || next == '/' || next == '!' => {
                consume_tag(&mut chars);
            }
            _ => output.push(ch),
        }
    }

    output
}

/// Advance past the current tag, honoring quoted attribute values.
fn consume_tag(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) {
    let mut quote: Option<char> = None;

    for ch in chars.by_ref() {
        match quote {
            Some(open) => {
                if ch == open {
                    quote = None;
                }
            }
            None => match ch {
                '"' | '\'' => quote = Some(ch),
                '>' => return,
                _ => {}
            },
        }
    }
}

/// Decode the basic character entities. The ampersand comes last so decoded
/// entities are not re-interpreted.
fn decode_entities(input: &str) -> String {
    input
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(html_to_text("Just some text"), "Just some text");
    }

    #[test]
    fn test_paragraphs_become_line_breaks() {
        assert_eq!(html_to_text("<p>First</p><p>Second</p>"), "First\n\nSecond");
    }

    #[test]
    fn test_headings_end_blocks() {
        assert_eq!(html_to_text("<h2>Title</h2>Body"), "Title\n\nBody");
        assert_eq!(html_to_text("<h6>Deep</h6>Body"), "Deep\n\nBody");
    }

    #[test]
    fn test_table_cells_become_tabs() {
        let html = "<table><tr><td>A</td><td>B</td></tr></table>";
        assert_eq!(html_to_text(html), "A\tB");
    }

    #[test]
    fn test_list_items_on_own_lines() {
        let html = "<ul><li>One</li><li>Two</li></ul>";
        assert_eq!(html_to_text(html), "One\nTwo");
    }

    #[test]
    fn test_br_variants() {
        assert_eq!(html_to_text("a<br>b"), "a\nb");
        assert_eq!(html_to_text("a<br/>b"), "a\nb");
        assert_eq!(html_to_text("a<br />b"), "a\nb");
    }

    #[test]
    fn test_inline_tags_stripped() {
        assert_eq!(
            html_to_text("<strong>Bold</strong> and <em>italic</em>"),
            "Bold and italic"
        );
    }

    #[test]
    fn test_attributes_with_angle_bracket() {
        // The '>' inside the quoted attribute must not end the tag
        assert_eq!(html_to_text(r#"<span title="a > b">kept</span>"#), "kept");
    }

    #[test]
    fn test_lone_angle_bracket_is_literal() {
        assert_eq!(html_to_text("3 < 5"), "3 < 5");
    }

    #[test]
    fn test_entities_decoded() {
        assert_eq!(html_to_text("Fish &amp; chips"), "Fish & chips");
        assert_eq!(html_to_text("&lt;script&gt;"), "<script>");
        assert_eq!(html_to_text("a&nbsp;b"), "a b");
    }

    #[test]
    fn test_amp_decoded_last() {
        // "&amp;lt;" is the literal text "&lt;", not "<"
        assert_eq!(html_to_text("&amp;lt;"), "&lt;");
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(html_to_text("<p>Hello</p>"), "Hello");
        assert_eq!(html_to_text("  spaced  "), "spaced");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(html_to_text(""), "");
    }

    #[test]
    fn test_mixed_rich_description() {
        // The closing heading contributes a blank line, the opening paragraph
        // its own line break
        let html = "<div><h3>Describe your day</h3><p>Use <em>full</em> sentences</p></div>";
        assert_eq!(
            html_to_text(html),
            "Describe your day\n\n\nUse full sentences"
        );
    }
}
