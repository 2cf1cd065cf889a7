//! Skills section isolation by a line scan: find the heading, find the next section
//! heading (or end of text), slice between.

use tracing::debug;

use crate::extraction::models::SectionHeadings;

/// Longest heading line (in words) still treated as a heading, e.g. `core design skills`.
const MAX_HEADING_WORDS: usize = 3;

/// Returns the text between the skills heading and the following section heading.
///
/// Empty when no heading is found or the section has no body. Content after a colon on
/// the heading line (`skills: figma, sketch`) belongs to the section. Only the first
/// heading counts; a repeated heading inside the section is kept as content.
pub fn extract_skills_section<'a>(text: &'a str, headings: &SectionHeadings) -> &'a str {
    let mut start: Option<usize> = None;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();
        let body = line.trim_end_matches(['\n', '\r']);

        match start {
            None => {
                if let Some(content_from) = heading_content_offset(body, headings) {
                    start = Some(if content_from < body.len() {
                        line_start + content_from
                    } else {
                        offset
                    });
                }
            }
            Some(section_start) => {
                if is_following_heading(body, headings) {
                    return slice_section(text, section_start, line_start);
                }
            }
        }
    }

    match start {
        Some(section_start) => slice_section(text, section_start, text.len()),
        None => {
            debug!("No skills heading found");
            ""
        }
    }
}

/// Byte offset within `line` where section content starts, if the line is a skills heading.
fn heading_content_offset(line: &str, headings: &SectionHeadings) -> Option<usize> {
    let (head, content_from) = match line.find(':') {
        Some(idx) => (&line[..idx], idx + 1),
        None => (line, line.len()),
    };

    let words: Vec<&str> = head.split_whitespace().collect();
    let last = words.last()?;
    if words.len() > MAX_HEADING_WORDS || !headings.skills.iter().any(|h| h == last) {
        return None;
    }
    Some(content_from)
}

fn is_following_heading(line: &str, headings: &SectionHeadings) -> bool {
    let normalized = line
        .trim()
        .trim_end_matches(':')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    headings.following.iter().any(|h| *h == normalized)
}

/// Slice between two offsets with surrounding whitespace removed.
fn slice_section(text: &str, start: usize, end: usize) -> &str {
    if start >= end {
        return "";
    }
    text[start..end].trim()
}
