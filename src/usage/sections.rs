//! Section-level rewrites of a markdownified help document.
//!
//! Documents are bytes: titles are decoded only to compare them, and text
//! that is not valid UTF-8 is moved or kept as it is.

use regex::bytes::{Captures, Regex};
use std::sync::OnceLock;

/// Where OPTIONS goes, in order of preference.
pub const OPTIONS_ANCHORS: [&str; 4] = ["POSITIONAL ARGUMENTS", "Description", "USAGE", "NAME"];

const OPTIONS_TITLE: &str = "OPTIONS";
const HEADER_PREFIX: &[u8] = b"## ";
const BOUNDARY_PREFIX: &[u8] = b"##";

/// A `## TITLE` section, as byte offsets into the document it was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub start: usize,
    pub end: usize,
}

impl Section {
    pub fn span<'a>(&self, doc: &'a [u8]) -> &'a [u8] {
        &doc[self.start..self.end]
    }
}

fn header_re() -> &'static Regex {
    static HEADER_RE: OnceLock<Regex> = OnceLock::new();
    HEADER_RE.get_or_init(|| Regex::new(r"(?m-u)^## [^\n]+").expect("regex for section headers"))
}

/// Byte offsets of every line start in `doc`, paired with the line.
fn lines_with_offsets(doc: &[u8]) -> impl Iterator<Item = (usize, &[u8])> {
    doc.split_inclusive(|byte| *byte == b'\n').scan(0usize, |offset, line| {
        let start = *offset;
        *offset += line.len();
        Some((start, line))
    })
}

/// List the `## ` sections of `doc` in document order.
///
/// A section ends where the next line starting with `##` begins, so deeper
/// headings such as `### Notes` also close it.
pub fn sections(doc: &[u8]) -> Vec<Section> {
    let mut found: Vec<Section> = Vec::new();
    for (start, line) in lines_with_offsets(doc) {
        if !line.starts_with(BOUNDARY_PREFIX) {
            continue;
        }
        if let Some(open) = found.last_mut().filter(|section| section.end == doc.len()) {
            open.end = start;
        }
        if let Some(title) = line.strip_prefix(HEADER_PREFIX) {
            let title = String::from_utf8_lossy(title);
            let title = title.trim_end();
            if !title.is_empty() {
                found.push(Section {
                    title: title.to_string(),
                    start,
                    end: doc.len(),
                });
            }
        }
    }
    found
}

/// First section whose title is exactly `title`.
pub fn find_section<'a>(sections: &'a [Section], title: &str) -> Option<&'a Section> {
    sections.iter().find(|section| section.title == title)
}

/// Move the OPTIONS section after the first anchor section that exists.
///
/// Anchor extents come from the document as it was before OPTIONS was cut
/// out. Without an anchor OPTIONS goes to the end; without OPTIONS the
/// document is returned unchanged.
pub fn relocate_options(doc: &[u8]) -> Vec<u8> {
    let all = sections(doc);
    let Some(options) = find_section(&all, OPTIONS_TITLE) else {
        return doc.to_vec();
    };

    let mut span = options.span(doc).to_vec();
    let removed = options.end - options.start;
    let mut rest = Vec::with_capacity(doc.len());
    rest.extend_from_slice(&doc[..options.start]);
    rest.extend_from_slice(&doc[options.end..]);

    let anchor = OPTIONS_ANCHORS
        .iter()
        .find_map(|title| find_section(&all, title));
    let insert_at = match anchor {
        Some(anchor) if anchor.end > options.start => anchor.end - removed,
        Some(anchor) => anchor.end,
        None => rest.len(),
    };
    tracing::debug!(
        anchor = anchor.map(|section| section.title.as_str()),
        insert_at,
        "relocating OPTIONS section"
    );

    // Headers only count at the start of a line.
    if insert_at < rest.len() && !span.ends_with(b"\n") {
        span.push(b'\n');
    }
    if insert_at > 0 && !rest[..insert_at].ends_with(b"\n") {
        span.insert(0, b'\n');
    }
    let tail = rest.split_off(insert_at);
    rest.extend_from_slice(&span);
    rest.extend_from_slice(&tail);
    rest
}

/// Keep the first letter of every section title and lowercase the rest.
///
/// A title that is not valid UTF-8 only has its ASCII letters lowercased.
pub fn capitalize_headers(doc: &[u8]) -> Vec<u8> {
    header_re()
        .replace_all(doc, |caps: &Captures<'_>| {
            let header = &caps[0];
            let title = &header[HEADER_PREFIX.len()..];
            let (first, tail) = title.split_at(first_char_len(title));
            let mut out = Vec::with_capacity(header.len());
            out.extend_from_slice(HEADER_PREFIX);
            out.extend_from_slice(first);
            match std::str::from_utf8(tail) {
                Ok(tail) => out.extend_from_slice(tail.to_lowercase().as_bytes()),
                Err(_) => out.extend_from_slice(&tail.to_ascii_lowercase()),
            }
            out
        })
        .into_owned()
}

/// Byte length of the first character of `text`, or 1 if it is not UTF-8.
fn first_char_len(text: &[u8]) -> usize {
    let head = &text[..text.len().min(4)];
    let valid = match std::str::from_utf8(head) {
        Ok(valid) => valid,
        Err(err) => std::str::from_utf8(&head[..err.valid_up_to()]).unwrap_or_default(),
    };
    valid
        .chars()
        .next()
        .map_or(text.len().min(1), char::len_utf8)
}

#[cfg(test)]
#[path = "sections_tests.rs"]
mod tests;
