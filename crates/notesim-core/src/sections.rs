//! Heading-based document segmentation
//!
//! A line of one to six `#`, whitespace, then text opens a new section. Lines
//! before the first heading belong to a synthetic "Introduction" section.
//! Sections whose trimmed body is empty are dropped.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Heading label for content that precedes the first heading
pub const INTRODUCTION: &str = "Introduction";

static HEADING_LINE_RE: OnceLock<Regex> = OnceLock::new();

fn heading_line_re() -> &'static Regex {
    HEADING_LINE_RE.get_or_init(|| Regex::new(r"^(#{1,6})\s+(.+)").expect("valid regex"))
}

/// A heading-delimited span of a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub heading: String,
    pub body: String,
}

/// Segmentation options
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentOptions {
    /// Treat heading-like lines inside ``` fences as body text
    pub fence_aware: bool,
}

/// Split `text` into sections using the default (fence-blind) rules
pub fn segment(text: &str) -> Vec<Section> {
    segment_with(text, SegmentOptions::default())
}

/// Split `text` into sections
pub fn segment_with(text: &str, options: SegmentOptions) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut heading = INTRODUCTION.to_string();
    let mut body: Vec<&str> = Vec::new();
    let mut in_fence = false;

    for line in text.split('\n') {
        if options.fence_aware && line.trim_start().starts_with("```") {
            in_fence = !in_fence;
            body.push(line);
            continue;
        }

        let caps = if in_fence {
            None
        } else {
            heading_line_re().captures(line)
        };

        match caps {
            Some(caps) => {
                flush(&mut sections, &heading, &body);
                heading = caps[2].trim().to_string();
                body.clear();
            }
            None => body.push(line),
        }
    }
    flush(&mut sections, &heading, &body);

    sections
}

fn flush(sections: &mut Vec<Section>, heading: &str, body: &[&str]) {
    let joined = body.join("\n");
    let trimmed = joined.trim();
    if trimmed.is_empty() {
        return;
    }
    sections.push(Section {
        heading: heading.to_string(),
        body: trimmed.to_string(),
    });
}
