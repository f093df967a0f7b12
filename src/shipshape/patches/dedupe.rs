//! Deduplicate the injected navigation snippet.
//!
//! The nav block was injected by earlier maintenance runs and some pages
//! ended up with two or more copies. Each copy starts with the shared
//! marker comment and runs through its closing `</script>`. The first
//! occurrence in document order is kept; later complete blocks are
//! removed.

use crate::error::Result;
use crate::patch::{Patch, PatchOutcome};
use once_cell::sync::Lazy;
use regex::Regex;

/// Marker comment the injector stamped on every copy.
pub const NAV_MARKER: &str = "<!-- wake-nav -->";

static NAV_MARKER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<!--\s*wake-nav\s*-->").unwrap());
static NAV_BLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--\s*wake-nav\s*-->.*?</script>\s*").unwrap());

pub struct DedupeNav;

pub fn dedupe_nav() -> Result<DedupeNav> {
    Ok(DedupeNav)
}

impl Patch for DedupeNav {
    fn name(&self) -> &str {
        "dedupe-nav"
    }

    fn description(&self) -> &str {
        "remove duplicate injected navigation blocks, keeping the first"
    }

    fn already_applied(&self, content: &str) -> bool {
        NAV_MARKER_RE.find_iter(content).count() <= 1
    }

    fn apply(&self, content: &str) -> Result<PatchOutcome> {
        let blocks: Vec<(usize, usize)> = NAV_BLOCK_RE
            .find_iter(content)
            .map(|m| (m.start(), m.end()))
            .collect();
        if blocks.len() <= 1 {
            return Ok(PatchOutcome::unchanged(content));
        }

        // Keep everything, minus the byte ranges of blocks after the first
        let mut result = String::with_capacity(content.len());
        let mut cursor = 0;
        for &(start, end) in &blocks[1..] {
            result.push_str(&content[cursor..start]);
            cursor = end;
        }
        result.push_str(&content[cursor..]);

        Ok(PatchOutcome {
            content: result,
            notes: vec![format!("removed {} duplicate nav block(s)", blocks.len() - 1)],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav_block(id: &str) -> String {
        format!(
            "{}\n<script src=\"/js/nav.js\" data-copy=\"{}\"></script>\n",
            NAV_MARKER, id
        )
    }

    #[test]
    fn keeps_first_block_in_document_order() {
        let patch = dedupe_nav().unwrap();
        let page = format!(
            "<body>\n{}<p>content</p>\n{}</body>",
            nav_block("first"),
            nav_block("second")
        );
        let out = patch.apply(&page).unwrap();
        assert_eq!(NAV_MARKER_RE.find_iter(&out.content).count(), 1);
        assert!(out.content.contains("data-copy=\"first\""));
        assert!(!out.content.contains("data-copy=\"second\""));
    }

    #[test]
    fn three_copies_reduce_to_one() {
        let patch = dedupe_nav().unwrap();
        let page = format!("{}{}{}", nav_block("a"), nav_block("b"), nav_block("c"));
        let out = patch.apply(&page).unwrap();
        assert_eq!(out.notes, vec!["removed 2 duplicate nav block(s)".to_string()]);
        assert_eq!(NAV_MARKER_RE.find_iter(&out.content).count(), 1);
    }

    #[test]
    fn single_block_is_already_applied() {
        let patch = dedupe_nav().unwrap();
        let page = format!("<body>{}</body>", nav_block("only"));
        assert!(patch.already_applied(&page));
        let out = patch.apply(&page).unwrap();
        assert!(!out.changed());
        assert_eq!(out.content, page);
    }

    #[test]
    fn marker_whitespace_is_tolerated() {
        let patch = dedupe_nav().unwrap();
        let page = "<!--  wake-nav  -->\n<script></script>\n<!-- wake-nav -->\n<script></script>\n";
        let out = patch.apply(page).unwrap();
        assert_eq!(NAV_MARKER_RE.find_iter(&out.content).count(), 1);
    }
}
