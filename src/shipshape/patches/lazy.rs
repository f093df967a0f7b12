//! Native lazy-loading for below-the-fold images.
//!
//! Adds `loading="lazy"` to `<img>` tags that have no `loading`
//! attribute. Tags carrying `fetchpriority` are left alone: the hero
//! image must never be lazied or the preload hint is wasted.

use crate::error::Result;
use crate::patch::{Patch, PatchOutcome};
use once_cell::sync::Lazy;
use regex::Regex;

static IMG_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<img\b[^>]*>").unwrap());
// Anchored on leading whitespace so data-loading= and friends don't count
static BLOCKING_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s(loading|fetchpriority)\s*=").unwrap());

pub struct LazyImages;

pub fn lazy_images() -> Result<LazyImages> {
    Ok(LazyImages)
}

fn wants_lazy(tag: &str) -> bool {
    !BLOCKING_ATTR.is_match(tag)
}

fn insert_loading(tag: &str) -> String {
    if let Some(stripped) = tag.strip_suffix("/>") {
        format!("{} loading=\"lazy\"/>", stripped.trim_end())
    } else if let Some(stripped) = tag.strip_suffix('>') {
        format!("{} loading=\"lazy\">", stripped.trim_end())
    } else {
        tag.to_string()
    }
}

impl Patch for LazyImages {
    fn name(&self) -> &str {
        "lazy-images"
    }

    fn description(&self) -> &str {
        "add loading=\"lazy\" to img tags that lack it"
    }

    fn already_applied(&self, _content: &str) -> bool {
        // Pure per-tag substitution; a tagged img no longer qualifies.
        false
    }

    fn apply(&self, content: &str) -> Result<PatchOutcome> {
        let candidates = IMG_TAG
            .find_iter(content)
            .filter(|m| wants_lazy(m.as_str()))
            .count();
        if candidates == 0 {
            return Ok(PatchOutcome::unchanged(content));
        }

        let rewritten = IMG_TAG.replace_all(content, |caps: &regex::Captures| {
            let tag = &caps[0];
            if wants_lazy(tag) {
                insert_loading(tag)
            } else {
                tag.to_string()
            }
        });

        Ok(PatchOutcome {
            content: rewritten.into_owned(),
            notes: vec![format!("marked {} image(s) lazy", candidates)],
        })
    }
}
