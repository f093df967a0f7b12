//! Rewrite raster image references to their `.webp` siblings.
//!
//! Pure substitution, so no guard marker is needed: once a reference
//! points at `.webp` it no longer matches any rule. The actual pixel
//! conversion is the `images` command's job; this patch only retargets
//! the markup.

use crate::error::Result;
use crate::patch::{ApplyMode, Rule, RulePatch};

pub fn webp_images() -> Result<RulePatch> {
    let rules = vec![
        // src="foo.png" / data-src='foo.jpg', either quote style
        Rule::new(
            r#"(?i)(src|data-src)=(["'])([^"']+?)\.(?:png|jpe?g)(["'])"#,
            "${1}=${2}${3}.webp${4}",
            "rewrote src attribute to webp",
        )?,
        // single-entry srcset="foo.png"
        Rule::new(
            r#"(?i)srcset=(["'])([^"',]+?)\.(?:png|jpe?g)(["'])"#,
            "srcset=${1}${2}.webp${3}",
            "rewrote srcset attribute to webp",
        )?,
        // multi-entry srcset: extension followed by a width/density descriptor
        Rule::new(
            r"(?i)\.(?:png|jpe?g)(\s+[0-9.]+[wx])",
            ".webp${1}",
            "rewrote srcset entry to webp",
        )?,
        // trailing srcset entry with no descriptor: comma-led, quote-terminated
        Rule::new(
            r#"(?i)(,\s*)([^"',\s]+?)\.(?:png|jpe?g)(\s*["'])"#,
            "${1}${2}.webp${3}",
            "rewrote trailing srcset entry to webp",
        )?,
        // inline CSS url(foo.png)
        Rule::new(
            r#"(?i)url\((["']?)([^)"']+?)\.(?:png|jpe?g)(["']?)\)"#,
            "url(${1}${2}.webp${3})",
            "rewrote CSS url() to webp",
        )?,
    ];

    Ok(RulePatch::new(
        "webp-images",
        "retarget png/jpg image references to webp",
        ApplyMode::AllMatches,
        rules,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::Patch;

    #[test]
    fn rewrites_src_with_either_quote_style() {
        let patch = webp_images().unwrap();
        let page = r#"<img src="/images/deck.png"/> <img src='/images/pool.jpeg'>"#;
        let out = patch.apply(page).unwrap();
        assert_eq!(
            out.content,
            r#"<img src="/images/deck.webp"/> <img src='/images/pool.webp'>"#
        );
    }

    #[test]
    fn rewrites_multi_entry_srcset() {
        let patch = webp_images().unwrap();
        let page = r#"<img srcset="/i/a.png 480w, /i/a@2x.jpg 960w" src="/i/a.png">"#;
        let out = patch.apply(page).unwrap();
        assert!(out.content.contains("/i/a.webp 480w"));
        assert!(out.content.contains("/i/a@2x.webp 960w"));
        assert!(out.content.contains(r#"src="/i/a.webp""#));
    }

    #[test]
    fn rewrites_trailing_srcset_entry_without_descriptor() {
        let patch = webp_images().unwrap();
        let page = r#"<img srcset="/i/a.png 480w, /i/b.png" src="/i/b.png">"#;
        let out = patch.apply(page).unwrap();
        assert!(out.content.contains("/i/a.webp 480w"));
        assert!(out.content.contains(r#", /i/b.webp""#));
        assert!(out.content.contains(r#"src="/i/b.webp""#));
    }

    #[test]
    fn rewrites_inline_css_url() {
        let patch = webp_images().unwrap();
        let page = r#"<div style="background: url('/assets/wave.jpg')"></div>"#;
        let out = patch.apply(page).unwrap();
        assert!(out.content.contains("url('/assets/wave.webp')"));
    }

    #[test]
    fn is_idempotent_by_construction() {
        let patch = webp_images().unwrap();
        let page = r#"<img src="/images/deck.png">"#;
        let once = patch.apply(page).unwrap().content;
        let twice = patch.apply(&once).unwrap();
        assert_eq!(twice.content, once);
        assert!(!twice.changed());
    }

    #[test]
    fn leaves_non_image_references_alone() {
        let patch = webp_images().unwrap();
        let page = r#"<a href="/ships/index.html">ships</a> <img src="/i/map.svg">"#;
        let out = patch.apply(page).unwrap();
        assert!(!out.changed());
        assert_eq!(out.content, page);
    }
}
