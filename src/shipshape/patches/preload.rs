//! Preload hint for the LCP hero image.
//!
//! Pages render the wake logo above the fold; preloading it with
//! `fetchpriority="high"` is the single biggest LCP win on slow
//! connections. The guard is any existing `rel=preload` in the page, so
//! pages that already preload something are left alone.

use crate::error::Result;
use crate::patch::{ApplyMode, Rule, RulePatch};

pub const HERO_PRELOAD_TAG: &str =
    r#"<link rel="preload" as="image" href="/assets/logo_wake_560.png" fetchpriority="high"/>"#;

pub fn hero_preload() -> Result<RulePatch> {
    let rules = vec![Rule::new(
        r"(?i)</head>",
        &format!("{}</head>", HERO_PRELOAD_TAG),
        "inserted hero image preload hint",
    )?];

    RulePatch::new(
        "preload-hero",
        "preload the hero logo image before </head>",
        ApplyMode::FirstMatch,
        rules,
    )
    .with_guard(r#"(?i)rel\s*=\s*["']?preload"#)
}
