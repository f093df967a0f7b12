//! Default meta description for pages that never got one.

use crate::error::Result;
use crate::patch::{ApplyMode, Rule, RulePatch};

const DEFAULT_DESCRIPTION: &str =
    "Cruise ship guides, deck plans and port information from Wake & Wave.";

pub fn meta_description() -> Result<RulePatch> {
    let tag = format!(
        r#"<meta name="description" content="{}"/>"#,
        DEFAULT_DESCRIPTION
    );
    let rules = vec![Rule::new(
        r"(?i)</head>",
        &format!("{}</head>", tag),
        "inserted default meta description",
    )?];

    RulePatch::new(
        "meta-description",
        "add a default meta description when the page has none",
        ApplyMode::FirstMatch,
        rules,
    )
    .with_guard(r#"(?i)name\s*=\s*["']?description"#)
}
