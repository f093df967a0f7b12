use crate::commands::{CmdMessage, CmdResult, PatchInfo};
use crate::config::SiteConfig;
use crate::error::Result;
use crate::patches;
use crate::runner::{self, RunOptions};
use crate::select::SelectFilter;
use crate::store::ContentStore;
use std::path::Path;

/// Run the named patches (or the whole catalog) over the HTML corpus.
pub fn run<S: ContentStore>(
    store: &mut S,
    config: &SiteConfig,
    root: &Path,
    names: &[String],
    opts: RunOptions,
) -> Result<CmdResult> {
    let selected = patches::by_names(names)?;
    let filter = SelectFilter::html(root, &config.excluded);

    let report = runner::run_batch(store, &filter, &selected, &opts)?;

    let mut result = CmdResult::default();
    let prefix = if opts.dry_run { "Dry run: " } else { "" };
    if report.errored > 0 {
        result.add_message(CmdMessage::warning(format!(
            "{}{}",
            prefix,
            report.summary()
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "{}{}",
            prefix,
            report.summary()
        )));
    }
    Ok(result.with_report(report))
}

/// List the patch catalog.
pub fn list() -> Result<CmdResult> {
    let infos = patches::all()?
        .iter()
        .map(|p| PatchInfo {
            name: p.name().to_string(),
            description: p.description().to_string(),
        })
        .collect();
    Ok(CmdResult::default().with_patches(infos))
}
