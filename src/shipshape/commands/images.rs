use crate::commands::{CmdMessage, CmdResult};
use crate::config::SiteConfig;
use crate::error::Result;
use crate::images::ImageTool;
use crate::model::{FileReport, Outcome, RunReport};
use crate::select::SelectFilter;
use crate::store::ContentStore;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Convert raster images to webp via the configured external tool.
/// Explicit paths win; otherwise the selector finds every candidate
/// under the root. A tool failure on one image never aborts the batch.
pub fn run<S: ContentStore>(
    store: &S,
    config: &SiteConfig,
    root: &Path,
    paths: Vec<PathBuf>,
) -> Result<CmdResult> {
    let candidates = if paths.is_empty() {
        store.select(&SelectFilter::images(root, &config.excluded))?
    } else {
        paths
    };

    let tool = ImageTool::new(
        &config.image_tool,
        &config.image_args,
        Duration::from_secs(config.image_timeout_secs),
    );

    let mut report = RunReport::default();
    for path in candidates {
        match tool.convert(&path) {
            Ok(output) => report.record(
                FileReport::new(path, Outcome::Fixed)
                    .with_notes(vec![format!("wrote {}", output.display())]),
            ),
            Err(e) => report.record(
                FileReport::new(path, Outcome::Errored).with_notes(vec![e.to_string()]),
            ),
        }
    }

    let mut result = CmdResult::default();
    let message = format!("Converted {} of {} image(s)", report.fixed, report.processed);
    if report.errored > 0 {
        result.add_message(CmdMessage::warning(message));
    } else {
        result.add_message(CmdMessage::success(message));
    }
    Ok(result.with_report(report))
}
