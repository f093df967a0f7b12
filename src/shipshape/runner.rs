//! The batch runner: select → guard → apply → write-if-changed.
//!
//! Files are handled one at a time and independently; a failure on one
//! file is recorded and the batch continues. A file is only written when
//! its new content differs from the original bytes, so an idle run
//! leaves no spurious timestamps behind. There is no batch-level
//! rollback: files written before an interruption stay written.

use crate::error::Result;
use crate::model::{FileReport, Outcome, RunReport};
use crate::patch::Patch;
use crate::select::SelectFilter;
use crate::store::ContentStore;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Compute and report, but write nothing
    pub dry_run: bool,
    /// Write a `.bak` sibling before overwriting
    pub backup: bool,
}

pub fn run_batch<S: ContentStore>(
    store: &mut S,
    filter: &SelectFilter,
    patches: &[Box<dyn Patch>],
    opts: &RunOptions,
) -> Result<RunReport> {
    let mut report = RunReport::default();

    for path in store.select(filter)? {
        report.record(patch_file(store, &path, patches, opts));
    }

    Ok(report)
}

/// Apply every patch (guard permitting) to a single file.
/// Never propagates: all failures become an `Errored` entry so one bad
/// file cannot abort the batch.
fn patch_file<S: ContentStore>(
    store: &mut S,
    path: &Path,
    patches: &[Box<dyn Patch>],
    opts: &RunOptions,
) -> FileReport {
    let original = match store.read(path) {
        Ok(content) => content,
        Err(e) => {
            return FileReport::new(path.to_path_buf(), Outcome::Errored)
                .with_notes(vec![format!("read failed: {}", e)]);
        }
    };

    let mut content = original.clone();
    let mut notes = Vec::new();

    for patch in patches {
        if patch.already_applied(&content) {
            continue;
        }
        match patch.apply(&content) {
            Ok(outcome) => {
                if outcome.changed() {
                    content = outcome.content;
                    for note in outcome.notes {
                        notes.push(format!("{}: {}", patch.name(), note));
                    }
                }
            }
            Err(e) => {
                return FileReport::new(path.to_path_buf(), Outcome::Errored)
                    .with_notes(vec![format!("{}: {}", patch.name(), e)]);
            }
        }
    }

    if content == original {
        return FileReport::new(path.to_path_buf(), Outcome::Skipped);
    }

    if !opts.dry_run {
        if opts.backup {
            if let Err(e) = store.write(&backup_path(path), &original) {
                return FileReport::new(path.to_path_buf(), Outcome::Errored)
                    .with_notes(vec![format!("backup failed: {}", e)]);
            }
        }
        if let Err(e) = store.write(path, &content) {
            return FileReport::new(path.to_path_buf(), Outcome::Errored)
                .with_notes(vec![format!("write failed: {}", e)]);
        }
    }

    FileReport::new(path.to_path_buf(), Outcome::Fixed).with_notes(notes)
}

fn backup_path(path: &Path) -> PathBuf {
    let mut os: OsString = path.as_os_str().to_owned();
    os.push(".bak");
    PathBuf::from(os)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patches;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn html_filter() -> SelectFilter {
        SelectFilter::html("/site", &["/vendors/".to_string()])
    }

    fn run(store: &mut InMemoryStore, opts: RunOptions) -> RunReport {
        let patches = patches::all().unwrap();
        run_batch(store, &html_filter(), &patches, &opts).unwrap()
    }

    #[test]
    fn fixes_skips_and_sorts() {
        let mut fixture = StoreFixture::new()
            .with_page("/site/ships/horizon.html", "", "<img src=\"/i/deck.png\">")
            .with_page("/site/vendors/ui.html", "", "<img src=\"/i/x.png\">");
        let report = run(&mut fixture.store, RunOptions::default());

        // vendors page excluded entirely
        assert_eq!(report.processed, 1);
        assert_eq!(report.fixed, 1);
        let page = fixture
            .store
            .read(Path::new("/site/ships/horizon.html"))
            .unwrap();
        assert!(page.contains("/i/deck.webp"));
        assert!(page.contains("rel=\"preload\""));
    }

    #[test]
    fn second_run_is_byte_identical_and_skipped() {
        let mut fixture =
            StoreFixture::new().with_page("/site/index.html", "", "<img src=\"/i/a.png\">");
        run(&mut fixture.store, RunOptions::default());
        let after_first = fixture.store.read(Path::new("/site/index.html")).unwrap();

        let report = run(&mut fixture.store, RunOptions::default());
        let after_second = fixture.store.read(Path::new("/site/index.html")).unwrap();

        assert_eq!(after_first, after_second);
        assert_eq!(report.fixed, 0);
        assert_eq!(report.skipped, 1);
    }

    #[test]
    fn dry_run_writes_nothing() {
        let mut fixture =
            StoreFixture::new().with_page("/site/index.html", "", "<img src=\"/i/a.png\">");
        let before = fixture.store.read(Path::new("/site/index.html")).unwrap();

        let report = run(
            &mut fixture.store,
            RunOptions {
                dry_run: true,
                backup: false,
            },
        );

        assert_eq!(report.fixed, 1);
        let after = fixture.store.read(Path::new("/site/index.html")).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn backup_preserves_original_bytes() {
        let mut fixture =
            StoreFixture::new().with_page("/site/index.html", "", "<img src=\"/i/a.png\">");
        let before = fixture.store.read(Path::new("/site/index.html")).unwrap();

        run(
            &mut fixture.store,
            RunOptions {
                dry_run: false,
                backup: true,
            },
        );

        let backup = fixture
            .store
            .read(Path::new("/site/index.html.bak"))
            .unwrap();
        assert_eq!(backup, before);
    }

    #[test]
    fn untouched_file_counts_as_skipped() {
        // Page already fully patched by hand: preload present, description
        // present, webp refs, lazy images, single nav block.
        let head = concat!(
            "<link rel=\"preload\" as=\"image\" href=\"/assets/logo_wake_560.png\" ",
            "fetchpriority=\"high\"/>\n",
            "<meta name=\"description\" content=\"done\"/>\n"
        );
        let mut fixture = StoreFixture::new().with_page(
            "/site/done.html",
            head,
            "<img src=\"/i/a.webp\" loading=\"lazy\">",
        );
        let before = fixture.store.read(Path::new("/site/done.html")).unwrap();

        let report = run(&mut fixture.store, RunOptions::default());
        let after = fixture.store.read(Path::new("/site/done.html")).unwrap();

        assert_eq!(report.skipped, 1);
        assert_eq!(before, after);
    }
}
