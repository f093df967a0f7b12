use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

const PRELOAD_TAG: &str =
    r#"<link rel="preload" as="image" href="/assets/logo_wake_560.png" fetchpriority="high"/>"#;
const NAV_MARKER: &str = "<!-- wake-nav -->";

fn shipshape(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("shipshape").unwrap();
    cmd.arg("--root").arg(root);
    cmd
}

fn write_page(root: &Path, rel: &str, body: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let content = format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<title>Test</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        body
    );
    fs::write(path, content).unwrap();
}

#[test]
fn preload_patch_inserts_once_and_is_idempotent() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();
    write_page(root, "index.html", "<p>Welcome aboard</p>");

    shipshape(root)
        .arg("patch")
        .arg("preload-hero")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 fixed"));

    let after_first = fs::read_to_string(root.join("index.html")).unwrap();
    assert_eq!(after_first.matches(PRELOAD_TAG).count(), 1);
    assert!(after_first.contains(&format!("{}</head>", PRELOAD_TAG)));

    // Second run: byte-identical output, counted as skipped
    shipshape(root)
        .arg("patch")
        .arg("preload-hero")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 skipped"));

    let after_second = fs::read_to_string(root.join("index.html")).unwrap();
    assert_eq!(after_first, after_second);
}

#[test]
fn dedupe_patch_keeps_first_nav_block() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();
    let body = format!(
        "{}\n<script src=\"/js/nav.js\" data-copy=\"first\"></script>\n<p>middle</p>\n{}\n<script src=\"/js/nav.js\" data-copy=\"second\"></script>\n",
        NAV_MARKER, NAV_MARKER
    );
    write_page(root, "ports/nassau.html", &body);

    shipshape(root).arg("patch").arg("dedupe-nav").assert().success();

    let page = fs::read_to_string(root.join("ports/nassau.html")).unwrap();
    assert_eq!(page.matches(NAV_MARKER).count(), 1);
    assert!(page.contains("data-copy=\"first\""));
    assert!(!page.contains("data-copy=\"second\""));
}

#[test]
fn excluded_directories_are_never_touched() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();
    write_page(root, "vendors/slider/demo.html", "<img src=\"/i/x.png\">");

    shipshape(root)
        .arg("patch")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 processed"));

    let page = fs::read_to_string(root.join("vendors/slider/demo.html")).unwrap();
    assert!(page.contains("/i/x.png"));
    assert!(!page.contains("preload"));
}

#[test]
fn dry_run_reports_without_writing() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();
    write_page(root, "index.html", "<img src=\"/i/a.png\">");
    let before = fs::read_to_string(root.join("index.html")).unwrap();

    shipshape(root)
        .arg("patch")
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("1 fixed"));

    let after = fs::read_to_string(root.join("index.html")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn backup_flag_keeps_original_bytes() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();
    write_page(root, "index.html", "<img src=\"/i/a.png\">");
    let before = fs::read_to_string(root.join("index.html")).unwrap();

    shipshape(root).arg("patch").arg("--backup").assert().success();

    let backup = fs::read_to_string(root.join("index.html.bak")).unwrap();
    assert_eq!(before, backup);
    let after = fs::read_to_string(root.join("index.html")).unwrap();
    assert_ne!(before, after);
}

#[test]
fn strict_flag_fails_the_run_when_a_file_errors() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();
    write_page(root, "good.html", "<p>fine</p>");
    // Not valid UTF-8, so the read fails and the file is counted as errored
    fs::write(root.join("broken.html"), [0xff, 0xfe, 0x00, 0x48]).unwrap();

    // Default behavior: errors are reported but the exit code stays 0
    shipshape(root)
        .arg("patch")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 errored"))
        .stdout(predicate::str::contains("1 fixed"));

    fs::write(root.join("broken.html"), [0xff, 0xfe, 0x00, 0x48]).unwrap();
    shipshape(root)
        .arg("patch")
        .arg("--strict")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("1 errored"));
}

#[test]
fn report_sample_caps_the_changed_file_list() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();
    shipshape(root)
        .args(["config", "report-sample", "2"])
        .assert()
        .success();
    for name in ["a.html", "b.html", "c.html", "d.html"] {
        write_page(root, name, "<img src=\"/i/x.png\">");
    }

    shipshape(root)
        .arg("patch")
        .assert()
        .success()
        .stdout(predicate::str::contains("4 fixed"))
        .stdout(predicate::str::contains("2 more not shown"));

    // --verbose lifts the cap
    for name in ["a.html", "b.html", "c.html", "d.html"] {
        write_page(root, name, "<img src=\"/i/x.png\">");
    }
    shipshape(root)
        .arg("--verbose")
        .arg("patch")
        .assert()
        .success()
        .stdout(predicate::str::contains("more not shown").not());
}

#[test]
fn unknown_patch_name_fails() {
    let temp = tempfile::tempdir().unwrap();
    shipshape(temp.path())
        .arg("patch")
        .arg("no-such-patch")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown patch"));
}

#[test]
fn patches_command_lists_catalog() {
    let temp = tempfile::tempdir().unwrap();
    shipshape(temp.path())
        .arg("patches")
        .assert()
        .success()
        .stdout(predicate::str::contains("preload-hero"))
        .stdout(predicate::str::contains("dedupe-nav"))
        .stdout(predicate::str::contains("webp-images"));
}
