use std::fs;
use std::path::Path;

use ampkit_copy::copy::{copy_dir_all, replace_dir};
use ampkit_copy::error::CopyError;
use tempfile::TempDir;

fn make_skill_tree(root: &Path) {
    fs::create_dir_all(root.join("templates/nested")).unwrap();
    fs::write(root.join("SKILL.md"), "---\nname: amp-docs\n---\n# Docs\n").unwrap();
    fs::write(root.join("templates/README.md"), "readme").unwrap();
    fs::write(root.join("templates/nested/diagram.mmd"), "graph TD").unwrap();
}

#[test]
fn copy_mirrors_nested_tree() {
    let src = TempDir::new().unwrap();
    make_skill_tree(src.path());
    let out = TempDir::new().unwrap();
    let dst = out.path().join("a/b/amp-docs");

    let copied = copy_dir_all(src.path(), &dst).unwrap();

    assert_eq!(copied, 3);
    assert_eq!(
        fs::read_to_string(dst.join("templates/nested/diagram.mmd")).unwrap(),
        "graph TD"
    );
    assert!(dst.join("SKILL.md").is_file());
}

#[test]
fn copy_overwrites_but_keeps_unrelated_files() {
    let src = TempDir::new().unwrap();
    make_skill_tree(src.path());
    let dst = TempDir::new().unwrap();
    fs::write(dst.path().join("SKILL.md"), "old").unwrap();
    fs::write(dst.path().join("extra.md"), "extra").unwrap();

    copy_dir_all(src.path(), dst.path()).unwrap();

    assert!(fs::read_to_string(dst.path().join("SKILL.md"))
        .unwrap()
        .contains("# Docs"));
    assert!(dst.path().join("extra.md").exists());
}

#[test]
fn replace_drops_stale_files() {
    let src = TempDir::new().unwrap();
    make_skill_tree(src.path());
    let out = TempDir::new().unwrap();
    let dst = out.path().join("amp-docs");
    fs::create_dir_all(dst.join("old-dir")).unwrap();
    fs::write(dst.join("old-dir/stale.md"), "stale").unwrap();
    fs::write(dst.join("SKILL.md"), "old").unwrap();

    replace_dir(src.path(), &dst).unwrap();

    assert!(!dst.join("old-dir").exists());
    assert!(fs::read_to_string(dst.join("SKILL.md"))
        .unwrap()
        .contains("# Docs"));
}

#[test]
fn replace_with_missing_source_leaves_target_untouched() {
    let out = TempDir::new().unwrap();
    let dst = out.path().join("amp-docs");
    fs::create_dir_all(&dst).unwrap();
    fs::write(dst.join("SKILL.md"), "keep").unwrap();

    let err = replace_dir(&out.path().join("missing"), &dst).unwrap_err();

    assert!(matches!(err, CopyError::NotADirectory(_)));
    assert_eq!(fs::read_to_string(dst.join("SKILL.md")).unwrap(), "keep");
}

#[test]
fn replace_onto_itself_keeps_source() {
    let src = TempDir::new().unwrap();
    make_skill_tree(src.path());

    let err = replace_dir(src.path(), src.path()).unwrap_err();

    assert!(matches!(err, CopyError::Overlap { .. }), "{err}");
    assert!(src.path().join("SKILL.md").is_file());
    assert!(src.path().join("templates/nested/diagram.mmd").is_file());
}

#[test]
fn replace_parent_of_source_is_rejected() {
    let root = TempDir::new().unwrap();
    let src = root.path().join("skills/amp-docs");
    make_skill_tree(&src);

    let err = replace_dir(&src, &root.path().join("skills")).unwrap_err();

    assert!(matches!(err, CopyError::Overlap { .. }), "{err}");
    assert!(src.join("SKILL.md").is_file());
}

#[test]
fn copy_into_own_subdirectory_is_rejected() {
    let src = TempDir::new().unwrap();
    make_skill_tree(src.path());

    let err = copy_dir_all(src.path(), &src.path().join("nested/copy")).unwrap_err();

    assert!(matches!(err, CopyError::Overlap { .. }), "{err}");
    assert!(!src.path().join("nested").exists());
}
