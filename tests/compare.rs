//! End-to-end comparison scenarios through the library API

use std::collections::BTreeSet;
use std::path::Path;

use canopy::test_utils::TestTree;
use canopy::{
    compare_directories, export_comparison, render_comparison_html, render_comparison_text, Error,
    FilterConfig, Presence, Side,
};

/// Left has src/a.py and src/b.py; right has src/a.py and src/c.py.
fn scenario_a() -> (TestTree, TestTree) {
    let left = TestTree::new();
    left.add_file("src/a.py", "");
    left.add_file("src/b.py", "");
    let right = TestTree::new();
    right.add_file("src/a.py", "");
    right.add_file("src/c.py", "");
    (left, right)
}

#[test]
fn test_scenario_a_classification() {
    let (left, right) = scenario_a();
    let result = compare_directories(left.path(), right.path(), &FilterConfig::new());

    assert_eq!(
        result.extensions,
        BTreeSet::from([".py".to_string()])
    );

    let diff = result.diff();
    let src = &diff.dirs[0];
    assert_eq!(src.name, "src");
    assert_eq!(src.presence, Presence::Both);

    let presences: Vec<(&str, Presence)> = src
        .files
        .iter()
        .map(|f| (f.name.as_str(), f.presence))
        .collect();
    assert_eq!(
        presences,
        vec![
            ("a.py", Presence::Both),
            ("b.py", Presence::LeftOnly),
            ("c.py", Presence::RightOnly),
        ]
    );
}

#[test]
fn test_scenario_a_exports_agree_with_diff() {
    let (left, right) = scenario_a();
    let result = compare_directories(left.path(), right.path(), &FilterConfig::new());
    let diff = result.diff();

    // HTML marks exactly the diff's unique entries.
    let html = render_comparison_html(&result);
    assert!(html.contains("<li class=\"file-unique\"><span class=\"file\">📄 b.py</span></li>"));
    assert!(html.contains("<li class=\"file-unique\"><span class=\"file\">📄 c.py</span></li>"));
    assert!(html.contains("<li><span class=\"file\">📄 a.py</span></li>"));
    assert_eq!(html.matches("class=\"file-unique\"").count(), 2);
    assert_eq!(
        diff.unique_paths(Side::Left),
        BTreeSet::from(["src/b.py".to_string()])
    );
    assert_eq!(
        diff.unique_paths(Side::Right),
        BTreeSet::from(["src/c.py".to_string()])
    );

    // Text export carries both sides' trees without uniqueness marks.
    let text = render_comparison_text(&result);
    assert!(text.contains("📄 b.py"));
    assert!(text.contains("📄 c.py"));
    assert_eq!(text.matches("📄 a.py").count(), 2);
}

#[test]
fn test_scenario_b_empty_side() {
    let left = TestTree::new();
    left.add_file("src/a.py", "");
    left.add_file("README.md", "");
    let right = TestTree::new();

    let result = compare_directories(left.path(), right.path(), &FilterConfig::new());
    let diff = result.diff();

    assert!(diff.unique_paths(Side::Right).is_empty());
    assert_eq!(
        diff.unique_paths(Side::Left),
        BTreeSet::from([
            "README.md".to_string(),
            "src".to_string(),
            "src/a.py".to_string(),
        ])
    );

    // The empty side's pane shows nothing below its root.
    let html = render_comparison_html(&result);
    let right_pane = html.split("<div class=\"directory-tree\">").nth(2).unwrap();
    assert!(!right_pane.contains("📄"));
}

#[test]
fn test_extension_exclusion_empties_the_diff() {
    let (left, right) = scenario_a();
    let config = FilterConfig::new().with_exclude_extensions(["py"]);
    let result = compare_directories(left.path(), right.path(), &config);

    assert!(result.extensions.is_empty());
    let diff = result.diff();
    assert!(diff.unique_paths(Side::Left).is_empty());
    assert!(diff.unique_paths(Side::Right).is_empty());
    // src itself survives on both sides, just with no files.
    assert_eq!(diff.dirs[0].presence, Presence::Both);
    assert!(diff.dirs[0].files.is_empty());
}

#[test]
fn test_symmetry_of_swapped_comparison() {
    let (left, right) = scenario_a();
    let config = FilterConfig::new();
    let forward = compare_directories(left.path(), right.path(), &config).diff();
    let swapped = compare_directories(right.path(), left.path(), &config).diff();

    assert_eq!(
        forward.unique_paths(Side::Left),
        swapped.unique_paths(Side::Right)
    );
    assert_eq!(
        forward.unique_paths(Side::Right),
        swapped.unique_paths(Side::Left)
    );
}

#[test]
fn test_nonexistent_roots_compare_as_empty() {
    let result = compare_directories(
        Path::new("/no/such/left"),
        Path::new("/no/such/right"),
        &FilterConfig::new(),
    );
    assert!(result.left.structure.is_empty());
    assert!(result.right.structure.is_empty());
    assert!(result.extensions.is_empty());
}

#[test]
fn test_unsupported_format_writes_no_file() {
    let (left, right) = scenario_a();
    let result = compare_directories(left.path(), right.path(), &FilterConfig::new());

    let out = TestTree::new();
    let target = out.path().join("comparison.pdf");
    let err = export_comparison(&result, "pdf", &target);
    assert!(matches!(err, Err(Error::UnsupportedFormat(f)) if f == "pdf"));
    assert!(!target.exists());
}

#[test]
fn test_export_files_are_written() {
    let (left, right) = scenario_a();
    let result = compare_directories(left.path(), right.path(), &FilterConfig::new());

    let out = TestTree::new();
    let txt = out.path().join("cmp.txt");
    let html = out.path().join("cmp.html");
    export_comparison(&result, "txt", &txt).unwrap();
    export_comparison(&result, "html", &html).unwrap();

    let txt_content = std::fs::read_to_string(&txt).unwrap();
    assert!(txt_content.starts_with("Directory Comparison:"));
    let html_content = std::fs::read_to_string(&html).unwrap();
    assert!(html_content.starts_with("<!DOCTYPE html>"));
}

#[test]
fn test_write_failure_is_propagated() {
    let (left, right) = scenario_a();
    let result = compare_directories(left.path(), right.path(), &FilterConfig::new());

    let err = export_comparison(&result, "txt", Path::new("/no/such/dir/out.txt"));
    assert!(matches!(err, Err(Error::Io(_))));
}
