//! Tests for config loading and discovery.

use crate::config::{ConfigSource, find_candidates, has_config_suffix, locate, parse_document};
use crate::error::XtsError;
use crate::test_support::write_config;
use std::path::Path;
use tempfile::TempDir;

const SAMPLE: &str = r#"
build:
  description: Build the project
  command: make
test:
  unit:
    command: cargo test
  lint:
    command:
      - cargo fmt --check
      - cargo clippy
"#;

#[test]
fn test_suffix_convention() {
    assert!(has_config_suffix("tools.xts"));
    assert!(has_config_suffix("dir/tools.xts"));
    assert!(!has_config_suffix("tools.yaml"));
    assert!(!has_config_suffix("tools.xts.bak"));
    assert!(!has_config_suffix("toolsxts"));
}

#[test]
fn test_parse_preserves_document_order() {
    let doc = parse_document(Path::new("a.xts"), SAMPLE).unwrap();
    let names: Vec<_> = doc.command_names().collect();
    assert_eq!(names, vec!["build", "test"]);
}

#[test]
fn test_leaf_and_section_shapes() {
    let doc = parse_document(Path::new("a.xts"), SAMPLE).unwrap();

    let build = doc.get("build").unwrap();
    assert!(build.is_leaf());
    assert_eq!(build.steps(), vec!["make"]);
    assert_eq!(build.description(), Some("Build the project"));

    let test = doc.get("test").unwrap();
    assert!(!test.is_leaf());
    assert!(test.steps().is_empty());
    let children: Vec<_> = test.children().into_iter().map(|(name, _)| name).collect();
    assert_eq!(children, vec!["unit", "lint"]);

    let (_, lint) = &test.children()[1];
    assert_eq!(lint.steps(), vec!["cargo fmt --check", "cargo clippy"]);
}

#[test]
fn test_empty_command_is_not_a_leaf() {
    let doc = parse_document(
        Path::new("a.xts"),
        "a:\n  command: ''\nb:\n  command: ~\nc:\n  command: []\n",
    )
    .unwrap();

    for name in ["a", "b", "c"] {
        assert!(!doc.get(name).unwrap().is_leaf(), "{name} should be a section");
    }
}

#[test]
fn test_falsy_or_structured_command_is_not_a_leaf() {
    let doc = parse_document(
        Path::new("a.xts"),
        "a:\n  command: false\nb:\n  command: 0\nc:\n  command:\n    run: make\nd:\n  command:\n    - {run: make}\n",
    )
    .unwrap();

    for name in ["a", "b", "c", "d"] {
        let spec = doc.get(name).unwrap();
        assert!(!spec.is_leaf(), "{name} should be a section");
        assert!(spec.steps().is_empty());
    }
    assert!(doc.get("c").unwrap().children().is_empty());
}

#[test]
fn test_scalar_commands_are_leaves() {
    let doc = parse_document(Path::new("a.xts"), "a:\n  command: true\nb:\n  command: 42\n").unwrap();
    assert_eq!(doc.get("a").unwrap().steps(), vec!["true"]);
    assert_eq!(doc.get("b").unwrap().steps(), vec!["42"]);
}

#[test]
fn test_duplicate_commands_are_rejected() {
    let err = parse_document(
        Path::new("dup.xts"),
        "build:\n  command: make\nbuild:\n  command: ninja\n",
    )
    .unwrap_err();

    match err {
        XtsError::ConfigParse { message, .. } => assert!(message.contains("duplicate")),
        other => panic!("expected ConfigParse, got {other:?}"),
    }
}

#[test]
fn test_non_mapping_documents_are_rejected() {
    for content in ["- build\n- test\n", "just a string\n", "build: make\n", ""] {
        let err = parse_document(Path::new("bad.xts"), content).unwrap_err();
        assert!(
            matches!(err, XtsError::ConfigParse { .. }),
            "{content:?} gave {err:?}"
        );
    }
}

#[test]
fn test_open_valid_file() {
    let temp = TempDir::new().unwrap();
    let path = write_config(temp.path(), "tools.xts", SAMPLE);

    let source = ConfigSource::open(&path).unwrap();
    assert_eq!(source.path(), path.as_path());
    assert_eq!(source.document().len(), 2);
}

#[test]
fn test_open_missing_file() {
    let temp = TempDir::new().unwrap();
    let err = ConfigSource::open(temp.path().join("missing.xts")).unwrap_err();
    assert!(matches!(err, XtsError::ConfigMissing(_)));
    assert!(err.to_string().contains("does not exist"));
}

#[test]
fn test_open_wrong_suffix() {
    let temp = TempDir::new().unwrap();
    let path = write_config(temp.path(), "tools.yaml", SAMPLE);
    let err = ConfigSource::open(&path).unwrap_err();
    assert!(matches!(err, XtsError::ConfigMissing(_)));
}

#[test]
fn test_open_unparseable_file() {
    let temp = TempDir::new().unwrap();
    let path = write_config(temp.path(), "broken.xts", "build: [unclosed\n");
    let err = ConfigSource::open(&path).unwrap_err();
    assert!(matches!(err, XtsError::ConfigParse { .. }));
}

#[cfg(unix)]
#[test]
fn test_open_unreadable_file() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let path = write_config(temp.path(), "secret.xts", SAMPLE);
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o000)).unwrap();

    // Root ignores file modes; nothing to check there.
    if std::fs::read_to_string(&path).is_ok() {
        return;
    }

    let err = ConfigSource::open(&path).unwrap_err();
    match err {
        XtsError::ConfigAccess(message) => {
            assert!(message.starts_with("Could not read xts config: ["));
        }
        other => panic!("expected ConfigAccess, got {other:?}"),
    }
}

#[test]
fn test_find_candidates_sorted_and_files_only() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), "b.xts", SAMPLE);
    write_config(temp.path(), "a.xts", SAMPLE);
    write_config(temp.path(), "notes.txt", "hello");
    std::fs::create_dir(temp.path().join("dir.xts")).unwrap();

    let candidates = find_candidates(temp.path()).unwrap();
    assert_eq!(candidates, vec!["a.xts", "b.xts"]);
}

#[test]
fn test_locate_single_candidate() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), "only.xts", SAMPLE);

    let source = locate(temp.path()).unwrap();
    assert_eq!(source.path(), temp.path().join("only.xts").as_path());
}

#[test]
fn test_locate_no_candidates() {
    let temp = TempDir::new().unwrap();
    let err = locate(temp.path()).unwrap_err();
    assert!(matches!(err, XtsError::ConfigNotFound));
}

#[test]
fn test_locate_multiple_candidates_is_ambiguous() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), "b.xts", SAMPLE);
    write_config(temp.path(), "a.xts", SAMPLE);

    match locate(temp.path()).unwrap_err() {
        XtsError::ConfigAmbiguous { candidates } => {
            assert_eq!(candidates, vec!["a.xts", "b.xts"]);
        }
        other => panic!("expected ConfigAmbiguous, got {other:?}"),
    }
}
