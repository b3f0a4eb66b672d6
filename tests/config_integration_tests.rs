//! Integration tests for ConfigManager and the script variables file
//!
//! These tests verify:
//! - Loading from the repository-relative location
//! - Fatal handling of a missing file or missing required key
//! - Multi-document merging
//! - Preservation of unrelated CI variables

use camino::Utf8PathBuf;
use lintgate::config::{ConfigError, ConfigManager, REQUIRED_DIRECTORIES_KEY};
use std::fs;
use tempfile::TempDir;

fn create_repo_root() -> (TempDir, Utf8PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let root = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    (temp_dir, root)
}

fn write_variables_file(root: &Utf8PathBuf, contents: &str) -> Utf8PathBuf {
    let dir = root.join(".circleci");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("script_variables.yml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_from_repo_relative_path() {
    let (_temp_dir, root) = create_repo_root();
    let path = write_variables_file(
        &root,
        "CODING_STANDARDS_DIRECTORIES:\n  - web/modules/custom/\n  - web/themes/custom/\n",
    );

    let manager = ConfigManager::new(&path);
    let vars = manager.load_script_variables().unwrap();

    assert_eq!(
        vars.directory_patterns(),
        ["web/modules/custom/", "web/themes/custom/"]
    );
}

#[test]
fn test_missing_file_is_fatal() {
    let (_temp_dir, root) = create_repo_root();

    let manager = ConfigManager::new(root.join(".circleci/script_variables.yml"));
    let err = manager.load_script_variables().unwrap_err();

    assert!(matches!(err, ConfigError::MissingFile(_)));
    assert!(err.to_string().contains("could not be found"));
}

#[test]
fn test_missing_required_key_is_fatal() {
    let (_temp_dir, root) = create_repo_root();
    let path = write_variables_file(&root, "DEPLOY_TARGET: staging\nNOTIFY_CHANNEL: builds\n");

    let manager = ConfigManager::new(&path);
    let err = manager.load_script_variables().unwrap_err();

    assert!(matches!(err, ConfigError::MissingKey { .. }));
    assert!(err.to_string().contains(REQUIRED_DIRECTORIES_KEY));
}

#[test]
fn test_multi_document_variables_merge() {
    let (_temp_dir, root) = create_repo_root();
    let path = write_variables_file(
        &root,
        "---\nDEPLOY_TARGET: staging\n---\nCODING_STANDARDS_DIRECTORIES:\n  - src/\n",
    );

    let manager = ConfigManager::new(&path);
    let vars = manager.load_script_variables().unwrap();

    assert_eq!(vars.directory_patterns(), ["src/"]);
    assert!(vars.extra.contains_key("DEPLOY_TARGET"));
}

#[test]
fn test_invalid_yaml_is_fatal() {
    let (_temp_dir, root) = create_repo_root();
    let path = write_variables_file(&root, "CODING_STANDARDS_DIRECTORIES: [unclosed\n");

    let manager = ConfigManager::new(&path);
    let err = manager.load_script_variables().unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_directories_must_be_a_list() {
    let (_temp_dir, root) = create_repo_root();
    let path = write_variables_file(&root, "CODING_STANDARDS_DIRECTORIES: src/\n");

    let manager = ConfigManager::new(&path);
    let err = manager.load_script_variables().unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}
