//! Integration test for git metadata embedding
//!
//! Compiles a document inside a real repository and checks that the
//! resolved commit hash lands in the emitted header.

use std::fs;
use std::path::Path;

use git2::{Repository, Signature};
use tempfile::TempDir;

use confc_core::document;
use confc_core::{
    compile_header, BuildContext, BuildMode, BuildType, CxxStandard, ProjectSettings,
};

const DOCUMENT: &str = r#"{
    project: {
        name: "versioned",
        desc: "Versioned project",
        "output-path": "conf.hpp",
        "project-dir": ".",
        version: "1.0.0",
        debug: true,
        dev: true,
    },
    config: { answer: 42 },
}"#;

fn commit_once(repo: &Repository) {
    let sig = Signature::now("test", "test@example.com").unwrap();
    let tree_id = repo.index().unwrap().write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    repo.commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])
        .unwrap();
}

fn compile_with_hash(dir: &Path, commit_hash: Option<String>) -> String {
    let config = dir.join("conf.json5");
    fs::write(&config, DOCUMENT).unwrap();

    let root = document::load(&config).unwrap();
    let settings = ProjectSettings::from_document(&root).unwrap();
    let ctx = BuildContext {
        target: "none".to_string(),
        system: "none".to_string(),
        arch: "x64".to_string(),
        mode: BuildMode::from_dev_flag(settings.dev),
        build_type: BuildType::from_debug_flag(settings.debug),
        commit_hash,
        std: CxxStandard::Cxx23,
        root_namespace: "config".to_string(),
        output_path: dir.join("conf.hpp"),
    };
    compile_header(&root, &settings, &ctx, "c").unwrap()
}

#[test]
fn test_commit_hash_embedded_in_header() {
    let temp = TempDir::new().unwrap();
    let repo = Repository::init(temp.path()).unwrap();
    commit_once(&repo);

    let hash = confc_git::head_short_hash(temp.path()).unwrap();
    let header = compile_with_hash(temp.path(), Some(hash.clone()));

    assert!(header.contains(&format!("constexpr std::string_view git_hash = \"{hash}\";")));
}

#[test]
fn test_discovery_from_project_subdirectory() {
    let temp = TempDir::new().unwrap();
    let repo = Repository::init(temp.path()).unwrap();
    commit_once(&repo);

    let sub = temp.path().join("build/generated");
    fs::create_dir_all(&sub).unwrap();

    let from_root = confc_git::head_short_hash(temp.path()).unwrap();
    let from_sub = confc_git::head_short_hash(&sub).unwrap();
    assert_eq!(from_root, from_sub);
}

#[test]
fn test_header_without_repository_omits_hash() {
    let temp = TempDir::new().unwrap();

    assert!(confc_git::head_short_hash(temp.path()).is_err());

    let header = compile_with_hash(temp.path(), None);
    assert!(!header.contains("git_hash"));
    // The rest of the project namespace is still complete.
    assert!(header.contains("constexpr std::string_view name = \"versioned\";"));
    assert!(header.contains("constexpr std::uint8_t answer = 42;"));
}

#[test]
fn test_empty_repository_is_reported() {
    let temp = TempDir::new().unwrap();
    Repository::init(temp.path()).unwrap();

    let err = confc_git::head_short_hash(temp.path()).unwrap_err();
    assert!(matches!(err, confc_git::Error::EmptyRepository));
}
