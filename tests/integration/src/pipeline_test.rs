//! End-to-end integration test for the compile pipeline
//!
//! Exercises the complete flow: document loading -> settings extraction ->
//! tree building -> dependency resolution -> header emission -> write-back.

use std::fs;
use std::str::FromStr;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use confc_core::document;
use confc_core::{
    compile_header, unpack_version, BuildContext, BuildMode, BuildType, CxxStandard,
    ProjectSettings,
};

const DOCUMENT: &str = r#"{
    // build-time configuration for the demo service
    project: {
        name: "demo-service",
        desc: "Demo network service",
        "output-path": "conf.hpp",
        "project-dir": ".",
        version: "2.4.9",
        debug: true,
        dev: true,
    },
    config: {
        "max-connections": 512,
        retry_budget: 0x20,
        net: {
            port: 8080,
            endpoint: {
                dependency: "mode",
                development: "http://localhost:8080",
                production: "https://api.example.com",
            },
        },
        build: {
            optimization: {
                dependency: "type",
                debug: "-O0",
                release: "-O2",
            },
        },
    },
}"#;

/// Set up a temp directory holding the demo document.
fn setup() -> (TempDir, std::path::PathBuf) {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("conf.json5");
    fs::write(&config, DOCUMENT).unwrap();
    (temp, config)
}

fn ctx(settings: &ProjectSettings, output: &std::path::Path) -> BuildContext {
    BuildContext {
        target: "demo-service".to_string(),
        system: "linux".to_string(),
        arch: "x64".to_string(),
        mode: BuildMode::from_dev_flag(settings.dev),
        build_type: BuildType::from_debug_flag(settings.debug),
        commit_hash: None,
        std: CxxStandard::from_str("c++23").unwrap(),
        root_namespace: "config".to_string(),
        output_path: output.to_path_buf(),
    }
}

#[test]
fn test_load_compile_write_cycle() {
    let (temp, config) = setup();
    let output = temp.path().join("include/conf.hpp");

    // 1. Load the document and extract settings
    let root = document::load(&config).unwrap();
    let settings = ProjectSettings::from_document(&root).unwrap();
    assert_eq!(settings.name, "demo-service");
    assert_eq!(settings.version, "2.4.9");

    // 2. Compile and write
    let ctx = ctx(&settings, &output);
    let header = compile_header(&root, &settings, &ctx, "Copyright (c) the demo-service project")
        .unwrap();
    document::write_output(&output, &header).unwrap();

    // 3. Read back and check the emitted structure
    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, header);

    assert!(written.contains("#ifndef CONF_HPP"));
    assert!(written.contains("#define CONF_HPP"));
    assert!(written.ends_with("#endif // CONF_HPP\n"));
    assert!(written.contains("#include <cstdint>"));
    assert!(written.contains("#include <string_view>"));
    assert!(written.contains("#define CONFIG_VERSION_MAJOR(v) (((v) >> 16) & 0xFF)"));

    // Identifier normalization and literal classification
    assert!(written.contains("constexpr std::uint16_t max_connections = 512;"));
    assert!(written.contains("constexpr std::uint8_t retry_budget = 32;"));
    assert!(written.contains("constexpr std::uint16_t port = 8080;"));

    // The project namespace is emitted before user namespaces
    let project_pos = written.find("namespace project {").unwrap();
    let net_pos = written.find("namespace net {").unwrap();
    assert!(project_pos < net_pos);
}

#[test]
fn test_version_constant_unpacks_to_document_version() {
    let (temp, config) = setup();
    let output = temp.path().join("conf.hpp");

    let root = document::load(&config).unwrap();
    let settings = ProjectSettings::from_document(&root).unwrap();
    let header = compile_header(&root, &settings, &ctx(&settings, &output), "c").unwrap();

    let line = header
        .lines()
        .find(|l| l.contains("constexpr std::uint32_t version = "))
        .unwrap();
    let packed: u32 = line
        .trim()
        .trim_start_matches("constexpr std::uint32_t version = ")
        .trim_end_matches(';')
        .parse()
        .unwrap();
    assert_eq!(unpack_version(packed), (2, 4, 9));
}

#[test]
fn test_mode_and_type_matrix() {
    let (temp, config) = setup();
    let output = temp.path().join("conf.hpp");
    let root = document::load(&config).unwrap();
    let settings = ProjectSettings::from_document(&root).unwrap();

    let cases = [
        (BuildMode::Development, BuildType::Debug, "http://localhost:8080", "-O0"),
        (BuildMode::Development, BuildType::Release, "http://localhost:8080", "-O2"),
        (BuildMode::Production, BuildType::Debug, "https://api.example.com", "-O0"),
        (BuildMode::Production, BuildType::Release, "https://api.example.com", "-O2"),
    ];

    for (mode, build_type, endpoint, optimization) in cases {
        let mut c = ctx(&settings, &output);
        c.mode = mode;
        c.build_type = build_type;
        let header = compile_header(&root, &settings, &c, "c").unwrap();
        assert!(
            header.contains(&format!("endpoint = \"{endpoint}\";")),
            "{mode}/{build_type} should pick endpoint {endpoint}"
        );
        assert!(
            header.contains(&format!("optimization = \"{optimization}\";")),
            "{mode}/{build_type} should pick optimization {optimization}"
        );
    }
}

#[test]
fn test_compilation_is_deterministic() {
    let (temp, config) = setup();
    let output = temp.path().join("conf.hpp");
    let root = document::load(&config).unwrap();
    let settings = ProjectSettings::from_document(&root).unwrap();
    let ctx = ctx(&settings, &output);

    let first = compile_header(&root, &settings, &ctx, "c").unwrap();
    let second = compile_header(&root, &settings, &ctx, "c").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_rewrite_cycle_updates_defaults() {
    let (temp, config) = setup();
    let output = temp.path().join("conf.hpp");

    let mut root = document::load(&config).unwrap();

    // Persist a release/production invocation back into the document
    document::update_project_fields(
        &mut root,
        output.to_str().unwrap(),
        temp.path().to_str().unwrap(),
        false,
        false,
    )
    .unwrap();
    document::save(&config, &root).unwrap();

    // Reloading yields the new defaults
    let reloaded = document::load(&config).unwrap();
    let settings = ProjectSettings::from_document(&reloaded).unwrap();
    assert!(!settings.debug);
    assert!(!settings.dev);
    assert_eq!(settings.output_path, output.to_str().unwrap());

    // A fresh compile from the rewritten document is a release build
    let header = compile_header(&reloaded, &settings, &ctx(&settings, &output), "c").unwrap();
    assert!(header.contains("constexpr bool release = true;"));
    assert!(header.contains("constexpr bool production = true;"));
    assert!(header.contains("endpoint = \"https://api.example.com\";"));
}

#[test]
fn test_plain_json_document() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("conf.json");
    let doc = serde_json::json!({
        "project": {
            "name": "plain",
            "desc": "Plain JSON",
            "output-path": "plain.hpp",
            "project-dir": ".",
            "version": "1.0.0",
            "debug": false,
            "dev": false
        },
        "config": {"answer": 42}
    });
    document::save(&config, &doc).unwrap();

    let root = document::load(&config).unwrap();
    let settings = ProjectSettings::from_document(&root).unwrap();
    let output = temp.path().join("plain.hpp");
    let header = compile_header(&root, &settings, &ctx(&settings, &output), "c").unwrap();

    assert!(header.contains("#ifndef PLAIN_HPP"));
    assert!(header.contains("constexpr std::uint8_t answer = 42;"));
    assert!(header.contains("constexpr bool debug = false;"));
}
