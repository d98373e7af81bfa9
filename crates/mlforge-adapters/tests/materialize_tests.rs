//! Integration tests: the materializer driving real adapter implementations.

use std::path::Path;

use mlforge_adapters::{LocalFilesystem, MemoryFilesystem, RecordingReporter};
use mlforge_core::{
    application::{
        Materializer,
        ports::{Filesystem, MaterializeEvent},
    },
    domain::{MANIFEST, RunConfig, manifest},
};

/// Render a manifest path for the given project name.
fn rendered(path: &str, name: &str) -> String {
    path.replace("{{PROJECT_NAME}}", name)
}

/// Run one materialization against a shared memory filesystem, returning the
/// events the run produced.
fn run(fs: &MemoryFilesystem, config: &RunConfig) -> Vec<MaterializeEvent> {
    let reporter = RecordingReporter::new();
    let service = Materializer::new(Box::new(fs.clone()), Box::new(reporter.clone()));
    service.materialize(config);
    reporter.events()
}

#[test]
fn fresh_run_materializes_the_full_skeleton() {
    let fs = MemoryFilesystem::new();
    let config = RunConfig::new("demo", false, false).unwrap();
    let events = run(&fs, &config);

    for spec in MANIFEST {
        let path = rendered(spec.path, "demo");
        assert!(fs.exists(Path::new(&path)), "missing: {path}");
    }

    // Packaging descriptor carries the name, exactly once.
    let setup = fs.read_file(Path::new("setup.py")).unwrap();
    assert!(setup.contains("name='demo'"));
    assert_eq!(setup.matches("demo").count(), 1);

    // Literal templates are written verbatim.
    assert_eq!(
        fs.read_file(Path::new("requirements.txt")).as_deref(),
        Some(manifest::REQUIREMENTS_TXT)
    );
    assert_eq!(
        fs.read_file(Path::new("config/config.yaml")).as_deref(),
        Some(manifest::CONFIG_YAML)
    );

    // Untemplated entries are zero bytes.
    assert_eq!(
        fs.read_file(Path::new("src/demo/__init__.py")).as_deref(),
        Some("")
    );
    assert_eq!(
        fs.read_file(Path::new(".github/workflows/.gitkeep"))
            .as_deref(),
        Some("")
    );

    assert!(events.iter().all(|e| !e.is_failure()));
}

#[test]
fn second_run_without_overwrite_changes_nothing() {
    let fs = MemoryFilesystem::new();
    let config = RunConfig::new("demo", false, false).unwrap();
    run(&fs, &config);

    let before: Vec<_> = MANIFEST
        .iter()
        .map(|spec| {
            let path = rendered(spec.path, "demo");
            fs.read_file(Path::new(&path)).unwrap()
        })
        .collect();

    let events = run(&fs, &config);

    // Every file is non-empty... except the empty placeholders, which the
    // zero-size rule rewrites with identical (empty) content. Skips cover
    // exactly the template-bearing entries.
    let skipped = events
        .iter()
        .filter(|e| matches!(e, MaterializeEvent::FileSkipped { .. }))
        .count();
    let templated = MANIFEST.iter().filter(|s| s.template.is_some()).count();
    assert_eq!(skipped, templated);

    for (spec, old) in MANIFEST.iter().zip(before) {
        let path = rendered(spec.path, "demo");
        assert_eq!(fs.read_file(Path::new(&path)).unwrap(), old, "{path}");
    }
}

#[test]
fn overwrite_replaces_foreign_content() {
    let fs = MemoryFilesystem::new();
    fs.write_file(Path::new("setup.py"), "# not the template").unwrap();

    let config = RunConfig::new("demo", false, true).unwrap();
    let events = run(&fs, &config);

    let setup = fs.read_file(Path::new("setup.py")).unwrap();
    assert!(setup.contains("name='demo'"));
    assert!(!setup.contains("not the template"));

    assert!(events.iter().any(|e| matches!(
        e,
        MaterializeEvent::FileOverwritten { path, .. } if path == Path::new("setup.py")
    )));
}

#[test]
fn without_overwrite_foreign_content_is_preserved() {
    let fs = MemoryFilesystem::new();
    fs.write_file(Path::new("setup.py"), "# not the template").unwrap();

    let config = RunConfig::new("demo", false, false).unwrap();
    let events = run(&fs, &config);

    assert_eq!(
        fs.read_file(Path::new("setup.py")).as_deref(),
        Some("# not the template")
    );
    assert!(events.iter().any(|e| matches!(
        e,
        MaterializeEvent::FileSkipped { path } if path == Path::new("setup.py")
    )));
}

#[test]
fn empty_existing_file_is_seeded_without_overwrite() {
    let fs = MemoryFilesystem::new();
    fs.write_file(Path::new("setup.py"), "").unwrap();

    let config = RunConfig::new("demo", false, false).unwrap();
    let events = run(&fs, &config);

    let setup = fs.read_file(Path::new("setup.py")).unwrap();
    assert!(setup.contains("name='demo'"));

    // Rewriting an empty file counts as creation, not overwrite.
    assert!(events.iter().any(|e| matches!(
        e,
        MaterializeEvent::FileCreated { path, .. } if path == Path::new("setup.py")
    )));
}

#[test]
fn dry_run_leaves_the_filesystem_untouched() {
    let fs = MemoryFilesystem::new();
    let config = RunConfig::new("demo", true, false).unwrap();
    let events = run(&fs, &config);

    assert!(fs.list_files().is_empty());
    assert_eq!(fs.directory_count(), 0);

    // One planned-file event per manifest entry, plus one planned-directory
    // event per entry that has a parent.
    let files = events
        .iter()
        .filter(|e| matches!(e, MaterializeEvent::FilePlanned { .. }))
        .count();
    let dirs = events
        .iter()
        .filter(|e| matches!(e, MaterializeEvent::DirPlanned { .. }))
        .count();
    assert_eq!(files, MANIFEST.len());
    assert_eq!(dirs, 12);
    assert!(events.iter().all(MaterializeEvent::is_planned));
}

#[test]
fn local_filesystem_writes_real_files() {
    let temp = tempfile::tempdir().unwrap();
    let reporter = RecordingReporter::new();
    let service = Materializer::new(
        Box::new(LocalFilesystem::with_root(temp.path())),
        Box::new(reporter.clone()),
    );

    let config = RunConfig::new("demo", false, false).unwrap();
    service.materialize(&config);

    assert!(temp.path().join("src/demo/components/__init__.py").exists());
    assert!(temp.path().join("templates/index.html").exists());

    let setup = std::fs::read_to_string(temp.path().join("setup.py")).unwrap();
    assert!(setup.contains("name='demo'"));

    let gitkeep = temp.path().join(".github/workflows/.gitkeep");
    assert_eq!(std::fs::metadata(&gitkeep).unwrap().len(), 0);

    assert!(reporter.events().iter().all(|e| !e.is_failure()));
}

#[test]
fn local_filesystem_reports_file_sizes() {
    let temp = tempfile::tempdir().unwrap();
    let fs = LocalFilesystem::with_root(temp.path());

    fs.write_file(Path::new("params.yaml"), "content").unwrap();
    assert_eq!(fs.file_size(Path::new("params.yaml")), Some(7));
    assert_eq!(fs.file_size(Path::new("missing.yaml")), None);

    fs.create_dir_all(Path::new("research")).unwrap();
    // Directories are not regular files.
    assert_eq!(fs.file_size(Path::new("research")), None);
}
