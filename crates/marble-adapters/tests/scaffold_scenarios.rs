//! End-to-end runs of `MarbleApp` against real and in-memory filesystems.

use std::path::Path;

use marble_adapters::{JsonConfigLoader, LocalFilesystem, MemoryFilesystem};
use marble_core::{
    application::{ApplicationError, SENTINEL_CONTENT, SENTINEL_FILE},
    domain::DomainError,
    prelude::*,
};
use tempfile::TempDir;

fn local_app() -> MarbleApp {
    MarbleApp::builtin(Box::new(LocalFilesystem::new()))
}

fn config_for(dir: &Path) -> ProjectConfig {
    ProjectConfig::new(dir.to_string_lossy())
}

#[test]
fn creates_project_with_sentinel() {
    let temp = TempDir::new().unwrap();
    let outcome = local_app()
        .run(&["express", "myapp"], &config_for(temp.path()))
        .unwrap();

    let project = temp.path().join("myapp");
    assert!(project.is_dir());
    assert_eq!(
        std::fs::read_to_string(project.join(SENTINEL_FILE)).unwrap(),
        "Hello world!\n"
    );
    assert!(matches!(
        outcome,
        RunOutcome::Scaffolded {
            outcome: ScaffoldOutcome::Created { .. },
            ..
        }
    ));
}

#[test]
fn existing_project_is_left_untouched() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("myapp");
    std::fs::create_dir(&project).unwrap();
    std::fs::write(project.join("keep.txt"), "mine").unwrap();

    let err = local_app()
        .run(&["express", "myapp"], &config_for(temp.path()))
        .unwrap_err();

    assert!(err.to_string().contains("already exists"));
    assert!(!project.join(SENTINEL_FILE).exists());
    assert_eq!(
        std::fs::read_to_string(project.join("keep.txt")).unwrap(),
        "mine"
    );
}

#[test]
fn ping_creates_nothing() {
    let temp = TempDir::new().unwrap();
    let outcome = local_app()
        .run(&["express", "myapp", "--ping"], &config_for(temp.path()))
        .unwrap();

    assert!(!temp.path().join("myapp").exists());
    assert!(matches!(
        outcome,
        RunOutcome::Scaffolded {
            outcome: ScaffoldOutcome::Pinged,
            ..
        }
    ));
}

#[test]
fn unknown_framework_lists_supported() {
    let temp = TempDir::new().unwrap();
    let err = local_app()
        .run(&["angular", "myapp"], &config_for(temp.path()))
        .unwrap_err();

    assert!(err.to_string().contains("express, react, vue"));
    assert!(!temp.path().join("myapp").exists());
}

#[test]
fn second_run_reports_existing_directory() {
    let temp = TempDir::new().unwrap();
    let app = local_app();
    let config = config_for(temp.path());

    app.run(&["express", "myapp"], &config).unwrap();
    let err = app.run(&["express", "myapp"], &config).unwrap_err();

    assert!(matches!(
        err,
        MarbleError::Application(ApplicationError::ProjectAlreadyExists { .. })
    ));
}

#[test]
fn missing_projects_directory_is_reported() {
    let temp = TempDir::new().unwrap();
    let err = local_app()
        .run(&["express", "myapp"], &config_for(&temp.path().join("gone")))
        .unwrap_err();

    assert!(matches!(
        err,
        MarbleError::Application(ApplicationError::ProjectsDirectoryMissing { .. })
    ));
}

#[test]
fn flag_in_name_position_is_rejected() {
    let temp = TempDir::new().unwrap();
    let err = local_app()
        .run(&["express", "--ping"], &config_for(temp.path()))
        .unwrap_err();

    assert!(matches!(
        err,
        MarbleError::Domain(DomainError::InvalidProjectName { .. })
    ));
}

#[test]
fn absolute_name_cannot_leave_projects_directory() {
    let projects = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    let escaped = elsewhere.path().join("escaped");
    let name = escaped.to_string_lossy().into_owned();

    let err = local_app()
        .run(&["express", name.as_str()], &config_for(projects.path()))
        .unwrap_err();

    assert!(matches!(
        err,
        MarbleError::Application(ApplicationError::FilesystemError { .. })
    ));
    assert!(!escaped.exists());
    assert_eq!(std::fs::read_dir(projects.path()).unwrap().count(), 0);
}

#[test]
fn config_file_drives_the_run() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();
    std::fs::create_dir_all(home.join(".config")).unwrap();
    std::fs::create_dir(home.join("projects")).unwrap();
    std::fs::write(
        JsonConfigLoader::default_path(home),
        r#"{ "properties": { "projects_directory": "$HOME/projects" } }"#,
    )
    .unwrap();

    let config = JsonConfigLoader::for_home(home).load().unwrap();
    local_app().run(&["express", "api"], &config).unwrap();

    assert!(home.join("projects/api").join(SENTINEL_FILE).is_file());
}

#[test]
fn in_memory_run_records_sentinel() {
    let fs = MemoryFilesystem::with_dir("/tmp/proj");
    let app = MarbleApp::builtin(Box::new(fs.clone()));

    app.run(
        &["express", "myapp", "--install-packages", "cors", "helmet"],
        &ProjectConfig::new("/tmp/proj"),
    )
    .unwrap();

    assert_eq!(
        fs.read_file(Path::new("/tmp/proj/myapp/hello_world.txt"))
            .as_deref(),
        Some(SENTINEL_CONTENT)
    );
}

#[test]
fn failed_population_rolls_back_directory() {
    let fs = MemoryFilesystem::with_dir("/tmp/proj");
    // Writes into the project directory fail once it has been created.
    fs.set_read_only(Path::new("/tmp/proj/myapp"));
    let app = MarbleApp::builtin(Box::new(fs.clone()));

    let err = app
        .run(&["express", "myapp"], &ProjectConfig::new("/tmp/proj"))
        .unwrap_err();

    assert!(matches!(
        err,
        MarbleError::Application(ApplicationError::FilesystemError { .. })
    ));
    assert!(!fs.exists(Path::new("/tmp/proj/myapp")));
}

#[test]
fn vue_is_not_implemented() {
    let fs = MemoryFilesystem::with_dir("/tmp/proj");
    let app = MarbleApp::builtin(Box::new(fs.clone()));

    let err = app
        .run(&["vue", "myapp"], &ProjectConfig::new("/tmp/proj"))
        .unwrap_err();

    assert!(matches!(
        err,
        MarbleError::Application(ApplicationError::NotImplemented { .. })
    ));
    assert!(fs.list_files().is_empty());
}
