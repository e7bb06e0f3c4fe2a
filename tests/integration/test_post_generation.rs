use std::path::Path;
use std::process::Command;
use tempfile::TempDir;
use pjgen::{ProjectGenerator, StepOutcome};

fn tool_available(program: &str) -> bool {
    Command::new(program)
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

fn generated_project(parent: &Path) -> ProjectGenerator {
    let mut generator = ProjectGenerator::new();
    assert!(generator.set_parent_dir_path(parent));
    assert!(generator.set_project_name("myproject"));
    assert!(generator.execute().unwrap());
    generator
}

#[test]
fn test_create_venv() {
    let python = if cfg!(windows) { "python" } else { "python3" };
    if !tool_available(python) {
        println!("{python} not found, skipping virtual environment test");
        return;
    }

    let temp_dir = TempDir::new().unwrap();
    let generator = generated_project(temp_dir.path()).with_python(python);
    let root = temp_dir.path().join("myproject");

    assert_eq!(generator.create_venv(&root, false).unwrap(), StepOutcome::Skipped);
    assert!(!root.join(".venv").is_dir());

    let outcome = generator.create_venv(&root, true).unwrap();
    match outcome {
        StepOutcome::Completed(output) if output.success() => assert!(root.join(".venv").is_dir()),
        // Some distributions ship python without the venv module
        other => println!("venv creation did not succeed: {other:?}"),
    }
}

#[test]
fn test_git_init() {
    let temp_dir = TempDir::new().unwrap();
    let generator = generated_project(temp_dir.path());
    let root = temp_dir.path().join("myproject");

    assert_eq!(generator.is_git(), tool_available("git"));
    if !generator.is_git() {
        assert_eq!(generator.git_init(&root, true).unwrap(), StepOutcome::Unavailable);
        return;
    }

    assert_eq!(generator.git_init(&root, false).unwrap(), StepOutcome::Skipped);
    assert!(!root.join(".git").is_dir());

    assert!(generator.git_init(&root, true).unwrap().succeeded());
    assert!(root.join(".git").is_dir());
}

#[test]
fn test_missing_interpreter_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let generator = generated_project(temp_dir.path()).with_python("pjgen-no-such-python");
    let root = temp_dir.path().join("myproject");

    let err = generator.create_venv(&root, true).unwrap_err();
    assert!(err.to_string().contains("pjgen-no-such-python"));
    assert!(!root.join(".venv").exists());
}
