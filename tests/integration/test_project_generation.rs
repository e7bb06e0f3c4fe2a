use std::fs;
use std::thread;
use tempfile::TempDir;
use pjgen::{GenerationResult, LayoutPlanner, ProjectGenerator};

/// Scenario: parent exists, name "myproject", execute succeeds
#[test]
fn test_generate_myproject() {
    let temp_dir = TempDir::new().unwrap();
    let mut generator = ProjectGenerator::new();

    assert!(generator.set_parent_dir_path(temp_dir.path()));
    assert!(generator.set_project_name("myproject"));
    assert!(generator.execute().unwrap());

    let root = temp_dir.path().join("myproject");
    assert_eq!(generator.project_root_path(), Some(root.as_path()));
    for dir in ["docs", "logs", "tests", "myproject", "myproject/config"] {
        assert!(root.join(dir).is_dir(), "{dir} should exist");
    }

    let manifest: toml::Value = toml::from_str(&fs::read_to_string(root.join("pyproject.toml")).unwrap()).unwrap();
    assert_eq!(manifest["project"]["name"].as_str(), Some("myproject"));
    assert_eq!(manifest["project"]["version"].as_str(), Some("0.0.1"));

    // The second run hits the collision guard
    assert!(!generator.execute().unwrap());
    assert_eq!(generator.result(), GenerationResult::succeeded(&root));
}

/// Scenario: a non-string name is rejected and leaves no name behind
#[test]
fn test_non_string_name_rejected() {
    let mut generator = ProjectGenerator::new();
    assert!(!generator.set_project_name(toml::Value::Integer(123)));
    assert_eq!(generator.project_name(), None);
    assert!(generator.spec().is_none());
}

/// Scenario: a backslash in the name is rejected
#[test]
fn test_backslash_name_rejected() {
    let mut generator = ProjectGenerator::new();
    assert!(!generator.set_project_name("app\\sample"));
    assert!(generator.set_project_name("sample"));
    assert_eq!(generator.project_name(), Some("sample"));
}

#[test]
fn test_every_planned_path_exists() {
    let temp_dir = TempDir::new().unwrap();
    let mut generator = ProjectGenerator::new();
    generator.set_parent_dir_path(temp_dir.path());
    generator.set_project_name("complete");
    assert!(generator.execute().unwrap());

    let layout = LayoutPlanner::new("complete", temp_dir.path().join("complete")).plan();
    for path in layout.directories() {
        assert!(path.is_dir());
    }
    for path in layout.files() {
        assert!(path.is_file());
    }
}

#[test]
fn test_separate_generators_do_not_share_state() {
    let temp_dir = TempDir::new().unwrap();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let parent = temp_dir.path().to_path_buf();
            thread::spawn(move || {
                let mut generator = ProjectGenerator::new();
                generator.set_parent_dir_path(&parent);
                generator.set_project_name(format!("project{i}"));
                generator.execute().unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }

    for i in 0..4 {
        let root = temp_dir.path().join(format!("project{i}"));
        let manifest = fs::read_to_string(root.join("pyproject.toml")).unwrap();
        assert!(manifest.contains(&format!("name = \"project{i}\"")));
        assert_eq!(fs::read_dir(root.join("tests")).unwrap().count(), 2);
    }
}
