use std::io::Write;

use maze_content::ConfigLoader;

#[test]
fn loads_config_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "rows = 5\ncols = 7\nplacement_attempts = 3").unwrap();

    let config = ConfigLoader::load(file.path()).unwrap();
    assert_eq!((config.rows, config.cols), (5, 7));
    assert_eq!(config.placement_attempts, 3);
    assert_eq!(config.blocker_count(), 2);
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let error = ConfigLoader::load(&path).unwrap_err();
    assert!(error.to_string().contains("absent.toml"));
}

#[test]
fn invalid_values_name_the_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "placement_attempts = 0").unwrap();
    let error = ConfigLoader::load(file.path()).unwrap_err();
    let message = error.to_string();
    assert!(message.contains("Invalid maze config"));
    assert!(message.contains("at least 1"));
}
