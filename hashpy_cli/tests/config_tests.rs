//! Layered configuration and the config file editor

use hashpy_cli::config::{ConfigManager, get_config};
use hashpy_cli::theme::ThemeName;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn create_test_config_manager(temp_dir: &TempDir) -> ConfigManager {
    ConfigManager::with_path(temp_dir.path().join("config.toml"))
}

#[test]
fn test_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config_manager(&temp_dir).load().unwrap();

    assert_eq!(config.shell.theme, ThemeName::Dark);
    assert_eq!(config.output.log_file, PathBuf::from("hash_py_output.txt"));
}

#[test]
fn test_partial_file_overrides_only_given_keys() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[shell]\ntheme = \"light\"\ntyping_delay_ms = 5\n").unwrap();

    let config = get_config(Some(path)).unwrap();

    assert_eq!(config.shell.theme, ThemeName::Light);
    assert_eq!(config.shell.typing_delay_ms, 5);
    assert_eq!(config.shell.progress_duration_ms, 800);
    assert!(config.shell.animations_enabled);
    assert!(config.output.color_enabled);
}

#[test]
fn test_invalid_theme_in_file_fails_to_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[shell]\ntheme = \"neon\"\n").unwrap();

    assert!(get_config(Some(path)).is_err());
}

#[test]
fn test_set_creates_file_and_parent_dirs() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("config.toml");
    let mut manager = ConfigManager::with_path(path.clone());

    manager.set("output.log_file", "hashes.log").unwrap();

    assert!(path.exists());
    assert_eq!(manager.get("output.log_file").unwrap(), "hashes.log");
}

#[test]
fn test_set_keeps_other_values() {
    let temp_dir = TempDir::new().unwrap();
    let mut manager = create_test_config_manager(&temp_dir);

    manager.set("shell.theme", "light").unwrap();
    manager.set("shell.animations_enabled", "false").unwrap();
    manager.set("shell.progress_duration_ms", "200").unwrap();

    let config = manager.load().unwrap();
    assert_eq!(config.shell.theme, ThemeName::Light);
    assert!(!config.shell.animations_enabled);
    assert_eq!(config.shell.progress_duration_ms, 200);
}

#[test]
fn test_set_rejects_bad_values() {
    let temp_dir = TempDir::new().unwrap();
    let mut manager = create_test_config_manager(&temp_dir);

    assert!(manager.set("shell.animations_enabled", "maybe").is_err());
    assert!(manager.set("shell.typing_delay_ms", "-1").is_err());
    assert!(manager.set("output.log_file", "  ").is_err());
    assert!(manager.set("nosection", "1").is_err());
    assert!(!temp_dir.path().join("config.toml").exists());
}

#[test]
fn test_get_unknown_key() {
    let temp_dir = TempDir::new().unwrap();
    let manager = create_test_config_manager(&temp_dir);

    assert!(manager.get("shell.missing").is_err());
}

#[test]
fn test_list_is_sorted_and_complete() {
    let temp_dir = TempDir::new().unwrap();
    let manager = create_test_config_manager(&temp_dir);

    let keys: Vec<String> = manager.list().unwrap().into_iter().map(|(k, _)| k).collect();

    assert_eq!(
        keys,
        [
            "output.color_enabled",
            "output.log_file",
            "shell.animations_enabled",
            "shell.progress_duration_ms",
            "shell.theme",
            "shell.typing_delay_ms",
        ]
    );
}
