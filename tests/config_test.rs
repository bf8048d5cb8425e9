//! Tests for loading game configuration files.

use std::io::Write;
use std::path::{Path, PathBuf};
use strictly_minimax::{ClearScreen, FirstPlayer, GameConfig};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"
first_player = "ai"
pruning = true
clear_screen = "ansi"
log_file = "game.log"
log_filter = "strictly_minimax=debug"
"#,
    );

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.first_player(), Some(FirstPlayer::Ai));
    assert!(*config.pruning());
    assert_eq!(*config.clear_screen(), ClearScreen::Ansi);
    assert_eq!(config.log_file(), &Some(PathBuf::from("game.log")));
    assert_eq!(config.log_filter(), "strictly_minimax=debug");
}

#[test]
fn test_missing_fields_take_defaults() {
    let file = write_config("first_player = \"human\"\n");

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.first_player(), Some(FirstPlayer::Human));
    assert!(!*config.pruning());
    assert_eq!(*config.clear_screen(), ClearScreen::Auto);
    assert_eq!(*config.log_file(), None);
}

#[test]
fn test_no_path_means_defaults() {
    let config = GameConfig::load(None).unwrap();
    assert_eq!(config, GameConfig::default());
    assert_eq!(*config.first_player(), None);
    assert_eq!(*config.log_file(), None);
}

#[test]
fn test_log_file_is_opt_in() {
    let config = GameConfig::default().with_log_file(PathBuf::from("run.log"));
    assert_eq!(config.log_file(), &Some(PathBuf::from("run.log")));
    assert_eq!(GameConfig::default().log_file(), &None);
}

#[test]
fn test_bad_value_is_reported() {
    let file = write_config("first_player = \"nobody\"\n");

    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_missing_file_is_reported() {
    let err = GameConfig::load(Some(Path::new("/nonexistent/strictly_minimax.toml"))).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}
