//! Loading styling configuration from disk.

use std::fs;
use tempfile::TempDir;
use themecell::config::{ConfigError, DarkModeStrategy, ShadeKey, StylingConfig};

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_json_file() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "styling.json",
        r##"{
            "content": ["./src/**/*.{html,js,svelte,ts}"],
            "darkMode": "class",
            "theme": {
                "extend": {
                    "colors": {
                        "blue": { "50": "#f0f9ff", "900": "#1e3a8a" },
                        "purple": { "50": "#faf5ff", "900": "#4c1d95" }
                    }
                }
            },
            "plugins": []
        }"##,
    );

    let config = StylingConfig::from_path(&path).unwrap();
    assert_eq!(config, StylingConfig::default());
}

#[test]
fn test_load_yaml_file_with_custom_marker() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "styling.YML",
        "content:\n  - ./app/**/*.svelte\ndarkMode: [class, .night]\ntheme:\n  extend:\n    colors:\n      slate:\n        100: '#f1f5f9'\n        50: '#f8fafc'\n",
    );

    let config = StylingConfig::from_path(&path).unwrap();
    assert_eq!(config.dark_mode.marker(), Some("night"));
    let shades: Vec<&ShadeKey> = config.palettes()["slate"].keys().collect();
    assert_eq!(shades, vec![&ShadeKey::Step(50), &ShadeKey::Step(100)]);
}

#[test]
fn test_saved_config_loads_back() {
    let dir = TempDir::new().unwrap();
    let mut config = StylingConfig::default();
    config.dark_mode = DarkModeStrategy::Media;
    config.plugins.push("typography".to_string());

    let path = write(&dir, "out.json", &config.to_json_string().unwrap());
    assert_eq!(StylingConfig::from_path(&path).unwrap(), config);
}

#[test]
fn test_missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let err = StylingConfig::from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn test_malformed_yaml_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "broken.yaml", "content: [unclosed\n");

    let err = StylingConfig::from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Yaml(_)));
}

#[test]
fn test_invalid_config_is_rejected_on_load() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "empty.json", r#"{"content": []}"#);

    let err = StylingConfig::from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { .. }));
}
