//! Config file loading tests

use std::error::Error as _;
use std::fs;
use std::path::PathBuf;
use telugu_songs::domain::error::ConfigError;
use telugu_songs::infrastructure::config::{generate_config_sample, load_config};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "telugu-songs-{}-{}.toml",
        std::process::id(),
        name
    ))
}

#[test]
fn test_missing_file_keeps_io_cause() {
    let path = temp_path("does-not-exist");
    let _ = fs::remove_file(&path);

    let err = load_config(path.to_str()).unwrap_err();
    match &err {
        ConfigError::Io { path: p, source } => {
            assert_eq!(p, &path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {:?}", other),
    }

    let cause = err.source().unwrap();
    assert!(cause.downcast_ref::<std::io::Error>().is_some());
}

#[test]
fn test_malformed_file_is_parse_error() {
    let path = temp_path("malformed");
    fs::write(&path, "[translator\nkey = ").unwrap();

    let err = load_config(path.to_str()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().starts_with("Failed to parse config file"));

    fs::remove_file(&path).ok();
}

#[test]
fn test_full_config_file() {
    let path = temp_path("full");
    fs::write(
        &path,
        r#"
[translator]
key = "tkey"
url = "https://translator.example/translate"
to = "hi"
accept_invalid_certs = true

[musixmatch]
key = "mkey"
search_url = "https://musixmatch.example/ws/1.1/track.search"
lyrics_language = "hi"

[filter]
exclude_marker = "Greatest"

[http]
timeout_secs = 5

[logging]
enable = false
path = "/tmp/tsongs.log"
level = "DEBUG"
"#,
    )
    .unwrap();

    let config = load_config(path.to_str()).unwrap();
    assert_eq!(config.translator.to, "hi");
    assert!(config.translator.accept_invalid_certs);
    assert_eq!(config.musixmatch.lyrics_language, "hi");
    assert_eq!(config.filter.exclude_marker, "Greatest");
    assert_eq!(config.http.timeout_secs, 5);
    assert_eq!(config.http.connect_timeout_secs, 10);
    assert!(!config.logging.enable);
    assert_eq!(config.logging.level, "DEBUG");

    fs::remove_file(&path).ok();
}

#[test]
fn test_generated_sample_loads() {
    let path = temp_path("sample");
    let _ = fs::remove_file(&path);

    generate_config_sample(&path).unwrap();
    let config = load_config(path.to_str()).unwrap();
    assert_eq!(config.filter.exclude_marker, "Hits");
    assert_eq!(config.translator.to, "te");

    // never overwrites
    let err = generate_config_sample(&path).unwrap_err();
    assert!(matches!(err, ConfigError::AlreadyExists(_)));

    fs::remove_file(&path).ok();
}

#[test]
fn test_zero_timeout_is_rejected() {
    let path = temp_path("zero-timeout");
    fs::write(
        &path,
        r#"
[translator]
key = "tkey"
url = "https://translator.example/translate"

[musixmatch]
key = "mkey"
search_url = "https://musixmatch.example/ws/1.1/track.search"

[http]
timeout_secs = 0
"#,
    )
    .unwrap();

    let err = load_config(path.to_str()).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { .. }));
    assert!(err.to_string().contains("http.timeout_secs must be greater than 0"));

    fs::remove_file(&path).ok();
}
