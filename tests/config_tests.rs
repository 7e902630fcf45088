use rtimetracker::config::Config;
use rtimetracker::errors::AppError;
use std::env;
use std::fs;
use std::path::PathBuf;

fn temp_conf(name: &str, content: Option<&str>) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{}_rtimetracker.conf", name));
    fs::remove_file(&path).ok();
    if let Some(c) = content {
        fs::write(&path, c).expect("write config");
    }
    path
}

#[test]
fn test_missing_file_yields_defaults() {
    let path = temp_conf("cfg_missing", None);
    let cfg = Config::load_from(&path).unwrap();

    assert_eq!(cfg.name_width, 13);
    assert_eq!(cfg.tick_ms, 1000);
    assert!(cfg.audit_log);
    assert!(cfg.database.ends_with("timetracker.sqlite"));
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let path = temp_conf("cfg_partial", Some("database: /tmp/custom.sqlite\nname_width: 20\n"));
    let cfg = Config::load_from(&path).unwrap();

    assert_eq!(cfg.database, "/tmp/custom.sqlite");
    assert_eq!(cfg.name_width, 20);
    assert_eq!(cfg.tick_ms, 1000);
    assert!(cfg.audit_log);
}

#[test]
fn test_empty_file_is_all_defaults() {
    let path = temp_conf("cfg_empty", Some(""));
    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.name_width, 13);
}

#[test]
fn test_malformed_file_is_a_fatal_config_error() {
    let path = temp_conf("cfg_malformed", Some("name_width: [not, a, number]\n"));
    let err = Config::load_from(&path).unwrap_err();

    assert!(matches!(err, AppError::Config(_)));
    assert!(!err.is_recoverable());
}

#[test]
fn test_tilde_database_is_expanded() {
    let cfg = Config {
        database: "~/tracker.sqlite".into(),
        ..Config::default()
    };
    let path = cfg.database_path();

    if dirs::home_dir().is_some() {
        assert!(!path.to_string_lossy().starts_with('~'));
        assert!(path.ends_with("tracker.sqlite"));
    }
}
