use school_admin::{
    config::{Config, ConfigManager},
    errors::SchoolError,
};
use tempfile::TempDir;

#[test]
fn missing_file_loads_defaults() {
    let dir = TempDir::new().unwrap();
    let manager = ConfigManager::new(dir.path().join("config.json"));
    assert_eq!(manager.load().unwrap(), Config::default());
}

#[test]
fn save_then_load_preserves_settings() {
    let dir = TempDir::new().unwrap();
    let manager = ConfigManager::new(dir.path().join("nested").join("config.json"));
    let config = Config {
        currency: "USD".into(),
        salary_window_months: 12,
        recent_activity_limit: 5,
        log_filter: Some("school_admin=debug".into()),
    };
    manager.save(&config).unwrap();

    assert_eq!(manager.load().unwrap(), config);
    let leftovers: Vec<_> = std::fs::read_dir(manager.path().parent().unwrap())
        .unwrap()
        .filter_map(Result::ok)
        .filter(|entry| entry.path().extension().map_or(false, |ext| ext == "tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn invalid_window_is_rejected_on_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    let manager = ConfigManager::new(&path);

    let bad = Config {
        salary_window_months: 0,
        ..Config::default()
    };
    assert!(matches!(manager.save(&bad), Err(SchoolError::Config(_))));
    assert!(!path.exists());

    std::fs::write(&path, r#"{"salary_window_months": 0}"#).unwrap();
    assert!(matches!(manager.load(), Err(SchoolError::Config(_))));

    std::fs::write(&path, "not json").unwrap();
    assert!(matches!(manager.load(), Err(SchoolError::Serde(_))));
}
