use hrm_core::db::open_db;
use hrm_core::{ConfigError, HrmConfig};
use serde_json::json;

#[test]
fn load_reads_company_profile_and_offset() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("hrm.db");
    let config_path = dir.path().join("hrm.json");
    let body = json!({
        "db_path": db_path,
        "log_level": "warn",
        "retirement_offset_years": 59,
        "company": {
            "name": "National University",
            "address": "Gazipur-1704, Bangladesh",
            "phone": "+880",
            "email": "hr@example.org"
        }
    });
    std::fs::write(&config_path, body.to_string()).unwrap();

    let config = HrmConfig::load(&config_path).unwrap();
    assert_eq!(config.db_path, db_path);
    assert_eq!(config.log_level(), "warn");
    assert_eq!(config.company.name, "National University");
    assert_eq!(config.company.logo_url, None);
    assert_eq!(config.sheet_options().retirement_offset_years, 59);

    open_db(&config.db_path).unwrap();
    assert!(db_path.exists());
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = HrmConfig::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = HrmConfig::from_json_str("{ db_path: ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}
