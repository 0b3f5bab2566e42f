use super::*;

#[test]
fn defaults_when_unset() {
    let config = ServerConfig::from_values(None, None).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert!(config.site_dir.ends_with("../site"));
}

#[test]
fn reads_port_and_site_dir() {
    let config = ServerConfig::from_values(Some(" 8080 "), Some("/srv/fitcoach")).unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.site_dir, PathBuf::from("/srv/fitcoach"));
}

#[test]
fn blank_values_fall_back() {
    let config = ServerConfig::from_values(Some(""), Some("  ")).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.site_dir, default_site_dir());
}

#[test]
fn rejects_bad_port() {
    let err = ServerConfig::from_values(Some("http"), None).unwrap_err();
    assert!(matches!(err, ServerError::InvalidPort(ref raw) if raw == "http"));
    assert!(ServerConfig::from_values(Some("70000"), None).is_err());
}
