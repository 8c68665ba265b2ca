use std::path::PathBuf;
use std::time::Duration;

use staticd::config::Config;

#[test]
fn test_config_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.server.port, 8000);
    assert_eq!(cfg.server.backlog, 128);
    assert_eq!(cfg.static_files.root, PathBuf::from("web"));
    assert_eq!(cfg.static_files.index, "index.html");
    assert_eq!(cfg.static_files.timeout_secs, 5);
}

#[test]
fn test_config_listen_addr_all_interfaces() {
    let cfg = Config::default();
    assert_eq!(cfg.listen_addr(), "0.0.0.0:8000");
}

#[test]
fn test_config_io_timeout() {
    let cfg = Config::default();
    assert_eq!(cfg.static_files.io_timeout(), Duration::from_secs(5));
}

#[test]
fn test_config_from_yaml() {
    let yaml = r#"
server:
  port: 9090
  backlog: 32
static_files:
  root: /srv/www
  index: home.html
  timeout_secs: 10
"#;

    let cfg: Config = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(cfg.server.port, 9090);
    assert_eq!(cfg.server.backlog, 32);
    assert_eq!(cfg.static_files.root, PathBuf::from("/srv/www"));
    assert_eq!(cfg.static_files.index, "home.html");
    assert_eq!(cfg.static_files.timeout_secs, 10);
}

#[test]
fn test_config_partial_yaml_keeps_defaults() {
    let yaml = r#"
server:
  port: 9090
"#;

    let cfg: Config = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(cfg.server.port, 9090);
    assert_eq!(cfg.server.backlog, 128);
    assert_eq!(cfg.static_files.root, PathBuf::from("web"));
}

#[test]
fn test_config_env_overrides() {
    // Single test for all env interaction so parallel tests never race on
    // the process environment.
    unsafe {
        std::env::remove_var("STATICD_CONFIG");
        std::env::set_var("PORT", "3000");
        std::env::set_var("STATICD_ROOT", "/tmp/site");
    }

    let cfg = Config::load().unwrap();
    assert_eq!(cfg.server.port, 3000);
    assert_eq!(cfg.static_files.root, PathBuf::from("/tmp/site"));

    unsafe {
        std::env::set_var("PORT", "not-a-port");
    }
    assert!(Config::load().is_err());

    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("STATICD_ROOT");
    }

    let cfg = Config::load().unwrap();
    assert_eq!(cfg.server.port, 8000);
}
