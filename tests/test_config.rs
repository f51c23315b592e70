use std::io::Write;
use std::time::Duration;

use webworker::config::Config;

#[test]
fn test_config_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.server.listen_addr, "127.0.0.1:8080");
    assert_eq!(cfg.server.read_timeout(), None);
    assert_eq!(cfg.site.document_root, ".");
    assert_eq!(cfg.site.server_header, "Jon's very own server");
}

#[test]
fn test_config_from_yaml() {
    let yaml = r#"
server:
  listen_addr: "0.0.0.0:3000"
  read_timeout_secs: 30
site:
  document_root: "/srv/www"
  server_header: "test server"
"#;
    let cfg = Config::from_yaml(yaml).unwrap();
    assert_eq!(cfg.server.listen_addr, "0.0.0.0:3000");
    assert_eq!(cfg.server.read_timeout(), Some(Duration::from_secs(30)));
    assert_eq!(cfg.site.document_root, "/srv/www");
    assert_eq!(cfg.site.server_header, "test server");
}

#[test]
fn test_config_partial_yaml_keeps_defaults() {
    let yaml = r#"
site:
  document_root: "public"
"#;
    let cfg = Config::from_yaml(yaml).unwrap();
    assert_eq!(cfg.server.listen_addr, "127.0.0.1:8080");
    assert_eq!(cfg.site.document_root, "public");
    assert_eq!(cfg.site.server_header, "Jon's very own server");
}

#[test]
fn test_config_invalid_yaml() {
    assert!(Config::from_yaml("server: [not, a, map]").is_err());
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::default();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.server.listen_addr, cfg2.server.listen_addr);
    assert_eq!(cfg1.site.document_root, cfg2.site.document_root);
}

// The only test touching the environment, so nothing races on it.
#[test]
fn test_config_load_from_file_and_env() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "site:\n  document_root: \"/var/www\"").unwrap();

    unsafe {
        std::env::set_var("WEBWORKER_CONFIG", file.path());
        std::env::remove_var("LISTEN");
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.site.document_root, "/var/www");
    assert_eq!(cfg.server.listen_addr, "127.0.0.1:8080");

    unsafe {
        std::env::set_var("LISTEN", "0.0.0.0:5000");
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.server.listen_addr, "0.0.0.0:5000");

    unsafe {
        std::env::set_var("WEBWORKER_CONFIG", "/nonexistent/webworker.yaml");
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.site.document_root, ".");
    assert_eq!(cfg.server.listen_addr, "0.0.0.0:5000");

    unsafe {
        std::env::remove_var("WEBWORKER_CONFIG");
        std::env::remove_var("LISTEN");
    }
}
