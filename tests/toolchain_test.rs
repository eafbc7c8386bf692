// tests/toolchain_test.rs
use go_reqver::toolchain::{host_source, HostToolchain, BINARY_ENV, VERSION_ENV};
use go_reqver::{current_version, GoVersion, ReqverError, VersionSource};
use serial_test::serial;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

struct EnvGuard(&'static str);

impl EnvGuard {
    fn set(key: &'static str, value: &str) -> Self {
        env::set_var(key, value);
        EnvGuard(key)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

#[test]
#[serial]
fn test_pinned_version_from_env() {
    let _guard = EnvGuard::set(VERSION_ENV, "go1.20.3");
    assert_eq!(current_version().unwrap(), GoVersion::new(1, 20, 3));
    assert_eq!(GoVersion::current().unwrap(), GoVersion::new(1, 20, 3));
}

#[test]
#[serial]
fn test_pinned_version_from_env_invalid() {
    let _guard = EnvGuard::set(VERSION_ENV, "Hello world");
    assert!(current_version().unwrap_err().is_format());
}

#[test]
#[serial]
fn test_binary_from_env() {
    let _guard = EnvGuard::set(BINARY_ENV, "/opt/go/bin/go");
    assert_eq!(HostToolchain::from_env(Some("go")).go_binary, "/opt/go/bin/go");
}

#[test]
#[serial]
fn test_binary_from_config() {
    env::remove_var(BINARY_ENV);
    assert_eq!(HostToolchain::from_env(Some("go1.21")).go_binary, "go1.21");
    assert_eq!(HostToolchain::from_env(None).go_binary, "go");
}

#[test]
#[serial]
fn test_missing_binary_is_toolchain_error() {
    env::remove_var(VERSION_ENV);
    env::remove_var(BINARY_ENV);
    let source = host_source(Some("go-reqver-missing-go-binary"));
    let err = source.version().unwrap_err();
    assert!(err.to_string().starts_with("Toolchain query failed"));
}

/// Writes an executable `go` stand-in whose body handles `$1`
#[cfg(unix)]
fn fake_go(dir: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("go");
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[cfg(unix)]
#[test]
#[serial]
fn test_host_toolchain_go_env() {
    let dir = tempfile::tempdir().unwrap();
    let go = fake_go(
        dir.path(),
        r#"if [ "$1" = "env" ]; then echo go1.22.5; exit 0; fi
exit 3"#,
    );

    let toolchain = HostToolchain::new(go.to_str().unwrap());
    assert_eq!(toolchain.version_string().unwrap(), "go1.22.5");
    assert_eq!(toolchain.version().unwrap(), GoVersion::new(1, 22, 5));
}

#[cfg(unix)]
#[test]
#[serial]
fn test_host_toolchain_falls_back_to_go_version() {
    let dir = tempfile::tempdir().unwrap();
    let go = fake_go(
        dir.path(),
        r#"if [ "$1" = "env" ]; then echo "unknown command" >&2; exit 2; fi
echo "go version go1.15.7 linux/amd64""#,
    );

    let toolchain = HostToolchain::new(go.to_str().unwrap());
    assert_eq!(toolchain.version().unwrap(), GoVersion::new(1, 15, 7));
}

#[cfg(unix)]
#[test]
#[serial]
fn test_host_toolchain_empty_go_env_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let go = fake_go(
        dir.path(),
        r#"if [ "$1" = "env" ]; then echo; exit 0; fi
echo "go version go1.16.2 darwin/arm64""#,
    );

    let toolchain = HostToolchain::new(go.to_str().unwrap());
    assert_eq!(toolchain.version().unwrap(), GoVersion::new(1, 16, 2));
}

#[cfg(unix)]
#[test]
#[serial]
fn test_host_toolchain_without_version_token() {
    let dir = tempfile::tempdir().unwrap();
    let go = fake_go(dir.path(), "echo devel");

    let toolchain = HostToolchain::new(go.to_str().unwrap());
    let err = toolchain.version().unwrap_err();
    assert!(matches!(err, ReqverError::Toolchain(_)));
    assert!(err.to_string().contains("no go version found"));
}
