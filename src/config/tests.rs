use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_setlist_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("SETLIST_CONFIG_PATH", "/tmp/setlist-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/setlist-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("setlist")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("setlist")
            .join("config.toml")
    );
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[storage]
directory = "/tmp/my-playlists"

[ui]
header_text = "hello"
farewell_text = "bye"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("SETLIST_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("SETLIST__UI__HEADER_TEXT");

    let s = Settings::load().unwrap();
    assert_eq!(
        s.storage.directory,
        Some(std::path::PathBuf::from("/tmp/my-playlists"))
    );
    assert_eq!(s.ui.header_text, "hello");
    assert_eq!(s.ui.farewell_text, "bye");
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[ui]
header_text = "from-file"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("SETLIST_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("SETLIST__UI__HEADER_TEXT", "from-env");

    let s = Settings::load().unwrap();
    assert_eq!(s.ui.header_text, "from-env");
}

#[test]
fn defaults_apply_when_nothing_is_configured() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("SETLIST_CONFIG_PATH", "/nonexistent/setlist-config.toml");

    let s = Settings::load().unwrap();
    assert_eq!(s.storage.directory, None);
    assert!(!s.ui.header_text.is_empty());
    assert!(s.validate().is_ok());
}
