//! Read the `[env]` table from `$XDG_CONFIG_HOME/<app>/config.toml`.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::LoadError;

/// `$XDG_CONFIG_HOME/<app>/config.toml`, honoring the `XDG_CONFIG_HOME` override
/// before falling back to the platform config dir.
fn config_path(app_name: &str) -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(dirs::config_dir)?;
    let path = base.join(app_name).join("config.toml");
    path.is_file().then_some(path)
}

#[derive(serde::Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    env: HashMap<String, String>,
}

/// Key-value pairs from the `[env]` table. Missing file or missing table yields an
/// empty map.
pub fn env_table(app_name: &str) -> Result<HashMap<String, String>, LoadError> {
    let Some(path) = config_path(app_name) else {
        return Ok(HashMap::new());
    };
    let content = std::fs::read_to_string(&path).map_err(LoadError::XdgRead)?;
    let config: ConfigFile = toml::from_str(&content)?;
    Ok(config.env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_is_empty_map() {
        let m = env_table("gearfinder-xdg-test-nonexistent").unwrap();
        assert!(m.is_empty());
    }

    #[test]
    fn reads_env_table() {
        let _guard = crate::env_lock();
        let dir = tempfile::tempdir().unwrap();
        let app_dir = dir.path().join("gf-xdg-read");
        std::fs::create_dir_all(&app_dir).unwrap();
        std::fs::write(
            app_dir.join("config.toml"),
            "[env]\nFOO = \"from_toml\"\nBAR = \"baz\"\n",
        )
        .unwrap();

        let prev = std::env::var("XDG_CONFIG_HOME").ok();
        std::env::set_var("XDG_CONFIG_HOME", dir.path());
        let m = env_table("gf-xdg-read").unwrap();
        match prev {
            Some(v) => std::env::set_var("XDG_CONFIG_HOME", v),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }

        assert_eq!(m.get("FOO").map(String::as_str), Some("from_toml"));
        assert_eq!(m.get("BAR").map(String::as_str), Some("baz"));
    }

    #[test]
    fn config_without_env_table_is_empty_map() {
        let _guard = crate::env_lock();
        let dir = tempfile::tempdir().unwrap();
        let app_dir = dir.path().join("gf-xdg-noenv");
        std::fs::create_dir_all(&app_dir).unwrap();
        std::fs::write(app_dir.join("config.toml"), "[other]\nkey = \"v\"\n").unwrap();

        let prev = std::env::var("XDG_CONFIG_HOME").ok();
        std::env::set_var("XDG_CONFIG_HOME", dir.path());
        let m = env_table("gf-xdg-noenv").unwrap();
        match prev {
            Some(v) => std::env::set_var("XDG_CONFIG_HOME", v),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }

        assert!(m.is_empty());
    }
}
