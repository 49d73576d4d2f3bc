//! Load configuration from XDG `config.toml` and project `.env`, then apply it to the
//! process environment with priority: **existing env > .env > XDG**.
//!
//! Gearfinder reads all of its settings (Cloudflare credentials, results dir, bind
//! address) from the environment; this crate is the one place that fills the
//! environment in before anything else looks at it.

mod dotenv;
mod xdg_toml;

use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("read .env: {0}")]
    DotenvRead(std::io::Error),
    #[error("read xdg config: {0}")]
    XdgRead(std::io::Error),
    #[error("parse xdg toml: {0}")]
    XdgParse(#[from] toml::de::Error),
}

/// Loads the XDG `[env]` table and the project `.env`, then sets each key into the
/// process environment unless it is already set there (existing env always wins).
///
/// Precedence for a key missing from the process environment:
/// 1. Project `.env` (current directory, or `override_dir` when given)
/// 2. `~/.config/<app_name>/config.toml` `[env]` table
///
/// * `app_name`: `"gearfinder"` in production; tests pass throwaway names.
/// * `override_dir`: directory to look for `.env` in, instead of the current dir.
pub fn load_and_apply(app_name: &str, override_dir: Option<&Path>) -> Result<(), LoadError> {
    let xdg = xdg_toml::env_table(app_name)?;
    let dotenv = dotenv::env_table(override_dir).map_err(LoadError::DotenvRead)?;
    apply(&dotenv, &xdg);
    Ok(())
}

/// Applies the two maps to the process env. Keys already present in the environment
/// are left alone; for the rest, `.env` beats XDG.
fn apply(dotenv: &HashMap<String, String>, xdg: &HashMap<String, String>) {
    let mut keys: std::collections::HashSet<&String> = xdg.keys().collect();
    keys.extend(dotenv.keys());

    for key in keys {
        if std::env::var(key).is_ok() {
            continue;
        }
        if let Some(value) = dotenv.get(key).or_else(|| xdg.get(key)) {
            std::env::set_var(key, value);
        }
    }
}

/// Tests that mutate process env (including `XDG_CONFIG_HOME`) serialize on this
/// lock; cargo runs tests in parallel threads within one process.
#[cfg(test)]
pub(crate) fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();
    LOCK.get_or_init(|| std::sync::Mutex::new(()))
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}
