//! Read a project `.env` file into a key-value map. Application to the process
//! environment happens in the crate root so precedence lives in one place.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Resolves the `.env` path: `override_dir` when given, else the current directory.
/// Returns `None` when no such file exists (a missing `.env` is not an error).
fn env_file(override_dir: Option<&Path>) -> Option<PathBuf> {
    let dir = override_dir
        .map(Path::to_path_buf)
        .or_else(|| std::env::current_dir().ok())?;
    let path = dir.join(".env");
    path.is_file().then_some(path)
}

/// Minimal `.env` grammar: `KEY=VALUE` per line, `#` comment lines and blank lines
/// skipped, keys and values trimmed. Double-quoted values may escape `\"`;
/// single-quoted values are stripped verbatim. No multiline values.
fn parse(content: &str) -> HashMap<String, String> {
    let mut out = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        out.insert(key.to_string(), unquote(value.trim()));
    }
    out
}

fn unquote(value: &str) -> String {
    if let Some(inner) = value
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        return inner.replace("\\\"", "\"");
    }
    if let Some(inner) = value
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
    {
        return inner.to_string();
    }
    value.to_string()
}

/// Loads `.env` into a map. Missing file yields an empty map; an unreadable file is
/// an io error.
pub fn env_table(override_dir: Option<&Path>) -> std::io::Result<HashMap<String, String>> {
    let Some(path) = env_file(override_dir) else {
        return Ok(HashMap::new());
    };
    Ok(parse(&std::fs::read_to_string(path)?))
}
