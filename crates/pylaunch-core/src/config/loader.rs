//! Layered environment lookup: process env first, then `<base>/.env`.
//!
//! The `.env` file is read into memory and never written back into the
//! process environment, so loading it has no global side effects.

use std::collections::HashMap;
use std::env;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the optional dotenv overlay in the base directory.
pub const DOTENV_FILE: &str = ".env";

/// A `.env` file exists but could not be read (permissions, invalid UTF-8, ...).
#[derive(Debug, Error)]
#[error("failed to read {}: {source}", path.display())]
pub struct DotenvError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Where configuration values come from.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    /// `None` reads the real process environment; `Some` replaces it (tests).
    vars: Option<HashMap<String, String>>,
    dotenv: HashMap<String, String>,
}

impl EnvSource {
    /// Process environment, falling back to `<dir>/.env` when present.
    /// A missing file is not an error; an unreadable one is.
    pub fn with_dotenv_dir(dir: &Path) -> Result<Self, DotenvError> {
        let path = dir.join(DOTENV_FILE);
        let dotenv = match std::fs::read_to_string(&path) {
            Ok(content) => parse_dotenv(&content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(source) => return Err(DotenvError { path, source }),
        };
        Ok(Self { vars: None, dotenv })
    }

    /// Fixed set of variables instead of the process environment.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: Some(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect()),
            dotenv: HashMap::new(),
        }
    }

    /// Add a dotenv overlay parsed from `content`.
    pub fn with_dotenv_content(mut self, content: &str) -> Self {
        self.dotenv = parse_dotenv(content);
        self
    }

    /// Number of keys taken from the dotenv overlay.
    pub fn dotenv_len(&self) -> usize {
        self.dotenv.len()
    }

    /// Raw lookup. Process (or injected) variables shadow the dotenv overlay.
    pub fn get(&self, key: &str) -> Option<String> {
        let primary = match &self.vars {
            Some(vars) => vars.get(key).cloned(),
            None => env::var(key).ok(),
        };
        primary.or_else(|| self.dotenv.get(key).cloned())
    }

    /// Read `key`, using `default` when unset or empty.
    pub fn env_or<F>(&self, key: &str, default: F) -> String
    where
        F: FnOnce() -> String,
    {
        self.get(key)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(default)
    }

    /// Read `key` as an Option (blank values count as unset).
    pub fn env_optional(&self, key: &str) -> Option<String> {
        self.get(key).and_then(|s| {
            let s = s.trim().to_string();
            if s.is_empty() {
                None
            } else {
                Some(s)
            }
        })
    }

    /// Boolean flag: 0/false/no/off are false, anything else set is true.
    pub fn env_bool(&self, key: &str, default: bool) -> bool {
        match self.get(key).as_deref() {
            Some(s) => !matches!(
                s.trim().to_lowercase().as_str(),
                "0" | "false" | "no" | "off"
            ),
            None => default,
        }
    }
}

/// Parse dotenv text into key/value pairs.
///
/// Supports `#` comment lines, inline comments after unquoted values, an
/// optional `export ` prefix and single or double quotes around the value.
/// The first occurrence of a key wins.
pub fn parse_dotenv(content: &str) -> HashMap<String, String> {
    let mut out = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").unwrap_or(line);
        let Some(eq_pos) = line.find('=') else {
            continue;
        };
        let key = line[..eq_pos].trim();
        let mut value = line[eq_pos + 1..].trim();
        // Strip inline comment (# not inside quotes)
        if let Some(hash_pos) = value.find('#') {
            let before_hash = value[..hash_pos].trim_end();
            if !before_hash.contains('"') && !before_hash.contains('\'') {
                value = before_hash;
            }
        }
        if value.len() >= 2
            && ((value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\'')))
        {
            value = &value[1..value.len() - 1];
        }
        if !key.is_empty() && !out.contains_key(key) {
            out.insert(key.to_string(), value.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dotenv_basic() {
        let parsed = parse_dotenv(
            "# comment\nPYLAUNCH_ENV_DIR=.venv\n\nexport PYLAUNCH_PAUSE=never\n",
        );
        assert_eq!(parsed.get("PYLAUNCH_ENV_DIR").map(String::as_str), Some(".venv"));
        assert_eq!(parsed.get("PYLAUNCH_PAUSE").map(String::as_str), Some("never"));
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn test_parse_dotenv_quotes_and_inline_comment() {
        let parsed = parse_dotenv(
            "A=\"with space\"\nB='single'\nC=plain # trailing\nD=\"keep # hash\"\n",
        );
        assert_eq!(parsed["A"], "with space");
        assert_eq!(parsed["B"], "single");
        assert_eq!(parsed["C"], "plain");
        assert_eq!(parsed["D"], "keep # hash");
    }

    #[test]
    fn test_parse_dotenv_skips_malformed_and_keeps_first() {
        let parsed = parse_dotenv("no_equals_here\nK=first\nK=second\n=orphan\n");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed["K"], "first");
    }

    #[test]
    fn test_injected_vars_shadow_dotenv() {
        let src = EnvSource::from_pairs([("K", "from-env")])
            .with_dotenv_content("K=from-file\nOTHER=file-only\n");
        assert_eq!(src.get("K").as_deref(), Some("from-env"));
        assert_eq!(src.get("OTHER").as_deref(), Some("file-only"));
        assert_eq!(src.get("MISSING"), None);
    }

    #[test]
    fn test_env_or_and_optional_treat_blank_as_unset() {
        let src = EnvSource::from_pairs([("BLANK", "  "), ("EMPTY", "")]);
        assert_eq!(src.env_optional("BLANK"), None);
        assert_eq!(src.env_or("EMPTY", || "fallback".to_string()), "fallback");
    }

    #[test]
    fn test_env_bool() {
        let src = EnvSource::from_pairs([("ON", "yes"), ("OFF", "Off"), ("ZERO", "0")]);
        assert!(src.env_bool("ON", false));
        assert!(!src.env_bool("OFF", true));
        assert!(!src.env_bool("ZERO", true));
        assert!(src.env_bool("UNSET", true));
    }

    #[test]
    fn test_with_dotenv_dir_reads_file() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(DOTENV_FILE), "PYLAUNCH_TEST_ONLY_KEY_7f3a=1\n").unwrap();
        let src = EnvSource::with_dotenv_dir(tmp.path()).unwrap();
        assert_eq!(src.get("PYLAUNCH_TEST_ONLY_KEY_7f3a").as_deref(), Some("1"));
        assert_eq!(src.dotenv_len(), 1);
    }

    #[test]
    fn test_with_dotenv_dir_missing_file_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let src = EnvSource::with_dotenv_dir(tmp.path()).unwrap();
        assert_eq!(src.dotenv_len(), 0);
        assert_eq!(src.get("PYLAUNCH_TEST_ONLY_KEY_missing_91c2"), None);
    }

    #[test]
    fn test_with_dotenv_dir_unreadable_file_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(DOTENV_FILE), [b'K', b'=', 0xff, 0xfe, b'\n']).unwrap();
        let err = EnvSource::with_dotenv_dir(tmp.path()).unwrap_err();
        assert_eq!(err.path, tmp.path().join(DOTENV_FILE));
        assert_eq!(err.source.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().starts_with("failed to read "));
    }
}
