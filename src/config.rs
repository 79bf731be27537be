//! Configuration discovery and effective settings resolution.
//!
//! certdrift reads `certdrift.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config.
//! Defaults:
//! - `dir`: `pem`
//! - `suffix`: `.pem`
//! - `baseline`: `knownResults.json`
//! - `endpoint`: `http://pkimet.al/lintcert`
//! - `linter`: `pkimetal`
//! - `output`: `human`
//! - `http.timeout`: unset (transport default)
//! - `http.userAgent`: `certdrift/<version>`
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::{HarnessError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_DIR: &str = "pem";
pub const DEFAULT_SUFFIX: &str = ".pem";
pub const DEFAULT_BASELINE: &str = "knownResults.json";
pub const DEFAULT_ENDPOINT: &str = "http://pkimet.al/lintcert";
pub const DEFAULT_LINTER: &str = "pkimetal";

const CONFIG_FILES: [&str; 3] = ["certdrift.toml", "certdrift.yaml", "certdrift.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// HTTP section under `[http]`.
pub struct HttpCfg {
    /// Request timeout in seconds
    pub timeout: Option<u64>,
    #[serde(rename = "userAgent")]
    pub user_agent: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `certdrift.toml|yaml`.
pub struct CertdriftConfig {
    pub dir: Option<String>,
    pub suffix: Option<String>,
    pub baseline: Option<String>,
    pub endpoint: Option<String>,
    pub linter: Option<String>,
    pub output: Option<String>,
    #[serde(default)]
    pub http: Option<HttpCfg>,
}

/// Values passed on the command line; `None` falls through to config.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub repo_root: Option<String>,
    pub dir: Option<String>,
    pub suffix: Option<String>,
    pub baseline: Option<String>,
    pub endpoint: Option<String>,
    pub linter: Option<String>,
    pub output: Option<String>,
    pub timeout: Option<u64>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the harness after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub config_found: bool,
    pub dir: PathBuf,
    pub suffix: String,
    pub baseline: PathBuf,
    pub endpoint: String,
    pub linter: String,
    pub output: String,
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `certdrift.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_FILES.iter().any(|f| cur.join(f).exists()) || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `CertdriftConfig` from `certdrift.toml` or `certdrift.yaml|yml` if present.
///
/// A file that exists but cannot be read or parsed is an error, never absent.
pub fn load_config(root: &Path) -> Result<Option<CertdriftConfig>> {
    let Some(path) = CONFIG_FILES
        .iter()
        .map(|f| root.join(f))
        .find(|p| p.exists())
    else {
        return Ok(None);
    };
    let invalid = |message: String| HarnessError::Config {
        path: path.clone(),
        message,
    };
    let s = fs::read_to_string(&path).map_err(|e| invalid(e.to_string()))?;
    let cfg = if path.extension().and_then(|e| e.to_str()) == Some("toml") {
        toml::from_str(&s).map_err(|e| invalid(e.to_string()))?
    } else {
        serde_yaml::from_str(&s).map_err(|e| invalid(e.to_string()))?
    };
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(Some(cfg))
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
///
/// Fails when a discovered config file is invalid.
/// Relative `dir` and `baseline` paths are joined onto the repository root.
pub fn resolve_effective(cli: &CliOverrides) -> Result<Effective> {
    let start = PathBuf::from(cli.repo_root.as_deref().unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let loaded = load_config(&repo_root)?;
    let config_found = loaded.is_some();
    let cfg = loaded.unwrap_or_default();
    let http = cfg.http.unwrap_or_default();

    let pick = |flag: &Option<String>, file: Option<String>, default: &str| {
        flag.clone().or(file).unwrap_or_else(|| default.to_string())
    };

    let dir = pick(&cli.dir, cfg.dir, DEFAULT_DIR);
    let baseline = pick(&cli.baseline, cfg.baseline, DEFAULT_BASELINE);
    let suffix = pick(&cli.suffix, cfg.suffix, DEFAULT_SUFFIX);
    let endpoint = pick(&cli.endpoint, cfg.endpoint, DEFAULT_ENDPOINT);
    let linter = pick(&cli.linter, cfg.linter, DEFAULT_LINTER);
    let output = pick(&cli.output, cfg.output, "human");
    let timeout = cli.timeout.or(http.timeout).map(Duration::from_secs);
    let user_agent = http
        .user_agent
        .unwrap_or_else(|| format!("certdrift/{}", env!("CARGO_PKG_VERSION")));

    Ok(Effective {
        dir: repo_root.join(dir),
        baseline: repo_root.join(baseline),
        repo_root,
        config_found,
        suffix,
        endpoint,
        linter,
        output,
        timeout,
        user_agent,
    })
}
