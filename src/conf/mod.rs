//! # Configuration Files
//!
//! Regenerates the tunable and module configuration files while keeping the
//! choices a user already recorded in them.
//!
//! ## Flow
//!
//! ```text
//! prior file ──read fully──► parse_config ──► Overrides ─┐
//!                                                        ├─► render_*_conf ──write──► same file
//! PolicyDocument ────────────────────────────────────────┘
//! ```
//!
//! The prior file is read into memory and closed before the output is
//! opened, so regenerating a file in place is safe. The output is always
//! rewritten from scratch.
//!
//! ## File Format
//!
//! ```text
//! # Allow ssh logins.
//! #
//! allow_ssh = true
//!
//! ```
//!
//! Malformed lines in the prior file are reported as warnings and skipped;
//! they never stop regeneration.

mod merge;
mod parse;

pub use merge::{
    render_module_conf, render_tunable_conf, resolve_module, resolve_tunable, EffectiveSetting,
    GeneratedConf, SettingSource, MOD_DISABLED, MOD_ENABLED, TUN_DISABLED, TUN_ENABLED,
};
pub use parse::{parse_config, ConfigIssue, IssueReason, OverrideEntry, Overrides, ParsedConfig};

use crate::policy::PolicyDocument;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Outcome of regenerating one configuration file
#[derive(Debug, Clone)]
pub struct RegenReport {
    pub path: PathBuf,
    pub settings: Vec<EffectiveSetting>,
    /// Lines of the prior file that were skipped
    pub issues: Vec<ConfigIssue>,
}

impl RegenReport {
    /// Number of settings carried over from the prior file
    pub fn preserved(&self) -> usize {
        self.settings
            .iter()
            .filter(|s| s.source == SettingSource::Override)
            .count()
    }
}

/// Regenerate the tunable configuration file at `path`.
///
/// # Errors
///
/// Fails if an existing file cannot be read or the output cannot be written.
pub fn regenerate_tunable_conf(doc: &PolicyDocument, path: &Path) -> anyhow::Result<RegenReport> {
    let prior = read_prior(path, "tunables")?;
    let generated = render_tunable_conf(doc, &Overrides::from(&prior));
    write_conf(path, "tunables", generated, prior.issues)
}

/// Regenerate the module configuration file at `path`.
///
/// # Errors
///
/// Fails if an existing file cannot be read or the output cannot be written.
pub fn regenerate_module_conf(doc: &PolicyDocument, path: &Path) -> anyhow::Result<RegenReport> {
    let prior = read_prior(path, "modules")?;
    let generated = render_module_conf(doc, &Overrides::from(&prior));
    write_conf(path, "modules", generated, prior.issues)
}

/// Read and parse the existing file; a missing file means no overrides.
fn read_prior(path: &Path, what: &str) -> anyhow::Result<ParsedConfig> {
    if !path.exists() {
        return Ok(ParsedConfig::default());
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("Could not open {what} file {} for reading", path.display()))?;
    let parsed = parse_config(&text);
    for issue in &parsed.issues {
        warn!(file = %path.display(), reason = %issue.reason, "{issue}");
    }
    Ok(parsed)
}

fn write_conf(
    path: &Path,
    what: &str,
    generated: GeneratedConf,
    issues: Vec<ConfigIssue>,
) -> anyhow::Result<RegenReport> {
    fs::write(path, &generated.text)
        .with_context(|| format!("Could not open {what} file {} for writing", path.display()))?;
    let report = RegenReport {
        path: path.to_path_buf(),
        settings: generated.settings,
        issues,
    };
    info!(
        file = %path.display(),
        entries = report.settings.len(),
        preserved = report.preserved(),
        skipped_lines = report.issues.len(),
        "wrote {what} config"
    );
    Ok(report)
}
