//! # Run Configuration
//!
//! What one invocation of `sedoctool` should do. Built from the command line
//! (see [`crate::cli`]); the policy and template paths also fall back to
//! environment variables.
//!
//! ## Environment Variables
//!
//! ### `SEDOC_XML`
//!
//! Path of the policy XML document. Default: `policy.xml`
//!
//! ### `SEDOC_TEMPLATES`
//!
//! Directory holding the documentation templates. Default: `templates/`
//!
//! ## Usage
//!
//! ```rust
//! use sedoctool::config::RunConfig;
//!
//! let config = RunConfig::default().with_tunables("tunables.conf");
//! assert!(config.has_work());
//! ```

use std::path::PathBuf;

pub const DEFAULT_XML: &str = "policy.xml";
pub const DEFAULT_TEMPLATES: &str = "templates/";

/// One run's inputs and requested outputs.
///
/// Each output is optional; requested outputs are produced in the order
/// tunables, modules, docs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Policy XML document
    pub xml: PathBuf,
    /// Template directory used for docs
    pub templates: PathBuf,
    /// Tunable configuration file to regenerate
    pub tunables: Option<PathBuf>,
    /// Module configuration file to regenerate
    pub modules: Option<PathBuf>,
    /// Existing directory to write the HTML reference into
    pub docs: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            xml: PathBuf::from(DEFAULT_XML),
            templates: PathBuf::from(DEFAULT_TEMPLATES),
            tunables: None,
            modules: None,
            docs: None,
        }
    }
}

impl RunConfig {
    /// True when at least one output was requested.
    pub fn has_work(&self) -> bool {
        self.tunables.is_some() || self.modules.is_some() || self.docs.is_some()
    }

    pub fn with_tunables(mut self, path: impl Into<PathBuf>) -> Self {
        self.tunables = Some(path.into());
        self
    }

    pub fn with_modules(mut self, path: impl Into<PathBuf>) -> Self {
        self.modules = Some(path.into());
        self
    }

    pub fn with_docs(mut self, dir: impl Into<PathBuf>) -> Self {
        self.docs = Some(dir.into());
        self
    }
}
