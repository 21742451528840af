use crate::config::{RunConfig, DEFAULT_TEMPLATES, DEFAULT_XML};
use crate::conf::{regenerate_module_conf, regenerate_tunable_conf};
use crate::docs::generate_docs;
use crate::policy::load_policy;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "sedoctool")]
#[command(version, about = "Regenerate policy configuration files and HTML reference docs", long_about = None)]
pub struct Cli {
    /// Write the tunable configuration file
    #[arg(short = 't', long = "tunables", value_name = "FILE")]
    pub tunables: Option<PathBuf>,

    /// Write the module configuration file
    #[arg(short = 'm', long = "modules", value_name = "FILE")]
    pub modules: Option<PathBuf>,

    /// Write HTML documentation into this existing directory
    #[arg(short = 'd', long = "docs", value_name = "DIR")]
    pub docs: Option<PathBuf>,

    /// Policy XML document
    #[arg(short = 'x', long = "xml", value_name = "FILE", env = "SEDOC_XML", default_value = DEFAULT_XML)]
    pub xml: PathBuf,

    /// Directory holding the documentation templates
    #[arg(short = 'T', long = "templates", value_name = "DIR", env = "SEDOC_TEMPLATES", default_value = DEFAULT_TEMPLATES)]
    pub templates: PathBuf,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        RunConfig {
            xml: cli.xml,
            templates: cli.templates,
            tunables: cli.tunables,
            modules: cli.modules,
            docs: cli.docs,
        }
    }
}

/// Load the policy once, then produce each requested output in order:
/// tunables, modules, docs.
///
/// # Errors
///
/// The first fatal error stops the run. Outputs finished before it stay
/// on disk.
pub fn run(config: &RunConfig) -> Result<()> {
    let doc = load_policy(&config.xml)?;
    if !config.has_work() {
        info!(xml = %config.xml.display(), "policy parsed, no outputs requested");
        return Ok(());
    }

    if let Some(path) = &config.tunables {
        let report = regenerate_tunable_conf(&doc, path)?;
        info!(
            settings = report.settings.len(),
            preserved = report.preserved(),
            skipped_lines = report.issues.len(),
            "tunables done"
        );
    }
    if let Some(path) = &config.modules {
        let report = regenerate_module_conf(&doc, path)?;
        info!(
            settings = report.settings.len(),
            preserved = report.preserved(),
            skipped_lines = report.issues.len(),
            "modules done"
        );
    }
    if let Some(dir) = &config.docs {
        generate_docs(&doc, dir, &config.templates)?;
    }
    Ok(())
}

/// Parse the command line and run it.
pub fn run_cli(cli: Cli) -> Result<()> {
    run(&RunConfig::from(cli))
}
