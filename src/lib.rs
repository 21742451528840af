//! # sedoctool
//!
//! **sedoctool** turns a security policy described in XML into the files
//! people actually work with: the tunable and module configuration files,
//! and a browsable HTML reference.
//!
//! ## Overview
//!
//! The policy document groups modules into layers. Each module exposes
//! interfaces and templates with descriptions and parameters, and the
//! document also declares boolean tunables with defaults. From that input the
//! tool can:
//!
//! - regenerate `tunables.conf`, keeping values a user already set
//! - regenerate `modules.conf`, keeping each module's `on`/`off` choice
//! - render the HTML reference through Jinja-style templates
//!
//! ## Architecture
//!
//! - **[`policy`]** - XML loading into an owned, typed [`policy::PolicyDocument`]
//! - **[`render`]** - description rendering as plain text or HTML fragments
//! - **[`conf`]** - config file parsing, override merging and regeneration
//! - **[`docs`]** - module index, page assembly and HTML generation
//! - **[`cli`]** - the `sedoctool` command line
//! - **[`config`]** - what one run should do
//! - **[`logging`]** - `tracing` subscriber setup
//!
//! ```text
//! policy.xml ──► policy::load_policy ──► PolicyDocument
//!                                          │
//!         ┌────────────────────────────────┼──────────────────────┐
//!         ▼                                ▼                      ▼
//!  conf::regenerate_tunable_conf   conf::regenerate_module_conf   docs::generate_docs
//!         │                                │                      │
//!         ▼                                ▼                      ▼
//!   tunables.conf                    modules.conf            out_dir/*.html
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sedoctool::conf::regenerate_tunable_conf;
//! use sedoctool::policy::load_policy;
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let doc = load_policy(Path::new("policy.xml"))?;
//! let report = regenerate_tunable_conf(&doc, Path::new("tunables.conf"))?;
//! println!("{} tunables, {} kept from the old file", report.settings.len(), report.preserved());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod conf;
pub mod config;
pub mod docs;
pub mod logging;
pub mod policy;
pub mod render;

pub use policy::{load_policy, parse_policy, PolicyDocument, PolicyError};
