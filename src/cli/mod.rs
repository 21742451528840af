//! # CLI Module
//!
//! Command-line surface of the `sedoctool` binary.
//!
//! ## Options
//!
//! ```text
//! -t, --tunables <FILE>   regenerate the tunable configuration file
//! -m, --modules <FILE>    regenerate the module configuration file
//! -d, --docs <DIR>        write the HTML reference into DIR (must exist)
//! -x, --xml <FILE>        policy document [env: SEDOC_XML] [default: policy.xml]
//! -T, --templates <DIR>   template directory [env: SEDOC_TEMPLATES] [default: templates/]
//! ```
//!
//! The policy is parsed once; requested outputs are then produced in the
//! order tunables, modules, docs. A config file given with `-t` or `-m` is
//! read first, so existing choices in it survive regeneration.
//!
//! ## Examples
//!
//! ```bash
//! # Refresh both config files in place
//! sedoctool -x policy.xml -t tunables.conf -m modules.conf
//!
//! # Build the HTML reference
//! mkdir -p html && sedoctool -x policy.xml -d html -T templates/
//! ```

mod commands;


pub use commands::{run, run_cli, Cli};
