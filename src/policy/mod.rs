//! # Policy Module
//!
//! Loads the policy XML description into an owned, typed model.
//!
//! The document is a tree of `layer` elements holding `module` elements, each
//! module declaring `interface` and `template` building blocks, plus global
//! `tunable` elements. Every accessor on the model reads direct children
//! only, so a module's `summary` is never confused with the `summary` of one
//! of its interfaces.
//!
//! ```rust,ignore
//! use sedoctool::policy::load_policy;
//!
//! let doc = load_policy(Path::new("policy.xml"))?;
//! for module in doc.modules() {
//!     println!("{}/{}", module.layer, module.name);
//! }
//! ```

mod error;
mod load;
mod types;


pub use error::PolicyError;
pub use load::{load_policy, parse_policy};
pub use types::*;
