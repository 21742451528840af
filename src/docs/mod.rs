//! # Documentation Module
//!
//! Builds the HTML reference for a policy document.
//!
//! ## Architecture
//!
//! ```text
//! PolicyDocument ─┬─► ModuleIndex (layer → module → summary) ──► menus
//!                 └─► assemble() (sorted interfaces/templates) ──► page data
//!                                                                   │
//!                          DocTemplates (minijinja) ◄───────────────┘
//!                                   │
//!                                   ▼
//!                             files in out_dir
//! ```
//!
//! ## Generated Files
//!
//! ```text
//! out_dir/
//! ├── index.html              # every layer's module list
//! ├── <layer>.html            # one per layer
//! ├── <layer>_<module>.html   # one per module
//! ├── interfaces.html         # all interfaces, sorted
//! └── templates.html          # all templates, sorted
//! ```
//!
//! ## Templates
//!
//! The template directory must hold `header.html`, `interface.html`,
//! `template.html`, `menu.html`, `module_list.html`, `module.html`,
//! `int_list.html` and `temp_list.html`. They are Jinja-style templates
//! rendered with [`minijinja`]; the `templates/` directory of this
//! repository is a working set.
//!
//! Every path is joined onto the output root passed in; the process working
//! directory is never changed. Files from earlier runs are not removed.

mod assemble;
mod generate;
mod index;
mod templates;

#[cfg(test)]
mod tests;

pub use assemble::{
    assemble, assemble_module, Assembly, ComponentDoc, ModulePage, ParamDoc, PARAM_OPTIONAL,
    PARAM_REQUIRED,
};
pub use generate::{generate_docs, generate_docs_with, DocsReport};
pub use index::{MenuEntry, MenuLayer, MenuScope, ModuleIndex};
pub use templates::{DocTemplates, TEMPLATE_FILES};
