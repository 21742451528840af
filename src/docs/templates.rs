use anyhow::Context;
use minijinja::{AutoEscape, Environment};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::debug;

pub const HEADER: &str = "header.html";
pub const INTERFACE: &str = "interface.html";
pub const TEMPLATE: &str = "template.html";
pub const MENU: &str = "menu.html";
pub const MODULE_LIST: &str = "module_list.html";
pub const MODULE: &str = "module.html";
pub const INT_LIST: &str = "int_list.html";
pub const TEMP_LIST: &str = "temp_list.html";

/// Every template the documentation tree is built from
pub const TEMPLATE_FILES: [&str; 8] = [
    HEADER,
    INTERFACE,
    TEMPLATE,
    MENU,
    MODULE_LIST,
    MODULE,
    INT_LIST,
    TEMP_LIST,
];

/// The documentation templates, compiled once.
///
/// Output is not escaped: descriptions reach the templates as HTML already.
pub struct DocTemplates {
    env: Environment<'static>,
}

impl DocTemplates {
    /// Read all templates from `dir`.
    ///
    /// # Errors
    ///
    /// Fails if any template is missing, unreadable or does not compile.
    pub fn load(dir: &Path) -> anyhow::Result<Self> {
        let mut sources = Vec::with_capacity(TEMPLATE_FILES.len());
        for name in TEMPLATE_FILES {
            let path = dir.join(name);
            let source = fs::read_to_string(&path)
                .with_context(|| format!("Could not open template {}", path.display()))?;
            sources.push((name, source));
        }
        debug!(dir = %dir.display(), "loaded documentation templates");
        Self::from_sources(sources)
    }

    /// Build from in-memory sources. All of [`TEMPLATE_FILES`] must be present.
    pub fn from_sources<I>(sources: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (&'static str, String)>,
    {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        for (name, source) in sources {
            env.add_template_owned(name, source)
                .with_context(|| format!("Could not parse template {name}"))?;
        }
        for name in TEMPLATE_FILES {
            env.get_template(name)
                .with_context(|| format!("Missing template {name}"))?;
        }
        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> anyhow::Result<String> {
        let tmpl = self.env.get_template(name)?;
        tmpl.render(ctx)
            .with_context(|| format!("Failed to render template {name}"))
    }
}
