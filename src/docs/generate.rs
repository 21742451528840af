use super::assemble::{assemble, Assembly, ModulePage};
use super::index::{MenuScope, ModuleIndex};
use super::templates::{
    DocTemplates, HEADER, INTERFACE, INT_LIST, MENU, MODULE, MODULE_LIST, TEMPLATE, TEMP_LIST,
};
use crate::policy::PolicyDocument;
use anyhow::Context;
use minijinja::context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Files written by one documentation run, in write order
#[derive(Debug, Clone, Default)]
pub struct DocsReport {
    pub files: Vec<PathBuf>,
}

/// Load templates from `template_dir` and write the documentation tree into
/// `out_dir`.
///
/// # Errors
///
/// Fails if a template cannot be loaded, `out_dir` is not an existing
/// directory, or a page cannot be rendered or written. Pages written before
/// the failure are left in place.
pub fn generate_docs(
    doc: &PolicyDocument,
    out_dir: &Path,
    template_dir: &Path,
) -> anyhow::Result<DocsReport> {
    let templates = DocTemplates::load(template_dir)?;
    generate_docs_with(doc, out_dir, &templates)
}

/// Same as [`generate_docs`] with templates already loaded.
pub fn generate_docs_with(
    doc: &PolicyDocument,
    out_dir: &Path,
    templates: &DocTemplates,
) -> anyhow::Result<DocsReport> {
    if !out_dir.is_dir() {
        anyhow::bail!(
            "Could not access target directory {}",
            out_dir.display()
        );
    }

    let mut writer = PageWriter {
        out_dir,
        templates,
        report: DocsReport::default(),
    };
    let index = ModuleIndex::build(doc);
    let assembly = assemble(doc);

    writer.layer_pages(&index)?;
    for page in &assembly.pages {
        writer.module_page(&index, page)?;
    }
    writer.global_listings(&index, &assembly)?;

    info!(
        dir = %out_dir.display(),
        files = writer.report.files.len(),
        "wrote documentation"
    );
    Ok(writer.report)
}

struct PageWriter<'a> {
    out_dir: &'a Path,
    templates: &'a DocTemplates,
    report: DocsReport,
}

impl PageWriter<'_> {
    fn menu(&self, index: &ModuleIndex, scope: MenuScope<'_>) -> anyhow::Result<String> {
        self.templates.render(
            MENU,
            context! {
                menulist => index.menu(scope),
                mod_layer => scope.layer(),
            },
        )
    }

    /// `<layer>.html` for every layer, then `index.html` holding every
    /// layer's module list.
    fn layer_pages(&mut self, index: &ModuleIndex) -> anyhow::Result<()> {
        let mut all_content = String::new();
        for layer in index.layers() {
            let scope = MenuScope::Layer(layer);
            let menu = self.menu(index, scope)?;
            let content = self.templates.render(
                MODULE_LIST,
                context! {
                    menulist => index.menu(scope),
                    mod_layer => layer,
                },
            )?;
            all_content.push_str(&content);
            self.page(&format!("{layer}.html"), &menu, &content)?;
        }

        let menu = self.menu(index, MenuScope::Global)?;
        self.page("index.html", &menu, &all_content)
    }

    fn module_page(&mut self, index: &ModuleIndex, page: &ModulePage) -> anyhow::Result<()> {
        let interfaces = self
            .templates
            .render(INTERFACE, context! { interfaces => &page.interfaces })?;
        let templates = self
            .templates
            .render(TEMPLATE, context! { templates => &page.templates })?;
        let content = self.templates.render(
            MODULE,
            context! {
                mod_layer => &page.layer,
                mod_name => &page.name,
                mod_summary => &page.summary,
                mod_desc => &page.desc,
                interfaces => interfaces,
                templates => templates,
            },
        )?;
        let menu = self.menu(index, MenuScope::Layer(&page.layer))?;
        self.page(&page.file_name(), &menu, &content)
    }

    fn global_listings(&mut self, index: &ModuleIndex, assembly: &Assembly) -> anyhow::Result<()> {
        let menu = self.menu(index, MenuScope::Global)?;
        let interfaces = self.templates.render(
            INT_LIST,
            context! { interfaces => &assembly.all_interfaces },
        )?;
        self.page("interfaces.html", &menu, &interfaces)?;
        let templates = self.templates.render(
            TEMP_LIST,
            context! { templates => &assembly.all_templates },
        )?;
        self.page("templates.html", &menu, &templates)
    }

    /// Wrap `content` in the header template and write it under the output
    /// root.
    fn page(&mut self, file_name: &str, menu: &str, content: &str) -> anyhow::Result<()> {
        let html = self
            .templates
            .render(HEADER, context! { menu => menu, content => content })?;
        let path = self.out_dir.join(file_name);
        fs::write(&path, html).with_context(|| format!("Could not write {}", path.display()))?;
        debug!(file = %path.display(), "wrote page");
        self.report.files.push(path);
        Ok(())
    }
}
