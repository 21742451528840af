use crate::policy::{Component, ComponentKind, Module, Parameter, PolicyDocument};
use crate::render::to_html;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Shown for optional parameters. Templates match on the exact casing.
pub const PARAM_OPTIONAL: &str = "yes";
/// Shown for required parameters.
pub const PARAM_REQUIRED: &str = "No";

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ParamDoc {
    pub name: String,
    pub desc: String,
    pub optional: &'static str,
}

impl From<&Parameter> for ParamDoc {
    fn from(param: &Parameter) -> Self {
        Self {
            name: param.name.clone(),
            desc: param.desc.clone(),
            optional: if param.optional {
                PARAM_OPTIONAL
            } else {
                PARAM_REQUIRED
            },
        }
    }
}

/// Render data for one interface or template.
///
/// Serialized with kind-prefixed keys (`interface_name`, `template_desc`, ...)
/// so the same struct feeds `interface.html` and `template.html`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDoc {
    pub kind: ComponentKind,
    pub name: String,
    pub summary: Option<String>,
    pub desc: Option<String>,
    pub secdesc: Option<String>,
    pub parameters: Vec<ParamDoc>,
    pub mod_name: String,
    pub mod_layer: String,
}

impl ComponentDoc {
    pub fn new(component: &Component, module: &Module) -> Self {
        Self {
            kind: component.kind,
            name: component.name.clone(),
            summary: component.summary.as_ref().map(to_html),
            desc: component.desc.as_ref().map(to_html),
            secdesc: component.secdesc.as_ref().map(to_html),
            parameters: component.params.iter().map(ParamDoc::from).collect(),
            mod_name: module.name.clone(),
            mod_layer: module.layer.clone(),
        }
    }
}

impl Serialize for ComponentDoc {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let prefix = self.kind.tag();
        let mut map = serializer.serialize_map(Some(7))?;
        map.serialize_entry(&format!("{prefix}_name"), &self.name)?;
        map.serialize_entry(&format!("{prefix}_summary"), &self.summary)?;
        map.serialize_entry(&format!("{prefix}_desc"), &self.desc)?;
        map.serialize_entry(&format!("{prefix}_secdesc"), &self.secdesc)?;
        map.serialize_entry(&format!("{prefix}_parameters"), &self.parameters)?;
        map.serialize_entry("mod_name", &self.mod_name)?;
        map.serialize_entry("mod_layer", &self.mod_layer)?;
        map.end()
    }
}

/// Everything needed to render one module page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModulePage {
    pub layer: String,
    pub name: String,
    /// HTML; empty when the module has no summary
    pub summary: String,
    /// HTML; empty when the module has no description
    pub desc: String,
    pub interfaces: Vec<ComponentDoc>,
    pub templates: Vec<ComponentDoc>,
}

impl ModulePage {
    /// File name of the page, relative to the output root
    pub fn file_name(&self) -> String {
        format!("{}_{}.html", self.layer, self.name)
    }
}

/// Per-module pages plus the two all-modules listings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assembly {
    pub pages: Vec<ModulePage>,
    pub all_interfaces: Vec<ComponentDoc>,
    pub all_templates: Vec<ComponentDoc>,
}

/// Collect and sort the interfaces and templates of one module.
pub fn assemble_module(module: &Module) -> ModulePage {
    ModulePage {
        layer: module.layer.clone(),
        name: module.name.clone(),
        summary: module.summary.as_ref().map(to_html).unwrap_or_default(),
        desc: module.desc.as_ref().map(to_html).unwrap_or_default(),
        interfaces: sorted_components(module, ComponentKind::Interface),
        templates: sorted_components(module, ComponentKind::Template),
    }
}

/// Assemble every module page and the global listings.
///
/// Pages stay in document order; each listing is sorted by name. Sorting is
/// stable, so equal names keep document order.
pub fn assemble(doc: &PolicyDocument) -> Assembly {
    let mut assembly = Assembly::default();
    for module in doc.modules() {
        let page = assemble_module(module);
        assembly.all_interfaces.extend(page.interfaces.iter().cloned());
        assembly.all_templates.extend(page.templates.iter().cloned());
        assembly.pages.push(page);
    }
    sort_by_name(&mut assembly.all_interfaces);
    sort_by_name(&mut assembly.all_templates);
    assembly
}

fn sorted_components(module: &Module, kind: ComponentKind) -> Vec<ComponentDoc> {
    let mut docs: Vec<_> = module
        .components(kind)
        .iter()
        .map(|c| ComponentDoc::new(c, module))
        .collect();
    sort_by_name(&mut docs);
    docs
}

fn sort_by_name(docs: &mut [ComponentDoc]) {
    docs.sort_by(|a, b| a.name.cmp(&b.name));
}
