use crate::policy::PolicyDocument;
use crate::render::to_html_opt;
use serde::Serialize;
use std::collections::BTreeMap;

/// Which layer a menu expands
///
/// `Global` is the explicit "no layer" choice. `Layer("")` is a real layer
/// whose name happens to be empty and is not the same thing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuScope<'a> {
    Global,
    Layer(&'a str),
}

impl<'a> MenuScope<'a> {
    fn expands(&self, layer: &str) -> bool {
        match self {
            MenuScope::Global => true,
            MenuScope::Layer(name) => *name == layer,
        }
    }

    pub fn layer(&self) -> Option<&'a str> {
        match self {
            MenuScope::Global => None,
            MenuScope::Layer(name) => Some(*name),
        }
    }
}

/// Module link inside a menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub name: String,
    /// HTML summary of the module
    pub summary: String,
}

/// A layer heading and, when expanded, its modules
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuLayer {
    pub layer: String,
    pub modules: Vec<MenuEntry>,
}

/// Layer → module → HTML summary, built in one pass over the document.
///
/// `BTreeMap` keeps both levels sorted so menus come out in the same order on
/// every run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleIndex {
    layers: BTreeMap<String, BTreeMap<String, String>>,
}

impl ModuleIndex {
    pub fn build(doc: &PolicyDocument) -> Self {
        let mut layers: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();
        for module in doc.modules() {
            layers
                .entry(module.layer.clone())
                .or_default()
                .insert(module.name.clone(), to_html_opt(module.summary.as_ref()));
        }
        Self { layers }
    }

    /// Layer names in sorted order
    pub fn layers(&self) -> impl Iterator<Item = &str> {
        self.layers.keys().map(String::as_str)
    }

    pub fn summary(&self, layer: &str, module: &str) -> Option<&str> {
        self.layers
            .get(layer)
            .and_then(|mods| mods.get(module))
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Every layer is listed; only the layers in `scope` list their modules.
    pub fn menu(&self, scope: MenuScope<'_>) -> Vec<MenuLayer> {
        self.layers
            .iter()
            .map(|(layer, modules)| MenuLayer {
                layer: layer.clone(),
                modules: if scope.expands(layer) {
                    modules
                        .iter()
                        .map(|(name, summary)| MenuEntry {
                            name: name.clone(),
                            summary: summary.clone(),
                        })
                        .collect()
                } else {
                    Vec::new()
                },
            })
            .collect()
    }
}
