/// A loaded policy document.
///
/// Owns every layer, module and tunable. Nothing in the crate mutates it after
/// [`load_policy`](super::load_policy) returns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolicyDocument {
    pub layers: Vec<Layer>,
    pub tunables: Vec<Tunable>,
}

impl PolicyDocument {
    /// All modules across all layers, in document order.
    pub fn modules(&self) -> impl Iterator<Item = &Module> {
        self.layers.iter().flat_map(|layer| layer.modules.iter())
    }

    pub fn find_module(&self, name: &str) -> Option<&Module> {
        self.modules().find(|m| m.name == name)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layer {
    pub name: String,
    pub modules: Vec<Module>,
}

/// A policy module and the building blocks it exports.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Module {
    pub name: String,
    /// Name of the containing layer.
    pub layer: String,
    pub summary: Option<Description>,
    pub desc: Option<Description>,
    pub interfaces: Vec<Component>,
    pub templates: Vec<Component>,
}

impl Module {
    pub fn components(&self, kind: ComponentKind) -> &[Component] {
        match kind {
            ComponentKind::Interface => &self.interfaces,
            ComponentKind::Template => &self.templates,
        }
    }
}

/// Interfaces and templates share one shape; only the element tag differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Interface,
    Template,
}

impl ComponentKind {
    pub fn tag(self) -> &'static str {
        match self {
            ComponentKind::Interface => "interface",
            ComponentKind::Template => "template",
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// An interface or template declared by a module.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub kind: ComponentKind,
    pub name: String,
    pub summary: Option<Description>,
    pub desc: Option<Description>,
    pub secdesc: Option<Description>,
    pub params: Vec<Parameter>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub desc: String,
    pub optional: bool,
}

/// A global boolean setting with a document-declared default.
#[derive(Debug, Clone, PartialEq)]
pub struct Tunable {
    pub name: String,
    /// Raw `dftval` attribute; normally `"true"` or `"false"`.
    pub default: Option<String>,
    pub desc: Description,
}

/// Descriptive markup: raw text runs and paragraphs, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Description {
    pub nodes: Vec<DescNode>,
}

impl Description {
    pub fn new(nodes: Vec<DescNode>) -> Self {
        Self { nodes }
    }

    /// Shorthand for a description made of a single text run.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            nodes: vec![DescNode::Text(text.into())],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescNode {
    Text(String),
    /// `<p>` element: its leading text and the items of each nested `<ul>`.
    Paragraph { text: String, lists: Vec<Vec<String>> },
}

impl DescNode {
    pub fn paragraph(text: impl Into<String>) -> Self {
        DescNode::Paragraph {
            text: text.into(),
            lists: Vec::new(),
        }
    }

    pub fn paragraph_with_list<I, S>(text: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        DescNode::Paragraph {
            text: text.into(),
            lists: vec![items.into_iter().map(Into::into).collect()],
        }
    }
}
